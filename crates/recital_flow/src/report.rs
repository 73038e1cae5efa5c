//! The final markdown artifact.

use derive_getters::Getters;

/// Heading for the verbatim interaction list.
pub const INTERACTIONS_HEADING: &str = "User Interactions";
/// Heading for the synthesized prose paragraph.
pub const SUMMARY_HEADING: &str = "Summary";

/// The two-section markdown report: the refined interaction list, verbatim,
/// plus a short prose summary.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct SummaryDocument {
    /// Refined interaction sentences, in step order.
    interactions: Vec<String>,
    /// Synthesized summary paragraph.
    summary: String,
}

impl SummaryDocument {
    /// Assemble a document from its parts.
    pub fn new(interactions: Vec<String>, summary: impl Into<String>) -> Self {
        Self {
            interactions,
            summary: summary.into(),
        }
    }

    /// Render the canonical markdown form.
    pub fn to_markdown(&self) -> String {
        let mut out = format!("## {INTERACTIONS_HEADING}\n\n");
        for sentence in &self.interactions {
            out.push_str("- ");
            out.push_str(sentence);
            out.push('\n');
        }
        out.push_str(&format!("\n## {SUMMARY_HEADING}\n\n"));
        out.push_str(&self.summary);
        out.push('\n');
        out
    }

    /// Parse a generated markdown document back into its parts.
    ///
    /// Tolerant of heading level (`#` through `######`) and bullet style
    /// (`-`, `*`, or `1.`), since generated markdown varies in both. Fails
    /// with a description of the problem when either section is missing.
    pub fn parse(text: &str) -> Result<Self, String> {
        let mut interactions = Vec::new();
        let mut summary_lines: Vec<&str> = Vec::new();
        let mut section = Section::Preamble;
        let mut saw_interactions = false;

        for line in text.lines() {
            if let Some(heading) = heading_text(line) {
                section = if heading.eq_ignore_ascii_case(INTERACTIONS_HEADING) {
                    saw_interactions = true;
                    Section::Interactions
                } else if heading.eq_ignore_ascii_case(SUMMARY_HEADING) {
                    Section::Summary
                } else {
                    Section::Preamble
                };
                continue;
            }
            match section {
                Section::Interactions => {
                    if let Some(item) = bullet_text(line) {
                        interactions.push(item.to_string());
                    }
                }
                Section::Summary => {
                    if !line.trim().is_empty() {
                        summary_lines.push(line.trim());
                    }
                }
                Section::Preamble => {}
            }
        }

        if !saw_interactions {
            return Err(format!("missing '{INTERACTIONS_HEADING}' section"));
        }
        if summary_lines.is_empty() {
            return Err(format!("missing '{SUMMARY_HEADING}' section"));
        }
        Ok(Self::new(interactions, summary_lines.join(" ")))
    }
}

enum Section {
    Preamble,
    Interactions,
    Summary,
}

/// The text of a markdown ATX heading, if `line` is one.
fn heading_text(line: &str) -> Option<&str> {
    let trimmed = line.trim_start();
    let hashes = trimmed.chars().take_while(|c| *c == '#').count();
    if hashes == 0 || hashes > 6 {
        return None;
    }
    let rest = &trimmed[hashes..];
    rest.strip_prefix(' ').map(str::trim).or_else(|| {
        // Headings without a space after the hashes still occur in
        // generated output.
        (!rest.is_empty()).then(|| rest.trim())
    })
}

/// The text of a markdown list item, if `line` is one.
fn bullet_text(line: &str) -> Option<&str> {
    let trimmed = line.trim_start();
    if let Some(rest) = trimmed.strip_prefix("- ").or_else(|| trimmed.strip_prefix("* ")) {
        return Some(rest.trim());
    }
    // Numbered list: digits, a dot or paren, a space.
    let digits = trimmed.chars().take_while(char::is_ascii_digit).count();
    if digits > 0 {
        let rest = &trimmed[digits..];
        if let Some(rest) = rest.strip_prefix(". ").or_else(|| rest.strip_prefix(") ")) {
            return Some(rest.trim());
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_canonical_markdown() {
        let doc = SummaryDocument::new(
            vec!["Clicked the start button".to_string(), "Opened the menu".to_string()],
            "The user began the walkthrough and explored the menu.",
        );
        let markdown = doc.to_markdown();
        assert!(markdown.starts_with("## User Interactions\n\n- Clicked the start button\n"));
        assert!(markdown.contains("\n## Summary\n\nThe user began the walkthrough"));
    }

    #[test]
    fn round_trips_through_parse() {
        let doc = SummaryDocument::new(
            vec!["Clicked the start button".to_string(), "Opened the menu".to_string()],
            "The user began the walkthrough.",
        );
        let parsed = SummaryDocument::parse(&doc.to_markdown()).unwrap();
        assert_eq!(parsed, doc);
    }

    #[test]
    fn tolerates_heading_level_and_bullet_style() {
        let text = "# User Interactions\n* Clicked the start button\n1. Opened the menu\n\n### Summary\nA short walkthrough.\nAcross two lines.\n";
        let parsed = SummaryDocument::parse(text).unwrap();
        assert_eq!(
            parsed.interactions(),
            &["Clicked the start button".to_string(), "Opened the menu".to_string()]
        );
        assert_eq!(parsed.summary(), "A short walkthrough. Across two lines.");
    }

    #[test]
    fn missing_summary_section_is_an_error() {
        let text = "## User Interactions\n- Clicked the start button\n";
        let err = SummaryDocument::parse(text).unwrap_err();
        assert!(err.contains("Summary"));
    }

    #[test]
    fn missing_interactions_section_is_an_error() {
        let text = "Some preamble without headings.\n";
        let err = SummaryDocument::parse(text).unwrap_err();
        assert!(err.contains("User Interactions"));
    }

    #[test]
    fn empty_interaction_list_round_trips() {
        let doc = SummaryDocument::new(Vec::new(), "No user interactions were recorded.");
        let parsed = SummaryDocument::parse(&doc.to_markdown()).unwrap();
        assert!(parsed.interactions().is_empty());
        assert_eq!(parsed.summary(), "No user interactions were recorded.");
    }
}
