//! Cross-step refinement.
//!
//! One backend call over the whole ordered sentence list: removes context
//! repeated across entries, smooths phrasing, and normalizes tense, without
//! adding or removing entries. The returned count is verified against the
//! input and a mismatch is retried before becoming fatal.

use tracing::{debug, instrument, warn};

use recital_core::{GenerateRequest, Message};
use recital_error::{PipelineError, PipelineErrorKind, RecitalResult};
use recital_interface::TextGenerator;

use crate::config::PipelineConfig;

/// Instruction for refining the sentence list. States what the backend may
/// change and, more importantly, what it may not.
const REFINE_SYSTEM_PROMPT: &str = "\
You refine a numbered list of sentences describing consecutive steps of one \
recorded product walkthrough.

You may only:
1. Delete context that repeats across two or more entries, such as a site \
name stated in every sentence. Keep it in its first occurrence.
2. Smooth awkward phrasing.
3. Normalize every sentence to past tense.

You must not:
- Add or remove list entries. The output list has exactly as many entries \
as the input list.
- Remove a descriptive qualifier that appears in only one entry.

Respond with only the numbered list, one entry per line, in the same order.";

/// Refine the ordered sentence list, preserving cardinality.
///
/// An empty list is returned as-is without a backend call. A response whose
/// entry count differs from the input is re-requested up to the configured
/// number of contract retries, then fails with
/// [`PipelineErrorKind::RefinementCountMismatch`].
#[instrument(skip(generator, sentences, config), fields(sentences = sentences.len()))]
pub async fn refine_sentences<G>(
    generator: &G,
    sentences: &[String],
    config: &PipelineConfig,
) -> RecitalResult<Vec<String>>
where
    G: TextGenerator + ?Sized,
{
    if sentences.is_empty() {
        debug!("No sentences to refine, skipping refinement stage");
        return Ok(Vec::new());
    }

    let request = GenerateRequest {
        messages: vec![
            Message::system(REFINE_SYSTEM_PROMPT),
            Message::user(render_numbered_list(sentences)),
        ],
        max_tokens: Some(config.generation.refine_max_tokens),
        temperature: Some(config.generation.refine_temperature),
        model: Some(config.models.refine.clone()),
    };

    let mut attempts_left = config.pipeline.contract_retries;
    loop {
        let response = generator.generate(&request).await?;
        let refined = parse_list_items(&response.text);
        if refined.len() == sentences.len() {
            debug!(entries = refined.len(), "Refined sentence list");
            return Ok(refined);
        }
        if attempts_left == 0 {
            return Err(PipelineError::new(PipelineErrorKind::RefinementCountMismatch {
                expected: sentences.len(),
                actual: refined.len(),
            })
            .into());
        }
        warn!(
            expected = sentences.len(),
            actual = refined.len(),
            attempts_left,
            "Refined list count mismatch, re-requesting"
        );
        attempts_left -= 1;
    }
}

/// Render sentences as a `1.`-numbered list for the prompt.
fn render_numbered_list(sentences: &[String]) -> String {
    let mut out = String::new();
    for (i, sentence) in sentences.iter().enumerate() {
        out.push_str(&format!("{}. {}\n", i + 1, sentence));
    }
    out
}

/// Parse list entries out of a generated response.
///
/// Accepts `1.`/`1)` numbering as well as `-`/`*` bullets, and falls back
/// to treating a bare non-empty line as an entry.
pub(crate) fn parse_list_items(text: &str) -> Vec<String> {
    text.lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                return None;
            }
            Some(strip_list_marker(trimmed).to_string())
        })
        .collect()
}

fn strip_list_marker(line: &str) -> &str {
    if let Some(rest) = line.strip_prefix("- ").or_else(|| line.strip_prefix("* ")) {
        return rest.trim();
    }
    let digits = line.chars().take_while(char::is_ascii_digit).count();
    if digits > 0 {
        let rest = &line[digits..];
        if let Some(rest) = rest.strip_prefix(". ").or_else(|| rest.strip_prefix(") ")) {
            return rest.trim();
        }
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_one_based_numbering() {
        let sentences = vec!["Clicked start".to_string(), "Opened menu".to_string()];
        assert_eq!(render_numbered_list(&sentences), "1. Clicked start\n2. Opened menu\n");
    }

    #[test]
    fn parses_numbered_and_bulleted_entries() {
        let text = "1. Clicked start\n2) Opened menu\n- Scrolled down\n* Closed dialog\n";
        assert_eq!(
            parse_list_items(text),
            ["Clicked start", "Opened menu", "Scrolled down", "Closed dialog"]
        );
    }

    #[test]
    fn blank_lines_are_not_entries() {
        let text = "1. Clicked start\n\n\n2. Opened menu\n";
        assert_eq!(parse_list_items(text), ["Clicked start", "Opened menu"]);
    }

    #[test]
    fn bare_lines_count_as_entries() {
        let text = "Clicked start\nOpened menu\n";
        assert_eq!(parse_list_items(text), ["Clicked start", "Opened menu"]);
    }
}
