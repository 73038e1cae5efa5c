//! Narrative summarization.
//!
//! One backend call over the refined list produces the final two-section
//! document. The list portion of the response is parsed back out and checked
//! against the input; the backend may phrase the summary, but it may not
//! touch the list. The document is then reassembled canonically from the
//! input list, so formatting drift in the response never reaches the output.

use tracing::{debug, instrument, warn};

use recital_core::{GenerateRequest, Message};
use recital_error::{PipelineError, PipelineErrorKind, RecitalResult};
use recital_interface::TextGenerator;

use crate::config::PipelineConfig;
use crate::report::{INTERACTIONS_HEADING, SUMMARY_HEADING, SummaryDocument};

/// Instruction for producing the two-section document.
const SUMMARIZE_SYSTEM_PROMPT: &str = "\
You receive a bulleted list of sentences describing, in order, the steps of \
one recorded product walkthrough.

Produce a markdown document with exactly two sections:
1. A '## User Interactions' heading followed by the input list, reproduced \
verbatim as markdown bullets. Do not reword, reorder, add, or remove entries.
2. A '## Summary' heading followed by one short paragraph describing the \
overarching activity the user performed.

Respond with only the markdown document.";

/// Fixed summary used when the flow yielded no interactions at all.
const EMPTY_FLOW_SUMMARY: &str = "No user interactions were recorded in this flow.";

/// Produce the final [`SummaryDocument`] from the refined sentence list.
///
/// An empty list short-circuits to a fixed document without a backend call.
/// A response whose list portion diverges from the input is re-requested up
/// to the configured number of contract retries, then fails with
/// [`PipelineErrorKind::SummaryFormatViolation`].
#[instrument(skip(generator, sentences, config), fields(sentences = sentences.len()))]
pub async fn summarize_sentences<G>(
    generator: &G,
    sentences: &[String],
    config: &PipelineConfig,
) -> RecitalResult<SummaryDocument>
where
    G: TextGenerator + ?Sized,
{
    if sentences.is_empty() {
        debug!("No sentences to summarize, emitting fixed empty-flow document");
        return Ok(SummaryDocument::new(Vec::new(), EMPTY_FLOW_SUMMARY));
    }

    let request = GenerateRequest {
        messages: vec![
            Message::system(SUMMARIZE_SYSTEM_PROMPT),
            Message::user(render_bulleted_list(sentences)),
        ],
        max_tokens: Some(config.generation.summarize_max_tokens),
        temperature: Some(config.generation.summarize_temperature),
        model: Some(config.models.summarize.clone()),
    };

    let mut attempts_left = config.pipeline.contract_retries;
    loop {
        let response = generator.generate(&request).await?;
        match validate_response(&response.text, sentences) {
            Ok(summary) => {
                debug!("Summary document validated");
                // Reassemble from the input list: the backend's list text is
                // checked, never trusted into the artifact.
                return Ok(SummaryDocument::new(sentences.to_vec(), summary));
            }
            Err(violation) if attempts_left > 0 => {
                warn!(%violation, attempts_left, "Summary contract violation, re-requesting");
                attempts_left -= 1;
            }
            Err(violation) => {
                return Err(PipelineError::new(PipelineErrorKind::SummaryFormatViolation(
                    violation,
                ))
                .into());
            }
        }
    }
}

/// Check that the response carries both sections and that its list equals
/// the input. Returns the summary paragraph on success.
fn validate_response(text: &str, expected: &[String]) -> Result<String, String> {
    let document = SummaryDocument::parse(text)?;
    let returned = document.interactions();
    if returned.len() != expected.len() {
        return Err(format!(
            "'{INTERACTIONS_HEADING}' section has {} entries, expected {}",
            returned.len(),
            expected.len()
        ));
    }
    for (position, (got, want)) in returned.iter().zip(expected).enumerate() {
        if got.trim() != want.trim() {
            return Err(format!(
                "'{INTERACTIONS_HEADING}' entry {} was altered: got '{}', expected '{}'",
                position + 1,
                got,
                want
            ));
        }
    }
    if document.summary().trim().is_empty() {
        return Err(format!("'{SUMMARY_HEADING}' section is empty"));
    }
    Ok(document.summary().clone())
}

fn render_bulleted_list(sentences: &[String]) -> String {
    let mut out = String::new();
    for sentence in sentences {
        out.push_str("- ");
        out.push_str(sentence);
        out.push('\n');
    }
    out
}
