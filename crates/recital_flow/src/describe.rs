//! Per-step description.
//!
//! Turns each extracted field set into one short past-tense sentence via the
//! text-generation backend. Calls are independent, so they run through a
//! bounded worker pool; results are reassembled in step order before the
//! refiner sees them.

use futures::stream::{self, StreamExt, TryStreamExt};
use tracing::{debug, instrument};

use recital_core::{GenerateRequest, Message};
use recital_error::RecitalResult;
use recital_interface::TextGenerator;

use crate::config::PipelineConfig;
use crate::extract::ExtractedStep;

/// Instruction for describing one step. States the field precedence and the
/// output contract (length, tense, no quoting).
const DESCRIBE_SYSTEM_PROMPT: &str = "\
You describe one step of a recorded product walkthrough as a single sentence.

You receive a set of labeled fields. Use them in this order of priority:
1. 'User Action' is the primary signal when present. Otherwise use 'Title', \
'Subtitle', and 'Note'.
2. 'Page Description' and 'Image Url' are secondary context.
3. 'Page Url' is tertiary context.

Respond with exactly one sentence of 5 to 9 words. Start with an action verb, \
use past tense, and do not wrap the sentence in quotation marks.";

/// Describe every extracted step, preserving step order.
///
/// Each step costs one backend call; up to `describe_concurrency` calls run
/// at a time. Any failed call fails the whole stage so that downstream
/// stages never see a list misaligned with the step sequence.
#[instrument(skip(generator, steps, config), fields(steps = steps.len()))]
pub async fn describe_steps<G>(
    generator: &G,
    steps: &[ExtractedStep],
    config: &PipelineConfig,
) -> RecitalResult<Vec<String>>
where
    G: TextGenerator + ?Sized,
{
    if steps.is_empty() {
        debug!("No extracted steps, skipping description stage");
        return Ok(Vec::new());
    }
    let concurrency = config.pipeline.describe_concurrency.max(1);
    stream::iter(steps)
        .map(|step| describe_step(generator, step, config))
        .buffered(concurrency)
        .try_collect()
        .await
}

/// Describe a single step.
async fn describe_step<G>(
    generator: &G,
    step: &ExtractedStep,
    config: &PipelineConfig,
) -> RecitalResult<String>
where
    G: TextGenerator + ?Sized,
{
    let request = GenerateRequest {
        messages: vec![
            Message::system(DESCRIBE_SYSTEM_PROMPT),
            Message::user(step.fields().render()),
        ],
        max_tokens: Some(config.generation.describe_max_tokens),
        temperature: Some(config.generation.describe_temperature),
        model: Some(config.models.describe.clone()),
    };
    let response = generator.generate(&request).await?;
    let sentence = tidy_sentence(&response.text);
    debug!(position = step.position(), sentence = %sentence, "Described step");
    Ok(sentence)
}

/// Strip whitespace and wrapping quotes. The length and tense contract is
/// enforced by instruction only, but stray quoting is cheap to repair here.
fn tidy_sentence(raw: &str) -> String {
    let mut text = raw.trim();
    loop {
        let stripped = text
            .strip_prefix('"')
            .and_then(|t| t.strip_suffix('"'))
            .or_else(|| text.strip_prefix('\'').and_then(|t| t.strip_suffix('\'')));
        match stripped {
            Some(inner) => text = inner.trim(),
            None => break,
        }
    }
    text.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tidy_strips_wrapping_quotes() {
        assert_eq!(tidy_sentence("\"Clicked the start button\""), "Clicked the start button");
        assert_eq!(tidy_sentence("'Opened the menu'"), "Opened the menu");
        assert_eq!(tidy_sentence("  Scrolled the page  "), "Scrolled the page");
    }

    #[test]
    fn tidy_keeps_interior_quotes() {
        assert_eq!(
            tidy_sentence("Clicked the \"Start\" button"),
            "Clicked the \"Start\" button"
        );
    }

    #[test]
    fn tidy_handles_nested_wrapping() {
        assert_eq!(tidy_sentence("\"'Opened the menu'\""), "Opened the menu");
    }
}
