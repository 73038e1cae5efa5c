//! Step filtering and field extraction.
//!
//! Walks the ordered step sequence, keeps anchors and steps with a matching
//! captured event, and normalizes each kept step into a sparse set of
//! labeled fields. Absent data is omitted, never defaulted.

use derive_getters::Getters;

use recital_error::{FlowError, FlowErrorKind};

use crate::index::EventIndex;
use crate::model::{ChapterStep, ImageStep, Step, VideoStep};

/// Fixed annotation attached to every extracted anchor step.
const ANCHOR_NOTE: &str = "Start of a new section of the walkthrough";

/// A sparse, ordered mapping of human-readable field labels to values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedFields(Vec<(&'static str, String)>);

impl ExtractedFields {
    fn push(&mut self, label: &'static str, value: impl Into<String>) {
        self.0.push((label, value.into()));
    }

    /// The value for `label`, if extracted.
    pub fn get(&self, label: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(key, _)| *key == label)
            .map(|(_, value)| value.as_str())
    }

    /// Iterate over labels and values in extraction order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.0.iter().map(|(label, value)| (*label, value.as_str()))
    }

    /// Number of extracted fields.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if nothing was extracted.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Render as `Label: value` lines for inclusion in a prompt.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for (label, value) in &self.0 {
            out.push_str(label);
            out.push_str(": ");
            out.push_str(value);
            out.push('\n');
        }
        out
    }
}

/// Extracted fields paired with the originating step's position.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct ExtractedStep {
    /// Position of the step in the source sequence.
    position: usize,
    /// Fields extracted from the step.
    fields: ExtractedFields,
}

impl ExtractedStep {
    /// Pair extracted fields with their source position.
    pub fn new(position: usize, fields: ExtractedFields) -> Self {
        Self { position, fields }
    }
}

/// Filter the step sequence and extract fields from each kept step.
///
/// A step is kept when it is an anchor or its identifier appears in the
/// event index. An anchor in the final position is a sequence terminator,
/// not a real action, and ends processing. Step types outside the modeled
/// variants are never extracted.
#[tracing::instrument(skip(steps, index), fields(steps = steps.len()))]
pub fn extract_steps(steps: &[Step], index: &EventIndex) -> Result<Vec<ExtractedStep>, FlowError> {
    let mut extracted = Vec::new();
    let last = steps.len().saturating_sub(1);
    for (position, step) in steps.iter().enumerate() {
        if position == last && step.is_anchor() {
            break;
        }
        let has_event = step.id().is_some_and(|id| index.contains(id));
        if !step.is_anchor() && !has_event {
            continue;
        }
        let fields = match step {
            Step::Chapter(chapter) => chapter_fields(chapter),
            Step::Image(image) => image_fields(image, position)?,
            Step::Video(video) => video_fields(video, position)?,
            Step::Other => continue,
        };
        extracted.push(ExtractedStep::new(position, fields));
    }
    Ok(extracted)
}

fn chapter_fields(step: &ChapterStep) -> ExtractedFields {
    let mut fields = ExtractedFields::default();
    fields.push("Note", ANCHOR_NOTE);
    if let Some(title) = non_empty(step.title.as_deref()) {
        fields.push("Title", title);
    }
    if let Some(subtitle) = non_empty(step.subtitle.as_deref()) {
        fields.push("Subtitle", subtitle);
    }
    // Only the first path matters: anchors offer a single effective
    // continuation for the recorded user.
    if let Some(path) = step.paths.as_ref().and_then(|paths| paths.first()) {
        if let Some(text) = non_empty(path.button_text.as_deref()) {
            fields.push("Next Button - Text", format!("Click Button Text: {text}"));
        }
        if let Some(color) = non_empty(path.button_color.as_deref()) {
            fields.push("Next Button - Color", format!("Click Button Color: {color}"));
        }
    }
    fields
}

fn image_fields(step: &ImageStep, position: usize) -> Result<ExtractedFields, FlowError> {
    let mut fields = ExtractedFields::default();
    let url = step.url.as_deref().ok_or_else(|| {
        FlowError::new(FlowErrorKind::MissingRequiredField {
            position,
            step_type: "IMAGE",
            field: "Image Url",
        })
    })?;
    fields.push("Image Url", url);
    if let Some(label) = first_hotspot_label(step.hotspots.as_deref()) {
        fields.push("User Action", label);
    }
    if let Some(page_url) = step
        .page_context
        .as_ref()
        .and_then(|ctx| ctx.url.as_deref())
    {
        // Both fields carry the page url. An inherited quirk, kept until the
        // recorder schema grows a distinct description field.
        fields.push("Page Url", page_url);
        fields.push("Page Description", page_url);
    }
    Ok(fields)
}

fn video_fields(step: &VideoStep, position: usize) -> Result<ExtractedFields, FlowError> {
    let mut fields = ExtractedFields::default();
    let url = step.url.as_deref().ok_or_else(|| {
        FlowError::new(FlowErrorKind::MissingRequiredField {
            position,
            step_type: "VIDEO",
            field: "Image Url",
        })
    })?;
    fields.push("Image Url", url);
    if let Some(label) = first_hotspot_label(step.hotspots.as_deref()) {
        fields.push("User Action", label);
    }
    Ok(fields)
}

fn first_hotspot_label(hotspots: Option<&[crate::model::Hotspot]>) -> Option<&str> {
    hotspots
        .and_then(|spots| spots.first())
        .and_then(|spot| spot.label.as_deref())
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::build_event_index;
    use crate::model::CapturedEvent;

    fn steps(raw: &str) -> Vec<Step> {
        serde_json::from_str(raw).unwrap()
    }

    fn index_of(raw: &str) -> EventIndex {
        let events: Vec<CapturedEvent> = serde_json::from_str(raw).unwrap();
        build_event_index(&events).unwrap()
    }

    #[test]
    fn anchor_image_terminal_anchor_scenario() {
        let steps = steps(
            r#"[
                {"type": "CHAPTER", "id": "s1", "title": "Welcome", "subtitle": "",
                 "paths": [{"buttonText": "Start", "buttonColor": "blue"}]},
                {"type": "IMAGE", "id": "s2", "url": "a.png",
                 "hotspots": [{"label": "Opened menu"}],
                 "pageContext": {"url": "site.com/page"}},
                {"type": "CHAPTER", "id": "s3", "title": "Done", "subtitle": ""}
            ]"#,
        );
        let index = index_of(r#"[{"type": "click", "clickId": "s2"}]"#);
        let extracted = extract_steps(&steps, &index).unwrap();
        assert_eq!(extracted.len(), 2);

        let anchor = extracted[0].fields();
        assert_eq!(anchor.get("Title"), Some("Welcome"));
        assert_eq!(anchor.get("Subtitle"), None);
        assert_eq!(
            anchor.get("Next Button - Text"),
            Some("Click Button Text: Start")
        );
        assert_eq!(
            anchor.get("Next Button - Color"),
            Some("Click Button Color: blue")
        );

        let image = extracted[1].fields();
        assert_eq!(image.get("Image Url"), Some("a.png"));
        assert_eq!(image.get("User Action"), Some("Opened menu"));
        assert_eq!(image.get("Page Url"), Some("site.com/page"));
        assert_eq!(image.get("Page Description"), Some("site.com/page"));
        assert_eq!(*extracted[1].position(), 1);
    }

    #[test]
    fn non_anchor_steps_without_events_are_skipped() {
        let steps = steps(
            r#"[
                {"type": "IMAGE", "id": "seen", "url": "a.png"},
                {"type": "IMAGE", "id": "unseen", "url": "b.png"},
                {"type": "VIDEO", "id": "clip", "url": "c.mp4"}
            ]"#,
        );
        let index = index_of(
            r#"[{"type": "click", "clickId": "seen"}, {"type": "click", "clickId": "clip"}]"#,
        );
        let extracted = extract_steps(&steps, &index).unwrap();
        assert_eq!(extracted.len(), 2);
        assert_eq!(extracted[0].fields().get("Image Url"), Some("a.png"));
        assert_eq!(extracted[1].fields().get("Image Url"), Some("c.mp4"));
    }

    #[test]
    fn mid_sequence_anchor_is_kept_without_an_event() {
        let steps = steps(
            r#"[
                {"type": "CHAPTER", "id": "a1", "title": "Part One", "subtitle": "Basics"},
                {"type": "IMAGE", "id": "s1", "url": "a.png"}
            ]"#,
        );
        let index = index_of(r#"[{"type": "click", "clickId": "s1"}]"#);
        let extracted = extract_steps(&steps, &index).unwrap();
        assert_eq!(extracted.len(), 2);
        assert_eq!(extracted[0].fields().get("Title"), Some("Part One"));
        assert_eq!(extracted[0].fields().get("Subtitle"), Some("Basics"));
    }

    #[test]
    fn image_without_hotspots_omits_user_action() {
        let steps = steps(r#"[{"type": "IMAGE", "id": "s1", "url": "a.png", "hotspots": []}]"#);
        let index = index_of(r#"[{"type": "click", "clickId": "s1"}]"#);
        let extracted = extract_steps(&steps, &index).unwrap();
        assert_eq!(extracted[0].fields().get("User Action"), None);
    }

    #[test]
    fn image_without_url_is_a_data_error() {
        let steps = steps(r#"[{"type": "IMAGE", "id": "s1"}]"#);
        let index = index_of(r#"[{"type": "click", "clickId": "s1"}]"#);
        let err = extract_steps(&steps, &index).unwrap_err();
        match err.kind {
            FlowErrorKind::MissingRequiredField {
                position,
                step_type,
                field,
            } => {
                assert_eq!(position, 0);
                assert_eq!(step_type, "IMAGE");
                assert_eq!(field, "Image Url");
            }
            other => panic!("unexpected error kind: {other:?}"),
        }
    }

    #[test]
    fn unmodeled_step_types_are_never_extracted() {
        let steps = steps(
            r#"[
                {"type": "TOOLTIP", "id": "t1"},
                {"type": "IMAGE", "id": "s1", "url": "a.png"}
            ]"#,
        );
        let index = index_of(
            r#"[{"type": "hover", "hoverId": "t1"}, {"type": "click", "clickId": "s1"}]"#,
        );
        let extracted = extract_steps(&steps, &index).unwrap();
        assert_eq!(extracted.len(), 1);
    }

    #[test]
    fn terminal_anchor_only_applies_at_final_position() {
        let steps = steps(
            r#"[
                {"type": "CHAPTER", "id": "a1", "title": "Only", "subtitle": ""}
            ]"#,
        );
        let index = index_of("[]");
        let extracted = extract_steps(&steps, &index).unwrap();
        assert!(extracted.is_empty());
    }
}
