//! Data model for recorded flow logs.
//!
//! A flow log carries two ordered sequences: `capturedEvents`, the low-level
//! interaction records, and `steps`, the walkthrough nodes shown to the user.
//! Both are read once from disk and never mutated.

use serde::Deserialize;
use std::path::Path;

use recital_error::{FlowError, FlowErrorKind};

/// A complete recorded flow log.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowRecording {
    /// Low-level interaction records, in capture order.
    #[serde(default)]
    pub captured_events: Vec<CapturedEvent>,
    /// Walkthrough steps, in presentation order.
    #[serde(default)]
    pub steps: Vec<Step>,
}

impl FlowRecording {
    /// Read and parse a flow log from disk.
    #[tracing::instrument]
    pub fn from_file(path: impl AsRef<Path> + std::fmt::Debug) -> Result<Self, FlowError> {
        let raw = std::fs::read_to_string(path.as_ref())
            .map_err(|e| FlowError::new(FlowErrorKind::FileRead(e.to_string())))?;
        serde_json::from_str(&raw)
            .map_err(|e| FlowError::new(FlowErrorKind::JsonParse(e.to_string())))
    }
}

/// A low-level interaction record.
///
/// Beyond its `type` tag, an event's shape is type-specific, so the remaining
/// fields are kept as a raw map. Field order is preserved from the source
/// record because identifier resolution takes the first qualifying field.
#[derive(Debug, Clone, Deserialize)]
pub struct CapturedEvent {
    /// Type tag, e.g. `"click"` or `"navigation"`.
    #[serde(rename = "type")]
    pub event_type: String,
    /// All remaining fields of the record, in source order.
    #[serde(flatten)]
    pub fields: serde_json::Map<String, serde_json::Value>,
}

/// One node in the ordered step sequence.
///
/// Tagged by `type`; unrecognized types deserialize as [`Step::Other`] and
/// are never extracted.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type")]
pub enum Step {
    /// Anchor step marking the start of a flow segment.
    #[serde(rename = "CHAPTER")]
    Chapter(ChapterStep),
    /// Image-backed checkpoint the user interacted with.
    #[serde(rename = "IMAGE")]
    Image(ImageStep),
    /// Short video-backed transitional clip.
    #[serde(rename = "VIDEO")]
    Video(VideoStep),
    /// Any step type the pipeline does not model.
    #[serde(other)]
    Other,
}

impl Step {
    /// The step's identifier, if its variant carries one.
    pub fn id(&self) -> Option<&str> {
        match self {
            Self::Chapter(step) => Some(&step.id),
            Self::Image(step) => Some(&step.id),
            Self::Video(step) => Some(&step.id),
            Self::Other => None,
        }
    }

    /// True for anchor (chapter) steps.
    pub fn is_anchor(&self) -> bool {
        matches!(self, Self::Chapter(_))
    }
}

/// An anchor step: title, optional subtitle, and continuation buttons.
#[derive(Debug, Clone, Deserialize)]
pub struct ChapterStep {
    /// Step identifier.
    pub id: String,
    /// Segment title.
    #[serde(default)]
    pub title: Option<String>,
    /// Segment subtitle, often empty.
    #[serde(default)]
    pub subtitle: Option<String>,
    /// Navigation paths out of the anchor. Only the first is meaningful:
    /// anchors offer a single effective continuation for the recorded user.
    #[serde(default)]
    pub paths: Option<Vec<NavigationPath>>,
}

/// A continuation button on an anchor step.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationPath {
    /// Button label text.
    #[serde(default)]
    pub button_text: Option<String>,
    /// Button color, as recorded.
    #[serde(default)]
    pub button_color: Option<String>,
}

/// An image-backed checkpoint step.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageStep {
    /// Step identifier.
    pub id: String,
    /// Screenshot URL. Required for extraction.
    #[serde(default)]
    pub url: Option<String>,
    /// Interactive regions overlaid on the image.
    #[serde(default)]
    pub hotspots: Option<Vec<Hotspot>>,
    /// Context of the page the screenshot was taken on.
    #[serde(default)]
    pub page_context: Option<PageContext>,
}

/// A video-backed clip step. Clips are not tied to a page, so there is no
/// page context.
#[derive(Debug, Clone, Deserialize)]
pub struct VideoStep {
    /// Step identifier.
    pub id: String,
    /// Clip URL. Required for extraction.
    #[serde(default)]
    pub url: Option<String>,
    /// Interactive regions overlaid on the clip.
    #[serde(default)]
    pub hotspots: Option<Vec<Hotspot>>,
}

/// An interactive region on a checkpoint or clip.
#[derive(Debug, Clone, Deserialize)]
pub struct Hotspot {
    /// Human-readable description of the interaction.
    #[serde(default)]
    pub label: Option<String>,
}

/// Page metadata attached to a checkpoint step.
#[derive(Debug, Clone, Deserialize)]
pub struct PageContext {
    /// URL of the page.
    #[serde(default)]
    pub url: Option<String>,
}
