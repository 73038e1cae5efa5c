//! Event index construction.
//!
//! Maps each captured event's identifier value to its type tag so the step
//! filter can check, in constant time, whether a step has a matching event.

use std::collections::HashMap;

use recital_error::{FlowError, FlowErrorKind};

use crate::model::CapturedEvent;

/// Lookup from event-identifier value to event type.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventIndex(HashMap<String, String>);

impl EventIndex {
    /// True if `id` belongs to some captured event.
    pub fn contains(&self, id: &str) -> bool {
        self.0.contains_key(id)
    }

    /// The type tag of the event with identifier `id`.
    pub fn event_type(&self, id: &str) -> Option<&str> {
        self.0.get(id).map(String::as_str)
    }

    /// Number of indexed events.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if no events were indexed.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Build an [`EventIndex`] from the captured-event sequence.
///
/// For each event, the identifier field is `{type}Id` when present. When
/// that formula does not hold, the first field (in source order) whose name
/// ends in `Id`, excluding `frameId`, is used instead. Fails with
/// [`FlowErrorKind::MalformedEvent`] if no qualifying field exists.
#[tracing::instrument(skip(events), fields(events = events.len()))]
pub fn build_event_index(events: &[CapturedEvent]) -> Result<EventIndex, FlowError> {
    let mut index = HashMap::with_capacity(events.len());
    for (position, event) in events.iter().enumerate() {
        let id = resolve_identifier(event).ok_or_else(|| {
            FlowError::new(FlowErrorKind::MalformedEvent {
                position,
                event_type: event.event_type.clone(),
            })
        })?;
        index.insert(id, event.event_type.clone());
    }
    Ok(EventIndex(index))
}

/// The identifier value of one event, if any field qualifies.
fn resolve_identifier(event: &CapturedEvent) -> Option<String> {
    let formula_key = format!("{}Id", event.event_type);
    if let Some(value) = event.fields.get(&formula_key) {
        return identifier_value(value);
    }
    event
        .fields
        .iter()
        .find(|(key, _)| key.ends_with("Id") && key.as_str() != "frameId")
        .and_then(|(_, value)| identifier_value(value))
}

/// Normalize an identifier value to a string. Identifiers arrive as JSON
/// strings or numbers depending on the recorder version.
fn identifier_value(value: &serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::String(s) => Some(s.clone()),
        serde_json::Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
