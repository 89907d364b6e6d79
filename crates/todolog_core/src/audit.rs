//! Structured audit logging contract and sinks.
//!
//! # Responsibility
//! - Define the fire-and-forget logger contract injected into the
//!   lifecycle service.
//! - Render one stable `key=value` diagnostic line per entry through the
//!   process `log` facade.
//!
//! # Invariants
//! - `log` never fails observably to the caller.
//! - Metadata preserves insertion order in rendered output.
//! - Rendered values are sanitized (no raw newlines, bounded length).

use crate::logging::sanitize_message;
use log::info;
use serde::Serialize;

const MAX_MESSAGE_CHARS: usize = 160;
const MAX_VALUE_CHARS: usize = 600;

/// Ordered key/value metadata attached to one audit entry.
///
/// Keys are static names chosen by call sites; values are pre-rendered
/// strings. Kept as an explicit list rather than a map so each call site
/// states its full log schema and order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogMetadata {
    entries: Vec<(&'static str, String)>,
}

impl LogMetadata {
    /// Creates an empty metadata list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one entry, returning the list for chaining.
    pub fn push(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.entries.push((key, value.into()));
        self
    }

    /// Returns the first value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(entry_key, _)| *entry_key == key)
            .map(|(_, value)| value.as_str())
    }

    /// Iterates entries in insertion order.
    pub fn entries(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        self.entries.iter().map(|(key, value)| (*key, value.as_str()))
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether the list holds no entry.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Fire-and-forget logger contract for lifecycle audit entries.
///
/// Implementations must swallow their own failures; the service never
/// consumes a return value.
pub trait AuditLog {
    /// Records one entry consisting of a message and structured metadata.
    fn log(&self, message: &str, metadata: &LogMetadata);
}

/// Audit sink that renders entries through the process `log` facade.
///
/// One entry becomes one info-level line:
/// `event=audit module=service message="Todo created" action=create ...`
#[derive(Debug, Clone, Copy, Default)]
pub struct FacadeAuditLog;

impl AuditLog for FacadeAuditLog {
    fn log(&self, message: &str, metadata: &LogMetadata) {
        info!("{}", render_line(message, metadata));
    }
}

/// Renders a serializable record as a compact JSON metadata value.
///
/// Serialization failures degrade to a placeholder; the audit path never
/// propagates them.
pub fn json_value<T: Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "<unserializable>".to_string())
}

fn render_line(message: &str, metadata: &LogMetadata) -> String {
    let mut line = format!(
        "event=audit module=service message=\"{}\"",
        sanitize_message(message, MAX_MESSAGE_CHARS)
    );
    for (key, value) in metadata.entries() {
        line.push(' ');
        line.push_str(key);
        line.push('=');
        line.push_str(&sanitize_message(value, MAX_VALUE_CHARS));
    }
    line
}

#[cfg(test)]
mod tests {
    use super::{json_value, render_line, LogMetadata};
    use crate::model::request::UpdateTodoRequest;

    #[test]
    fn metadata_preserves_insertion_order() {
        let metadata = LogMetadata::new()
            .push("action", "update")
            .push("todoId", "abc")
            .push("updates", "{}");

        let keys: Vec<_> = metadata.entries().map(|(key, _)| key).collect();
        assert_eq!(keys, vec!["action", "todoId", "updates"]);
        assert_eq!(metadata.get("todoId"), Some("abc"));
        assert_eq!(metadata.get("missing"), None);
        assert_eq!(metadata.len(), 3);
    }

    #[test]
    fn render_line_quotes_message_and_appends_pairs() {
        let metadata = LogMetadata::new()
            .push("action", "findAll")
            .push("count", "2");

        let line = render_line("Todos retrieved", &metadata);
        assert_eq!(
            line,
            "event=audit module=service message=\"Todos retrieved\" action=findAll count=2"
        );
    }

    #[test]
    fn render_line_strips_newlines_from_values() {
        let metadata = LogMetadata::new().push("todo", "line1\nline2");
        let line = render_line("Todo created", &metadata);
        assert!(!line.contains('\n'));
        assert!(line.contains("todo=line1 line2"));
    }

    #[test]
    fn json_value_serializes_partial_contract() {
        let changes = UpdateTodoRequest {
            completed: Some(true),
            ..UpdateTodoRequest::default()
        };
        assert_eq!(json_value(&changes), r#"{"completed":true}"#);
    }
}
