//! Outbound response envelope.

use serde::Serialize;
use serde_json::Value;

use crate::error::ValidationError;

/// Fixed reply for voice commands too short to carry a message.
pub const COMMAND_TOO_SHORT: &str = "command is too short";

/// The JSON envelope returned by every command endpoint.
///
/// Serialises as `{"result": …}` or `{"error": "…"}`. External failures are
/// reported through [`CommandOutcome::Result`] as their display text; only
/// pre-dispatch validation failures use [`CommandOutcome::Error`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CommandOutcome {
    Result(Value),
    Error(String),
}

impl CommandOutcome {
    /// A textual result.
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self::Result(Value::String(text.into()))
    }

    /// Report an external failure as text in the `result` field.
    #[must_use]
    pub fn failure(err: &impl std::fmt::Display) -> Self {
        Self::text(err.to_string())
    }

    /// The `result` value, if any.
    #[must_use]
    pub fn result(&self) -> Option<&Value> {
        match self {
            Self::Result(value) => Some(value),
            Self::Error(_) => None,
        }
    }
}

impl From<ValidationError> for CommandOutcome {
    fn from(err: ValidationError) -> Self {
        Self::Error(err.to_string())
    }
}

/// Render an external result as text.
///
/// Strings pass through untouched. Anything else becomes pretty-printed JSON
/// (two-space indent) with non-ASCII characters left as is.
#[must_use]
pub fn render_result(value: Value) -> String {
    match value {
        Value::String(text) => text,
        other => serde_json::to_string_pretty(&other).unwrap_or_else(|err| err.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn should_serialize_result_envelope() {
        let body = serde_json::to_value(CommandOutcome::text("done")).unwrap();
        assert_eq!(body, json!({"result": "done"}));
    }

    #[test]
    fn should_serialize_error_envelope() {
        let body =
            serde_json::to_value(CommandOutcome::from(ValidationError::MissingCommand)).unwrap();
        assert_eq!(body, json!({"error": "command is required"}));
    }

    #[test]
    fn should_keep_non_string_results_as_json() {
        let body = serde_json::to_value(CommandOutcome::Result(json!(true))).unwrap();
        assert_eq!(body, json!({"result": true}));
    }

    #[test]
    fn should_pass_strings_through() {
        assert_eq!(render_result(json!("on")), "on");
    }

    #[test]
    fn should_pretty_print_mappings() {
        let rendered = render_result(json!({"power": "on"}));
        assert_eq!(rendered, "{\n  \"power\": \"on\"\n}");
    }

    #[test]
    fn should_not_escape_non_ascii() {
        let rendered = render_result(json!({"name": "小爱音箱"}));
        assert!(rendered.contains("小爱音箱"));
        assert!(!rendered.contains("\\u"));
        assert!(rendered.contains('\n'));
    }

    #[test]
    fn should_render_failure_as_text() {
        let err = std::io::Error::other("timeout");
        assert_eq!(CommandOutcome::failure(&err), CommandOutcome::text("timeout"));
    }
}
