//! Structured pipeline spec diagnostics.

use serde::Serialize;
use thiserror::Error;

use super::error_code::ErrorCode;

/// One problem found in a [`super::spec::PipelineSpec`], located by a JSON
/// pointer into the spec document.
#[derive(Debug, Clone, PartialEq, Serialize, Error)]
#[error("[{code}] {path}: {message}")]
pub struct PipelineSpecError {
    pub code: ErrorCode,
    /// JSON pointer to the offending field (e.g. `/bigrams/top_proportion`).
    pub path: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl PipelineSpecError {
    pub fn new(code: ErrorCode, path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code,
            path: path.into(),
            message: message.into(),
            hint: None,
        }
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_code_and_path() {
        let err = PipelineSpecError::new(ErrorCode::OutOfRange, "/bigrams/top_proportion", "too big");
        assert_eq!(err.to_string(), "[out_of_range] /bigrams/top_proportion: too big");
    }

    #[test]
    fn test_hint_is_omitted_from_json_when_absent() {
        let err = PipelineSpecError::new(ErrorCode::UnknownField, "/bogus", "unrecognized");
        let json = serde_json::to_value(&err).unwrap();
        assert!(json.get("hint").is_none());
        assert_eq!(json["code"], "unknown_field");

        let json = serde_json::to_value(err.with_hint("remove it")).unwrap();
        assert_eq!(json["hint"], "remove it");
    }
}
