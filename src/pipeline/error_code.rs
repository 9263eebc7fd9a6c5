//! Stable diagnostic codes for pipeline spec validation.

use serde::Serialize;
use std::fmt;

/// Machine-readable category of a [`super::errors::PipelineSpecError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// The spec's `v` field names a version this crate cannot read.
    UnsupportedVersion,
    /// A numeric setting lies outside its allowed range.
    OutOfRange,
    /// A setting is valid but has no effect for the chosen variant.
    IneffectiveOption,
    /// A field the schema does not recognize.
    UnknownField,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::UnsupportedVersion => "unsupported_version",
            Self::OutOfRange => "out_of_range",
            Self::IneffectiveOption => "ineffective_option",
            Self::UnknownField => "unknown_field",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
