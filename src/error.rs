//! Error types
//!
//! Malformed documents surface as [`FormatError`]; broken caller contracts
//! (bad spans, bad proportions) surface as [`PreconditionError`]. Both are
//! wrapped by the crate-level [`Error`].

use thiserror::Error;

use crate::types::Span;

/// A document whose header block cannot be parsed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("document has no blank line terminating its header block")]
    MissingHeaderDelimiter,
    #[error("header block has {found} lines, expected at least 3")]
    TooFewHeaderLines { found: usize },
    #[error("date line {line:?} is too short to carry a 4-character year")]
    ShortDateLine { line: String },
}

/// A caller handed the core something it promised never to hand it
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PreconditionError {
    #[error("span {span} is out of range for {len} tokens")]
    SpanOutOfRange { span: Span, len: usize },
    #[error("spans {first} and {second} overlap")]
    OverlappingSpans { first: Span, second: Span },
    #[error("top proportion {0} is outside [0, 1]")]
    ProportionOutOfRange(f64),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("malformed document: {0}")]
    Format(#[from] FormatError),
    #[error("precondition violated: {0}")]
    Precondition(#[from] PreconditionError),
    #[error("invalid pipeline spec: {0}")]
    InvalidSpec(String),
    #[error("corpus contains no documents")]
    EmptyCorpus,
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
