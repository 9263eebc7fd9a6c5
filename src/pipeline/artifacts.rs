//! Intermediate results flowing between pipeline stages.

use crate::output::format_document;
use crate::types::DocumentHeader;

/// A document after span collapsing, before formatting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollapsedDocument {
    pub header: DocumentHeader,
    /// Surviving tokens; compound tokens are joined with `_`
    pub tokens: Vec<String>,
}

impl CollapsedDocument {
    pub fn new(header: DocumentHeader, tokens: Vec<String>) -> Self {
        Self { header, tokens }
    }

    /// The document's output line
    pub fn to_line(&self) -> String {
        format_document(&self.header, &self.tokens)
    }
}
