//! Output line formatting
//!
//! Each document becomes one line: year, author (spaces replaced by
//! underscores), then the document's tokens, all space-separated.

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};
use crate::types::DocumentHeader;

/// Render one output line
///
/// Empty tokens are skipped; nothing else is trimmed or normalized.
pub fn format_line<S: AsRef<str>>(year: &str, author: &str, tokens: &[S]) -> String {
    let author = author.replace(' ', "_");
    let mut line = String::with_capacity(
        year.len() + author.len() + tokens.iter().map(|t| t.as_ref().len() + 1).sum::<usize>() + 1,
    );
    line.push_str(year);
    line.push(' ');
    line.push_str(&author);
    for token in tokens.iter().map(|t| t.as_ref()).filter(|t| !t.is_empty()) {
        line.push(' ');
        line.push_str(token);
    }
    line
}

/// [`format_line`] for a parsed header
pub fn format_document<S: AsRef<str>>(header: &DocumentHeader, tokens: &[S]) -> String {
    format_line(&header.year, &header.author, tokens)
}

/// A document that could not be processed and was skipped
#[derive(Debug)]
pub struct SkippedDocument {
    /// Position of the document in the corpus, preamble excluded
    pub index: usize,
    pub error: Error,
}

/// Formatted lines for a whole corpus, in corpus order
#[derive(Debug, Default)]
pub struct CorpusOutput {
    pub lines: Vec<String>,
    pub skipped: Vec<SkippedDocument>,
}

impl CorpusOutput {
    /// Lines joined by newlines, without a trailing newline
    pub fn to_text(&self) -> String {
        self.lines.join("\n")
    }

    pub fn write_to(&self, path: impl AsRef<Path>) -> Result<()> {
        fs::write(path, self.to_text())?;
        Ok(())
    }
}
