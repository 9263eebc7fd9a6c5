//! Corpus file splitting

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{Error, Result};

/// Line of three asterisks flanked by blank lines
pub const DOCUMENT_SEPARATOR: &str = "\n\n***\n\n";

/// Split corpus text into raw documents
///
/// The chunk before the first separator is a preamble and is dropped, as are
/// chunks holding nothing but whitespace (a corpus ending in a separator
/// leaves one behind).
pub fn split_corpus(text: &str) -> Vec<&str> {
    text.split(DOCUMENT_SEPARATOR)
        .skip(1)
        .filter(|chunk| !chunk.trim().is_empty())
        .collect()
}

/// Read a corpus file, failing if it holds no documents
pub fn read_corpus(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    let count = split_corpus(&text).len();
    if count == 0 {
        return Err(Error::EmptyCorpus);
    }
    debug!(path = %path.display(), documents = count, "read corpus");
    Ok(text)
}
