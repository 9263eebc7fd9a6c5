//! Corpus ingestion
//!
//! Splits a corpus file into documents and separates each document's
//! header block from its body.

pub mod header;
pub mod reader;

pub use header::{extract_header, parse_header, Speech};
pub use reader::{read_corpus, split_corpus, DOCUMENT_SEPARATOR};
