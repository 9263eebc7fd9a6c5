//! Header block parsing
//!
//! A document starts with a header block terminated by the first blank
//! line. Line 0 is a title, line 1 the author, line 2 the date whose last
//! four characters, taken exactly as written, are the year.

use crate::error::FormatError;
use crate::nlp::normalizer::collapse_newlines;
use crate::types::DocumentHeader;

const HEADER_DELIMITER: &str = "\n\n";
const AUTHOR_LINE: usize = 1;
const DATE_LINE: usize = 2;
const YEAR_LEN: usize = 4;

/// Split a raw document into `(header, body)`
///
/// The header is the shortest prefix ending in a blank line, delimiter
/// included; the body is everything after it.
pub fn extract_header(raw: &str) -> Result<(&str, &str), FormatError> {
    let idx = raw
        .find(HEADER_DELIMITER)
        .ok_or(FormatError::MissingHeaderDelimiter)?;
    Ok(raw.split_at(idx + HEADER_DELIMITER.len()))
}

/// Recover author and year from a header block
pub fn parse_header(header: &str) -> Result<DocumentHeader, FormatError> {
    let lines: Vec<&str> = header.trim_end_matches('\n').split('\n').collect();
    if lines.len() <= DATE_LINE {
        return Err(FormatError::TooFewHeaderLines { found: lines.len() });
    }

    let author = lines[AUTHOR_LINE].trim();
    let date = lines[DATE_LINE];

    let char_count = date.chars().count();
    if char_count < YEAR_LEN {
        return Err(FormatError::ShortDateLine {
            line: date.to_string(),
        });
    }
    let year: String = date.chars().skip(char_count - YEAR_LEN).collect();

    Ok(DocumentHeader::new(author, year))
}

/// A parsed document: header metadata plus newline-collapsed body text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Speech {
    pub header: DocumentHeader,
    pub body: String,
}

impl Speech {
    pub fn parse(raw: &str) -> Result<Self, FormatError> {
        let (header, body) = extract_header(raw)?;
        let header = parse_header(header)?;
        Ok(Self {
            header,
            body: collapse_newlines(body),
        })
    }
}
