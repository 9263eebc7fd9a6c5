//! Body normalization and token cleaning
//!
//! Text-level normalization only collapses line breaks. Everything else
//! (lowercasing, stopword, punctuation and number removal) operates on the
//! token sequence after tokenization.

use serde::{Deserialize, Serialize};

use super::stopwords::StopwordFilter;
use crate::types::{reindex, Token};

/// Collapse paragraph breaks and line breaks into single spaces
///
/// Double newlines are folded first, then every remaining newline becomes a
/// space, so a paragraph break yields one space rather than two.
pub fn collapse_newlines(body: &str) -> String {
    body.replace("\n\n", "\n").replace('\n', " ")
}

/// Which token classes survive cleaning
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizeOptions {
    pub keep_stopwords: bool,
    pub keep_punctuation: bool,
    pub keep_numbers: bool,
    /// Lowercase tokens before filtering
    pub lowercase: bool,
}

impl NormalizeOptions {
    /// Keep every token untouched
    pub fn keep_all() -> Self {
        Self {
            keep_stopwords: true,
            keep_punctuation: true,
            keep_numbers: true,
            lowercase: false,
        }
    }
}

/// Token cleaner configured from [`NormalizeOptions`]
#[derive(Debug, Clone)]
pub struct Normalizer {
    options: NormalizeOptions,
    stopwords: StopwordFilter,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new(NormalizeOptions::default())
    }
}

impl Normalizer {
    pub fn new(options: NormalizeOptions) -> Self {
        let mut stopwords = StopwordFilter::english().with_case_sensitive(true);
        if !options.keep_punctuation {
            stopwords = stopwords.with_punctuation();
        }
        Self { options, stopwords }
    }

    pub fn options(&self) -> &NormalizeOptions {
        &self.options
    }

    /// Clean a token sequence, renumbering the survivors
    ///
    /// The stopword filter (which carries punctuation unless it is kept) and
    /// the number filter are independent; a token is dropped if either
    /// rejects it.
    pub fn clean(&self, tokens: Vec<Token>) -> Vec<Token> {
        let mut out: Vec<Token> = tokens
            .into_iter()
            .map(|mut token| {
                if self.options.lowercase {
                    token.text = token.text.to_lowercase();
                }
                token
            })
            .filter(|token| self.options.keep_stopwords || !self.stopwords.is_stopword(&token.text))
            .filter(|token| self.options.keep_numbers || !contains_digit(&token.text))
            .collect();
        reindex(&mut out);
        out
    }
}

fn contains_digit(word: &str) -> bool {
    word.chars().any(|c| c.is_ascii_digit())
}
