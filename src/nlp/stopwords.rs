//! Stopword filtering
//!
//! English stopwords are the NLTK list shipped by the `stop-words` crate
//! (its `nltk` feature). The empty string is
//! always a stopword, and ASCII punctuation can be folded into the set so a
//! single membership test drops both.

use rustc_hash::FxHashSet;
use stop_words::{get, LANGUAGE};

/// Every ASCII punctuation character, in code-point order
pub const ASCII_PUNCTUATION: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// Membership test over a fixed word set
#[derive(Debug, Clone)]
pub struct StopwordFilter {
    words: FxHashSet<String>,
    /// Compare tokens as written instead of lowercased
    case_sensitive: bool,
}

impl Default for StopwordFilter {
    fn default() -> Self {
        Self::english()
    }
}

impl StopwordFilter {
    /// English stopwords plus the empty string
    pub fn english() -> Self {
        let mut words: FxHashSet<String> =
            get(LANGUAGE::English).iter().map(|s| s.to_string()).collect();
        words.insert(String::new());
        Self {
            words,
            case_sensitive: false,
        }
    }

    /// A case-sensitive filter keeps "The" while dropping "the".
    pub fn with_case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }

    /// Treat every single ASCII punctuation character as a stopword
    pub fn with_punctuation(mut self) -> Self {
        self.words
            .extend(ASCII_PUNCTUATION.chars().map(|c| c.to_string()));
        self
    }

    pub fn is_stopword(&self, word: &str) -> bool {
        if self.case_sensitive {
            self.words.contains(word)
        } else {
            self.words.contains(&word.to_lowercase())
        }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
