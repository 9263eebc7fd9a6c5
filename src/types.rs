//! Core data types shared across the crate
//!
//! Tokens carry their surface text plus the positional information the span
//! providers need (sentence and token index). Spans are half-open ranges
//! over token indices.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse part-of-speech tags produced by the built-in tagger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PosTag {
    Noun,
    ProperNoun,
    Adjective,
    Adverb,
    Verb,
    Determiner,
    Pronoun,
    Preposition,
    Conjunction,
    Number,
    Punctuation,
    Other,
}

impl PosTag {
    /// Whether this tag heads a noun phrase
    pub fn is_noun(&self) -> bool {
        matches!(self, PosTag::Noun | PosTag::ProperNoun)
    }
}

/// A single token in document order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Surface text
    pub text: String,
    /// Part-of-speech tag (`Other` until a tagger runs)
    pub pos: PosTag,
    /// Index of the sentence this token belongs to
    pub sentence_idx: usize,
    /// Position of this token in the document's token sequence
    pub token_idx: usize,
}

impl Token {
    pub fn new(text: impl Into<String>, pos: PosTag, sentence_idx: usize, token_idx: usize) -> Self {
        Self {
            text: text.into(),
            pos,
            sentence_idx,
            token_idx,
        }
    }

    /// Build an untagged token
    pub fn untagged(text: impl Into<String>, sentence_idx: usize, token_idx: usize) -> Self {
        Self::new(text, PosTag::Other, sentence_idx, token_idx)
    }
}

/// Renumber `token_idx` so it matches each token's position in `tokens`
pub fn reindex(tokens: &mut [Token]) {
    for (i, token) in tokens.iter_mut().enumerate() {
        token.token_idx = i;
    }
}

/// Borrow the surface texts of a token slice
pub fn texts(tokens: &[Token]) -> Vec<&str> {
    tokens.iter().map(|t| t.text.as_str()).collect()
}

/// Half-open range `[start, end)` over token indices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Number of tokens covered
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// A span covering at most one token collapses to itself
    pub fn is_trivial(&self) -> bool {
        self.len() <= 1
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}

/// Metadata recovered from a document's header block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentHeader {
    pub author: String,
    /// Last four characters of the date line
    pub year: String,
}

impl DocumentHeader {
    pub fn new(author: impl Into<String>, year: impl Into<String>) -> Self {
        Self {
            author: author.into(),
            year: year.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_len_and_triviality() {
        assert_eq!(Span::new(1, 5).len(), 4);
        assert!(!Span::new(1, 5).is_trivial());
        assert!(Span::new(3, 4).is_trivial());
        assert!(Span::new(3, 3).is_empty());
    }

    #[test]
    fn test_span_ordering_is_by_start_then_end() {
        let mut spans = vec![Span::new(4, 6), Span::new(0, 2), Span::new(0, 1)];
        spans.sort();
        assert_eq!(spans, vec![Span::new(0, 1), Span::new(0, 2), Span::new(4, 6)]);
    }

    #[test]
    fn test_reindex() {
        let mut tokens = vec![
            Token::untagged("a", 0, 7),
            Token::untagged("b", 0, 9),
        ];
        reindex(&mut tokens);
        assert_eq!(tokens[0].token_idx, 0);
        assert_eq!(tokens[1].token_idx, 1);
    }

    #[test]
    fn test_noun_tags() {
        assert!(PosTag::Noun.is_noun());
        assert!(PosTag::ProperNoun.is_noun());
        assert!(!PosTag::Adjective.is_noun());
    }
}
