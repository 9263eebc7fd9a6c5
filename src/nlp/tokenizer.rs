//! Tokenization
//!
//! The [`Tokenizer`] trait is the seam where an external word tokenizer
//! plugs in. Two built-in implementations are provided: a Unicode-aware
//! [`WordTokenizer`] and a [`WhitespaceTokenizer`] that leaves words
//! exactly as written.

use std::sync::Arc;

use unicode_segmentation::UnicodeSegmentation;

use crate::types::Token;

/// Splits text into a token sequence in reading order
///
/// Implementations are shared read-only across documents, possibly from
/// several threads at once.
pub trait Tokenizer: Send + Sync {
    fn tokenize(&self, text: &str) -> Vec<Token>;

    fn name(&self) -> &'static str;
}

impl<T: Tokenizer + ?Sized> Tokenizer for Arc<T> {
    fn tokenize(&self, text: &str) -> Vec<Token> {
        (**self).tokenize(text)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

impl<T: Tokenizer + ?Sized> Tokenizer for Box<T> {
    fn tokenize(&self, text: &str) -> Vec<Token> {
        (**self).tokenize(text)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

impl<T: Tokenizer + ?Sized> Tokenizer for &T {
    fn tokenize(&self, text: &str) -> Vec<Token> {
        (**self).tokenize(text)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

/// Unicode word-boundary tokenizer (UAX #29)
///
/// Sentences are found first; each sentence is then split on word
/// boundaries, and segments that are pure whitespace are dropped.
/// Punctuation becomes its own token, contractions stay whole.
#[derive(Debug, Clone, Copy, Default)]
pub struct WordTokenizer;

impl Tokenizer for WordTokenizer {
    fn tokenize(&self, text: &str) -> Vec<Token> {
        let mut tokens = Vec::new();
        let mut sentence_idx = 0;

        for sentence in text.unicode_sentences() {
            let before = tokens.len();
            for word in sentence.split_word_bounds() {
                if word.trim().is_empty() {
                    continue;
                }
                let idx = tokens.len();
                tokens.push(Token::untagged(word, sentence_idx, idx));
            }
            if tokens.len() > before {
                sentence_idx += 1;
            }
        }

        tokens
    }

    fn name(&self) -> &'static str {
        "word"
    }
}

/// Splits on runs of whitespace; every token lands in sentence 0
#[derive(Debug, Clone, Copy, Default)]
pub struct WhitespaceTokenizer;

impl Tokenizer for WhitespaceTokenizer {
    fn tokenize(&self, text: &str) -> Vec<Token> {
        text.split_whitespace()
            .enumerate()
            .map(|(i, word)| Token::untagged(word, 0, i))
            .collect()
    }

    fn name(&self) -> &'static str {
        "whitespace"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::texts;

    #[test]
    fn test_word_tokenizer_separates_punctuation() {
        let tokens = WordTokenizer.tokenize("Hello, world!");
        assert_eq!(texts(&tokens), vec!["Hello", ",", "world", "!"]);
    }

    #[test]
    fn test_word_tokenizer_keeps_contractions_and_numbers() {
        let tokens = WordTokenizer.tokenize("We don't spend $1,000 lightly.");
        let words = texts(&tokens);
        assert!(words.contains(&"don't"));
        assert!(words.contains(&"1,000"));
    }

    #[test]
    fn test_word_tokenizer_tracks_sentences() {
        let tokens = WordTokenizer.tokenize("The Union is strong. We are free.");
        assert_eq!(tokens.first().map(|t| t.sentence_idx), Some(0));
        assert_eq!(tokens.last().map(|t| t.sentence_idx), Some(1));
        for (i, token) in tokens.iter().enumerate() {
            assert_eq!(token.token_idx, i);
        }
    }

    #[test]
    fn test_empty_input() {
        assert!(WordTokenizer.tokenize("").is_empty());
        assert!(WhitespaceTokenizer.tokenize("   ").is_empty());
    }

    #[test]
    fn test_whitespace_tokenizer_keeps_words_verbatim() {
        let tokens = WhitespaceTokenizer.tokenize("Hello,  world!\tok");
        assert_eq!(texts(&tokens), vec!["Hello,", "world!", "ok"]);
    }

    #[test]
    fn test_shared_tokenizer_handle() {
        let shared: Arc<dyn Tokenizer> = Arc::new(WordTokenizer);
        assert_eq!(shared.name(), "word");
        assert_eq!(shared.tokenize("a b").len(), 2);
    }
}
