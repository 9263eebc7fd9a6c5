//! Named-entity detection by capitalization
//!
//! An entity is a maximal run of proper-noun-looking tokens inside one
//! sentence. Lowercase connectors ("of", "the", ...) may sit between two
//! capitalized tokens, so "United States of America" is one entity; a run
//! never starts or ends on a connector.

use crate::nlp::tagger::{is_capitalized, HeuristicTagger};
use crate::types::{PosTag, Span, Token};

const CONNECTORS: &[&str] = &["of", "the", "for", "de", "la", "du", "von", "van", "&"];

/// Capitalized-run entity recognizer
#[derive(Debug, Clone, Default)]
pub struct EntityRecognizer {
    tagger: HeuristicTagger,
}

impl EntityRecognizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Find entity spans (in `token_idx` coordinates), including
    /// single-token entities
    pub fn entities(&self, tokens: &[Token]) -> Vec<Span> {
        let mut spans = Vec::new();
        for sentence in tokens.chunk_by(|a, b| a.sentence_idx == b.sentence_idx) {
            self.entities_in_sentence(sentence, &mut spans);
        }
        spans
    }

    fn entities_in_sentence(&self, tokens: &[Token], spans: &mut Vec<Span>) {
        let mut i = 0;
        while i < tokens.len() {
            if !self.is_name(&tokens[i]) {
                i += 1;
                continue;
            }

            let mut end = i + 1;
            let mut j = i + 1;
            while j < tokens.len() {
                if self.is_name(&tokens[j]) {
                    end = j + 1;
                } else if !is_connector(&tokens[j].text) {
                    break;
                }
                j += 1;
            }

            spans.push(Span::new(tokens[i].token_idx, tokens[end - 1].token_idx + 1));
            i = end;
        }
    }

    /// Capitalized word that is not a closed-class word
    fn is_name(&self, token: &Token) -> bool {
        is_capitalized(&token.text)
            && self.tagger.tag_word(&token.text, false) == PosTag::ProperNoun
    }
}

fn is_connector(word: &str) -> bool {
    CONNECTORS.contains(&word)
}
