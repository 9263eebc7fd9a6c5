//! Heuristic part-of-speech tagging
//!
//! A lexicon-and-suffix tagger good enough to drive noun chunking without a
//! trained model. Closed-class words come from small fixed lexicons; open
//! class words are guessed from capitalization and suffixes, defaulting to
//! noun.

use crate::types::{PosTag, Token};

const DETERMINERS: &[&str] = &[
    "a", "an", "the", "this", "that", "these", "those", "every", "each", "some", "any", "no",
    "our", "their", "my", "your", "his", "her", "its", "all", "both", "another", "such",
];

const PRONOUNS: &[&str] = &[
    "i", "we", "you", "he", "she", "it", "they", "me", "us", "him", "them", "who", "whom",
    "ours", "theirs", "mine", "yours", "hers", "itself", "ourselves", "themselves", "myself",
    "yourself", "himself", "herself", "what", "which",
];

const PREPOSITIONS: &[&str] = &[
    "of", "in", "on", "at", "by", "for", "with", "from", "to", "into", "upon", "about",
    "against", "between", "through", "during", "before", "after", "above", "below", "under",
    "over", "among", "within", "without", "toward", "towards", "across", "since", "until",
];

const CONJUNCTIONS: &[&str] = &[
    "and", "or", "but", "nor", "yet", "so", "if", "because", "although", "though", "while",
    "whether", "than", "as", "when", "where", "unless",
];

const VERBS: &[&str] = &[
    "is", "are", "was", "were", "be", "been", "being", "am", "have", "has", "had", "do",
    "does", "did", "will", "shall", "would", "should", "can", "could", "may", "might", "must",
];

const ADVERBS: &[&str] = &["not", "very", "also", "now", "then", "here", "there", "never", "too"];

const ADJECTIVE_SUFFIXES: &[&str] = &[
    "able", "ible", "ous", "ful", "ive", "less", "ical", "ic", "al", "ary", "ant", "ent",
];

const VERB_SUFFIXES: &[&str] = &["ing", "ed", "ize", "ise"];

/// Assigns a [`PosTag`] to every token in place
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicTagger;

impl HeuristicTagger {
    pub fn new() -> Self {
        Self
    }

    /// Tag a token sequence, overwriting any existing tags
    pub fn tag(&self, tokens: &mut [Token]) {
        let mut prev_sentence = None;
        for token in tokens.iter_mut() {
            let sentence_initial = prev_sentence != Some(token.sentence_idx);
            prev_sentence = Some(token.sentence_idx);
            token.pos = self.tag_word(&token.text, sentence_initial);
        }
    }

    /// Tag a single word given whether it opens its sentence
    pub fn tag_word(&self, word: &str, sentence_initial: bool) -> PosTag {
        if word.chars().all(|c| !c.is_alphanumeric()) {
            return PosTag::Punctuation;
        }
        if word.chars().any(|c| c.is_numeric()) && !word.chars().any(|c| c.is_alphabetic()) {
            return PosTag::Number;
        }

        let lower = word.to_lowercase();
        let lower = lower.as_str();
        if DETERMINERS.contains(&lower) {
            return PosTag::Determiner;
        }
        if PRONOUNS.contains(&lower) {
            return PosTag::Pronoun;
        }
        if PREPOSITIONS.contains(&lower) {
            return PosTag::Preposition;
        }
        if CONJUNCTIONS.contains(&lower) {
            return PosTag::Conjunction;
        }
        if VERBS.contains(&lower) || lower.ends_with("n't") {
            return PosTag::Verb;
        }
        if ADVERBS.contains(&lower) {
            return PosTag::Adverb;
        }

        if is_capitalized(word) && !sentence_initial {
            return PosTag::ProperNoun;
        }
        if lower.len() > 4 && lower.ends_with("ly") {
            return PosTag::Adverb;
        }
        if has_suffix(lower, ADJECTIVE_SUFFIXES) {
            return PosTag::Adjective;
        }
        if has_suffix(lower, VERB_SUFFIXES) {
            return PosTag::Verb;
        }
        PosTag::Noun
    }
}

/// First character uppercase
pub(crate) fn is_capitalized(word: &str) -> bool {
    word.chars().next().is_some_and(|c| c.is_uppercase())
}

/// Suffix match that leaves a stem of at least three characters
fn has_suffix(word: &str, suffixes: &[&str]) -> bool {
    suffixes
        .iter()
        .any(|suffix| word.len() >= suffix.len() + 3 && word.ends_with(suffix))
}
