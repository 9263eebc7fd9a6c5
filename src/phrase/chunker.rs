//! Noun chunk detection
//!
//! A chunk is an optional determiner, any number of adjectives, then one
//! or more nouns (common or proper), all inside one sentence. Matching is
//! greedy and left to right, so chunks never overlap.

use crate::types::{PosTag, Span, Token};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChunkerConfig {
    /// Longest chunk kept; a longer match is retried from its next token
    pub max_length: usize,
    /// A leading determiner joins the chunk ("the federal budget")
    pub include_determiners: bool,
}

impl Default for ChunkerConfig {
    fn default() -> Self {
        Self {
            max_length: 8,
            include_determiners: true,
        }
    }
}

/// Pattern-based noun chunker over tagged tokens
#[derive(Debug, Clone, Default)]
pub struct NounChunker {
    config: ChunkerConfig,
}

impl NounChunker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.config.max_length = max_length;
        self
    }

    pub fn with_determiners(mut self, include: bool) -> Self {
        self.config.include_determiners = include;
        self
    }

    pub fn config(&self) -> &ChunkerConfig {
        &self.config
    }

    /// Chunk spans in `token_idx` coordinates, single-noun chunks included
    pub fn extract_chunks(&self, tokens: &[Token]) -> Vec<Span> {
        tokens
            .chunk_by(|a, b| a.sentence_idx == b.sentence_idx)
            .flat_map(|sentence| self.sentence_chunks(sentence))
            .collect()
    }

    fn sentence_chunks(&self, sentence: &[Token]) -> Vec<Span> {
        let mut chunks = Vec::new();
        let mut i = 0;
        while i < sentence.len() {
            match self.chunk_len_at(sentence, i) {
                Some(len) if len <= self.config.max_length => {
                    let first = sentence[i].token_idx;
                    let last = sentence[i + len - 1].token_idx;
                    chunks.push(Span::new(first, last + 1));
                    i += len;
                }
                _ => i += 1,
            }
        }
        chunks
    }

    /// Length of the chunk starting at `start`, if one does
    fn chunk_len_at(&self, sentence: &[Token], start: usize) -> Option<usize> {
        let pos_at = |i: usize| sentence.get(i).map(|t| t.pos);
        let mut end = start;

        if pos_at(end) == Some(PosTag::Determiner) {
            if !self.config.include_determiners {
                return None;
            }
            end += 1;
        }
        while pos_at(end) == Some(PosTag::Adjective) {
            end += 1;
        }

        let nouns_from = end;
        while pos_at(end).is_some_and(|pos| pos.is_noun()) {
            end += 1;
        }
        (end > nouns_from).then_some(end - start)
    }
}

/// Surface text of a chunk, space-joined
pub fn chunk_text(tokens: &[Token], chunk: &Span) -> String {
    tokens[chunk.start..chunk.end]
        .iter()
        .map(|t| t.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}
