//! Span provider stage.
//!
//! A [`SpanSource`] looks at a document's tokens and proposes the ranges
//! that should become compound tokens. Every provider returns a
//! [`SpanSet`], so single-token spans are already gone and duplicate starts
//! are resolved before collapsing.

use crate::collocation::CollocationSelector;
use crate::error::Result;
use crate::nlp::HeuristicTagger;
use crate::phrase::{EntityRecognizer, NounChunker};
use crate::spans::SpanSet;
use crate::types::{texts, Token};

/// Proposes spans over a token sequence.
///
/// Spans are expressed in `token_idx` coordinates, which the pipeline keeps
/// equal to slice positions.
pub trait SpanSource: Send + Sync {
    fn spans(&self, tokens: &[Token]) -> Result<SpanSet>;

    /// Short identifier used in logs
    fn name(&self) -> &'static str;
}

impl<T: SpanSource + ?Sized> SpanSource for Box<T> {
    fn spans(&self, tokens: &[Token]) -> Result<SpanSet> {
        (**self).spans(tokens)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

/// Proposes nothing; the tokens pass through unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoSpans;

impl SpanSource for NoSpans {
    #[inline]
    fn spans(&self, _tokens: &[Token]) -> Result<SpanSet> {
        Ok(SpanSet::new())
    }

    fn name(&self) -> &'static str {
        "none"
    }
}

/// Named-entity spans.
#[derive(Debug, Clone, Default)]
pub struct EntitySpans {
    recognizer: EntityRecognizer,
}

impl EntitySpans {
    pub fn new(recognizer: EntityRecognizer) -> Self {
        Self { recognizer }
    }
}

impl SpanSource for EntitySpans {
    fn spans(&self, tokens: &[Token]) -> Result<SpanSet> {
        Ok(SpanSet::from_spans(self.recognizer.entities(tokens)))
    }

    fn name(&self) -> &'static str {
        "entities"
    }
}

/// Noun-phrase spans. Tokens are tagged on a private copy, so callers
/// never see tags change.
#[derive(Debug, Clone, Default)]
pub struct NounPhraseSpans {
    tagger: HeuristicTagger,
    chunker: NounChunker,
}

impl NounPhraseSpans {
    pub fn new(tagger: HeuristicTagger, chunker: NounChunker) -> Self {
        Self { tagger, chunker }
    }
}

impl SpanSource for NounPhraseSpans {
    fn spans(&self, tokens: &[Token]) -> Result<SpanSet> {
        let mut tagged = tokens.to_vec();
        self.tagger.tag(&mut tagged);
        Ok(SpanSet::from_spans(self.chunker.extract_chunks(&tagged)))
    }

    fn name(&self) -> &'static str {
        "noun_phrases"
    }
}

/// Collocation spans: every occurrence of a selected bigram type.
#[derive(Debug, Clone, Copy)]
pub struct BigramSpans {
    selector: CollocationSelector,
}

impl BigramSpans {
    pub fn new(top_proportion: f64) -> Result<Self> {
        Ok(Self {
            selector: CollocationSelector::new(top_proportion)?,
        })
    }

    pub fn top_proportion(&self) -> f64 {
        self.selector.top_proportion()
    }
}

impl SpanSource for BigramSpans {
    fn spans(&self, tokens: &[Token]) -> Result<SpanSet> {
        Ok(self.selector.spans(&texts(tokens)))
    }

    fn name(&self) -> &'static str {
        "bigrams"
    }
}
