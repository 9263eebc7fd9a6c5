//! Pipeline runner: orchestrates stage execution per document.
//!
//! The [`Pipeline`] struct holds a statically-composed tokenizer and span
//! provider plus an optional [`Normalizer`]. Each document runs through the
//! same stages in order:
//!
//! 1. Header (split the header block, recover author and year)
//! 2. Tokenize
//! 3. Normalize (only when a normalizer is configured)
//! 4. Spans (ask the [`SpanSource`] for compound ranges)
//! 5. Collapse
//! 6. Format
//!
//! # Factory methods
//!
//! Use [`Pipeline::baseline()`] (and friends) to build pipelines for the
//! known variants without spelling out the generics manually.

use rayon::prelude::*;
use tracing::{debug, warn};

use crate::corpus::{split_corpus, Speech};
use crate::error::{Error, Result};
use crate::nlp::{Normalizer, Tokenizer, WhitespaceTokenizer, WordTokenizer};
use crate::output::{CorpusOutput, SkippedDocument};
use crate::pipeline::artifacts::CollapsedDocument;
use crate::pipeline::observer::{
    NoopObserver, PipelineObserver, StageClock, StageReport, StageReportBuilder, STAGE_COLLAPSE,
    STAGE_FORMAT, STAGE_HEADER, STAGE_NORMALIZE, STAGE_SPANS, STAGE_TOKENIZE,
};
use crate::pipeline::spec::MalformedPolicy;
use crate::pipeline::traits::{BigramSpans, EntitySpans, NoSpans, NounPhraseSpans, SpanSource};
use crate::spans::collapse;
use crate::types::texts;

/// Enter a tracing span for a pipeline stage. The guard lives until the end
/// of the enclosing block.
macro_rules! trace_stage {
    ($name:expr) => {
        let _span = tracing::info_span!("pipeline_stage", stage = $name).entered();
    };
}

// ============================================================================
// Pipeline: statically composed stage container
// ============================================================================

/// A pipeline composed of a tokenizer, a span provider and an optional
/// token normalizer.
#[derive(Debug, Clone)]
pub struct Pipeline<T, S> {
    pub tokenizer: T,
    pub source: S,
    pub normalizer: Option<Normalizer>,
}

/// Whitespace tokens, no spans, no cleaning.
pub type BaselinePipeline = Pipeline<WhitespaceTokenizer, NoSpans>;
pub type EntityPipeline = Pipeline<WordTokenizer, EntitySpans>;
pub type NounPhrasePipeline = Pipeline<WordTokenizer, NounPhraseSpans>;
pub type BigramPipeline = Pipeline<WordTokenizer, BigramSpans>;
/// Pipeline whose stages are picked at runtime.
pub type DynPipeline = Pipeline<Box<dyn Tokenizer>, Box<dyn SpanSource>>;

impl<T, S> Pipeline<T, S> {
    pub fn new(tokenizer: T, source: S) -> Self {
        Self {
            tokenizer,
            source,
            normalizer: None,
        }
    }

    pub fn with_normalizer(mut self, normalizer: Normalizer) -> Self {
        self.normalizer = Some(normalizer);
        self
    }
}

impl BaselinePipeline {
    pub fn baseline() -> Self {
        Pipeline::new(WhitespaceTokenizer, NoSpans)
    }
}

impl EntityPipeline {
    /// Entity merging, optionally over cleaned tokens
    pub fn entities(normalizer: Option<Normalizer>) -> Self {
        Pipeline {
            tokenizer: WordTokenizer,
            source: EntitySpans::default(),
            normalizer,
        }
    }
}

impl NounPhrasePipeline {
    /// Noun-phrase merging, optionally over cleaned tokens
    pub fn noun_phrases(normalizer: Option<Normalizer>) -> Self {
        Pipeline {
            tokenizer: WordTokenizer,
            source: NounPhraseSpans::default(),
            normalizer,
        }
    }
}

impl BigramPipeline {
    /// Collocation merging. Bigrams are always counted over cleaned tokens.
    pub fn bigrams(top_proportion: f64, normalizer: Normalizer) -> Result<Self> {
        Ok(Pipeline::new(WordTokenizer, BigramSpans::new(top_proportion)?).with_normalizer(normalizer))
    }
}

// ============================================================================
// Running documents and corpora
// ============================================================================

impl<T, S> Pipeline<T, S>
where
    T: Tokenizer,
    S: SpanSource,
{
    /// Run every stage except formatting on one raw document.
    ///
    /// The `observer` receives callbacks at each stage boundary. Pass
    /// [`NoopObserver`] for zero-overhead execution.
    pub fn collapse_document(
        &self,
        raw: &str,
        observer: &mut impl PipelineObserver,
    ) -> Result<CollapsedDocument> {
        let speech = {
            trace_stage!(STAGE_HEADER);
            observer.on_stage_start(STAGE_HEADER);
            let clock = StageClock::start();
            let speech = Speech::parse(raw)?;
            observer.on_stage_end(STAGE_HEADER, &StageReport::new(clock.elapsed()));
            speech
        };

        let tokens = {
            trace_stage!(STAGE_TOKENIZE);
            observer.on_stage_start(STAGE_TOKENIZE);
            let clock = StageClock::start();
            let tokens = self.tokenizer.tokenize(&speech.body);
            let report = StageReportBuilder::new(clock.elapsed())
                .tokens(tokens.len())
                .build();
            observer.on_stage_end(STAGE_TOKENIZE, &report);
            tokens
        };

        let tokens = match &self.normalizer {
            Some(normalizer) => {
                trace_stage!(STAGE_NORMALIZE);
                observer.on_stage_start(STAGE_NORMALIZE);
                let clock = StageClock::start();
                let cleaned = normalizer.clean(tokens);
                let report = StageReportBuilder::new(clock.elapsed())
                    .tokens(cleaned.len())
                    .build();
                observer.on_stage_end(STAGE_NORMALIZE, &report);
                cleaned
            }
            None => tokens,
        };

        let spans = {
            trace_stage!(STAGE_SPANS);
            observer.on_stage_start(STAGE_SPANS);
            let clock = StageClock::start();
            let spans = self.source.spans(&tokens)?;
            let report = StageReportBuilder::new(clock.elapsed())
                .spans(spans.len())
                .build();
            observer.on_stage_end(STAGE_SPANS, &report);
            observer.on_spans(&spans);
            spans
        };

        let collapsed = {
            trace_stage!(STAGE_COLLAPSE);
            observer.on_stage_start(STAGE_COLLAPSE);
            let clock = StageClock::start();
            let collapsed = collapse(&texts(&tokens), &spans)?;
            let report = StageReportBuilder::new(clock.elapsed())
                .tokens(collapsed.len())
                .build();
            observer.on_stage_end(STAGE_COLLAPSE, &report);
            collapsed
        };

        debug!(
            author = %speech.header.author,
            year = %speech.header.year,
            source = self.source.name(),
            tokens = tokens.len(),
            spans = spans.len(),
            "document collapsed"
        );

        Ok(CollapsedDocument::new(speech.header, collapsed))
    }

    /// Run all stages on one raw document, producing its output line.
    pub fn run_document(&self, raw: &str, observer: &mut impl PipelineObserver) -> Result<String> {
        let doc = self.collapse_document(raw, observer)?;

        trace_stage!(STAGE_FORMAT);
        observer.on_stage_start(STAGE_FORMAT);
        let clock = StageClock::start();
        let line = doc.to_line();
        observer.on_stage_end(STAGE_FORMAT, &StageReport::new(clock.elapsed()));
        Ok(line)
    }

    /// Process a whole corpus one document at a time, in corpus order.
    pub fn run_corpus(
        &self,
        corpus: &str,
        policy: MalformedPolicy,
        observer: &mut impl PipelineObserver,
    ) -> Result<CorpusOutput> {
        let results = split_corpus(corpus)
            .into_iter()
            .map(|raw| self.run_document(raw, &mut *observer));
        assemble(results, policy)
    }

    /// Process a whole corpus with documents spread across the rayon pool.
    ///
    /// Output order matches corpus order.
    pub fn par_run_corpus(&self, corpus: &str, policy: MalformedPolicy) -> Result<CorpusOutput> {
        let results: Vec<Result<String>> = split_corpus(corpus)
            .par_iter()
            .map(|raw| self.run_document(raw, &mut NoopObserver))
            .collect();
        assemble(results, policy)
    }
}

/// Gather per-document results in order, applying the malformed policy.
///
/// Only header format errors are skippable; anything else aborts.
fn assemble(
    results: impl IntoIterator<Item = Result<String>>,
    policy: MalformedPolicy,
) -> Result<CorpusOutput> {
    let mut output = CorpusOutput::default();
    for (index, result) in results.into_iter().enumerate() {
        match result {
            Ok(line) => output.lines.push(line),
            Err(error @ Error::Format(_)) if policy == MalformedPolicy::Skip => {
                warn!(document = index, %error, "skipping malformed document");
                output.skipped.push(SkippedDocument { index, error });
            }
            Err(error) => return Err(error),
        }
    }
    Ok(output)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FormatError;
    use crate::nlp::NormalizeOptions;
    use crate::pipeline::observer::StageTimingObserver;
    use crate::spans::SpanSet;

    fn document(author: &str, date: &str, body: &str) -> String {
        format!("TITLE\n{author}\n{date}\n\n{body}")
    }

    fn corpus(docs: &[String]) -> String {
        let mut text = String::from("PREAMBLE");
        for doc in docs {
            text.push_str("\n\n***\n\n");
            text.push_str(doc);
        }
        text.push_str("\n\n***\n\n");
        text
    }

    #[test]
    fn test_baseline_single_document() {
        let text = "PREAMBLE\n\n***\n\nTITLE\nJohn Smith\nJanuary 1, 1990\n\nHello world\n\n***\n\n";
        let output = Pipeline::baseline()
            .run_corpus(text, MalformedPolicy::Abort, &mut NoopObserver)
            .unwrap();
        assert_eq!(output.lines, vec!["1990 John_Smith Hello world"]);
        assert!(output.skipped.is_empty());
    }

    #[test]
    fn test_baseline_collapses_body_newlines() {
        let raw = document("Jane Doe", "March 4, 1861", "First line\nsecond line\n\nnext paragraph");
        let line = Pipeline::baseline()
            .run_document(&raw, &mut NoopObserver)
            .unwrap();
        assert_eq!(line, "1861 Jane_Doe First line second line next paragraph");
    }

    #[test]
    fn test_entities_merge_multiword_names() {
        let raw = document(
            "John Smith",
            "January 1, 1990",
            "The President met the United States of America delegation.",
        );
        let line = Pipeline::entities(None)
            .run_document(&raw, &mut NoopObserver)
            .unwrap();
        assert_eq!(
            line,
            "1990 John_Smith The President met the United_States_of_America delegation ."
        );
    }

    #[test]
    fn test_cleaned_entities_drop_punctuation() {
        let raw = document("John Smith", "January 1, 1990", "Congress praised the Panama Canal.");
        let pipeline = Pipeline::entities(Some(Normalizer::new(NormalizeOptions::default())));
        let doc = pipeline.collapse_document(&raw, &mut NoopObserver).unwrap();
        assert!(doc.tokens.contains(&"Panama_Canal".to_string()));
        assert!(!doc.tokens.contains(&".".to_string()));
        assert!(!doc.tokens.contains(&"the".to_string()));
    }

    #[test]
    fn test_noun_phrases_merge_chunks() {
        let raw = document("John Smith", "January 1, 1990", "the federal budget is large");
        let doc = Pipeline::noun_phrases(None)
            .collapse_document(&raw, &mut NoopObserver)
            .unwrap();
        assert_eq!(doc.tokens, vec!["the_federal_budget", "is", "large"]);
    }

    #[test]
    fn test_bigrams_merge_repeated_pair() {
        let pipeline = Pipeline::bigrams(1.0, Normalizer::default()).unwrap();
        let raw = document("John Smith", "January 1, 1990", "tariff reform, tariff reform.");
        let doc = pipeline.collapse_document(&raw, &mut NoopObserver).unwrap();
        assert_eq!(doc.tokens, vec!["tariff_reform", "tariff_reform"]);
    }

    #[test]
    fn test_bigrams_reject_bad_proportion() {
        assert!(Pipeline::bigrams(-0.5, Normalizer::default()).is_err());
    }

    #[test]
    fn test_malformed_document_aborts_by_default() {
        let text = corpus(&[
            document("John Smith", "January 1, 1990", "Hello world"),
            "no header here".to_string(),
        ]);
        let err = Pipeline::baseline()
            .run_corpus(&text, MalformedPolicy::Abort, &mut NoopObserver)
            .unwrap_err();
        assert!(matches!(
            err,
            Error::Format(FormatError::MissingHeaderDelimiter)
        ));
    }

    #[test]
    fn test_malformed_document_is_skipped() {
        let text = corpus(&[
            "TITLE\nOnly Author\n\nbody".to_string(),
            document("Jane Doe", "1862", "still here"),
        ]);
        let output = Pipeline::baseline()
            .par_run_corpus(&text, MalformedPolicy::Skip)
            .unwrap();
        assert_eq!(output.lines, vec!["1862 Jane_Doe still here"]);
        assert_eq!(output.skipped.len(), 1);
        assert_eq!(output.skipped[0].index, 0);
        assert!(matches!(
            output.skipped[0].error,
            Error::Format(FormatError::TooFewHeaderLines { .. })
        ));
    }

    #[test]
    fn test_parallel_matches_sequential_order() {
        let docs: Vec<String> = (0..32)
            .map(|i| document(&format!("Author {i}"), &format!("Day {}", 1800 + i), "some words here"))
            .collect();
        let text = corpus(&docs);
        let pipeline = Pipeline::entities(None);

        let sequential = pipeline
            .run_corpus(&text, MalformedPolicy::Abort, &mut NoopObserver)
            .unwrap();
        let parallel = pipeline.par_run_corpus(&text, MalformedPolicy::Abort).unwrap();

        assert_eq!(sequential.lines.len(), 32);
        assert_eq!(sequential.lines, parallel.lines);
        assert!(parallel.lines[31].starts_with("1831 Author_31 "));
    }

    #[test]
    fn test_timing_observer_sees_every_stage() {
        let raw = document("John Smith", "January 1, 1990", "Hello world");
        let mut obs = StageTimingObserver::new();
        Pipeline::bigrams(0.15, Normalizer::default())
            .unwrap()
            .run_document(&raw, &mut obs)
            .unwrap();

        let stage_names: Vec<&str> = obs.reports().iter().map(|(name, _)| *name).collect();
        assert_eq!(
            stage_names,
            vec![
                STAGE_HEADER,
                STAGE_TOKENIZE,
                STAGE_NORMALIZE,
                STAGE_SPANS,
                STAGE_COLLAPSE,
                STAGE_FORMAT,
            ]
        );
        assert_eq!(obs.reports()[1].1.tokens(), Some(2));
        assert!(obs.reports()[3].1.spans().is_some());
    }

    #[test]
    fn test_baseline_skips_normalize_stage() {
        let raw = document("John Smith", "January 1, 1990", "Hello world");
        let mut obs = StageTimingObserver::new();
        Pipeline::baseline().run_document(&raw, &mut obs).unwrap();
        assert!(obs.reports().iter().all(|(name, _)| *name != STAGE_NORMALIZE));
        assert_eq!(obs.reports().len(), 5);
    }

    /// Custom observer that captures the span sets handed to it.
    #[derive(Default)]
    struct SpanCapture {
        seen: Vec<SpanSet>,
    }

    impl PipelineObserver for SpanCapture {
        fn on_spans(&mut self, spans: &SpanSet) {
            self.seen.push(spans.clone());
        }
    }

    #[test]
    fn test_observer_receives_spans() {
        let raw = document("John Smith", "January 1, 1990", "We love New York.");
        let mut obs = SpanCapture::default();
        Pipeline::entities(None).run_document(&raw, &mut obs).unwrap();
        assert_eq!(obs.seen.len(), 1);
        assert_eq!(obs.seen[0].len(), 1);
    }

    #[test]
    fn test_dyn_pipeline() {
        let pipeline: DynPipeline = Pipeline::new(
            Box::new(WhitespaceTokenizer) as Box<dyn Tokenizer>,
            Box::new(NoSpans) as Box<dyn SpanSource>,
        );
        let raw = document("John Smith", "January 1, 1990", "Hello   world");
        assert_eq!(
            pipeline.run_document(&raw, &mut NoopObserver).unwrap(),
            "1990 John_Smith Hello world"
        );
    }
}
