//! Top-bigram selection and conversion to spans
//!
//! Selection works on bigram types. Turning the selected types back into
//! positions uses a single left-to-right scan: wherever the pair at
//! `(i, i + 1)` is selected it becomes a span and the scan resumes at
//! `i + 2`. In a chained run `a b c` where both `a b` and `b c` are
//! selected, `a b` wins because it starts first.

use rustc_hash::FxHashSet;

use super::finder::{BigramFinder, ScoredBigram};
use super::measures::likelihood_ratio;
use crate::error::PreconditionError;
use crate::spans::SpanSet;
use crate::types::Span;

/// Number of bigram types kept for a given proportion
pub fn top_count(num_bigrams: usize, top_proportion: f64) -> usize {
    ((num_bigrams as f64 * top_proportion).ceil() as usize).min(num_bigrams)
}

fn check_proportion(top_proportion: f64) -> Result<(), PreconditionError> {
    if (0.0..=1.0).contains(&top_proportion) {
        Ok(())
    } else {
        Err(PreconditionError::ProportionOutOfRange(top_proportion))
    }
}

/// Rank all bigrams by likelihood ratio and keep the top fraction of types
pub fn select_top_bigrams<S: AsRef<str>>(
    tokens: &[S],
    top_proportion: f64,
) -> Result<Vec<ScoredBigram>, PreconditionError> {
    check_proportion(top_proportion)?;

    let finder = BigramFinder::from_words(tokens);
    let mut scored = finder.score_bigrams(likelihood_ratio);
    scored.truncate(top_count(scored.len(), top_proportion));
    Ok(scored)
}

/// Positions of selected bigrams, consumed left to right without overlap
pub fn bigram_spans<S: AsRef<str>>(tokens: &[S], selected: &[ScoredBigram]) -> SpanSet {
    let wanted: FxHashSet<(&str, &str)> = selected
        .iter()
        .map(|s| (s.bigram.0.as_str(), s.bigram.1.as_str()))
        .collect();

    let mut spans = SpanSet::new();
    let mut i = 0;
    while i + 1 < tokens.len() {
        if wanted.contains(&(tokens[i].as_ref(), tokens[i + 1].as_ref())) {
            spans.insert(Span::new(i, i + 2));
            i += 2;
        } else {
            i += 1;
        }
    }
    spans
}

/// Likelihood-ratio collocation selector
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollocationSelector {
    top_proportion: f64,
}

impl CollocationSelector {
    pub fn new(top_proportion: f64) -> Result<Self, PreconditionError> {
        check_proportion(top_proportion)?;
        Ok(Self { top_proportion })
    }

    pub fn top_proportion(&self) -> f64 {
        self.top_proportion
    }

    pub fn select<S: AsRef<str>>(&self, tokens: &[S]) -> Vec<ScoredBigram> {
        let finder = BigramFinder::from_words(tokens);
        let mut scored = finder.score_bigrams(likelihood_ratio);
        scored.truncate(top_count(scored.len(), self.top_proportion));
        scored
    }

    /// Select collocations and locate them in `tokens`
    pub fn spans<S: AsRef<str>>(&self, tokens: &[S]) -> SpanSet {
        let selected = self.select(tokens);
        bigram_spans(tokens, &selected)
    }
}
