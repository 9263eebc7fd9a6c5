//! Ordered span sets
//!
//! A [`SpanSet`] maps each start index to one end index. Inserting a second
//! span at an occupied start replaces the first (last write wins), and
//! iteration is always in ascending start order.

use std::collections::BTreeMap;

use tracing::debug;

use crate::error::PreconditionError;
use crate::types::Span;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpanSet {
    by_start: BTreeMap<usize, usize>,
}

impl SpanSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from provider output, dropping trivial spans
    ///
    /// Spans are inserted in the order given, so a later span sharing a
    /// start with an earlier one wins.
    pub fn from_spans(spans: impl IntoIterator<Item = Span>) -> Self {
        let mut set = Self::new();
        for span in spans {
            if span.is_trivial() {
                continue;
            }
            if let Some(previous) = set.insert(span) {
                debug!(%previous, replacement = %span, "span start reused; keeping the later span");
            }
        }
        set
    }

    /// Insert a span, returning the span it replaced at the same start
    pub fn insert(&mut self, span: Span) -> Option<Span> {
        self.by_start
            .insert(span.start, span.end)
            .map(|end| Span::new(span.start, end))
    }

    pub fn len(&self) -> usize {
        self.by_start.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_start.is_empty()
    }

    /// Spans in ascending start order
    pub fn iter(&self) -> impl Iterator<Item = Span> + '_ {
        self.by_start.iter().map(|(&start, &end)| Span::new(start, end))
    }

    /// Span starting exactly at `start`, if any
    pub fn get(&self, start: usize) -> Option<Span> {
        self.by_start.get(&start).map(|&end| Span::new(start, end))
    }

    /// Verify every span fits in `len` tokens and no two spans overlap
    pub fn validate(&self, len: usize) -> Result<(), PreconditionError> {
        let mut previous: Option<Span> = None;
        for span in self.iter() {
            if span.end > len || span.end < span.start {
                return Err(PreconditionError::SpanOutOfRange { span, len });
            }
            if let Some(prev) = previous {
                if span.start < prev.end {
                    return Err(PreconditionError::OverlappingSpans {
                        first: prev,
                        second: span,
                    });
                }
            }
            previous = Some(span);
        }
        Ok(())
    }
}

impl FromIterator<Span> for SpanSet {
    fn from_iter<I: IntoIterator<Item = Span>>(iter: I) -> Self {
        Self::from_spans(iter)
    }
}
