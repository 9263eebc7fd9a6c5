//! Span collapsing
//!
//! Every span is rewritten against the original index space: the head
//! position receives the underscore-joined text of the whole range and the
//! remaining positions become empty tombstones. Empty entries are removed
//! in one final pass, so no index is ever shifted mid-rewrite.

use super::set::SpanSet;
use crate::error::PreconditionError;

/// Separator used inside compound tokens
pub const COMPOUND_SEPARATOR: &str = "_";

/// Collapse each span of `tokens` into one compound token
///
/// Fails fast if a span reaches past the end of `tokens` or two spans
/// overlap. Empty input tokens are dropped along with the tombstones.
pub fn collapse<S: AsRef<str>>(
    tokens: &[S],
    spans: &SpanSet,
) -> Result<Vec<String>, PreconditionError> {
    spans.validate(tokens.len())?;

    let mut slots: Vec<String> = tokens.iter().map(|t| t.as_ref().to_string()).collect();

    for span in spans.iter() {
        if span.is_trivial() {
            continue;
        }
        let compound = tokens[span.start..span.end]
            .iter()
            .map(|t| t.as_ref())
            .collect::<Vec<_>>()
            .join(COMPOUND_SEPARATOR);
        slots[span.start] = compound;
        for slot in &mut slots[span.start + 1..span.end] {
            slot.clear();
        }
    }

    slots.retain(|slot| !slot.is_empty());
    Ok(slots)
}
