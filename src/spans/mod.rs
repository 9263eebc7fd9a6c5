//! Span sets and span collapsing
//!
//! Providers emit spans over a token sequence; the collapser rewrites the
//! sequence so each span becomes a single compound token.

pub mod collapse;
pub mod set;

pub use collapse::{collapse, COMPOUND_SEPARATOR};
pub use set::SpanSet;
