//! Collocation scoring and selection
//!
//! Bigrams are counted per document, scored with the log-likelihood ratio
//! and the top fraction of bigram types is selected for merging.

pub mod finder;
pub mod measures;
pub mod selector;

pub use finder::{BigramFinder, ScoredBigram};
pub use measures::{likelihood_ratio, Marginals};
pub use selector::{bigram_spans, select_top_bigrams, top_count, CollocationSelector};
