//! Span-collapsing preprocessing for annual-speech corpora
//!
//! A corpus file holds many speeches separated by `***` lines. Each speech
//! is reduced to one line, `year author tokens...`, where multi-word units
//! (named entities, noun phrases or statistically strong bigrams) have been
//! joined into single underscore-separated tokens.
//!
//! ```
//! use sotu_spans::{run_variant, PipelineSpec, Variant};
//!
//! let corpus = "PREAMBLE\n\n***\n\nTITLE\nJohn Smith\nJanuary 1, 1990\n\nHello world\n\n***\n\n";
//! let spec = PipelineSpec { variant: Variant::Baseline, ..PipelineSpec::default() };
//! let output = run_variant(&spec, corpus).unwrap();
//! assert_eq!(output.to_text(), "1990 John_Smith Hello world");
//! ```

pub mod collocation;
pub mod corpus;
pub mod error;
pub mod nlp;
pub mod output;
pub mod phrase;
pub mod pipeline;
pub mod spans;
pub mod types;
pub mod variants;

pub use collocation::{select_top_bigrams, CollocationSelector, ScoredBigram};
pub use corpus::{parse_header, read_corpus, split_corpus, Speech};
pub use error::{Error, FormatError, PreconditionError, Result};
pub use nlp::{NormalizeOptions, Normalizer};
pub use output::{format_line, CorpusOutput};
pub use pipeline::{MalformedPolicy, Pipeline, PipelineSpec};
pub use spans::{collapse, SpanSet};
pub use types::{DocumentHeader, PosTag, Span, Token};
pub use variants::{
    run_variant, run_variant_observed, standard_outputs, write_standard_outputs, Variant,
};
