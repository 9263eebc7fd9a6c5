//! Natural Language Processing components
//!
//! This module provides tokenization, token cleaning, stopword filtering
//! and a heuristic part-of-speech tagger.

pub mod normalizer;
pub mod stopwords;
pub mod tagger;
pub mod tokenizer;

pub use normalizer::{collapse_newlines, NormalizeOptions, Normalizer};
pub use stopwords::StopwordFilter;
pub use tagger::HeuristicTagger;
pub use tokenizer::{Tokenizer, WhitespaceTokenizer, WordTokenizer};
