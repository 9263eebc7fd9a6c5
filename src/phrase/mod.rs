//! Multi-token phrase detection
//!
//! This module provides noun chunk detection over tagged tokens and
//! capitalized-run entity detection.

pub mod chunker;
pub mod entities;

pub use chunker::{ChunkerConfig, NounChunker};
pub use entities::EntityRecognizer;
