//! Pipeline specification types.
//!
//! A [`PipelineSpec`] selects the output variant, the token cleaning
//! options, collocation settings and the malformed-document policy. These
//! types are the input to the [`super::validation::ValidationEngine`].
//!
//! # JSON shape
//!
//! ```json
//! {
//!   "v": 1,
//!   "variant": "bigrams",
//!   "clean": false,
//!   "normalize": { "keep_stopwords": false, "lowercase": true },
//!   "bigrams": { "top_proportion": 0.15 },
//!   "on_malformed": "skip",
//!   "strict": false
//! }
//! ```

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::validation::ValidationEngine;
use crate::error::{Error, Result};
use crate::nlp::NormalizeOptions;
use crate::variants::Variant;

/// Current spec version.
pub const SPEC_VERSION: u32 = 1;

/// Default fraction of bigram types kept as collocations.
pub const DEFAULT_TOP_PROPORTION: f64 = 0.15;

/// Top-level pipeline specification (v1).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineSpec {
    /// Spec version (currently `1`).
    pub v: u32,

    /// Which output representation to produce.
    #[serde(default)]
    pub variant: Variant,

    /// Clean tokens before looking for entities or noun phrases.
    #[serde(default)]
    pub clean: bool,

    /// Token cleaning options, used by `clean` and by the bigram variant.
    #[serde(default)]
    pub normalize: NormalizeOptions,

    #[serde(default)]
    pub bigrams: BigramSpec,

    /// What to do with a document whose header cannot be parsed.
    #[serde(default)]
    pub on_malformed: MalformedPolicy,

    /// If `true`, unrecognized fields are errors; if `false`, warnings.
    #[serde(default)]
    pub strict: bool,

    /// Captures any fields not recognized by the schema.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_json::Value>,
}

impl Default for PipelineSpec {
    fn default() -> Self {
        Self {
            v: SPEC_VERSION,
            variant: Variant::default(),
            clean: false,
            normalize: NormalizeOptions::default(),
            bigrams: BigramSpec::default(),
            on_malformed: MalformedPolicy::default(),
            strict: false,
            unknown_fields: HashMap::new(),
        }
    }
}

impl PipelineSpec {
    /// Parse a spec from JSON without validating it.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a spec file without validating it.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_json(&fs::read_to_string(path)?)
    }

    /// Run the default validation rules, logging warnings and failing on
    /// the first report that holds errors.
    pub fn validate(&self) -> Result<()> {
        let report = ValidationEngine::with_defaults().validate(self);
        for warning in report.warnings() {
            warn!(%warning, "pipeline spec warning");
        }
        if report.has_errors() {
            let messages: Vec<String> = report.errors().map(|e| e.to_string()).collect();
            return Err(Error::InvalidSpec(messages.join("; ")));
        }
        Ok(())
    }
}

/// Collocation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BigramSpec {
    /// Fraction of distinct bigram types kept, in `[0, 1]`.
    #[serde(default = "default_top_proportion")]
    pub top_proportion: f64,

    /// Captures any fields not recognized by the schema.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_json::Value>,
}

fn default_top_proportion() -> f64 {
    DEFAULT_TOP_PROPORTION
}

impl Default for BigramSpec {
    fn default() -> Self {
        Self {
            top_proportion: DEFAULT_TOP_PROPORTION,
            unknown_fields: HashMap::new(),
        }
    }
}

/// Handling of documents that fail header parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MalformedPolicy {
    /// Stop at the first malformed document.
    #[default]
    Abort,
    /// Log the document and leave it out of the output.
    Skip,
}
