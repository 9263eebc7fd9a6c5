//! Output variants
//!
//! Each variant is a different token representation of the same corpus:
//! - Baseline: the body split on whitespace, untouched
//! - Entities: multi-word named entities merged into compound tokens
//! - NounPhrases: noun chunks merged into compound tokens
//! - Bigrams: the strongest collocations merged over cleaned tokens
//!
//! [`standard_outputs`] lists the six classic output files.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{Error, Result};
use crate::nlp::{Normalizer, Tokenizer, WhitespaceTokenizer, WordTokenizer};
use crate::output::CorpusOutput;
use crate::pipeline::{
    BigramSpans, DynPipeline, EntitySpans, NoSpans, NounPhraseSpans, Pipeline, PipelineObserver,
    PipelineSpec, SpanSource,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Variant {
    Baseline,
    #[default]
    Entities,
    NounPhrases,
    Bigrams,
}

impl Variant {
    pub const ALL: [Variant; 4] = [
        Variant::Baseline,
        Variant::Entities,
        Variant::NounPhrases,
        Variant::Bigrams,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::Baseline => "baseline",
            Variant::Entities => "entities",
            Variant::NounPhrases => "noun_phrases",
            Variant::Bigrams => "bigrams",
        }
    }

    fn parse(value: &str) -> Option<Self> {
        match value.to_lowercase().replace('-', "_").as_str() {
            "baseline" | "raw" | "minimal" => Some(Variant::Baseline),
            "entities" | "entity" | "ner" => Some(Variant::Entities),
            "noun_phrases" | "nounphrases" | "noun_phrase" | "np" | "nps" => {
                Some(Variant::NounPhrases)
            }
            "bigrams" | "bigram" | "collocations" => Some(Variant::Bigrams),
            _ => None,
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Variant {
    type Err = Error;

    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        Variant::parse(value).ok_or_else(|| Error::InvalidSpec(format!("unknown variant {value:?}")))
    }
}

/// Build the pipeline a spec describes.
///
/// `clean` applies to entities and noun phrases only; bigrams always clean
/// and the baseline never does.
pub fn build_pipeline(spec: &PipelineSpec) -> Result<DynPipeline> {
    let normalizer = || Normalizer::new(spec.normalize);
    let word = || Box::new(WordTokenizer) as Box<dyn Tokenizer>;

    let pipeline = match spec.variant {
        Variant::Baseline => Pipeline::new(
            Box::new(WhitespaceTokenizer) as Box<dyn Tokenizer>,
            Box::new(NoSpans) as Box<dyn SpanSource>,
        ),
        Variant::Entities => Pipeline::new(
            word(),
            Box::new(EntitySpans::default()) as Box<dyn SpanSource>,
        ),
        Variant::NounPhrases => Pipeline::new(
            word(),
            Box::new(NounPhraseSpans::default()) as Box<dyn SpanSource>,
        ),
        Variant::Bigrams => {
            let source = BigramSpans::new(spec.bigrams.top_proportion)?;
            return Ok(Pipeline::new(word(), Box::new(source) as Box<dyn SpanSource>)
                .with_normalizer(normalizer()));
        }
    };

    if spec.clean && spec.variant != Variant::Baseline {
        Ok(pipeline.with_normalizer(normalizer()))
    } else {
        Ok(pipeline)
    }
}

/// Validate `spec` and run its variant over a corpus, documents in parallel.
pub fn run_variant(spec: &PipelineSpec, corpus: &str) -> Result<CorpusOutput> {
    spec.validate()?;
    build_pipeline(spec)?.par_run_corpus(corpus, spec.on_malformed)
}

/// Validate `spec` and run its variant sequentially, reporting every stage
/// to `observer`.
pub fn run_variant_observed(
    spec: &PipelineSpec,
    corpus: &str,
    observer: &mut impl PipelineObserver,
) -> Result<CorpusOutput> {
    spec.validate()?;
    build_pipeline(spec)?.run_corpus(corpus, spec.on_malformed, observer)
}

/// One of the classic output files.
#[derive(Debug, Clone)]
pub struct StandardOutput {
    pub file_name: String,
    pub spec: PipelineSpec,
}

/// The six classic outputs: baseline, entities, cleaned entities, noun
/// phrases, cleaned noun phrases and bigrams.
///
/// Every spec starts from `base`, so cleaning options, the bigram
/// proportion and the malformed policy carry over.
pub fn standard_outputs(prefix: &str, base: &PipelineSpec) -> Vec<StandardOutput> {
    let entry = |suffix: &str, variant: Variant, clean: bool| StandardOutput {
        file_name: format!("{prefix}_{suffix}.txt"),
        spec: PipelineSpec {
            variant,
            clean,
            ..base.clone()
        },
    };

    vec![
        entry("baseline", Variant::Baseline, false),
        entry("ner", Variant::Entities, false),
        entry("ner_cleaned", Variant::Entities, true),
        entry("np", Variant::NounPhrases, false),
        entry("np_cleaned", Variant::NounPhrases, true),
        entry("bigrams", Variant::Bigrams, false),
    ]
}

/// Write every standard output for `corpus` into `out_dir`, returning the
/// written paths in order.
pub fn write_standard_outputs(
    corpus: &str,
    out_dir: impl AsRef<Path>,
    prefix: &str,
    base: &PipelineSpec,
) -> Result<Vec<PathBuf>> {
    let out_dir = out_dir.as_ref();
    fs::create_dir_all(out_dir)?;

    let mut written = Vec::new();
    for output in standard_outputs(prefix, base) {
        let path = out_dir.join(&output.file_name);
        let result = run_variant(&output.spec, corpus)?;
        result.write_to(&path)?;
        info!(
            path = %path.display(),
            documents = result.lines.len(),
            skipped = result.skipped.len(),
            "wrote output"
        );
        written.push(path);
    }
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::{MalformedPolicy, StageTimingObserver};

    const CORPUS: &str = "PREAMBLE\n\n***\n\nTITLE\nJohn Smith\nJanuary 1, 1990\n\nHello world\n\n***\n\n";

    #[test]
    fn test_variant_parse_aliases() {
        assert_eq!("ner".parse::<Variant>().unwrap(), Variant::Entities);
        assert_eq!("Noun-Phrases".parse::<Variant>().unwrap(), Variant::NounPhrases);
        assert_eq!("np".parse::<Variant>().unwrap(), Variant::NounPhrases);
        assert_eq!("BIGRAMS".parse::<Variant>().unwrap(), Variant::Bigrams);
        assert_eq!("baseline".parse::<Variant>().unwrap(), Variant::Baseline);
    }

    #[test]
    fn test_variant_parse_rejects_unknown() {
        assert!(matches!(
            "trigrams".parse::<Variant>(),
            Err(Error::InvalidSpec(_))
        ));
    }

    #[test]
    fn test_variant_display_round_trips() {
        for variant in Variant::ALL {
            assert_eq!(variant.to_string().parse::<Variant>().unwrap(), variant);
        }
    }

    #[test]
    fn test_standard_outputs() {
        let base = PipelineSpec {
            on_malformed: MalformedPolicy::Skip,
            ..PipelineSpec::default()
        };
        let outputs = standard_outputs("sotu", &base);
        let names: Vec<&str> = outputs.iter().map(|o| o.file_name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "sotu_baseline.txt",
                "sotu_ner.txt",
                "sotu_ner_cleaned.txt",
                "sotu_np.txt",
                "sotu_np_cleaned.txt",
                "sotu_bigrams.txt",
            ]
        );
        assert!(outputs[2].spec.clean);
        assert_eq!(outputs[4].spec.variant, Variant::NounPhrases);
        assert!(outputs.iter().all(|o| o.spec.on_malformed == MalformedPolicy::Skip));
    }

    #[test]
    fn test_clean_is_ignored_for_baseline() {
        let spec = PipelineSpec {
            variant: Variant::Baseline,
            clean: true,
            ..PipelineSpec::default()
        };
        assert!(build_pipeline(&spec).unwrap().normalizer.is_none());
    }

    #[test]
    fn test_bigrams_always_normalize() {
        let spec = PipelineSpec {
            variant: Variant::Bigrams,
            ..PipelineSpec::default()
        };
        assert!(build_pipeline(&spec).unwrap().normalizer.is_some());
    }

    #[test]
    fn test_run_variant_baseline() {
        let spec = PipelineSpec {
            variant: Variant::Baseline,
            ..PipelineSpec::default()
        };
        let output = run_variant(&spec, CORPUS).unwrap();
        assert_eq!(output.to_text(), "1990 John_Smith Hello world");
    }

    #[test]
    fn test_run_variant_rejects_invalid_spec() {
        let mut spec = PipelineSpec::default();
        spec.bigrams.top_proportion = 3.0;
        assert!(matches!(run_variant(&spec, CORPUS), Err(Error::InvalidSpec(_))));
    }

    #[test]
    fn test_run_variant_observed_reports_stages() {
        let mut obs = StageTimingObserver::new();
        run_variant_observed(&PipelineSpec::default(), CORPUS, &mut obs).unwrap();
        assert_eq!(obs.reports().len(), 5);
    }

    #[test]
    fn test_write_standard_outputs() {
        let dir = tempfile::tempdir().unwrap();
        let written =
            write_standard_outputs(CORPUS, dir.path(), "sotu", &PipelineSpec::default()).unwrap();
        assert_eq!(written.len(), 6);
        let baseline = fs::read_to_string(dir.path().join("sotu_baseline.txt")).unwrap();
        assert_eq!(baseline, "1990 John_Smith Hello world");
        assert!(written.iter().all(|p| p.exists()));
    }
}
