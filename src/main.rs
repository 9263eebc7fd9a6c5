//! Command-line interface for sotu-spans
//!
//! Usage:
//!   sotu-spans `<corpus>` [--variant `<variant>`] [--clean] [--output `<file>`]
//!   sotu-spans `<corpus>` --all --out-dir `<dir>` [--prefix `<prefix>`]

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use sotu_spans::pipeline::StageTimingObserver;
use sotu_spans::{
    read_corpus, run_variant, run_variant_observed, write_standard_outputs, MalformedPolicy,
    PipelineSpec, Variant,
};

#[derive(Parser, Debug)]
#[command(name = "sotu-spans", version)]
#[command(about = "Collapse entities, noun phrases or collocations in a speech corpus")]
struct Args {
    /// Corpus file with documents separated by `***` lines
    corpus: PathBuf,

    /// JSON pipeline spec; flags below override its fields
    #[arg(long)]
    config: Option<PathBuf>,

    /// baseline, entities, noun_phrases or bigrams
    #[arg(long, conflicts_with = "all")]
    variant: Option<Variant>,

    /// Clean tokens before finding entities or noun phrases
    #[arg(long)]
    clean: bool,

    /// Fraction of bigram types merged by the bigram variant
    #[arg(long)]
    top_proportion: Option<f64>,

    #[arg(long)]
    keep_stopwords: bool,

    #[arg(long)]
    keep_punctuation: bool,

    #[arg(long)]
    keep_numbers: bool,

    #[arg(long)]
    lowercase: bool,

    /// Leave out documents with a malformed header instead of failing
    #[arg(long)]
    skip_malformed: bool,

    /// Write the output here instead of stdout
    #[arg(long, short, conflicts_with = "all")]
    output: Option<PathBuf>,

    /// Write all six standard outputs into --out-dir
    #[arg(long, requires = "out_dir")]
    all: bool,

    #[arg(long)]
    out_dir: Option<PathBuf>,

    /// File name prefix for --all
    #[arg(long, default_value = "sotu")]
    prefix: String,

    /// Process documents one at a time and log per-stage timings
    #[arg(long)]
    sequential: bool,
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let args = Args::parse();

    let spec = load_spec(&args)?;
    let corpus = read_corpus(&args.corpus)
        .with_context(|| format!("failed to read corpus {}", args.corpus.display()))?;

    if args.all {
        let out_dir = args
            .out_dir
            .as_ref()
            .context("--all needs --out-dir")?;
        let written = write_standard_outputs(&corpus, out_dir, &args.prefix, &spec)?;
        info!(files = written.len(), dir = %out_dir.display(), "standard outputs written");
        return Ok(());
    }

    info!(variant = %spec.variant, clean = spec.clean, "processing corpus");
    let output = if args.sequential {
        let mut observer = StageTimingObserver::new();
        let output = run_variant_observed(&spec, &corpus, &mut observer)?;
        for (stage, total) in observer.totals() {
            info!(stage, elapsed_ms = total.as_millis() as u64, "stage total");
        }
        output
    } else {
        run_variant(&spec, &corpus)?
    };

    if !output.skipped.is_empty() {
        warn!(skipped = output.skipped.len(), "some documents were skipped");
    }

    match &args.output {
        Some(path) => {
            output
                .write_to(path)
                .with_context(|| format!("failed to write {}", path.display()))?;
            info!(path = %path.display(), documents = output.lines.len(), "wrote output");
        }
        None => println!("{}", output.to_text()),
    }
    Ok(())
}

/// Start from the config file (or defaults) and apply flag overrides.
fn load_spec(args: &Args) -> anyhow::Result<PipelineSpec> {
    let mut spec = match &args.config {
        Some(path) => PipelineSpec::load(path)
            .with_context(|| format!("failed to load spec {}", path.display()))?,
        None => PipelineSpec::default(),
    };

    if let Some(variant) = args.variant {
        spec.variant = variant;
    }
    if let Some(top_proportion) = args.top_proportion {
        spec.bigrams.top_proportion = top_proportion;
    }
    spec.clean |= args.clean;
    spec.normalize.keep_stopwords |= args.keep_stopwords;
    spec.normalize.keep_punctuation |= args.keep_punctuation;
    spec.normalize.keep_numbers |= args.keep_numbers;
    spec.normalize.lowercase |= args.lowercase;
    if args.skip_malformed {
        spec.on_malformed = MalformedPolicy::Skip;
    }
    Ok(spec)
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_level(true)
        .with_writer(std::io::stderr)
        .init();
}
