//! Per-document processing pipeline
//!
//! A pipeline turns one raw document into one output line: header parsing,
//! tokenization, optional cleaning, span detection, collapsing and
//! formatting. [`PipelineSpec`] describes which pipeline to build and is
//! checked by the [`ValidationEngine`] before use.

pub mod artifacts;
pub mod error_code;
pub mod errors;
pub mod observer;
pub mod runner;
pub mod spec;
pub mod traits;
pub mod validation;

pub use artifacts::CollapsedDocument;
pub use error_code::ErrorCode;
pub use errors::PipelineSpecError;
pub use observer::{
    NoopObserver, PipelineObserver, StageClock, StageReport, StageReportBuilder,
    StageTimingObserver,
};
pub use runner::{
    BaselinePipeline, BigramPipeline, DynPipeline, EntityPipeline, NounPhrasePipeline, Pipeline,
};
pub use spec::{BigramSpec, MalformedPolicy, PipelineSpec};
pub use traits::{BigramSpans, EntitySpans, NoSpans, NounPhraseSpans, SpanSource};
pub use validation::{
    Severity, ValidationDiagnostic, ValidationEngine, ValidationReport, ValidationRule,
};
