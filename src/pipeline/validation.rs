//! Pipeline spec checks.
//!
//! A [`ValidationEngine`] holds a list of [`ValidationRule`]s. Every rule
//! sees the whole [`PipelineSpec`] and appends its findings to one shared
//! [`ValidationReport`], so a spec with three problems reports all three.

use std::collections::HashMap;

use serde::Serialize;

use super::error_code::ErrorCode;
use super::errors::PipelineSpecError;
use super::spec::{PipelineSpec, SPEC_VERSION};
use crate::variants::Variant;

/// Errors reject the spec; warnings are logged and ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Error,
    Warning,
}

/// One finding, tagged with its severity.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationDiagnostic {
    pub severity: Severity,
    #[serde(flatten)]
    pub error: PipelineSpecError,
}

impl ValidationDiagnostic {
    pub fn error(error: PipelineSpecError) -> Self {
        Self {
            severity: Severity::Error,
            error,
        }
    }

    pub fn warning(error: PipelineSpecError) -> Self {
        Self {
            severity: Severity::Warning,
            error,
        }
    }

    fn with_severity(severity: Severity, error: PipelineSpecError) -> Self {
        Self { severity, error }
    }
}

/// Everything the rules found, in rule order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidationReport {
    pub diagnostics: Vec<ValidationDiagnostic>,
}

impl ValidationReport {
    fn of_severity(&self, severity: Severity) -> impl Iterator<Item = &PipelineSpecError> {
        self.diagnostics
            .iter()
            .filter(move |d| d.severity == severity)
            .map(|d| &d.error)
    }

    pub fn errors(&self) -> impl Iterator<Item = &PipelineSpecError> {
        self.of_severity(Severity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &PipelineSpecError> {
        self.of_severity(Severity::Warning)
    }

    pub fn has_errors(&self) -> bool {
        self.errors().next().is_some()
    }

    /// No errors; warnings are allowed
    pub fn is_valid(&self) -> bool {
        !self.has_errors()
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

/// A check over a [`PipelineSpec`].
pub trait ValidationRule: Send + Sync {
    /// Stable identifier, e.g. `"top_proportion"`
    fn name(&self) -> &str;

    /// Append any findings to `out`
    fn check(&self, spec: &PipelineSpec, out: &mut Vec<ValidationDiagnostic>);
}

pub struct ValidationEngine {
    rules: Vec<Box<dyn ValidationRule>>,
}

impl ValidationEngine {
    /// An engine with no rules; everything passes.
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Version, proportion range, ineffective `clean`, unknown fields.
    pub fn with_defaults() -> Self {
        let mut engine = Self::new();
        engine.add_rule(Box::new(VersionRule));
        engine.add_rule(Box::new(TopProportionRule));
        engine.add_rule(Box::new(CleanOptionRule));
        engine.add_rule(Box::new(UnknownFieldsRule));
        engine
    }

    pub fn add_rule(&mut self, rule: Box<dyn ValidationRule>) {
        self.rules.push(rule);
    }

    pub fn rule_names(&self) -> Vec<&str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    pub fn validate(&self, spec: &PipelineSpec) -> ValidationReport {
        let mut diagnostics = Vec::new();
        for rule in &self.rules {
            rule.check(spec, &mut diagnostics);
        }
        ValidationReport { diagnostics }
    }
}

impl Default for ValidationEngine {
    fn default() -> Self {
        Self::with_defaults()
    }
}

// ---------------------------------------------------------------------------
// Rules
// ---------------------------------------------------------------------------

struct VersionRule;

impl ValidationRule for VersionRule {
    fn name(&self) -> &str {
        "version"
    }

    fn check(&self, spec: &PipelineSpec, out: &mut Vec<ValidationDiagnostic>) {
        if spec.v != SPEC_VERSION {
            out.push(ValidationDiagnostic::error(
                PipelineSpecError::new(
                    ErrorCode::UnsupportedVersion,
                    "/v",
                    format!("spec version {} is not supported", spec.v),
                )
                .with_hint(format!("Set \"v\": {SPEC_VERSION}")),
            ));
        }
    }
}

/// `top_proportion` must lie in `[0, 1]`; NaN fails too.
struct TopProportionRule;

impl ValidationRule for TopProportionRule {
    fn name(&self) -> &str {
        "top_proportion"
    }

    fn check(&self, spec: &PipelineSpec, out: &mut Vec<ValidationDiagnostic>) {
        let p = spec.bigrams.top_proportion;
        if !(0.0..=1.0).contains(&p) {
            out.push(ValidationDiagnostic::error(
                PipelineSpecError::new(
                    ErrorCode::OutOfRange,
                    "/bigrams/top_proportion",
                    format!("top_proportion must be within [0, 1], got {p}"),
                )
                .with_hint("0.15 keeps the strongest 15% of bigram types"),
            ));
        }
    }
}

/// `clean` only changes the entity and noun-phrase variants.
struct CleanOptionRule;

impl ValidationRule for CleanOptionRule {
    fn name(&self) -> &str {
        "clean_option"
    }

    fn check(&self, spec: &PipelineSpec, out: &mut Vec<ValidationDiagnostic>) {
        let ineffective = matches!(spec.variant, Variant::Baseline | Variant::Bigrams);
        if spec.clean && ineffective {
            out.push(ValidationDiagnostic::warning(
                PipelineSpecError::new(
                    ErrorCode::IneffectiveOption,
                    "/clean",
                    format!("clean has no effect for the {} variant", spec.variant),
                )
                .with_hint("The bigram variant always cleans; the baseline never does"),
            ));
        }
    }
}

/// Fields serde did not recognize. Errors under `strict`, warnings
/// otherwise.
struct UnknownFieldsRule;

impl UnknownFieldsRule {
    fn report(
        prefix: &str,
        fields: &HashMap<String, serde_json::Value>,
        severity: Severity,
        out: &mut Vec<ValidationDiagnostic>,
    ) {
        let mut keys: Vec<&str> = fields.keys().map(String::as_str).collect();
        keys.sort_unstable();
        for key in keys {
            out.push(ValidationDiagnostic::with_severity(
                severity,
                PipelineSpecError::new(
                    ErrorCode::UnknownField,
                    format!("{prefix}/{key}"),
                    format!("field \"{key}\" is not a recognized pipeline option"),
                )
                .with_hint("Check the spelling or drop the field"),
            ));
        }
    }
}

impl ValidationRule for UnknownFieldsRule {
    fn name(&self) -> &str {
        "unknown_fields"
    }

    fn check(&self, spec: &PipelineSpec, out: &mut Vec<ValidationDiagnostic>) {
        let severity = if spec.strict {
            Severity::Error
        } else {
            Severity::Warning
        };
        Self::report("", &spec.unknown_fields, severity, out);
        Self::report("/bigrams", &spec.bigrams.unknown_fields, severity, out);
    }
}
