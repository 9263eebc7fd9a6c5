//! Pipeline observer: hooks for logging, profiling, and debugging.
//!
//! Observers receive notifications at stage boundaries without coupling to
//! stage logic. [`StageTimingObserver`] records a [`StageReport`] for each
//! stage; [`NoopObserver`] ignores everything.

use std::time::{Duration, Instant};

use crate::spans::SpanSet;

pub const STAGE_HEADER: &str = "header";
pub const STAGE_TOKENIZE: &str = "tokenize";
pub const STAGE_NORMALIZE: &str = "normalize";
pub const STAGE_SPANS: &str = "spans";
pub const STAGE_COLLAPSE: &str = "collapse";
pub const STAGE_FORMAT: &str = "format";

/// Wall-clock timer for a single stage.
#[derive(Debug, Clone, Copy)]
pub struct StageClock {
    started: Instant,
}

impl StageClock {
    pub fn start() -> Self {
        Self {
            started: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }
}

/// What a stage did, as seen from outside.
///
/// Counts are optional because not every stage produces tokens or spans.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StageReport {
    elapsed: Duration,
    tokens: Option<usize>,
    spans: Option<usize>,
}

impl StageReport {
    pub fn new(elapsed: Duration) -> Self {
        Self {
            elapsed,
            ..Self::default()
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Tokens leaving the stage
    pub fn tokens(&self) -> Option<usize> {
        self.tokens
    }

    /// Spans found by the stage
    pub fn spans(&self) -> Option<usize> {
        self.spans
    }
}

/// Builder for [`StageReport`]s carrying counts.
#[derive(Debug, Clone, Copy)]
pub struct StageReportBuilder {
    report: StageReport,
}

impl StageReportBuilder {
    pub fn new(elapsed: Duration) -> Self {
        Self {
            report: StageReport::new(elapsed),
        }
    }

    pub fn tokens(mut self, count: usize) -> Self {
        self.report.tokens = Some(count);
        self
    }

    pub fn spans(mut self, count: usize) -> Self {
        self.report.spans = Some(count);
        self
    }

    pub fn build(self) -> StageReport {
        self.report
    }
}

/// Stage boundary callbacks. Every method defaults to doing nothing.
pub trait PipelineObserver {
    fn on_stage_start(&mut self, _stage: &'static str) {}

    fn on_stage_end(&mut self, _stage: &'static str, _report: &StageReport) {}

    /// Called with the span set a provider produced, before collapsing
    fn on_spans(&mut self, _spans: &SpanSet) {}
}

/// Observer that ignores every notification.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl PipelineObserver for NoopObserver {}

/// Records the report of every finished stage, in order.
#[derive(Debug, Clone, Default)]
pub struct StageTimingObserver {
    reports: Vec<(&'static str, StageReport)>,
}

impl StageTimingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reports(&self) -> &[(&'static str, StageReport)] {
        &self.reports
    }

    /// Summed elapsed time per stage name, in first-seen order
    pub fn totals(&self) -> Vec<(&'static str, Duration)> {
        let mut totals: Vec<(&'static str, Duration)> = Vec::new();
        for (stage, report) in &self.reports {
            match totals.iter_mut().find(|(name, _)| name == stage) {
                Some((_, total)) => *total += report.elapsed(),
                None => totals.push((stage, report.elapsed())),
            }
        }
        totals
    }

    pub fn clear(&mut self) {
        self.reports.clear();
    }
}

impl PipelineObserver for StageTimingObserver {
    fn on_stage_end(&mut self, stage: &'static str, report: &StageReport) {
        self.reports.push((stage, *report));
    }
}
