use super::{Metric, MetricScore};
use core::time::Duration;

pub const NET_SCORE_KEY: &str = "NetScore";
pub const NET_SCORE_LATENCY_KEY: &str = "NetScore_Latency";

/// Score and latency for one metric.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricOutcome {
    pub metric: Metric,
    pub score: MetricScore,
    pub latency: Duration,
}

/// The complete result of a scoring run.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricsReport {
    /// One outcome per metric, in reporting order.
    pub outcomes: Vec<MetricOutcome>,
    pub net_score: MetricScore,
    pub net_score_latency: Duration,
}

/// A single value in the flattened report.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ReportValue {
    Score(MetricScore),

    /// Seconds, rounded to milliseconds.
    Latency(f64),
}

impl MetricsReport {
    /// Look up a metric's score.
    #[must_use]
    pub fn score(&self, metric: Metric) -> Option<MetricScore> {
        self.outcomes.iter().find(|o| o.metric == metric).map(|o| o.score)
    }

    /// The report as ordered key/value pairs: each metric followed by its latency, then
    /// `NetScore` and `NetScore_Latency`.
    #[must_use]
    pub fn entries(&self) -> Vec<(&'static str, ReportValue)> {
        let mut entries = Vec::with_capacity(self.outcomes.len() * 2 + 2);
        for outcome in &self.outcomes {
            entries.push((outcome.metric.name(), ReportValue::Score(outcome.score)));
            entries.push((outcome.metric.latency_key(), ReportValue::Latency(round_latency(outcome.latency))));
        }
        entries.push((NET_SCORE_KEY, ReportValue::Score(self.net_score)));
        entries.push((NET_SCORE_LATENCY_KEY, ReportValue::Latency(round_latency(self.net_score_latency))));
        entries
    }
}

/// Seconds rounded to three decimal places.
#[must_use]
pub fn round_latency(latency: Duration) -> f64 {
    (latency.as_secs_f64() * 1000.0).round() / 1000.0
}
