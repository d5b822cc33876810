use super::Metric;
use crate::Result;

const LOG_TARGET: &str = "   metrics";

/// Outcome of a single metric calculation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MetricScore {
    /// The metric produced a score.
    Value(f64),

    /// The metric could not be computed; reported as the `-1` sentinel.
    Failed,
}

impl MetricScore {
    /// Numeric stand-in used for a failed metric.
    pub const SENTINEL: f64 = -1.0;

    /// The score, or [`Self::SENTINEL`] for a failure.
    #[must_use]
    pub const fn as_f64(self) -> f64 {
        match self {
            Self::Value(v) => v,
            Self::Failed => Self::SENTINEL,
        }
    }

    #[must_use]
    pub const fn value(self) -> Option<f64> {
        match self {
            Self::Value(v) => Some(v),
            Self::Failed => None,
        }
    }

    #[must_use]
    pub const fn is_failed(self) -> bool {
        matches!(self, Self::Failed)
    }
}

/// Run a metric calculation, converting any error into [`MetricScore::Failed`].
///
/// The error never reaches the caller; it is only logged.
pub fn isolate<F>(metric: Metric, compute: F) -> MetricScore
where
    F: FnOnce() -> Result<f64>,
{
    match compute() {
        Ok(score) => MetricScore::Value(score),
        Err(e) => {
            log::debug!(target: LOG_TARGET, "{metric} could not be computed: {e:#}");
            MetricScore::Failed
        }
    }
}
