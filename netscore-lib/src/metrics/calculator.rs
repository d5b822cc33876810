use super::{METRIC_DEFINITIONS, MetricOutcome, MetricsReport, ScoringInputs, ScoringPolicy, isolate};
use crate::documents::{LockDocument, Manifest};
use std::time::Instant;

const LOG_TARGET: &str = "   metrics";

/// Compute every metric in order, then the `NetScore`.
///
/// Each metric is attempted exactly once. A failing metric is reported as
/// [`MetricScore::Failed`](super::MetricScore::Failed) and does not affect the
/// others. The `NetScore` latency is measured from the start of the last
/// metric's timer, so it includes that metric's own running time.
#[must_use]
pub fn calculate(manifest: &Manifest, lock: &LockDocument, policy: &ScoringPolicy) -> MetricsReport {
    let inputs = ScoringInputs { manifest, lock, policy };

    let mut outcomes = Vec::with_capacity(METRIC_DEFINITIONS.len());
    let mut last_start = Instant::now();

    for def in METRIC_DEFINITIONS {
        last_start = Instant::now();
        let score = isolate(def.metric, || (def.calculator)(&inputs));
        let latency = last_start.elapsed();

        log::debug!(target: LOG_TARGET, "{} = {score:?} in {:.3}s", def.metric, latency.as_secs_f64());
        outcomes.push(MetricOutcome {
            metric: def.metric,
            score,
            latency,
        });
    }

    let net_score = policy.net_score.aggregate(outcomes.iter().map(|o| o.score));
    let net_score_latency = last_start.elapsed();

    log::info!(target: LOG_TARGET, "NetScore = {:.3}", net_score.as_f64());

    MetricsReport {
        outcomes,
        net_score,
        net_score_latency,
    }
}
