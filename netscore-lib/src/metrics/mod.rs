//! Metric calculation engine
//!
//! This module turns a [`Manifest`](crate::documents::Manifest) and a
//! [`LockDocument`](crate::documents::LockDocument) into a [`MetricsReport`]:
//! five bounded sub-scores, one latency per sub-score, and the aggregate
//! `NetScore` with its own latency.
//!
//! # Implementation Model
//!
//! Each metric is a plain function registered in a static table
//! ([`METRIC_DEFINITIONS`]) that pairs a [`Metric`] tag with its calculator.
//! The table's order is the reporting order.
//!
//! [`calculate`] walks the table sequentially. Every calculator runs through
//! [`isolate`], which turns an error into [`MetricScore::Failed`] so a broken
//! input field only costs the metric that reads it. Wall-clock latency is taken
//! with a monotonic clock around each call, whether the metric succeeded or not.
//!
//! The `NetScore` is the unweighted mean of the five scores. Under the default
//! [`NetScorePolicy::IncludeFailures`] a failed metric contributes its `-1`
//! sentinel to that mean unchanged.

mod calculator;
mod isolate;
mod metric;
mod metric_def;
mod metrics_report;
mod scoring_policy;

pub use calculator::calculate;
pub use isolate::{MetricScore, isolate};
pub use metric::Metric;
pub use metric_def::{
    BUS_FACTOR_WITH_AUTHOR, BUS_FACTOR_WITHOUT_AUTHOR, LICENSE_ACCEPTED, LICENSE_REJECTED, METRIC_DEFINITIONS, MetricDef,
    RAMP_UP_DOCUMENTED, RAMP_UP_UNDOCUMENTED, RESPONSIVE_WITH_TIMES, RESPONSIVE_WITHOUT_TIMES, ScoringInputs, bus_factor,
    correctness, license, ramp_up, responsive_maintainer,
};
pub use metrics_report::{MetricOutcome, MetricsReport, ReportValue, round_latency};
pub use scoring_policy::{DEFAULT_ACCEPTED_LICENSES, NetScorePolicy, ScoringPolicy};
