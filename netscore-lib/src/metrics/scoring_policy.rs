use super::MetricScore;
use serde::{Deserialize, Serialize};

/// License identifiers that earn a full license score, compared case-insensitively.
pub const DEFAULT_ACCEPTED_LICENSES: &[&str] = &["mit", "apache-2.0", "lgpl-2.1-only"];

/// How failed metrics participate in the `NetScore` mean.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum NetScorePolicy {
    /// Average all five scores, counting a failure as its `-1` sentinel.
    #[default]
    IncludeFailures,

    /// Average only the scores that succeeded; the result fails if none did.
    ExcludeFailures,
}

/// Tunable inputs to the scoring engine. The default reproduces the stock heuristics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoringPolicy {
    pub accepted_licenses: Vec<String>,
    pub net_score: NetScorePolicy,
}

impl Default for ScoringPolicy {
    fn default() -> Self {
        Self {
            accepted_licenses: DEFAULT_ACCEPTED_LICENSES.iter().map(|&s| s.to_string()).collect(),
            net_score: NetScorePolicy::default(),
        }
    }
}

impl NetScorePolicy {
    /// Combine per-metric scores into the `NetScore`.
    #[expect(clippy::cast_precision_loss, reason = "there are only ever a handful of metrics")]
    pub fn aggregate(self, scores: impl IntoIterator<Item = MetricScore>) -> MetricScore {
        let scores: Vec<_> = scores.into_iter().collect();
        match self {
            Self::IncludeFailures => {
                if scores.is_empty() {
                    return MetricScore::Failed;
                }
                let sum: f64 = scores.iter().map(|s| s.as_f64()).sum();
                MetricScore::Value(sum / scores.len() as f64)
            }
            Self::ExcludeFailures => {
                let succeeded: Vec<f64> = scores.iter().filter_map(|s| s.value()).collect();
                if succeeded.is_empty() {
                    return MetricScore::Failed;
                }
                MetricScore::Value(succeeded.iter().sum::<f64>() / succeeded.len() as f64)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_default_policy_matches_stock_heuristics() {
        let policy = ScoringPolicy::default();
        assert_eq!(policy.accepted_licenses, ["mit", "apache-2.0", "lgpl-2.1-only"]);
        assert_eq!(policy.net_score, NetScorePolicy::IncludeFailures);
    }

    #[test]
    fn test_include_failures_averages_all() {
        let scores = [0.3, 0.5, 0.5, 0.8, 1.0].map(MetricScore::Value);
        let net = NetScorePolicy::IncludeFailures.aggregate(scores).value().unwrap();
        assert!(close(net, 0.62));
    }

    #[test]
    fn test_include_failures_counts_sentinel_verbatim() {
        let scores = [
            MetricScore::Value(0.3),
            MetricScore::Failed,
            MetricScore::Value(0.5),
            MetricScore::Value(0.8),
            MetricScore::Value(1.0),
        ];
        let net = NetScorePolicy::IncludeFailures.aggregate(scores).value().unwrap();
        assert!(close(net, (0.3 - 1.0 + 0.5 + 0.8 + 1.0) / 5.0));
    }

    #[test]
    fn test_include_failures_can_go_negative() {
        let scores = [MetricScore::Failed; 5];
        let net = NetScorePolicy::IncludeFailures.aggregate(scores).value().unwrap();
        assert!(close(net, -1.0));
    }

    #[test]
    fn test_exclude_failures_skips_sentinels() {
        let scores = [
            MetricScore::Value(0.3),
            MetricScore::Failed,
            MetricScore::Value(0.5),
            MetricScore::Value(0.8),
            MetricScore::Value(1.0),
        ];
        let net = NetScorePolicy::ExcludeFailures.aggregate(scores).value().unwrap();
        assert!(close(net, 2.6 / 4.0));
    }

    #[test]
    fn test_exclude_failures_all_failed() {
        let scores = [MetricScore::Failed; 5];
        assert_eq!(NetScorePolicy::ExcludeFailures.aggregate(scores), MetricScore::Failed);
    }

    #[test]
    fn test_policy_names_are_kebab_case() {
        let policy: NetScorePolicy = serde_json::from_str("\"exclude-failures\"").unwrap();
        assert_eq!(policy, NetScorePolicy::ExcludeFailures);
    }
}
