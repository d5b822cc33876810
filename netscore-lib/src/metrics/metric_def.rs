use super::{Metric, ScoringPolicy};
use crate::Result;
use crate::documents::{LockDocument, Manifest};

pub const RAMP_UP_DOCUMENTED: f64 = 0.7;
pub const RAMP_UP_UNDOCUMENTED: f64 = 0.3;
pub const BUS_FACTOR_WITH_AUTHOR: f64 = 0.5;
pub const BUS_FACTOR_WITHOUT_AUTHOR: f64 = 0.2;
pub const RESPONSIVE_WITH_TIMES: f64 = 0.8;
pub const RESPONSIVE_WITHOUT_TIMES: f64 = 0.2;
pub const LICENSE_ACCEPTED: f64 = 1.0;
pub const LICENSE_REJECTED: f64 = 0.0;

/// Manifest keys whose presence suggests the package is documented.
const DOCUMENTATION_KEYS: &[&str] = &["readme", "description", "main"];

/// Everything a metric calculator may look at.
#[derive(Debug, Clone, Copy)]
pub struct ScoringInputs<'a> {
    pub manifest: &'a Manifest,
    pub lock: &'a LockDocument,
    pub policy: &'a ScoringPolicy,
}

#[derive(Debug)]
pub struct MetricDef {
    pub metric: Metric,
    pub description: &'static str,
    pub calculator: fn(&ScoringInputs<'_>) -> Result<f64>,
}

macro_rules! metric_def {
    ($metric:ident, $description:expr, $calculator:expr) => {
        MetricDef {
            metric: Metric::$metric,
            description: $description,
            calculator: $calculator,
        }
    };
}

pub const METRIC_DEFINITIONS: &[MetricDef] = &[
    metric_def!(
        RampUp,
        "Whether the manifest points at any documentation",
        |inputs| ramp_up(inputs.manifest)
    ),
    metric_def!(
        Correctness,
        "Share of locked packages that are not development-only",
        |inputs| correctness(inputs.lock)
    ),
    metric_def!(
        BusFactor,
        "Whether the manifest names an author",
        |inputs| bus_factor(inputs.manifest)
    ),
    metric_def!(
        ResponsiveMaintainer,
        "Whether any locked package records a publish time",
        |inputs| responsive_maintainer(inputs.lock)
    ),
    metric_def!(
        License,
        "Whether the manifest license is one of the accepted licenses",
        |inputs| license(inputs.manifest, &inputs.policy.accepted_licenses)
    ),
];

/// Scores whether `readme`, `description`, or `main` is present.
///
/// # Errors
///
/// Fails if the manifest is not an object.
pub fn ramp_up(manifest: &Manifest) -> Result<f64> {
    let fields = manifest.fields()?;
    if DOCUMENTATION_KEYS.iter().any(|key| fields.contains_key(*key)) {
        Ok(RAMP_UP_DOCUMENTED)
    } else {
        Ok(RAMP_UP_UNDOCUMENTED)
    }
}

/// Scores `1 - dev / total` over the locked packages; an empty lock scores `1.0`.
///
/// # Errors
///
/// Fails if the lock document, its `packages`, or any package record is not an object.
#[expect(clippy::cast_precision_loss, reason = "package counts are far below 2^52")]
pub fn correctness(lock: &LockDocument) -> Result<f64> {
    let packages = lock.packages()?;
    let total = packages.len();
    let outdated = packages.iter().filter(|p| p.is_dev()).count();

    if total == 0 {
        return Ok(1.0);
    }

    Ok(1.0 - outdated as f64 / total as f64)
}

/// Scores whether the manifest names an `author`.
///
/// # Errors
///
/// Fails if the manifest is not an object.
pub fn bus_factor(manifest: &Manifest) -> Result<f64> {
    if manifest.has_key("author")? {
        Ok(BUS_FACTOR_WITH_AUTHOR)
    } else {
        Ok(BUS_FACTOR_WITHOUT_AUTHOR)
    }
}

/// Scores whether at least one locked package has a `time` key.
///
/// # Errors
///
/// Fails if the lock document, its `packages`, or any package record is not an object.
pub fn responsive_maintainer(lock: &LockDocument) -> Result<f64> {
    if lock.packages()?.iter().any(|p| p.has_time()) {
        Ok(RESPONSIVE_WITH_TIMES)
    } else {
        Ok(RESPONSIVE_WITHOUT_TIMES)
    }
}

/// Scores whether the manifest license is in `accepted`, ignoring case. An absent license is rejected.
///
/// # Errors
///
/// Fails if the manifest is not an object or its `license` is not a string.
pub fn license(manifest: &Manifest, accepted: &[String]) -> Result<f64> {
    let license = manifest.license()?.unwrap_or_default().to_lowercase();
    if accepted.iter().any(|a| a.to_lowercase() == license) {
        Ok(LICENSE_ACCEPTED)
    } else {
        Ok(LICENSE_REJECTED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};
    use strum::IntoEnumIterator;

    fn manifest(value: Value) -> Manifest {
        Manifest::new(value)
    }

    fn lock(value: Value) -> LockDocument {
        LockDocument::new(value)
    }

    fn default_licenses() -> Vec<String> {
        ScoringPolicy::default().accepted_licenses
    }

    #[test]
    fn test_definitions_follow_metric_order() {
        let order: Vec<_> = METRIC_DEFINITIONS.iter().map(|d| d.metric).collect();
        let expected: Vec<_> = Metric::iter().collect();
        assert_eq!(order, expected);
    }

    #[test]
    fn test_ramp_up_without_documentation() {
        assert_eq!(ramp_up(&manifest(json!({}))).unwrap(), RAMP_UP_UNDOCUMENTED);
        assert_eq!(ramp_up(&manifest(json!({"name": "pkg", "author": "x"}))).unwrap(), RAMP_UP_UNDOCUMENTED);
    }

    #[test]
    fn test_ramp_up_any_documentation_key() {
        for key in ["readme", "description", "main"] {
            let mut fields = serde_json::Map::new();
            let _ = fields.insert(key.to_string(), json!(""));
            assert_eq!(ramp_up(&manifest(Value::Object(fields))).unwrap(), RAMP_UP_DOCUMENTED, "key {key}");
        }
    }

    #[test]
    fn test_ramp_up_non_object_fails() {
        assert!(ramp_up(&manifest(json!(null))).is_err());
    }

    #[test]
    fn test_correctness_empty_or_absent_packages() {
        assert_eq!(correctness(&lock(json!({}))).unwrap(), 1.0);
        assert_eq!(correctness(&lock(json!({"packages": {}}))).unwrap(), 1.0);
    }

    #[test]
    fn test_correctness_all_dev() {
        let doc = lock(json!({"packages": {"a": {"dev": true}, "b": {"dev": true}}}));
        assert_eq!(correctness(&doc).unwrap(), 0.0);
    }

    #[test]
    fn test_correctness_half_dev() {
        let doc = lock(json!({"packages": {"a": {"dev": true}, "b": {"time": "2023"}}}));
        assert!((correctness(&doc).unwrap() - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_correctness_list_packages_fails() {
        assert!(correctness(&lock(json!({"packages": [{"dev": true}]}))).is_err());
    }

    #[test]
    fn test_bus_factor() {
        assert_eq!(bus_factor(&manifest(json!({"author": "x"}))).unwrap(), BUS_FACTOR_WITH_AUTHOR);
        assert_eq!(bus_factor(&manifest(json!({"author": null}))).unwrap(), BUS_FACTOR_WITH_AUTHOR);
        assert_eq!(bus_factor(&manifest(json!({}))).unwrap(), BUS_FACTOR_WITHOUT_AUTHOR);
    }

    #[test]
    fn test_responsive_maintainer() {
        let with_time = lock(json!({"packages": {"a": {}, "b": {"time": "2023"}}}));
        let without_time = lock(json!({"packages": {"a": {"version": "1.0.0"}}}));
        assert_eq!(responsive_maintainer(&with_time).unwrap(), RESPONSIVE_WITH_TIMES);
        assert_eq!(responsive_maintainer(&without_time).unwrap(), RESPONSIVE_WITHOUT_TIMES);
        assert_eq!(responsive_maintainer(&lock(json!({}))).unwrap(), RESPONSIVE_WITHOUT_TIMES);
    }

    #[test]
    fn test_license_accepted_case_insensitive() {
        for name in ["MIT", "mit", "Apache-2.0", "apache-2.0", "LGPL-2.1-only"] {
            let doc = manifest(json!({"license": name}));
            assert_eq!(license(&doc, &default_licenses()).unwrap(), LICENSE_ACCEPTED, "license {name}");
        }
    }

    #[test]
    fn test_license_rejected() {
        let gpl = manifest(json!({"license": "gpl-3.0"}));
        assert_eq!(license(&gpl, &default_licenses()).unwrap(), LICENSE_REJECTED);
        assert_eq!(license(&manifest(json!({})), &default_licenses()).unwrap(), LICENSE_REJECTED);
    }

    #[test]
    fn test_license_non_string_fails() {
        assert!(license(&manifest(json!({"license": 7})), &default_licenses()).is_err());
    }

    #[test]
    fn test_license_custom_accepted_list() {
        let accepted = vec!["BSD-3-Clause".to_string()];
        let doc = manifest(json!({"license": "bsd-3-clause"}));
        assert_eq!(license(&doc, &accepted).unwrap(), LICENSE_ACCEPTED);
        let mit = manifest(json!({"license": "MIT"}));
        assert_eq!(license(&mit, &accepted).unwrap(), LICENSE_REJECTED);
    }
}
