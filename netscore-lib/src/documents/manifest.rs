use crate::Result;
use ohno::app_err;
use serde_json::{Map, Value};

/// Top-level package metadata such as `readme`, `description`, `author`, or `license`.
///
/// Every key is optional; absence is meaningful and never an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Manifest(Value);

impl Manifest {
    #[must_use]
    pub const fn new(value: Value) -> Self {
        Self(value)
    }

    #[must_use]
    pub const fn as_value(&self) -> &Value {
        &self.0
    }

    /// The manifest's top-level fields.
    ///
    /// # Errors
    ///
    /// Returns an error if the manifest is not a JSON object.
    pub fn fields(&self) -> Result<&Map<String, Value>> {
        self.0
            .as_object()
            .ok_or_else(|| app_err!("manifest is a JSON {}, expected an object", json_kind(&self.0)))
    }

    /// Whether the manifest carries `key`, regardless of its value.
    ///
    /// # Errors
    ///
    /// Returns an error if the manifest is not a JSON object.
    pub fn has_key(&self, key: &str) -> Result<bool> {
        Ok(self.fields()?.contains_key(key))
    }

    /// The `license` field, or `None` when absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the manifest is not an object or `license` is present but not a string.
    pub fn license(&self) -> Result<Option<&str>> {
        match self.fields()?.get("license") {
            None => Ok(None),
            Some(Value::String(s)) => Ok(Some(s.as_str())),
            Some(other) => Err(app_err!("manifest 'license' is a JSON {}, expected a string", json_kind(other))),
        }
    }
}

impl From<Value> for Manifest {
    fn from(value: Value) -> Self {
        Self::new(value)
    }
}

pub(super) const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_has_key_present_with_any_value() {
        let manifest = Manifest::new(json!({"readme": null, "main": 0}));
        assert!(manifest.has_key("readme").unwrap());
        assert!(manifest.has_key("main").unwrap());
        assert!(!manifest.has_key("description").unwrap());
    }

    #[test]
    fn test_has_key_on_non_object_fails() {
        let manifest = Manifest::new(json!(["readme"]));
        let err = manifest.has_key("readme").unwrap_err();
        assert!(err.to_string().contains("array"));
    }

    #[test]
    fn test_license_absent() {
        let manifest = Manifest::new(json!({"name": "pkg"}));
        assert_eq!(manifest.license().unwrap(), None);
    }

    #[test]
    fn test_license_string() {
        let manifest = Manifest::new(json!({"license": "MIT"}));
        assert_eq!(manifest.license().unwrap(), Some("MIT"));
    }

    #[test]
    fn test_license_null_is_an_error() {
        let manifest = Manifest::new(json!({"license": null}));
        assert!(manifest.license().is_err());
    }

    #[test]
    fn test_license_object_is_an_error() {
        let manifest = Manifest::new(json!({"license": {"type": "MIT"}}));
        let err = manifest.license().unwrap_err();
        assert!(err.to_string().contains("object"));
    }
}
