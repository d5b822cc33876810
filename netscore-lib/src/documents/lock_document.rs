use super::manifest::json_kind;
use crate::Result;
use ohno::app_err;
use serde_json::{Map, Value};

/// The resolved dependency graph, keyed by dependency identifier under `packages`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LockDocument(Value);

/// One entry of a lock document's `packages` mapping.
#[derive(Debug, Clone, Copy)]
pub struct PackageRecord<'a> {
    pub id: &'a str,
    fields: &'a Map<String, Value>,
}

impl LockDocument {
    #[must_use]
    pub const fn new(value: Value) -> Self {
        Self(value)
    }

    #[must_use]
    pub const fn as_value(&self) -> &Value {
        &self.0
    }

    /// The records under `packages`, ordered by identifier.
    ///
    /// An absent `packages` key yields no records.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is not an object, if `packages` is present but
    /// not an object, or if any record is not an object.
    pub fn packages(&self) -> Result<Vec<PackageRecord<'_>>> {
        let root = self
            .0
            .as_object()
            .ok_or_else(|| app_err!("lock document is a JSON {}, expected an object", json_kind(&self.0)))?;

        let Some(packages) = root.get("packages") else {
            return Ok(Vec::new());
        };

        let packages = packages
            .as_object()
            .ok_or_else(|| app_err!("lock document 'packages' is a JSON {}, expected an object", json_kind(packages)))?;

        packages
            .iter()
            .map(|(id, record)| {
                record
                    .as_object()
                    .map(|fields| PackageRecord { id: id.as_str(), fields })
                    .ok_or_else(|| app_err!("lock entry '{id}' is a JSON {}, expected an object", json_kind(record)))
            })
            .collect()
    }
}

impl From<Value> for LockDocument {
    fn from(value: Value) -> Self {
        Self::new(value)
    }
}

impl PackageRecord<'_> {
    /// Whether the record's `dev` flag is set, using JSON truthiness.
    #[must_use]
    pub fn is_dev(&self) -> bool {
        self.fields.get("dev").is_some_and(is_truthy)
    }

    /// Whether the record carries a `time` key; its value is ignored.
    #[must_use]
    pub fn has_time(&self) -> bool {
        self.fields.contains_key("time")
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}
