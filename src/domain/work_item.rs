// Work item domain model - a schemaless field map from the tracking API
use serde_json::{Map, Value};

#[derive(Debug, Clone, Default)]
pub struct WorkItem {
    fields: Map<String, Value>,
}

impl WorkItem {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// Read a numeric field, degrading to zero. The API returns estimates and
    /// task hour totals as numbers, numeric strings, empty strings, or not at
    /// all; anything that does not parse to a non-negative finite number
    /// contributes 0.
    pub fn numeric_field(&self, name: &str) -> f64 {
        let parsed = match self.field(name) {
            Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
            Some(Value::String(s)) => s.trim().parse().unwrap_or(0.0),
            _ => 0.0,
        };

        if parsed.is_finite() { parsed.max(0.0) } else { 0.0 }
    }

    /// Exact-match membership test of a string field against a set of values.
    pub fn has_status(&self, field: &str, statuses: &[String]) -> bool {
        self.field(field)
            .and_then(Value::as_str)
            .is_some_and(|value| statuses.iter().any(|s| s == value))
    }
}
