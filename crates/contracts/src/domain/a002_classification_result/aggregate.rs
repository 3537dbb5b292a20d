use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Keys the label may be published under, in lookup order
const LABEL_KEYS: [&str; 3] = ["predicted_class", "label", "class"];
const CONFIDENCE_KEY: &str = "confidence";

/// Body of a successful classification response.
///
/// The endpoint schema is not fixed, so the JSON is kept as-is and the
/// accessors below read it defensively.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClassificationResult(Value);

/// One top-level field prepared for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultField {
    pub key: String,
    pub display: String,
}

impl ClassificationResult {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    pub fn from_json(body: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(body).map(Self)
    }

    pub fn label(&self) -> Option<&str> {
        LABEL_KEYS
            .iter()
            .find_map(|key| self.0.get(*key).and_then(Value::as_str))
    }

    pub fn confidence(&self) -> Option<f64> {
        self.0
            .get(CONFIDENCE_KEY)
            .and_then(Value::as_f64)
            .filter(|c| c.is_finite())
    }

    /// Confidence as a percentage in `0..=100`.
    ///
    /// Values in `0..=1` are fractions; values in `(1, 100]` are taken as
    /// already being percentages. Anything else is ignored.
    pub fn confidence_ratio_percent(&self) -> Option<f64> {
        let c = self.confidence()?;
        if (0.0..=1.0).contains(&c) {
            Some(c * 100.0)
        } else if c > 1.0 && c <= 100.0 {
            Some(c)
        } else {
            None
        }
    }

    /// e.g. `92.0%`
    pub fn confidence_percent(&self) -> Option<String> {
        self.confidence_ratio_percent()
            .map(|pct| format!("{:.1}%", pct))
    }

    /// Every top-level field in key order; a non-object body becomes a
    /// single `value` field
    pub fn fields(&self) -> Vec<ResultField> {
        match &self.0 {
            Value::Object(map) => map
                .iter()
                .map(|(key, value)| ResultField {
                    key: key.clone(),
                    display: display_value(value),
                })
                .collect(),
            other => vec![ResultField {
                key: "value".to_string(),
                display: display_value(other),
            }],
        }
    }

    pub fn to_pretty_json(&self) -> String {
        serde_json::to_string_pretty(&self.0).unwrap_or_else(|_| self.0.to_string())
    }
}

fn display_value(value: &Value) -> String {
    match value {
        Value::Null => "—".to_string(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}
