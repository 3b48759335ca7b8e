//! Prediction result type.

use serde::{Deserialize, Serialize};

/// Label returned by the classifier.
///
/// Opaque to the application: it is shown to the user exactly as the model
/// produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PredictionLabel {
    Integer(i64),
    Float(f64),
    Text(String),
}

impl std::fmt::Display for PredictionLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Text(v) => f.write_str(v),
        }
    }
}

impl From<i64> for PredictionLabel {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<&str> for PredictionLabel {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}
