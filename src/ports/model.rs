//! Model port: Trait for the pre-trained stress classifier.
//!
//! This trait abstracts the serialized model artifact from the application
//! logic, so tests can substitute a deterministic stub.

use std::path::PathBuf;

use crate::domain::{FeatureVector, PredictionLabel};

/// Errors from loading or invoking a classifier.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("Model file not found at {0:?}")]
    NotFound(PathBuf),

    #[error("Failed to read model file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid model format: {0}")]
    Format(#[from] serde_json::Error),

    #[error("Invalid model: {0}")]
    Invalid(String),

    #[error("Model checksum mismatch: expected {expected}, got {actual}")]
    ChecksumMismatch { expected: String, actual: String },

    #[error("Feature count mismatch: got {got}, expected {expected}")]
    FeatureCount { expected: usize, got: usize },

    #[error("Model returned no prediction")]
    EmptyPrediction,

    #[error("Inference failed: {0}")]
    Inference(String),
}

/// Trait for classifier inference.
///
/// Implementations are loaded once at startup and shared read-only, so they
/// must be `Send + Sync`.
pub trait StressModel: Send + Sync {
    /// Predict one label per input row.
    ///
    /// Rows are positional: each value sits at its
    /// [`Field::index`](crate::domain::Field::index).
    ///
    /// # Errors
    /// Returns `ModelError` if inference cannot be performed.
    fn predict(&self, rows: &[FeatureVector]) -> Result<Vec<PredictionLabel>, ModelError>;
}
