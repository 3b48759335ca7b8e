//! Linear SVM adapter: Implementation of StressModel over an exported artifact.
//!
//! The artifact is a JSON export of a trained one-vs-rest linear SVM:
//!
//! ```json
//! {
//!   "kind": "linear_svm",
//!   "feature_names": ["sr", "rr", "t", "lm", "bo", "rem", "sh", "hr"],
//!   "classes": [0, 1, 2, 3, 4],
//!   "coefficients": [[...8 weights...], ...one row per class],
//!   "intercepts": [...one per row],
//!   "scaler_mean": [...8],
//!   "scaler_scale": [...8]
//! }
//! ```
//!
//! # Integrity
//!
//! When a `<artifact>.sha256` sidecar sits next to the artifact (written by
//! the `checksum_model` binary, or `sha256sum`), the artifact bytes must hash
//! to the recorded digest or loading fails.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::domain::{FeatureVector, Field, PredictionLabel};
use crate::ports::{ModelError, StressModel};

/// Artifact `kind` accepted by this adapter.
pub const ARTIFACT_KIND: &str = "linear_svm";

/// Model parameters as exported by the training pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SvmArtifact {
    pub kind: String,
    pub feature_names: Vec<String>,
    pub classes: Vec<PredictionLabel>,
    pub coefficients: Vec<Vec<f64>>,
    pub intercepts: Vec<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scaler_mean: Option<Vec<f64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scaler_scale: Option<Vec<f64>>,
}

/// Hex-encoded SHA-256 of `bytes`.
#[must_use]
pub fn sha256_hex(bytes: &[u8]) -> String {
    let digest = Sha256::digest(bytes);
    digest.iter().map(|b| format!("{b:02x}")).collect()
}

/// Path of the checksum sidecar for an artifact.
#[must_use]
pub fn checksum_path(model_path: &Path) -> PathBuf {
    let mut name = model_path.as_os_str().to_os_string();
    name.push(".sha256");
    PathBuf::from(name)
}

fn read_expected_checksum(sidecar: &Path) -> Result<Option<String>, ModelError> {
    if !sidecar.exists() {
        return Ok(None);
    }
    let content = std::fs::read_to_string(sidecar).map_err(|source| ModelError::Io {
        path: sidecar.to_path_buf(),
        source,
    })?;
    // `sha256sum` format: "<hex>  <file name>"
    let digest = content
        .split_whitespace()
        .next()
        .ok_or_else(|| ModelError::Invalid(format!("Empty checksum file {sidecar:?}")))?;
    Ok(Some(digest.to_ascii_lowercase()))
}

/// Linear SVM classifier over the eight readings.
#[derive(Debug, Clone)]
pub struct LinearSvmModel {
    artifact: SvmArtifact,
}

impl LinearSvmModel {
    /// Load and validate an artifact from disk.
    ///
    /// # Errors
    /// Returns `ModelError::NotFound` if the file is missing, `ChecksumMismatch`
    /// if a sidecar digest does not match, and `Format`/`Invalid` if the
    /// content is not a usable model.
    pub fn load(path: &Path) -> Result<Self, ModelError> {
        if !path.is_file() {
            return Err(ModelError::NotFound(path.to_path_buf()));
        }

        let bytes = std::fs::read(path).map_err(|source| ModelError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        if let Some(expected) = read_expected_checksum(&checksum_path(path))? {
            let actual = sha256_hex(&bytes);
            if expected != actual {
                return Err(ModelError::ChecksumMismatch { expected, actual });
            }
            tracing::debug!("Model checksum verified ({})", actual);
        }

        let model = Self::from_json_bytes(&bytes)?;

        tracing::info!(
            "Loaded model from {:?} (kind={}, n_classes={}, scaled={})",
            path,
            model.artifact.kind,
            model.artifact.classes.len(),
            model.artifact.scaler_mean.is_some()
        );

        Ok(model)
    }

    /// Parse and validate an artifact from JSON bytes.
    ///
    /// # Errors
    /// Returns `ModelError::Format` on malformed JSON and `Invalid` if the
    /// parameters are inconsistent.
    pub fn from_json_bytes(bytes: &[u8]) -> Result<Self, ModelError> {
        let artifact: SvmArtifact = serde_json::from_slice(bytes)?;
        Self::from_artifact(artifact)
    }

    /// Validate already-parsed parameters.
    ///
    /// # Errors
    /// Returns `ModelError::Invalid` describing the first inconsistency found.
    pub fn from_artifact(artifact: SvmArtifact) -> Result<Self, ModelError> {
        if artifact.kind != ARTIFACT_KIND {
            return Err(ModelError::Invalid(format!(
                "Unsupported model kind {:?} (expected {ARTIFACT_KIND:?})",
                artifact.kind
            )));
        }

        let expected_columns: Vec<&str> = Field::ALL.iter().map(|f| f.model_column()).collect();
        if artifact.feature_names != expected_columns {
            return Err(ModelError::Invalid(format!(
                "feature_names must be {expected_columns:?}, got {:?}",
                artifact.feature_names
            )));
        }

        let n_classes = artifact.classes.len();
        if n_classes < 2 {
            return Err(ModelError::Invalid(format!(
                "Model needs at least 2 classes, got {n_classes}"
            )));
        }

        let n_rows = artifact.coefficients.len();
        let binary_single_row = n_classes == 2 && n_rows == 1;
        if n_rows != n_classes && !binary_single_row {
            return Err(ModelError::Invalid(format!(
                "Expected {n_classes} coefficient rows, got {n_rows}"
            )));
        }
        if artifact.intercepts.len() != n_rows {
            return Err(ModelError::Invalid(
                "intercepts length does not match coefficient rows".into(),
            ));
        }
        if artifact
            .coefficients
            .iter()
            .any(|row| row.len() != Field::COUNT)
        {
            return Err(ModelError::Invalid(format!(
                "Every coefficient row must have {} weights",
                Field::COUNT
            )));
        }

        match (&artifact.scaler_mean, &artifact.scaler_scale) {
            (None, None) => {}
            (Some(mean), Some(scale)) => {
                if mean.len() != Field::COUNT || scale.len() != Field::COUNT {
                    return Err(ModelError::Invalid(format!(
                        "Scaler parameters must have {} entries",
                        Field::COUNT
                    )));
                }
                if scale.iter().any(|s| *s == 0.0 || !s.is_finite()) {
                    return Err(ModelError::Invalid(
                        "scaler_scale entries must be finite and non-zero".into(),
                    ));
                }
            }
            _ => {
                return Err(ModelError::Invalid(
                    "scaler_mean and scaler_scale must be provided together".into(),
                ))
            }
        }

        let params_finite = artifact
            .coefficients
            .iter()
            .flatten()
            .chain(artifact.intercepts.iter())
            .chain(artifact.scaler_mean.iter().flatten())
            .all(|v| v.is_finite());
        if !params_finite {
            return Err(ModelError::Invalid("Model contains non-finite parameters".into()));
        }

        Ok(Self { artifact })
    }

    /// Exported parameters.
    #[must_use]
    pub fn artifact(&self) -> &SvmArtifact {
        &self.artifact
    }

    fn standardize(&self, row: &[f64]) -> Vec<f64> {
        match (&self.artifact.scaler_mean, &self.artifact.scaler_scale) {
            (Some(mean), Some(scale)) => row
                .iter()
                .zip(mean.iter().zip(scale.iter()))
                .map(|(x, (m, s))| (x - m) / s)
                .collect(),
            _ => row.to_vec(),
        }
    }

    /// Decision score of each coefficient row for one standardized input.
    fn decision_function(&self, x: &[f64]) -> Vec<f64> {
        self.artifact
            .coefficients
            .iter()
            .zip(self.artifact.intercepts.iter())
            .map(|(w, b)| w.iter().zip(x.iter()).map(|(w, x)| w * x).sum::<f64>() + b)
            .collect()
    }

    fn classify(&self, row: &FeatureVector) -> Result<PredictionLabel, ModelError> {
        let values = row.as_slice();
        if values.len() != Field::COUNT {
            return Err(ModelError::FeatureCount {
                expected: Field::COUNT,
                got: values.len(),
            });
        }

        let x = self.standardize(values);
        let scores = self.decision_function(&x);
        if scores.iter().any(|s| s.is_nan()) {
            return Err(ModelError::Inference("decision score is NaN".into()));
        }

        let index = if scores.len() == 1 {
            usize::from(scores[0] > 0.0)
        } else {
            // First maximum wins ties.
            let mut best = 0;
            for (i, score) in scores.iter().enumerate().skip(1) {
                if *score > scores[best] {
                    best = i;
                }
            }
            best
        };

        Ok(self.artifact.classes[index].clone())
    }
}

impl StressModel for LinearSvmModel {
    fn predict(&self, rows: &[FeatureVector]) -> Result<Vec<PredictionLabel>, ModelError> {
        rows.iter().map(|row| self.classify(row)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn columns() -> Vec<String> {
        Field::ALL.iter().map(|f| f.model_column().to_string()).collect()
    }

    /// Three classes keyed on heart rate alone.
    fn heart_rate_artifact() -> SvmArtifact {
        let hr = |w: f64| {
            let mut row = vec![0.0; Field::COUNT];
            row[Field::HeartRate.index()] = w;
            row
        };
        SvmArtifact {
            kind: ARTIFACT_KIND.into(),
            feature_names: columns(),
            classes: vec!["low".into(), "medium".into(), "high".into()],
            coefficients: vec![hr(-1.0), hr(0.0), hr(1.0)],
            intercepts: vec![-0.5, 0.0, -0.5],
            scaler_mean: Some(vec![0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 80.0]),
            scaler_scale: Some(vec![1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 10.0]),
        }
    }

    fn row_with_heart_rate(bpm: f64) -> FeatureVector {
        FeatureVector::new([50.0, 16.0, 98.0, 10.0, 97.0, 50.0, 7.0, bpm])
    }

    #[test]
    fn test_predicts_highest_scoring_class() {
        let model = LinearSvmModel::from_artifact(heart_rate_artifact()).expect("Valid model");

        let labels = model
            .predict(&[
                row_with_heart_rate(60.0),
                row_with_heart_rate(80.0),
                row_with_heart_rate(100.0),
            ])
            .expect("Should predict");

        assert_eq!(
            labels,
            vec![
                PredictionLabel::from("low"),
                PredictionLabel::from("medium"),
                PredictionLabel::from("high"),
            ]
        );
    }

    #[test]
    fn test_binary_single_row_uses_sign() {
        let mut artifact = heart_rate_artifact();
        artifact.classes = vec![PredictionLabel::Integer(0), PredictionLabel::Integer(1)];
        artifact.coefficients = vec![artifact.coefficients[2].clone()];
        artifact.intercepts = vec![0.0];

        let model = LinearSvmModel::from_artifact(artifact).expect("Valid binary model");
        let labels = model
            .predict(&[row_with_heart_rate(70.0), row_with_heart_rate(90.0)])
            .expect("Should predict");
        assert_eq!(labels, vec![PredictionLabel::Integer(0), PredictionLabel::Integer(1)]);
    }

    #[test]
    fn test_rejects_wrong_column_order() {
        let mut artifact = heart_rate_artifact();
        artifact.feature_names.swap(0, 1);
        let err = LinearSvmModel::from_artifact(artifact).unwrap_err();
        assert!(matches!(err, ModelError::Invalid(msg) if msg.contains("feature_names")));
    }

    #[test]
    fn test_rejects_mismatched_shapes() {
        let mut artifact = heart_rate_artifact();
        artifact.intercepts.pop();
        assert!(LinearSvmModel::from_artifact(artifact).is_err());

        let mut artifact = heart_rate_artifact();
        artifact.coefficients[1].push(0.0);
        assert!(LinearSvmModel::from_artifact(artifact).is_err());

        let mut artifact = heart_rate_artifact();
        artifact.classes.truncate(1);
        assert!(LinearSvmModel::from_artifact(artifact).is_err());
    }

    #[test]
    fn test_rejects_zero_scale_and_partial_scaler() {
        let mut artifact = heart_rate_artifact();
        if let Some(scale) = artifact.scaler_scale.as_mut() {
            scale[3] = 0.0;
        }
        assert!(LinearSvmModel::from_artifact(artifact).is_err());

        let mut artifact = heart_rate_artifact();
        artifact.scaler_scale = None;
        assert!(LinearSvmModel::from_artifact(artifact).is_err());
    }

    #[test]
    fn test_rejects_unknown_kind() {
        let mut artifact = heart_rate_artifact();
        artifact.kind = "random_forest".into();
        assert!(LinearSvmModel::from_artifact(artifact).is_err());
    }

    #[test]
    fn test_load_missing_file_is_not_found() {
        let temp = tempdir().expect("tempdir");
        let err = LinearSvmModel::load(&temp.path().join("svm_model.json")).unwrap_err();
        assert!(matches!(err, ModelError::NotFound(_)));
    }

    #[test]
    fn test_load_malformed_json_fails() {
        let temp = tempdir().expect("tempdir");
        let path = temp.path().join("svm_model.json");
        std::fs::write(&path, b"{not json").expect("write model");
        assert!(matches!(
            LinearSvmModel::load(&path).unwrap_err(),
            ModelError::Format(_)
        ));
    }

    #[test]
    fn test_load_verifies_checksum_sidecar() {
        let temp = tempdir().expect("tempdir");
        let path = temp.path().join("svm_model.json");
        let bytes = serde_json::to_vec(&heart_rate_artifact()).expect("serialize model");
        std::fs::write(&path, &bytes).expect("write model");

        // No sidecar: loads.
        LinearSvmModel::load(&path).expect("Should load without sidecar");

        // Matching sidecar in sha256sum format: loads.
        std::fs::write(
            checksum_path(&path),
            format!("{}  svm_model.json\n", sha256_hex(&bytes)),
        )
        .expect("write sidecar");
        LinearSvmModel::load(&path).expect("Should load with matching sidecar");

        // Stale sidecar: refuses.
        std::fs::write(checksum_path(&path), "00".repeat(32)).expect("write sidecar");
        assert!(matches!(
            LinearSvmModel::load(&path).unwrap_err(),
            ModelError::ChecksumMismatch { .. }
        ));
    }

    #[test]
    fn test_bundled_artifact_loads() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("models/svm_model.json");
        let model = LinearSvmModel::load(&path).expect("Bundled model should load");
        let labels = model
            .predict(&[FeatureVector::new([50.0, 16.0, 98.0, 10.0, 97.0, 50.0, 7.0, 72.0])])
            .expect("Should predict");
        assert_eq!(labels.len(), 1);
        assert!(model.artifact().classes.contains(&labels[0]));
    }

    #[test]
    fn test_checksum_path_appends_suffix() {
        assert_eq!(
            checksum_path(Path::new("models/svm_model.json")),
            PathBuf::from("models/svm_model.json.sha256")
        );
    }
}
