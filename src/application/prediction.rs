//! Prediction service: Orchestrates validation and classifier inference.
//!
//! One submit is one synchronous pass:
//! 1. Validate the raw inputs
//! 2. Arrange the readings into a feature row
//! 3. Run single-row inference
//!
//! Nothing is retried and nothing is stored.

use std::sync::Arc;

use crate::application::validation::{validate, RangeWarning, ValidationError};
use crate::domain::{PredictionLabel, RawInputSet, ValidatedRecord};
use crate::ports::{ModelError, StressModel};

/// Why a submit produced no label.
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    #[error("Prediction failed: {0}. Please try again.")]
    Model(#[from] ModelError),
}

impl SubmitError {
    /// Per-field range warnings, if any.
    #[must_use]
    pub fn warnings(&self) -> &[RangeWarning] {
        match self {
            Self::Invalid(e) => e.warnings(),
            Self::Model(_) => &[],
        }
    }
}

/// Run the classifier on one validated record.
///
/// # Errors
/// Returns `ModelError` if inference fails or yields no label.
pub fn predict<M>(record: ValidatedRecord, model: &M) -> Result<PredictionLabel, ModelError>
where
    M: StressModel + ?Sized,
{
    let row = record.to_feature_vector();
    tracing::debug!("Running inference on features={:?}", row.values());

    model
        .predict(std::slice::from_ref(&row))?
        .into_iter()
        .next()
        .ok_or(ModelError::EmptyPrediction)
}

/// Service for turning form submissions into stress-level predictions.
pub struct PredictionService<M>
where
    M: StressModel + ?Sized,
{
    model: Arc<M>,
}

impl<M> PredictionService<M>
where
    M: StressModel + ?Sized,
{
    /// Create a new prediction service around a loaded model.
    pub fn new(model: Arc<M>) -> Self {
        Self { model }
    }

    /// Run the classifier on one validated record.
    ///
    /// # Errors
    /// Returns `ModelError` if inference fails.
    pub fn predict(&self, record: ValidatedRecord) -> Result<PredictionLabel, ModelError> {
        predict(record, self.model.as_ref())
    }

    /// Validate a submission and, if it is acceptable, predict its label.
    ///
    /// # Errors
    /// Returns `SubmitError::Invalid` without invoking the model when any
    /// input is unparseable or out of range, and `SubmitError::Model` if
    /// inference fails.
    pub fn submit(&self, raw: RawInputSet) -> Result<PredictionLabel, SubmitError> {
        let record = match validate(raw) {
            Ok(record) => record,
            Err(e) => {
                match &e {
                    ValidationError::Parse { field, .. } => {
                        tracing::info!("Submission rejected: {} is not a number", field.key());
                    }
                    ValidationError::OutOfRange(warnings) => {
                        tracing::info!(
                            "Submission rejected: {} reading(s) out of range",
                            warnings.len()
                        );
                    }
                }
                return Err(e.into());
            }
        };

        match self.predict(record) {
            Ok(label) => {
                tracing::info!("Prediction complete: label={}", label);
                Ok(label)
            }
            Err(e) => {
                tracing::error!("Inference failed: {}", e);
                Err(e.into())
            }
        }
    }
}

impl<M> Clone for PredictionService<M>
where
    M: StressModel + ?Sized,
{
    fn clone(&self) -> Self {
        Self {
            model: Arc::clone(&self.model),
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::domain::{FeatureVector, Field};
    use std::sync::Mutex;

    /// Deterministic model that records every row it is asked to classify.
    pub(crate) struct RecordingModel {
        pub calls: Mutex<Vec<Vec<FeatureVector>>>,
        pub outcome: Result<Vec<PredictionLabel>, String>,
    }

    impl RecordingModel {
        pub(crate) fn returning(label: PredictionLabel) -> Self {
            Self {
                calls: Mutex::new(Vec::new()),
                outcome: Ok(vec![label]),
            }
        }

        pub(crate) fn failing(message: &str) -> Self {
            Self {
                calls: Mutex::new(Vec::new()),
                outcome: Err(message.to_string()),
            }
        }

        pub(crate) fn call_count(&self) -> usize {
            self.calls.lock().expect("lock").len()
        }
    }

    impl StressModel for RecordingModel {
        fn predict(&self, rows: &[FeatureVector]) -> Result<Vec<PredictionLabel>, ModelError> {
            self.calls.lock().expect("lock").push(rows.to_vec());
            self.outcome.clone().map_err(ModelError::Inference)
        }
    }

    fn raw(values: [&str; Field::COUNT]) -> RawInputSet {
        RawInputSet::from_fn(|f| values[f.index()].to_string())
    }

    fn scenario_inputs() -> RawInputSet {
        raw(["50", "16", "98", "10", "97", "50", "7", "72"])
    }

    #[test]
    fn test_valid_submission_reaches_model_in_column_order() {
        let model = Arc::new(RecordingModel::returning(PredictionLabel::Integer(2)));
        let service = PredictionService::new(model.clone());

        let label = service.submit(scenario_inputs()).expect("Should predict");
        assert_eq!(label, PredictionLabel::Integer(2));

        let calls = model.calls.lock().expect("lock");
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].len(), 1, "exactly one row per inference");
        assert_eq!(
            calls[0][0].values(),
            [50.0, 16.0, 98.0, 10.0, 97.0, 50.0, 7.0, 72.0]
        );
    }

    #[test]
    fn test_entry_order_does_not_change_feature_order() {
        let model = Arc::new(RecordingModel::returning(PredictionLabel::Integer(0)));
        let service = PredictionService::new(model.clone());

        // Fill the fields back to front.
        let values = ["60", "20", "99", "5", "95", "40", "8", "65"];
        let mut order = Field::ALL;
        order.reverse();
        let mut raw = RawInputSet::default();
        for field in order {
            let value = values[field.index()].to_string();
            match field {
                Field::HeartRate => raw.heart_rate = value,
                Field::SleepHours => raw.sleep_hours = value,
                Field::EyeMovement => raw.eye_movement = value,
                Field::BloodOxygen => raw.blood_oxygen = value,
                Field::LimbMovement => raw.limb_movement = value,
                Field::BodyTemp => raw.body_temp = value,
                Field::RespirationRate => raw.respiration_rate = value,
                Field::SnoringRange => raw.snoring_range = value,
            }
        }

        service.submit(raw).expect("Should predict");
        let calls = model.calls.lock().expect("lock");
        assert_eq!(
            calls[0][0].values(),
            [60.0, 20.0, 99.0, 5.0, 95.0, 40.0, 8.0, 65.0]
        );
    }

    #[test]
    fn test_out_of_range_does_not_invoke_model() {
        let model = Arc::new(RecordingModel::returning(PredictionLabel::Integer(1)));
        let service = PredictionService::new(model.clone());

        let err = service
            .submit(raw(["50", "35", "98", "10", "97", "50", "7", "72"]))
            .unwrap_err();

        assert_eq!(err.warnings().len(), 1);
        let warning = err.warnings()[0].to_string();
        assert!(warning.contains("Respiration Rate"));
        assert!(warning.contains("10-30"));
        assert_eq!(model.call_count(), 0);
    }

    #[test]
    fn test_multiple_violations_each_warn_without_prediction() {
        let model = Arc::new(RecordingModel::returning(PredictionLabel::Integer(1)));
        let service = PredictionService::new(model.clone());

        let err = service
            .submit(raw(["130", "5", "98", "25", "97", "50", "0", "72"]))
            .unwrap_err();

        assert_eq!(err.warnings().len(), 4);
        assert_eq!(model.call_count(), 0);
    }

    #[test]
    fn test_non_numeric_input_does_not_invoke_model() {
        for field in Field::ALL {
            let model = Arc::new(RecordingModel::returning(PredictionLabel::Integer(1)));
            let service = PredictionService::new(model.clone());

            let mut values = ["50", "16", "98", "10", "97", "50", "7", "72"];
            values[field.index()] = "n/a";

            let err = service.submit(raw(values)).unwrap_err();
            assert!(matches!(
                err,
                SubmitError::Invalid(ValidationError::Parse { field: f, .. }) if f == field
            ));
            assert!(err.to_string().contains("could not convert string to float"));
            assert_eq!(model.call_count(), 0);
        }
    }

    #[test]
    fn test_model_failure_is_terminal_for_request() {
        let model = Arc::new(RecordingModel::failing("backend unavailable"));
        let service = PredictionService::new(model.clone());

        let err = service.submit(scenario_inputs()).unwrap_err();
        assert!(matches!(err, SubmitError::Model(ModelError::Inference(_))));
        assert!(err.warnings().is_empty());
        assert_eq!(model.call_count(), 1, "no automatic retry");
    }

    #[test]
    fn test_empty_model_output_is_an_error() {
        let model = RecordingModel {
            calls: Mutex::new(Vec::new()),
            outcome: Ok(Vec::new()),
        };
        let record = crate::application::validate(scenario_inputs()).expect("valid");

        let err = predict(record, &model).unwrap_err();
        assert!(matches!(err, ModelError::EmptyPrediction));
    }

    #[test]
    fn test_first_label_is_used() {
        let model = RecordingModel {
            calls: Mutex::new(Vec::new()),
            outcome: Ok(vec!["high".into(), "low".into()]),
        };
        let record = crate::application::validate(scenario_inputs()).expect("valid");
        assert_eq!(predict(record, &model).expect("label"), PredictionLabel::from("high"));
    }

    #[test]
    fn test_works_with_trait_object() {
        let model: Arc<dyn StressModel> =
            Arc::new(RecordingModel::returning(PredictionLabel::from("medium")));
        let service = PredictionService::new(model);
        assert_eq!(
            service.submit(scenario_inputs()).expect("label").to_string(),
            "medium"
        );
    }
}
