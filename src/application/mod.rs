//! Application layer: Use cases and services.
//!
//! Orchestrates domain logic with the model port to implement the single
//! use case: validate a submission, then predict its stress level.

mod prediction;
mod validation;

pub use prediction::{predict, PredictionService, SubmitError};
pub use validation::{
    validate, validate_against, RangeWarning, ValidationError, OUT_OF_RANGE_SUMMARY,
};

#[cfg(test)]
pub(crate) use prediction::tests::RecordingModel;
