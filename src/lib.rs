//! # Stress Predictor
//!
//! Terminal form that collects eight physiological readings, checks them
//! against plausible ranges and asks a pre-trained classifier for a stress
//! level.
//!
//! ## Architecture
//!
//! The crate follows Hexagonal Architecture:
//! - `domain`: Core types (readings, range table, prediction label)
//! - `ports`: Trait for the classifier
//! - `adapters`: Linear SVM artifact loader, log sanitization
//! - `application`: Validation and the submit pipeline
//! - `config`: Environment-driven settings
//! - `tui`: Terminal user interface

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod tui;

pub use application::{PredictionService, SubmitError, ValidationError};
pub use domain::{FeatureVector, Field, PredictionLabel, RawInputSet, ValidatedRecord};
pub use ports::{ModelError, StressModel};

/// Result type for Stress Predictor operations
pub type Result<T> = std::result::Result<T, StressError>;

/// Main error type for Stress Predictor
#[derive(Debug, thiserror::Error)]
pub enum StressError {
    #[error("Model unavailable: {0}")]
    Model(#[from] ModelError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
