//! Adapters layer: Concrete implementations of ports.
//!
//! - `svm`: linear SVM classifier loaded from an exported JSON artifact
//! - `sanitize`: redaction of physiological readings from logs

pub mod sanitize;
pub mod svm;
