//! Domain layer: Core business types.
//!
//! Pure types with no I/O: the eight readings, their plausible ranges and
//! the opaque label a classifier returns.

mod prediction;
mod ranges;
mod readings;

pub use prediction::PredictionLabel;
pub use ranges::{RangeBound, RangeTable, RANGE_TABLE};
pub use readings::{FeatureVector, Field, RawInputSet, ValidatedRecord, PLACEHOLDER};
