//! Validation of raw form inputs against the plausible ranges.

use crate::domain::{Field, RangeBound, RangeTable, RawInputSet, ValidatedRecord, RANGE_TABLE};

/// Summary shown beneath range warnings when a prediction is refused.
pub const OUT_OF_RANGE_SUMMARY: &str = "Cannot predict stress level due to invalid inputs. Please provide values within the valid ranges.";

/// One reading outside its plausible range.
#[derive(Debug, Clone, PartialEq)]
pub struct RangeWarning {
    pub field: Field,
    pub value: f64,
    pub bound: RangeBound,
}

impl std::fmt::Display for RangeWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} is out of the ideal range ({})! Please enter a valid value.",
            self.field.display_name(),
            self.bound
        )
    }
}

/// Why a submission was refused before reaching the model.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    /// A field is not a number. Reported for the first such field only.
    #[error(
        "Error: could not convert string to float: '{input}' ({}). Please ensure all fields contain valid numeric values.",
        .field.label()
    )]
    Parse { field: Field, input: String },

    /// One or more readings fall outside their bound.
    #[error("{}", OUT_OF_RANGE_SUMMARY)]
    OutOfRange(Vec<RangeWarning>),
}

impl ValidationError {
    /// Per-field warnings; empty for parse failures.
    #[must_use]
    pub fn warnings(&self) -> &[RangeWarning] {
        match self {
            Self::Parse { .. } => &[],
            Self::OutOfRange(warnings) => warnings.as_slice(),
        }
    }
}

/// Validate raw inputs against [`RANGE_TABLE`].
///
/// # Errors
/// Returns `ValidationError::Parse` for the first unparseable field, or
/// `ValidationError::OutOfRange` listing every reading outside its bound.
pub fn validate(raw: RawInputSet) -> Result<ValidatedRecord, ValidationError> {
    validate_against(raw, &RANGE_TABLE)
}

/// Validate raw inputs against an explicit table.
///
/// # Errors
/// See [`validate`].
pub fn validate_against(
    raw: RawInputSet,
    table: &RangeTable,
) -> Result<ValidatedRecord, ValidationError> {
    let mut values = [0.0; Field::COUNT];

    // Parse everything first: a bad field aborts before any range check.
    for field in Field::ALL {
        let input = raw.get(field);
        values[field.index()] =
            input
                .trim()
                .parse::<f64>()
                .map_err(|_| ValidationError::Parse {
                    field,
                    input: input.to_string(),
                })?;
    }

    let warnings: Vec<RangeWarning> = table
        .iter()
        .filter_map(|(field, bound)| {
            let value = values[field.index()];
            (!bound.contains(value)).then_some(RangeWarning {
                field,
                value,
                bound,
            })
        })
        .collect();

    if !warnings.is_empty() {
        tracing::debug!(
            "Validation rejected {} field(s): {}",
            warnings.len(),
            warnings
                .iter()
                .map(|w| w.field.key())
                .collect::<Vec<_>>()
                .join(", ")
        );
        return Err(ValidationError::OutOfRange(warnings));
    }

    Ok(ValidatedRecord::from_values(values))
}
