//! Plausible physiological ranges for each reading.

use super::readings::Field;

/// Inclusive `[low, high]` interval for one reading.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeBound {
    pub low: f64,
    pub high: f64,
}

impl RangeBound {
    #[must_use]
    pub const fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    /// Whether `value` lies within the bound, both ends included.
    ///
    /// NaN is never contained.
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        (self.low..=self.high).contains(&value)
    }
}

impl std::fmt::Display for RangeBound {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.low, self.high)
    }
}

/// Fixed per-reading bounds, indexed in classifier column order.
#[derive(Debug, Clone, PartialEq)]
pub struct RangeTable {
    bounds: [RangeBound; Field::COUNT],
}

impl RangeTable {
    #[must_use]
    pub const fn new(bounds: [RangeBound; Field::COUNT]) -> Self {
        Self { bounds }
    }

    /// Bound for one reading.
    #[must_use]
    pub const fn bound(&self, field: Field) -> RangeBound {
        self.bounds[field.index()]
    }

    /// Readings paired with their bounds, in column order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, RangeBound)> + '_ {
        Field::ALL.iter().map(move |&field| (field, self.bound(field)))
    }
}

/// Process-wide bounds used by the form.
pub static RANGE_TABLE: RangeTable = RangeTable::new([
    RangeBound::new(0.0, 120.0),  // snoring_range
    RangeBound::new(10.0, 30.0),  // respiration_rate
    RangeBound::new(95.0, 101.0), // body_temp (F)
    RangeBound::new(0.0, 20.0),   // limb_movement
    RangeBound::new(90.0, 100.0), // blood_oxygen (%)
    RangeBound::new(0.0, 100.0),  // eye_movement
    RangeBound::new(1.0, 24.0),   // sleep_hours
    RangeBound::new(50.0, 110.0), // heart_rate (BPM)
]);
