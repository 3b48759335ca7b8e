//! Physiological reading types for stress-level prediction.
//!
//! Eight sleep-monitoring readings, always handled in the column order the
//! trained classifier expects.

/// Default text shown in every input box of a fresh form.
pub const PLACEHOLDER: &str = "0.0";

/// One of the eight physiological readings collected by the form.
///
/// Variant order is the classifier's column order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    SnoringRange,
    RespirationRate,
    BodyTemp,
    LimbMovement,
    BloodOxygen,
    EyeMovement,
    SleepHours,
    HeartRate,
}

impl Field {
    /// Number of readings.
    pub const COUNT: usize = 8;

    /// All readings in classifier column order.
    pub const ALL: [Field; Self::COUNT] = [
        Self::SnoringRange,
        Self::RespirationRate,
        Self::BodyTemp,
        Self::LimbMovement,
        Self::BloodOxygen,
        Self::EyeMovement,
        Self::SleepHours,
        Self::HeartRate,
    ];

    /// Position of this reading in a [`FeatureVector`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Snake-case key used in logs and range lookups.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::SnoringRange => "snoring_range",
            Self::RespirationRate => "respiration_rate",
            Self::BodyTemp => "body_temp",
            Self::LimbMovement => "limb_movement",
            Self::BloodOxygen => "blood_oxygen",
            Self::EyeMovement => "eye_movement",
            Self::SleepHours => "sleep_hours",
            Self::HeartRate => "heart_rate",
        }
    }

    /// Label rendered above the input box.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::SnoringRange => "Snoring Range",
            Self::RespirationRate => "Respiration Rate",
            Self::BodyTemp => "Body Temperature (F)",
            Self::LimbMovement => "Limb Movement Rate",
            Self::BloodOxygen => "Blood Oxygen Levels (%)",
            Self::EyeMovement => "Eye Movement Rate",
            Self::SleepHours => "Sleep Hours",
            Self::HeartRate => "Heart Rate (BPM)",
        }
    }

    /// Title-cased key, used when reporting range violations.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::SnoringRange => "Snoring Range",
            Self::RespirationRate => "Respiration Rate",
            Self::BodyTemp => "Body Temp",
            Self::LimbMovement => "Limb Movement",
            Self::BloodOxygen => "Blood Oxygen",
            Self::EyeMovement => "Eye Movement",
            Self::SleepHours => "Sleep Hours",
            Self::HeartRate => "Heart Rate",
        }
    }

    /// Column name in the exported model artifact.
    #[must_use]
    pub const fn model_column(self) -> &'static str {
        match self {
            Self::SnoringRange => "sr",
            Self::RespirationRate => "rr",
            Self::BodyTemp => "t",
            Self::LimbMovement => "lm",
            Self::BloodOxygen => "bo",
            Self::EyeMovement => "rem",
            Self::SleepHours => "sh",
            Self::HeartRate => "hr",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// Raw text of the eight inputs, exactly as typed.
///
/// Built once per submit from the form and handed to validation by value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawInputSet {
    pub snoring_range: String,
    pub respiration_rate: String,
    pub body_temp: String,
    pub limb_movement: String,
    pub blood_oxygen: String,
    pub eye_movement: String,
    pub sleep_hours: String,
    pub heart_rate: String,
}

impl Default for RawInputSet {
    fn default() -> Self {
        Self::from_fn(|_| PLACEHOLDER.to_string())
    }
}

impl RawInputSet {
    /// Build an input set by asking `value_of` for each reading.
    pub fn from_fn(mut value_of: impl FnMut(Field) -> String) -> Self {
        Self {
            snoring_range: value_of(Field::SnoringRange),
            respiration_rate: value_of(Field::RespirationRate),
            body_temp: value_of(Field::BodyTemp),
            limb_movement: value_of(Field::LimbMovement),
            blood_oxygen: value_of(Field::BloodOxygen),
            eye_movement: value_of(Field::EyeMovement),
            sleep_hours: value_of(Field::SleepHours),
            heart_rate: value_of(Field::HeartRate),
        }
    }

    /// Raw text for one reading.
    #[must_use]
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::SnoringRange => &self.snoring_range,
            Field::RespirationRate => &self.respiration_rate,
            Field::BodyTemp => &self.body_temp,
            Field::LimbMovement => &self.limb_movement,
            Field::BloodOxygen => &self.blood_oxygen,
            Field::EyeMovement => &self.eye_movement,
            Field::SleepHours => &self.sleep_hours,
            Field::HeartRate => &self.heart_rate,
        }
    }
}

/// The eight readings after parsing and range checks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValidatedRecord {
    pub snoring_range: f64,
    pub respiration_rate: f64,
    pub body_temp: f64,
    pub limb_movement: f64,
    pub blood_oxygen: f64,
    pub eye_movement: f64,
    pub sleep_hours: f64,
    pub heart_rate: f64,
}

impl ValidatedRecord {
    pub(crate) fn from_values(values: [f64; Field::COUNT]) -> Self {
        Self {
            snoring_range: values[Field::SnoringRange.index()],
            respiration_rate: values[Field::RespirationRate.index()],
            body_temp: values[Field::BodyTemp.index()],
            limb_movement: values[Field::LimbMovement.index()],
            blood_oxygen: values[Field::BloodOxygen.index()],
            eye_movement: values[Field::EyeMovement.index()],
            sleep_hours: values[Field::SleepHours.index()],
            heart_rate: values[Field::HeartRate.index()],
        }
    }

    /// Parsed value of one reading.
    #[must_use]
    pub fn get(&self, field: Field) -> f64 {
        match field {
            Field::SnoringRange => self.snoring_range,
            Field::RespirationRate => self.respiration_rate,
            Field::BodyTemp => self.body_temp,
            Field::LimbMovement => self.limb_movement,
            Field::BloodOxygen => self.blood_oxygen,
            Field::EyeMovement => self.eye_movement,
            Field::SleepHours => self.sleep_hours,
            Field::HeartRate => self.heart_rate,
        }
    }

    /// Arrange the readings in classifier column order.
    #[must_use]
    pub fn to_feature_vector(&self) -> FeatureVector {
        FeatureVector([
            self.snoring_range,
            self.respiration_rate,
            self.body_temp,
            self.limb_movement,
            self.blood_oxygen,
            self.eye_movement,
            self.sleep_hours,
            self.heart_rate,
        ])
    }
}

/// Positional input row for the classifier.
///
/// The model has no notion of field names at inference time, so the order
/// must always be [`Field::ALL`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureVector([f64; Field::COUNT]);

impl FeatureVector {
    /// Build a row directly from column-ordered values.
    #[must_use]
    pub const fn new(values: [f64; Field::COUNT]) -> Self {
        Self(values)
    }

    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    #[must_use]
    pub fn values(&self) -> [f64; Field::COUNT] {
        self.0
    }

    /// Value of one reading.
    #[must_use]
    pub fn get(&self, field: Field) -> f64 {
        self.0[field.index()]
    }
}

impl From<ValidatedRecord> for FeatureVector {
    fn from(record: ValidatedRecord) -> Self {
        record.to_feature_vector()
    }
}
