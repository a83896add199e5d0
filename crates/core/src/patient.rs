//! Patient record types.
//!
//! A [`PatientRecord`] carries the patient's identity and the [`HealthBaseline`] that live
//! readings are compared against. Records are created up front and stored through a
//! [`PatientDirectory`](crate::PatientDirectory); checks only ever read them.

use crate::{Temperature, VitalsError, VitalsResult};
use chrono::NaiveDate;
use std::fmt;

/// Identifier of a stored patient record.
///
/// Guaranteed non-empty; surrounding whitespace is trimmed on construction. Identifiers are
/// either assigned by the caller (any non-empty text) or generated by
/// [`PatientId::generate`] in canonical UUID form (32 lowercase hex characters).
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PatientId(String);

impl PatientId {
    /// Creates a `PatientId` from caller-supplied text.
    ///
    /// # Errors
    ///
    /// Returns [`VitalsError::InvalidInput`] if the trimmed input is empty.
    pub fn new(input: impl AsRef<str>) -> VitalsResult<Self> {
        let trimmed = input.as_ref().trim();
        if trimmed.is_empty() {
            return Err(VitalsError::InvalidInput(
                "patient id cannot be empty".into(),
            ));
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Generates a fresh identifier in canonical UUID form.
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().simple().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PatientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for PatientId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::str::FromStr for PatientId {
    type Err = VitalsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PatientId::new(s)
    }
}

/// Blood pressure as an ordered (high, low) pair.
///
/// `high >= low` is expected but not enforced.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BloodPressure {
    pub high: i32,
    pub low: i32,
}

impl BloodPressure {
    pub const fn new(high: i32, low: i32) -> Self {
        Self { high, low }
    }
}

impl fmt::Display for BloodPressure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.high, self.low)
    }
}

/// A patient's personal normal vital-sign values.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HealthBaseline {
    pub normal_temperature: Temperature,
    pub blood_pressure: BloodPressure,
}

impl HealthBaseline {
    pub fn new(normal_temperature: Temperature, blood_pressure: BloodPressure) -> Self {
        Self {
            normal_temperature,
            blood_pressure,
        }
    }
}

/// A stored patient with identity and baseline.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PatientRecord {
    pub id: PatientId,
    pub first_name: String,
    pub last_name: String,
    pub birth_date: NaiveDate,
    pub baseline: HealthBaseline,
}

impl PatientRecord {
    /// Creates a record with a freshly generated identifier.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        birth_date: NaiveDate,
        baseline: HealthBaseline,
    ) -> Self {
        Self::with_id(
            PatientId::generate(),
            first_name,
            last_name,
            birth_date,
            baseline,
        )
    }

    /// Creates a record with an externally assigned identifier.
    pub fn with_id(
        id: PatientId,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        birth_date: NaiveDate,
        baseline: HealthBaseline,
    ) -> Self {
        Self {
            id,
            first_name: first_name.into(),
            last_name: last_name.into(),
            birth_date,
            baseline,
        }
    }
}
