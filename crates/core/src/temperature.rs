//! Exact decimal body temperature.
//!
//! Temperatures are arbitrary-precision decimals parsed directly from text, so comparisons near
//! the tolerance boundary are exact at any scale. Binary floating point is never involved.

use crate::constants::{TEMPERATURE_TOLERANCE_SCALE, TEMPERATURE_TOLERANCE_UNITS};
use crate::{VitalsError, VitalsResult};
use bigdecimal::BigDecimal;
use std::fmt;
use std::str::FromStr;

/// A body temperature held as an exact decimal.
///
/// Equality is numeric: `36.75` and `36.7500` are equal.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Temperature(BigDecimal);

impl Temperature {
    /// Creates `units × 10^-scale` degrees, e.g. `Temperature::new(3665, 2)` is 36.65.
    pub fn new(units: i64, scale: i64) -> Self {
        Self(BigDecimal::new(units.into(), scale))
    }

    /// Parses decimal text such as `"36.65"`, `"25.1"`, `"-3"` or
    /// `"25.10000000000000142108547152020037174224853515625"`. No digits are dropped.
    ///
    /// # Errors
    ///
    /// Returns [`VitalsError::InvalidTemperature`] if the text is not a decimal number.
    pub fn parse(input: &str) -> VitalsResult<Self> {
        BigDecimal::from_str(input.trim())
            .map(Self)
            .map_err(|_| VitalsError::InvalidTemperature(input.to_string()))
    }

    /// Absolute difference between two temperatures.
    pub fn abs_diff(&self, other: &Temperature) -> BigDecimal {
        (&self.0 - &other.0).abs()
    }

    /// Returns `true` if `self` differs from `baseline` by strictly more than `tolerance`.
    pub fn deviates_from(&self, baseline: &Temperature, tolerance: &Tolerance) -> bool {
        self.abs_diff(baseline) > tolerance.0
    }
}

impl FromStr for Temperature {
    type Err = VitalsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Temperature::parse(s)
    }
}

impl fmt::Display for Temperature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Allowed temperature deviation from baseline. Never negative.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tolerance(BigDecimal);

impl Tolerance {
    /// # Errors
    ///
    /// Returns [`VitalsError::InvalidInput`] if `value` is negative.
    pub fn new(value: Temperature) -> VitalsResult<Self> {
        if value.0 < BigDecimal::from(0) {
            return Err(VitalsError::InvalidInput(format!(
                "temperature tolerance cannot be negative: {value}"
            )));
        }
        Ok(Self(value.0))
    }

    /// The fixed 0.1 degree band used by temperature checks.
    pub fn standard() -> Self {
        Self(BigDecimal::new(
            TEMPERATURE_TOLERANCE_UNITS.into(),
            TEMPERATURE_TOLERANCE_SCALE,
        ))
    }
}
