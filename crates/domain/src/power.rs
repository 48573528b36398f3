//! Power values expressed in watts.

use std::fmt;
use std::iter::Sum;
use std::ops::Add;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// A finite, non-negative amount of electric power, in watts.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Watts(f64);

impl Watts {
    pub const ZERO: Self = Self(0.0);

    /// Wrap a raw watt value.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidPower`] when `value` is negative,
    /// `NaN`, or infinite.
    pub fn new(value: f64) -> Result<Self, ValidationError> {
        if !value.is_finite() || value < 0.0 {
            return Err(ValidationError::InvalidPower { value });
        }
        // folds -0.0 into 0.0 so it never renders as "-0"
        Ok(Self(value + 0.0))
    }

    /// Access the raw watt value.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl From<u32> for Watts {
    fn from(value: u32) -> Self {
        Self(f64::from(value))
    }
}

impl TryFrom<f64> for Watts {
    type Error = ValidationError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Watts> for f64 {
    fn from(value: Watts) -> Self {
        value.0
    }
}

impl Add for Watts {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sum for Watts {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Watts> for Watts {
    fn sum<I: Iterator<Item = &'a Watts>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl fmt::Display for Watts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
