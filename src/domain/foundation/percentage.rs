//! Percentage value object (0-100 scale).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// A whole-number share between 0 and 100 inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Percentage(u8);

impl Percentage {
    /// Zero percent.
    pub const ZERO: Self = Self(0);

    /// One hundred percent.
    pub const HUNDRED: Self = Self(100);

    /// Creates a new Percentage, clamping to valid range.
    pub fn new(value: u8) -> Self {
        Self(value.min(100))
    }

    /// Creates a Percentage, returning error if out of range.
    pub fn try_new(value: u8) -> Result<Self, ValidationError> {
        if value > 100 {
            return Err(ValidationError::out_of_range(
                "percentage",
                0,
                100,
                i64::from(value),
            ));
        }
        Ok(Self(value))
    }

    /// Share of `part` in `whole`, rounded half up to a whole percent.
    ///
    /// A zero `whole` yields 0%; `part` above `whole` clamps to 100%.
    pub fn from_ratio(part: u32, whole: u32) -> Self {
        if whole == 0 {
            return Self::ZERO;
        }
        let part = u64::from(part.min(whole));
        let whole = u64::from(whole);
        let rounded = (part * 200 + whole) / (whole * 2);
        Self(rounded as u8)
    }

    /// Returns the value as u8.
    pub fn value(&self) -> u8 {
        self.0
    }
}

impl Default for Percentage {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentage_new_clamps_to_100() {
        assert_eq!(Percentage::new(42).value(), 42);
        assert_eq!(Percentage::new(101).value(), 100);
    }

    #[test]
    fn percentage_try_new_rejects_over_100() {
        match Percentage::try_new(101) {
            Err(ValidationError::OutOfRange { field, actual, .. }) => {
                assert_eq!(field, "percentage");
                assert_eq!(actual, 101);
            }
            other => panic!("Expected OutOfRange error, got {:?}", other),
        }
    }

    #[test]
    fn from_ratio_rounds_half_up() {
        // 1/288 = 0.347%
        assert_eq!(Percentage::from_ratio(1, 288).value(), 0);
        // 2/288 = 0.694%
        assert_eq!(Percentage::from_ratio(2, 288).value(), 1);
        assert_eq!(Percentage::from_ratio(1, 2).value(), 50);
        assert_eq!(Percentage::from_ratio(1, 8).value(), 13);
        assert_eq!(Percentage::from_ratio(288, 288), Percentage::HUNDRED);
    }

    #[test]
    fn from_ratio_handles_degenerate_inputs() {
        assert_eq!(Percentage::from_ratio(0, 0), Percentage::ZERO);
        assert_eq!(Percentage::from_ratio(5, 3), Percentage::HUNDRED);
    }

    #[test]
    fn percentage_displays_with_sign() {
        assert_eq!(format!("{}", Percentage::new(75)), "75%");
    }

    #[test]
    fn percentage_serializes_as_number() {
        let json = serde_json::to_string(&Percentage::new(42)).unwrap();
        assert_eq!(json, "42");
    }
}
