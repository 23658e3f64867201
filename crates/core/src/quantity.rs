//! Non-negative stock quantity.

use serde::{Deserialize, Serialize};

/// Number of units on hand.
///
/// A `Quantity` can never be negative: the only fallible constructor is
/// [`Quantity::new`], and deserialization goes through it as well.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct Quantity(i64);

impl Quantity {
    pub const ZERO: Quantity = Quantity(0);

    /// Returns `None` when `value` is negative.
    pub const fn new(value: i64) -> Option<Self> {
        if value < 0 { None } else { Some(Self(value)) }
    }

    pub const fn get(self) -> i64 {
        self.0
    }
}

impl From<u32> for Quantity {
    fn from(value: u32) -> Self {
        Self(i64::from(value))
    }
}

impl From<Quantity> for i64 {
    fn from(value: Quantity) -> Self {
        value.0
    }
}

impl TryFrom<i64> for Quantity {
    type Error = NegativeQuantity;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value).ok_or(NegativeQuantity(value))
    }
}

impl core::fmt::Display for Quantity {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Conversion error for a negative raw quantity.
#[derive(Debug, Copy, Clone, PartialEq, Eq, thiserror::Error)]
#[error("quantity cannot be negative (got {0})")]
pub struct NegativeQuantity(pub i64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_allowed() {
        assert_eq!(Quantity::new(0), Some(Quantity::ZERO));
    }

    #[test]
    fn negative_is_rejected() {
        assert_eq!(Quantity::new(-1), None);
        assert_eq!(Quantity::try_from(-3i64), Err(NegativeQuantity(-3)));
    }

    #[test]
    fn deserialization_rejects_negative_values() {
        assert!(serde_json::from_str::<Quantity>("-4").is_err());
        assert_eq!(serde_json::from_str::<Quantity>("4").unwrap().get(), 4);
    }
}
