//! Native currency amounts.
//!
//! Amounts are fixed-point integers (u128 raw units) to avoid floating
//! point. One whole unit of native currency is `UNIT` raw.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Raw units per whole unit of native currency.
pub const UNIT: u128 = 1_000_000_000_000_000_000;

/// An amount of native currency in raw units.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Amount(u128);

impl Amount {
    pub const ZERO: Self = Self(0);

    pub fn new(raw: u128) -> Self {
        Self(raw)
    }

    /// `n` whole units of native currency.
    pub fn from_units(n: u128) -> Self {
        Self(n * UNIT)
    }

    pub fn raw(&self) -> u128 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }

    pub fn checked_sub(self, other: Self) -> Option<Self> {
        self.0.checked_sub(other.0).map(Self)
    }

    pub fn saturating_sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} raw", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_units_scales_by_unit() {
        assert_eq!(Amount::from_units(1).raw(), UNIT);
        assert_eq!(Amount::from_units(4).raw(), 4 * UNIT);
    }

    #[test]
    fn checked_sub_underflow_is_none() {
        assert_eq!(Amount::new(1).checked_sub(Amount::new(2)), None);
        assert_eq!(
            Amount::new(2).checked_sub(Amount::new(1)),
            Some(Amount::new(1))
        );
    }

    #[test]
    fn ordering_follows_raw_value() {
        assert!(Amount::from_units(1) > Amount::new(UNIT - 1));
        assert!(Amount::ZERO < Amount::new(1));
    }
}
