//! Money types with precise decimal arithmetic
//!
//! This module provides the monetary magnitude used by every ledger
//! movement. Amounts live in memory as two-decimal-place `Decimal`
//! values and cross the persistence boundary as integer cents.
//!
//! The ledger is single-currency: a movement's direction is carried by
//! its transaction type, never by the sign of the number, so `Amount`
//! is always a strictly positive magnitude.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Errors that can occur when constructing monetary values
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MoneyError {
    #[error("Amount must be greater than zero.")]
    NotPositive,

    #[error("Amount exceeds the representable cent range")]
    Overflow,
}

/// A strictly positive monetary magnitude
///
/// `Amount` normalizes any signed input to its absolute value and rounds
/// to cent precision. Zero (including values that round to zero) is
/// rejected - a ledger movement of nothing is not a movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Amount(Decimal);

impl Amount {
    /// Number of decimal places carried in memory
    pub const DECIMAL_PLACES: u32 = 2;

    /// Creates an amount from a decimal value
    ///
    /// The sign of the input is discarded and the magnitude is rounded
    /// to cent precision using banker's rounding.
    pub fn new(value: Decimal) -> Result<Self, MoneyError> {
        let magnitude = value.abs().round_dp(Self::DECIMAL_PLACES);
        if magnitude.is_zero() {
            return Err(MoneyError::NotPositive);
        }
        Ok(Self(magnitude))
    }

    /// Creates an amount from integer minor units (cents)
    ///
    /// This is the inbound half of the storage boundary: rows persist
    /// `amount_cents` and rehydrate through here.
    pub fn from_cents(cents: i64) -> Result<Self, MoneyError> {
        if cents == 0 {
            return Err(MoneyError::NotPositive);
        }
        Ok(Self(Decimal::new(cents.abs(), Self::DECIMAL_PLACES)))
    }

    /// Returns the amount as integer cents
    ///
    /// The outbound half of the storage boundary. Since `Amount` is
    /// already rounded to cent precision this conversion is exact.
    pub fn to_cents(&self) -> i64 {
        (self.0 * dec!(100))
            .round()
            .to_i64()
            .unwrap_or(i64::MAX)
    }

    /// Returns the decimal magnitude
    pub fn as_decimal(&self) -> Decimal {
        self.0
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

/// Converts an integer-cent total into decimal currency units
///
/// Used on the read side when aggregated cent sums (which may be zero,
/// unlike `Amount`) are converted for output.
pub fn cents_to_decimal(cents: i64) -> Decimal {
    Decimal::new(cents, Amount::DECIMAL_PLACES)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn cent_round_trip_is_exact(cents in 1i64..1_000_000_000i64) {
            let amount = Amount::from_cents(cents).unwrap();
            prop_assert_eq!(amount.to_cents(), cents);
        }

        #[test]
        fn sign_is_never_meaningful(cents in 1i64..1_000_000_000i64) {
            let positive = Amount::new(Decimal::new(cents, 2)).unwrap();
            let negative = Amount::new(Decimal::new(-cents, 2)).unwrap();
            prop_assert_eq!(positive, negative);
        }
    }
}
