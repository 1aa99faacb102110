//! Property-based test data generators

use fake::faker::lorem::en::Sentence;
use fake::Fake;
use proptest::prelude::*;
use rust_decimal::Decimal;

/// Strategy over realistic positive amounts, exact to the cent
pub fn cent_amounts() -> impl Strategy<Value = Decimal> {
    (1i64..=10_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy over days of month that exist in every month
pub fn safe_days_of_month() -> impl Strategy<Value = u32> {
    1u32..=28
}

/// Strategy over card closing days
pub fn closing_days() -> impl Strategy<Value = u32> {
    1u32..=31
}

/// Strategy over installment plan lengths
pub fn installment_counts() -> impl Strategy<Value = u32> {
    2u32..=24
}

/// Strategy over calendar months
pub fn months() -> impl Strategy<Value = u32> {
    1u32..=12
}

/// A generated human-ish transaction description
pub fn description() -> String {
    Sentence(2..6).fake()
}
