//! Pre-built test data for common entities

use chrono::{DateTime, TimeZone, Utc};
use domain_ledger::Card;
use ledger_kernel::CardId;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Canonical cards used across the test suite
pub struct CardFixtures;

impl CardFixtures {
    /// Card closing mid-month; good for exercising both sides of the
    /// closing-day boundary
    pub fn nubank() -> Card {
        Card::new(CardId::new_v7(), "Nubank", 20, 28)
    }

    /// Card closing late in the month
    pub fn bradesco() -> Card {
        Card::new(CardId::new_v7(), "Bradesco", 28, 10)
    }

    pub fn btg() -> Card {
        Card::new(CardId::new_v7(), "BTG", 28, 10)
    }

    /// The full seeded card set
    pub fn all() -> Vec<Card> {
        vec![Self::nubank(), Self::bradesco(), Self::btg()]
    }
}

/// Common monetary values
pub struct AmountFixtures;

impl AmountFixtures {
    pub fn coffee() -> Decimal {
        dec!(12.50)
    }

    pub fn groceries() -> Decimal {
        dec!(487.32)
    }

    pub fn rent() -> Decimal {
        dec!(1800.00)
    }

    pub fn salary() -> Decimal {
        dec!(9500.00)
    }
}

/// Common dates, all UTC
pub struct DateFixtures;

impl DateFixtures {
    pub fn utc(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
    }

    /// A date safely before every fixture card's closing day
    pub fn early_january() -> DateTime<Utc> {
        Self::utc(2025, 1, 10)
    }

    /// A date on or after every fixture card's closing day
    pub fn late_january() -> DateTime<Utc> {
        Self::utc(2025, 1, 29)
    }

    /// Start/end bounds for a whole month
    pub fn month_bounds(y: i32, m: u32) -> (DateTime<Utc>, DateTime<Utc>) {
        let start = Self::utc(y, m, 1);
        let end = Self::utc(y, m, ledger_kernel::days_in_month(y, m));
        (start, end)
    }
}
