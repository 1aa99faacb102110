//! Statement-month attribution
//!
//! Maps a transaction date and a card's closing day to the billing
//! statement the purchase belongs to. Pure calendar logic, no I/O.

use chrono::{DateTime, Datelike, TimeZone, Utc};

use crate::card::Card;

/// Calculates the reference date (first day of the statement month)
/// for a card transaction
pub struct ReferenceDateCalculator;

impl ReferenceDateCalculator {
    /// Returns the first day, at UTC midnight, of the statement month
    /// the transaction is attributed to
    ///
    /// A purchase made on or after the card's closing day belongs to
    /// the next month's bill; December rolls into January of the next
    /// year.
    pub fn calculate(transaction_date: DateTime<Utc>, card: &Card) -> DateTime<Utc> {
        let mut year = transaction_date.year();
        let mut month = transaction_date.month();

        if transaction_date.day() >= card.closing_day {
            month += 1;
            if month > 12 {
                month = 1;
                year += 1;
            }
        }

        Utc.with_ymd_and_hms(year, month, 1, 0, 0, 0).unwrap()
    }
}
