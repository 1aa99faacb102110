//! UTC calendar arithmetic
//!
//! Billing cycles and installment schedules are defined over UTC
//! calendar fields. The helpers here implement the month-advance rule
//! used across the domain: the target month is computed by normalizing
//! year/month overflow, and the day-of-month is clamped to the last
//! valid day of the target month. Jan 31 + 1 month is Feb 28 (or 29),
//! never Mar 3.

use chrono::{DateTime, Datelike, NaiveDate, TimeZone, Utc};

/// Returns true for Gregorian leap years
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in the given month (1-12)
pub fn days_in_month(year: i32, month: u32) -> u32 {
    const DAYS: [u32; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
    if month == 2 && is_leap_year(year) {
        29
    } else {
        DAYS[(month - 1) as usize]
    }
}

/// Advances a datetime by `months` calendar months
///
/// The day-of-month is clamped to the last valid day of the target
/// month when the original day does not exist there. The time of day is
/// preserved unchanged.
pub fn add_months(date: DateTime<Utc>, months: u32) -> DateTime<Utc> {
    let total = date.year() * 12 + date.month0() as i32 + months as i32;
    let year = total.div_euclid(12);
    let month = total.rem_euclid(12) as u32 + 1;
    let day = date.day().min(days_in_month(year, month));

    let naive = NaiveDate::from_ymd_opt(year, month, day)
        .expect("clamped day is always valid for the target month")
        .and_time(date.time());
    Utc.from_utc_datetime(&naive)
}

/// First day of the datetime's month, at UTC midnight
pub fn first_of_month(date: DateTime<Utc>) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(date.year(), date.month(), 1, 0, 0, 0)
        .unwrap()
}

/// Last instant of the datetime's calendar day (23:59:59.999 UTC)
///
/// Date-only period bounds are normalized through here so that a range
/// ending "on" a day includes the whole day.
pub fn end_of_day(date: DateTime<Utc>) -> DateTime<Utc> {
    let naive = date
        .date_naive()
        .and_hms_milli_opt(23, 59, 59, 999)
        .unwrap();
    Utc.from_utc_datetime(&naive)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    fn utc(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(2025, 1), 31);
        assert_eq!(days_in_month(2025, 2), 28);
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2025, 4), 30);
        assert_eq!(days_in_month(2000, 2), 29);
        assert_eq!(days_in_month(1900, 2), 28);
    }

    #[test]
    fn test_add_months_plain() {
        assert_eq!(add_months(utc(2025, 1, 10), 1), utc(2025, 2, 10));
        assert_eq!(add_months(utc(2025, 1, 10), 0), utc(2025, 1, 10));
    }

    #[test]
    fn test_add_months_clamps_to_month_end() {
        assert_eq!(add_months(utc(2025, 1, 31), 1), utc(2025, 2, 28));
        assert_eq!(add_months(utc(2024, 1, 31), 1), utc(2024, 2, 29));
        assert_eq!(add_months(utc(2025, 3, 31), 1), utc(2025, 4, 30));
    }

    #[test]
    fn test_add_months_clamp_does_not_cascade() {
        // Each offset is computed from the base date, so a clamped
        // intermediate month does not shorten later ones.
        let base = utc(2025, 1, 31);
        assert_eq!(add_months(base, 1), utc(2025, 2, 28));
        assert_eq!(add_months(base, 2), utc(2025, 3, 31));
    }

    #[test]
    fn test_add_months_rolls_year() {
        assert_eq!(add_months(utc(2025, 11, 15), 2), utc(2026, 1, 15));
        assert_eq!(add_months(utc(2025, 12, 1), 13), utc(2027, 1, 1));
    }

    #[test]
    fn test_add_months_preserves_time_of_day() {
        let date = Utc.with_ymd_and_hms(2025, 5, 20, 14, 30, 45).unwrap();
        let advanced = add_months(date, 3);
        assert_eq!(advanced.hour(), 14);
        assert_eq!(advanced.minute(), 30);
        assert_eq!(advanced.second(), 45);
    }

    #[test]
    fn test_first_of_month() {
        let date = Utc.with_ymd_and_hms(2025, 6, 18, 9, 15, 0).unwrap();
        assert_eq!(first_of_month(date), utc(2025, 6, 1));
    }

    #[test]
    fn test_end_of_day() {
        let date = utc(2025, 1, 31);
        let end = end_of_day(date);
        assert_eq!(end.hour(), 23);
        assert_eq!(end.minute(), 59);
        assert_eq!(end.second(), 59);
        assert_eq!(end.timestamp_subsec_millis(), 999);
        assert_eq!(end.date_naive(), date.date_naive());
    }

    #[test]
    fn test_end_of_day_is_idempotent_on_the_day() {
        let late = Utc.with_ymd_and_hms(2025, 1, 31, 22, 10, 5).unwrap();
        assert_eq!(end_of_day(late).date_naive(), late.date_naive());
    }
}
