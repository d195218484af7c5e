//! Reference date resolution.
//!
//! Curves are published monthly for the last calendar day of the month.
//! A requested date resolves to the latest month-end not after it; with no
//! request, or a request in the future, the latest month-end whose curve
//! is expected to be published by today is used.

use chrono::{Datelike, Duration, NaiveDate};
use log::debug;

/// First day of the month on which the previous month-end curve is
/// assumed to be available.
const PUBLICATION_DAY: u32 = 5;

/// Resolves the reference date for a request made on `today`.
///
/// # Example
///
/// ```rust
/// use chrono::NaiveDate;
/// use rfr_config::resolve_reference_date;
///
/// let today = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
///
/// let month_end = NaiveDate::from_ymd_opt(2018, 12, 31).unwrap();
/// assert_eq!(resolve_reference_date(Some(month_end), today), month_end);
///
/// let mid_month = NaiveDate::from_ymd_opt(2018, 12, 15).unwrap();
/// assert_eq!(
///     resolve_reference_date(Some(mid_month), today),
///     NaiveDate::from_ymd_opt(2018, 11, 30).unwrap()
/// );
/// ```
pub fn resolve_reference_date(requested: Option<NaiveDate>, today: NaiveDate) -> NaiveDate {
    let anchor = match requested {
        Some(date) if date <= today => date + Duration::days(1),
        _ if today.day() < PUBLICATION_DAY => previous_month_end(today),
        _ => today,
    };

    let reference = previous_month_end(anchor);
    debug!("reference date for {requested:?} (today {today}): {reference}");
    reference
}

/// Renders a reference date as `YYYYMMDD`.
pub fn compact_reference_date(date: NaiveDate) -> String {
    date.format("%Y%m%d").to_string()
}

/// Last day of the month before `date`.
fn previous_month_end(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.day()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_requested_dates() {
        let today = ymd(2026, 10, 18);

        assert_eq!(resolve_reference_date(Some(ymd(2018, 12, 31)), today), ymd(2018, 12, 31));
        assert_eq!(resolve_reference_date(Some(ymd(2018, 12, 30)), today), ymd(2018, 11, 30));
        assert_eq!(resolve_reference_date(Some(ymd(2020, 3, 1)), today), ymd(2020, 2, 29));
        assert_eq!(resolve_reference_date(Some(ymd(2020, 2, 29)), today), ymd(2020, 2, 29));
    }

    #[test]
    fn test_no_request_uses_today() {
        assert_eq!(resolve_reference_date(None, ymd(2026, 10, 18)), ymd(2026, 9, 30));
        assert_eq!(resolve_reference_date(None, ymd(2026, 10, 5)), ymd(2026, 9, 30));
        // Before publication day the previous month is not out yet.
        assert_eq!(resolve_reference_date(None, ymd(2026, 10, 4)), ymd(2026, 8, 31));
        assert_eq!(resolve_reference_date(None, ymd(2026, 1, 2)), ymd(2025, 11, 30));
    }

    #[test]
    fn test_future_request_uses_today() {
        let today = ymd(2026, 10, 18);
        assert_eq!(
            resolve_reference_date(Some(ymd(2030, 1, 31)), today),
            resolve_reference_date(None, today)
        );
    }

    #[test]
    fn test_compact_rendering() {
        assert_eq!(compact_reference_date(ymd(2018, 12, 31)), "20181231");
        assert_eq!(compact_reference_date(ymd(2020, 2, 29)), "20200229");
    }

    proptest! {
        #[test]
        fn prop_result_is_month_end_not_after_request(offset in 0i64..13_000) {
            let today = ymd(2026, 10, 18);
            let requested = ymd(1990, 1, 1) + Duration::days(offset);
            let reference = resolve_reference_date(Some(requested), today);

            prop_assert!(reference <= requested);
            prop_assert_eq!((reference + Duration::days(1)).day(), 1);
            prop_assert!(requested - reference < Duration::days(31));
        }
    }
}
