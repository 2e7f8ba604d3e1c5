//! Academic week numbering.
//!
//! The academic year starts on September 1. Its first week is the ISO week
//! containing that day, and weeks are counted from 1 until the next
//! September 1. ISO week numbers restart near every new year, so weeks falling
//! in the following ISO year are offset by the length of the starting one.

use chrono::{Datelike, NaiveDate};

/// Month and day the academic year starts on.
const ACADEMIC_YEAR_START: (u32, u32) = (9, 1);

/// December 28 always falls in the last ISO week of its year.
fn iso_weeks_in_year(year: i32) -> Option<u32> {
    NaiveDate::from_ymd_opt(year, 12, 28).map(|d| d.iso_week().week())
}

/// September 1 opening the academic year that `date` belongs to.
fn academic_year_start(date: NaiveDate) -> Option<NaiveDate> {
    let (month, day) = ACADEMIC_YEAR_START;
    let this_year = NaiveDate::from_ymd_opt(date.year(), month, day)?;
    if date >= this_year {
        Some(this_year)
    } else {
        NaiveDate::from_ymd_opt(date.year() - 1, month, day)
    }
}

fn checked_academic_week(date: NaiveDate) -> Option<u32> {
    let start = academic_year_start(date)?.iso_week();
    let current = date.iso_week();

    if current.year() == start.year() {
        Some(current.week() - start.week() + 1)
    } else {
        let last = iso_weeks_in_year(start.year())?;
        Some(last - start.week() + current.week() + 1)
    }
}

/// 1-based academic week of `date`.
///
/// Only dates within a year of chrono's representable range can fail to
/// resolve a start date; those are reported as week 1.
pub fn academic_week(date: NaiveDate) -> u32 {
    checked_academic_week(date).unwrap_or(1)
}

/// True when `date` falls in an even academic week.
#[inline]
pub fn is_even_week(date: NaiveDate) -> bool {
    academic_week(date) % 2 == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_september_first_is_week_one() {
        for year in 1990..2060 {
            assert_eq!(academic_week(make_date(year, 9, 1)), 1, "year {}", year);
        }
    }

    #[test]
    fn test_same_iso_year() {
        // 2025-09-01 is a Monday in ISO week 36
        assert_eq!(academic_week(make_date(2025, 9, 7)), 1);
        assert_eq!(academic_week(make_date(2025, 9, 8)), 2);
        assert_eq!(academic_week(make_date(2025, 12, 28)), 17);
    }

    #[test]
    fn test_wraps_past_new_year() {
        // 2025 has 52 ISO weeks; 2026-01-05 is ISO week 2
        assert_eq!(academic_week(make_date(2026, 1, 1)), 18);
        assert_eq!(academic_week(make_date(2026, 1, 5)), 19);
        assert_eq!(academic_week(make_date(2026, 5, 20)), 38);
    }

    #[test]
    fn test_week_spanning_new_year_counts_once() {
        // 2025-12-29..2026-01-04 is ISO 2026-W01, one calendar week after 2025-12-28
        for day in 29..=31 {
            assert_eq!(academic_week(make_date(2025, 12, day)), 18);
            assert!(is_even_week(make_date(2025, 12, day)));
        }
        for day in 1..=4 {
            assert_eq!(academic_week(make_date(2026, 1, day)), 18);
        }
        assert_eq!(academic_week(make_date(2025, 12, 28)), 17);
    }

    #[test]
    fn test_long_iso_year() {
        // 2026 has 53 ISO weeks and 2027-01-01 still belongs to week 53
        assert_eq!(academic_week(make_date(2026, 9, 1)), 1);
        assert_eq!(academic_week(make_date(2026, 12, 31)), 18);
        assert_eq!(academic_week(make_date(2027, 1, 1)), 18);
        assert_eq!(academic_week(make_date(2027, 1, 4)), 19);
    }

    #[test]
    fn test_end_of_august_does_not_reset() {
        // 2027-08-30 shares an ISO week with 2027-09-01 but still closes 2026/27
        assert_eq!(academic_week(make_date(2027, 8, 30)), 53);
        assert_eq!(academic_week(make_date(2027, 8, 31)), 53);
        assert_eq!(academic_week(make_date(2027, 9, 1)), 1);
    }

    #[test]
    fn test_monotonic_within_academic_year() {
        for year in 2015..2035 {
            let mut date = make_date(year, 9, 1);
            let end = make_date(year + 1, 9, 1);
            let mut previous = academic_week(date);
            assert_eq!(previous, 1);
            while let Some(next) = date.succ_opt() {
                if next >= end {
                    break;
                }
                let week = academic_week(next);
                assert!(week >= previous, "{} went from {} to {}", next, previous, week);
                assert!(week <= previous + 1, "{} skipped a week", next);
                previous = week;
                date = next;
            }
            assert_eq!(academic_week(end), 1);
        }
    }

    #[test]
    fn test_parity() {
        assert!(!is_even_week(make_date(2025, 9, 1)));
        assert!(is_even_week(make_date(2025, 9, 8)));
    }
}
