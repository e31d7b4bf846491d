//! Age and elapsed-time utilities
//!
//! Every age-gated rule in the engine (contribution cutoffs, retirement
//! boundaries, milestone cross-checks) derives from [`AgeAnchor`]. A missing
//! or inverted birth date yields `None` rather than a guessed age, so callers
//! can render an explicit unavailable state.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Hard upper bound on any projection horizon. Malformed input can never
/// produce a loop past this age.
pub const MAX_PROJECTION_AGE: u8 = 120;

/// Whole years and whole months elapsed since a birth date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgeAnchor {
    /// Completed years of age
    pub years: u8,
    /// Total completed months since birth (never negative)
    pub months: u32,
}

impl AgeAnchor {
    /// Compute the anchor at `as_of` for someone born on `birth`.
    ///
    /// Returns `None` when `as_of` precedes `birth`; ages past
    /// [`MAX_PROJECTION_AGE`] are clamped.
    pub fn at(birth: NaiveDate, as_of: NaiveDate) -> Option<Self> {
        let months = elapsed_whole_months(birth, as_of)?;
        let years = (months / 12).min(MAX_PROJECTION_AGE as u32) as u8;
        Some(Self { years, months })
    }

    /// Completed months within the current year of age (0-11).
    pub fn months_into_year(&self) -> u32 {
        self.months % 12
    }
}

/// Completed whole months from `from` to `to`, truncating downward.
///
/// A partial month does not count: Jan 15 to Feb 14 is 0 months, Jan 15 to
/// Feb 15 is 1. Returns `None` when `to` precedes `from`.
pub fn elapsed_whole_months(from: NaiveDate, to: NaiveDate) -> Option<u32> {
    if to < from {
        return None;
    }

    let mut months = (to.year() - from.year()) * 12 + (to.month() as i32 - from.month() as i32);
    if to.day() < from.day() {
        months -= 1;
    }

    // Same calendar month but earlier day is caught by the date comparison
    // above, so months is non-negative here.
    Some(months.max(0) as u32)
}

/// Completed whole years from `from` to `to`. `None` when `to` precedes `from`.
pub fn elapsed_whole_years(from: NaiveDate, to: NaiveDate) -> Option<u32> {
    elapsed_whole_months(from, to).map(|m| m / 12)
}

/// Elapsed time in fractional years, month-granular. Used for annualizing
/// returns. `None` when `to` precedes `from`.
pub fn elapsed_years_fractional(from: NaiveDate, to: NaiveDate) -> Option<f64> {
    elapsed_whole_months(from, to).map(|m| m as f64 / 12.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_age_anchor_basic() {
        let anchor = AgeAnchor::at(d(1990, 6, 15), d(2025, 6, 15)).unwrap();
        assert_eq!(anchor.years, 35);
        assert_eq!(anchor.months, 420);
        assert_eq!(anchor.months_into_year(), 0);
    }

    #[test]
    fn test_age_anchor_partial_year() {
        let anchor = AgeAnchor::at(d(1990, 6, 15), d(2025, 9, 20)).unwrap();
        assert_eq!(anchor.years, 35);
        assert_eq!(anchor.months_into_year(), 3);
    }

    #[test]
    fn test_age_anchor_before_birth_is_unavailable() {
        assert_eq!(AgeAnchor::at(d(1990, 6, 15), d(1989, 1, 1)), None);
    }

    #[test]
    fn test_elapsed_months_truncates_downward() {
        assert_eq!(elapsed_whole_months(d(2024, 1, 15), d(2024, 2, 14)), Some(0));
        assert_eq!(elapsed_whole_months(d(2024, 1, 15), d(2024, 2, 15)), Some(1));
        assert_eq!(elapsed_whole_months(d(2024, 1, 15), d(2025, 1, 14)), Some(11));
        assert_eq!(elapsed_whole_months(d(2024, 1, 15), d(2025, 1, 15)), Some(12));
    }

    #[test]
    fn test_elapsed_months_same_day() {
        assert_eq!(elapsed_whole_months(d(2024, 3, 1), d(2024, 3, 1)), Some(0));
    }

    #[test]
    fn test_elapsed_years() {
        assert_eq!(elapsed_whole_years(d(2020, 5, 1), d(2025, 4, 30)), Some(4));
        assert_eq!(elapsed_whole_years(d(2020, 5, 1), d(2025, 5, 1)), Some(5));
        assert_eq!(elapsed_years_fractional(d(2024, 1, 1), d(2024, 7, 1)), Some(0.5));
    }

    #[test]
    fn test_age_clamped_at_maximum() {
        let anchor = AgeAnchor::at(d(1890, 1, 1), d(2025, 1, 1)).unwrap();
        assert_eq!(anchor.years, MAX_PROJECTION_AGE);
    }
}
