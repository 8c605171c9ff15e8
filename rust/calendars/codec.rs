//! Conversion between 8-digit `yyyymmdd` integers and year/month/day components.
//!
//! Pure functions with no state. Every date crossing the crate boundary is an
//! 8-digit integer; validation happens here, once, so the rest of the crate can
//! treat stored values as already-checked.

use chrono::{Datelike, NaiveDate};

use crate::errors::CalendarError;

/// Split a `yyyymmdd` integer into `(year, month, day)`.
///
/// Fails with [`CalendarError::InvalidDate`] unless the value is a real
/// calendar date with a 4-digit year, applying month lengths and leap-year
/// rules.
///
/// # Examples
/// ```rust
/// # use tradingdate::calendars::codec::decompose;
/// assert_eq!(decompose(20240229).unwrap(), (2024, 2, 29));
/// assert!(decompose(20230229).is_err());
/// ```
pub fn decompose(date: u32) -> Result<(i32, u32, u32), CalendarError> {
    let (year, month, day) = split(date);
    to_naive(date)?;
    Ok((year, month, day))
}

/// Compose `(year, month, day)` back into a `yyyymmdd` integer.
///
/// Inverse of [`decompose`]. Fails with
/// [`CalendarError::InvalidDateComponents`] on out-of-range components,
/// including a year outside 1000..=9999 which would not render as 8 digits.
pub fn compose(year: i32, month: u32, day: u32) -> Result<u32, CalendarError> {
    if !(1000..=9999).contains(&year) || NaiveDate::from_ymd_opt(year, month, day).is_none() {
        return Err(CalendarError::InvalidDateComponents { year, month, day });
    }
    Ok(year as u32 * 10_000 + month * 100 + day)
}

// Component split by integer arithmetic, without validation.
pub(crate) fn split(date: u32) -> (i32, u32, u32) {
    ((date / 10_000) as i32, date / 100 % 100, date % 100)
}

// Bridge to chrono for weekday and ISO week derivation.
pub(crate) fn to_naive(date: u32) -> Result<NaiveDate, CalendarError> {
    let (year, month, day) = split(date);
    if !(1000..=9999).contains(&year) {
        return Err(CalendarError::InvalidDate(date));
    }
    NaiveDate::from_ymd_opt(year, month, day).ok_or(CalendarError::InvalidDate(date))
}

// Inverse bridge. The year is 4 digits for any date this crate constructs.
pub(crate) fn from_naive(date: NaiveDate) -> u32 {
    date.year() as u32 * 10_000 + date.month() * 100 + date.day()
}
