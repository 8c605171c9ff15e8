//! Static data for the built-in named trading calendars.
//!
//! Each data module plays the role of the external holiday oracle: it fixes a
//! coverage window, the weekend mask, the official non-working days and the
//! weekend make-up working days for one locale. The engine queries it once
//! per id and never extrapolates beyond the window.

pub mod chinese;

use chrono::{Datelike, Days};

use crate::calendars::codec;
use crate::errors::CalendarError;

pub(crate) const BUILTIN: &[&str] = &["chinese"];

/// Whether `name` is a recognized built-in calendar identifier.
pub(crate) fn is_builtin(name: &str) -> bool {
    BUILTIN.contains(&name)
}

/// Assemble the ordered trading dates for a built-in calendar name over its
/// full coverage window.
///
/// Fails with [`CalendarError::UnsupportedCalendar`] when a recognized name
/// yields no dates, and [`CalendarError::UnknownCalendar`] for anything else.
pub(crate) fn get_builtin_dates(name: &str) -> Result<Vec<u32>, CalendarError> {
    let dates = match name {
        "chinese" => working_days(
            chinese::FIRST,
            chinese::LAST,
            chinese::WEEKMASK,
            chinese::HOLIDAYS,
            chinese::WORKDAYS,
        )?,
        _ => return Err(CalendarError::UnknownCalendar(name.to_string())),
    };
    if dates.is_empty() {
        return Err(CalendarError::UnsupportedCalendar(name.to_string()));
    }
    Ok(dates)
}

// Walk the coverage window day by day: a member is a weekday outside the
// holiday list, or a weekend day inside the make-up workday list. The
// constant lists are ascending, so membership is a binary search.
fn working_days(
    first: u32,
    last: u32,
    weekmask: &[u8],
    holidays: &[u32],
    workdays: &[u32],
) -> Result<Vec<u32>, CalendarError> {
    let mut current = codec::to_naive(first)?;
    let end = codec::to_naive(last)?;
    let mut out = Vec::new();
    while current <= end {
        let date = codec::from_naive(current);
        let weekend = weekmask.contains(&(current.weekday().num_days_from_monday() as u8));
        let member = if weekend {
            workdays.binary_search(&date).is_ok()
        } else {
            holidays.binary_search(&date).is_err()
        };
        if member {
            out.push(date);
        }
        current = current + Days::new(1);
    }
    Ok(out)
}
