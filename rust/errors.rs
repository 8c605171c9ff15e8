//! Error taxonomy for calendar construction, lookup and date arithmetic.

use thiserror::Error;

/// Errors surfaced by calendars, trading dates and the engine.
///
/// Every failure is deterministic and reported at the point of violation;
/// nothing is retried and no partial result is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalendarError {
    /// The value is not a real calendar date in `yyyymmdd` form.
    #[error("`{0}` is not a valid yyyymmdd date")]
    InvalidDate(u32),

    /// The year/month/day components do not form a real calendar date.
    #[error("({year}, {month}, {day}) does not form a valid calendar date")]
    InvalidDateComponents { year: i32, month: u32, day: u32 },

    /// A valid calendar date that is not a member of the named calendar.
    #[error("`{date}` is not a trading day on calendar '{calendar}'")]
    NotATradingDay { date: u32, calendar: String },

    /// A position or offset landing outside the calendar's date sequence.
    #[error("position {position} is out of range for calendar '{calendar}' of length {len}")]
    OutOfRange {
        calendar: String,
        position: i64,
        len: usize,
    },

    /// Two dates bound to distinct calendars cannot be compared.
    #[error("cannot compare trading dates across calendars '{lhs}' and '{rhs}'")]
    CrossCalendar { lhs: String, rhs: String },

    /// The id is neither registered nor a recognized built-in calendar.
    #[error("'{0}' is not found in the list of existing calendars")]
    UnknownCalendar(String),

    /// A recognized built-in id whose data source cannot supply dates.
    #[error("built-in calendar '{0}' is not supplied by the holiday data source")]
    UnsupportedCalendar(String),

    /// Registration under an id that already exists. Never overwrites.
    #[error("calendar '{0}' already exists and cannot be overwritten")]
    DuplicateCalendar(String),

    /// A calendar must hold at least one date.
    #[error("calendar '{0}' cannot be built without any valid dates")]
    EmptyCalendar(String),

    /// A date range stride of zero.
    #[error("`step` for a date range cannot be zero")]
    InvalidStep,
}
