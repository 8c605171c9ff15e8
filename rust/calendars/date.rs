use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use chrono::Datelike;

use crate::calendars::codec;
use crate::calendars::views::{MonthCalendar, YearCalendar};
use crate::calendars::TradingCalendar;
use crate::errors::CalendarError;

/// A single date bound to a position within a specific [`TradingCalendar`].
///
/// Arithmetic counts *trading days*: `shift(n)` moves `n` positions along the
/// owning calendar's date sequence, skipping non-trading days entirely.
/// Instances are never mutated; every operation produces a new `TradingDate`.
///
/// # Examples
/// ```rust
/// # use tradingdate::calendars::CalendarEngine;
/// let engine = CalendarEngine::new();
/// engine.make_calendar("demo", vec![20250101, 20250115, 20250201]).unwrap();
/// let date = engine.get_trading_date(20250115, "demo").unwrap();
/// assert_eq!(date.shift(1).unwrap().value(), 20250201);
/// assert_eq!(date.shift(-1).unwrap().value(), 20250101);
/// ```
#[derive(Clone, Debug)]
pub struct TradingDate {
    calendar: Arc<TradingCalendar>,
    position: usize,
    value: u32,
}

impl TradingDate {
    // The only constructors; both uphold `calendar.dates[position] == value`.
    pub(crate) fn from_position(
        calendar: Arc<TradingCalendar>,
        position: usize,
    ) -> Result<Self, CalendarError> {
        let value = calendar.date_at(position)?;
        Ok(Self {
            calendar,
            position,
            value,
        })
    }

    pub(crate) fn from_date(
        calendar: Arc<TradingCalendar>,
        date: u32,
    ) -> Result<Self, CalendarError> {
        let position = calendar.position_of(date)?;
        Ok(Self {
            calendar,
            position,
            value: date,
        })
    }

    /// The date as a `yyyymmdd` integer.
    pub fn value(&self) -> u32 {
        self.value
    }

    /// The index of this date within the owning calendar.
    pub fn position(&self) -> usize {
        self.position
    }

    /// The owning calendar.
    pub fn calendar(&self) -> &Arc<TradingCalendar> {
        &self.calendar
    }

    /// The trading date `n` trading days away on the same calendar.
    ///
    /// `n` may be negative or zero. Fails with [`CalendarError::OutOfRange`]
    /// when the target position falls outside the calendar.
    ///
    /// # Examples
    /// ```rust
    /// # use tradingdate::calendars::CalendarEngine;
    /// let engine = CalendarEngine::new();
    /// let date = engine.get_trading_date(20250116, "chinese").unwrap();
    /// assert_eq!(date.shift(-20).unwrap().value(), 20241218);
    /// assert_eq!(date.shift(100).unwrap().value(), 20250617);
    /// ```
    pub fn shift(&self, n: i32) -> Result<TradingDate, CalendarError> {
        let target = self.position as i64 + n as i64;
        if target < 0 || target >= self.calendar.len() as i64 {
            return Err(CalendarError::OutOfRange {
                calendar: self.calendar.id().to_string(),
                position: target,
                len: self.calendar.len(),
            });
        }
        Self::from_position(self.calendar.clone(), target as usize)
    }

    /// Compare against another trading date on the same calendar.
    ///
    /// Fails with [`CalendarError::CrossCalendar`] when the calendars differ;
    /// ordering across distinct calendars is not defined.
    pub fn compare(&self, other: &TradingDate) -> Result<Ordering, CalendarError> {
        if self.calendar.id() != other.calendar.id() {
            return Err(CalendarError::CrossCalendar {
                lhs: self.calendar.id().to_string(),
                rhs: other.calendar.id().to_string(),
            });
        }
        Ok(self.value.cmp(&other.value))
    }

    /// Sub-range view over the owning calendar covering this date's year.
    pub fn year(&self) -> YearCalendar {
        YearCalendar::containing(self)
    }

    /// Sub-range view over the owning calendar covering this date's month.
    pub fn month(&self) -> MonthCalendar {
        MonthCalendar::containing(self)
    }

    /// ISO week number of the date, independent of the calendar's
    /// trading-day structure.
    pub fn week_number(&self) -> u32 {
        codec::to_naive(self.value)
            .expect("value is validated at calendar construction")
            .iso_week()
            .week()
    }

    /// The 4-digit year component.
    pub fn year_number(&self) -> i32 {
        (self.value / 10_000) as i32
    }

    /// The month component, 1..=12.
    pub fn month_number(&self) -> u32 {
        self.value / 100 % 100
    }

    /// The day-of-month component.
    pub fn day_number(&self) -> u32 {
        self.value % 100
    }
}

impl fmt::Display for TradingDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl PartialEq for TradingDate {
    fn eq(&self, other: &Self) -> bool {
        self.calendar.id() == other.calendar.id() && self.value == other.value
    }
}

/// Ordering is only defined within a single calendar; `partial_cmp` returns
/// `None` across calendars where [`TradingDate::compare`] returns the error.
impl PartialOrd for TradingDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.compare(other).ok()
    }
}
