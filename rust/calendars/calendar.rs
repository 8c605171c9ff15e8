use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::calendars::codec;
use crate::errors::CalendarError;

/// An immutable, strictly ascending sequence of valid trading dates bound to a
/// calendar identifier.
///
/// A `TradingCalendar` is built once, either from the static data source for a
/// built-in identifier or from a caller-supplied date list, and never mutated
/// afterwards. Membership and position lookups are binary searches over the
/// ordered sequence.
///
/// # Examples
/// ```rust
/// # use tradingdate::calendars::TradingCalendar;
/// let cal = TradingCalendar::try_new("user-defined", vec![20250115, 20250101, 20250201]).unwrap();
/// assert_eq!(cal.dates(), &[20250101, 20250115, 20250201]);
/// assert!(cal.contains(20250115));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradingCalendar {
    pub(crate) id: String,
    pub(crate) dates: Vec<u32>,
}

impl TradingCalendar {
    /// Build a calendar from an id and a set of `yyyymmdd` dates.
    ///
    /// Every date is validated against real calendar rules. Input is sorted
    /// and de-duplicated defensively rather than rejected when out of order;
    /// calendars are built once and correctness matters more than surprising
    /// silently-reordered input.
    ///
    /// Fails with [`CalendarError::InvalidDate`] on the first malformed date
    /// and with [`CalendarError::EmptyCalendar`] when no dates remain.
    pub fn try_new(id: &str, dates: Vec<u32>) -> Result<Self, CalendarError> {
        for date in &dates {
            codec::to_naive(*date)?;
        }
        let dates: Vec<u32> = dates.into_iter().sorted().dedup().collect();
        if dates.is_empty() {
            return Err(CalendarError::EmptyCalendar(id.to_string()));
        }
        Ok(Self {
            id: id.to_string(),
            dates,
        })
    }

    /// The calendar identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The full ordered date sequence.
    pub fn dates(&self) -> &[u32] {
        &self.dates
    }

    /// Number of trading dates in the calendar. Always at least one.
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// Whether the calendar holds no dates. Construction guarantees `false`.
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Whether `date` is a trading day on this calendar.
    pub fn contains(&self, date: u32) -> bool {
        self.dates.binary_search(&date).is_ok()
    }

    /// The position of `date` within the sequence.
    ///
    /// Fails with [`CalendarError::NotATradingDay`] when absent, even if the
    /// value is a perfectly valid calendar date.
    pub fn position_of(&self, date: u32) -> Result<usize, CalendarError> {
        self.dates
            .binary_search(&date)
            .map_err(|_| CalendarError::NotATradingDay {
                date,
                calendar: self.id.clone(),
            })
    }

    /// The date stored at `position`.
    pub fn date_at(&self, position: usize) -> Result<u32, CalendarError> {
        self.dates
            .get(position)
            .copied()
            .ok_or(CalendarError::OutOfRange {
                calendar: self.id.clone(),
                position: position as i64,
                len: self.dates.len(),
            })
    }

    /// All trading dates in `[start, end]` inclusive.
    ///
    /// The bounding positions are found by binary search. Returns an empty
    /// slice, never an error, when no trading date falls in the window.
    pub fn slice(&self, start: u32, end: u32) -> &[u32] {
        let (lo, hi) = self.position_window(start, end);
        &self.dates[lo..hi]
    }

    // Half-open position window [lo, hi) covering dates in [start, end].
    pub(crate) fn position_window(&self, start: u32, end: u32) -> (usize, usize) {
        let lo = self.dates.partition_point(|d| *d < start);
        let hi = self.dates.partition_point(|d| *d <= end);
        (lo, hi.max(lo))
    }

    /// First and last trading dates of the calendar.
    pub fn bounds(&self) -> (u32, u32) {
        (self.dates[0], self.dates[self.dates.len() - 1])
    }

    /// The position of the first trading date on or after `date`.
    ///
    /// Fails with [`CalendarError::OutOfRange`] when `date` lies beyond the
    /// last trading date.
    pub fn roll_forward(&self, date: u32) -> Result<usize, CalendarError> {
        let position = self.dates.partition_point(|d| *d < date);
        if position == self.dates.len() {
            return Err(CalendarError::OutOfRange {
                calendar: self.id.clone(),
                position: position as i64,
                len: self.dates.len(),
            });
        }
        Ok(position)
    }

    /// The position of the last trading date on or before `date`.
    ///
    /// Fails with [`CalendarError::OutOfRange`] when `date` lies before the
    /// first trading date.
    pub fn roll_backward(&self, date: u32) -> Result<usize, CalendarError> {
        let hi = self.dates.partition_point(|d| *d <= date);
        if hi == 0 {
            return Err(CalendarError::OutOfRange {
                calendar: self.id.clone(),
                position: -1,
                len: self.dates.len(),
            });
        }
        Ok(hi - 1)
    }
}
