use std::sync::{Arc, RwLock};

use indexmap::IndexMap;

use crate::calendars::views::DateRange;
use crate::calendars::{codec, named, TradingCalendar, TradingDate};
use crate::errors::CalendarError;

/// Process-wide registry mapping calendar identifiers to built calendars.
///
/// Built-in calendars are assembled lazily from the static holiday data source
/// on first request and memoized; user calendars are registered through
/// [`make_calendar`](Self::make_calendar). Registry mutation is serialized
/// under a single write lock per engine, so at most one build happens per id
/// and concurrent registrations of one id resolve deterministically.
///
/// An engine starts empty and lives for the process; tests get isolation from
/// fresh instances.
///
/// # Examples
/// ```rust
/// # use tradingdate::calendars::CalendarEngine;
/// let engine = CalendarEngine::new();
/// engine.make_calendar("user-defined", vec![20250101, 20250115, 20250201]).unwrap();
/// let dates: Vec<u32> = engine
///     .get_trading_dates(20250101, 20250131, "user-defined")
///     .unwrap()
///     .iter()
///     .map(|d| d.value())
///     .collect();
/// assert_eq!(dates, vec![20250101, 20250115]);
/// ```
#[derive(Default)]
pub struct CalendarEngine {
    registry: RwLock<IndexMap<String, Arc<TradingCalendar>>>,
}

impl CalendarEngine {
    /// The calendar id resolved by convention when callers have no other
    /// preference.
    pub const DEFAULT_CALENDAR: &'static str = "chinese";

    /// Create an engine with an empty registry.
    pub fn new() -> Self {
        Self {
            registry: RwLock::new(IndexMap::new()),
        }
    }

    /// Return the calendar registered under `calendar_id`, building it first
    /// when the id names a built-in calendar not yet requested.
    ///
    /// Fails with [`CalendarError::UnknownCalendar`] for an unregistered,
    /// non-built-in id and with [`CalendarError::UnsupportedCalendar`] when a
    /// recognized built-in name cannot be supplied by the data source.
    pub fn get_calendar(&self, calendar_id: &str) -> Result<Arc<TradingCalendar>, CalendarError> {
        {
            let r = self.registry.read().unwrap();
            if let Some(calendar) = r.get(calendar_id) {
                return Ok(calendar.clone());
            }
        }
        if !named::is_builtin(calendar_id) {
            return Err(CalendarError::UnknownCalendar(calendar_id.to_string()));
        }
        let mut w = self.registry.write().unwrap();
        // double-checked under the write lock: one build per id
        if let Some(calendar) = w.get(calendar_id) {
            return Ok(calendar.clone());
        }
        let dates = named::get_builtin_dates(calendar_id)?;
        let calendar = Arc::new(TradingCalendar::try_new(calendar_id, dates)?);
        w.insert(calendar_id.to_string(), calendar.clone());
        Ok(calendar)
    }

    /// Build a calendar from `dates` and register it under `calendar_id`.
    ///
    /// Registration is all-or-nothing: the calendar is validated and built
    /// before the registry is touched, and
    /// [`CalendarError::DuplicateCalendar`] is returned without overwriting
    /// when the id already exists.
    pub fn make_calendar(
        &self,
        calendar_id: &str,
        dates: Vec<u32>,
    ) -> Result<Arc<TradingCalendar>, CalendarError> {
        let calendar = Arc::new(TradingCalendar::try_new(calendar_id, dates)?);
        let mut w = self.registry.write().unwrap();
        if w.contains_key(calendar_id) {
            return Err(CalendarError::DuplicateCalendar(calendar_id.to_string()));
        }
        w.insert(calendar_id.to_string(), calendar.clone());
        Ok(calendar)
    }

    /// Resolve `calendar_id` and look up `date` on it exactly.
    ///
    /// Propagates [`CalendarError::NotATradingDay`] when `date` is valid but
    /// absent; a lookup never rounds to a nearby trading day.
    pub fn get_trading_date(
        &self,
        date: u32,
        calendar_id: &str,
    ) -> Result<TradingDate, CalendarError> {
        codec::to_naive(date)?;
        let calendar = self.get_calendar(calendar_id)?;
        TradingDate::from_date(calendar, date)
    }

    /// All trading dates in `[start, end]` inclusive as a lazy range.
    ///
    /// `start` and `end` must be valid dates but need not be trading days
    /// themselves; only the bounding positions matter. The range may be
    /// empty, which is not an error.
    pub fn get_trading_dates(
        &self,
        start: u32,
        end: u32,
        calendar_id: &str,
    ) -> Result<DateRange, CalendarError> {
        self.daterange(start, end, 1, calendar_id)
    }

    /// Same contract as [`get_trading_dates`](Self::get_trading_dates) with a
    /// stride.
    ///
    /// Fails with [`CalendarError::InvalidStep`] for a zero `step`; a
    /// negative step walks the window from its end backwards.
    pub fn daterange(
        &self,
        start: u32,
        end: u32,
        step: i32,
        calendar_id: &str,
    ) -> Result<DateRange, CalendarError> {
        if step == 0 {
            return Err(CalendarError::InvalidStep);
        }
        codec::to_naive(start)?;
        codec::to_naive(end)?;
        let calendar = self.get_calendar(calendar_id)?;
        let (lo, hi) = calendar.position_window(start, end);
        Ok(DateRange::new(calendar, lo, hi, step))
    }

    /// Whether an id is currently registered (built-ins count only once
    /// built).
    pub fn contains_key(&self, calendar_id: &str) -> bool {
        let r = self.registry.read().unwrap();
        r.contains_key(calendar_id)
    }

    /// Registered ids in registration order.
    pub fn keys(&self) -> Vec<String> {
        let r = self.registry.read().unwrap();
        r.keys().cloned().collect()
    }
}
