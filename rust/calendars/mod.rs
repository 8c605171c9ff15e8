//! Build trading calendars and perform trading-day date manipulation.
//!
//! ### Basic usage
//!
//! The [`CalendarEngine`] is the entry point: it maps calendar identifiers to
//! immutable [`TradingCalendar`] objects, building the built-in ones lazily
//! from static holiday data and accepting user-registered date sets.
//!
//! ```rust
//! # use tradingdate::calendars::CalendarEngine;
//! let engine = CalendarEngine::new();
//! let cal = engine.get_calendar("chinese").unwrap();
//! assert_eq!(cal.bounds(), (20040102, 20251231));
//! ```
//!
//! A [`TradingDate`] is a date bound to its position on one calendar. Its
//! arithmetic counts trading days, never calendar days.
//!
//! ```rust
//! # use tradingdate::calendars::CalendarEngine;
//! # let engine = CalendarEngine::new();
//! let date = engine.get_trading_date(20250116, "chinese").unwrap();
//! assert_eq!(date.shift(-20).unwrap().value(), 20241218);
//! assert_eq!(date.shift(100).unwrap().value(), 20250617);
//! ```
//!
//! ### Sub-range views
//!
//! Year and month structure is exposed as index-range views sharing the
//! backing calendar's storage.
//!
//! ```rust
//! # use tradingdate::calendars::CalendarEngine;
//! # let engine = CalendarEngine::new();
//! # let date = engine.get_trading_date(20250116, "chinese").unwrap();
//! let month = date.month();
//! assert_eq!(month.start().value(), 20250102);
//! assert_eq!(month.end().value(), 20250127);
//! ```

mod calendar;
pub mod codec;
mod date;
mod engine;
pub(crate) mod named;
mod serde;
mod views;

pub use crate::calendars::{
    calendar::TradingCalendar,
    date::TradingDate,
    engine::CalendarEngine,
    views::{DateRange, MonthCalendar, TradingDateIter, YearCalendar},
};
