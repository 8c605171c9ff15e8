//! Cross-module scenarios exercising the engine, calendars, dates and views
//! together.

use proptest::prelude::*;

use crate::calendars::CalendarEngine;
use crate::errors::CalendarError;

#[test]
fn test_documented_example() {
    let engine = CalendarEngine::new();
    let date = engine
        .get_trading_date(20250116, CalendarEngine::DEFAULT_CALENDAR)
        .unwrap();
    assert_eq!(date.value(), 20250116);
    assert_eq!(date.shift(-20).unwrap().value(), 20241218);
    assert_eq!(date.shift(100).unwrap().value(), 20250617);
}

#[test]
fn test_chinese_coverage_window() {
    let engine = CalendarEngine::new();
    let cal = engine.get_calendar("chinese").unwrap();
    assert_eq!(cal.bounds(), (20040102, 20251231));
    // no extrapolation beyond the oracle's window
    assert!(matches!(
        engine.get_trading_date(20260105, "chinese"),
        Err(CalendarError::NotATradingDay { .. })
    ));
}

#[test]
fn test_user_calendar_scenario() {
    let engine = CalendarEngine::new();
    engine
        .make_calendar("user-defined", vec![20250101, 20250115, 20250201])
        .unwrap();
    let values: Vec<u32> = engine
        .get_trading_dates(20250101, 20250131, "user-defined")
        .unwrap()
        .iter()
        .map(|d| d.value())
        .collect();
    assert_eq!(values, vec![20250101, 20250115]);
}

#[test]
fn test_month_structure_around_spring_festival() {
    let engine = CalendarEngine::new();
    let date = engine.get_trading_date(20250116, "chinese").unwrap();

    let month = date.month();
    assert_eq!(month.start().value(), 20250102); // 1 January is a holiday
    assert_eq!(month.end().value(), 20250127); // 28-31 January are holidays
    assert_eq!(month.len(), 19); // includes Sunday 26 January, worked
    assert!(month.contains(20250126));

    let year = date.year();
    assert_eq!(year.start().value(), 20250102);
    assert_eq!(year.end().value(), 20251231);
    assert_eq!(year.len(), 248);
}

#[test]
fn test_view_brackets_every_date_of_a_year() {
    let engine = CalendarEngine::new();
    let anchor = engine.get_trading_date(20250116, "chinese").unwrap();
    for date in &anchor.year() {
        let month = date.month();
        assert!(month.start() <= date && date <= month.end());
        let year = date.year();
        assert!(year.start() <= date && date <= year.end());
    }
}

#[test]
fn test_week_number() {
    let engine = CalendarEngine::new();
    let date = engine.get_trading_date(20250116, "chinese").unwrap();
    assert_eq!(date.week_number(), 3);
}

#[test]
fn test_range_is_subsequence_of_calendar() {
    let engine = CalendarEngine::new();
    let cal = engine.get_calendar("chinese").unwrap();
    let values: Vec<u32> = engine
        .get_trading_dates(20241201, 20250131, "chinese")
        .unwrap()
        .iter()
        .map(|d| d.value())
        .collect();
    let expected: Vec<u32> = cal
        .dates()
        .iter()
        .copied()
        .filter(|d| (20241201..=20250131).contains(d))
        .collect();
    assert_eq!(values, expected);
}

fn date_strategy() -> impl Strategy<Value = u32> {
    // day capped at 28 keeps every combination a real date
    (2000u32..2100, 1u32..13, 1u32..29).prop_map(|(y, m, d)| y * 10_000 + m * 100 + d)
}

proptest! {
    #[test]
    fn test_make_calendar_normalizes(dates in proptest::collection::vec(date_strategy(), 1..50)) {
        let engine = CalendarEngine::new();
        let cal = engine.make_calendar("prop", dates).unwrap();
        prop_assert!(cal.dates().windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_shift_round_trips(
        dates in proptest::collection::vec(date_strategy(), 1..50),
        seed in 0usize..1000,
    ) {
        let engine = CalendarEngine::new();
        let cal = engine.make_calendar("prop", dates).unwrap();
        let position = seed % cal.len();
        let date = engine.get_trading_date(cal.dates()[position], "prop").unwrap();
        let n = (cal.len() - 1 - position) as i32;
        prop_assert_eq!(date.shift(n).unwrap().shift(-n).unwrap(), date);
    }

    #[test]
    fn test_range_matches_filtered_dates(
        dates in proptest::collection::vec(date_strategy(), 1..50),
        a in date_strategy(),
        b in date_strategy(),
    ) {
        let (start, end) = (a.min(b), a.max(b));
        let engine = CalendarEngine::new();
        let cal = engine.make_calendar("prop", dates).unwrap();
        let values: Vec<u32> = engine
            .get_trading_dates(start, end, "prop")
            .unwrap()
            .iter()
            .map(|d| d.value())
            .collect();
        let expected: Vec<u32> = cal
            .dates()
            .iter()
            .copied()
            .filter(|d| (start..=end).contains(d))
            .collect();
        prop_assert_eq!(&values, &expected);
        prop_assert_eq!(values.is_empty(), expected.is_empty());
    }
}
