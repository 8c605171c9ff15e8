use crate::calendars::TradingCalendar;
use crate::json::JSON;

impl JSON for TradingCalendar {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trading_calendar_json() {
        let cal =
            TradingCalendar::try_new("user-defined", vec![20250101, 20250115, 20250201]).unwrap();
        let js = cal.to_json().unwrap();
        let cal2 = TradingCalendar::from_json(&js).unwrap();
        assert_eq!(cal, cal2);
    }
}
