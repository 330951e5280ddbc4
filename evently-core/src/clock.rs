//! Naive five-field timestamps.

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::codec::JsonRecord;

/// A point in time without a timezone.
///
/// `month` is 1-based (1 = January), the form shown to users.
/// Host calendar APIs that count months from 0 must go through
/// [`Clock::from_host_fields`] and [`Clock::host_month`].
///
/// No component is range checked: out-of-range values are kept as given
/// and only rejected when converted with [`Clock::to_naive_datetime`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Clock {
    year: i32,
    month: i32,
    day: i32,
    hour: i32,
    minute: i32,
}

impl Clock {
    pub fn new(year: i32, month: i32, day: i32, hour: i32, minute: i32) -> Self {
        Clock {
            year,
            month,
            day,
            hour,
            minute,
        }
    }

    /// Build a Clock from host values whose month is 0-based.
    ///
    /// Saturates at `i32::MAX`; such a month is out of range either way.
    pub fn from_host_fields(year: i32, month0: i32, day: i32, hour: i32, minute: i32) -> Self {
        Clock::new(year, month0.saturating_add(1), day, hour, minute)
    }

    pub fn from_naive_datetime(dt: &NaiveDateTime) -> Self {
        Clock::new(
            dt.year(),
            dt.month() as i32,
            dt.day() as i32,
            dt.hour() as i32,
            dt.minute() as i32,
        )
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> i32 {
        self.month
    }

    pub fn day(&self) -> i32 {
        self.day
    }

    pub fn hour(&self) -> i32 {
        self.hour
    }

    pub fn minute(&self) -> i32 {
        self.minute
    }

    /// Month counted from 0, as host calendar APIs expect.
    /// Saturates at `i32::MIN`.
    pub fn host_month(&self) -> i32 {
        self.month.saturating_sub(1)
    }

    pub fn same_day(&self, other: &Clock) -> bool {
        self.year == other.year && self.month == other.month && self.day == other.day
    }

    /// `None` if the components do not name a real date and time.
    pub fn to_naive_datetime(&self) -> Option<NaiveDateTime> {
        let date = self.to_naive_date()?;
        date.and_hms_opt(u32::try_from(self.hour).ok()?, u32::try_from(self.minute).ok()?, 0)
    }

    pub fn to_naive_date(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(
            self.year,
            u32::try_from(self.month).ok()?,
            u32::try_from(self.day).ok()?,
        )
    }

    /// "25.12.2012"
    pub(crate) fn date_label(&self) -> String {
        format!("{}.{}.{}", self.day, self.month, self.year)
    }

    /// "16h00": hour unpadded, minute padded to two digits.
    pub(crate) fn time_label(&self) -> String {
        let zero = if self.minute < 10 { "0" } else { "" };
        format!("{}h{}{}", self.hour, zero, self.minute)
    }
}

impl JsonRecord for Clock {
    const KIND: &'static str = "clock";
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use serde_json::json;

    #[test]
    fn test_default_clock_is_all_zero() {
        let clock = Clock::default();
        assert_eq!(clock, Clock::new(0, 0, 0, 0, 0));
    }

    #[test]
    fn test_record_keys_keep_declaration_order() {
        let record = Clock::new(2012, 12, 25, 16, 0).try_to_record().unwrap();
        let keys: Vec<_> = record.keys().map(String::as_str).collect();
        assert_eq!(keys, ["year", "month", "day", "hour", "minute"]);
        assert_eq!(
            serde_json::Value::Object(record),
            json!({"year": 2012, "month": 12, "day": 25, "hour": 16, "minute": 0})
        );
    }

    #[test]
    fn test_out_of_range_values_are_preserved() {
        let clock = Clock::new(-3, 13, 42, 25, 99);
        let record = serde_json::Value::Object(clock.try_to_record().unwrap());
        assert_eq!(Clock::from_record(&record).unwrap(), clock);
        assert_eq!(clock.to_naive_datetime(), None);
    }

    #[test]
    fn test_missing_key_is_parse_error() {
        let record = json!({"year": 2012, "month": 12, "day": 25, "hour": 16});
        let err = Clock::from_record(&record).unwrap_err();
        assert!(
            err.to_string().contains("minute"),
            "Error should name the missing key, got: {}",
            err
        );
    }

    #[test]
    fn test_array_record_is_parse_error() {
        let err = Clock::from_record(&json!([2012, 12, 25, 16, 0])).unwrap_err();
        assert!(err.to_string().contains("clock"), "got: {}", err);
        assert!(Clock::from_record(&json!("2012-12-25")).is_err());
    }

    #[test]
    fn test_non_integer_value_is_parse_error() {
        let record = json!({"year": "2012", "month": 12, "day": 25, "hour": 16, "minute": 0});
        assert!(Clock::from_record(&record).is_err());

        let record = json!({"year": 2012, "month": 12.5, "day": 25, "hour": 16, "minute": 0});
        assert!(Clock::from_record(&record).is_err());
    }

    #[test]
    fn test_host_month_conversion() {
        let clock = Clock::from_host_fields(2012, 0, 19, 7, 30);
        assert_eq!(clock.month(), 1);
        assert_eq!(clock.host_month(), 0);
    }

    #[test]
    fn test_host_month_saturates_at_bounds() {
        assert_eq!(Clock::from_host_fields(2012, i32::MAX, 1, 0, 0).month(), i32::MAX);
        assert_eq!(Clock::new(2012, i32::MIN, 1, 0, 0).host_month(), i32::MIN);
    }

    #[test]
    fn test_naive_datetime_conversion() {
        let clock = Clock::new(2012, 12, 25, 18, 30);
        let dt = clock.to_naive_datetime().unwrap();
        assert_eq!(dt.to_string(), "2012-12-25 18:30:00");
        assert_eq!(Clock::from_naive_datetime(&dt), clock);
    }

    #[test]
    fn test_time_label_pads_minutes_only() {
        assert_eq!(Clock::new(2012, 12, 25, 7, 5).time_label(), "7h05");
        assert_eq!(Clock::new(2012, 12, 25, 16, 30).time_label(), "16h30");
    }

    proptest! {
        #[test]
        fn clock_record_roundtrip(
            year in -1_000_000i32..=1_000_000,
            month in -1_000_000i32..=1_000_000,
            day in -1_000_000i32..=1_000_000,
            hour in -1_000_000i32..=1_000_000,
            minute in -1_000_000i32..=1_000_000,
        ) {
            let clock = Clock::new(year, month, day, hour, minute);
            let record = serde_json::Value::Object(clock.try_to_record().unwrap());
            prop_assert_eq!(Clock::from_record(&record).unwrap(), clock);
        }
    }
}
