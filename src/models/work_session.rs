//! Work session model.
//!
//! This module defines [`WorkSession`], a reconciled check-in/check-out
//! interval, and the overnight-aware duration rules used to build it.

use chrono::{Datelike, NaiveDate, NaiveTime, Weekday};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

const MINUTES_PER_DAY: i64 = 24 * 60;

/// Serializes times of day as `HH:MM`, the way punches are printed.
pub(crate) mod hhmm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%H:%M";

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&time.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let s = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(&s, FORMAT).map_err(serde::de::Error::custom)
    }
}

/// A reconciled work interval.
///
/// `end` may be a clock time on the following calendar day; the duration
/// always accounts for that, so it is never negative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkSession {
    /// The day the session started on.
    pub date: NaiveDate,
    /// Check-in time of day.
    #[serde(with = "hhmm")]
    pub start: NaiveTime,
    /// Check-out time of day.
    #[serde(with = "hhmm")]
    pub end: NaiveTime,
    /// Whole minutes worked.
    pub duration_minutes: i64,
    /// Hours worked (`duration_minutes / 60`, to 2 decimal places).
    pub duration_hours: Decimal,
}

impl WorkSession {
    /// Builds a session from two punches of the same day.
    ///
    /// If `end` is earlier than `start` the shift crossed midnight and 24 hours
    /// are added. Equal punches give a zero-length session.
    ///
    /// # Examples
    ///
    /// ```
    /// use attendance_engine::models::WorkSession;
    /// use chrono::{NaiveDate, NaiveTime};
    /// use rust_decimal::Decimal;
    ///
    /// let session = WorkSession::same_day(
    ///     NaiveDate::from_ymd_opt(2025, 7, 1).unwrap(),
    ///     NaiveTime::from_hms_opt(23, 30, 0).unwrap(),
    ///     NaiveTime::from_hms_opt(0, 15, 0).unwrap(),
    /// );
    /// assert_eq!(session.duration_minutes, 45);
    /// assert_eq!(session.duration_hours, Decimal::new(75, 2));
    /// ```
    pub fn same_day(date: NaiveDate, start: NaiveTime, end: NaiveTime) -> Self {
        let mut minutes = (end - start).num_minutes();
        if end < start {
            minutes += MINUTES_PER_DAY;
        }
        Self::with_minutes(date, start, end, minutes)
    }

    /// Builds a session whose checkout was punched on the following day.
    ///
    /// The checkout is always strictly after the check-in, so equal punches
    /// give a full 24 hours.
    pub fn across_midnight(date: NaiveDate, start: NaiveTime, end: NaiveTime) -> Self {
        let mut minutes = (end - start).num_minutes();
        if end <= start {
            minutes += MINUTES_PER_DAY;
        }
        Self::with_minutes(date, start, end, minutes)
    }

    fn with_minutes(date: NaiveDate, start: NaiveTime, end: NaiveTime, minutes: i64) -> Self {
        Self {
            date,
            start,
            end,
            duration_minutes: minutes,
            duration_hours: minutes_to_hours(minutes),
        }
    }

    /// Returns true when the checkout falls on the next calendar day.
    pub fn crosses_midnight(&self) -> bool {
        self.end <= self.start && self.duration_minutes > 0
    }

    /// Returns the day of the week the session started on.
    pub fn day_of_week(&self) -> Weekday {
        self.date.weekday()
    }

    /// The identity used for deduplication.
    pub fn key(&self) -> (NaiveDate, NaiveTime, NaiveTime) {
        (self.date, self.start, self.end)
    }
}

/// Converts whole minutes to hours, rounded to 2 decimal places.
///
/// Minutes stay the exact figure; sum minutes before converting.
pub fn minutes_to_hours(minutes: i64) -> Decimal {
    (Decimal::new(minutes, 0) / Decimal::new(60, 0)).round_dp(2)
}
