//! Day detection logic.
//!
//! This module determines the day type (weekday, Saturday, Sunday) of a
//! session date. Saturday has its own base hours; Sunday is paid like any
//! other day but is kept distinct so reports can show it.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// Represents the type of day for pay calculation.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::DayType;
///
/// let day_type = DayType::Saturday;
/// assert_eq!(format!("{}", day_type), "Saturday");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayType {
    /// Monday through Friday.
    Weekday,
    /// Saturday, which has shorter base hours.
    Saturday,
    /// Sunday, paid on the weekday rule.
    Sunday,
}

impl DayType {
    /// Returns the day type for a day of the week.
    pub fn from_weekday(weekday: Weekday) -> Self {
        match weekday {
            Weekday::Sat => DayType::Saturday,
            Weekday::Sun => DayType::Sunday,
            _ => DayType::Weekday,
        }
    }
}

impl std::fmt::Display for DayType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DayType::Weekday => write!(f, "Weekday"),
            DayType::Saturday => write!(f, "Saturday"),
            DayType::Sunday => write!(f, "Sunday"),
        }
    }
}

/// Determines the day type for a given date.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::{get_day_type, DayType};
/// use chrono::NaiveDate;
///
/// // 2025-07-05 is a Saturday
/// let saturday = NaiveDate::from_ymd_opt(2025, 7, 5).unwrap();
/// assert_eq!(get_day_type(saturday), DayType::Saturday);
///
/// // 2025-07-07 is a Monday
/// let monday = NaiveDate::from_ymd_opt(2025, 7, 7).unwrap();
/// assert_eq!(get_day_type(monday), DayType::Weekday);
/// ```
pub fn get_day_type(date: NaiveDate) -> DayType {
    DayType::from_weekday(date.weekday())
}
