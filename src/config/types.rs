//! Configuration types for attendance analysis.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::DayType;

/// Pay rule parameters applied by the session pay calculation.
///
/// The defaults are the business rules: a 9 hour weekday, a 7 hour Saturday,
/// and both days paid a 9 hour base.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::DayType;
/// use attendance_engine::config::PayRules;
/// use rust_decimal::Decimal;
///
/// let rules = PayRules::default();
/// assert_eq!(rules.base_hours(DayType::Saturday), Decimal::new(7, 0));
/// assert_eq!(rules.base_hours(DayType::Sunday), Decimal::new(9, 0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayRules {
    /// Base hours for every day other than Saturday.
    pub weekday_base_hours: Decimal,
    /// Base hours for Saturday.
    pub saturday_base_hours: Decimal,
    /// Hours of hourly rate paid as the base on any day.
    pub base_pay_hours: Decimal,
    /// Rate used when a caller does not supply one for an employee.
    #[serde(default)]
    pub default_hourly_rate: Option<Decimal>,
}

impl Default for PayRules {
    fn default() -> Self {
        Self {
            weekday_base_hours: Decimal::new(9, 0),
            saturday_base_hours: Decimal::new(7, 0),
            base_pay_hours: Decimal::new(9, 0),
            default_hourly_rate: None,
        }
    }
}

impl PayRules {
    /// Returns the base hours threshold for a day type.
    pub fn base_hours(&self, day_type: DayType) -> Decimal {
        match day_type {
            DayType::Saturday => self.saturday_base_hours,
            DayType::Weekday | DayType::Sunday => self.weekday_base_hours,
        }
    }

    /// Returns the base pay for a day at the given hourly rate, or `None`
    /// when it overflows.
    pub fn base_pay(&self, hourly_rate: Decimal) -> Option<Decimal> {
        self.base_pay_hours.checked_mul(hourly_rate)
    }
}

/// The year/month context that day-of-month punch rows belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportPeriod {
    /// Calendar year.
    pub year: i32,
    /// Calendar month, 1 through 12.
    pub month: u32,
}

impl ReportPeriod {
    /// Returns the date for a day of this period, if it exists.
    ///
    /// ```
    /// use attendance_engine::config::ReportPeriod;
    ///
    /// let period = ReportPeriod { year: 2025, month: 2 };
    /// assert!(period.date(28).is_some());
    /// assert!(period.date(30).is_none());
    /// ```
    pub fn date(&self, day: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, day)
    }
}

impl Default for ReportPeriod {
    fn default() -> Self {
        Self {
            year: 2025,
            month: 7,
        }
    }
}

/// The complete attendance configuration loaded from YAML files.
#[derive(Debug, Clone, Default)]
pub struct AttendanceConfig {
    pay_rules: PayRules,
    period: ReportPeriod,
}

impl AttendanceConfig {
    /// Creates a new AttendanceConfig from its component parts.
    pub fn new(pay_rules: PayRules, period: ReportPeriod) -> Self {
        Self { pay_rules, period }
    }

    /// Returns the pay rules.
    pub fn pay_rules(&self) -> &PayRules {
        &self.pay_rules
    }

    /// Returns the default report period.
    pub fn period(&self) -> ReportPeriod {
        self.period
    }
}
