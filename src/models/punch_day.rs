//! Punch day model.
//!
//! A [`PunchDay`] holds the punches one employee recorded on one calendar day,
//! in the order the time clock reported them.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One raw row handed over by the extraction collaborator.
///
/// The day is a day-of-month; the year and month come from the report
/// period the rows belong to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawPunchRow {
    /// The employee name as printed in the source.
    pub employee: String,
    /// Day of month, 1 through 31.
    pub day: u32,
    /// The raw cell text holding the punch times.
    pub raw_text: String,
}

/// The punches of one employee on one day.
///
/// Ordering of `punches` within the day is trusted. Tokens are kept as the
/// `H:MM`/`HH:MM` strings extracted from the source and parsed on use, so a
/// token that is not a valid time of day survives normalization and is
/// dropped by the reconciler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PunchDay {
    /// The employee the punches belong to.
    pub employee: String,
    /// The calendar day of the punches.
    pub date: NaiveDate,
    /// Punch tokens in clock order.
    pub punches: Vec<String>,
    /// The source text the tokens were extracted from.
    #[serde(default)]
    pub raw_text: String,
}

impl PunchDay {
    /// Creates a punch day from already-extracted tokens.
    ///
    /// ```
    /// use attendance_engine::models::PunchDay;
    /// use chrono::NaiveDate;
    ///
    /// let day = PunchDay::new("Sara", NaiveDate::from_ymd_opt(2025, 7, 1).unwrap(), ["08:00", "17:00"]);
    /// assert_eq!(day.punches.len(), 2);
    /// assert_eq!(day.raw_text, "08:00 17:00");
    /// ```
    pub fn new<I, S>(employee: impl Into<String>, date: NaiveDate, punches: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let punches: Vec<String> = punches.into_iter().map(Into::into).collect();
        let raw_text = punches.join(" ");
        Self {
            employee: employee.into(),
            date,
            punches,
            raw_text,
        }
    }

    /// Returns true when no punch was recorded.
    pub fn is_empty(&self) -> bool {
        self.punches.is_empty()
    }
}
