//! Anomaly models.
//!
//! Anomalies are punches the reconciler could not place into a session. They
//! are data, not errors: reconciliation always completes and hands them back
//! for a human to review.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Why a punch was reported instead of paired.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnomalyKind {
    /// The first punch of the data set is an early-morning checkout of a shift
    /// that began on a day outside the data.
    PriorShiftCheckout,
    /// A check-in with no checkout in its own day or the next morning.
    MissingCheckout,
}

/// A punch that could not be paired into a session.
///
/// # Example
///
/// ```
/// use attendance_engine::models::Anomaly;
/// use chrono::NaiveDate;
///
/// let anomaly = Anomaly::missing_checkout(NaiveDate::from_ymd_opt(2025, 7, 2).unwrap(), "08:01");
/// assert_eq!(anomaly.message, "2025-07-02 check-in at 08:01 has no matching checkout");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Anomaly {
    /// The day the punch was recorded on.
    pub date: NaiveDate,
    /// The punch token as recorded.
    pub punch: String,
    /// The reason the punch was reported.
    pub kind: AnomalyKind,
    /// Human-readable note for reviewers.
    pub message: String,
}

impl Anomaly {
    /// An early punch on the first recorded day, treated as the tail of a
    /// shift that started before the data begins.
    pub fn prior_shift_checkout(date: NaiveDate, punch: impl Into<String>) -> Self {
        let punch = punch.into();
        let message = format!(
            "{} checkout at {} is likely for previous day not included in this file.",
            date.format("%Y-%m-%d"),
            punch
        );
        Self {
            date,
            punch,
            kind: AnomalyKind::PriorShiftCheckout,
            message,
        }
    }

    /// A check-in that never found its checkout.
    pub fn missing_checkout(date: NaiveDate, punch: impl Into<String>) -> Self {
        let punch = punch.into();
        let message = format!(
            "{} check-in at {} has no matching checkout",
            date.format("%Y-%m-%d"),
            punch
        );
        Self {
            date,
            punch,
            kind: AnomalyKind::MissingCheckout,
            message,
        }
    }
}

impl std::fmt::Display for Anomaly {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

/// A punch token that is not a valid time of day.
///
/// Malformed tokens are dropped from pairing and never become anomalies;
/// they are kept here so the drop leaves an audit trail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MalformedPunch {
    /// The day the token was recorded on.
    pub date: NaiveDate,
    /// The token that failed to parse.
    pub token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_prior_shift_checkout_message() {
        let anomaly = Anomaly::prior_shift_checkout(make_date("2025-07-01"), "04:00");
        assert_eq!(anomaly.kind, AnomalyKind::PriorShiftCheckout);
        assert_eq!(
            anomaly.to_string(),
            "2025-07-01 checkout at 04:00 is likely for previous day not included in this file."
        );
    }

    #[test]
    fn test_missing_checkout_message() {
        let anomaly = Anomaly::missing_checkout(make_date("2025-07-09"), "13:00");
        assert_eq!(anomaly.kind, AnomalyKind::MissingCheckout);
        assert_eq!(anomaly.punch, "13:00");
        assert_eq!(
            anomaly.to_string(),
            "2025-07-09 check-in at 13:00 has no matching checkout"
        );
    }

    #[test]
    fn test_kind_serializes_snake_case() {
        let anomaly = Anomaly::missing_checkout(make_date("2025-07-09"), "13:00");
        let json = serde_json::to_value(&anomaly).unwrap();
        assert_eq!(json["kind"], "missing_checkout");
    }
}
