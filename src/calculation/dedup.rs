//! Session deduplication.
//!
//! The same interval can be reconciled twice when the source repeats a day.
//! Deduplication keeps the first occurrence of each (date, start, end) and
//! recomputes the total from what survives.

use std::collections::HashSet;

use rust_decimal::Decimal;
use tracing::debug;

use crate::models::{WorkSession, minutes_to_hours};

/// Sessions unique by (date, start, end) together with their total.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeduplicatedSessions {
    /// Surviving sessions in first-seen order.
    pub sessions: Vec<WorkSession>,
    /// Sum of the surviving session minutes.
    pub total_minutes: i64,
    /// `total_minutes` expressed in hours.
    pub total_hours: Decimal,
}

/// Removes duplicate sessions and recomputes the total.
///
/// The total is computed from whole minutes so that sessions of 20 or 40
/// minutes add up exactly.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::deduplicate_sessions;
/// use attendance_engine::models::WorkSession;
/// use chrono::{NaiveDate, NaiveTime};
/// use rust_decimal::Decimal;
///
/// let date = NaiveDate::from_ymd_opt(2025, 7, 1).unwrap();
/// let session = WorkSession::same_day(
///     date,
///     NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
///     NaiveTime::from_hms_opt(16, 0, 0).unwrap(),
/// );
///
/// let deduped = deduplicate_sessions(vec![session.clone(), session]);
/// assert_eq!(deduped.sessions.len(), 1);
/// assert_eq!(deduped.total_hours, Decimal::new(8, 0));
/// ```
pub fn deduplicate_sessions(sessions: Vec<WorkSession>) -> DeduplicatedSessions {
    let mut seen = HashSet::with_capacity(sessions.len());
    let before = sessions.len();

    let sessions: Vec<WorkSession> = sessions
        .into_iter()
        .filter(|session| seen.insert(session.key()))
        .collect();

    if sessions.len() < before {
        debug!(
            removed = before - sessions.len(),
            kept = sessions.len(),
            "Removed duplicate sessions"
        );
    }

    let total_minutes: i64 = sessions.iter().map(|s| s.duration_minutes).sum();

    DeduplicatedSessions {
        sessions,
        total_minutes,
        total_hours: minutes_to_hours(total_minutes),
    }
}
