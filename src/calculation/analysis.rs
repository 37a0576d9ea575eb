//! Attendance analysis.
//!
//! Runs the reconciler and deduplicator for every employee of a punch report.

use tracing::debug;

use crate::models::{EmployeeSummary, PunchDay};

use super::dedup::deduplicate_sessions;
use super::normalize::group_by_employee;
use super::reconcile::reconcile_punches;

/// Reconciles one employee's punch days into a summary.
///
/// An employee with no days gets an empty summary, never an error.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::summarize_employee;
/// use attendance_engine::models::PunchDay;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let date = NaiveDate::from_ymd_opt(2025, 7, 1).unwrap();
/// let summary = summarize_employee("Rami", &[PunchDay::new("Rami", date, ["08:00", "17:00", "18:00"])]);
///
/// assert_eq!(summary.total_hours, Decimal::new(9, 0));
/// assert_eq!(summary.anomalies.len(), 1);
/// ```
pub fn summarize_employee(employee: &str, days: &[PunchDay]) -> EmployeeSummary {
    let reconciliation = reconcile_punches(days);
    let deduped = deduplicate_sessions(reconciliation.sessions);

    debug!(
        employee = %employee,
        days = days.len(),
        sessions = deduped.sessions.len(),
        anomalies = reconciliation.anomalies.len(),
        malformed = reconciliation.malformed.len(),
        total_minutes = deduped.total_minutes,
        "Reconciled employee"
    );

    EmployeeSummary {
        employee: employee.to_string(),
        total_hours: deduped.total_hours,
        sessions: deduped.sessions,
        anomalies: reconciliation.anomalies,
        malformed_punches: reconciliation.malformed,
    }
}

/// Reconciles every employee found in a set of punch days.
///
/// Employees are independent of each other; summaries are returned in the
/// order employees first appear in `days`. Employees with no hours are kept
/// here and dropped by [`assemble_report`](super::assemble_report).
pub fn analyze_attendance(days: Vec<PunchDay>) -> Vec<EmployeeSummary> {
    group_by_employee(days)
        .into_iter()
        .map(|group| summarize_employee(&group.employee, &group.days))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_employees_are_reconciled_independently() {
        let days = vec![
            PunchDay::new("Rami", make_date("2025-07-01"), ["22:00"]),
            PunchDay::new("Dana", make_date("2025-07-02"), ["01:00", "09:00"]),
            PunchDay::new("Rami", make_date("2025-07-02"), ["09:00", "17:00"]),
        ];
        let summaries = analyze_attendance(days);

        assert_eq!(summaries.len(), 2);
        // Dana's early punch is never borrowed by Rami's leftover
        assert_eq!(summaries[0].employee, "Rami");
        assert_eq!(summaries[0].total_hours, dec("8"));
        assert_eq!(
            summaries[0].anomaly_notes(),
            vec!["2025-07-01 check-in at 22:00 has no matching checkout".to_string()]
        );
        assert_eq!(summaries[1].employee, "Dana");
        assert_eq!(summaries[1].anomalies.len(), 2);
        assert!(summaries[1].sessions.is_empty());
    }

    #[test]
    fn test_repeated_day_is_counted_once() {
        let days = vec![
            PunchDay::new("Rami", make_date("2025-07-01"), ["08:00", "16:00"]),
            PunchDay::new("Rami", make_date("2025-07-01"), ["08:00", "16:00"]),
        ];
        let summaries = analyze_attendance(days);

        assert_eq!(summaries[0].sessions.len(), 1);
        assert_eq!(summaries[0].total_hours, dec("8"));
    }

    #[test]
    fn test_empty_employee_summary() {
        let summary = summarize_employee("Nobody", &[]);
        assert_eq!(summary.total_hours, Decimal::ZERO);
        assert!(summary.sessions.is_empty());
        assert!(summary.anomalies.is_empty());
    }

    #[test]
    fn test_malformed_tokens_reach_summary() {
        let summary = summarize_employee(
            "Rami",
            &[PunchDay::new("Rami", make_date("2025-07-01"), ["08:00", "16:00", "61:00"])],
        );
        assert_eq!(summary.malformed_punches.len(), 1);
        assert!(summary.anomalies.is_empty());
    }
}
