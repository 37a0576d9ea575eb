//! Report assembly.
//!
//! Packages employee summaries for presentation and prices them on request.

use rust_decimal::Decimal;

use crate::config::PayRules;
use crate::error::{EngineError, EngineResult};
use crate::models::{EmployeePayReport, EmployeeSummary};

use super::session_pay::price_session;

/// Drops employees with no reconciled hours, keeping the input order.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::assemble_report;
/// use attendance_engine::models::EmployeeSummary;
/// use rust_decimal::Decimal;
///
/// let idle = EmployeeSummary {
///     employee: "Idle".to_string(),
///     total_hours: Decimal::ZERO,
///     sessions: vec![],
///     anomalies: vec![],
///     malformed_punches: vec![],
/// };
/// assert!(assemble_report(vec![idle]).is_empty());
/// ```
pub fn assemble_report(summaries: Vec<EmployeeSummary>) -> Vec<EmployeeSummary> {
    summaries
        .into_iter()
        .filter(EmployeeSummary::has_hours)
        .collect()
}

/// Keeps summaries whose employee name contains `query`, ignoring case.
///
/// A blank query keeps everything.
pub fn filter_by_name(summaries: Vec<EmployeeSummary>, query: &str) -> Vec<EmployeeSummary> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return summaries;
    }
    summaries
        .into_iter()
        .filter(|s| s.employee.to_lowercase().contains(&needle))
        .collect()
}

/// Prices every session of a summary at one hourly rate.
///
/// The rate is expected to be validated by the caller.
pub fn price_summary(
    summary: &EmployeeSummary,
    hourly_rate: Decimal,
    rules: &PayRules,
) -> EngineResult<EmployeePayReport> {
    let mut lines = Vec::with_capacity(summary.sessions.len());
    let mut audit_steps = Vec::with_capacity(summary.sessions.len());

    for (step, session) in (1u32..).zip(&summary.sessions) {
        let priced = price_session(session, hourly_rate, rules, step)?;
        lines.push(priced.pay_line);
        audit_steps.push(priced.audit_step);
    }

    let total_pay = lines
        .iter()
        .try_fold(Decimal::ZERO, |total, line| total.checked_add(line.amount))
        .ok_or(EngineError::PayOverflow {
            hours: summary.total_hours,
            rate: hourly_rate,
        })?;

    Ok(EmployeePayReport {
        employee: summary.employee.clone(),
        hourly_rate,
        total_hours: summary.total_hours,
        lines,
        total_pay,
        audit_steps,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::summarize_employee;
    use crate::models::PunchDay;
    use chrono::NaiveDate;
    use std::str::FromStr;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn summary(employee: &str, days: Vec<(&str, Vec<&str>)>) -> EmployeeSummary {
        let days: Vec<PunchDay> = days
            .into_iter()
            .map(|(date, punches)| PunchDay::new(employee, make_date(date), punches))
            .collect();
        summarize_employee(employee, &days)
    }

    // ==========================================================================
    // RA-001: zero-hour employees excluded
    // ==========================================================================
    #[test]
    fn test_ra_001_zero_hour_employees_excluded() {
        let report = assemble_report(vec![
            summary("Worker", vec![("2025-07-01", vec!["08:00", "16:00"])]),
            summary("Lonely", vec![("2025-07-01", vec!["08:00"])]),
            summary("Blip", vec![("2025-07-01", vec!["08:00", "08:00"])]),
        ]);

        assert_eq!(report.len(), 1);
        assert_eq!(report[0].employee, "Worker");
    }

    // ==========================================================================
    // RA-002: name filter is case-insensitive substring
    // ==========================================================================
    #[test]
    fn test_ra_002_name_filter() {
        let summaries = vec![
            summary("Mariam Haddad", vec![("2025-07-01", vec!["08:00", "16:00"])]),
            summary("Karim Saleh", vec![("2025-07-01", vec!["08:00", "16:00"])]),
        ];

        let hits = filter_by_name(summaries.clone(), "  haDD ");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].employee, "Mariam Haddad");

        assert_eq!(filter_by_name(summaries.clone(), "").len(), 2);
        assert!(filter_by_name(summaries, "zzz").is_empty());
    }

    // ==========================================================================
    // RA-003: priced summary totals the lines
    // ==========================================================================
    #[test]
    fn test_ra_003_price_summary() {
        // 2025-07-04 is a Friday, 2025-07-05 a Saturday
        let s = summary(
            "Worker",
            vec![
                ("2025-07-04", vec!["08:00", "17:00"]),
                ("2025-07-05", vec!["08:00", "11:30"]),
            ],
        );
        let report = price_summary(&s, dec("10"), &PayRules::default()).unwrap();

        assert_eq!(report.lines.len(), 2);
        assert_eq!(report.lines[0].amount, dec("90.00"));
        assert_eq!(report.lines[1].amount, dec("45.00"));
        assert_eq!(report.total_pay, dec("135.00"));
        assert_eq!(report.total_hours, dec("12.5"));
        assert_eq!(report.audit_steps.len(), 2);
        assert_eq!(report.audit_steps[1].step_number, 2);
    }

    #[test]
    fn test_price_summary_zero_rate() {
        let s = summary("Worker", vec![("2025-07-04", vec!["08:00", "17:00"])]);
        let report = price_summary(&s, Decimal::ZERO, &PayRules::default()).unwrap();
        assert_eq!(report.total_pay, Decimal::ZERO);
    }

    #[test]
    fn test_price_summary_overflow_is_an_error() {
        let s = summary("Worker", vec![("2025-07-04", vec!["08:00", "17:00"])]);
        assert!(matches!(
            price_summary(&s, Decimal::MAX, &PayRules::default()),
            Err(EngineError::PayOverflow { .. })
        ));
    }
}
