//! Pay report models for the Attendance Engine.
//!
//! This module contains the priced view of reconciled attendance: one
//! [`SessionPayLine`] per session, the per-employee [`EmployeePayReport`], and
//! the [`AnalysisResult`] returned for a whole punch report.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::calculation::DayType;
use crate::config::ReportPeriod;

use super::EmployeeSummary;
use super::work_session::hhmm;

/// Pay for a single reconciled session.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::DayType;
/// use attendance_engine::models::SessionPayLine;
/// use chrono::{NaiveDate, NaiveTime};
/// use rust_decimal::Decimal;
///
/// let line = SessionPayLine {
///     date: NaiveDate::from_ymd_opt(2025, 7, 5).unwrap(),
///     start: NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
///     end: NaiveTime::from_hms_opt(15, 0, 0).unwrap(),
///     day_type: DayType::Saturday,
///     hours: Decimal::new(7, 0),
///     base_hours: Decimal::new(7, 0),
///     hourly_rate: Decimal::new(10, 0),
///     amount: Decimal::new(9000, 2),
/// };
/// assert_eq!(line.amount.to_string(), "90.00");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionPayLine {
    /// The day the session started on.
    pub date: NaiveDate,
    /// Check-in time of day.
    #[serde(with = "hhmm")]
    pub start: NaiveTime,
    /// Check-out time of day.
    #[serde(with = "hhmm")]
    pub end: NaiveTime,
    /// The day type that selected the base hours.
    pub day_type: DayType,
    /// Hours worked in the session.
    pub hours: Decimal,
    /// The base hours threshold for the day type.
    pub base_hours: Decimal,
    /// The hourly rate applied.
    pub hourly_rate: Decimal,
    /// Pay for the session, rounded to cents.
    pub amount: Decimal,
}

/// A single step in the audit trace recording a pay decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// All sessions of one employee priced at one hourly rate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeePayReport {
    /// The employee name.
    pub employee: String,
    /// The hourly rate applied to every session.
    pub hourly_rate: Decimal,
    /// Total hours across the priced sessions.
    pub total_hours: Decimal,
    /// One line per session, in session order.
    pub lines: Vec<SessionPayLine>,
    /// Sum of the line amounts.
    pub total_pay: Decimal,
    /// How each line was computed.
    pub audit_steps: Vec<AuditStep>,
}

/// One employee's entry in an analysis result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeReport {
    /// Reconciled attendance.
    #[serde(flatten)]
    pub summary: EmployeeSummary,
    /// Priced sessions, present when a rate was known for the employee.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub pay: Option<EmployeePayReport>,
}

/// The complete result of analyzing one punch report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Unique identifier for this analysis.
    pub analysis_id: Uuid,
    /// When the analysis was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the analysis.
    pub engine_version: String,
    /// The year and month the punch rows belong to.
    pub period: ReportPeriod,
    /// Employees with at least one reconciled hour.
    pub employees: Vec<EmployeeReport>,
    /// The total analysis duration in microseconds.
    pub duration_us: u64,
}
