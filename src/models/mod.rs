//! Core data models for the Attendance Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod anomaly;
mod employee_summary;
mod pay_report;
mod punch_day;
mod work_session;

pub use anomaly::{Anomaly, AnomalyKind, MalformedPunch};
pub use employee_summary::EmployeeSummary;
pub use pay_report::{
    AnalysisResult, AuditStep, EmployeePayReport, EmployeeReport, SessionPayLine,
};
pub use punch_day::{PunchDay, RawPunchRow};
pub use work_session::{WorkSession, minutes_to_hours};
