//! Employee summary model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{Anomaly, MalformedPunch, WorkSession};

/// Reconciled attendance for one employee.
///
/// `total_hours` is always derived from `sessions`, which are unique by
/// date, start and end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeSummary {
    /// The employee name.
    pub employee: String,
    /// Sum of the session durations.
    pub total_hours: Decimal,
    /// Sessions in the order they were reconciled.
    pub sessions: Vec<WorkSession>,
    /// Punches that could not be paired, in the order they were found.
    pub anomalies: Vec<Anomaly>,
    /// Tokens dropped because they are not valid times of day.
    #[serde(default)]
    pub malformed_punches: Vec<MalformedPunch>,
}

impl EmployeeSummary {
    /// Returns the anomaly notes as plain strings.
    pub fn anomaly_notes(&self) -> Vec<String> {
        self.anomalies.iter().map(ToString::to_string).collect()
    }

    /// Returns true when at least one session was reconciled.
    pub fn has_hours(&self) -> bool {
        self.total_hours > Decimal::ZERO
    }
}
