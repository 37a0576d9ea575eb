//! Request types for the attendance engine API.
//!
//! This module defines the JSON request structures for the `/analyze` and
//! `/session-pay` endpoints.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::ReportPeriod;
use crate::models::RawPunchRow;

/// Request body for the `/analyze` endpoint.
///
/// Carries the extracted punch rows of one monthly report together with the
/// optional pricing inputs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisRequest {
    /// The year and month the rows belong to. Falls back to the configured period.
    #[serde(default)]
    pub period: Option<ReportPeriod>,
    /// One row per employee and day.
    pub rows: Vec<PunchRowRequest>,
    /// Hourly rate per employee name.
    #[serde(default)]
    pub hourly_rates: BTreeMap<String, Decimal>,
    /// Rate for employees missing from `hourly_rates`.
    #[serde(default)]
    pub default_hourly_rate: Option<Decimal>,
    /// Case-insensitive employee name filter.
    #[serde(default)]
    pub name_filter: Option<String>,
}

/// One punch row in an analysis request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PunchRowRequest {
    /// The employee name.
    pub employee: String,
    /// Day of month.
    pub day: u32,
    /// The raw cell text holding the punch times.
    pub raw_text: String,
}

impl From<PunchRowRequest> for RawPunchRow {
    fn from(req: PunchRowRequest) -> Self {
        RawPunchRow {
            employee: req.employee,
            day: req.day,
            raw_text: req.raw_text,
        }
    }
}

/// Request body for the `/session-pay` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionPayRequest {
    /// The date the session started on.
    pub date: NaiveDate,
    /// The session length in hours.
    pub duration_hours: Decimal,
    /// The hourly rate.
    pub hourly_rate: Decimal,
}
