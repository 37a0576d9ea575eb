//! Calculation logic for the attendance engine.
//!
//! This module turns raw punch rows into reconciled work sessions and pays
//! them: token extraction and normalization, day detection, punch
//! reconciliation with overnight handling, session deduplication, session
//! pay, and report assembly.

mod analysis;
mod day_detection;
mod dedup;
mod normalize;
mod reconcile;
mod report;
mod session_pay;

pub use analysis::{analyze_attendance, summarize_employee};
pub use day_detection::{DayType, get_day_type};
pub use dedup::{DeduplicatedSessions, deduplicate_sessions};
pub use normalize::{
    EmployeePunches, extract_punch_tokens, group_by_employee, normalize_rows, parse_punch,
};
pub use reconcile::{
    EARLY_CHECKOUT_HOUR, EARLY_CHECKOUT_MINUTE, Reconciliation, is_early_checkout,
    reconcile_punches,
};
pub use report::{assemble_report, filter_by_name, price_summary};
pub use session_pay::{
    SessionPayResult, calculate_session_pay, price_session, validate_duration,
    validate_hourly_rate,
};
