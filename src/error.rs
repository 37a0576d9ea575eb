//! Error types for the Attendance Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! Punch ambiguity is never an error: unmatched punches are reported as
//! anomalies and malformed tokens are dropped. Errors here cover configuration
//! and boundary validation only.

use rust_decimal::Decimal;
use thiserror::Error;

/// The main error type for the Attendance Engine.
///
/// # Example
///
/// ```
/// use attendance_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/pay_rules.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/pay_rules.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A configuration value was parsed but is out of range.
    #[error("Invalid configuration field '{field}': {message}")]
    InvalidConfig {
        /// The offending field.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// A year/month/day combination does not form a calendar date.
    #[error("Invalid date: {year}-{month:02}-{day:02}")]
    InvalidDate {
        /// The year of the period.
        year: i32,
        /// The month of the period.
        month: u32,
        /// The day of month.
        day: u32,
    },

    /// An hourly rate was negative.
    #[error("Invalid hourly rate for '{subject}': {rate}")]
    InvalidRate {
        /// What the rate was supplied for (an employee name or "session").
        subject: String,
        /// The rejected rate.
        rate: Decimal,
    },

    /// A session duration was negative.
    #[error("Invalid session duration: {hours} hours")]
    InvalidDuration {
        /// The rejected duration in hours.
        hours: Decimal,
    },

    /// Pay for a session does not fit in a Decimal.
    #[error("Pay overflow: {hours} hours at rate {rate}")]
    PayOverflow {
        /// The session duration in hours.
        hours: Decimal,
        /// The hourly rate.
        rate: Decimal,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
