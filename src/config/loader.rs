//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading attendance
//! configuration from YAML files.

use rust_decimal::Decimal;
use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{AttendanceConfig, PayRules, ReportPeriod};

/// Loads and provides access to attendance configuration.
///
/// # Directory Structure
///
/// ```text
/// config/attendance/
/// ├── pay_rules.yaml   # Base hours and default hourly rate
/// └── period.yaml      # Year and month of the punch report
/// ```
///
/// # Example
///
/// ```no_run
/// use attendance_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/attendance").unwrap();
/// println!("Saturday base hours: {}", loader.pay_rules().saturday_base_hours);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: AttendanceConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// Returns an error if either file is missing, contains invalid YAML,
    /// or holds out-of-range values.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let pay_rules = Self::load_yaml::<PayRules>(&path.join("pay_rules.yaml"))?;
        Self::validate_pay_rules(&pay_rules)?;

        let period = Self::load_yaml::<ReportPeriod>(&path.join("period.yaml"))?;
        Self::validate_period(&period)?;

        Ok(Self {
            config: AttendanceConfig::new(pay_rules, period),
        })
    }

    /// Wraps an already-built configuration.
    pub fn from_config(config: AttendanceConfig) -> Self {
        Self { config }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    fn validate_pay_rules(rules: &PayRules) -> EngineResult<()> {
        let positive = [
            ("weekday_base_hours", rules.weekday_base_hours),
            ("saturday_base_hours", rules.saturday_base_hours),
            ("base_pay_hours", rules.base_pay_hours),
        ];
        for (field, value) in positive {
            if value <= Decimal::ZERO {
                return Err(EngineError::InvalidConfig {
                    field: field.to_string(),
                    message: format!("must be greater than zero, got {}", value),
                });
            }
        }

        match rules.default_hourly_rate {
            Some(rate) if rate < Decimal::ZERO => Err(EngineError::InvalidConfig {
                field: "default_hourly_rate".to_string(),
                message: format!("must not be negative, got {}", rate),
            }),
            _ => Ok(()),
        }
    }

    fn validate_period(period: &ReportPeriod) -> EngineResult<()> {
        if !(1..=12).contains(&period.month) {
            return Err(EngineError::InvalidConfig {
                field: "month".to_string(),
                message: format!("must be between 1 and 12, got {}", period.month),
            });
        }
        Ok(())
    }

    /// Returns the underlying attendance configuration.
    pub fn config(&self) -> &AttendanceConfig {
        &self.config
    }

    /// Returns the pay rules.
    pub fn pay_rules(&self) -> &PayRules {
        self.config.pay_rules()
    }

    /// Returns the default report period.
    pub fn period(&self) -> ReportPeriod {
        self.config.period()
    }
}
