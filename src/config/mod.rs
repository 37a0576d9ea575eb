//! Configuration loading and management for the Attendance Engine.
//!
//! This module loads pay rules and the report period from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use attendance_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/attendance").unwrap();
//! println!("Report month: {}", config.period().month);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{AttendanceConfig, PayRules, ReportPeriod};
