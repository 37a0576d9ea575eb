//! Attendance reconciliation and pay engine
//!
//! This crate turns time-clock punch reports into paired work sessions,
//! flags punches that cannot be paired, and prices each session under the
//! weekday and Saturday base-pay rules.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
