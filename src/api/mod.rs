//! HTTP API module for the attendance engine.
//!
//! This module provides the REST API endpoints for analyzing punch reports
//! and pricing individual sessions.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{AnalysisRequest, PunchRowRequest, SessionPayRequest};
pub use response::{ApiError, PayQuote};
pub use state::AppState;
