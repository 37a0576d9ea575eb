//! HTTP request handlers for the attendance engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use chrono::{Datelike, Utc};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{
    analyze_attendance, assemble_report, calculate_session_pay, filter_by_name, get_day_type,
    normalize_rows, price_summary, validate_duration, validate_hourly_rate,
};
use crate::config::ConfigLoader;
use crate::error::{EngineError, EngineResult};
use crate::models::{AnalysisResult, EmployeeReport, RawPunchRow};

use super::request::{AnalysisRequest, SessionPayRequest};
use super::response::{ApiError, ApiErrorResponse, PayQuote};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/analyze", post(analyze_handler))
        .route("/session-pay", post(session_pay_handler))
        .with_state(state)
}

/// Handler for POST /analyze endpoint.
///
/// Reconciles a month of punch rows and returns the per-employee report.
async fn analyze_handler(
    State(state): State<AppState>,
    payload: Result<Json<AnalysisRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing analysis request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let rows = request.rows.len();
    match perform_analysis(request, state.config()) {
        Ok(result) => {
            info!(
                correlation_id = %correlation_id,
                rows,
                employees = result.employees.len(),
                duration_us = result.duration_us,
                "Analysis completed successfully"
            );
            json_response(StatusCode::OK, &result)
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Analysis failed"
            );
            error_response(err)
        }
    }
}

/// Handler for POST /session-pay endpoint.
///
/// Prices a single session of a given length.
async fn session_pay_handler(
    State(state): State<AppState>,
    payload: Result<Json<SessionPayRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing session pay request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    match quote_session(&request, state.config()) {
        Ok(quote) => {
            info!(
                correlation_id = %correlation_id,
                date = %quote.date,
                day_type = %quote.day_type,
                amount = %quote.amount,
                "Session priced"
            );
            json_response(StatusCode::OK, &quote)
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Session pay rejected"
            );
            error_response(err)
        }
    }
}

/// Runs the full analysis pipeline for one request.
fn perform_analysis(request: AnalysisRequest, config: &ConfigLoader) -> EngineResult<AnalysisResult> {
    let start_time = Instant::now();
    let rules = config.pay_rules();

    let period = request.period.unwrap_or_else(|| config.period());
    if period.date(1).is_none() {
        return Err(EngineError::InvalidDate {
            year: period.year,
            month: period.month,
            day: 1,
        });
    }

    for (employee, rate) in &request.hourly_rates {
        validate_hourly_rate(employee, *rate)?;
    }
    let default_rate = request
        .default_hourly_rate
        .or(rules.default_hourly_rate)
        .map(|rate| validate_hourly_rate("default", rate))
        .transpose()?;

    let rows: Vec<RawPunchRow> = request.rows.into_iter().map(Into::into).collect();
    let days = normalize_rows(&rows, period);

    let mut summaries = assemble_report(analyze_attendance(days));
    if let Some(query) = request.name_filter.as_deref() {
        summaries = filter_by_name(summaries, query);
    }

    let employees = summaries
        .into_iter()
        .map(|summary| -> EngineResult<EmployeeReport> {
            let pay = request
                .hourly_rates
                .get(&summary.employee)
                .copied()
                .or(default_rate)
                .map(|rate| price_summary(&summary, rate, rules))
                .transpose()?;
            Ok(EmployeeReport { summary, pay })
        })
        .collect::<EngineResult<Vec<_>>>()?;

    Ok(AnalysisResult {
        analysis_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        period,
        employees,
        duration_us: start_time.elapsed().as_micros() as u64,
    })
}

/// Validates and prices a single session.
fn quote_session(request: &SessionPayRequest, config: &ConfigLoader) -> EngineResult<PayQuote> {
    let hours = validate_duration(request.duration_hours)?;
    let hourly_rate = validate_hourly_rate("session", request.hourly_rate)?;
    let rules = config.pay_rules();
    let day_type = get_day_type(request.date);

    Ok(PayQuote {
        date: request.date,
        day_type,
        hours,
        base_hours: rules.base_hours(day_type),
        hourly_rate,
        amount: calculate_session_pay(request.date.weekday(), hours, hourly_rate, rules)?,
    })
}

/// Maps a JSON extraction failure to a 400 response.
fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // Get the body text which contains the detailed error from serde
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    json_response(StatusCode::BAD_REQUEST, &error)
}

fn error_response(err: EngineError) -> Response {
    ApiErrorResponse::from(err).into_response()
}

fn json_response<T: Serialize>(status: StatusCode, body: &T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}
