//! HTTP request handlers for the Working Days Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{AttendanceRegister, ReconciliationInput, reconcile};
use crate::error::EngineError;
use crate::models::{EmployeeLifecycle, PayPeriod, ReconciliationResult};

use super::request::ReconciliationRequest;
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/reconcile", post(reconcile_handler))
        .with_state(state)
}

/// Handler for POST /reconcile endpoint.
///
/// Accepts a reconciliation request and returns the reconciled day counts.
async fn reconcile_handler(
    State(state): State<AppState>,
    payload: Result<Json<ReconciliationRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing reconciliation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
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
            return ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error,
            }
            .into_response();
        }
    };

    match perform_reconciliation(&state, request) {
        Ok(result) => {
            info!(
                correlation_id = %correlation_id,
                employee_id = %result.employee_id,
                total_working_days = result.total_working_days,
                payment_days = result.payment_days,
                unmarked_days = result.unmarked_days,
                warnings = result.audit_trace.warnings.len(),
                duration_us = result.audit_trace.duration_us,
                "Reconciliation completed successfully"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(result),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Reconciliation failed"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Runs the reconciliation for a request against the configured settings.
///
/// The period is validated first: holiday counting walks it day by day, so
/// inverted or overlong periods are rejected before any counting starts.
fn perform_reconciliation(
    state: &AppState,
    request: ReconciliationRequest,
) -> Result<ReconciliationResult, EngineError> {
    let pay_period: PayPeriod = request.pay_period.clone().into();
    pay_period.validate()?;

    let attendance = AttendanceRegister::new(request.attendance_records());
    let lifecycle: EmployeeLifecycle = request.employee.into();

    let config = state.config();
    let calendar = state.calendar().with_period_holidays(&pay_period);
    let holidays_count = request
        .holidays_count
        .unwrap_or_else(|| calendar.holidays_between(pay_period.start_date, pay_period.end_date));
    let include_holidays = request
        .include_holidays_in_total_working_days
        .unwrap_or_else(|| config.include_holidays_in_total_working_days());

    let input = ReconciliationInput {
        period: &pay_period,
        lifecycle: &lifecycle,
        raw_total_working_days: request.raw_total_working_days,
        raw_payment_days: request.raw_payment_days,
        holidays_count,
        include_holidays_in_total_working_days: include_holidays,
    };

    reconcile(&input, config, &calendar, &attendance)
}
