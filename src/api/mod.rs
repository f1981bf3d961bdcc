//! HTTP API module for the Working Days Engine.
//!
//! This module provides the REST API endpoint for reconciling an employee's
//! working days for a pay period.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{
    AttendanceRequest, EmployeeRequest, PayPeriodRequest, PublicHolidayRequest,
    ReconciliationRequest,
};
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
