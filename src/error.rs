//! Error types for the Working Days Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while reconciling working days.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the Working Days Engine.
///
/// A negative unmarked-day count is not an error: it is returned as a value
/// and flagged with a warning in the audit trace.
///
/// # Example
///
/// ```
/// use working_days_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/settings.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/settings.yaml");
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

    /// The pay period starts after it ends.
    #[error("Invalid pay period: start date {start_date} is after end date {end_date}")]
    InvalidPeriod {
        /// The start date of the period.
        start_date: NaiveDate,
        /// The end date of the period.
        end_date: NaiveDate,
    },

    /// The pay period covers more days than any salary slip can.
    #[error(
        "Invalid pay period: {start_date} to {end_date} spans {days} days, more than the maximum of {max_days}"
    )]
    PeriodTooLong {
        /// The start date of the period.
        start_date: NaiveDate,
        /// The end date of the period.
        end_date: NaiveDate,
        /// The number of calendar days in the period.
        days: u32,
        /// The longest period accepted.
        max_days: u32,
    },

    /// The employee was relieved before joining.
    #[error(
        "Inconsistent lifecycle for employee '{employee_id}': relieved on {relieving_date} before joining on {joining_date}"
    )]
    InconsistentLifecycle {
        /// The employee whose dates are inconsistent.
        employee_id: String,
        /// The joining date.
        joining_date: NaiveDate,
        /// The relieving date.
        relieving_date: NaiveDate,
    },

    /// The attendance source could not answer a count query.
    #[error("Attendance lookup failed for employee '{employee_id}': {message}")]
    AttendanceLookupFailed {
        /// The employee being looked up.
        employee_id: String,
        /// A description of the failure.
        message: String,
    },

    /// A general calculation error occurred.
    #[error("Calculation error: {message}")]
    CalculationError {
        /// A description of the calculation error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
