//! Reconciliation result models for the Working Days Engine.
//!
//! This module contains the [`ReconciliationResult`] type and the audit structures
//! that record how each day count was derived.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::PayPeriod;

/// A single step in the audit trace recording a reconciliation decision.
///
/// Each step captures the input, output, and reasoning for a rule application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning generated during reconciliation.
///
/// Warnings flag data-quality problems that do not stop the computation.
///
/// # Example
///
/// ```
/// use working_days_engine::models::AuditWarning;
///
/// let warning = AuditWarning::new("NEGATIVE_UNMARKED_DAYS", "unmarked days is -2", "high");
/// assert_eq!(warning.code, "NEGATIVE_UNMARKED_DAYS");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

impl AuditWarning {
    /// Creates a new warning.
    pub fn new(
        code: impl Into<String>,
        message: impl Into<String>,
        severity: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            severity: severity.into(),
        }
    }
}

/// The complete audit trace for a reconciliation.
///
/// # Example
///
/// ```
/// use working_days_engine::models::AuditTrace;
///
/// let trace = AuditTrace {
///     steps: vec![],
///     warnings: vec![],
///     duration_us: 1234,
/// };
/// assert!(!trace.has_warning("NEGATIVE_UNMARKED_DAYS"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of reconciliation steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during reconciliation.
    pub warnings: Vec<AuditWarning>,
    /// The total reconciliation duration in microseconds.
    pub duration_us: u64,
}

impl AuditTrace {
    /// Returns true if a warning with the given code was raised.
    pub fn has_warning(&self, code: &str) -> bool {
        self.warnings.iter().any(|w| w.code == code)
    }
}

/// The reconciled day counts for one employee and one pay period.
///
/// `total_working_days`, `payment_days` and `unmarked_days` are the three
/// figures the payroll pipeline consumes. `unmarked_days` is signed: a negative
/// value means attendance or excluded days exceeded the working-day total and
/// is left for the caller to interpret.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReconciliationResult {
    /// Unique identifier for this reconciliation.
    pub calculation_id: Uuid,
    /// When the reconciliation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the reconciliation.
    pub engine_version: String,
    /// The ID of the employee the reconciliation is for.
    pub employee_id: String,
    /// The pay period for this reconciliation.
    pub pay_period: PayPeriod,
    /// Total working days after the fixed cap.
    pub total_working_days: u32,
    /// Payment days after the fixed cap.
    pub payment_days: u32,
    /// Working days with no finalized attendance. May be negative.
    pub unmarked_days: i64,
    /// Working days handed to leave and loss-of-pay calculation.
    pub leave_working_days: u32,
    /// Finalized attendance records counted in the effective range.
    pub marked_days: u32,
    /// First day of the employment window within the period.
    pub effective_start: NaiveDate,
    /// Last day of the employment window within the period.
    pub effective_end: NaiveDate,
    /// Complete audit trace of reconciliation decisions.
    pub audit_trace: AuditTrace,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_sample_result() -> ReconciliationResult {
        let start = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2024, 3, 31).unwrap();
        ReconciliationResult {
            calculation_id: Uuid::new_v4(),
            timestamp: Utc::now(),
            engine_version: "0.1.0".to_string(),
            employee_id: "EMP-0001".to_string(),
            pay_period: PayPeriod::new(start, end),
            total_working_days: 26,
            payment_days: 26,
            unmarked_days: 6,
            leave_working_days: 26,
            marked_days: 20,
            effective_start: start,
            effective_end: end,
            audit_trace: AuditTrace {
                steps: vec![AuditStep {
                    step_number: 1,
                    rule_id: "fixed_working_days_cap".to_string(),
                    rule_name: "Fixed Working Days Cap".to_string(),
                    input: serde_json::json!({"raw_total_working_days": 31}),
                    output: serde_json::json!({"total_working_days": 26}),
                    reasoning: "min(26, 31) = 26".to_string(),
                }],
                warnings: vec![],
                duration_us: 12,
            },
        }
    }

    #[test]
    fn test_serialize_result_field_names() {
        let result = create_sample_result();
        let json = serde_json::to_value(&result).unwrap();

        assert_eq!(json["employee_id"], "EMP-0001");
        assert_eq!(json["total_working_days"], 26);
        assert_eq!(json["payment_days"], 26);
        assert_eq!(json["unmarked_days"], 6);
        assert_eq!(json["effective_start"], "2024-03-01");
        assert_eq!(json["audit_trace"]["steps"][0]["rule_id"], "fixed_working_days_cap");
    }

    #[test]
    fn test_result_survives_json_round_trip() {
        let result = create_sample_result();
        let json = serde_json::to_string(&result).unwrap();
        let parsed: ReconciliationResult = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, result);
    }

    #[test]
    fn test_negative_unmarked_days_serializes_as_signed() {
        let mut result = create_sample_result();
        result.unmarked_days = -3;
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["unmarked_days"], -3);
    }

    #[test]
    fn test_has_warning() {
        let mut result = create_sample_result();
        result.audit_trace.warnings.push(AuditWarning::new(
            "ATTENDANCE_OVERCOUNT",
            "31 records exceed 26 working days",
            "medium",
        ));
        assert!(result.audit_trace.has_warning("ATTENDANCE_OVERCOUNT"));
        assert!(!result.audit_trace.has_warning("NEGATIVE_UNMARKED_DAYS"));
    }
}
