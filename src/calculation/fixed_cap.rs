//! Fixed working-days-per-month cap.
//!
//! Under a fixed-cap policy a month has at most N working days, however many
//! calendar or business days the period spans. These functions apply the cap to
//! the salary slip's day counts and to the working days used for leave and
//! loss-of-pay calculation.

use crate::models::{AuditStep, WorkingDaysPolicy};

/// The capped working and payment days, with the audit step recording the cap.
#[derive(Debug, Clone)]
pub struct FixedCapResult {
    /// Total working days after the cap.
    pub total_working_days: u32,
    /// Payment days after the cap.
    pub payment_days: u32,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// The working days handed to leave calculation, with its audit step.
#[derive(Debug, Clone)]
pub struct LeaveWorkingDaysResult {
    /// Working days after the cap.
    pub working_days: u32,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Caps total working days and payment days at the policy's fixed value.
///
/// Without a fixed cap both values are returned unchanged. With one, each value
/// becomes `min(cap, value)`: the cap lowers counts but never inflates them.
///
/// # Examples
///
/// ```
/// use working_days_engine::calculation::apply_fixed_cap;
/// use working_days_engine::models::WorkingDaysPolicy;
///
/// let result = apply_fixed_cap(31, 29, WorkingDaysPolicy::fixed(26), 1);
/// assert_eq!(result.total_working_days, 26);
/// assert_eq!(result.payment_days, 26);
///
/// let result = apply_fixed_cap(22, 20, WorkingDaysPolicy::fixed(26), 1);
/// assert_eq!(result.total_working_days, 22);
/// assert_eq!(result.payment_days, 20);
///
/// let result = apply_fixed_cap(31, 29, WorkingDaysPolicy::none(), 1);
/// assert_eq!(result.total_working_days, 31);
/// assert_eq!(result.payment_days, 29);
/// ```
pub fn apply_fixed_cap(
    raw_total_working_days: u32,
    raw_payment_days: u32,
    policy: WorkingDaysPolicy,
    step_number: u32,
) -> FixedCapResult {
    let total_working_days = policy.cap(raw_total_working_days);
    let payment_days = policy.cap(raw_payment_days);

    let reasoning = match policy.fixed_cap {
        Some(cap) => format!(
            "Fixed cap of {} days: total min({}, {}) = {}, payment min({}, {}) = {}",
            cap,
            cap,
            raw_total_working_days,
            total_working_days,
            cap,
            raw_payment_days,
            payment_days
        ),
        None => "No fixed working days policy - calendar-derived values kept".to_string(),
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "fixed_working_days_cap".to_string(),
        rule_name: "Fixed Working Days Cap".to_string(),
        input: serde_json::json!({
            "raw_total_working_days": raw_total_working_days,
            "raw_payment_days": raw_payment_days,
            "fixed_cap": policy.fixed_cap
        }),
        output: serde_json::json!({
            "total_working_days": total_working_days,
            "payment_days": payment_days,
            "cap_applied": policy.is_fixed()
        }),
        reasoning,
    };

    FixedCapResult {
        total_working_days,
        payment_days,
        audit_step,
    }
}

/// Caps the working days passed to leave and loss-of-pay calculation.
///
/// The downstream leave computation receives the period's holidays and working
/// days. Under a fixed cap it must never see more working days than the cap,
/// otherwise loss of pay would be computed against the raw calendar length.
/// `holidays_count` is recorded for the audit trail only.
///
/// # Examples
///
/// ```
/// use working_days_engine::calculation::adjust_for_leave_calculation;
/// use working_days_engine::models::WorkingDaysPolicy;
///
/// let result = adjust_for_leave_calculation(4, 27, WorkingDaysPolicy::fixed(26), 1);
/// assert_eq!(result.working_days, 26);
///
/// let result = adjust_for_leave_calculation(4, 27, WorkingDaysPolicy::none(), 1);
/// assert_eq!(result.working_days, 27);
/// ```
pub fn adjust_for_leave_calculation(
    holidays_count: u32,
    working_days_count: u32,
    policy: WorkingDaysPolicy,
    step_number: u32,
) -> LeaveWorkingDaysResult {
    let working_days = policy.cap(working_days_count);

    let reasoning = match policy.fixed_cap {
        Some(cap) => format!(
            "Leave working days min({}, {}) = {}",
            cap, working_days_count, working_days
        ),
        None => format!(
            "No fixed working days policy - {} working days passed to leave calculation",
            working_days
        ),
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "leave_working_days".to_string(),
        rule_name: "Leave Calculation Working Days".to_string(),
        input: serde_json::json!({
            "holidays_count": holidays_count,
            "working_days_count": working_days_count,
            "fixed_cap": policy.fixed_cap
        }),
        output: serde_json::json!({
            "working_days": working_days
        }),
        reasoning,
    };

    LeaveWorkingDaysResult {
        working_days,
        audit_step,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_cap_lowers_both_values() {
        let result = apply_fixed_cap(31, 30, WorkingDaysPolicy::fixed(26), 1);
        assert_eq!(result.total_working_days, 26);
        assert_eq!(result.payment_days, 26);
    }

    #[test]
    fn test_cap_never_inflates() {
        let result = apply_fixed_cap(20, 18, WorkingDaysPolicy::fixed(26), 1);
        assert_eq!(result.total_working_days, 20);
        assert_eq!(result.payment_days, 18);
    }

    #[test]
    fn test_cap_applies_to_values_independently() {
        let result = apply_fixed_cap(31, 12, WorkingDaysPolicy::fixed(26), 1);
        assert_eq!(result.total_working_days, 26);
        assert_eq!(result.payment_days, 12);
    }

    #[test]
    fn test_zero_cap() {
        let result = apply_fixed_cap(31, 31, WorkingDaysPolicy::fixed(0), 1);
        assert_eq!(result.total_working_days, 0);
        assert_eq!(result.payment_days, 0);
    }

    #[test]
    fn test_cap_audit_step() {
        let result = apply_fixed_cap(31, 29, WorkingDaysPolicy::fixed(26), 3);

        assert_eq!(result.audit_step.step_number, 3);
        assert_eq!(result.audit_step.rule_id, "fixed_working_days_cap");
        assert_eq!(result.audit_step.input["fixed_cap"], 26);
        assert_eq!(result.audit_step.input["raw_total_working_days"], 31);
        assert_eq!(result.audit_step.output["total_working_days"], 26);
        assert_eq!(result.audit_step.output["cap_applied"], true);
        assert!(result.audit_step.reasoning.contains("min(26, 31) = 26"));
    }

    #[test]
    fn test_no_cap_audit_step() {
        let result = apply_fixed_cap(31, 29, WorkingDaysPolicy::none(), 1);

        assert!(result.audit_step.input["fixed_cap"].is_null());
        assert_eq!(result.audit_step.output["cap_applied"], false);
        assert!(result.audit_step.reasoning.contains("No fixed working days policy"));
    }

    #[test]
    fn test_leave_working_days_capped() {
        let result = adjust_for_leave_calculation(5, 31, WorkingDaysPolicy::fixed(26), 2);
        assert_eq!(result.working_days, 26);
        assert_eq!(result.audit_step.rule_id, "leave_working_days");
        assert_eq!(result.audit_step.input["holidays_count"], 5);
        assert_eq!(result.audit_step.output["working_days"], 26);
    }

    #[test]
    fn test_leave_working_days_below_cap_unchanged() {
        let result = adjust_for_leave_calculation(5, 21, WorkingDaysPolicy::fixed(26), 2);
        assert_eq!(result.working_days, 21);
    }

    #[test]
    fn test_leave_working_days_without_policy() {
        let result = adjust_for_leave_calculation(0, 31, WorkingDaysPolicy::none(), 2);
        assert_eq!(result.working_days, 31);
    }

    proptest! {
        #[test]
        fn prop_no_cap_is_identity(total in 0u32..400, payment in 0u32..400) {
            let result = apply_fixed_cap(total, payment, WorkingDaysPolicy::none(), 1);
            prop_assert_eq!(result.total_working_days, total);
            prop_assert_eq!(result.payment_days, payment);
        }

        #[test]
        fn prop_cap_equals_minimum(total in 0u32..400, payment in 0u32..400, cap in 0u32..40) {
            let result = apply_fixed_cap(total, payment, WorkingDaysPolicy::fixed(cap), 1);
            prop_assert_eq!(result.total_working_days, total.min(cap));
            prop_assert_eq!(result.payment_days, payment.min(cap));
            prop_assert!(result.total_working_days <= total);
        }

        #[test]
        fn prop_leave_days_never_exceed_cap(holidays in 0u32..31, working in 0u32..400, cap in 0u32..40) {
            let result = adjust_for_leave_calculation(holidays, working, WorkingDaysPolicy::fixed(cap), 1);
            prop_assert_eq!(result.working_days, working.min(cap));
        }
    }
}
