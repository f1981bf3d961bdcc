//! Full working-days reconciliation for one employee and pay period.
//!
//! Runs the capping and unmarked-day calculations in the order a salary slip
//! needs them and collects their audit steps into a [`ReconciliationResult`].

use std::time::Instant;

use chrono::Utc;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::error::EngineResult;
use crate::models::{AuditTrace, AuditWarning, EmployeeLifecycle, PayPeriod, ReconciliationResult};

use super::{
    AttendanceLookup, PolicySource, WorkingDayCounter, adjust_for_leave_calculation,
    apply_fixed_cap, compute_unmarked_days,
};

/// Warning code raised when the unmarked-day count is negative.
pub const NEGATIVE_UNMARKED_DAYS: &str = "NEGATIVE_UNMARKED_DAYS";
/// Warning code raised when the employee was relieved before joining.
pub const INCONSISTENT_LIFECYCLE: &str = "INCONSISTENT_LIFECYCLE";
/// Warning code raised when marked attendance exceeded the working-day total.
pub const ATTENDANCE_OVERCOUNT: &str = "ATTENDANCE_OVERCOUNT";

/// The raw figures a payroll pipeline has computed for a salary slip.
#[derive(Debug, Clone)]
pub struct ReconciliationInput<'a> {
    /// The pay period being reconciled.
    pub period: &'a PayPeriod,
    /// The employee's joining and relieving dates.
    pub lifecycle: &'a EmployeeLifecycle,
    /// Working days derived from the calendar, before any cap.
    pub raw_total_working_days: u32,
    /// Payment days derived by the pipeline, before any cap.
    pub raw_payment_days: u32,
    /// Holidays in the period, passed on to leave calculation.
    pub holidays_count: u32,
    /// Whether holidays count as working days.
    pub include_holidays_in_total_working_days: bool,
}

/// Reconciles working days, payment days and unmarked days.
///
/// The policy is read once from `policy_source`. The fixed cap is applied to
/// the raw totals, the raw total is capped again for leave calculation, and the
/// unmarked days are counted against the capped total.
///
/// Negative unmarked days, an inverted lifecycle and an attendance over-count
/// are reported as warnings in the audit trace, never as errors.
///
/// # Example
///
/// ```
/// use working_days_engine::calculation::{reconcile, AttendanceRegister, HolidayCalendar, ReconciliationInput};
/// use working_days_engine::models::{EmployeeLifecycle, PayPeriod, WorkingDaysPolicy};
/// use chrono::NaiveDate;
///
/// let period = PayPeriod::new(
///     NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2024, 3, 31).unwrap(),
/// );
/// let lifecycle = EmployeeLifecycle::active("EMP-0001");
/// let input = ReconciliationInput {
///     period: &period,
///     lifecycle: &lifecycle,
///     raw_total_working_days: 31,
///     raw_payment_days: 31,
///     holidays_count: 0,
///     include_holidays_in_total_working_days: true,
/// };
///
/// let result = reconcile(
///     &input,
///     &WorkingDaysPolicy::fixed(26),
///     &HolidayCalendar::default(),
///     &AttendanceRegister::default(),
/// )
/// .unwrap();
///
/// assert_eq!(result.total_working_days, 26);
/// assert_eq!(result.payment_days, 26);
/// assert_eq!(result.unmarked_days, 26);
/// ```
pub fn reconcile<P, C, A>(
    input: &ReconciliationInput<'_>,
    policy_source: &P,
    day_counter: &C,
    attendance: &A,
) -> EngineResult<ReconciliationResult>
where
    P: PolicySource + ?Sized,
    C: WorkingDayCounter + ?Sized,
    A: AttendanceLookup + ?Sized,
{
    let start_time = Instant::now();
    let employee_id = &input.lifecycle.employee_id;
    let mut steps = Vec::new();
    let mut warnings = Vec::new();
    let mut step_number: u32 = 1;

    let policy = policy_source.policy()?;

    let capped = apply_fixed_cap(
        input.raw_total_working_days,
        input.raw_payment_days,
        policy,
        step_number,
    );
    steps.push(capped.audit_step);
    step_number += 1;

    debug!(
        employee_id = %employee_id,
        fixed_cap = ?policy.fixed_cap,
        total_working_days = capped.total_working_days,
        payment_days = capped.payment_days,
        "Fixed working days cap applied"
    );

    let leave = adjust_for_leave_calculation(
        input.holidays_count,
        input.raw_total_working_days,
        policy,
        step_number,
    );
    steps.push(leave.audit_step);
    step_number += 1;

    if let Err(err) = input.lifecycle.validate() {
        warn!(employee_id = %employee_id, error = %err, "Inconsistent employee lifecycle");
        warnings.push(AuditWarning::new(INCONSISTENT_LIFECYCLE, err.to_string(), "medium"));
    }

    let unmarked = compute_unmarked_days(
        input.period,
        input.lifecycle,
        capped.total_working_days,
        input.include_holidays_in_total_working_days,
        day_counter,
        attendance,
        step_number,
    )?;
    steps.extend(unmarked.audit_steps);

    if unmarked.attendance_clamped {
        warnings.push(AuditWarning::new(
            ATTENDANCE_OVERCOUNT,
            format!(
                "{} finalized attendance records exceed {} working days",
                unmarked.marked_days, capped.total_working_days
            ),
            "medium",
        ));
    }

    if unmarked.unmarked_days < 0 {
        warn!(
            employee_id = %employee_id,
            unmarked_days = unmarked.unmarked_days,
            "Unmarked days is negative"
        );
        warnings.push(AuditWarning::new(
            NEGATIVE_UNMARKED_DAYS,
            format!(
                "Unmarked days is {}: excluded and marked days exceed {} working days",
                unmarked.unmarked_days, capped.total_working_days
            ),
            "high",
        ));
    }

    debug!(
        employee_id = %employee_id,
        unmarked_days = unmarked.unmarked_days,
        marked_days = unmarked.marked_days,
        "Unmarked days reconciled"
    );

    Ok(ReconciliationResult {
        calculation_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        employee_id: employee_id.clone(),
        pay_period: input.period.clone(),
        total_working_days: capped.total_working_days,
        payment_days: capped.payment_days,
        unmarked_days: unmarked.unmarked_days,
        leave_working_days: leave.working_days,
        marked_days: unmarked.marked_days,
        effective_start: unmarked.effective_start,
        effective_end: unmarked.effective_end,
        audit_trace: AuditTrace {
            steps,
            warnings,
            duration_us: start_time.elapsed().as_micros() as u64,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Weekday};

    use crate::calculation::{AttendanceRegister, HolidayCalendar};
    use crate::error::EngineError;
    use crate::models::{AttendanceRecord, AttendanceStatus, WorkingDaysPolicy};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn submitted(employee_id: &str, day: NaiveDate) -> AttendanceRecord {
        AttendanceRecord {
            employee_id: employee_id.to_string(),
            date: day,
            status: AttendanceStatus::Submitted,
        }
    }

    fn weekday_attendance(employee_id: &str, start: NaiveDate, days: usize) -> AttendanceRegister {
        let calendar = HolidayCalendar::new(vec![], vec![Weekday::Sat, Weekday::Sun]);
        AttendanceRegister::new(
            start
                .iter_days()
                .filter(|d| !calendar.is_holiday(*d))
                .take(days)
                .map(|d| submitted(employee_id, d))
                .collect(),
        )
    }

    struct BrokenSettings;

    impl PolicySource for BrokenSettings {
        fn policy(&self) -> EngineResult<WorkingDaysPolicy> {
            Err(EngineError::ConfigNotFound {
                path: "settings.yaml".to_string(),
            })
        }
    }

    #[test]
    fn test_march_end_to_end_without_cap() {
        let period = PayPeriod::new(date(2024, 3, 1), date(2024, 3, 31));
        let lifecycle = EmployeeLifecycle::active("EMP-0001");
        let input = ReconciliationInput {
            period: &period,
            lifecycle: &lifecycle,
            raw_total_working_days: 26,
            raw_payment_days: 26,
            holidays_count: 5,
            include_holidays_in_total_working_days: false,
        };
        let attendance = weekday_attendance("EMP-0001", date(2024, 3, 1), 20);

        let result = reconcile(
            &input,
            &WorkingDaysPolicy::none(),
            &HolidayCalendar::default(),
            &attendance,
        )
        .unwrap();

        assert_eq!(result.total_working_days, 26);
        assert_eq!(result.payment_days, 26);
        assert_eq!(result.marked_days, 20);
        assert_eq!(result.unmarked_days, 6);
        assert!(result.audit_trace.warnings.is_empty());
    }

    #[test]
    fn test_unmarked_days_use_capped_total() {
        let period = PayPeriod::new(date(2024, 1, 1), date(2024, 1, 31));
        let lifecycle = EmployeeLifecycle::active("EMP-0001");
        let input = ReconciliationInput {
            period: &period,
            lifecycle: &lifecycle,
            raw_total_working_days: 31,
            raw_payment_days: 30,
            holidays_count: 0,
            include_holidays_in_total_working_days: true,
        };
        let attendance = weekday_attendance("EMP-0001", date(2024, 1, 1), 10);

        let result = reconcile(
            &input,
            &WorkingDaysPolicy::fixed(26),
            &HolidayCalendar::default(),
            &attendance,
        )
        .unwrap();

        assert_eq!(result.total_working_days, 26);
        assert_eq!(result.payment_days, 26);
        assert_eq!(result.leave_working_days, 26);
        assert_eq!(result.unmarked_days, 16);
    }

    #[test]
    fn test_joining_mid_month_with_calendar() {
        let period = PayPeriod::new(date(2024, 1, 1), date(2024, 1, 31));
        let lifecycle = EmployeeLifecycle {
            employee_id: "EMP-0001".to_string(),
            joining_date: Some(date(2024, 1, 10)),
            relieving_date: None,
        };
        let input = ReconciliationInput {
            period: &period,
            lifecycle: &lifecycle,
            raw_total_working_days: 31,
            raw_payment_days: 22,
            holidays_count: 0,
            include_holidays_in_total_working_days: true,
        };

        let result = reconcile(
            &input,
            &WorkingDaysPolicy::none(),
            &HolidayCalendar::default(),
            &AttendanceRegister::default(),
        )
        .unwrap();

        assert_eq!(result.unmarked_days, 22);
        assert_eq!(result.effective_start, date(2024, 1, 10));
        assert_eq!(result.audit_trace.steps.len(), 4);
        assert_eq!(result.audit_trace.steps[2].rule_id, "joining_date_exclusion");
    }

    #[test]
    fn test_negative_result_raises_warning() {
        let period = PayPeriod::new(date(2024, 1, 1), date(2024, 1, 31));
        let lifecycle = EmployeeLifecycle {
            employee_id: "EMP-0001".to_string(),
            joining_date: Some(date(2024, 1, 16)),
            relieving_date: None,
        };
        let input = ReconciliationInput {
            period: &period,
            lifecycle: &lifecycle,
            raw_total_working_days: 20,
            raw_payment_days: 20,
            holidays_count: 0,
            include_holidays_in_total_working_days: true,
        };
        let attendance = weekday_attendance("EMP-0001", date(2024, 1, 16), 10);

        let result = reconcile(
            &input,
            &WorkingDaysPolicy::none(),
            &HolidayCalendar::default(),
            &attendance,
        )
        .unwrap();

        // 20 - 15 days before joining - 10 marked
        assert_eq!(result.unmarked_days, -5);
        assert!(result.audit_trace.has_warning(NEGATIVE_UNMARKED_DAYS));
    }

    #[test]
    fn test_overcount_and_inconsistent_lifecycle_warnings() {
        let period = PayPeriod::new(date(2024, 1, 1), date(2024, 1, 31));
        let lifecycle = EmployeeLifecycle {
            employee_id: "EMP-0001".to_string(),
            joining_date: Some(date(2024, 2, 10)),
            relieving_date: Some(date(2024, 2, 1)),
        };
        let input = ReconciliationInput {
            period: &period,
            lifecycle: &lifecycle,
            raw_total_working_days: 5,
            raw_payment_days: 5,
            holidays_count: 0,
            include_holidays_in_total_working_days: false,
        };
        let attendance = weekday_attendance("EMP-0001", date(2024, 1, 1), 8);

        let result = reconcile(
            &input,
            &WorkingDaysPolicy::none(),
            &HolidayCalendar::default(),
            &attendance,
        )
        .unwrap();

        assert_eq!(result.unmarked_days, 0);
        assert!(result.audit_trace.has_warning(ATTENDANCE_OVERCOUNT));
        assert!(result.audit_trace.has_warning(INCONSISTENT_LIFECYCLE));
        assert!(!result.audit_trace.has_warning(NEGATIVE_UNMARKED_DAYS));
    }

    #[test]
    fn test_policy_error_propagates() {
        let period = PayPeriod::new(date(2024, 1, 1), date(2024, 1, 31));
        let lifecycle = EmployeeLifecycle::active("EMP-0001");
        let input = ReconciliationInput {
            period: &period,
            lifecycle: &lifecycle,
            raw_total_working_days: 31,
            raw_payment_days: 31,
            holidays_count: 0,
            include_holidays_in_total_working_days: true,
        };

        let result = reconcile(
            &input,
            &BrokenSettings,
            &HolidayCalendar::default(),
            &AttendanceRegister::default(),
        );

        assert!(matches!(result, Err(EngineError::ConfigNotFound { .. })));
    }

    #[test]
    fn test_result_metadata() {
        let period = PayPeriod::new(date(2024, 1, 1), date(2024, 1, 31));
        let lifecycle = EmployeeLifecycle::active("EMP-0042");
        let input = ReconciliationInput {
            period: &period,
            lifecycle: &lifecycle,
            raw_total_working_days: 23,
            raw_payment_days: 23,
            holidays_count: 8,
            include_holidays_in_total_working_days: false,
        };

        let result = reconcile(
            &input,
            &WorkingDaysPolicy::none(),
            &HolidayCalendar::default(),
            &AttendanceRegister::default(),
        )
        .unwrap();

        assert_eq!(result.employee_id, "EMP-0042");
        assert_eq!(result.pay_period, period);
        assert_eq!(result.engine_version, env!("CARGO_PKG_VERSION"));
        let step_numbers: Vec<u32> = result
            .audit_trace
            .steps
            .iter()
            .map(|s| s.step_number)
            .collect();
        assert_eq!(step_numbers, vec![1, 2, 3]);
    }
}
