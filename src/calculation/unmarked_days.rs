//! Unmarked days calculation.
//!
//! An unmarked day is a working day in the pay period with no finalized
//! attendance. Days before the employee joined or after they were relieved are
//! excluded, and days with submitted attendance are deducted.

use chrono::NaiveDate;

use crate::error::{EngineError, EngineResult};
use crate::models::{AuditStep, EmployeeLifecycle, PayPeriod};

use super::{AttendanceLookup, WorkingDayCounter};

/// The result of counting unmarked days for an employee and period.
#[derive(Debug, Clone)]
pub struct UnmarkedDaysResult {
    /// Working days still needing an attendance or leave decision. May be negative.
    pub unmarked_days: i64,
    /// Finalized attendance records found in the effective range.
    pub marked_days: u32,
    /// Days deducted for attendance (the marked count, clamped to the total).
    pub attendance_deduction: u32,
    /// True when the marked count exceeded the working-day total and was clamped.
    pub attendance_clamped: bool,
    /// First day of the employment window within the period.
    pub effective_start: NaiveDate,
    /// Last day of the employment window within the period.
    pub effective_end: NaiveDate,
    /// Audit steps recording each adjustment, in order.
    pub audit_steps: Vec<AuditStep>,
}

/// Counts the unmarked days for an employee in a pay period.
///
/// Starting from `total_working_days`:
///
/// 1. If the employee joined after the period started (`start < joining <= end`),
///    the days counted by `day_counter` over `[start, joining - 1]` are removed.
/// 2. If the employee was relieved before the period ended
///    (`start <= relieving < end`), the days over `[relieving + 1, end]` are removed.
/// 3. Finalized attendance within the remaining window is deducted. A count
///    above `total_working_days` (duplicates, multi-shift records) deducts
///    `total_working_days` instead.
///
/// The result is not clamped: a negative count is returned as is so the caller
/// can treat it as a data-quality signal. The period and lifecycle are not
/// validated here; errors only come from the collaborators.
///
/// # Example
///
/// ```
/// use working_days_engine::calculation::{compute_unmarked_days, AttendanceRegister, HolidayCalendar};
/// use working_days_engine::models::{EmployeeLifecycle, PayPeriod};
/// use chrono::NaiveDate;
///
/// let period = PayPeriod::new(
///     NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(),
/// );
/// let mut lifecycle = EmployeeLifecycle::active("EMP-0001");
/// lifecycle.joining_date = NaiveDate::from_ymd_opt(2024, 1, 10);
///
/// let result = compute_unmarked_days(
///     &period,
///     &lifecycle,
///     31,
///     true,
///     &HolidayCalendar::default(),
///     &AttendanceRegister::default(),
///     1,
/// )
/// .unwrap();
///
/// // Jan 1-9 are excluded before joining
/// assert_eq!(result.unmarked_days, 22);
/// ```
pub fn compute_unmarked_days<C, A>(
    period: &PayPeriod,
    lifecycle: &EmployeeLifecycle,
    total_working_days: u32,
    include_holidays: bool,
    day_counter: &C,
    attendance: &A,
    step_number: u32,
) -> EngineResult<UnmarkedDaysResult>
where
    C: WorkingDayCounter + ?Sized,
    A: AttendanceLookup + ?Sized,
{
    let mut unmarked_days = i64::from(total_working_days);
    let mut effective_start = period.start_date;
    let mut effective_end = period.end_date;
    let mut audit_steps = Vec::new();
    let mut step = step_number;

    if let Some(joining_date) = lifecycle.joins_within(period) {
        let before_joining = joining_date
            .pred_opt()
            .ok_or_else(|| EngineError::CalculationError {
                message: format!("No day precedes joining date {}", joining_date),
            })?;
        let excluded =
            day_counter.unmarked_days_in_subrange(include_holidays, period.start_date, before_joining)?;

        effective_start = joining_date;
        unmarked_days -= i64::from(excluded);

        audit_steps.push(AuditStep {
            step_number: step,
            rule_id: "joining_date_exclusion".to_string(),
            rule_name: "Joining Date Exclusion".to_string(),
            input: serde_json::json!({
                "joining_date": joining_date,
                "excluded_from": period.start_date,
                "excluded_to": before_joining,
                "include_holidays": include_holidays
            }),
            output: serde_json::json!({
                "excluded_days": excluded,
                "unmarked_days": unmarked_days
            }),
            reasoning: format!(
                "Joined on {}: {} days from {} to {} excluded",
                joining_date, excluded, period.start_date, before_joining
            ),
        });
        step += 1;
    }

    if let Some(relieving_date) = lifecycle.relieved_within(period) {
        let after_relieving = relieving_date
            .succ_opt()
            .ok_or_else(|| EngineError::CalculationError {
                message: format!("No day follows relieving date {}", relieving_date),
            })?;
        let excluded =
            day_counter.unmarked_days_in_subrange(include_holidays, after_relieving, period.end_date)?;

        effective_end = relieving_date;
        unmarked_days -= i64::from(excluded);

        audit_steps.push(AuditStep {
            step_number: step,
            rule_id: "relieving_date_exclusion".to_string(),
            rule_name: "Relieving Date Exclusion".to_string(),
            input: serde_json::json!({
                "relieving_date": relieving_date,
                "excluded_from": after_relieving,
                "excluded_to": period.end_date,
                "include_holidays": include_holidays
            }),
            output: serde_json::json!({
                "excluded_days": excluded,
                "unmarked_days": unmarked_days
            }),
            reasoning: format!(
                "Relieved on {}: {} days from {} to {} excluded",
                relieving_date, excluded, after_relieving, period.end_date
            ),
        });
        step += 1;
    }

    let marked_days =
        attendance.count_marked(&lifecycle.employee_id, effective_start, effective_end)?;
    let attendance_clamped = marked_days > total_working_days;
    let attendance_deduction = if attendance_clamped {
        total_working_days
    } else {
        marked_days
    };
    unmarked_days -= i64::from(attendance_deduction);

    let reasoning = if attendance_clamped {
        format!(
            "{} marked days exceed {} working days - deducting {}",
            marked_days, total_working_days, attendance_deduction
        )
    } else {
        format!(
            "{} marked days between {} and {} deducted",
            marked_days, effective_start, effective_end
        )
    };

    audit_steps.push(AuditStep {
        step_number: step,
        rule_id: "attendance_deduction".to_string(),
        rule_name: "Marked Attendance Deduction".to_string(),
        input: serde_json::json!({
            "employee_id": lifecycle.employee_id,
            "effective_start": effective_start,
            "effective_end": effective_end,
            "total_working_days": total_working_days
        }),
        output: serde_json::json!({
            "marked_days": marked_days,
            "deducted_days": attendance_deduction,
            "clamped": attendance_clamped,
            "unmarked_days": unmarked_days
        }),
        reasoning,
    });

    Ok(UnmarkedDaysResult {
        unmarked_days,
        marked_days,
        attendance_deduction,
        attendance_clamped,
        effective_start,
        effective_end,
        audit_steps,
    })
}
