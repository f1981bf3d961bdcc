//! Collaborator traits consumed by the reconciliation functions.
//!
//! The reconciler never reads settings, calendars or attendance itself; the
//! payroll pipeline passes implementations of these traits in. Default
//! implementations live in [`crate::calculation::HolidayCalendar`],
//! [`crate::calculation::AttendanceRegister`] and [`crate::config::ConfigLoader`].

use chrono::NaiveDate;

use crate::error::EngineResult;
use crate::models::WorkingDaysPolicy;

/// Supplies the working days policy in force for a reconciliation.
pub trait PolicySource {
    /// Returns a snapshot of the current policy.
    fn policy(&self) -> EngineResult<WorkingDaysPolicy>;
}

impl PolicySource for WorkingDaysPolicy {
    fn policy(&self) -> EngineResult<WorkingDaysPolicy> {
        Ok(*self)
    }
}

/// Counts the working days in a date range that would otherwise be unmarked.
pub trait WorkingDayCounter {
    /// Counts days in `[start, end]`.
    ///
    /// With `include_holidays` every calendar day counts; without it holidays
    /// are skipped. An empty range (`start > end`) counts zero.
    fn unmarked_days_in_subrange(
        &self,
        include_holidays: bool,
        start: NaiveDate,
        end: NaiveDate,
    ) -> EngineResult<u32>;
}

/// Counts finalized attendance records.
pub trait AttendanceLookup {
    /// Counts submitted attendance for `employee_id` dated within `[start, end]`.
    fn count_marked(
        &self,
        employee_id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> EngineResult<u32>;
}
