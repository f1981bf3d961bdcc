//! Calculation logic for the Working Days Engine.
//!
//! This module contains the fixed working-days cap, the working-day count used
//! for leave calculation, unmarked-day counting with joining and relieving date
//! exclusions, and the reconciliation that runs them in order. The settings,
//! calendar and attendance the calculations read are reached through the
//! collaborator traits.

mod attendance_register;
mod collaborators;
mod fixed_cap;
mod holiday_calendar;
mod reconcile;
mod unmarked_days;

pub use attendance_register::AttendanceRegister;
pub use collaborators::{AttendanceLookup, PolicySource, WorkingDayCounter};
pub use fixed_cap::{
    FixedCapResult, LeaveWorkingDaysResult, adjust_for_leave_calculation, apply_fixed_cap,
};
pub use holiday_calendar::HolidayCalendar;
pub use reconcile::{
    ATTENDANCE_OVERCOUNT, INCONSISTENT_LIFECYCLE, NEGATIVE_UNMARKED_DAYS, ReconciliationInput,
    reconcile,
};
pub use unmarked_days::{UnmarkedDaysResult, compute_unmarked_days};
