//! Core data models for the Working Days Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod attendance;
mod employee;
mod pay_period;
mod policy;
mod reconciliation_result;

pub use attendance::{AttendanceRecord, AttendanceStatus};
pub use employee::EmployeeLifecycle;
pub use pay_period::{MAX_PERIOD_DAYS, PayPeriod, PublicHoliday};
pub use policy::WorkingDaysPolicy;
pub use reconciliation_result::{AuditStep, AuditTrace, AuditWarning, ReconciliationResult};
