//! Attendance record model.
//!
//! Attendance moves through a draft, submitted and cancelled lifecycle. Only
//! submitted records count as a marked day.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The document status of an attendance record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttendanceStatus {
    /// Saved but not yet finalized.
    Draft,
    /// Finalized; this is the only status that marks a day.
    Submitted,
    /// Submitted and later cancelled.
    Cancelled,
}

/// A single attendance entry for an employee on a date.
///
/// # Example
///
/// ```
/// use working_days_engine::models::{AttendanceRecord, AttendanceStatus};
/// use chrono::NaiveDate;
///
/// let record = AttendanceRecord {
///     employee_id: "EMP-0001".to_string(),
///     date: NaiveDate::from_ymd_opt(2024, 3, 4).unwrap(),
///     status: AttendanceStatus::Submitted,
/// };
/// assert!(record.is_finalized());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    /// The employee the record belongs to.
    pub employee_id: String,
    /// The attendance date.
    pub date: NaiveDate,
    /// The document status.
    pub status: AttendanceStatus,
}

impl AttendanceRecord {
    /// Returns true if the record has been submitted.
    pub fn is_finalized(&self) -> bool {
        self.status == AttendanceStatus::Submitted
    }
}
