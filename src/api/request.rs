//! Request types for the Working Days Engine API.
//!
//! This module defines the JSON request structures for the `/reconcile` endpoint.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{
    AttendanceRecord, AttendanceStatus, EmployeeLifecycle, PayPeriod, PublicHoliday,
};

/// Request body for the `/reconcile` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReconciliationRequest {
    /// The employee and their employment window.
    pub employee: EmployeeRequest,
    /// The pay period being reconciled.
    pub pay_period: PayPeriodRequest,
    /// Working days derived from the calendar, before any cap.
    pub raw_total_working_days: u32,
    /// Payment days derived by the payroll pipeline, before any cap.
    pub raw_payment_days: u32,
    /// Holidays in the period. Counted from the holiday calendar when absent.
    #[serde(default)]
    pub holidays_count: Option<u32>,
    /// Whether holidays count as working days. Taken from settings when absent.
    #[serde(default)]
    pub include_holidays_in_total_working_days: Option<bool>,
    /// The employee's attendance records.
    #[serde(default)]
    pub attendance: Vec<AttendanceRequest>,
}

/// Employee information in a reconciliation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeRequest {
    /// Unique identifier for the employee.
    pub id: String,
    /// The date the employee joined.
    #[serde(default)]
    pub joining_date: Option<NaiveDate>,
    /// The date the employee was relieved.
    #[serde(default)]
    pub relieving_date: Option<NaiveDate>,
}

/// Pay period information in a reconciliation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayPeriodRequest {
    /// The start date of the pay period (inclusive).
    pub start_date: NaiveDate,
    /// The end date of the pay period (inclusive).
    pub end_date: NaiveDate,
    /// Public holidays in addition to the configured holiday list.
    #[serde(default)]
    pub public_holidays: Vec<PublicHolidayRequest>,
}

/// Public holiday information in a reconciliation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublicHolidayRequest {
    /// The date of the public holiday.
    pub date: NaiveDate,
    /// The name of the public holiday.
    pub name: String,
}

/// An attendance entry in a reconciliation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceRequest {
    /// The attendance date.
    pub date: NaiveDate,
    /// The document status; submitted when absent.
    #[serde(default = "default_status")]
    pub status: AttendanceStatus,
}

fn default_status() -> AttendanceStatus {
    AttendanceStatus::Submitted
}

impl ReconciliationRequest {
    /// Converts the attendance entries into records for the request's employee.
    pub fn attendance_records(&self) -> Vec<AttendanceRecord> {
        self.attendance
            .iter()
            .map(|a| AttendanceRecord {
                employee_id: self.employee.id.clone(),
                date: a.date,
                status: a.status,
            })
            .collect()
    }
}

impl From<EmployeeRequest> for EmployeeLifecycle {
    fn from(req: EmployeeRequest) -> Self {
        EmployeeLifecycle {
            employee_id: req.id,
            joining_date: req.joining_date,
            relieving_date: req.relieving_date,
        }
    }
}

impl From<PayPeriodRequest> for PayPeriod {
    fn from(req: PayPeriodRequest) -> Self {
        PayPeriod {
            start_date: req.start_date,
            end_date: req.end_date,
            public_holidays: req.public_holidays.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<PublicHolidayRequest> for PublicHoliday {
    fn from(req: PublicHolidayRequest) -> Self {
        PublicHoliday {
            date: req.date,
            name: req.name,
        }
    }
}
