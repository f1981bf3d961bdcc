//! Employee lifecycle model.
//!
//! This module defines [`EmployeeLifecycle`], the joining and relieving dates
//! that bound how much of a pay period an employee can be expected to attend.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

use super::PayPeriod;

/// The employment window of an employee.
///
/// Either date may be absent: no joining date means the employee joined
/// before any period of interest, no relieving date means they are still active.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeLifecycle {
    /// Unique identifier for the employee.
    pub employee_id: String,
    /// The date the employee joined.
    #[serde(default)]
    pub joining_date: Option<NaiveDate>,
    /// The date the employee was relieved (last working day).
    #[serde(default)]
    pub relieving_date: Option<NaiveDate>,
}

impl EmployeeLifecycle {
    /// Creates a lifecycle for an active employee with no recorded dates.
    pub fn active(employee_id: impl Into<String>) -> Self {
        Self {
            employee_id: employee_id.into(),
            joining_date: None,
            relieving_date: None,
        }
    }

    /// Returns the joining date if the employee joined after the period
    /// started and on or before it ended (`start < joining <= end`).
    ///
    /// # Example
    ///
    /// ```
    /// use working_days_engine::models::{EmployeeLifecycle, PayPeriod};
    /// use chrono::NaiveDate;
    ///
    /// let period = PayPeriod::new(
    ///     NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
    ///     NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(),
    /// );
    /// let mut lifecycle = EmployeeLifecycle::active("EMP-0001");
    ///
    /// lifecycle.joining_date = NaiveDate::from_ymd_opt(2024, 1, 1);
    /// assert_eq!(lifecycle.joins_within(&period), None);
    ///
    /// lifecycle.joining_date = NaiveDate::from_ymd_opt(2024, 1, 10);
    /// assert_eq!(lifecycle.joins_within(&period), NaiveDate::from_ymd_opt(2024, 1, 10));
    /// ```
    pub fn joins_within(&self, period: &PayPeriod) -> Option<NaiveDate> {
        self.joining_date
            .filter(|&joining| period.start_date < joining && joining <= period.end_date)
    }

    /// Returns the relieving date if the employee left on or after the period
    /// started and before it ended (`start <= relieving < end`).
    pub fn relieved_within(&self, period: &PayPeriod) -> Option<NaiveDate> {
        self.relieving_date
            .filter(|&relieving| period.start_date <= relieving && relieving < period.end_date)
    }

    /// Checks that the employee was not relieved before joining.
    ///
    /// Reconciliation does not call this; it is for callers that want to
    /// reject inconsistent records up front.
    pub fn validate(&self) -> EngineResult<()> {
        match (self.joining_date, self.relieving_date) {
            (Some(joining_date), Some(relieving_date)) if relieving_date < joining_date => {
                Err(EngineError::InconsistentLifecycle {
                    employee_id: self.employee_id.clone(),
                    joining_date,
                    relieving_date,
                })
            }
            _ => Ok(()),
        }
    }
}
