//! Configuration types for working days reconciliation.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use chrono::Weekday;
use serde::Deserialize;

use crate::models::{PublicHoliday, WorkingDaysPolicy};

/// The fixed working-days-per-month setting.
#[derive(Debug, Clone, Deserialize)]
pub struct FixedWorkingDays {
    /// Whether the fixed cap is in force.
    pub enabled: bool,
    /// The number of working days per month when enabled.
    pub working_days_per_month: u32,
}

/// Payroll settings from `settings.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct PayrollSettings {
    /// The fixed working days setting.
    pub fixed_working_days: FixedWorkingDays,
    /// Whether holidays count as working days by default.
    #[serde(default)]
    pub include_holidays_in_total_working_days: bool,
}

impl PayrollSettings {
    /// Returns the working days policy these settings describe.
    ///
    /// The cap is only set when the fixed working days setting is enabled.
    pub fn policy(&self) -> WorkingDaysPolicy {
        if self.fixed_working_days.enabled {
            WorkingDaysPolicy::fixed(self.fixed_working_days.working_days_per_month)
        } else {
            WorkingDaysPolicy::none()
        }
    }
}

/// A holiday list from `holidays.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct HolidayListConfig {
    /// The name of the holiday list.
    pub name: String,
    /// Weekdays that are always off.
    #[serde(default)]
    pub weekly_off: Vec<Weekday>,
    /// Dated holidays.
    #[serde(default)]
    pub holidays: Vec<PublicHoliday>,
}
