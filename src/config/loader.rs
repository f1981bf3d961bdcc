//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading payroll settings
//! and the holiday list from YAML files.

use std::fs;
use std::path::Path;

use crate::calculation::{HolidayCalendar, PolicySource};
use crate::error::{EngineError, EngineResult};
use crate::models::WorkingDaysPolicy;

use super::types::{HolidayListConfig, PayrollSettings};

/// Loads and provides access to payroll configuration.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// ├── settings.yaml   # Fixed working days and holiday inclusion
/// └── holidays.yaml   # Holiday list with weekly offs
/// ```
///
/// # Example
///
/// ```no_run
/// use working_days_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default")?;
/// println!("Fixed cap: {:?}", loader.working_days_policy().fixed_cap);
/// # Ok::<(), working_days_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    settings: PayrollSettings,
    holiday_list: HolidayListConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// Returns `ConfigNotFound` if either file is missing and
    /// `ConfigParseError` if either contains invalid YAML.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let settings = Self::load_yaml::<PayrollSettings>(&path.join("settings.yaml"))?;
        let holiday_list = Self::load_yaml::<HolidayListConfig>(&path.join("holidays.yaml"))?;

        Ok(Self::new(settings, holiday_list))
    }

    /// Creates a loader from already-parsed configuration.
    pub fn new(settings: PayrollSettings, holiday_list: HolidayListConfig) -> Self {
        Self {
            settings,
            holiday_list,
        }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the payroll settings.
    pub fn settings(&self) -> &PayrollSettings {
        &self.settings
    }

    /// Returns the holiday list.
    pub fn holiday_list(&self) -> &HolidayListConfig {
        &self.holiday_list
    }

    /// Returns the working days policy in force.
    pub fn working_days_policy(&self) -> WorkingDaysPolicy {
        self.settings.policy()
    }

    /// Returns whether holidays count as working days by default.
    pub fn include_holidays_in_total_working_days(&self) -> bool {
        self.settings.include_holidays_in_total_working_days
    }

    /// Builds a calendar from the holiday list.
    pub fn holiday_calendar(&self) -> HolidayCalendar {
        HolidayCalendar::new(
            self.holiday_list.holidays.clone(),
            self.holiday_list.weekly_off.clone(),
        )
    }
}

impl PolicySource for ConfigLoader {
    fn policy(&self) -> EngineResult<WorkingDaysPolicy> {
        Ok(self.working_days_policy())
    }
}
