//! Configuration loading and management for the Working Days Engine.
//!
//! This module loads payroll settings (the fixed working days policy) and the
//! holiday list from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use working_days_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("Holiday list: {}", config.holiday_list().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{FixedWorkingDays, HolidayListConfig, PayrollSettings};
