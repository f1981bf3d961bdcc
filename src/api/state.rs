//! Application state for the Working Days Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::calculation::HolidayCalendar;
use crate::config::ConfigLoader;

/// Shared application state.
///
/// Holds the loaded configuration and the holiday calendar built from it.
#[derive(Clone)]
pub struct AppState {
    config: Arc<ConfigLoader>,
    calendar: Arc<HolidayCalendar>,
}

impl AppState {
    /// Creates a new application state with the given configuration loader.
    pub fn new(config: ConfigLoader) -> Self {
        let calendar = config.holiday_calendar();
        Self {
            config: Arc::new(config),
            calendar: Arc::new(calendar),
        }
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Returns the configured holiday calendar.
    pub fn calendar(&self) -> &HolidayCalendar {
        &self.calendar
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_clone() {
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }

    #[test]
    fn test_calendar_built_from_config() {
        let config = ConfigLoader::load("./config/default").unwrap();
        let state = AppState::new(config);
        assert_eq!(
            state.calendar().holidays.len(),
            state.config().holiday_list().holidays.len()
        );
    }
}
