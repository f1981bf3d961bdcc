//! Pay period and public holiday models.
//!
//! This module contains the [`PayPeriod`] and [`PublicHoliday`] types that define
//! the date window a salary slip is computed for.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// The longest pay period accepted, in calendar days.
pub const MAX_PERIOD_DAYS: u32 = 366;

/// Represents a public holiday within a pay period.
///
/// # Example
///
/// ```
/// use working_days_engine::models::PublicHoliday;
/// use chrono::NaiveDate;
///
/// let holiday = PublicHoliday {
///     date: NaiveDate::from_ymd_opt(2024, 4, 26).unwrap(),
///     name: "Union Day".to_string(),
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicHoliday {
    /// The date of the public holiday.
    pub date: NaiveDate,
    /// The name of the public holiday (e.g., "Union Day").
    pub name: String,
}

/// Represents a pay period with its date range and associated public holidays.
///
/// Both bounds are inclusive. A period is only meaningful when
/// `start_date <= end_date`; see [`PayPeriod::validate`].
///
/// # Example
///
/// ```
/// use working_days_engine::models::{PayPeriod, PublicHoliday};
/// use chrono::NaiveDate;
///
/// let pay_period = PayPeriod {
///     start_date: NaiveDate::from_ymd_opt(2024, 4, 1).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2024, 4, 30).unwrap(),
///     public_holidays: vec![
///         PublicHoliday {
///             date: NaiveDate::from_ymd_opt(2024, 4, 26).unwrap(),
///             name: "Union Day".to_string(),
///         }
///     ],
/// };
///
/// assert!(pay_period.validate().is_ok());
/// assert_eq!(pay_period.calendar_days(), 30);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayPeriod {
    /// The start date of the pay period (inclusive).
    pub start_date: NaiveDate,
    /// The end date of the pay period (inclusive).
    pub end_date: NaiveDate,
    /// Public holidays that fall within this pay period.
    #[serde(default)]
    pub public_holidays: Vec<PublicHoliday>,
}

impl PayPeriod {
    /// Creates a pay period with no public holidays.
    pub fn new(start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self {
            start_date,
            end_date,
            public_holidays: Vec::new(),
        }
    }

    /// Checks that the period does not start after it ends and spans at most
    /// [`MAX_PERIOD_DAYS`] calendar days.
    ///
    /// # Example
    ///
    /// ```
    /// use working_days_engine::models::PayPeriod;
    /// use chrono::NaiveDate;
    ///
    /// let inverted = PayPeriod::new(
    ///     NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
    ///     NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(),
    /// );
    /// assert!(inverted.validate().is_err());
    ///
    /// let two_years = PayPeriod::new(
    ///     NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
    ///     NaiveDate::from_ymd_opt(2025, 12, 31).unwrap(),
    /// );
    /// assert!(two_years.validate().is_err());
    /// ```
    pub fn validate(&self) -> EngineResult<()> {
        if self.start_date > self.end_date {
            return Err(EngineError::InvalidPeriod {
                start_date: self.start_date,
                end_date: self.end_date,
            });
        }

        let days = self.calendar_days();
        if days > MAX_PERIOD_DAYS {
            return Err(EngineError::PeriodTooLong {
                start_date: self.start_date,
                end_date: self.end_date,
                days,
                max_days: MAX_PERIOD_DAYS,
            });
        }
        Ok(())
    }

    /// Returns the number of calendar days in the period, inclusive.
    ///
    /// An inverted period has zero calendar days.
    pub fn calendar_days(&self) -> u32 {
        let days = (self.end_date - self.start_date).num_days() + 1;
        u32::try_from(days).unwrap_or(0)
    }
}
