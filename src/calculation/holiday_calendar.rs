//! Holiday-aware day counting.
//!
//! A [`HolidayCalendar`] is a holiday list: explicit holiday dates plus the
//! weekdays that are always off. It is the default [`WorkingDayCounter`].

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::EngineResult;
use crate::models::{PayPeriod, PublicHoliday};

use super::WorkingDayCounter;

/// A list of holidays and weekly off days.
///
/// # Example
///
/// ```
/// use working_days_engine::calculation::{HolidayCalendar, WorkingDayCounter};
/// use chrono::{NaiveDate, Weekday};
///
/// let calendar = HolidayCalendar::new(vec![], vec![Weekday::Sat, Weekday::Sun]);
/// let start = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
/// let end = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
///
/// // Every calendar day when holidays are included
/// assert_eq!(calendar.unmarked_days_in_subrange(true, start, end).unwrap(), 10);
/// // Only business days otherwise: Mar 1 and Mar 4-8
/// assert_eq!(calendar.unmarked_days_in_subrange(false, start, end).unwrap(), 6);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidayCalendar {
    /// Explicit holiday dates.
    #[serde(default)]
    pub holidays: Vec<PublicHoliday>,
    /// Weekdays that are always off.
    #[serde(default)]
    pub weekly_off: Vec<Weekday>,
}

impl HolidayCalendar {
    /// Creates a calendar from holidays and weekly off days.
    pub fn new(holidays: Vec<PublicHoliday>, weekly_off: Vec<Weekday>) -> Self {
        Self {
            holidays,
            weekly_off,
        }
    }

    /// Returns a copy of this calendar extended with a pay period's public holidays.
    pub fn with_period_holidays(&self, period: &PayPeriod) -> Self {
        let mut calendar = self.clone();
        for holiday in &period.public_holidays {
            if !calendar.holidays.iter().any(|h| h.date == holiday.date) {
                calendar.holidays.push(holiday.clone());
            }
        }
        calendar
    }

    /// Returns true if the date is a listed holiday or falls on a weekly off.
    pub fn is_holiday(&self, date: NaiveDate) -> bool {
        self.weekly_off.contains(&date.weekday()) || self.holidays.iter().any(|h| h.date == date)
    }

    /// Counts holidays falling in `[start, end]`.
    pub fn holidays_between(&self, start: NaiveDate, end: NaiveDate) -> u32 {
        days_between(start, end)
            .filter(|&d| self.is_holiday(d))
            .count() as u32
    }
}

impl WorkingDayCounter for HolidayCalendar {
    fn unmarked_days_in_subrange(
        &self,
        include_holidays: bool,
        start: NaiveDate,
        end: NaiveDate,
    ) -> EngineResult<u32> {
        let count = if include_holidays {
            days_between(start, end).count()
        } else {
            days_between(start, end)
                .filter(|&d| !self.is_holiday(d))
                .count()
        };
        Ok(count as u32)
    }
}

/// Iterates the dates in `[start, end]`; empty when `start > end`.
fn days_between(start: NaiveDate, end: NaiveDate) -> impl Iterator<Item = NaiveDate> {
    start.iter_days().take_while(move |&d| d <= end)
}
