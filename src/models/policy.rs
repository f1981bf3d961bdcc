//! Working days policy model.

use serde::{Deserialize, Serialize};

/// The organisation's working-days-per-month rule.
///
/// When `fixed_cap` is set, payroll treats a month as having at most that many
/// working days regardless of the period's calendar length. The cap only ever
/// lowers a count; it never raises one.
///
/// # Example
///
/// ```
/// use working_days_engine::models::WorkingDaysPolicy;
///
/// assert_eq!(WorkingDaysPolicy::none().cap(31), 31);
/// assert_eq!(WorkingDaysPolicy::fixed(26).cap(31), 26);
/// assert_eq!(WorkingDaysPolicy::fixed(26).cap(20), 20);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkingDaysPolicy {
    /// Maximum working days per period, if a fixed cap is in force.
    #[serde(default)]
    pub fixed_cap: Option<u32>,
}

impl WorkingDaysPolicy {
    /// A policy with no fixed cap.
    pub fn none() -> Self {
        Self { fixed_cap: None }
    }

    /// A policy capping working days at `days`.
    pub fn fixed(days: u32) -> Self {
        Self {
            fixed_cap: Some(days),
        }
    }

    /// Returns true if a fixed cap is configured.
    pub fn is_fixed(&self) -> bool {
        self.fixed_cap.is_some()
    }

    /// Applies the cap to a day count.
    pub fn cap(&self, days: u32) -> u32 {
        match self.fixed_cap {
            Some(cap) => cap.min(days),
            None => days,
        }
    }
}
