//! In-memory attendance source.

use chrono::NaiveDate;

use crate::error::EngineResult;
use crate::models::AttendanceRecord;

use super::AttendanceLookup;

/// Attendance records held in memory, answering [`AttendanceLookup`] queries.
///
/// Draft and cancelled records are kept but never counted.
///
/// # Example
///
/// ```
/// use working_days_engine::calculation::{AttendanceLookup, AttendanceRegister};
/// use working_days_engine::models::{AttendanceRecord, AttendanceStatus};
/// use chrono::NaiveDate;
///
/// let day = NaiveDate::from_ymd_opt(2024, 3, 4).unwrap();
/// let register = AttendanceRegister::new(vec![
///     AttendanceRecord { employee_id: "EMP-0001".to_string(), date: day, status: AttendanceStatus::Submitted },
///     AttendanceRecord { employee_id: "EMP-0001".to_string(), date: day, status: AttendanceStatus::Draft },
/// ]);
/// assert_eq!(register.count_marked("EMP-0001", day, day).unwrap(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct AttendanceRegister {
    records: Vec<AttendanceRecord>,
}

impl AttendanceRegister {
    /// Creates a register from a list of records.
    pub fn new(records: Vec<AttendanceRecord>) -> Self {
        Self { records }
    }

    /// Adds a record.
    pub fn push(&mut self, record: AttendanceRecord) {
        self.records.push(record);
    }

    /// Returns the number of records held, whatever their status.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the register holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl AttendanceLookup for AttendanceRegister {
    fn count_marked(
        &self,
        employee_id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> EngineResult<u32> {
        let count = self
            .records
            .iter()
            .filter(|r| r.employee_id == employee_id)
            .filter(|r| r.is_finalized())
            .filter(|r| r.date >= start && r.date <= end)
            .count();
        Ok(count as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AttendanceStatus;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn record(employee_id: &str, day: u32, status: AttendanceStatus) -> AttendanceRecord {
        AttendanceRecord {
            employee_id: employee_id.to_string(),
            date: date(2024, 3, day),
            status,
        }
    }

    fn sample_register() -> AttendanceRegister {
        AttendanceRegister::new(vec![
            record("EMP-0001", 1, AttendanceStatus::Submitted),
            record("EMP-0001", 4, AttendanceStatus::Submitted),
            record("EMP-0001", 5, AttendanceStatus::Draft),
            record("EMP-0001", 6, AttendanceStatus::Cancelled),
            record("EMP-0001", 31, AttendanceStatus::Submitted),
            record("EMP-0002", 4, AttendanceStatus::Submitted),
        ])
    }

    #[test]
    fn test_counts_only_submitted_records() {
        let register = sample_register();
        let count = register
            .count_marked("EMP-0001", date(2024, 3, 1), date(2024, 3, 31))
            .unwrap();
        assert_eq!(count, 3);
    }

    #[test]
    fn test_range_is_inclusive() {
        let register = sample_register();
        assert_eq!(
            register
                .count_marked("EMP-0001", date(2024, 3, 1), date(2024, 3, 4))
                .unwrap(),
            2
        );
        assert_eq!(
            register
                .count_marked("EMP-0001", date(2024, 3, 2), date(2024, 3, 30))
                .unwrap(),
            1
        );
    }

    #[test]
    fn test_other_employees_are_ignored() {
        let register = sample_register();
        assert_eq!(
            register
                .count_marked("EMP-0002", date(2024, 3, 1), date(2024, 3, 31))
                .unwrap(),
            1
        );
        assert_eq!(
            register
                .count_marked("EMP-0003", date(2024, 3, 1), date(2024, 3, 31))
                .unwrap(),
            0
        );
    }

    #[test]
    fn test_push_and_len() {
        let mut register = AttendanceRegister::default();
        assert!(register.is_empty());
        register.push(record("EMP-0001", 2, AttendanceStatus::Submitted));
        assert_eq!(register.len(), 1);
    }
}
