//! Attendance records and overtime pay
//!
//! Overtime pay is `hours * rate`, forced to zero for absent days regardless
//! of what the record stores.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{LedgerError, LedgerResult};

use super::ids::{AttendanceId, EmployeeId};
use super::money::Money;

/// Daily attendance status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum AttendanceStatus {
    #[default]
    #[serde(rename = "present")]
    Present,
    #[serde(rename = "absent")]
    Absent,
    #[serde(rename = "half-day")]
    HalfDay,
}

impl AttendanceStatus {
    /// Parse a status name from the CLI
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "present" => Some(Self::Present),
            "absent" => Some(Self::Absent),
            "half-day" | "halfday" | "half_day" => Some(Self::HalfDay),
            _ => None,
        }
    }
}

impl fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Present => write!(f, "present"),
            Self::Absent => write!(f, "absent"),
            Self::HalfDay => write!(f, "half-day"),
        }
    }
}

/// One day of attendance for one employee
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceRecord {
    /// Unique identifier
    pub id: AttendanceId,

    /// The employee this record belongs to
    pub employee_id: EmployeeId,

    /// The day being recorded
    pub date: NaiveDate,

    /// Attendance status
    pub status: AttendanceStatus,

    /// Clock-in time; required unless absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub check_in: Option<NaiveTime>,

    /// Clock-out time; required unless absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub check_out: Option<NaiveTime>,

    /// Overtime worked, in hours
    #[serde(default)]
    pub overtime_hours: f64,

    /// Hourly overtime rate
    #[serde(default)]
    pub overtime_rate: Money,

    /// Free-text notes
    #[serde(default)]
    pub notes: String,

    /// When the record was created
    pub created_at: DateTime<Utc>,
}

impl AttendanceRecord {
    /// Create a new attendance record
    pub fn new(employee_id: EmployeeId, date: NaiveDate, status: AttendanceStatus) -> Self {
        Self {
            id: AttendanceId::new(),
            employee_id,
            date,
            status,
            check_in: None,
            check_out: None,
            overtime_hours: 0.0,
            overtime_rate: Money::zero(),
            notes: String::new(),
            created_at: Utc::now(),
        }
    }

    /// Overtime pay for this day: `hours * rate`
    ///
    /// An absent day pays no overtime, whatever the stored hours and rate say.
    pub fn overtime_pay(&self) -> Money {
        if self.status == AttendanceStatus::Absent {
            return Money::zero();
        }
        self.overtime_rate.mul_f64(self.overtime_hours)
    }

    /// Validate the record
    ///
    /// Negative overtime hours or rate are rejected, and non-absent days
    /// must carry both check-in and check-out times.
    pub fn validate(&self) -> LedgerResult<()> {
        if self.overtime_hours < 0.0 {
            return Err(LedgerError::InvalidAttendance(format!(
                "overtime hours must be non-negative, got {}",
                self.overtime_hours
            )));
        }

        if self.overtime_rate.is_negative() {
            return Err(LedgerError::InvalidAttendance(format!(
                "overtime rate must be non-negative, got {}",
                self.overtime_rate
            )));
        }

        if self.status != AttendanceStatus::Absent
            && (self.check_in.is_none() || self.check_out.is_none())
        {
            return Err(LedgerError::InvalidAttendance(format!(
                "check-in and check-out are required for status '{}'",
                self.status
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_record(status: AttendanceStatus) -> AttendanceRecord {
        let mut record = AttendanceRecord::new(
            EmployeeId::new(),
            NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            status,
        );
        if status != AttendanceStatus::Absent {
            record.check_in = NaiveTime::from_hms_opt(9, 0, 0);
            record.check_out = NaiveTime::from_hms_opt(17, 30, 0);
        }
        record
    }

    #[test]
    fn test_overtime_pay_product() {
        let mut record = test_record(AttendanceStatus::Present);
        record.overtime_hours = 2.5;
        record.overtime_rate = Money::from_cents(2000); // $20/hour

        assert_eq!(record.overtime_pay().cents(), 5000);
    }

    #[test]
    fn test_overtime_pay_zero_operands() {
        let record = test_record(AttendanceStatus::Present);
        assert_eq!(record.overtime_pay(), Money::zero());
    }

    #[test]
    fn test_absent_forces_zero_overtime() {
        let mut record = test_record(AttendanceStatus::Absent);
        record.overtime_hours = 8.0;
        record.overtime_rate = Money::from_cents(5000);

        assert_eq!(record.overtime_pay(), Money::zero());
    }

    #[test]
    fn test_negative_hours_rejected() {
        let mut record = test_record(AttendanceStatus::Present);
        record.overtime_hours = -1.0;
        assert!(matches!(
            record.validate(),
            Err(LedgerError::InvalidAttendance(_))
        ));
    }

    #[test]
    fn test_negative_rate_rejected() {
        let mut record = test_record(AttendanceStatus::Present);
        record.overtime_rate = Money::from_cents(-100);
        assert!(matches!(
            record.validate(),
            Err(LedgerError::InvalidAttendance(_))
        ));
    }

    #[test]
    fn test_times_required_unless_absent() {
        let mut record = test_record(AttendanceStatus::HalfDay);
        record.check_out = None;
        assert!(matches!(
            record.validate(),
            Err(LedgerError::InvalidAttendance(_))
        ));

        // Absent days carry no times and still validate
        let absent = test_record(AttendanceStatus::Absent);
        assert!(absent.validate().is_ok());
    }

    #[test]
    fn test_status_serde_names() {
        let json = serde_json::to_string(&AttendanceStatus::HalfDay).unwrap();
        assert_eq!(json, "\"half-day\"");

        let parsed: AttendanceStatus = serde_json::from_str("\"absent\"").unwrap();
        assert_eq!(parsed, AttendanceStatus::Absent);
    }

    #[test]
    fn test_status_parse() {
        assert_eq!(
            AttendanceStatus::parse("half-day"),
            Some(AttendanceStatus::HalfDay)
        );
        assert_eq!(
            AttendanceStatus::parse("Present"),
            Some(AttendanceStatus::Present)
        );
        assert_eq!(AttendanceStatus::parse("vacation"), None);
    }
}
