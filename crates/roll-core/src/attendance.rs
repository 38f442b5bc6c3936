//! Attendance records and the joined read model served by `GET /attendance`.
//!
//! `status` is free text (`"present"`, `"absent"`, ...). The store does not
//! constrain its value domain.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A stored attendance record.
///
/// Only `status` is mutable after insert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
  pub attendance_id: i64,
  /// References an existing [`Student`](crate::student::Student).
  pub student_id:    i64,
  pub date:          NaiveDate,
  pub status:        String,
}

/// The caller-supplied fields of an [`AttendanceRecord`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewAttendance {
  pub student_id: i64,
  pub date:       NaiveDate,
  pub status:     String,
}

impl NewAttendance {
  pub fn new(student_id: i64, date: NaiveDate, status: impl Into<String>) -> Self {
    Self { student_id, date, status: status.into() }
  }
}

/// An attendance record joined with the student it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceEntry {
  pub attendance_id: i64,
  pub name:          String,
  pub roll_number:   String,
  pub date:          NaiveDate,
  pub status:        String,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn record_serialises_date_as_iso_day() {
    let record = AttendanceRecord {
      attendance_id: 3,
      student_id:    1,
      date:          NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
      status:        "present".into(),
    };
    let json = serde_json::to_value(&record).unwrap();
    assert_eq!(json["date"], "2024-02-01");
    assert_eq!(json["attendance_id"], 3);
  }

  #[test]
  fn new_attendance_rejects_non_date() {
    let body = r#"{"student_id":1,"date":"yesterday","status":"present"}"#;
    assert!(serde_json::from_str::<NewAttendance>(body).is_err());
  }
}
