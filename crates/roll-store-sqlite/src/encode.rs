//! Encoding and decoding helpers between domain types and the plain-text
//! representations stored in SQLite columns.
//!
//! Dates are stored as `YYYY-MM-DD` strings, so lexical order in SQL matches
//! chronological order.

use chrono::NaiveDate;
use roll_core::{
  attendance::{AttendanceEntry, AttendanceRecord},
  student::Student,
};
use rusqlite::Row;

use crate::{Error, Result};

// ─── NaiveDate ────────────────────────────────────────────────────────────────

const DATE_FORMAT: &str = "%Y-%m-%d";

pub fn encode_date(d: NaiveDate) -> String { d.format(DATE_FORMAT).to_string() }

pub fn decode_date(s: &str) -> Result<NaiveDate> {
  NaiveDate::parse_from_str(s, DATE_FORMAT)
    .map_err(|e| Error::DateParse(format!("{s:?}: {e}")))
}

// ─── Student ──────────────────────────────────────────────────────────────────

/// Expects columns `student_id, name, roll_number`.
pub fn student_from_row(row: &Row<'_>) -> rusqlite::Result<Student> {
  Ok(Student {
    student_id:  row.get(0)?,
    name:        row.get(1)?,
    roll_number: row.get(2)?,
  })
}

// ─── Raw row types ────────────────────────────────────────────────────────────

/// An `attendance` row as read from SQLite, before date decoding.
#[derive(Debug)]
pub struct RawAttendance {
  pub attendance_id: i64,
  pub student_id:    i64,
  pub date:          String,
  pub status:        String,
}

impl RawAttendance {
  /// Expects columns `attendance_id, student_id, date, status`.
  pub fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      attendance_id: row.get(0)?,
      student_id:    row.get(1)?,
      date:          row.get(2)?,
      status:        row.get(3)?,
    })
  }

  pub fn into_record(self) -> Result<AttendanceRecord> {
    Ok(AttendanceRecord {
      attendance_id: self.attendance_id,
      student_id:    self.student_id,
      date:          decode_date(&self.date)?,
      status:        self.status,
    })
  }
}

/// A joined `attendance` ⋈ `students` row, before date decoding.
#[derive(Debug)]
pub struct RawEntry {
  pub attendance_id: i64,
  pub name:          String,
  pub roll_number:   String,
  pub date:          String,
  pub status:        String,
}

impl RawEntry {
  /// Expects columns `attendance_id, name, roll_number, date, status`.
  pub fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      attendance_id: row.get(0)?,
      name:          row.get(1)?,
      roll_number:   row.get(2)?,
      date:          row.get(3)?,
      status:        row.get(4)?,
    })
  }

  pub fn into_entry(self) -> Result<AttendanceEntry> {
    Ok(AttendanceEntry {
      attendance_id: self.attendance_id,
      name:          self.name,
      roll_number:   self.roll_number,
      date:          decode_date(&self.date)?,
      status:        self.status,
    })
  }
}
