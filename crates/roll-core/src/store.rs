//! The `AttendanceStore` trait.
//!
//! The trait is implemented by storage backends (e.g. `roll-store-sqlite`).
//! The API layer depends on this abstraction, not on any concrete backend.

use std::future::Future;

use crate::{
  attendance::{AttendanceEntry, AttendanceRecord, NewAttendance},
  student::{NewStudent, Student},
};

/// Abstraction over a relational attendance store.
///
/// Lookups and mutations addressed by id return `None` when no row matched,
/// so callers can tell "not found" apart from a store failure.
///
/// All methods return `Send` futures so the trait can be used in multi-threaded
/// async runtimes (e.g. tokio with `axum`).
pub trait AttendanceStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  // ── Students ──────────────────────────────────────────────────────────

  /// All students, ordered by `student_id` ascending.
  fn list_students(
    &self,
  ) -> impl Future<Output = Result<Vec<Student>, Self::Error>> + Send + '_;

  /// Retrieve a student by id. Returns `None` if not found.
  fn get_student(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<Option<Student>, Self::Error>> + Send + '_;

  /// Insert a student and return the stored row.
  fn add_student(
    &self,
    input: NewStudent,
  ) -> impl Future<Output = Result<Student, Self::Error>> + Send + '_;

  /// Overwrite every mutable field of a student.
  fn update_student(
    &self,
    id: i64,
    input: NewStudent,
  ) -> impl Future<Output = Result<Option<Student>, Self::Error>> + Send + '_;

  /// Delete a student and return the removed row.
  ///
  /// Attendance records referencing the student are deleted with it.
  fn delete_student(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<Option<Student>, Self::Error>> + Send + '_;

  // ── Attendance ────────────────────────────────────────────────────────

  /// All attendance records joined with their students, newest date first.
  fn list_attendance(
    &self,
  ) -> impl Future<Output = Result<Vec<AttendanceEntry>, Self::Error>> + Send + '_;

  /// Retrieve an attendance record by id. Returns `None` if not found.
  fn get_attendance(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<Option<AttendanceRecord>, Self::Error>> + Send + '_;

  /// Attendance records of a single student, newest date first.
  fn student_attendance(
    &self,
    student_id: i64,
  ) -> impl Future<Output = Result<Vec<AttendanceRecord>, Self::Error>> + Send + '_;

  /// Insert an attendance record.
  ///
  /// Fails with a store error if `student_id` does not reference an existing
  /// student.
  fn mark_attendance(
    &self,
    input: NewAttendance,
  ) -> impl Future<Output = Result<AttendanceRecord, Self::Error>> + Send + '_;

  /// Replace the `status` of a record. `student_id` and `date` are untouched.
  fn update_attendance_status(
    &self,
    id: i64,
    status: String,
  ) -> impl Future<Output = Result<Option<AttendanceRecord>, Self::Error>> + Send + '_;

  /// Delete an attendance record and return the removed row.
  fn delete_attendance(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<Option<AttendanceRecord>, Self::Error>> + Send + '_;
}
