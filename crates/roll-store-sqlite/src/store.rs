//! [`SqliteStore`], the SQLite implementation of [`AttendanceStore`].

use rusqlite::{OptionalExtension as _, types::Value};

use roll_core::{
  attendance::{AttendanceEntry, AttendanceRecord, NewAttendance},
  store::AttendanceStore,
  student::{NewStudent, Student},
};

use crate::{
  Result,
  encode::{RawAttendance, RawEntry, encode_date, student_from_row},
  pool::{Location, Pool},
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// An attendance store backed by a SQLite database.
///
/// Cloning is cheap; the connection pool is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  pool: Pool,
}

impl SqliteStore {
  /// Open a store from a connection string (see [`Location::parse`]) with up
  /// to `pool_size` connections.
  pub async fn connect(url: &str, pool_size: usize) -> Result<Self> {
    let location = Location::parse(url)?;
    let pool = Pool::open(&location, pool_size).await?;
    tracing::info!(?location, connections = pool.size(), "attendance store ready");
    Ok(Self { pool })
  }

  /// Open an in-memory store, mostly for tests.
  pub async fn open_in_memory() -> Result<Self> {
    Ok(Self { pool: Pool::open(&Location::Memory, 1).await? })
  }

  /// Number of pooled connections.
  pub fn pool_size(&self) -> usize { self.pool.size() }

  /// Run a query returning at most one `attendance` row.
  async fn attendance_row(
    &self,
    sql:    &'static str,
    params: Vec<Value>,
  ) -> Result<Option<AttendanceRecord>> {
    let raw: Option<RawAttendance> = self
      .pool
      .get()
      .call(move |conn| {
        Ok(
          conn
            .query_row(sql, rusqlite::params_from_iter(params), RawAttendance::from_row)
            .optional()?,
        )
      })
      .await?;

    raw.map(RawAttendance::into_record).transpose()
  }

  /// Run a query returning at most one `students` row.
  async fn student_row(&self, sql: &'static str, params: Vec<Value>) -> Result<Option<Student>> {
    Ok(
      self
        .pool
        .get()
        .call(move |conn| {
          Ok(
            conn
              .query_row(sql, rusqlite::params_from_iter(params), student_from_row)
              .optional()?,
          )
        })
        .await?,
    )
  }
}

// ─── AttendanceStore impl ────────────────────────────────────────────────────

impl AttendanceStore for SqliteStore {
  type Error = crate::Error;

  // ── Students ──────────────────────────────────────────────────────────────

  async fn list_students(&self) -> Result<Vec<Student>> {
    Ok(
      self
        .pool
        .get()
        .call(|conn| {
          let mut stmt = conn.prepare(
            "SELECT student_id, name, roll_number
             FROM students
             ORDER BY student_id ASC",
          )?;
          let rows = stmt
            .query_map([], student_from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
          Ok(rows)
        })
        .await?,
    )
  }

  async fn get_student(&self, id: i64) -> Result<Option<Student>> {
    self
      .student_row(
        "SELECT student_id, name, roll_number FROM students WHERE student_id = ?1",
        vec![id.into()],
      )
      .await
  }

  async fn add_student(&self, input: NewStudent) -> Result<Student> {
    Ok(
      self
        .pool
        .get()
        .call(move |conn| {
          Ok(conn.query_row(
            "INSERT INTO students (name, roll_number) VALUES (?1, ?2)
             RETURNING student_id, name, roll_number",
            rusqlite::params![input.name, input.roll_number],
            student_from_row,
          )?)
        })
        .await?,
    )
  }

  async fn update_student(&self, id: i64, input: NewStudent) -> Result<Option<Student>> {
    self
      .student_row(
        "UPDATE students SET name = ?1, roll_number = ?2 WHERE student_id = ?3
         RETURNING student_id, name, roll_number",
        vec![input.name.into(), input.roll_number.into(), id.into()],
      )
      .await
  }

  async fn delete_student(&self, id: i64) -> Result<Option<Student>> {
    self
      .student_row(
        "DELETE FROM students WHERE student_id = ?1
         RETURNING student_id, name, roll_number",
        vec![id.into()],
      )
      .await
  }

  // ── Attendance ────────────────────────────────────────────────────────────

  async fn list_attendance(&self) -> Result<Vec<AttendanceEntry>> {
    let raws: Vec<RawEntry> = self
      .pool
      .get()
      .call(|conn| {
        let mut stmt = conn.prepare(
          "SELECT a.attendance_id, s.name, s.roll_number, a.date, a.status
           FROM attendance a
           JOIN students s ON s.student_id = a.student_id
           ORDER BY a.date DESC, a.attendance_id DESC",
        )?;
        let rows = stmt
          .query_map([], RawEntry::from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawEntry::into_entry).collect()
  }

  async fn get_attendance(&self, id: i64) -> Result<Option<AttendanceRecord>> {
    self
      .attendance_row(
        "SELECT attendance_id, student_id, date, status
         FROM attendance WHERE attendance_id = ?1",
        vec![id.into()],
      )
      .await
  }

  async fn student_attendance(&self, student_id: i64) -> Result<Vec<AttendanceRecord>> {
    let raws: Vec<RawAttendance> = self
      .pool
      .get()
      .call(move |conn| {
        let mut stmt = conn.prepare(
          "SELECT attendance_id, student_id, date, status
           FROM attendance
           WHERE student_id = ?1
           ORDER BY date DESC, attendance_id DESC",
        )?;
        let rows = stmt
          .query_map([student_id], RawAttendance::from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawAttendance::into_record).collect()
  }

  async fn mark_attendance(&self, input: NewAttendance) -> Result<AttendanceRecord> {
    let date_str = encode_date(input.date);

    let raw: RawAttendance = self
      .pool
      .get()
      .call(move |conn| {
        Ok(conn.query_row(
          "INSERT INTO attendance (student_id, date, status) VALUES (?1, ?2, ?3)
           RETURNING attendance_id, student_id, date, status",
          rusqlite::params![input.student_id, date_str, input.status],
          RawAttendance::from_row,
        )?)
      })
      .await?;

    raw.into_record()
  }

  async fn update_attendance_status(
    &self,
    id:     i64,
    status: String,
  ) -> Result<Option<AttendanceRecord>> {
    self
      .attendance_row(
        "UPDATE attendance SET status = ?1 WHERE attendance_id = ?2
         RETURNING attendance_id, student_id, date, status",
        vec![status.into(), id.into()],
      )
      .await
  }

  async fn delete_attendance(&self, id: i64) -> Result<Option<AttendanceRecord>> {
    self
      .attendance_row(
        "DELETE FROM attendance WHERE attendance_id = ?1
         RETURNING attendance_id, student_id, date, status",
        vec![id.into()],
      )
      .await
  }
}
