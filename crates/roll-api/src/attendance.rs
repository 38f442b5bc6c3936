//! Handlers for `/attendance` endpoints.
//!
//! | Method   | Path | Notes |
//! |----------|------|-------|
//! | `GET`    | `/attendance` | Joined with student name and roll number, newest date first |
//! | `POST`   | `/attendance` | Body: [`MarkBody`]; returns 201 + stored record |
//! | `GET`    | `/attendance/:id` | 404 if not found |
//! | `PUT`    | `/attendance/:id` | Body: `{"status":"..."}`; only the status changes |
//! | `DELETE` | `/attendance/:id` | |

use std::sync::Arc;

use axum::{
  Json,
  extract::State,
  http::StatusCode,
  response::IntoResponse,
};
use chrono::NaiveDate;
use roll_core::{
  attendance::{AttendanceEntry, AttendanceRecord, NewAttendance},
  store::AttendanceStore,
};
use serde::Deserialize;

use crate::{Deleted, error::{ApiError, IdPath, JsonBody}};

// ─── List ─────────────────────────────────────────────────────────────────────

/// `GET /attendance`
pub async fn list<S>(
  State(store): State<Arc<S>>,
) -> Result<Json<Vec<AttendanceEntry>>, ApiError>
where
  S: AttendanceStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let entries = store
    .list_attendance()
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  Ok(Json(entries))
}

// ─── Get one ──────────────────────────────────────────────────────────────────

/// `GET /attendance/:id`
pub async fn get_one<S>(
  State(store): State<Arc<S>>,
  IdPath(id): IdPath<i64>,
) -> Result<Json<AttendanceRecord>, ApiError>
where
  S: AttendanceStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let record = store
    .get_attendance(id)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?
    .ok_or_else(|| ApiError::NotFound(format!("attendance record {id} not found")))?;
  Ok(Json(record))
}

// ─── Mark ─────────────────────────────────────────────────────────────────────

/// JSON body accepted by `POST /attendance`.
#[derive(Debug, Deserialize)]
pub struct MarkBody {
  pub student_id: i64,
  /// `YYYY-MM-DD`.
  pub date:       NaiveDate,
  /// Free text, e.g. `"present"` or `"absent"`.
  pub status:     String,
}

impl From<MarkBody> for NewAttendance {
  fn from(b: MarkBody) -> Self {
    NewAttendance { student_id: b.student_id, date: b.date, status: b.status }
  }
}

/// `POST /attendance` returns 201 + the stored [`AttendanceRecord`].
///
/// An unknown `student_id` violates the foreign key and surfaces as a 500.
pub async fn mark<S>(
  State(store): State<Arc<S>>,
  JsonBody(body): JsonBody<MarkBody>,
) -> Result<impl IntoResponse, ApiError>
where
  S: AttendanceStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let record = store
    .mark_attendance(NewAttendance::from(body))
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  Ok((StatusCode::CREATED, Json(record)))
}

// ─── Update status ────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct StatusBody {
  pub status: String,
}

/// `PUT /attendance/:id` with body `{"status":"..."}`.
pub async fn update_status<S>(
  State(store): State<Arc<S>>,
  IdPath(id): IdPath<i64>,
  JsonBody(body): JsonBody<StatusBody>,
) -> Result<Json<AttendanceRecord>, ApiError>
where
  S: AttendanceStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let record = store
    .update_attendance_status(id, body.status)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?
    .ok_or_else(|| ApiError::NotFound(format!("attendance record {id} not found")))?;
  Ok(Json(record))
}

// ─── Delete ───────────────────────────────────────────────────────────────────

/// `DELETE /attendance/:id`
pub async fn delete_one<S>(
  State(store): State<Arc<S>>,
  IdPath(id): IdPath<i64>,
) -> Result<Json<Deleted<AttendanceRecord>>, ApiError>
where
  S: AttendanceStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let record = store
    .delete_attendance(id)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?
    .ok_or_else(|| ApiError::NotFound(format!("attendance record {id} not found")))?;
  tracing::debug!(attendance_id = id, "attendance record deleted");
  Ok(Json(Deleted { message: "Attendance record deleted successfully", deleted: record }))
}
