//! Handlers for `/students` endpoints.
//!
//! | Method   | Path | Notes |
//! |----------|------|-------|
//! | `GET`    | `/students` | Ordered by `student_id` |
//! | `POST`   | `/students` | Body: [`StudentBody`]; returns 201 + stored student |
//! | `GET`    | `/students/:id` | 404 if not found |
//! | `PUT`    | `/students/:id` | Body: [`StudentBody`]; full-field update |
//! | `DELETE` | `/students/:id` | Also deletes the student's attendance |
//! | `GET`    | `/students/:id/attendance` | The student's records, newest first |

use std::sync::Arc;

use axum::{
  Json,
  extract::State,
  http::StatusCode,
  response::IntoResponse,
};
use roll_core::{
  attendance::AttendanceRecord,
  store::AttendanceStore,
  student::{NewStudent, Student},
};
use serde::Deserialize;

use crate::{Deleted, error::{ApiError, IdPath, JsonBody}};

// ─── List ─────────────────────────────────────────────────────────────────────

/// `GET /students`
pub async fn list<S>(State(store): State<Arc<S>>) -> Result<Json<Vec<Student>>, ApiError>
where
  S: AttendanceStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let students = store
    .list_students()
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  Ok(Json(students))
}

// ─── Get one ──────────────────────────────────────────────────────────────────

/// `GET /students/:id`
pub async fn get_one<S>(
  State(store): State<Arc<S>>,
  IdPath(id): IdPath<i64>,
) -> Result<Json<Student>, ApiError>
where
  S: AttendanceStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let student = store
    .get_student(id)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?
    .ok_or_else(|| ApiError::NotFound(format!("student {id} not found")))?;
  Ok(Json(student))
}

// ─── Create / update ──────────────────────────────────────────────────────────

/// JSON body accepted by `POST /students` and `PUT /students/:id`.
///
/// Contents are free text; neither field is validated.
#[derive(Debug, Deserialize)]
pub struct StudentBody {
  pub name:        String,
  pub roll_number: String,
}

impl From<StudentBody> for NewStudent {
  fn from(b: StudentBody) -> Self {
    NewStudent { name: b.name, roll_number: b.roll_number }
  }
}

/// `POST /students` returns 201 + the stored [`Student`].
pub async fn create<S>(
  State(store): State<Arc<S>>,
  JsonBody(body): JsonBody<StudentBody>,
) -> Result<impl IntoResponse, ApiError>
where
  S: AttendanceStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let student = store
    .add_student(NewStudent::from(body))
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  Ok((StatusCode::CREATED, Json(student)))
}

/// `PUT /students/:id`
pub async fn update<S>(
  State(store): State<Arc<S>>,
  IdPath(id): IdPath<i64>,
  JsonBody(body): JsonBody<StudentBody>,
) -> Result<Json<Student>, ApiError>
where
  S: AttendanceStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let student = store
    .update_student(id, NewStudent::from(body))
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?
    .ok_or_else(|| ApiError::NotFound(format!("student {id} not found")))?;
  Ok(Json(student))
}

// ─── Delete ───────────────────────────────────────────────────────────────────

/// `DELETE /students/:id`
pub async fn delete_one<S>(
  State(store): State<Arc<S>>,
  IdPath(id): IdPath<i64>,
) -> Result<Json<Deleted<Student>>, ApiError>
where
  S: AttendanceStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let student = store
    .delete_student(id)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?
    .ok_or_else(|| ApiError::NotFound(format!("student {id} not found")))?;
  tracing::debug!(student_id = id, "student deleted");
  Ok(Json(Deleted { message: "Student deleted successfully", deleted: student }))
}

// ─── Attendance of one student ────────────────────────────────────────────────

/// `GET /students/:id/attendance`
pub async fn attendance<S>(
  State(store): State<Arc<S>>,
  IdPath(id): IdPath<i64>,
) -> Result<Json<Vec<AttendanceRecord>>, ApiError>
where
  S: AttendanceStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  store
    .get_student(id)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?
    .ok_or_else(|| ApiError::NotFound(format!("student {id} not found")))?;

  let records = store
    .student_attendance(id)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  Ok(Json(records))
}
