//! JSON REST API for attendance tracking.
//!
//! Exposes an axum [`Router`] backed by any
//! [`roll_core::store::AttendanceStore`]. CORS, tracing, and transport
//! concerns are the caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! .merge(roll_api::api_router(store.clone()))
//! ```

pub mod attendance;
pub mod error;
pub mod students;

use std::sync::Arc;

use axum::{Router, routing::get};
use roll_core::store::AttendanceStore;
use serde::Serialize;

pub use error::{ApiError, IdPath, JsonBody};

/// Body returned by the `DELETE` endpoints.
#[derive(Debug, Serialize)]
pub struct Deleted<T> {
  pub message: &'static str,
  pub deleted: T,
}

/// Build a fully-materialised API router for `store`.
///
/// The returned `Router<()>` can be merged into any parent router regardless
/// of its own state type.
pub fn api_router<S>(store: Arc<S>) -> Router<()>
where
  S: AttendanceStore + 'static,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  Router::new()
    // Students
    .route("/students", get(students::list::<S>).post(students::create::<S>))
    .route(
      "/students/{id}",
      get(students::get_one::<S>)
        .put(students::update::<S>)
        .delete(students::delete_one::<S>),
    )
    .route("/students/{id}/attendance", get(students::attendance::<S>))
    // Attendance
    .route("/attendance", get(attendance::list::<S>).post(attendance::mark::<S>))
    .route(
      "/attendance/{id}",
      get(attendance::get_one::<S>)
        .put(attendance::update_status::<S>)
        .delete(attendance::delete_one::<S>),
    )
    .with_state(store)
}

// ─── Integration tests ────────────────────────────────────────────────────────
