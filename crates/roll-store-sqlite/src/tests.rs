//! Integration tests for `SqliteStore` against an in-memory database.

use chrono::NaiveDate;
use roll_core::{
  attendance::NewAttendance,
  store::AttendanceStore,
  student::NewStudent,
};

use crate::{Error, SqliteStore};

async fn store() -> SqliteStore {
  SqliteStore::open_in_memory()
    .await
    .expect("in-memory store")
}

fn day(y: i32, m: u32, d: u32) -> NaiveDate { NaiveDate::from_ymd_opt(y, m, d).unwrap() }

// ─── Students ────────────────────────────────────────────────────────────────

#[tokio::test]
async fn add_and_get_student() {
  let s = store().await;

  let student = s.add_student(NewStudent::new("Amit", "101")).await.unwrap();
  assert!(student.student_id > 0);
  assert_eq!(student.name, "Amit");
  assert_eq!(student.roll_number, "101");

  let fetched = s.get_student(student.student_id).await.unwrap();
  assert_eq!(fetched, Some(student));
}

#[tokio::test]
async fn get_student_missing_returns_none() {
  let s = store().await;
  assert!(s.get_student(999_999).await.unwrap().is_none());
}

#[tokio::test]
async fn generated_ids_are_fresh_even_after_delete() {
  let s = store().await;

  let a = s.add_student(NewStudent::new("Amit", "101")).await.unwrap();
  s.delete_student(a.student_id).await.unwrap();
  let b = s.add_student(NewStudent::new("Priya", "102")).await.unwrap();

  assert!(b.student_id > a.student_id);
}

#[tokio::test]
async fn list_students_ordered_by_id() {
  let s = store().await;
  s.add_student(NewStudent::new("Zoya", "103")).await.unwrap();
  s.add_student(NewStudent::new("Amit", "101")).await.unwrap();
  s.add_student(NewStudent::new("Ravi", "102")).await.unwrap();

  let all = s.list_students().await.unwrap();
  assert_eq!(all.len(), 3);
  assert!(all.windows(2).all(|w| w[0].student_id < w[1].student_id));
  assert_eq!(all[0].name, "Zoya");
}

#[tokio::test]
async fn update_student_overwrites_fields() {
  let s = store().await;
  let student = s.add_student(NewStudent::new("Amit", "101")).await.unwrap();

  let updated = s
    .update_student(student.student_id, NewStudent::new("Amit Kumar", "201"))
    .await
    .unwrap()
    .unwrap();
  assert_eq!(updated.student_id, student.student_id);
  assert_eq!(updated.name, "Amit Kumar");
  assert_eq!(updated.roll_number, "201");

  let fetched = s.get_student(student.student_id).await.unwrap().unwrap();
  assert_eq!(fetched, updated);
}

#[tokio::test]
async fn update_missing_student_returns_none() {
  let s = store().await;
  let result = s
    .update_student(999_999, NewStudent::new("Nobody", "0"))
    .await
    .unwrap();
  assert!(result.is_none());
}

#[tokio::test]
async fn delete_student_returns_row_and_removes_it() {
  let s = store().await;
  let student = s.add_student(NewStudent::new("Amit", "101")).await.unwrap();

  let deleted = s.delete_student(student.student_id).await.unwrap();
  assert_eq!(deleted, Some(student.clone()));

  let all = s.list_students().await.unwrap();
  assert!(all.iter().all(|st| st.student_id != student.student_id));
  assert!(s.delete_student(student.student_id).await.unwrap().is_none());
}

#[tokio::test]
async fn delete_student_cascades_to_attendance() {
  let s = store().await;
  let student = s.add_student(NewStudent::new("Amit", "101")).await.unwrap();
  let record = s
    .mark_attendance(NewAttendance::new(student.student_id, day(2024, 1, 1), "present"))
    .await
    .unwrap();

  s.delete_student(student.student_id).await.unwrap();

  assert!(s.get_attendance(record.attendance_id).await.unwrap().is_none());
  assert!(s.list_attendance().await.unwrap().is_empty());
}

// ─── Attendance ──────────────────────────────────────────────────────────────

#[tokio::test]
async fn mark_attendance_and_get() {
  let s = store().await;
  let student = s.add_student(NewStudent::new("Amit", "101")).await.unwrap();

  let record = s
    .mark_attendance(NewAttendance::new(student.student_id, day(2024, 1, 1), "present"))
    .await
    .unwrap();
  assert!(record.attendance_id > 0);
  assert_eq!(record.student_id, student.student_id);
  assert_eq!(record.date, day(2024, 1, 1));
  assert_eq!(record.status, "present");

  let fetched = s.get_attendance(record.attendance_id).await.unwrap();
  assert_eq!(fetched, Some(record));
}

#[tokio::test]
async fn mark_attendance_for_unknown_student_fails() {
  let s = store().await;
  let result = s
    .mark_attendance(NewAttendance::new(424_242, day(2024, 1, 1), "present"))
    .await;
  assert!(matches!(result, Err(Error::Database(_))));
}

#[tokio::test]
async fn list_attendance_newest_first_with_student_fields() {
  let s = store().await;
  let student = s.add_student(NewStudent::new("Amit", "101")).await.unwrap();

  s.mark_attendance(NewAttendance::new(student.student_id, day(2024, 1, 1), "present"))
    .await
    .unwrap();
  s.mark_attendance(NewAttendance::new(student.student_id, day(2024, 2, 1), "absent"))
    .await
    .unwrap();

  let entries = s.list_attendance().await.unwrap();
  assert_eq!(entries.len(), 2);
  assert_eq!(entries[0].date, day(2024, 2, 1));
  assert_eq!(entries[0].status, "absent");
  assert_eq!(entries[1].date, day(2024, 1, 1));
  assert!(entries.iter().all(|e| e.name == "Amit" && e.roll_number == "101"));
}

#[tokio::test]
async fn student_attendance_filters_by_student() {
  let s = store().await;
  let amit = s.add_student(NewStudent::new("Amit", "101")).await.unwrap();
  let priya = s.add_student(NewStudent::new("Priya", "102")).await.unwrap();

  s.mark_attendance(NewAttendance::new(amit.student_id, day(2024, 1, 1), "present"))
    .await
    .unwrap();
  s.mark_attendance(NewAttendance::new(priya.student_id, day(2024, 1, 1), "absent"))
    .await
    .unwrap();
  s.mark_attendance(NewAttendance::new(amit.student_id, day(2024, 1, 8), "absent"))
    .await
    .unwrap();

  let records = s.student_attendance(amit.student_id).await.unwrap();
  assert_eq!(records.len(), 2);
  assert!(records.iter().all(|r| r.student_id == amit.student_id));
  assert_eq!(records[0].date, day(2024, 1, 8));
}

#[tokio::test]
async fn update_status_leaves_student_and_date() {
  let s = store().await;
  let student = s.add_student(NewStudent::new("Amit", "101")).await.unwrap();
  let record = s
    .mark_attendance(NewAttendance::new(student.student_id, day(2024, 1, 1), "absent"))
    .await
    .unwrap();

  let updated = s
    .update_attendance_status(record.attendance_id, "present".into())
    .await
    .unwrap()
    .unwrap();
  assert_eq!(updated.attendance_id, record.attendance_id);
  assert_eq!(updated.student_id, record.student_id);
  assert_eq!(updated.date, record.date);
  assert_eq!(updated.status, "present");
}

#[tokio::test]
async fn update_status_missing_returns_none() {
  let s = store().await;
  let result = s
    .update_attendance_status(999_999, "present".into())
    .await
    .unwrap();
  assert!(result.is_none());
}

#[tokio::test]
async fn delete_attendance_returns_row() {
  let s = store().await;
  let student = s.add_student(NewStudent::new("Amit", "101")).await.unwrap();
  let record = s
    .mark_attendance(NewAttendance::new(student.student_id, day(2024, 1, 1), "present"))
    .await
    .unwrap();

  let deleted = s.delete_attendance(record.attendance_id).await.unwrap();
  assert_eq!(deleted, Some(record.clone()));
  assert!(s.delete_attendance(record.attendance_id).await.unwrap().is_none());

  // The student is untouched.
  assert!(s.get_student(student.student_id).await.unwrap().is_some());
}

// ─── File-backed pool ────────────────────────────────────────────────────────

#[tokio::test]
async fn file_store_shares_rows_across_pooled_connections() {
  let path = std::env::temp_dir().join(format!(
    "roll-store-test-{}-{}.db",
    std::process::id(),
    line!()
  ));
  let _ = std::fs::remove_file(&path);

  let s = SqliteStore::connect(&format!("sqlite://{}", path.display()), 3)
    .await
    .unwrap();
  assert_eq!(s.pool_size(), 3);

  let student = s.add_student(NewStudent::new("Amit", "101")).await.unwrap();
  // Round-robin: consecutive reads land on different connections.
  for _ in 0..3 {
    let fetched = s.get_student(student.student_id).await.unwrap();
    assert_eq!(fetched.as_ref(), Some(&student));
  }

  // Foreign keys are enforced on every connection.
  for _ in 0..3 {
    let result = s
      .mark_attendance(NewAttendance::new(424_242, day(2024, 1, 1), "present"))
      .await;
    assert!(result.is_err());
  }

  drop(s);
  let _ = std::fs::remove_file(&path);
}
