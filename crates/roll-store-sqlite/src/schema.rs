//! SQL schema for the attendance store.

/// Applied to every pooled connection. SQLite scopes these per connection.
pub const CONNECTION_PRAGMAS: &str = "
PRAGMA foreign_keys = ON;
";

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
-- AUTOINCREMENT: ids are never reused, even after deletes.
CREATE TABLE IF NOT EXISTS students (
    student_id  INTEGER PRIMARY KEY AUTOINCREMENT,
    name        TEXT NOT NULL,
    roll_number TEXT NOT NULL
);

-- Deleting a student removes their attendance with them.
CREATE TABLE IF NOT EXISTS attendance (
    attendance_id INTEGER PRIMARY KEY AUTOINCREMENT,
    student_id    INTEGER NOT NULL
                  REFERENCES students(student_id) ON DELETE CASCADE,
    date          TEXT NOT NULL,   -- YYYY-MM-DD
    status        TEXT NOT NULL    -- free text, e.g. 'present' | 'absent'
);

CREATE INDEX IF NOT EXISTS attendance_student_idx ON attendance(student_id);
CREATE INDEX IF NOT EXISTS attendance_date_idx    ON attendance(date);

PRAGMA user_version = 1;
";
