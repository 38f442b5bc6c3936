//! Students on the roster.

use serde::{Deserialize, Serialize};

/// A stored student. `student_id` is generated by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
  pub student_id:  i64,
  pub name:        String,
  /// Expected to be unique per institution, but not enforced.
  pub roll_number: String,
}

/// The caller-supplied fields of a [`Student`].
///
/// Used both for inserts and for full-field updates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewStudent {
  pub name:        String,
  pub roll_number: String,
}

impl NewStudent {
  pub fn new(name: impl Into<String>, roll_number: impl Into<String>) -> Self {
    Self { name: name.into(), roll_number: roll_number.into() }
  }
}
