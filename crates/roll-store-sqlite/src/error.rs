//! Error type for `roll-store-sqlite`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("database error: {0}")]
  Database(#[from] tokio_rusqlite::Error),

  #[error("date parse error: {0}")]
  DateParse(String),

  #[error("unsupported connection string: {0:?}")]
  UnsupportedUrl(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
