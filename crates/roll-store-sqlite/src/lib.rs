//! SQLite backend for the attendance store.
//!
//! Wraps [`tokio_rusqlite`] so all database access runs on dedicated
//! connection threads without blocking the async runtime.

mod encode;
mod pool;
mod schema;
mod store;

pub mod error;

pub use error::{Error, Result};
pub use pool::Location;
pub use store::SqliteStore;

#[cfg(test)]
mod tests;
