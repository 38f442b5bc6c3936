//! A fixed-size pool of [`tokio_rusqlite::Connection`]s.
//!
//! Each connection owns a background thread. A request borrows a connection
//! only for the duration of a single `call` closure, so the connection is
//! handed back on every exit path.

use std::{
  path::PathBuf,
  sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
  },
  time::Duration,
};

use tokio_rusqlite::Connection;

use crate::{
  Error, Result,
  schema::{CONNECTION_PRAGMAS, SCHEMA},
};

/// How long a writer waits on a locked database before failing.
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

// ─── Location ─────────────────────────────────────────────────────────────────

/// Where the database lives, parsed from a connection string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Location {
  Memory,
  File(PathBuf),
}

impl Location {
  /// Parse a connection string.
  ///
  /// Accepts a plain path, `sqlite://path`, `sqlite:path`, `:memory:` and
  /// `sqlite::memory:`. Any other URL scheme is rejected.
  pub fn parse(url: &str) -> Result<Self> {
    let trimmed = url.trim();
    let rest = trimmed
      .strip_prefix("sqlite://")
      .or_else(|| trimmed.strip_prefix("sqlite:"))
      .unwrap_or(trimmed);

    if rest.is_empty() || rest.contains("://") {
      return Err(Error::UnsupportedUrl(url.to_owned()));
    }
    if rest == ":memory:" {
      return Ok(Self::Memory);
    }
    Ok(Self::File(PathBuf::from(rest)))
  }
}

// ─── Pool ─────────────────────────────────────────────────────────────────────

/// Cloning is cheap; connections are reference-counted and shared.
#[derive(Clone)]
pub struct Pool {
  conns: Arc<[Connection]>,
  next:  Arc<AtomicUsize>,
}

impl Pool {
  /// Open `size` connections to `location` and apply the schema.
  ///
  /// In-memory databases are private to their connection, so `Memory` always
  /// yields a pool of one.
  pub async fn open(location: &Location, size: usize) -> Result<Self> {
    let size = match location {
      Location::Memory => 1,
      Location::File(_) => size.max(1),
    };

    let mut conns = Vec::with_capacity(size);
    for i in 0..size {
      let conn = match location {
        Location::Memory => Connection::open_in_memory().await?,
        Location::File(path) => Connection::open(path.clone()).await?,
      };
      let first = i == 0;
      let file_backed = matches!(location, Location::File(_));
      conn
        .call(move |conn| {
          conn.busy_timeout(BUSY_TIMEOUT)?;
          conn.execute_batch(CONNECTION_PRAGMAS)?;
          if first {
            // Persists in the file, so once is enough.
            if file_backed {
              conn.pragma_update_and_check(None, "journal_mode", "WAL", |_| Ok(()))?;
            }
            conn.execute_batch(SCHEMA)?;
          }
          Ok(())
        })
        .await?;
      conns.push(conn);
    }

    tracing::debug!(?location, size, "opened sqlite connection pool");

    Ok(Self { conns: conns.into(), next: Arc::new(AtomicUsize::new(0)) })
  }

  /// Borrow the next connection, round-robin.
  pub fn get(&self) -> &Connection {
    let i = self.next.fetch_add(1, Ordering::Relaxed) % self.conns.len();
    &self.conns[i]
  }

  pub fn size(&self) -> usize { self.conns.len() }
}
