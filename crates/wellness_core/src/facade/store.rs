//! Process-owned handle to the wellness database.
//!
//! # Invariants
//! - Constructed explicitly by the host process and handed to the façade;
//!   there is no global store.
//! - The connection is migrated before a store exists.

use crate::db::migrations::schema_version;
use crate::db::{open_db, open_db_in_memory, DbError, DbResult};
use rusqlite::Connection;
use std::path::Path;
use std::sync::{Mutex, MutexGuard};

/// Owned SQLite connection guarded for shared use.
pub struct WellnessStore {
    conn: Mutex<Connection>,
}

impl WellnessStore {
    /// Opens (and migrates) a file-backed store.
    pub fn open(path: impl AsRef<Path>) -> DbResult<Self> {
        Ok(Self::from_connection(open_db(path)?))
    }

    /// Opens an empty in-memory store.
    pub fn open_in_memory() -> DbResult<Self> {
        Ok(Self::from_connection(open_db_in_memory()?))
    }

    /// Wraps an already migrated connection.
    pub fn from_connection(conn: Connection) -> Self {
        Self {
            conn: Mutex::new(conn),
        }
    }

    /// `PRAGMA user_version` of the underlying database.
    pub fn schema_version(&self) -> DbResult<u32> {
        let conn = self.lock().ok_or(DbError::StoreLockPoisoned)?;
        schema_version(&conn)
    }

    /// Returns `None` when a previous holder panicked mid-call.
    pub(crate) fn lock(&self) -> Option<MutexGuard<'_, Connection>> {
        self.conn.lock().ok()
    }
}
