//! SQLite storage context and connection bootstrap entry points.
//!
//! # Responsibility
//! - Own the single SQLite connection used by the department repository.
//! - Own the department identity map alongside that connection.
//!
//! # Invariants
//! - One `StorageContext` per database; nothing in core keeps ambient
//!   connection or cache state.
//! - Write statements run in autocommit mode: every statement commits on its own.

use crate::model::department::Department;
use crate::repo::identity_map::IdentityMap;
use rusqlite::Connection;
use std::cell::{RefCell, RefMut};

mod open;

pub use open::{open_db, open_db_in_memory};

/// Database file used by the reset binary when no path is configured.
pub const DEFAULT_DB_FILE: &str = "company.db";

pub type DbResult<T> = Result<T, rusqlite::Error>;

/// Connection plus the identity cache of live department objects.
///
/// The cache lives in a `RefCell` so repositories can reconcile reads through
/// a shared `&StorageContext`. The context is `!Sync`; single-threaded use only.
pub struct StorageContext {
    conn: Connection,
    departments: RefCell<IdentityMap<Department>>,
}

impl StorageContext {
    /// Wraps an already-open connection with an empty identity map.
    pub fn from_connection(conn: Connection) -> Self {
        Self {
            conn,
            departments: RefCell::new(IdentityMap::new()),
        }
    }

    /// Borrows the underlying connection.
    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Mutable access to the department identity map.
    ///
    /// Panics if the map is already borrowed; repository methods never hold
    /// the borrow across calls.
    pub fn departments(&self) -> RefMut<'_, IdentityMap<Department>> {
        self.departments.borrow_mut()
    }

    /// Number of live departments currently cached.
    pub fn cached_departments(&self) -> usize {
        self.departments.borrow().len()
    }

    /// Tears the context down, dropping the cache and returning the connection.
    pub fn into_connection(self) -> Connection {
        self.conn
    }
}
