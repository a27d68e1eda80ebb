//! Department repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Manage the `departments` table lifecycle (create/drop).
//! - Provide save/update/delete for live department handles.
//! - Materialize rows into the identity map so one row maps onto one object.
//!
//! # Invariants
//! - `save` only accepts transient instances.
//! - After `delete`, the row and its cache entry are gone and `id` is `None`.
//! - Reads refresh cached objects in place instead of allocating duplicates.

use crate::db::StorageContext;
use crate::model::department::{Department, DepartmentHandle, DepartmentId, DepartmentRow};
use log::{debug, warn};
use rusqlite::{params, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::rc::Rc;

const CREATE_TABLE_SQL: &str = "CREATE TABLE IF NOT EXISTS departments (
    id INTEGER PRIMARY KEY,
    name TEXT,
    location TEXT
);";

const DROP_TABLE_SQL: &str = "DROP TABLE IF EXISTS departments;";

const DEPARTMENT_SELECT_SQL: &str = "SELECT
    id,
    name,
    location
FROM departments";

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for department persistence and lookup.
#[derive(Debug)]
pub enum RepoError {
    /// Storage-layer failure, passed through as reported by SQLite.
    Db(rusqlite::Error),
    /// `save` was called on an instance that already has a row.
    AlreadyPersisted(DepartmentId),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::AlreadyPersisted(id) => {
                write!(f, "department {id} is already persisted; use update instead")
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::AlreadyPersisted(_) => None,
        }
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(value)
    }
}

/// Repository interface for department schema, persistence and retrieval.
pub trait DepartmentRepository {
    /// Ensures the `departments` table exists. No-op when present.
    fn create_table(&self) -> RepoResult<()>;
    /// Removes the `departments` table when present and empties the identity map.
    ///
    /// Every evicted object is detached (`id = None`), since rowids restart
    /// once the table is recreated.
    fn drop_table(&self) -> RepoResult<()>;
    /// Inserts a transient department and registers it in the identity map.
    fn save(&self, department: &DepartmentHandle) -> RepoResult<DepartmentId>;
    /// Writes current `name`/`location` onto the row matching `id`.
    fn update(&self, department: &DepartmentHandle) -> RepoResult<()>;
    /// Deletes the row matching `id`, evicts it from the cache and detaches the object.
    fn delete(&self, department: &DepartmentHandle) -> RepoResult<()>;
    /// Reconciles a raw row against the identity map.
    ///
    /// A cached object that is currently borrowed is returned without the
    /// in-place refresh.
    fn instance_from_db(&self, row: Option<DepartmentRow>) -> Option<DepartmentHandle>;
    /// Returns every stored department in storage order.
    fn get_all(&self) -> RepoResult<Vec<DepartmentHandle>>;
    fn find_by_id(&self, id: DepartmentId) -> RepoResult<Option<DepartmentHandle>>;
    /// Returns the first department whose name matches exactly.
    fn find_by_name(&self, name: &str) -> RepoResult<Option<DepartmentHandle>>;
}

/// SQLite-backed department repository bound to one storage context.
pub struct SqliteDepartmentRepository<'ctx> {
    ctx: &'ctx StorageContext,
}

impl<'ctx> SqliteDepartmentRepository<'ctx> {
    pub fn new(ctx: &'ctx StorageContext) -> Self {
        Self { ctx }
    }

    fn fetch_one(
        &self,
        sql: &str,
        value: &dyn rusqlite::ToSql,
    ) -> RepoResult<Option<DepartmentRow>> {
        let mut stmt = self.ctx.connection().prepare(sql)?;
        let mut rows = stmt.query([value])?;
        match rows.next()? {
            Some(row) => Ok(Some(parse_department_row(row)?)),
            None => Ok(None),
        }
    }
}

impl DepartmentRepository for SqliteDepartmentRepository<'_> {
    fn create_table(&self) -> RepoResult<()> {
        self.ctx.connection().execute_batch(CREATE_TABLE_SQL)?;
        debug!("event=table_create module=repo status=ok table=departments");
        Ok(())
    }

    fn drop_table(&self) -> RepoResult<()> {
        self.ctx.connection().execute_batch(DROP_TABLE_SQL)?;
        let evicted = self.ctx.departments().drain();
        let mut detached = 0usize;
        for handle in &evicted {
            match handle.try_borrow_mut() {
                Ok(mut live) => {
                    live.id = None;
                    detached += 1;
                }
                Err(_) => warn!(
                    "event=table_drop module=repo status=degraded error_code=handle_borrowed"
                ),
            }
        }
        debug!("event=table_drop module=repo status=ok table=departments detached={detached}");
        Ok(())
    }

    fn save(&self, department: &DepartmentHandle) -> RepoResult<DepartmentId> {
        let id = {
            let mut current = department.borrow_mut();
            if let Some(id) = current.id {
                return Err(RepoError::AlreadyPersisted(id));
            }

            let conn = self.ctx.connection();
            conn.execute(
                "INSERT INTO departments (name, location) VALUES (?1, ?2);",
                params![current.name.as_str(), current.location.as_str()],
            )?;
            let id = conn.last_insert_rowid();
            current.id = Some(id);
            id
        };

        self.ctx.departments().insert(id, Rc::clone(department));
        debug!("event=department_save module=repo status=ok id={id}");
        Ok(id)
    }

    fn update(&self, department: &DepartmentHandle) -> RepoResult<()> {
        let current = department.borrow();
        let changed = self.ctx.connection().execute(
            "UPDATE departments
             SET
                name = ?1,
                location = ?2
             WHERE id = ?3;",
            params![current.name.as_str(), current.location.as_str(), current.id],
        )?;

        debug!(
            "event=department_update module=repo status=ok id={:?} rows={changed}",
            current.id
        );
        Ok(())
    }

    fn delete(&self, department: &DepartmentHandle) -> RepoResult<()> {
        let id = department.borrow().id;
        let changed = self
            .ctx
            .connection()
            .execute("DELETE FROM departments WHERE id = ?1;", params![id])?;

        if let Some(id) = id {
            self.ctx.departments().remove(id);
        }
        department.borrow_mut().id = None;

        debug!("event=department_delete module=repo status=ok id={id:?} rows={changed}");
        Ok(())
    }

    fn instance_from_db(&self, row: Option<DepartmentRow>) -> Option<DepartmentHandle> {
        let row = row?;

        let cached = self.ctx.departments().get(row.id);
        if let Some(handle) = cached {
            match handle.try_borrow_mut() {
                Ok(mut live) => {
                    live.name = row.name;
                    live.location = row.location;
                }
                Err(_) => debug!(
                    "event=department_refresh module=repo status=skipped id={} reason=borrowed",
                    row.id
                ),
            }
            return Some(handle);
        }

        let handle = Department::with_id(row.id, row.name, row.location).into_handle();
        self.ctx.departments().insert(row.id, Rc::clone(&handle));
        Some(handle)
    }

    fn get_all(&self) -> RepoResult<Vec<DepartmentHandle>> {
        let mut stmt = self
            .ctx
            .connection()
            .prepare(&format!("{DEPARTMENT_SELECT_SQL};"))?;
        let mut rows = stmt.query([])?;
        let mut departments = Vec::new();

        while let Some(row) = rows.next()? {
            let row = parse_department_row(row)?;
            departments.extend(self.instance_from_db(Some(row)));
        }

        Ok(departments)
    }

    fn find_by_id(&self, id: DepartmentId) -> RepoResult<Option<DepartmentHandle>> {
        let row = self.fetch_one(&format!("{DEPARTMENT_SELECT_SQL} WHERE id = ?1;"), &id)?;
        Ok(self.instance_from_db(row))
    }

    fn find_by_name(&self, name: &str) -> RepoResult<Option<DepartmentHandle>> {
        let row = self.fetch_one(&format!("{DEPARTMENT_SELECT_SQL} WHERE name = ?1;"), &name)?;
        Ok(self.instance_from_db(row))
    }
}

fn parse_department_row(row: &Row<'_>) -> rusqlite::Result<DepartmentRow> {
    Ok(DepartmentRow {
        id: row.get("id")?,
        name: row.get::<_, Option<String>>("name")?.unwrap_or_default(),
        location: row.get::<_, Option<String>>("location")?.unwrap_or_default(),
    })
}
