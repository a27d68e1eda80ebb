//! Department domain model.
//!
//! # Responsibility
//! - Define the data object mapped onto the `departments` table.
//! - Expose lifecycle helpers for transient/persisted state.
//!
//! # Invariants
//! - `id` is assigned only by storage (`save`), never by callers of `new`.
//! - A detached instance (deleted row) looks exactly like a transient one.

use serde::Serialize;
use std::cell::RefCell;
use std::fmt::{Display, Formatter};
use std::rc::Rc;

/// SQLite rowid of a department.
pub type DepartmentId = i64;

/// Shared reference to the single live object representing a row.
///
/// Two handles point at the same row object iff `Rc::ptr_eq` holds.
pub type DepartmentHandle = Rc<RefCell<Department>>;

/// Department data object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Department {
    /// Storage-assigned primary key. `None` while transient or detached.
    pub id: Option<DepartmentId>,
    pub name: String,
    pub location: String,
}

impl Department {
    /// Creates a transient department (`id = None`).
    pub fn new(name: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            location: location.into(),
        }
    }

    /// Creates a department for an existing row id.
    ///
    /// Used when materializing rows read from storage.
    pub fn with_id(
        id: DepartmentId,
        name: impl Into<String>,
        location: impl Into<String>,
    ) -> Self {
        Self {
            id: Some(id),
            name: name.into(),
            location: location.into(),
        }
    }

    /// Returns whether this instance currently maps onto a stored row.
    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }

    /// Wraps this department into a shareable handle.
    pub fn into_handle(self) -> DepartmentHandle {
        Rc::new(RefCell::new(self))
    }
}

impl Display for Department {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.id {
            Some(id) => write!(f, "<Department {id}: {}, {}>", self.name, self.location),
            None => write!(f, "<Department None: {}, {}>", self.name, self.location),
        }
    }
}

/// Raw `(id, name, location)` row as returned by storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepartmentRow {
    pub id: DepartmentId,
    pub name: String,
    pub location: String,
}

impl DepartmentRow {
    pub fn new(id: DepartmentId, name: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            location: location.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Department;

    #[test]
    fn new_department_is_transient() {
        let department = Department::new("Payroll", "Building A, 5th Floor");
        assert_eq!(department.id, None);
        assert!(!department.is_persisted());
    }

    #[test]
    fn display_matches_repr_shape() {
        let persisted = Department::with_id(3, "Accounting", "Building B, 1st Floor");
        assert_eq!(
            persisted.to_string(),
            "<Department 3: Accounting, Building B, 1st Floor>"
        );

        let transient = Department::new("Payroll", "Building A");
        assert_eq!(transient.to_string(), "<Department None: Payroll, Building A>");
    }
}
