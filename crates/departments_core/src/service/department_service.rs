//! Department use-case service.
//!
//! # Responsibility
//! - Provide `create` (construct + save) on top of the repository.
//! - Pass the remaining CRUD and lookup calls through unchanged.
//!
//! # Invariants
//! - Service APIs never bypass repository persistence contracts.
//! - Service layer remains storage-agnostic.

use crate::model::department::{Department, DepartmentHandle, DepartmentId};
use crate::repo::department_repo::{DepartmentRepository, RepoResult};

/// Use-case service wrapper for department operations.
pub struct DepartmentService<R: DepartmentRepository> {
    repo: R,
}

impl<R: DepartmentRepository> DepartmentService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn create_table(&self) -> RepoResult<()> {
        self.repo.create_table()
    }

    pub fn drop_table(&self) -> RepoResult<()> {
        self.repo.drop_table()
    }

    /// Builds a transient department and saves it immediately.
    ///
    /// # Contract
    /// - Returned handle has `id = Some(_)` and is the cached live object.
    pub fn create(
        &self,
        name: impl Into<String>,
        location: impl Into<String>,
    ) -> RepoResult<DepartmentHandle> {
        let department = Department::new(name, location).into_handle();
        self.repo.save(&department)?;
        Ok(department)
    }

    pub fn save(&self, department: &DepartmentHandle) -> RepoResult<DepartmentId> {
        self.repo.save(department)
    }

    pub fn update(&self, department: &DepartmentHandle) -> RepoResult<()> {
        self.repo.update(department)
    }

    pub fn delete(&self, department: &DepartmentHandle) -> RepoResult<()> {
        self.repo.delete(department)
    }

    pub fn get_all(&self) -> RepoResult<Vec<DepartmentHandle>> {
        self.repo.get_all()
    }

    pub fn find_by_id(&self, id: DepartmentId) -> RepoResult<Option<DepartmentHandle>> {
        self.repo.find_by_id(id)
    }

    pub fn find_by_name(&self, name: &str) -> RepoResult<Option<DepartmentHandle>> {
        self.repo.find_by_name(name)
    }
}
