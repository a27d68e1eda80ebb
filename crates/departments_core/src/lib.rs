//! Core persistence for departments.
//! Owns the storage context, the identity map and the reset routine.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use db::{open_db, open_db_in_memory, StorageContext, DEFAULT_DB_FILE};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::department::{Department, DepartmentHandle, DepartmentId, DepartmentRow};
pub use repo::department_repo::{
    DepartmentRepository, RepoError, RepoResult, SqliteDepartmentRepository,
};
pub use repo::identity_map::IdentityMap;
pub use service::department_service::DepartmentService;
pub use service::reset::{reset_database, SEED_DEPARTMENTS};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
