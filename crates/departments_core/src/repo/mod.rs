//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the department data access contract.
//! - Isolate SQLite query details from service orchestration.
//! - Reconcile every row read through the context's identity map.
//!
//! # Invariants
//! - SQL text is fixed; values are always bound as parameters.
//! - Storage errors are returned unchanged inside `RepoError::Db`.

pub mod department_repo;
pub mod identity_map;
