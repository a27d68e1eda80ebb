//! Domain model for departments.
//!
//! # Responsibility
//! - Define the department record and its shared live-object handle.
//!
//! # Invariants
//! - `id` is `None` until the row is persisted, and again after delete.

pub mod department;
