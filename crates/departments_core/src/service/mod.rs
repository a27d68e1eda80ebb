//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into use-case level APIs.
//! - Own the database reset/seed routine used by the CLI.

pub mod department_service;
pub mod reset;
