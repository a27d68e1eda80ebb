//! Database reset and seed routine.
//!
//! # Responsibility
//! - Rebuild the `departments` table from scratch.
//! - Seed the fixed starter departments in a stable order.

use crate::model::department::DepartmentHandle;
use crate::repo::department_repo::{DepartmentRepository, RepoResult};
use crate::service::department_service::DepartmentService;
use log::{error, info};
use std::time::Instant;

/// Starter rows inserted by [`reset_database`], in insertion order.
pub const SEED_DEPARTMENTS: [(&str, &str); 3] = [
    ("Payroll", "Building A, 5th Floor"),
    ("Human Resources", "Building C, East Wing"),
    ("Accounting", "Building B, 1st Floor"),
];

/// Drops and recreates the table, then inserts [`SEED_DEPARTMENTS`].
///
/// Returns the seeded handles in insertion order. Each statement commits on
/// its own, so a failure midway leaves the rows written so far in place.
pub fn reset_database<R: DepartmentRepository>(
    service: &DepartmentService<R>,
) -> RepoResult<Vec<DepartmentHandle>> {
    let started_at = Instant::now();
    info!("event=db_reset module=service status=start");

    match seed(service) {
        Ok(departments) => {
            info!(
                "event=db_reset module=service status=ok seeded={} duration_ms={}",
                departments.len(),
                started_at.elapsed().as_millis()
            );
            Ok(departments)
        }
        Err(err) => {
            error!(
                "event=db_reset module=service status=error duration_ms={} error={}",
                started_at.elapsed().as_millis(),
                err
            );
            Err(err)
        }
    }
}

fn seed<R: DepartmentRepository>(
    service: &DepartmentService<R>,
) -> RepoResult<Vec<DepartmentHandle>> {
    service.drop_table()?;
    service.create_table()?;

    SEED_DEPARTMENTS
        .iter()
        .map(|(name, location)| service.create(*name, *location))
        .collect()
}
