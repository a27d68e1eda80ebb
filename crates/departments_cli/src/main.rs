//! Reset entry point.
//!
//! # Responsibility
//! - Rebuild and seed the departments database.
//! - Print the seeded rows for quick inspection.
//!
//! Configuration comes from the environment:
//! - `DEPARTMENTS_DB`: database file, defaults to `company.db`.
//! - `DEPARTMENTS_LOG_LEVEL`: log level, defaults per build mode.
//! - `DEPARTMENTS_LOG_DIR`: absolute log directory; file logging is off when unset.

use departments_core::{
    default_log_level, init_logging, open_db, reset_database, Department, DepartmentService,
    SqliteDepartmentRepository, DEFAULT_DB_FILE,
};
use log::info;
use std::error::Error;
use std::process::ExitCode;

const DB_PATH_ENV: &str = "DEPARTMENTS_DB";
const LOG_LEVEL_ENV: &str = "DEPARTMENTS_LOG_LEVEL";
const LOG_DIR_ENV: &str = "DEPARTMENTS_LOG_DIR";

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("departments: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    if let Ok(log_dir) = std::env::var(LOG_DIR_ENV) {
        let level =
            std::env::var(LOG_LEVEL_ENV).unwrap_or_else(|_| default_log_level().to_string());
        init_logging(&level, &log_dir)?;
    }

    let db_path = std::env::var(DB_PATH_ENV).unwrap_or_else(|_| DEFAULT_DB_FILE.to_string());
    let ctx = open_db(&db_path)?;
    let service = DepartmentService::new(SqliteDepartmentRepository::new(&ctx));

    reset_database(&service)?;
    info!("event=cli_reset module=cli status=ok db_path={db_path}");

    inspect(&service)
}

/// Dumps every department, first in display form and then as JSON.
fn inspect(
    service: &DepartmentService<SqliteDepartmentRepository<'_>>,
) -> Result<(), Box<dyn Error>> {
    let departments: Vec<Department> = service
        .get_all()?
        .iter()
        .map(|handle| handle.borrow().clone())
        .collect();

    for department in &departments {
        println!("{department}");
    }
    println!("{}", serde_json::to_string_pretty(&departments)?);
    Ok(())
}
