use departments_core::{
    open_db, open_db_in_memory, reset_database, DepartmentService, SqliteDepartmentRepository,
    SEED_DEPARTMENTS,
};
use std::rc::Rc;

#[test]
fn reset_seeds_three_departments_in_order() {
    let ctx = open_db_in_memory().unwrap();
    let service = DepartmentService::new(SqliteDepartmentRepository::new(&ctx));

    let seeded = reset_database(&service).unwrap();
    assert_eq!(seeded.len(), SEED_DEPARTMENTS.len());

    let all = service.get_all().unwrap();
    let names: Vec<String> = all.iter().map(|d| d.borrow().name.clone()).collect();
    assert_eq!(names, vec!["Payroll", "Human Resources", "Accounting"]);
    for (seeded, listed) in seeded.iter().zip(all.iter()) {
        assert!(Rc::ptr_eq(seeded, listed));
    }
}

#[test]
fn seeded_accounting_is_found_by_name() {
    let ctx = open_db_in_memory().unwrap();
    let service = DepartmentService::new(SqliteDepartmentRepository::new(&ctx));
    reset_database(&service).unwrap();

    let accounting = service.find_by_name("Accounting").unwrap().unwrap();
    assert_eq!(accounting.borrow().location, "Building B, 1st Floor");
}

#[test]
fn reset_discards_previous_rows() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("company.db");

    {
        let ctx = open_db(&path).unwrap();
        let service = DepartmentService::new(SqliteDepartmentRepository::new(&ctx));
        service.create_table().unwrap();
        service.create("Legal", "Building E").unwrap();
    }

    let ctx = open_db(&path).unwrap();
    let service = DepartmentService::new(SqliteDepartmentRepository::new(&ctx));
    reset_database(&service).unwrap();
    reset_database(&service).unwrap();

    assert!(service.find_by_name("Legal").unwrap().is_none());
    let all = service.get_all().unwrap();
    assert_eq!(all.len(), 3);
    assert_eq!(ctx.cached_departments(), 3);
}

#[test]
fn seeded_departments_serialize_to_json() {
    let ctx = open_db_in_memory().unwrap();
    let service = DepartmentService::new(SqliteDepartmentRepository::new(&ctx));
    let seeded = reset_database(&service).unwrap();

    let payroll = seeded[0].borrow().clone();
    let value = serde_json::to_value(&payroll).unwrap();
    assert_eq!(value["name"], "Payroll");
    assert_eq!(value["location"], "Building A, 5th Floor");
    assert!(value["id"].is_i64());
}
