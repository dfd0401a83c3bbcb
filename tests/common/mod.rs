//! Common test utilities: an in-memory SQLite database with seed data

#![allow(clippy::unwrap_used)]

use employee_search::contract::NewEmployee;
use employee_search::domain::EmployeeRepository;
use employee_search::infra::storage::{Migrator, SeaOrmEmployeeRepository};
use sea_orm::{ConnectOptions, Database};
use sea_orm_migration::MigratorTrait;
use std::sync::Arc;

/// Connect an isolated in-memory SQLite database and apply migrations.
///
/// A single pooled connection keeps the in-memory database alive and
/// shared across queries.
pub async fn empty_repo() -> SeaOrmEmployeeRepository {
    let mut options = ConnectOptions::new("sqlite::memory:".to_owned());
    options.max_connections(1);

    let db = Database::connect(options).await.unwrap();
    Migrator::up(&db, None).await.unwrap();

    SeaOrmEmployeeRepository::new(Arc::new(db))
}

/// Repository seeded with the fixture roster:
/// id=1 Ann/Lee/Eng, id=2 Ann/Park/Sales, id=3 Carl/Nguyen/Eng
pub async fn seeded_repo() -> SeaOrmEmployeeRepository {
    let repo = empty_repo().await;
    for (first, last, department, email) in [
        ("Ann", "Lee", "Eng", Some("ann.lee@example.com")),
        ("Ann", "Park", "Sales", None),
        ("Carl", "Nguyen", "Eng", None),
    ] {
        repo.create(&NewEmployee {
            first_name: first.to_owned(),
            last_name: last.to_owned(),
            department: department.to_owned(),
            email: email.map(str::to_owned),
        })
        .await
        .unwrap();
    }
    repo
}
