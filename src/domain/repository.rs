//! Repository trait for employee data access
//!
//! This trait defines the interface for data access operations.
//! The SeaORM implementation is in infra/storage/repositories.rs

use crate::contract::{Employee, EmployeeExample, NewEmployee, SearchFilter};
use anyhow::Result;
use async_trait::async_trait;

/// Data-access interface over the employee table.
///
/// Covers generic CRUD plus query-by-example. Any future custom query
/// gets an explicit method here rather than a naming convention.
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// Insert a new employee, returning it with its assigned id
    async fn create(&self, employee: &NewEmployee) -> Result<Employee>;

    /// Update an existing employee by id
    async fn update(&self, employee: &Employee) -> Result<Employee>;

    /// Delete an employee by id
    async fn delete(&self, id: i64) -> Result<()>;

    /// Find an employee by id
    async fn find_by_id(&self, id: i64) -> Result<Option<Employee>>;

    /// List all employees, ordered by id
    async fn find_all(&self) -> Result<Vec<Employee>>;

    /// Find employees matching the filter, ordered by id
    async fn search(&self, filter: &SearchFilter) -> Result<Vec<Employee>>;

    /// Find all employees matching the example template, ordered by id
    async fn find_by_example(&self, example: &EmployeeExample) -> Result<Vec<Employee>>;

    /// Find the first employee (by ascending id) matching the example template
    async fn find_one_by_example(&self, example: &EmployeeExample)
        -> Result<Option<Employee>>;

    /// Count employees matching the example template
    async fn count_by_example(&self, example: &EmployeeExample) -> Result<u64>;

    /// Check whether any employee matches the example template
    async fn exists_by_example(&self, example: &EmployeeExample) -> Result<bool>;
}
