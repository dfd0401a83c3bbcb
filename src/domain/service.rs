//! Domain service - a thin pass-through to the repository
//!
//! The service performs no transformation of its own; each operation
//! invokes the corresponding repository call and maps infrastructure
//! failures to the opaque internal error. Absence-to-NotFound mapping
//! for find-one is done by the REST layer, not here.

use crate::contract::{Employee, EmployeeError, EmployeeExample, SearchFilter};
use super::repository::EmployeeRepository;
use std::sync::Arc;

/// Query service over the employee repository
pub struct EmployeeService {
    repo: Arc<dyn EmployeeRepository>,
}

impl EmployeeService {
    /// Create a new service instance
    pub fn new(repo: Arc<dyn EmployeeRepository>) -> Self {
        Self { repo }
    }

    /// Find employees matching the optional first-name/department filter
    pub async fn search_with_matcher(
        &self,
        filter: &SearchFilter,
    ) -> Result<Vec<Employee>, EmployeeError> {
        self.repo.search(filter).await.map_err(internal)
    }

    /// Find all employees matching the example template
    pub async fn find_by_example(
        &self,
        example: &EmployeeExample,
    ) -> Result<Vec<Employee>, EmployeeError> {
        self.repo.find_by_example(example).await.map_err(internal)
    }

    /// Find one employee matching the example template.
    ///
    /// When several employees match, the first by ascending id is returned.
    pub async fn find_one_by_example(
        &self,
        example: &EmployeeExample,
    ) -> Result<Option<Employee>, EmployeeError> {
        self.repo
            .find_one_by_example(example)
            .await
            .map_err(internal)
    }

    /// Count employees matching the example template
    pub async fn count_by_example(
        &self,
        example: &EmployeeExample,
    ) -> Result<u64, EmployeeError> {
        self.repo.count_by_example(example).await.map_err(internal)
    }

    /// Check whether any employee matches the example template
    pub async fn exists_by_example(
        &self,
        example: &EmployeeExample,
    ) -> Result<bool, EmployeeError> {
        self.repo.exists_by_example(example).await.map_err(internal)
    }
}

fn internal(error: anyhow::Error) -> EmployeeError {
    tracing::error!(error = ?error, "repository operation failed");
    EmployeeError::Internal
}
