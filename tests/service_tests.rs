//! Service-level tests against a mock repository

#![allow(clippy::unwrap_used)]

use employee_search::contract::*;
use employee_search::domain::{EmployeeRepository, EmployeeService};
use std::sync::Arc;

// Mock repository implementation for testing
pub mod mocks {
    use super::*;
    use anyhow::{anyhow, Result};
    use async_trait::async_trait;
    use parking_lot::RwLock;

    #[derive(Clone)]
    pub struct MockEmployeeRepo {
        data: Arc<RwLock<Vec<Employee>>>,
        next_id: Arc<RwLock<i64>>,
    }

    impl MockEmployeeRepo {
        pub fn new() -> Self {
            Self {
                data: Arc::new(RwLock::new(Vec::new())),
                next_id: Arc::new(RwLock::new(1)),
            }
        }

        fn matches(employee: &Employee, example: &EmployeeExample) -> bool {
            example.id.is_none_or(|id| employee.id == id)
                && example
                    .first_name
                    .as_ref()
                    .is_none_or(|v| &employee.first_name == v)
                && example
                    .last_name
                    .as_ref()
                    .is_none_or(|v| &employee.last_name == v)
                && example
                    .department
                    .as_ref()
                    .is_none_or(|v| &employee.department == v)
                && example
                    .email
                    .as_ref()
                    .is_none_or(|v| employee.email.as_ref() == Some(v))
        }
    }

    #[async_trait]
    impl EmployeeRepository for MockEmployeeRepo {
        async fn create(&self, employee: &NewEmployee) -> Result<Employee> {
            let mut next_id = self.next_id.write();
            let created = Employee {
                id: *next_id,
                first_name: employee.first_name.clone(),
                last_name: employee.last_name.clone(),
                department: employee.department.clone(),
                email: employee.email.clone(),
            };
            *next_id += 1;
            self.data.write().push(created.clone());
            Ok(created)
        }

        async fn update(&self, employee: &Employee) -> Result<Employee> {
            let mut data = self.data.write();
            let slot = data
                .iter_mut()
                .find(|e| e.id == employee.id)
                .ok_or_else(|| anyhow!("no employee with id {}", employee.id))?;
            *slot = employee.clone();
            Ok(employee.clone())
        }

        async fn delete(&self, id: i64) -> Result<()> {
            self.data.write().retain(|e| e.id != id);
            Ok(())
        }

        async fn find_by_id(&self, id: i64) -> Result<Option<Employee>> {
            Ok(self.data.read().iter().find(|e| e.id == id).cloned())
        }

        async fn find_all(&self) -> Result<Vec<Employee>> {
            Ok(self.data.read().clone())
        }

        async fn search(&self, filter: &SearchFilter) -> Result<Vec<Employee>> {
            let example = EmployeeExample {
                first_name: filter.first_name.clone(),
                department: filter.department.clone(),
                ..Default::default()
            };
            self.find_by_example(&example).await
        }

        async fn find_by_example(&self, example: &EmployeeExample) -> Result<Vec<Employee>> {
            Ok(self
                .data
                .read()
                .iter()
                .filter(|e| Self::matches(e, example))
                .cloned()
                .collect())
        }

        async fn find_one_by_example(
            &self,
            example: &EmployeeExample,
        ) -> Result<Option<Employee>> {
            Ok(self.find_by_example(example).await?.into_iter().next())
        }

        async fn count_by_example(&self, example: &EmployeeExample) -> Result<u64> {
            Ok(self.find_by_example(example).await?.len() as u64)
        }

        async fn exists_by_example(&self, example: &EmployeeExample) -> Result<bool> {
            Ok(self.count_by_example(example).await? > 0)
        }
    }

    /// Repository whose every operation fails, for error-mapping tests
    pub struct FailingRepo;

    #[async_trait]
    impl EmployeeRepository for FailingRepo {
        async fn create(&self, _employee: &NewEmployee) -> Result<Employee> {
            Err(anyhow!("connection refused"))
        }
        async fn update(&self, _employee: &Employee) -> Result<Employee> {
            Err(anyhow!("connection refused"))
        }
        async fn delete(&self, _id: i64) -> Result<()> {
            Err(anyhow!("connection refused"))
        }
        async fn find_by_id(&self, _id: i64) -> Result<Option<Employee>> {
            Err(anyhow!("connection refused"))
        }
        async fn find_all(&self) -> Result<Vec<Employee>> {
            Err(anyhow!("connection refused"))
        }
        async fn search(&self, _filter: &SearchFilter) -> Result<Vec<Employee>> {
            Err(anyhow!("connection refused"))
        }
        async fn find_by_example(&self, _example: &EmployeeExample) -> Result<Vec<Employee>> {
            Err(anyhow!("connection refused"))
        }
        async fn find_one_by_example(
            &self,
            _example: &EmployeeExample,
        ) -> Result<Option<Employee>> {
            Err(anyhow!("connection refused"))
        }
        async fn count_by_example(&self, _example: &EmployeeExample) -> Result<u64> {
            Err(anyhow!("connection refused"))
        }
        async fn exists_by_example(&self, _example: &EmployeeExample) -> Result<bool> {
            Err(anyhow!("connection refused"))
        }
    }
}

use mocks::{FailingRepo, MockEmployeeRepo};

fn new_employee(first: &str, last: &str, department: &str) -> NewEmployee {
    NewEmployee {
        first_name: first.to_owned(),
        last_name: last.to_owned(),
        department: department.to_owned(),
        email: None,
    }
}

async fn seeded_service() -> (EmployeeService, Arc<MockEmployeeRepo>) {
    let repo = Arc::new(MockEmployeeRepo::new());
    repo.create(&new_employee("Ann", "Lee", "Eng")).await.unwrap();
    repo.create(&new_employee("Ann", "Park", "Sales")).await.unwrap();
    repo.create(&new_employee("Carl", "Nguyen", "Eng")).await.unwrap();
    (EmployeeService::new(repo.clone()), repo)
}

#[tokio::test]
async fn search_with_no_parameters_matches_everything() {
    let (service, _) = seeded_service().await;

    let all = service
        .search_with_matcher(&SearchFilter::default())
        .await
        .unwrap();

    assert_eq!(all.len(), 3);
}

#[tokio::test]
async fn search_parameters_combine_with_and() {
    let (service, _) = seeded_service().await;

    let by_name = service
        .search_with_matcher(&SearchFilter {
            first_name: Some("Ann".to_owned()),
            department: None,
        })
        .await
        .unwrap();
    assert_eq!(by_name.len(), 2);

    let by_both = service
        .search_with_matcher(&SearchFilter {
            first_name: Some("Ann".to_owned()),
            department: Some("Eng".to_owned()),
        })
        .await
        .unwrap();
    assert_eq!(by_both.len(), 1);
    assert_eq!(by_both[0].last_name, "Lee");
}

#[tokio::test]
async fn find_by_example_matches_populated_fields_only() {
    let (service, _) = seeded_service().await;

    let eng = service
        .find_by_example(&EmployeeExample {
            department: Some("Eng".to_owned()),
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(eng.len(), 2);
    assert!(eng.iter().all(|e| e.department == "Eng"));
}

#[tokio::test]
async fn empty_example_is_a_wildcard() {
    let (service, _) = seeded_service().await;

    let all = service
        .find_by_example(&EmployeeExample::default())
        .await
        .unwrap();

    assert_eq!(all.len(), 3);
}

#[tokio::test]
async fn find_one_returns_first_match_by_id() {
    let (service, _) = seeded_service().await;

    let found = service
        .find_one_by_example(&EmployeeExample {
            first_name: Some("Ann".to_owned()),
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(found.map(|e| e.id), Some(1));
}

#[tokio::test]
async fn find_one_returns_none_when_nothing_matches() {
    let (service, _) = seeded_service().await;

    let found = service
        .find_one_by_example(&EmployeeExample {
            first_name: Some("Bob".to_owned()),
            ..Default::default()
        })
        .await
        .unwrap();

    assert!(found.is_none());
}

#[tokio::test]
async fn count_and_exists_agree() {
    let (service, _) = seeded_service().await;

    let sales = EmployeeExample {
        department: Some("Sales".to_owned()),
        ..Default::default()
    };
    assert_eq!(service.count_by_example(&sales).await.unwrap(), 1);
    assert!(service.exists_by_example(&sales).await.unwrap());

    let legal = EmployeeExample {
        department: Some("Legal".to_owned()),
        ..Default::default()
    };
    assert_eq!(service.count_by_example(&legal).await.unwrap(), 0);
    assert!(!service.exists_by_example(&legal).await.unwrap());
}

#[tokio::test]
async fn reads_are_idempotent_against_unchanged_store() {
    let (service, _) = seeded_service().await;

    let example = EmployeeExample {
        first_name: Some("Ann".to_owned()),
        ..Default::default()
    };

    let first = service.find_by_example(&example).await.unwrap();
    let second = service.find_by_example(&example).await.unwrap();
    assert_eq!(first, second);

    let count_a = service.count_by_example(&example).await.unwrap();
    let count_b = service.count_by_example(&example).await.unwrap();
    assert_eq!(count_a, count_b);
}

#[tokio::test]
async fn repository_failures_surface_as_internal() {
    let service = EmployeeService::new(Arc::new(FailingRepo));

    let err = service
        .find_by_example(&EmployeeExample::default())
        .await
        .unwrap_err();

    assert_eq!(err, EmployeeError::Internal);
}
