//! SeaORM repository implementation

use crate::contract::{Employee, EmployeeExample, NewEmployee, SearchFilter};
use crate::domain::repository::EmployeeRepository;
use anyhow::Result;
use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, Condition, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder,
};
use std::sync::Arc;

use super::entity;

pub struct SeaOrmEmployeeRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmEmployeeRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

/// Build the WHERE clause for a query-by-example template.
///
/// One equality condition per populated field, combined with AND.
/// An empty template yields an empty condition, i.e. match-all.
fn example_condition(example: &EmployeeExample) -> Condition {
    let mut condition = Condition::all();

    if let Some(id) = example.id {
        condition = condition.add(entity::Column::Id.eq(id));
    }
    if let Some(first_name) = &example.first_name {
        condition = condition.add(entity::Column::FirstName.eq(first_name.as_str()));
    }
    if let Some(last_name) = &example.last_name {
        condition = condition.add(entity::Column::LastName.eq(last_name.as_str()));
    }
    if let Some(department) = &example.department {
        condition = condition.add(entity::Column::Department.eq(department.as_str()));
    }
    if let Some(email) = &example.email {
        condition = condition.add(entity::Column::Email.eq(email.as_str()));
    }

    condition
}

/// Build the WHERE clause for the two-parameter search matcher
fn search_condition(filter: &SearchFilter) -> Condition {
    let mut condition = Condition::all();

    if let Some(first_name) = &filter.first_name {
        condition = condition.add(entity::Column::FirstName.eq(first_name.as_str()));
    }
    if let Some(department) = &filter.department {
        condition = condition.add(entity::Column::Department.eq(department.as_str()));
    }

    condition
}

#[async_trait]
impl EmployeeRepository for SeaOrmEmployeeRepository {
    async fn create(&self, employee: &NewEmployee) -> Result<Employee> {
        let active: entity::ActiveModel = employee.into();

        let result = entity::Entity::insert(active)
            .exec_with_returning(&*self.db)
            .await?;

        Ok(result.into())
    }

    async fn update(&self, employee: &Employee) -> Result<Employee> {
        let active: entity::ActiveModel = employee.into();

        let result = entity::Entity::update(active).exec(&*self.db).await?;

        Ok(result.into())
    }

    async fn delete(&self, id: i64) -> Result<()> {
        entity::Entity::delete_by_id(id).exec(&*self.db).await?;

        Ok(())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Employee>> {
        let result = entity::Entity::find_by_id(id).one(&*self.db).await?;

        Ok(result.map(|e| e.into()))
    }

    async fn find_all(&self) -> Result<Vec<Employee>> {
        let results = entity::Entity::find()
            .order_by_asc(entity::Column::Id)
            .all(&*self.db)
            .await?;

        Ok(results.into_iter().map(|e| e.into()).collect())
    }

    async fn search(&self, filter: &SearchFilter) -> Result<Vec<Employee>> {
        let results = entity::Entity::find()
            .filter(search_condition(filter))
            .order_by_asc(entity::Column::Id)
            .all(&*self.db)
            .await?;

        Ok(results.into_iter().map(|e| e.into()).collect())
    }

    async fn find_by_example(&self, example: &EmployeeExample) -> Result<Vec<Employee>> {
        let results = entity::Entity::find()
            .filter(example_condition(example))
            .order_by_asc(entity::Column::Id)
            .all(&*self.db)
            .await?;

        Ok(results.into_iter().map(|e| e.into()).collect())
    }

    async fn find_one_by_example(
        &self,
        example: &EmployeeExample,
    ) -> Result<Option<Employee>> {
        // Several rows may match; the first by ascending id wins.
        let result = entity::Entity::find()
            .filter(example_condition(example))
            .order_by_asc(entity::Column::Id)
            .one(&*self.db)
            .await?;

        Ok(result.map(|e| e.into()))
    }

    async fn count_by_example(&self, example: &EmployeeExample) -> Result<u64> {
        let count = entity::Entity::find()
            .filter(example_condition(example))
            .count(&*self.db)
            .await?;

        Ok(count)
    }

    async fn exists_by_example(&self, example: &EmployeeExample) -> Result<bool> {
        let count = self.count_by_example(example).await?;

        Ok(count > 0)
    }
}
