//! Entity to model mappers
//!
//! Conversions between SeaORM entities and contract models

use crate::contract::{Employee, NewEmployee};
use super::entity;

impl From<entity::Model> for Employee {
    fn from(entity: entity::Model) -> Self {
        Self {
            id: entity.id,
            first_name: entity.first_name,
            last_name: entity.last_name,
            department: entity.department,
            email: entity.email,
        }
    }
}

impl From<&Employee> for entity::ActiveModel {
    fn from(model: &Employee) -> Self {
        use sea_orm::ActiveValue::Set;

        Self {
            id: Set(model.id),
            first_name: Set(model.first_name.clone()),
            last_name: Set(model.last_name.clone()),
            department: Set(model.department.clone()),
            email: Set(model.email.clone()),
        }
    }
}

impl From<&NewEmployee> for entity::ActiveModel {
    fn from(model: &NewEmployee) -> Self {
        use sea_orm::ActiveValue::{NotSet, Set};

        Self {
            id: NotSet,
            first_name: Set(model.first_name.clone()),
            last_name: Set(model.last_name.clone()),
            department: Set(model.department.clone()),
            email: Set(model.email.clone()),
        }
    }
}
