//! SeaORM entity for the employees table

use sea_orm::entity::prelude::*;

/// Employees table entity
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "employees")]
pub struct Model {
    /// System-assigned identifier
    #[sea_orm(primary_key)]
    pub id: i64,

    /// First name
    pub first_name: String,

    /// Last name
    pub last_name: String,

    /// Department
    pub department: String,

    /// Contact email (optional)
    pub email: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
