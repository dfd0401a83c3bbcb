//! DTO to contract model mappers

use crate::contract::{Employee, EmployeeExample, SearchFilter};
use super::dto::{EmployeeDto, EmployeeExampleDto, SearchQuery};

impl From<Employee> for EmployeeDto {
    fn from(model: Employee) -> Self {
        Self {
            id: model.id,
            first_name: model.first_name,
            last_name: model.last_name,
            department: model.department,
            email: model.email,
        }
    }
}

impl From<EmployeeExampleDto> for EmployeeExample {
    fn from(dto: EmployeeExampleDto) -> Self {
        Self {
            id: dto.id,
            first_name: dto.first_name,
            last_name: dto.last_name,
            department: dto.department,
            email: dto.email,
        }
    }
}

impl From<SearchQuery> for SearchFilter {
    fn from(query: SearchQuery) -> Self {
        Self {
            first_name: query.first_name,
            department: query.department,
        }
    }
}
