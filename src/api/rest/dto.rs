//! REST DTOs with serde derives for HTTP API

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Employee response DTO
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeDto {
    /// System-assigned identifier
    pub id: i64,

    /// First name
    #[schema(example = "Ann")]
    pub first_name: String,

    /// Last name
    #[schema(example = "Smith")]
    pub last_name: String,

    /// Department
    #[schema(example = "Eng")]
    pub department: String,

    /// Contact email (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Query-by-example request template.
///
/// Unset fields are wildcards; set fields constrain matches to equality.
/// Unknown fields are rejected with a validation error.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct EmployeeExampleDto {
    /// Match on identifier
    pub id: Option<i64>,

    /// Match on first name
    #[schema(example = "Ann")]
    pub first_name: Option<String>,

    /// Match on last name
    pub last_name: Option<String>,

    /// Match on department
    #[schema(example = "Eng")]
    pub department: Option<String>,

    /// Match on email
    pub email: Option<String>,
}

/// Query parameters for the `/search` endpoint
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchQuery {
    /// First name to search for
    pub first_name: Option<String>,

    /// Department to search for
    pub department: Option<String>,
}
