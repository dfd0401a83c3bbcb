//! Contract models for the employee search service
//!
//! These models are transport-agnostic and used between the REST layer,
//! the domain service and the storage layer. NO serde derives - these are
//! pure domain models.

/// A persisted employee record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Employee {
    /// System-assigned identifier, immutable once assigned
    pub id: i64,
    /// Employee first name
    pub first_name: String,
    /// Employee last name
    pub last_name: String,
    /// Department the employee belongs to
    pub department: String,
    /// Contact email, if known
    pub email: Option<String>,
}

/// An employee record that has not been persisted yet (no identifier)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEmployee {
    pub first_name: String,
    pub last_name: String,
    pub department: String,
    pub email: Option<String>,
}

/// Query-by-example template over [`Employee`].
///
/// Every field is optional: an absent field is a wildcard, a populated
/// field constrains results to exact equality. Populated fields combine
/// with logical AND.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeExample {
    pub id: Option<i64>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub department: Option<String>,
    pub email: Option<String>,
}

/// Matcher for the two-parameter `/search` endpoint.
///
/// Each condition is present only when its parameter was supplied;
/// both absent means match-all.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchFilter {
    pub first_name: Option<String>,
    pub department: Option<String>,
}
