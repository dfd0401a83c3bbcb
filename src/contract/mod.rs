//! Contract layer - transport-agnostic models and errors
//!
//! NO serde derives on models - these are pure domain types.

pub mod error;
pub mod model;

pub use error::EmployeeError;
pub use model::{Employee, EmployeeExample, NewEmployee, SearchFilter};
