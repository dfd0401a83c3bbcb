//! Employee Search Service
//!
//! A read-only search API over an employee table. Five endpoints forward
//! to a generic repository: a two-parameter matcher search plus
//! query-by-example find/find-one/count/exists. Matching conditions are
//! built dynamically from whichever template fields are populated.

// Public exports
pub mod contract;
pub use contract::{Employee, EmployeeError, EmployeeExample, NewEmployee, SearchFilter};

pub mod config;
pub use config::AppConfig;

pub mod api;
pub mod domain;
pub mod infra;
