//! Domain layer - repository contract and query service

pub mod repository;
pub mod service;

pub use repository::EmployeeRepository;
pub use service::EmployeeService;
