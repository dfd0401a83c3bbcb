//! Route registration

use crate::domain::EmployeeService;
use super::handlers;
use axum::{
    routing::{get, post},
    Extension, Router,
};
use std::sync::Arc;

/// Build the application router with all employee endpoints
pub fn router(service: Arc<EmployeeService>) -> Router {
    Router::new()
        .route("/healthz", get(handlers::health))
        .nest("/api/v1/employee", employee_routes())
        .layer(Extension(service))
}

fn employee_routes() -> Router {
    Router::new()
        .route("/search", get(handlers::search_employees))
        .route("/search/example", post(handlers::find_by_example))
        .route("/search/example/one", post(handlers::find_one_by_example))
        .route("/count", post(handlers::count_by_example))
        .route("/exists", post(handlers::exists_by_example))
}
