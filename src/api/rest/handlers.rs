//! HTTP request handlers - thin layer that delegates to the domain service

use crate::contract::EmployeeError;
use crate::domain::EmployeeService;
use super::{
    dto::*,
    error::{map_body_rejection, map_domain_error, Problem},
};
use axum::{
    extract::{rejection::JsonRejection, Query},
    Extension, Json,
};
use std::sync::Arc;

/// Search employees by optional first name and department.
///
/// Both parameters absent means match-all; an empty result is 200 with
/// an empty array, never 404.
pub async fn search_employees(
    Extension(service): Extension<Arc<EmployeeService>>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<Vec<EmployeeDto>>, Problem> {
    let employees = service
        .search_with_matcher(&query.into())
        .await
        .map_err(map_domain_error)?;

    Ok(Json(employees.into_iter().map(|e| e.into()).collect()))
}

/// Find all employees matching an example template
pub async fn find_by_example(
    Extension(service): Extension<Arc<EmployeeService>>,
    body: Result<Json<EmployeeExampleDto>, JsonRejection>,
) -> Result<Json<Vec<EmployeeDto>>, Problem> {
    let Json(example) = body.map_err(map_body_rejection)?;

    let employees = service
        .find_by_example(&example.into())
        .await
        .map_err(map_domain_error)?;

    Ok(Json(employees.into_iter().map(|e| e.into()).collect()))
}

/// Find one employee matching an example template; 404 when none match
pub async fn find_one_by_example(
    Extension(service): Extension<Arc<EmployeeService>>,
    body: Result<Json<EmployeeExampleDto>, JsonRejection>,
) -> Result<Json<EmployeeDto>, Problem> {
    let Json(example) = body.map_err(map_body_rejection)?;

    let employee = service
        .find_one_by_example(&example.into())
        .await
        .map_err(map_domain_error)?
        .ok_or_else(|| {
            map_domain_error(EmployeeError::NotFound {
                what: "no employee matched the example".to_owned(),
            })
        })?;

    Ok(Json(employee.into()))
}

/// Count employees matching an example template
pub async fn count_by_example(
    Extension(service): Extension<Arc<EmployeeService>>,
    body: Result<Json<EmployeeExampleDto>, JsonRejection>,
) -> Result<Json<u64>, Problem> {
    let Json(example) = body.map_err(map_body_rejection)?;

    let count = service
        .count_by_example(&example.into())
        .await
        .map_err(map_domain_error)?;

    Ok(Json(count))
}

/// Check whether any employee matches an example template
pub async fn exists_by_example(
    Extension(service): Extension<Arc<EmployeeService>>,
    body: Result<Json<EmployeeExampleDto>, JsonRejection>,
) -> Result<Json<bool>, Problem> {
    let Json(example) = body.map_err(map_body_rejection)?;

    let exists = service
        .exists_by_example(&example.into())
        .await
        .map_err(map_domain_error)?;

    Ok(Json(exists))
}

/// Liveness probe
pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}
