//! Empleados: `/employees`

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};

use crate::models::{Employee, EmployeeRequest};
use crate::routes::crud::{self, CreatedId};
use crate::routes::resources::Employees;
use crate::state::AppState;
use crate::utils::errors::{AppResult, ErrorResponse};
use crate::utils::extract::{PathId, ValidatedJson};

pub fn create_employee_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_employee).get(list_employees))
        .route("/:id", get(get_employee).put(update_employee).delete(delete_employee))
}

/// Create a employee
#[utoipa::path(
    post,
    path = "/employees",
    tag = "Employees",
    request_body = EmployeeRequest,
    responses(
        (status = 201, description = "Created", body = CreatedId),
        (status = 400, description = "Malformed JSON or failed validation", body = ErrorResponse),
        (status = 500, description = "Storage error", body = ErrorResponse)
    )
)]
pub async fn create_employee(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<EmployeeRequest>,
) -> AppResult<(StatusCode, Json<CreatedId>)> {
    crud::create::<Employees>(&state, &request).await
}

/// List all employees
#[utoipa::path(
    get,
    path = "/employees",
    tag = "Employees",
    responses(
        (status = 200, description = "All employees ordered by id", body = [Employee]),
        (status = 500, description = "Storage error", body = ErrorResponse)
    )
)]
pub async fn list_employees(State(state): State<AppState>) -> AppResult<Json<Vec<Employee>>> {
    crud::list::<Employees>(&state).await
}

/// Get a employee by id
#[utoipa::path(
    get,
    path = "/employees/{id}",
    tag = "Employees",
    params(("id" = i32, Path, description = "Employee id")),
    responses(
        (status = 200, description = "Found", body = Employee),
        (status = 400, description = "Invalid id", body = ErrorResponse),
        (status = 404, description = "Not found", body = ErrorResponse)
    )
)]
pub async fn get_employee(State(state): State<AppState>, PathId(id): PathId) -> AppResult<Json<Employee>> {
    crud::get_one::<Employees>(&state, id).await
}

/// Replace a employee
#[utoipa::path(
    put,
    path = "/employees/{id}",
    tag = "Employees",
    params(("id" = i32, Path, description = "Employee id")),
    request_body = EmployeeRequest,
    responses(
        (status = 200, description = "Updated", body = Employee),
        (status = 400, description = "Malformed JSON, failed validation or invalid id", body = ErrorResponse),
        (status = 404, description = "Not found", body = ErrorResponse),
        (status = 500, description = "Storage error", body = ErrorResponse)
    )
)]
pub async fn update_employee(
    State(state): State<AppState>,
    PathId(id): PathId,
    ValidatedJson(request): ValidatedJson<EmployeeRequest>,
) -> AppResult<Json<Employee>> {
    crud::update::<Employees>(&state, id, &request).await
}

/// Delete a employee
#[utoipa::path(
    delete,
    path = "/employees/{id}",
    tag = "Employees",
    params(("id" = i32, Path, description = "Employee id")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 400, description = "Invalid id", body = ErrorResponse),
        (status = 404, description = "Not found", body = ErrorResponse),
        (status = 409, description = "Still referenced by other records", body = ErrorResponse),
        (status = 500, description = "Storage error", body = ErrorResponse)
    )
)]
pub async fn delete_employee(State(state): State<AppState>, PathId(id): PathId) -> AppResult<StatusCode> {
    crud::delete::<Employees>(&state, id).await
}
