//! Contratos empleado-dealership: `/employments`

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};

use crate::models::{Employment, EmploymentRequest};
use crate::routes::crud::{self, CreatedId};
use crate::routes::resources::Employments;
use crate::state::AppState;
use crate::utils::errors::{AppResult, ErrorResponse};
use crate::utils::extract::{PathId, ValidatedJson};

pub fn create_employment_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_employment).get(list_employments))
        .route("/:id", get(get_employment).put(update_employment).delete(delete_employment))
}

/// Create a employment
#[utoipa::path(
    post,
    path = "/employments",
    tag = "Employments",
    request_body = EmploymentRequest,
    responses(
        (status = 201, description = "Created", body = CreatedId),
        (status = 400, description = "Malformed JSON or failed validation", body = ErrorResponse),
        (status = 500, description = "Storage error", body = ErrorResponse)
    )
)]
pub async fn create_employment(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<EmploymentRequest>,
) -> AppResult<(StatusCode, Json<CreatedId>)> {
    crud::create::<Employments>(&state, &request).await
}

/// List all employments
#[utoipa::path(
    get,
    path = "/employments",
    tag = "Employments",
    responses(
        (status = 200, description = "All employments ordered by id", body = [Employment]),
        (status = 500, description = "Storage error", body = ErrorResponse)
    )
)]
pub async fn list_employments(State(state): State<AppState>) -> AppResult<Json<Vec<Employment>>> {
    crud::list::<Employments>(&state).await
}

/// Get a employment by id
#[utoipa::path(
    get,
    path = "/employments/{id}",
    tag = "Employments",
    params(("id" = i32, Path, description = "Employment id")),
    responses(
        (status = 200, description = "Found", body = Employment),
        (status = 400, description = "Invalid id", body = ErrorResponse),
        (status = 404, description = "Not found", body = ErrorResponse)
    )
)]
pub async fn get_employment(State(state): State<AppState>, PathId(id): PathId) -> AppResult<Json<Employment>> {
    crud::get_one::<Employments>(&state, id).await
}

/// Replace a employment
#[utoipa::path(
    put,
    path = "/employments/{id}",
    tag = "Employments",
    params(("id" = i32, Path, description = "Employment id")),
    request_body = EmploymentRequest,
    responses(
        (status = 200, description = "Updated", body = Employment),
        (status = 400, description = "Malformed JSON, failed validation or invalid id", body = ErrorResponse),
        (status = 404, description = "Not found", body = ErrorResponse),
        (status = 500, description = "Storage error", body = ErrorResponse)
    )
)]
pub async fn update_employment(
    State(state): State<AppState>,
    PathId(id): PathId,
    ValidatedJson(request): ValidatedJson<EmploymentRequest>,
) -> AppResult<Json<Employment>> {
    crud::update::<Employments>(&state, id, &request).await
}

/// Delete a employment
#[utoipa::path(
    delete,
    path = "/employments/{id}",
    tag = "Employments",
    params(("id" = i32, Path, description = "Employment id")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 400, description = "Invalid id", body = ErrorResponse),
        (status = 404, description = "Not found", body = ErrorResponse),
        (status = 500, description = "Storage error", body = ErrorResponse)
    )
)]
pub async fn delete_employment(State(state): State<AppState>, PathId(id): PathId) -> AppResult<StatusCode> {
    crud::delete::<Employments>(&state, id).await
}
