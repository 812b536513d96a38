//! Sedes de venta: `/dealerships`

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};

use crate::models::{Dealership, DealershipRequest};
use crate::routes::crud::{self, CreatedId};
use crate::routes::resources::Dealerships;
use crate::state::AppState;
use crate::utils::errors::{AppResult, ErrorResponse};
use crate::utils::extract::{PathId, ValidatedJson};

pub fn create_dealership_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_dealership).get(list_dealerships))
        .route("/:id", get(get_dealership).put(update_dealership).delete(delete_dealership))
}

/// Create a dealership
#[utoipa::path(
    post,
    path = "/dealerships",
    tag = "Dealerships",
    request_body = DealershipRequest,
    responses(
        (status = 201, description = "Created", body = CreatedId),
        (status = 400, description = "Malformed JSON or failed validation", body = ErrorResponse),
        (status = 500, description = "Storage error", body = ErrorResponse)
    )
)]
pub async fn create_dealership(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<DealershipRequest>,
) -> AppResult<(StatusCode, Json<CreatedId>)> {
    crud::create::<Dealerships>(&state, &request).await
}

/// List all dealerships
#[utoipa::path(
    get,
    path = "/dealerships",
    tag = "Dealerships",
    responses(
        (status = 200, description = "All dealerships ordered by id", body = [Dealership]),
        (status = 500, description = "Storage error", body = ErrorResponse)
    )
)]
pub async fn list_dealerships(State(state): State<AppState>) -> AppResult<Json<Vec<Dealership>>> {
    crud::list::<Dealerships>(&state).await
}

/// Get a dealership by id
#[utoipa::path(
    get,
    path = "/dealerships/{id}",
    tag = "Dealerships",
    params(("id" = i32, Path, description = "Dealership id")),
    responses(
        (status = 200, description = "Found", body = Dealership),
        (status = 400, description = "Invalid id", body = ErrorResponse),
        (status = 404, description = "Not found", body = ErrorResponse)
    )
)]
pub async fn get_dealership(State(state): State<AppState>, PathId(id): PathId) -> AppResult<Json<Dealership>> {
    crud::get_one::<Dealerships>(&state, id).await
}

/// Replace a dealership
#[utoipa::path(
    put,
    path = "/dealerships/{id}",
    tag = "Dealerships",
    params(("id" = i32, Path, description = "Dealership id")),
    request_body = DealershipRequest,
    responses(
        (status = 200, description = "Updated", body = Dealership),
        (status = 400, description = "Malformed JSON, failed validation or invalid id", body = ErrorResponse),
        (status = 404, description = "Not found", body = ErrorResponse),
        (status = 500, description = "Storage error", body = ErrorResponse)
    )
)]
pub async fn update_dealership(
    State(state): State<AppState>,
    PathId(id): PathId,
    ValidatedJson(request): ValidatedJson<DealershipRequest>,
) -> AppResult<Json<Dealership>> {
    crud::update::<Dealerships>(&state, id, &request).await
}

/// Delete a dealership
#[utoipa::path(
    delete,
    path = "/dealerships/{id}",
    tag = "Dealerships",
    params(("id" = i32, Path, description = "Dealership id")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 400, description = "Invalid id", body = ErrorResponse),
        (status = 404, description = "Not found", body = ErrorResponse),
        (status = 409, description = "Still referenced by other records", body = ErrorResponse),
        (status = 500, description = "Storage error", body = ErrorResponse)
    )
)]
pub async fn delete_dealership(State(state): State<AppState>, PathId(id): PathId) -> AppResult<StatusCode> {
    crud::delete::<Dealerships>(&state, id).await
}
