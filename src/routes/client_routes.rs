//! Clientes particulares y empresas: `/clients`

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};

use crate::models::{Client, ClientRequest};
use crate::routes::crud::{self, CreatedId};
use crate::routes::resources::Clients;
use crate::state::AppState;
use crate::utils::errors::{AppResult, ErrorResponse};
use crate::utils::extract::{PathId, ValidatedJson};

pub fn create_client_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_client).get(list_clients))
        .route("/:id", get(get_client).put(update_client).delete(delete_client))
}

/// Create a client
#[utoipa::path(
    post,
    path = "/clients",
    tag = "Clients",
    request_body = ClientRequest,
    responses(
        (status = 201, description = "Created", body = CreatedId),
        (status = 400, description = "Malformed JSON or failed validation", body = ErrorResponse),
        (status = 500, description = "Storage error", body = ErrorResponse)
    )
)]
pub async fn create_client(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<ClientRequest>,
) -> AppResult<(StatusCode, Json<CreatedId>)> {
    crud::create::<Clients>(&state, &request).await
}

/// List all clients
#[utoipa::path(
    get,
    path = "/clients",
    tag = "Clients",
    responses(
        (status = 200, description = "All clients ordered by id", body = [Client]),
        (status = 500, description = "Storage error", body = ErrorResponse)
    )
)]
pub async fn list_clients(State(state): State<AppState>) -> AppResult<Json<Vec<Client>>> {
    crud::list::<Clients>(&state).await
}

/// Get a client by id
#[utoipa::path(
    get,
    path = "/clients/{id}",
    tag = "Clients",
    params(("id" = i32, Path, description = "Client id")),
    responses(
        (status = 200, description = "Found", body = Client),
        (status = 400, description = "Invalid id", body = ErrorResponse),
        (status = 404, description = "Not found", body = ErrorResponse)
    )
)]
pub async fn get_client(State(state): State<AppState>, PathId(id): PathId) -> AppResult<Json<Client>> {
    crud::get_one::<Clients>(&state, id).await
}

/// Replace a client
#[utoipa::path(
    put,
    path = "/clients/{id}",
    tag = "Clients",
    params(("id" = i32, Path, description = "Client id")),
    request_body = ClientRequest,
    responses(
        (status = 200, description = "Updated", body = Client),
        (status = 400, description = "Malformed JSON, failed validation or invalid id", body = ErrorResponse),
        (status = 404, description = "Not found", body = ErrorResponse),
        (status = 500, description = "Storage error", body = ErrorResponse)
    )
)]
pub async fn update_client(
    State(state): State<AppState>,
    PathId(id): PathId,
    ValidatedJson(request): ValidatedJson<ClientRequest>,
) -> AppResult<Json<Client>> {
    crud::update::<Clients>(&state, id, &request).await
}

/// Delete a client
#[utoipa::path(
    delete,
    path = "/clients/{id}",
    tag = "Clients",
    params(("id" = i32, Path, description = "Client id")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 400, description = "Invalid id", body = ErrorResponse),
        (status = 404, description = "Not found", body = ErrorResponse),
        (status = 409, description = "Still referenced by other records", body = ErrorResponse),
        (status = 500, description = "Storage error", body = ErrorResponse)
    )
)]
pub async fn delete_client(State(state): State<AppState>, PathId(id): PathId) -> AppResult<StatusCode> {
    crud::delete::<Clients>(&state, id).await
}
