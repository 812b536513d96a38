//! Vehículos: `/car`, montado también como `/vehicles`
//!
//! Además del CRUD completo, los vehículos admiten la actualización
//! parcial por campo (`PATCH /:id`).

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};

use crate::models::{Vehicle, VehiclePatch, VehicleRequest};
use crate::routes::crud::{self, CreatedId};
use crate::routes::resources::Vehicles;
use crate::state::AppState;
use crate::utils::errors::{bad_request_error, AppResult, ErrorResponse};
use crate::utils::extract::{PathId, ValidatedJson};

pub fn create_vehicle_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_vehicle).get(list_vehicles))
        .route(
            "/:id",
            get(get_vehicle)
                .put(update_vehicle)
                .patch(patch_vehicle)
                .delete(delete_vehicle),
        )
}

/// Create a vehicle
#[utoipa::path(
    post,
    path = "/car",
    tag = "Vehicles",
    request_body = VehicleRequest,
    responses(
        (status = 201, description = "Created", body = CreatedId),
        (status = 400, description = "Malformed JSON or failed validation", body = ErrorResponse),
        (status = 500, description = "Storage error", body = ErrorResponse)
    )
)]
pub async fn create_vehicle(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<VehicleRequest>,
) -> AppResult<(StatusCode, Json<CreatedId>)> {
    crud::create::<Vehicles>(&state, &request).await
}

/// List the car park
#[utoipa::path(
    get,
    path = "/car",
    tag = "Vehicles",
    responses(
        (status = 200, description = "All vehicles ordered by id", body = [Vehicle]),
        (status = 500, description = "Storage error", body = ErrorResponse)
    )
)]
pub async fn list_vehicles(State(state): State<AppState>) -> AppResult<Json<Vec<Vehicle>>> {
    crud::list::<Vehicles>(&state).await
}

/// Get a vehicle by id
#[utoipa::path(
    get,
    path = "/car/{id}",
    tag = "Vehicles",
    params(("id" = i32, Path, description = "Vehicle id")),
    responses(
        (status = 200, description = "Found", body = Vehicle),
        (status = 400, description = "Invalid id", body = ErrorResponse),
        (status = 404, description = "Not found", body = ErrorResponse)
    )
)]
pub async fn get_vehicle(State(state): State<AppState>, PathId(id): PathId) -> AppResult<Json<Vehicle>> {
    crud::get_one::<Vehicles>(&state, id).await
}

/// Replace a vehicle
#[utoipa::path(
    put,
    path = "/car/{id}",
    tag = "Vehicles",
    params(("id" = i32, Path, description = "Vehicle id")),
    request_body = VehicleRequest,
    responses(
        (status = 200, description = "Updated", body = Vehicle),
        (status = 400, description = "Malformed JSON, failed validation or invalid id", body = ErrorResponse),
        (status = 404, description = "Not found", body = ErrorResponse),
        (status = 500, description = "Storage error", body = ErrorResponse)
    )
)]
pub async fn update_vehicle(
    State(state): State<AppState>,
    PathId(id): PathId,
    ValidatedJson(request): ValidatedJson<VehicleRequest>,
) -> AppResult<Json<Vehicle>> {
    crud::update::<Vehicles>(&state, id, &request).await
}

/// Update only the given fields of a vehicle
#[utoipa::path(
    patch,
    path = "/car/{id}",
    tag = "Vehicles",
    params(("id" = i32, Path, description = "Vehicle id")),
    request_body = VehiclePatch,
    responses(
        (status = 200, description = "Patched", body = Vehicle),
        (status = 400, description = "Empty patch, unknown field, failed validation or invalid id", body = ErrorResponse),
        (status = 404, description = "Not found", body = ErrorResponse),
        (status = 500, description = "Storage error", body = ErrorResponse)
    )
)]
pub async fn patch_vehicle(
    State(state): State<AppState>,
    PathId(id): PathId,
    ValidatedJson(changes): ValidatedJson<VehiclePatch>,
) -> AppResult<Json<Vehicle>> {
    if changes.is_empty() {
        return Err(bad_request_error("no fields to update"));
    }

    let vehicle = state.vehicles.patch(id, changes).await?;
    Ok(Json(vehicle))
}

/// Delete a vehicle
#[utoipa::path(
    delete,
    path = "/car/{id}",
    tag = "Vehicles",
    params(("id" = i32, Path, description = "Vehicle id")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 400, description = "Invalid id", body = ErrorResponse),
        (status = 404, description = "Not found", body = ErrorResponse),
        (status = 409, description = "Referenced by an order", body = ErrorResponse),
        (status = 500, description = "Storage error", body = ErrorResponse)
    )
)]
pub async fn delete_vehicle(State(state): State<AppState>, PathId(id): PathId) -> AppResult<StatusCode> {
    crud::delete::<Vehicles>(&state, id).await
}
