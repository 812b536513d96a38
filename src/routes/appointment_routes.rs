//! Citas con clientes: `/appointments`

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};

use crate::models::{Appointment, AppointmentRequest};
use crate::routes::crud::{self, CreatedId};
use crate::routes::resources::Appointments;
use crate::state::AppState;
use crate::utils::errors::{AppResult, ErrorResponse};
use crate::utils::extract::{PathId, ValidatedJson};

pub fn create_appointment_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_appointment).get(list_appointments))
        .route("/:id", get(get_appointment).put(update_appointment).delete(delete_appointment))
}

/// Create a appointment
#[utoipa::path(
    post,
    path = "/appointments",
    tag = "Appointments",
    request_body = AppointmentRequest,
    responses(
        (status = 201, description = "Created", body = CreatedId),
        (status = 400, description = "Malformed JSON or failed validation", body = ErrorResponse),
        (status = 500, description = "Storage error", body = ErrorResponse)
    )
)]
pub async fn create_appointment(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<AppointmentRequest>,
) -> AppResult<(StatusCode, Json<CreatedId>)> {
    crud::create::<Appointments>(&state, &request).await
}

/// List all appointments
#[utoipa::path(
    get,
    path = "/appointments",
    tag = "Appointments",
    responses(
        (status = 200, description = "All appointments ordered by id", body = [Appointment]),
        (status = 500, description = "Storage error", body = ErrorResponse)
    )
)]
pub async fn list_appointments(State(state): State<AppState>) -> AppResult<Json<Vec<Appointment>>> {
    crud::list::<Appointments>(&state).await
}

/// Get a appointment by id
#[utoipa::path(
    get,
    path = "/appointments/{id}",
    tag = "Appointments",
    params(("id" = i32, Path, description = "Appointment id")),
    responses(
        (status = 200, description = "Found", body = Appointment),
        (status = 400, description = "Invalid id", body = ErrorResponse),
        (status = 404, description = "Not found", body = ErrorResponse)
    )
)]
pub async fn get_appointment(State(state): State<AppState>, PathId(id): PathId) -> AppResult<Json<Appointment>> {
    crud::get_one::<Appointments>(&state, id).await
}

/// Replace a appointment
#[utoipa::path(
    put,
    path = "/appointments/{id}",
    tag = "Appointments",
    params(("id" = i32, Path, description = "Appointment id")),
    request_body = AppointmentRequest,
    responses(
        (status = 200, description = "Updated", body = Appointment),
        (status = 400, description = "Malformed JSON, failed validation or invalid id", body = ErrorResponse),
        (status = 404, description = "Not found", body = ErrorResponse),
        (status = 500, description = "Storage error", body = ErrorResponse)
    )
)]
pub async fn update_appointment(
    State(state): State<AppState>,
    PathId(id): PathId,
    ValidatedJson(request): ValidatedJson<AppointmentRequest>,
) -> AppResult<Json<Appointment>> {
    crud::update::<Appointments>(&state, id, &request).await
}

/// Delete a appointment
#[utoipa::path(
    delete,
    path = "/appointments/{id}",
    tag = "Appointments",
    params(("id" = i32, Path, description = "Appointment id")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 400, description = "Invalid id", body = ErrorResponse),
        (status = 404, description = "Not found", body = ErrorResponse),
        (status = 500, description = "Storage error", body = ErrorResponse)
    )
)]
pub async fn delete_appointment(State(state): State<AppState>, PathId(id): PathId) -> AppResult<StatusCode> {
    crud::delete::<Appointments>(&state, id).await
}
