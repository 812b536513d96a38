//! Rutas de la API
//!
//! Cada entidad se monta bajo su propio prefijo; los vehículos se exponen
//! tanto en `/car` como en `/vehicles`. La documentación OpenAPI se sirve
//! en `/swagger`.

pub mod appointment_routes;
pub mod client_routes;
pub mod crud;
pub mod dealership_routes;
pub mod employee_routes;
pub mod employment_routes;
pub mod openapi;
pub mod order_routes;
pub mod resources;
pub mod vehicle_routes;

use axum::{middleware, routing::get, Json, Router};
use serde_json::{json, Value};
use tower::ServiceBuilder;
use tower_http::{
    catch_panic::CatchPanicLayer, compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer,
};

use crate::middleware::{handle_panic, log_errors};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/healthcheck", get(healthcheck))
        .nest("/dealerships", dealership_routes::create_dealership_router())
        .nest("/employees", employee_routes::create_employee_router())
        .nest("/employments", employment_routes::create_employment_router())
        .nest("/clients", client_routes::create_client_router())
        .nest("/car", vehicle_routes::create_vehicle_router())
        .nest("/vehicles", vehicle_routes::create_vehicle_router())
        .nest("/orders", order_routes::create_order_router())
        .nest("/appointments", appointment_routes::create_appointment_router())
        .merge(openapi::swagger_ui())
        .method_not_allowed_fallback(method_not_allowed)
        .fallback(route_not_found)
}

/// Aplicación completa: rutas, middleware y estado
pub fn build_app(state: AppState, cors: CorsLayer) -> Router {
    create_router()
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(middleware::from_fn(log_errors))
                .layer(CatchPanicLayer::custom(handle_panic)),
        )
        .layer(cors)
        .with_state(state)
}

/// Health check
#[utoipa::path(
    get,
    path = "/healthcheck",
    tag = "Health",
    responses((status = 200, description = "Service is available"))
)]
pub async fn healthcheck() -> Json<Value> {
    Json(json!({ "status": "available" }))
}

async fn route_not_found() -> AppError {
    AppError::NotFound("route not found".to_string())
}

async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
