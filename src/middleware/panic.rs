use axum::response::{IntoResponse, Response};
use std::any::Any;

use crate::utils::errors::internal_error;

/// Convierte un panic de un handler en un 500 con cuerpo JSON
pub fn handle_panic(payload: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };
    tracing::error!(%detail, "💥 Panic en handler");

    internal_error("internal server error").into_response()
}
