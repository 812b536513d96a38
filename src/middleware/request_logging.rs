//! Logging de respuestas de error
//!
//! Toda respuesta 4xx/5xx se registra con método y ruta antes de enviarse.
//! El mensaje sale de la extensión `ErrorMessage` que añade `AppError`.

use axum::{extract::Request, middleware::Next, response::Response};
use tracing::{error, warn};

use crate::utils::errors::ErrorMessage;

pub async fn log_errors(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    let response = next.run(request).await;
    let status = response.status();

    if status.is_client_error() || status.is_server_error() {
        let message = response
            .extensions()
            .get::<ErrorMessage>()
            .map(|m| m.0.as_str())
            .or_else(|| status.canonical_reason())
            .unwrap_or("error");

        if status.is_server_error() {
            error!(%method, %path, status = status.as_u16(), "{}", message);
        } else {
            warn!(%method, %path, status = status.as_u16(), "{}", message);
        }
    }

    response
}
