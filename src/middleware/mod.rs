//! Middleware del sistema
//!
//! CORS, logging de errores y captura de panics.

pub mod cors;
pub mod panic;
pub mod request_logging;

pub use cors::cors_layer;
pub use panic::handle_panic;
pub use request_logging::log_errors;
