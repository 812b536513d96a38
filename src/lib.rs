//! KEEPER: API REST para la gestión de concesionarios
//!
//! Concesionarios, empleados, contratos, clientes, vehículos, pedidos y
//! citas sobre PostgreSQL, servidos con Axum.

pub mod config;
pub mod database;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod state;
pub mod utils;

pub use routes::{build_app, create_router};
pub use state::AppState;
