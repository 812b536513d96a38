//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum: un repositorio por entidad.

use sqlx::PgPool;
use std::sync::Arc;

use crate::repositories::{
    AppointmentRepository, ClientRepository, DealershipRepository, EmployeeRepository,
    EmploymentRepository, OrderRepository, PgAppointmentRepository, PgClientRepository,
    PgDealershipRepository, PgEmployeeRepository, PgEmploymentRepository, PgOrderRepository,
    PgVehicleRepository, VehicleRepository,
};

#[derive(Clone)]
pub struct AppState {
    pub dealerships: Arc<dyn DealershipRepository>,
    pub employees: Arc<dyn EmployeeRepository>,
    pub employments: Arc<dyn EmploymentRepository>,
    pub clients: Arc<dyn ClientRepository>,
    pub vehicles: Arc<dyn VehicleRepository>,
    pub orders: Arc<dyn OrderRepository>,
    pub appointments: Arc<dyn AppointmentRepository>,
}

impl AppState {
    /// Estado respaldado por PostgreSQL; todos los repositorios comparten el pool
    pub fn from_pool(pool: PgPool) -> Self {
        Self {
            dealerships: Arc::new(PgDealershipRepository::new(pool.clone())),
            employees: Arc::new(PgEmployeeRepository::new(pool.clone())),
            employments: Arc::new(PgEmploymentRepository::new(pool.clone())),
            clients: Arc::new(PgClientRepository::new(pool.clone())),
            vehicles: Arc::new(PgVehicleRepository::new(pool.clone())),
            orders: Arc::new(PgOrderRepository::new(pool.clone())),
            appointments: Arc::new(PgAppointmentRepository::new(pool)),
        }
    }
}
