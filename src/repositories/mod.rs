//! Repositorios de persistencia
//!
//! Cada entidad expone un trait estrecho sobre el contrato común
//! `CrudRepository`; las implementaciones `Pg*` usan SQLx sobre PostgreSQL.

pub mod appointment_repository;
pub mod client_repository;
pub mod dealership_repository;
pub mod dependency_guard;
pub mod employee_repository;
pub mod employment_repository;
pub mod order_repository;
pub mod vehicle_repository;

use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};
use validator::Validate;

use crate::models::{
    Appointment, AppointmentRequest, Client, ClientRequest, Dealership, DealershipRequest,
    Employee, EmployeeRequest, Employment, EmploymentRequest, Order, OrderRequest, Vehicle,
    VehiclePatch, VehicleRequest,
};
use crate::utils::errors::AppResult;

pub use appointment_repository::PgAppointmentRepository;
pub use client_repository::PgClientRepository;
pub use dealership_repository::PgDealershipRepository;
pub use employee_repository::PgEmployeeRepository;
pub use employment_repository::PgEmploymentRepository;
pub use order_repository::PgOrderRepository;
pub use vehicle_repository::PgVehicleRepository;

/// Contrato CRUD común a todas las entidades
#[async_trait]
pub trait CrudRepository: Send + Sync {
    type Record: Serialize + Send + Sync + 'static;
    type Request: DeserializeOwned + Validate + Send + Sync + 'static;

    /// Insertar y devolver el id generado
    async fn create(&self, request: &Self::Request) -> AppResult<i32>;

    async fn list(&self) -> AppResult<Vec<Self::Record>>;

    async fn find_by_id(&self, id: i32) -> AppResult<Self::Record>;

    /// Reemplazo completo de la fila; `NotFound` si el id no existe
    async fn update(&self, id: i32, request: &Self::Request) -> AppResult<Self::Record>;

    /// Borrado físico; `Conflict` si otras filas aún la referencian
    async fn delete(&self, id: i32) -> AppResult<()>;
}

pub trait DealershipRepository:
    CrudRepository<Record = Dealership, Request = DealershipRequest>
{
}

impl<T> DealershipRepository for T where
    T: CrudRepository<Record = Dealership, Request = DealershipRequest>
{
}

pub trait EmployeeRepository: CrudRepository<Record = Employee, Request = EmployeeRequest> {}

impl<T> EmployeeRepository for T where T: CrudRepository<Record = Employee, Request = EmployeeRequest> {}

pub trait EmploymentRepository:
    CrudRepository<Record = Employment, Request = EmploymentRequest>
{
}

impl<T> EmploymentRepository for T where
    T: CrudRepository<Record = Employment, Request = EmploymentRequest>
{
}

pub trait ClientRepository: CrudRepository<Record = Client, Request = ClientRequest> {}

impl<T> ClientRepository for T where T: CrudRepository<Record = Client, Request = ClientRequest> {}

pub trait OrderRepository: CrudRepository<Record = Order, Request = OrderRequest> {}

impl<T> OrderRepository for T where T: CrudRepository<Record = Order, Request = OrderRequest> {}

pub trait AppointmentRepository:
    CrudRepository<Record = Appointment, Request = AppointmentRequest>
{
}

impl<T> AppointmentRepository for T where
    T: CrudRepository<Record = Appointment, Request = AppointmentRequest>
{
}

/// Los vehículos admiten además el patch parcial por campo
#[async_trait]
pub trait VehicleRepository: CrudRepository<Record = Vehicle, Request = VehicleRequest> {
    async fn patch(&self, id: i32, patch: VehiclePatch) -> AppResult<Vehicle>;
}
