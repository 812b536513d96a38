//! Modelos del sistema
//!
//! Este módulo contiene todos los modelos de datos que mapean exactamente
//! al schema PostgreSQL, junto con los payloads validados de cada endpoint.

pub mod appointment;
pub mod client;
pub mod dealership;
pub mod employee;
pub mod employment;
pub mod order;
pub mod vehicle;

pub use appointment::{Appointment, AppointmentRequest};
pub use client::{Client, ClientRequest, ClientType};
pub use dealership::{Dealership, DealershipRequest};
pub use employee::{Employee, EmployeeRequest, EmployeeRole};
pub use employment::{Employment, EmploymentRequest};
pub use order::{Order, OrderRequest, OrderStatus};
pub use vehicle::{Vehicle, VehicleCondition, VehiclePatch, VehicleRequest};
