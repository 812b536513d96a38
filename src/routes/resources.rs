//! Recursos REST expuestos por la API

use crate::repositories::{
    AppointmentRepository, ClientRepository, DealershipRepository, EmployeeRepository,
    EmploymentRepository, OrderRepository, VehicleRepository,
};
use crate::routes::crud::Resource;
use crate::state::AppState;

pub struct Dealerships;
pub struct Employees;
pub struct Employments;
pub struct Clients;
pub struct Vehicles;
pub struct Orders;
pub struct Appointments;

impl Resource for Dealerships {
    type Repository = dyn DealershipRepository;

    fn repository(state: &AppState) -> &Self::Repository {
        state.dealerships.as_ref()
    }
}

impl Resource for Employees {
    type Repository = dyn EmployeeRepository;

    fn repository(state: &AppState) -> &Self::Repository {
        state.employees.as_ref()
    }
}

impl Resource for Employments {
    type Repository = dyn EmploymentRepository;

    fn repository(state: &AppState) -> &Self::Repository {
        state.employments.as_ref()
    }
}

impl Resource for Clients {
    type Repository = dyn ClientRepository;

    fn repository(state: &AppState) -> &Self::Repository {
        state.clients.as_ref()
    }
}

impl Resource for Vehicles {
    type Repository = dyn VehicleRepository;

    fn repository(state: &AppState) -> &Self::Repository {
        state.vehicles.as_ref()
    }
}

impl Resource for Orders {
    type Repository = dyn OrderRepository;

    fn repository(state: &AppState) -> &Self::Repository {
        state.orders.as_ref()
    }
}

impl Resource for Appointments {
    type Repository = dyn AppointmentRepository;

    fn repository(state: &AppState) -> &Self::Repository {
        state.appointments.as_ref()
    }
}
