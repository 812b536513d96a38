//! Documentación OpenAPI
//!
//! El documento se genera a partir de las anotaciones `#[utoipa::path]` de
//! cada handler y se sirve junto con Swagger UI en `/swagger`.

use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::models::{
    Appointment, AppointmentRequest, Client, ClientRequest, ClientType, Dealership,
    DealershipRequest, Employee, EmployeeRequest, EmployeeRole, Employment, EmploymentRequest,
    Order, OrderRequest, OrderStatus, Vehicle, VehicleCondition, VehiclePatch, VehicleRequest,
};
use crate::routes::crud::CreatedId;
use crate::routes::{
    appointment_routes, client_routes, dealership_routes, employee_routes, employment_routes,
    order_routes, vehicle_routes,
};
use crate::utils::errors::ErrorResponse;

pub const OPENAPI_JSON_PATH: &str = "/api-docs/openapi.json";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "KEEPER API",
        version = "1.0",
        description = "API for the KEEPER Dealership Management System.",
        license(name = "Apache 2.0", url = "http://www.apache.org/licenses/LICENSE-2.0.html")
    ),
    paths(
        crate::routes::healthcheck,
        dealership_routes::create_dealership,
        dealership_routes::list_dealerships,
        dealership_routes::get_dealership,
        dealership_routes::update_dealership,
        dealership_routes::delete_dealership,
        employee_routes::create_employee,
        employee_routes::list_employees,
        employee_routes::get_employee,
        employee_routes::update_employee,
        employee_routes::delete_employee,
        employment_routes::create_employment,
        employment_routes::list_employments,
        employment_routes::get_employment,
        employment_routes::update_employment,
        employment_routes::delete_employment,
        client_routes::create_client,
        client_routes::list_clients,
        client_routes::get_client,
        client_routes::update_client,
        client_routes::delete_client,
        vehicle_routes::create_vehicle,
        vehicle_routes::list_vehicles,
        vehicle_routes::get_vehicle,
        vehicle_routes::update_vehicle,
        vehicle_routes::patch_vehicle,
        vehicle_routes::delete_vehicle,
        order_routes::create_order,
        order_routes::list_orders,
        order_routes::get_order,
        order_routes::update_order,
        order_routes::delete_order,
        appointment_routes::create_appointment,
        appointment_routes::list_appointments,
        appointment_routes::get_appointment,
        appointment_routes::update_appointment,
        appointment_routes::delete_appointment
    ),
    components(schemas(
        CreatedId,
        ErrorResponse,
        Dealership,
        DealershipRequest,
        Employee,
        EmployeeRequest,
        EmployeeRole,
        Employment,
        EmploymentRequest,
        Client,
        ClientRequest,
        ClientType,
        Vehicle,
        VehicleRequest,
        VehiclePatch,
        VehicleCondition,
        Order,
        OrderRequest,
        OrderStatus,
        Appointment,
        AppointmentRequest
    )),
    tags(
        (name = "Health", description = "Service liveness"),
        (name = "Dealerships", description = "Physical sales branches"),
        (name = "Employees", description = "Dealership staff"),
        (name = "Employments", description = "Assignments of employees to dealerships"),
        (name = "Clients", description = "Private and company customers"),
        (name = "Vehicles", description = "Car park inventory, also served under /vehicles"),
        (name = "Orders", description = "Sales orders"),
        (name = "Appointments", description = "Client appointments")
    )
)]
pub struct ApiDoc;

/// Swagger UI en `/swagger` sirviendo el documento en `OPENAPI_JSON_PATH`
pub fn swagger_ui() -> SwaggerUi {
    SwaggerUi::new("/swagger").url(OPENAPI_JSON_PATH, ApiDoc::openapi())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_resource_is_documented() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&String> = doc.paths.paths.keys().collect();

        for path in [
            "/healthcheck",
            "/dealerships",
            "/dealerships/{id}",
            "/employees/{id}",
            "/employments/{id}",
            "/clients/{id}",
            "/car",
            "/car/{id}",
            "/orders/{id}",
            "/appointments/{id}",
        ] {
            assert!(paths.iter().any(|p| p.as_str() == path), "missing {}", path);
        }
    }

    #[test]
    fn test_info_metadata() {
        let doc = ApiDoc::openapi();
        assert_eq!(doc.info.title, "KEEPER API");
        assert_eq!(doc.info.version, "1.0");
        assert_eq!(doc.info.license.map(|l| l.name), Some("Apache 2.0".to_string()));
    }
}
