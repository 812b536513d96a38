//! Repositorios en memoria y helpers HTTP para los tests de la API

#![allow(dead_code)]

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI32, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, HeaderMap, Method, Request, StatusCode},
    Router,
};
use chrono::Utc;
use http_body_util::BodyExt;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use tower::ServiceExt;
use tower_http::cors::CorsLayer;
use validator::Validate;

use keeper::models::{
    Appointment, AppointmentRequest, Client, ClientRequest, Dealership, DealershipRequest,
    Employee, EmployeeRequest, Employment, EmploymentRequest, Order, OrderRequest, Vehicle,
    VehiclePatch, VehicleRequest,
};
use keeper::repositories::dependency_guard::DependencyReport;
use keeper::repositories::{CrudRepository, VehicleRepository};
use keeper::utils::errors::{not_found_error, AppResult};
use keeper::{build_app, AppState};

/// Fila almacenable en un `MemoryRepo`
pub trait Row: Clone + Serialize + Send + Sync + 'static {
    type Request: DeserializeOwned + Validate + Send + Sync + 'static;

    const ENTITY: &'static str;

    fn build(id: i32, request: &Self::Request) -> Self;
}

type Guard = Box<dyn Fn(i32) -> DependencyReport + Send + Sync>;

pub struct MemoryRepo<T: Row> {
    rows: Mutex<BTreeMap<i32, T>>,
    next_id: AtomicI32,
    guard: Option<Guard>,
}

impl<T: Row> MemoryRepo<T> {
    pub fn new() -> Self {
        Self {
            rows: Mutex::new(BTreeMap::new()),
            next_id: AtomicI32::new(1),
            guard: None,
        }
    }

    pub fn with_guard(guard: impl Fn(i32) -> DependencyReport + Send + Sync + 'static) -> Self {
        Self {
            guard: Some(Box::new(guard)),
            ..Self::new()
        }
    }

    pub fn rows(&self) -> Vec<T> {
        self.rows.lock().unwrap().values().cloned().collect()
    }
}

#[async_trait]
impl<T: Row> CrudRepository for MemoryRepo<T> {
    type Record = T;
    type Request = T::Request;

    async fn create(&self, request: &T::Request) -> AppResult<i32> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        self.rows.lock().unwrap().insert(id, T::build(id, request));
        Ok(id)
    }

    async fn list(&self) -> AppResult<Vec<T>> {
        Ok(self.rows())
    }

    async fn find_by_id(&self, id: i32) -> AppResult<T> {
        self.rows
            .lock()
            .unwrap()
            .get(&id)
            .cloned()
            .ok_or_else(|| not_found_error(T::ENTITY, id))
    }

    async fn update(&self, id: i32, request: &T::Request) -> AppResult<T> {
        let mut rows = self.rows.lock().unwrap();
        let row = rows.get_mut(&id).ok_or_else(|| not_found_error(T::ENTITY, id))?;
        *row = T::build(id, request);
        Ok(row.clone())
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        if !self.rows.lock().unwrap().contains_key(&id) {
            return Err(not_found_error(T::ENTITY, id));
        }
        if let Some(guard) = &self.guard {
            guard(id).into_result()?;
        }
        self.rows.lock().unwrap().remove(&id);
        Ok(())
    }
}

#[async_trait]
impl VehicleRepository for MemoryRepo<Vehicle> {
    async fn patch(&self, id: i32, patch: VehiclePatch) -> AppResult<Vehicle> {
        let mut rows = self.rows.lock().unwrap();
        let vehicle = rows.get_mut(&id).ok_or_else(|| not_found_error("vehicle", id))?;
        vehicle.apply_patch(patch);
        Ok(vehicle.clone())
    }
}

impl Row for Dealership {
    type Request = DealershipRequest;
    const ENTITY: &'static str = "dealership";

    fn build(id: i32, r: &DealershipRequest) -> Self {
        Dealership {
            id_dealership: id,
            postal_code: r.postal_code.clone(),
            city: r.city.clone(),
            address: r.address.clone(),
            phone: r.phone.clone(),
        }
    }
}

impl Row for Employee {
    type Request = EmployeeRequest;
    const ENTITY: &'static str = "employee";

    fn build(id: i32, r: &EmployeeRequest) -> Self {
        Employee {
            id_employee: id,
            role: r.role,
            tin: r.tin.clone(),
            name: r.name.clone(),
            surname: r.surname.clone(),
            phone: r.phone.clone(),
        }
    }
}

impl Row for Employment {
    type Request = EmploymentRequest;
    const ENTITY: &'static str = "employment";

    fn build(id: i32, r: &EmploymentRequest) -> Self {
        Employment {
            id_employment: id,
            id_employee: r.id_employee,
            id_dealership: r.id_dealership,
            start_date: r.start_date,
            end_date: r.end_date,
        }
    }
}

impl Row for Client {
    type Request = ClientRequest;
    const ENTITY: &'static str = "client";

    fn build(id: i32, r: &ClientRequest) -> Self {
        Client {
            id_client: id,
            client_type: r.client_type,
            phone: r.phone.clone(),
            email: r.email.clone(),
            tin_vat: r.tin_vat.clone(),
            name: r.name.clone(),
            surname: r.surname.clone(),
            company_name: r.company_name.clone(),
            profession: r.profession.clone(),
        }
    }
}

impl Row for Vehicle {
    type Request = VehicleRequest;
    const ENTITY: &'static str = "vehicle";

    fn build(id: i32, r: &VehicleRequest) -> Self {
        Vehicle {
            id_car: id,
            vin: r.vin.clone(),
            id_dealership: r.id_dealership,
            brand: r.brand.clone(),
            model: r.model.clone(),
            condition: r.condition,
            year: r.year,
            km: r.km,
            plate: r.plate.clone(),
        }
    }
}

impl Row for Order {
    type Request = OrderRequest;
    const ENTITY: &'static str = "order";

    fn build(id: i32, r: &OrderRequest) -> Self {
        Order {
            id_order: id,
            status: r.status,
            id_client: r.id_client,
            id_employee: r.id_employee,
            vin: r.vin.clone(),
            id_dealership: r.id_dealership,
            last_update: Utc::now(),
        }
    }
}

impl Row for Appointment {
    type Request = AppointmentRequest;
    const ENTITY: &'static str = "appointment";

    fn build(id: i32, r: &AppointmentRequest) -> Self {
        Appointment {
            id_appointment: id,
            id_client: r.id_client,
            id_employee: r.id_employee,
            id_dealership: r.id_dealership,
            date: r.date,
            reason: r.reason.clone(),
            notes: r.notes.clone(),
        }
    }
}

/// Estado con repositorios en memoria vacíos y sin guardas de borrado
pub fn memory_state() -> AppState {
    AppState {
        dealerships: Arc::new(MemoryRepo::<Dealership>::new()),
        employees: Arc::new(MemoryRepo::<Employee>::new()),
        employments: Arc::new(MemoryRepo::<Employment>::new()),
        clients: Arc::new(MemoryRepo::<Client>::new()),
        vehicles: Arc::new(MemoryRepo::<Vehicle>::new()),
        orders: Arc::new(MemoryRepo::<Order>::new()),
        appointments: Arc::new(MemoryRepo::<Appointment>::new()),
    }
}

/// Aplicación de test sobre repositorios en memoria.
/// Los concesionarios no se pueden borrar mientras tengan vehículos.
pub struct TestApp {
    pub router: Router,
    pub vehicles: Arc<MemoryRepo<Vehicle>>,
}

impl TestApp {
    pub fn new() -> Self {
        let vehicles = Arc::new(MemoryRepo::<Vehicle>::new());

        let owned = Arc::clone(&vehicles);
        let dealerships = MemoryRepo::<Dealership>::with_guard(move |id| {
            let count = owned
                .rows()
                .iter()
                .filter(|vehicle| vehicle.id_dealership == id)
                .count() as i64;
            let mut report = DependencyReport::new("dealership", id);
            report.record("vehicle", count);
            report
        });

        let state = AppState {
            dealerships: Arc::new(dealerships),
            employees: Arc::new(MemoryRepo::<Employee>::new()),
            employments: Arc::new(MemoryRepo::<Employment>::new()),
            clients: Arc::new(MemoryRepo::<Client>::new()),
            vehicles: vehicles.clone(),
            orders: Arc::new(MemoryRepo::<Order>::new()),
            appointments: Arc::new(MemoryRepo::<Appointment>::new()),
        };

        Self {
            router: build_app(state, CorsLayer::permissive()),
            vehicles,
        }
    }

    pub async fn send(&self, method: Method, uri: &str, body: Option<&str>) -> (StatusCode, Value) {
        send(&self.router, method, uri, body).await
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.send(Method::GET, uri, None).await
    }

    pub async fn post(&self, uri: &str, body: &str) -> (StatusCode, Value) {
        self.send(Method::POST, uri, Some(body)).await
    }

    pub async fn put(&self, uri: &str, body: &str) -> (StatusCode, Value) {
        self.send(Method::PUT, uri, Some(body)).await
    }

    pub async fn patch(&self, uri: &str, body: &str) -> (StatusCode, Value) {
        self.send(Method::PATCH, uri, Some(body)).await
    }

    pub async fn delete(&self, uri: &str) -> (StatusCode, Value) {
        self.send(Method::DELETE, uri, None).await
    }
}

/// Enviar una request al router y devolver estado y cuerpo JSON (`Null` si vacío)
pub async fn send(router: &Router, method: Method, uri: &str, body: Option<&str>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let response = router
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, value)
}

/// Enviar una request ya construida y devolver el cuerpo como texto
pub async fn fetch_raw(router: &Router, request: Request<Body>) -> (StatusCode, HeaderMap, String) {
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, headers, String::from_utf8_lossy(&bytes).into_owned())
}

pub const DEALERSHIP: &str =
    r#"{"postal_code":"20121","city":"Milano","address":"Via Roma 1","phone":"0212345678"}"#;

pub fn vehicle_json(id_dealership: i32) -> String {
    format!(
        r#"{{"vin":"ZFA31200000123456","id_dealership":{},"brand":"Fiat","model":"Panda","condition":"used","year":2019,"km":42000,"plate":"AB123CD"}}"#,
        id_dealership
    )
}
