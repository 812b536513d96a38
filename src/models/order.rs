//! Modelo de Order
//!
//! Transacción de venta que enlaza cliente, empleado, vehículo (por VIN)
//! y dealership. `last_update` lo gestiona el servidor.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use validator::Validate;
use utoipa::ToSchema;

use crate::utils::validation::VIN_REGEX;

/// Estado del pedido - mapea al ENUM order_status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Type, ToSchema)]
#[sqlx(type_name = "order_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
    Cancelled,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Order {
    pub id_order: i32,
    pub status: OrderStatus,
    pub id_client: i32,
    pub id_employee: i32,
    pub vin: String,
    pub id_dealership: i32,
    pub last_update: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct OrderRequest {
    #[serde(default)]
    pub status: OrderStatus,

    #[validate(range(min = 1))]
    pub id_client: i32,

    #[validate(range(min = 1))]
    pub id_employee: i32,

    #[validate(regex(path = "VIN_REGEX", code = "vin"))]
    pub vin: String,

    #[validate(range(min = 1))]
    pub id_dealership: i32,
}
