//! Modelo de Dealership
//!
//! Sede física de venta. Es la entidad padre de vehículos, contratos,
//! pedidos y citas.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;
use utoipa::ToSchema;

use crate::utils::validation::validate_not_blank;

/// Dealership principal - mapea exactamente a la tabla dealership
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Dealership {
    pub id_dealership: i32,
    pub postal_code: String,
    pub city: String,
    pub address: String,
    pub phone: String,
}

/// Request para crear o reemplazar un dealership
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct DealershipRequest {
    #[serde(alias = "postalcode")]
    #[validate(length(min = 1, max = 5))]
    pub postal_code: String,

    #[validate(length(min = 1, max = 30), custom = "validate_not_blank")]
    pub city: String,

    #[validate(length(min = 1, max = 100), custom = "validate_not_blank")]
    pub address: String,

    #[validate(length(min = 1, max = 20))]
    pub phone: String,
}
