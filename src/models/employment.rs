//! Modelo de Employment
//!
//! Asignación temporal de un empleado a un dealership. `end_date` nulo
//! significa que el contrato sigue vigente.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::{Validate, ValidationError};
use utoipa::ToSchema;

use crate::utils::validation::validate_date_order;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Employment {
    pub id_employment: i32,
    pub id_employee: i32,
    pub id_dealership: i32,
    pub start_date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
}

/// Request de employment; las fechas usan el formato `YYYY-MM-DD`
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[validate(schema(function = "validate_employment_period"))]
pub struct EmploymentRequest {
    #[validate(range(min = 1))]
    pub id_employee: i32,

    #[validate(range(min = 1))]
    pub id_dealership: i32,

    #[serde(alias = "startdate")]
    pub start_date: NaiveDate,

    #[serde(default, alias = "enddate")]
    pub end_date: Option<NaiveDate>,
}

fn validate_employment_period(request: &EmploymentRequest) -> Result<(), ValidationError> {
    validate_date_order(request.start_date, request.end_date)
}
