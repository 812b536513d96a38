//! Modelo de Employee

use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use validator::Validate;
use utoipa::ToSchema;

use crate::utils::validation::validate_not_blank;

/// Rol del empleado - mapea al ENUM employee_role
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Type, ToSchema)]
#[sqlx(type_name = "employee_role", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum EmployeeRole {
    #[default]
    Assistant,
    Salesperson,
    Manager,
    Admin,
    Mechanic,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Employee {
    pub id_employee: i32,
    pub role: EmployeeRole,
    pub tin: String,
    pub name: String,
    pub surname: String,
    pub phone: String,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct EmployeeRequest {
    #[serde(default)]
    pub role: EmployeeRole,

    #[validate(length(min = 1, max = 16))]
    pub tin: String,

    #[validate(length(min = 1, max = 50), custom = "validate_not_blank")]
    pub name: String,

    #[validate(length(min = 1, max = 50), custom = "validate_not_blank")]
    pub surname: String,

    #[validate(length(min = 1, max = 20))]
    pub phone: String,
}
