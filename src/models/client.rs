//! Modelo de Client
//!
//! Un cliente puede ser particular (`private`) o empresa (`company`).
//! Apellido y razón social son opcionales para ambos tipos.

use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use utoipa::ToSchema;
use validator::Validate;

/// Tipo de cliente - mapea al ENUM client_type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type, ToSchema)]
#[sqlx(type_name = "client_type", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ClientType {
    Private,
    Company,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Client {
    pub id_client: i32,
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub client_type: ClientType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub tin_vat: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub surname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profession: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct ClientRequest {
    #[serde(rename = "type")]
    pub client_type: ClientType,

    #[validate(length(max = 20))]
    pub phone: Option<String>,

    #[validate(email, length(max = 50))]
    pub email: Option<String>,

    #[validate(length(min = 1, max = 16))]
    pub tin_vat: String,

    #[validate(length(min = 1, max = 50))]
    pub name: String,

    #[validate(length(max = 50))]
    pub surname: Option<String>,

    #[serde(alias = "companyname")]
    #[validate(length(max = 100))]
    pub company_name: Option<String>,

    #[validate(length(max = 50))]
    pub profession: Option<String>,
}
