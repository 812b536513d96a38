//! Modelo de Appointment

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Appointment {
    pub id_appointment: i32,
    pub id_client: i32,
    pub id_employee: i32,
    pub id_dealership: i32,
    pub date: DateTime<Utc>,
    pub reason: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Request de cita; `date` en formato RFC 3339
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct AppointmentRequest {
    #[validate(range(min = 1))]
    pub id_client: i32,

    #[validate(range(min = 1))]
    pub id_employee: i32,

    #[validate(range(min = 1))]
    pub id_dealership: i32,

    pub date: DateTime<Utc>,

    #[validate(length(min = 1, max = 100))]
    pub reason: String,

    pub notes: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_rfc3339_date() {
        let request: AppointmentRequest = serde_json::from_str(
            r#"{"id_client":1,"id_employee":2,"id_dealership":3,"date":"2025-03-10T09:30:00+01:00","reason":"test drive"}"#,
        )
        .unwrap();
        assert_eq!(request.date.to_rfc3339(), "2025-03-10T08:30:00+00:00");
        assert!(request.notes.is_none());
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_reason_is_required() {
        let request: AppointmentRequest = serde_json::from_str(
            r#"{"id_client":1,"id_employee":2,"id_dealership":3,"date":"2025-03-10T09:30:00Z","reason":""}"#,
        )
        .unwrap();
        assert!(request.validate().unwrap_err().field_errors().contains_key("reason"));
    }
}
