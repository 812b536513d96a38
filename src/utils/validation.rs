//! Utilidades de validación
//!
//! Este módulo contiene expresiones y funciones helper compartidas por
//! las validaciones declaradas en los modelos.

use chrono::NaiveDate;
use lazy_static::lazy_static;
use regex::Regex;
use validator::ValidationError;

lazy_static! {
    /// VIN: exactamente 17 caracteres alfanuméricos
    pub static ref VIN_REGEX: Regex = Regex::new(r"^[A-Za-z0-9]{17}$").unwrap();
}

/// Validar que un string no esté vacío ni sea solo espacios
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("not_blank");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

/// Validar que la fecha de fin no sea anterior a la de inicio
pub fn validate_date_order(start: NaiveDate, end: Option<NaiveDate>) -> Result<(), ValidationError> {
    match end {
        Some(end) if end < start => {
            let mut error = ValidationError::new("date_order");
            error.add_param("start_date".into(), &start.to_string());
            error.add_param("end_date".into(), &end.to_string());
            error.message = Some("end_date must not precede start_date".into());
            Err(error)
        }
        _ => Ok(()),
    }
}
