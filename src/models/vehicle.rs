//! Modelo de Vehicle
//!
//! Este módulo contiene el struct Vehicle (tabla `car_park`) y sus variantes
//! para CRUD operations, incluido el patch parcial por campo.

use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use validator::Validate;
use utoipa::ToSchema;

use crate::utils::validation::VIN_REGEX;

/// Estado del vehículo - mapea al ENUM car_condition
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Type, ToSchema)]
#[sqlx(type_name = "car_condition", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum VehicleCondition {
    #[default]
    New,
    Used,
}

/// Vehicle principal - mapea exactamente a la tabla car_park
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Vehicle {
    pub id_car: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vin: Option<String>,
    pub id_dealership: i32,
    pub brand: String,
    pub model: String,
    pub condition: VehicleCondition,
    pub year: i32,
    pub km: i32,
    pub plate: String,
}

/// Request para crear o reemplazar un vehículo
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct VehicleRequest {
    #[validate(regex(path = "VIN_REGEX", code = "vin"))]
    pub vin: Option<String>,

    #[validate(range(min = 1))]
    pub id_dealership: i32,

    #[validate(length(min = 1, max = 30))]
    pub brand: String,

    #[validate(length(min = 1, max = 30))]
    pub model: String,

    #[serde(default)]
    pub condition: VehicleCondition,

    #[validate(range(min = 1901))]
    pub year: i32,

    #[serde(default)]
    #[validate(range(min = 0, max = 9_999_999))]
    pub km: i32,

    #[validate(length(min = 1, max = 10))]
    pub plate: String,
}

/// Patch parcial de un vehículo; solo se modifican los campos presentes
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct VehiclePatch {
    #[validate(regex(path = "VIN_REGEX", code = "vin"))]
    pub vin: Option<String>,

    #[validate(range(min = 1))]
    pub id_dealership: Option<i32>,

    #[validate(length(min = 1, max = 30))]
    pub brand: Option<String>,

    #[validate(length(min = 1, max = 30))]
    pub model: Option<String>,

    pub condition: Option<VehicleCondition>,

    #[validate(range(min = 1901))]
    pub year: Option<i32>,

    #[validate(range(min = 0, max = 9_999_999))]
    pub km: Option<i32>,

    #[validate(length(min = 1, max = 10))]
    pub plate: Option<String>,
}

impl VehiclePatch {
    pub fn is_empty(&self) -> bool {
        self.vin.is_none()
            && self.id_dealership.is_none()
            && self.brand.is_none()
            && self.model.is_none()
            && self.condition.is_none()
            && self.year.is_none()
            && self.km.is_none()
            && self.plate.is_none()
    }
}

impl Vehicle {
    /// Aplicar un patch sobre el vehículo actual
    pub fn apply_patch(&mut self, patch: VehiclePatch) {
        if let Some(vin) = patch.vin {
            self.vin = Some(vin);
        }
        if let Some(id_dealership) = patch.id_dealership {
            self.id_dealership = id_dealership;
        }
        if let Some(brand) = patch.brand {
            self.brand = brand;
        }
        if let Some(model) = patch.model {
            self.model = model;
        }
        if let Some(condition) = patch.condition {
            self.condition = condition;
        }
        if let Some(year) = patch.year {
            self.year = year;
        }
        if let Some(km) = patch.km {
            self.km = km;
        }
        if let Some(plate) = patch.plate {
            self.plate = plate;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn panda() -> Vehicle {
        Vehicle {
            id_car: 7,
            vin: Some("TESTVINUPDATE0001".to_string()),
            id_dealership: 1,
            brand: "Fiat".to_string(),
            model: "Panda".to_string(),
            condition: VehicleCondition::Used,
            year: 2020,
            km: 50_000,
            plate: "AB123CD".to_string(),
        }
    }

    #[test]
    fn test_patch_only_touches_present_fields() {
        let patch: VehiclePatch = serde_json::from_str(r#"{"km": 60000}"#).unwrap();
        assert!(patch.validate().is_ok());

        let mut vehicle = panda();
        vehicle.apply_patch(patch);

        let expected = Vehicle { km: 60_000, ..panda() };
        assert_eq!(vehicle, expected);
    }

    #[test]
    fn test_patch_rejects_unknown_fields() {
        let result = serde_json::from_str::<VehiclePatch>(r#"{"mileage": 60000}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_patch() {
        let patch: VehiclePatch = serde_json::from_str("{}").unwrap();
        assert!(patch.is_empty());
    }

    #[test]
    fn test_patch_validation() {
        let patch: VehiclePatch = serde_json::from_str(r#"{"year": 1900, "vin": "SHORT"}"#).unwrap();
        let errors = patch.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("year"));
        assert!(fields.contains_key("vin"));
    }

    #[test]
    fn test_request_defaults() {
        let request: VehicleRequest = serde_json::from_str(
            r#"{"id_dealership":1,"brand":"Fiat","model":"Panda","year":2020,"plate":"AB123CD"}"#,
        )
        .unwrap();
        assert_eq!(request.condition, VehicleCondition::New);
        assert_eq!(request.km, 0);
        assert!(request.vin.is_none());
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_request_rejects_bad_vin_and_negative_km() {
        let request: VehicleRequest = serde_json::from_str(
            r#"{"vin":"12345","id_dealership":1,"brand":"Fiat","model":"Panda","year":2020,"km":-1,"plate":"AB123CD"}"#,
        )
        .unwrap();
        let errors = request.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("vin"));
        assert!(fields.contains_key("km"));
    }
}
