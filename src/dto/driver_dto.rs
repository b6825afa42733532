use serde::Deserialize;
use serde_json::Value;

use crate::models::NewDriver;
use crate::utils::errors::AppResult;
use crate::utils::validation::{expect_bool_or, expect_string};

// Request para registrar un conductor. Los campos llegan como JSON crudo:
// los tipos se comprueban en la frontera de persistencia.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDriverRequest {
    pub name: Option<Value>,
    pub license_type: Option<Value>,
    pub availability: Option<Value>,
}

impl CreateDriverRequest {
    /// `name` y `licenseType` son columnas NOT NULL; su ausencia o un tipo
    /// incorrecto es un fallo de persistencia. `availability` ausente o
    /// `null` vale `true`.
    pub fn into_new_driver(self) -> AppResult<NewDriver> {
        Ok(NewDriver {
            name: expect_string("name", self.name)?,
            license_type: expect_string("licenseType", self.license_type)?,
            availability: expect_bool_or("availability", self.availability, true)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::errors::AppError;

    fn request(json: serde_json::Value) -> CreateDriverRequest {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn test_availability_defaults_to_true() {
        let driver = request(serde_json::json!({ "name": "Ana", "licenseType": "B" }))
            .into_new_driver()
            .unwrap();
        assert!(driver.availability);

        let driver = request(serde_json::json!({
            "name": "Ana", "licenseType": "B", "availability": null
        }))
        .into_new_driver()
        .unwrap();
        assert!(driver.availability);
    }

    #[test]
    fn test_explicit_false_is_kept() {
        let driver = request(serde_json::json!({
            "name": "Ana", "licenseType": "B", "availability": false
        }))
        .into_new_driver()
        .unwrap();
        assert!(!driver.availability);
    }

    #[test]
    fn test_missing_name_is_internal_error() {
        let err = request(serde_json::json!({ "licenseType": "B" }))
            .into_new_driver()
            .unwrap_err();
        assert!(matches!(err, AppError::Internal(msg) if msg.contains("name")));
    }

    #[test]
    fn test_wrong_types_are_internal_errors() {
        let err = request(serde_json::json!({ "name": 5, "licenseType": "C" }))
            .into_new_driver()
            .unwrap_err();
        assert!(matches!(err, AppError::Internal(msg) if msg.contains("`name`")));

        let err = request(serde_json::json!({
            "name": "Ana", "licenseType": "C", "availability": "yes"
        }))
        .into_new_driver()
        .unwrap_err();
        assert!(matches!(err, AppError::Internal(msg) if msg.contains("`availability`")));
    }
}
