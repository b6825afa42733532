//! Modelo de Driver
//!
//! Conductor registrado; `availability` decide si puede recibir rutas
//! automáticamente.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Driver principal - mapea a la tabla drivers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Driver {
    pub id: i32,
    pub name: String,
    pub license_type: String,
    pub availability: bool,
}

/// Datos para insertar un nuevo conductor
#[derive(Debug, Clone)]
pub struct NewDriver {
    pub name: String,
    pub license_type: String,
    pub availability: bool,
}

impl NewDriver {
    pub fn into_driver(self, id: i32) -> Driver {
        Driver {
            id,
            name: self.name,
            license_type: self.license_type,
            availability: self.availability,
        }
    }
}
