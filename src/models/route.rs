//! Modelo de Route
//!
//! Este módulo contiene el struct Route, inmutable una vez creado.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Route principal - mapea a la tabla routes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Route {
    pub id: i32,
    pub start_location: String,
    pub end_location: String,
    pub distance: f64,
    pub estimated_time: f64,
}

impl Route {
    /// Etiqueta legible `"origen -> destino"`
    pub fn label(&self) -> String {
        format!("{} -> {}", self.start_location, self.end_location)
    }
}

/// Datos para insertar una nueva ruta
#[derive(Debug, Clone, PartialEq)]
pub struct NewRoute {
    pub start_location: String,
    pub end_location: String,
    pub distance: f64,
    pub estimated_time: f64,
}

impl NewRoute {
    pub fn into_route(self, id: i32) -> Route {
        Route {
            id,
            start_location: self.start_location,
            end_location: self.end_location,
            distance: self.distance,
            estimated_time: self.estimated_time,
        }
    }
}

/// Ruta junto al nombre del conductor de su primera asignación, si existe
#[derive(Debug, Clone, FromRow)]
pub struct RouteWithDriver {
    #[sqlx(flatten)]
    pub route: Route,
    pub driver_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_label() {
        let route = NewRoute {
            start_location: "Lyon".to_string(),
            end_location: "Marseille".to_string(),
            distance: 315.0,
            estimated_time: 190.0,
        }
        .into_route(1);

        assert_eq!(route.label(), "Lyon -> Marseille");
    }
}
