use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::{NewRoute, Route};
use crate::utils::errors::{required_fields_error, AppResult};
use crate::utils::validation::{expect_number, expect_string, is_truthy};

// Request para crear una ruta. Los campos llegan como JSON crudo para poder
// aplicar la regla "falsy = ausente" antes de comprobar tipos.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRouteRequest {
    pub start_location: Option<Value>,
    pub end_location: Option<Value>,
    pub distance: Option<Value>,
    pub estimated_time: Option<Value>,
}

impl CreateRouteRequest {
    pub fn into_new_route(self) -> AppResult<NewRoute> {
        let missing: Vec<&'static str> = [
            ("startLocation", &self.start_location),
            ("endLocation", &self.end_location),
            ("distance", &self.distance),
            ("estimatedTime", &self.estimated_time),
        ]
        .into_iter()
        .filter(|&(_, value)| !is_truthy(value.as_ref()))
        .map(|(field, _)| field)
        .collect();

        if !missing.is_empty() {
            return Err(required_fields_error(&missing));
        }

        Ok(NewRoute {
            start_location: expect_string("startLocation", self.start_location)?,
            end_location: expect_string("endLocation", self.end_location)?,
            distance: expect_number("distance", self.distance)?,
            estimated_time: expect_number("estimatedTime", self.estimated_time)?,
        })
    }
}

// Response de creación de ruta
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRouteResponse {
    pub route: Route,
    pub assigned_driver: String,
}

// Query de paginación; se parsea de forma permisiva
#[derive(Debug, Default, PartialEq)]
pub struct RouteListQuery {
    pub page: Option<String>,
    pub limit: Option<String>,
}

impl RouteListQuery {
    /// Construir desde los pares crudos del query string. Una clave repetida
    /// conserva su primer valor.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut query = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "page" => &mut query.page,
                "limit" => &mut query.limit,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        query
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteSummary {
    pub route_id: i32,
    pub route: String,
    pub assigned_driver: String,
}

#[derive(Debug, Serialize)]
pub struct RouteListResponse {
    pub page: i64,
    pub limit: i64,
    pub total: i64,
    pub routes: Vec<RouteSummary>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::errors::{AppError, MISSING_FIELDS_MESSAGE};
    use serde_json::json;

    fn request(json: Value) -> CreateRouteRequest {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn test_valid_route() {
        let route = request(json!({
            "startLocation": "Lyon",
            "endLocation": "Paris",
            "distance": 465,
            "estimatedTime": 270.5
        }))
        .into_new_route()
        .unwrap();

        assert_eq!(route.start_location, "Lyon");
        assert_eq!(route.distance, 465.0);
        assert_eq!(route.estimated_time, 270.5);
    }

    #[test]
    fn test_falsy_values_count_as_missing() {
        for body in [
            json!({ "startLocation": "", "endLocation": "B", "distance": 1, "estimatedTime": 1 }),
            json!({ "startLocation": "A", "endLocation": "B", "distance": 0, "estimatedTime": 1 }),
            json!({ "startLocation": "A", "endLocation": null, "distance": 1, "estimatedTime": 1 }),
            json!({ "startLocation": "A", "endLocation": "B", "distance": 1 }),
        ] {
            let err = request(body).into_new_route().unwrap_err();
            assert!(matches!(err, AppError::Validation(_)));
            assert_eq!(err.client_message(), MISSING_FIELDS_MESSAGE);
        }
    }

    #[test]
    fn test_truthy_value_of_wrong_type_is_internal_error() {
        let err = request(json!({
            "startLocation": "A",
            "endLocation": "B",
            "distance": "far",
            "estimatedTime": 10
        }))
        .into_new_route()
        .unwrap_err();

        assert!(matches!(err, AppError::Internal(msg) if msg.contains("distance")));
    }

    #[test]
    fn test_list_query_keeps_first_repeated_value() {
        let query = RouteListQuery::from_pairs(vec![
            ("page".to_string(), "1".to_string()),
            ("sort".to_string(), "id".to_string()),
            ("page".to_string(), "2".to_string()),
            ("limit".to_string(), "5".to_string()),
        ]);

        assert_eq!(
            query,
            RouteListQuery {
                page: Some("1".to_string()),
                limit: Some("5".to_string()),
            }
        );
        assert_eq!(RouteListQuery::from_pairs(vec![]), RouteListQuery::default());
    }
}
