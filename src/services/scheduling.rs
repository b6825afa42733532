//! Servicio de scheduling
//!
//! Construye la vista de schedule en tiempo de lectura: cada ruta con su
//! conductor persistido o, si no tiene asignación, el siguiente conductor
//! disponible del pool de la request. No persiste nada, por lo que dos
//! llamadas con pools distintos pueden dar conductores distintos a la misma
//! ruta sin asignar.

use std::collections::VecDeque;

use crate::dto::schedule_dto::ScheduleEntry;
use crate::models::{Driver, RouteWithDriver};

/// Nombre reportado cuando una ruta no tiene conductor
pub const UNASSIGNED: &str = "unassigned";

/// Nombre a mostrar para un conductor opcional
pub fn driver_or_unassigned(name: Option<String>) -> String {
    name.unwrap_or_else(|| UNASSIGNED.to_string())
}

/// Nombre del conductor persistido en listados; un nombre vacío cuenta como
/// sin asignar.
pub fn listed_driver(name: Option<String>) -> String {
    driver_or_unassigned(name.filter(|n| !n.is_empty()))
}

/// Emparejar rutas con conductores, consumiendo `available` de frente a
/// atrás solo para rutas sin asignación persistida.
pub fn build_schedule(routes: Vec<RouteWithDriver>, available: Vec<Driver>) -> Vec<ScheduleEntry> {
    let mut pool: VecDeque<Driver> = available.into();

    routes
        .into_iter()
        .map(|entry| {
            let driver = match entry.driver_name {
                Some(name) => name,
                None => driver_or_unassigned(pool.pop_front().map(|d| d.name)),
            };

            ScheduleEntry {
                route_id: entry.route.id,
                route: entry.route.label(),
                driver,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Route;

    fn route(id: i32, driver_name: Option<&str>) -> RouteWithDriver {
        RouteWithDriver {
            route: Route {
                id,
                start_location: format!("S{id}"),
                end_location: format!("E{id}"),
                distance: 1.0,
                estimated_time: 1.0,
            },
            driver_name: driver_name.map(str::to_string),
        }
    }

    fn driver(id: i32, name: &str) -> Driver {
        Driver {
            id,
            name: name.to_string(),
            license_type: "B".to_string(),
            availability: true,
        }
    }

    fn drivers_of(schedule: &[ScheduleEntry]) -> Vec<&str> {
        schedule.iter().map(|e| e.driver.as_str()).collect()
    }

    #[test]
    fn test_persisted_assignment_wins() {
        let schedule = build_schedule(
            vec![route(1, Some("Ana"))],
            vec![driver(2, "Luis")],
        );

        assert_eq!(
            schedule,
            vec![ScheduleEntry {
                route_id: 1,
                route: "S1 -> E1".to_string(),
                driver: "Ana".to_string(),
            }]
        );
    }

    #[test]
    fn test_pool_consumed_in_order_then_unassigned() {
        let schedule = build_schedule(
            vec![route(1, None), route(2, Some("Ana")), route(3, None), route(4, None)],
            vec![driver(5, "Luis"), driver(6, "Marta")],
        );

        assert_eq!(drivers_of(&schedule), vec!["Luis", "Ana", "Marta", UNASSIGNED]);
    }

    #[test]
    fn test_assigned_routes_do_not_consume_pool() {
        let schedule = build_schedule(
            vec![route(1, Some("Ana")), route(2, None)],
            vec![driver(1, "Ana")],
        );

        assert_eq!(drivers_of(&schedule), vec!["Ana", "Ana"]);
    }

    #[test]
    fn test_empty_pool() {
        let schedule = build_schedule(vec![route(1, None)], vec![]);
        assert_eq!(drivers_of(&schedule), vec![UNASSIGNED]);
    }

    #[test]
    fn test_listed_driver_empty_name() {
        assert_eq!(listed_driver(Some(String::new())), UNASSIGNED);
        assert_eq!(listed_driver(Some("Ana".to_string())), "Ana");
        assert_eq!(listed_driver(None), UNASSIGNED);
    }
}
