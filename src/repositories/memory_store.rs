//! Backend en memoria
//!
//! Mismo contrato que [`super::PgStore`], con ids secuenciales desde 1.
//! Útil para desarrollo local sin base de datos y para los tests.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use super::{PageWindow, Store};
use crate::models::{
    AssignedRoute, Assignment, Driver, NewDriver, NewRoute, Route, RouteWithDriver,
};
use crate::utils::errors::AppResult;

#[derive(Debug, Default)]
struct Tables {
    drivers: Vec<Driver>,
    routes: Vec<Route>,
    assignments: Vec<Assignment>,
}

impl Tables {
    fn next_id(len: usize) -> i32 {
        i32::try_from(len).map(|n| n + 1).unwrap_or(i32::MAX)
    }

    fn driver(&self, id: i32) -> Option<&Driver> {
        self.drivers.iter().find(|d| d.id == id)
    }

    fn first_driver_name(&self, route_id: i32) -> Option<String> {
        self.assignments
            .iter()
            .find(|a| a.route_id == route_id)
            .and_then(|a| self.driver(a.driver_id))
            .map(|d| d.name.clone())
    }
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Store for MemoryStore {
    fn backend_name(&self) -> &'static str {
        "memory"
    }

    async fn ping(&self) -> AppResult<()> {
        Ok(())
    }

    async fn insert_driver(&self, driver: NewDriver) -> AppResult<Driver> {
        let mut tables = self.tables.write().await;
        let driver = driver.into_driver(Tables::next_id(tables.drivers.len()));
        tables.drivers.push(driver.clone());
        Ok(driver)
    }

    async fn list_drivers(&self) -> AppResult<Vec<Driver>> {
        Ok(self.tables.read().await.drivers.clone())
    }

    async fn find_driver(&self, id: i32) -> AppResult<Option<Driver>> {
        Ok(self.tables.read().await.driver(id).cloned())
    }

    async fn list_available_drivers(&self) -> AppResult<Vec<Driver>> {
        let tables = self.tables.read().await;
        Ok(tables
            .drivers
            .iter()
            .filter(|d| d.availability)
            .cloned()
            .collect())
    }

    async fn insert_route_with_assignment(
        &self,
        route: NewRoute,
    ) -> AppResult<(Route, Option<Driver>)> {
        let mut tables = self.tables.write().await;

        let route = route.into_route(Tables::next_id(tables.routes.len()));
        tables.routes.push(route.clone());

        let driver = tables.drivers.iter().find(|d| d.availability).cloned();
        if let Some(driver) = &driver {
            let assignment = Assignment {
                id: Tables::next_id(tables.assignments.len()),
                driver_id: driver.id,
                route_id: route.id,
                assigned_at: Utc::now(),
            };
            tables.assignments.push(assignment);
        }

        Ok((route, driver))
    }

    async fn list_routes(&self, window: Option<PageWindow>) -> AppResult<Vec<RouteWithDriver>> {
        let tables = self.tables.read().await;
        let (skip, take) = match window {
            Some(w) => (
                usize::try_from(w.offset).unwrap_or(usize::MAX),
                usize::try_from(w.limit).unwrap_or(usize::MAX),
            ),
            None => (0, usize::MAX),
        };

        Ok(tables
            .routes
            .iter()
            .skip(skip)
            .take(take)
            .map(|route| RouteWithDriver {
                route: route.clone(),
                driver_name: tables.first_driver_name(route.id),
            })
            .collect())
    }

    async fn count_routes(&self) -> AppResult<i64> {
        Ok(self.tables.read().await.routes.len() as i64)
    }

    async fn list_driver_assignments(&self, driver_id: i32) -> AppResult<Vec<AssignedRoute>> {
        let tables = self.tables.read().await;
        Ok(tables
            .assignments
            .iter()
            .filter(|a| a.driver_id == driver_id)
            .filter_map(|a| {
                tables
                    .routes
                    .iter()
                    .find(|r| r.id == a.route_id)
                    .map(|route| AssignedRoute {
                        assigned_at: a.assigned_at,
                        route: route.clone(),
                    })
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_driver(name: &str, availability: bool) -> NewDriver {
        NewDriver {
            name: name.to_string(),
            license_type: "C".to_string(),
            availability,
        }
    }

    fn new_route(start: &str, end: &str) -> NewRoute {
        NewRoute {
            start_location: start.to_string(),
            end_location: end.to_string(),
            distance: 10.0,
            estimated_time: 30.0,
        }
    }

    #[tokio::test]
    async fn test_ids_are_sequential() {
        let store = MemoryStore::new();
        let a = store.insert_driver(new_driver("Ana", true)).await.unwrap();
        let b = store.insert_driver(new_driver("Luis", true)).await.unwrap();
        assert_eq!((a.id, b.id), (1, 2));
        assert_eq!(store.find_driver(2).await.unwrap(), Some(b));
        assert_eq!(store.find_driver(3).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_route_assigned_to_lowest_available_id() {
        let store = MemoryStore::new();
        store.insert_driver(new_driver("Busy", false)).await.unwrap();
        store.insert_driver(new_driver("Ana", true)).await.unwrap();
        store.insert_driver(new_driver("Luis", true)).await.unwrap();

        let (route, driver) = store
            .insert_route_with_assignment(new_route("A", "B"))
            .await
            .unwrap();

        assert_eq!(driver.map(|d| d.name), Some("Ana".to_string()));
        let history = store.list_driver_assignments(2).await.unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].route.id, route.id);
    }

    #[tokio::test]
    async fn test_assignment_keeps_driver_available() {
        let store = MemoryStore::new();
        store.insert_driver(new_driver("Ana", true)).await.unwrap();

        for _ in 0..3 {
            store
                .insert_route_with_assignment(new_route("A", "B"))
                .await
                .unwrap();
        }

        assert_eq!(store.list_available_drivers().await.unwrap().len(), 1);
        assert_eq!(store.list_driver_assignments(1).await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_no_assignment_without_available_driver() {
        let store = MemoryStore::new();
        store.insert_driver(new_driver("Busy", false)).await.unwrap();

        let (_, driver) = store
            .insert_route_with_assignment(new_route("A", "B"))
            .await
            .unwrap();

        assert!(driver.is_none());
        let routes = store.list_routes(None).await.unwrap();
        assert_eq!(routes.len(), 1);
        assert_eq!(routes[0].driver_name, None);
    }

    #[tokio::test]
    async fn test_list_routes_window() {
        let store = MemoryStore::new();
        for i in 0..5 {
            store
                .insert_route_with_assignment(new_route(&format!("S{i}"), "E"))
                .await
                .unwrap();
        }

        let page = store
            .list_routes(Some(PageWindow { offset: 2, limit: 2 }))
            .await
            .unwrap();
        let ids: Vec<i32> = page.iter().map(|r| r.route.id).collect();
        assert_eq!(ids, vec![3, 4]);
        assert_eq!(store.count_routes().await.unwrap(), 5);
    }
}
