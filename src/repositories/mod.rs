//! Repositorios de persistencia
//!
//! Los controladores acceden a los datos a través del trait [`Store`].
//! Todas las listas se devuelven en orden ascendente de id.

pub mod memory_store;
pub mod postgres_store;

use std::sync::Arc;

use async_trait::async_trait;

use crate::models::{AssignedRoute, Driver, NewDriver, NewRoute, Route, RouteWithDriver};
use crate::utils::errors::AppResult;

pub use memory_store::MemoryStore;
pub use postgres_store::PgStore;

/// Ventana de paginación por offset/limit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub offset: i64,
    pub limit: i64,
}

/// Operaciones de persistencia sobre conductores, rutas y asignaciones
#[async_trait]
pub trait Store: Send + Sync {
    /// Nombre del backend para logs y health check
    fn backend_name(&self) -> &'static str;

    async fn ping(&self) -> AppResult<()>;

    async fn insert_driver(&self, driver: NewDriver) -> AppResult<Driver>;

    async fn list_drivers(&self) -> AppResult<Vec<Driver>>;

    async fn find_driver(&self, id: i32) -> AppResult<Option<Driver>>;

    async fn list_available_drivers(&self) -> AppResult<Vec<Driver>>;

    /// Insertar la ruta y asignarla al primer conductor disponible como una
    /// sola unidad de trabajo. Devuelve el conductor asignado, si hubo uno.
    /// La disponibilidad del conductor no se modifica.
    async fn insert_route_with_assignment(
        &self,
        route: NewRoute,
    ) -> AppResult<(Route, Option<Driver>)>;

    /// Rutas con el conductor de su primera asignación. `None` devuelve todas.
    async fn list_routes(&self, window: Option<PageWindow>) -> AppResult<Vec<RouteWithDriver>>;

    async fn count_routes(&self) -> AppResult<i64>;

    async fn list_driver_assignments(&self, driver_id: i32) -> AppResult<Vec<AssignedRoute>>;
}

pub type DynStore = Arc<dyn Store>;
