use tracing::{info, warn};

use crate::dto::route_dto::{
    CreateRouteRequest, CreateRouteResponse, RouteListQuery, RouteListResponse, RouteSummary,
};
use crate::repositories::{DynStore, PageWindow};
use crate::services::scheduling::{driver_or_unassigned, listed_driver};
use crate::utils::errors::AppError;
use crate::utils::validation::parse_positive_or;

pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_LIMIT: i64 = 10;

pub struct RouteController {
    store: DynStore,
}

impl RouteController {
    pub fn new(store: DynStore) -> Self {
        Self { store }
    }

    /// Crear la ruta y asignarla al primer conductor disponible
    pub async fn create(&self, request: CreateRouteRequest) -> Result<CreateRouteResponse, AppError> {
        let new_route = request.into_new_route()?;
        let (route, driver) = self.store.insert_route_with_assignment(new_route).await?;

        match &driver {
            Some(d) => info!("🛣️ Ruta {} creada y asignada a {}", route.id, d.name),
            None => warn!("🛣️ Ruta {} creada sin conductor disponible", route.id),
        }

        Ok(CreateRouteResponse {
            route,
            assigned_driver: driver_or_unassigned(driver.map(|d| d.name)),
        })
    }

    pub async fn list(&self, query: RouteListQuery) -> Result<RouteListResponse, AppError> {
        let page = parse_positive_or(query.page.as_deref(), DEFAULT_PAGE);
        let limit = parse_positive_or(query.limit.as_deref(), DEFAULT_LIMIT);
        let window = PageWindow {
            offset: (page - 1).saturating_mul(limit),
            limit,
        };

        let routes = self.store.list_routes(Some(window)).await?;
        let total = self.store.count_routes().await?;

        let routes = routes
            .into_iter()
            .map(|r| RouteSummary {
                route_id: r.route.id,
                route: r.route.label(),
                assigned_driver: listed_driver(r.driver_name),
            })
            .collect();

        Ok(RouteListResponse {
            page,
            limit,
            total,
            routes,
        })
    }
}
