use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    routing::get,
    Json, Router,
};
use tracing::debug;

use crate::controllers::route_controller::RouteController;
use crate::dto::route_dto::{
    CreateRouteRequest, CreateRouteResponse, RouteListQuery, RouteListResponse,
};
use crate::routes::json_or_empty;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_route_router() -> Router<AppState> {
    Router::new().route("/", get(list_routes).post(create_route))
}

async fn create_route(
    State(state): State<AppState>,
    payload: Result<Json<CreateRouteRequest>, JsonRejection>,
) -> Result<Json<CreateRouteResponse>, AppError> {
    let request = json_or_empty(payload)?;
    let controller = RouteController::new(state.store.clone());
    let response = controller.create(request).await?;
    Ok(Json(response))
}

// El query se toma como pares crudos: claves repetidas o valores extraños
// caen a los valores por defecto en lugar de rechazar la request
async fn list_routes(
    State(state): State<AppState>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<RouteListResponse>, AppError> {
    let pairs = match query {
        Ok(Query(pairs)) => pairs,
        Err(rejection) => {
            debug!("🔍 Query string ignorado: {}", rejection.body_text());
            Vec::new()
        }
    };
    let query = RouteListQuery::from_pairs(pairs);
    let controller = RouteController::new(state.store.clone());
    let response = controller.list(query).await?;
    Ok(Json(response))
}
