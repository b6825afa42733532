use axum::{
    extract::{rejection::JsonRejection, Path, State},
    routing::get,
    Json, Router,
};

use crate::controllers::driver_controller::DriverController;
use crate::dto::driver_dto::CreateDriverRequest;
use crate::dto::schedule_dto::DriverHistoryResponse;
use crate::models::Driver;
use crate::routes::json_or_empty;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_driver_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_drivers).post(create_driver))
        .route("/:id", get(get_driver))
        .route("/:id/history", get(get_driver_history))
}

async fn create_driver(
    State(state): State<AppState>,
    payload: Result<Json<CreateDriverRequest>, JsonRejection>,
) -> Result<Json<Driver>, AppError> {
    let request = json_or_empty(payload)?;
    let controller = DriverController::new(state.store.clone());
    let driver = controller.create(request).await?;
    Ok(Json(driver))
}

async fn list_drivers(State(state): State<AppState>) -> Result<Json<Vec<Driver>>, AppError> {
    let controller = DriverController::new(state.store.clone());
    let drivers = controller.list().await?;
    Ok(Json(drivers))
}

// El id llega como texto: uno no numérico es un 404, no un 400
async fn get_driver(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Driver>, AppError> {
    let controller = DriverController::new(state.store.clone());
    let driver = controller.get_by_id(&id).await?;
    Ok(Json(driver))
}

async fn get_driver_history(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DriverHistoryResponse>, AppError> {
    let controller = DriverController::new(state.store.clone());
    let history = controller.history(&id).await?;
    Ok(Json(history))
}
