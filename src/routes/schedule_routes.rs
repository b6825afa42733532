use axum::{extract::State, routing::get, Json, Router};

use crate::controllers::schedule_controller::ScheduleController;
use crate::dto::schedule_dto::ScheduleEntry;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_schedule_router() -> Router<AppState> {
    Router::new().route("/", get(get_schedule))
}

async fn get_schedule(
    State(state): State<AppState>,
) -> Result<Json<Vec<ScheduleEntry>>, AppError> {
    let controller = ScheduleController::new(state.store.clone());
    let schedule = controller.schedule().await?;
    Ok(Json(schedule))
}
