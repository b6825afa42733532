use tracing::debug;

use crate::dto::schedule_dto::ScheduleEntry;
use crate::repositories::DynStore;
use crate::services::scheduling::build_schedule;
use crate::utils::errors::AppError;

pub struct ScheduleController {
    store: DynStore,
}

impl ScheduleController {
    pub fn new(store: DynStore) -> Self {
        Self { store }
    }

    pub async fn schedule(&self) -> Result<Vec<ScheduleEntry>, AppError> {
        let routes = self.store.list_routes(None).await?;
        let available = self.store.list_available_drivers().await?;

        debug!(
            "📅 Construyendo schedule: {} rutas, {} conductores disponibles",
            routes.len(),
            available.len()
        );

        Ok(build_schedule(routes, available))
    }
}
