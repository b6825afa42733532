use tracing::info;

use crate::dto::driver_dto::CreateDriverRequest;
use crate::dto::schedule_dto::{DriverHistoryResponse, HistoryEntry};
use crate::models::Driver;
use crate::repositories::DynStore;
use crate::utils::errors::{not_found_error, AppError};
use crate::utils::validation::parse_record_id;

pub struct DriverController {
    store: DynStore,
}

impl DriverController {
    pub fn new(store: DynStore) -> Self {
        Self { store }
    }

    pub async fn create(&self, request: CreateDriverRequest) -> Result<Driver, AppError> {
        let new_driver = request.into_new_driver()?;
        let driver = self.store.insert_driver(new_driver).await?;

        info!("👤 Conductor creado: {} (id {})", driver.name, driver.id);
        Ok(driver)
    }

    pub async fn list(&self) -> Result<Vec<Driver>, AppError> {
        self.store.list_drivers().await
    }

    /// Un id no numérico se trata como fallo de búsqueda, no de parseo
    pub async fn get_by_id(&self, raw_id: &str) -> Result<Driver, AppError> {
        let Some(id) = parse_record_id(raw_id) else {
            return Err(not_found_error("Driver"));
        };

        self.store
            .find_driver(id)
            .await?
            .ok_or_else(|| not_found_error("Driver"))
    }

    pub async fn history(&self, raw_id: &str) -> Result<DriverHistoryResponse, AppError> {
        let driver = self.get_by_id(raw_id).await?;
        let assignments = self.store.list_driver_assignments(driver.id).await?;

        let history = assignments
            .into_iter()
            .map(|a| HistoryEntry {
                route_id: a.route.id,
                route_label: a.route.label(),
                assigned_at: a.assigned_at,
            })
            .collect();

        Ok(DriverHistoryResponse {
            driver_name: driver.name,
            history,
        })
    }
}
