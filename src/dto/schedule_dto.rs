use chrono::{DateTime, Utc};
use serde::Serialize;

// Entrada del schedule: ruta y conductor (persistido o transitorio)
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleEntry {
    pub route_id: i32,
    pub route: String,
    pub driver: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub route_id: i32,
    #[serde(rename = "route")]
    pub route_label: String,
    pub assigned_at: DateTime<Utc>,
}

// Historial de asignaciones de un conductor
#[derive(Debug, Serialize)]
pub struct DriverHistoryResponse {
    #[serde(rename = "driver")]
    pub driver_name: String,
    pub history: Vec<HistoryEntry>,
}
