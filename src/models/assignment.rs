//! Modelo de Assignment
//!
//! Vínculo entre un conductor y una ruta, con su marca de tiempo.

use chrono::{DateTime, Utc};
use sqlx::FromRow;

use super::route::Route;

/// Assignment - fila de la tabla assignments
#[derive(Debug, Clone)]
pub struct Assignment {
    pub id: i32,
    pub driver_id: i32,
    pub route_id: i32,
    pub assigned_at: DateTime<Utc>,
}

/// Asignación de un conductor junto con la ruta asignada
#[derive(Debug, Clone, FromRow)]
pub struct AssignedRoute {
    pub assigned_at: DateTime<Utc>,
    #[sqlx(flatten)]
    pub route: Route,
}
