//! Route Scheduler API
//!
//! Servicio REST para registrar conductores y rutas, asignar
//! automáticamente el primer conductor disponible y consultar el schedule y
//! el historial por conductor.

pub mod config;
pub mod controllers;
pub mod database;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;

use axum::Router;
use tower_http::trace::TraceLayer;

use middleware::cors::cors_layer;
use state::AppState;

/// Construir el router completo de la aplicación
pub fn build_router(state: AppState) -> Router {
    let cors = cors_layer(&state.config.cors_origins);

    Router::new()
        .merge(routes::health_routes::create_health_router())
        .nest("/drivers", routes::driver_routes::create_driver_router())
        .nest("/routes", routes::route_routes::create_route_router())
        .nest("/schedule", routes::schedule_routes::create_schedule_router())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
