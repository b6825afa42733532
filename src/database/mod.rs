//! Módulo de base de datos
//!
//! Maneja la conexión con PostgreSQL y la selección del backend.

pub mod connection;

pub use connection::{init_store, mask_database_url, run_migrations};
