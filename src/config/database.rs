//! Configuración de base de datos
//!
//! Este módulo maneja la configuración del pool de PostgreSQL con SQLx.

use std::env;
use std::time::Duration;

use anyhow::{anyhow, Result};
use sqlx::postgres::{PgPool, PgPoolOptions};

use super::environment::parse_var;

/// Configuración de la base de datos
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub acquire_timeout: Duration,
    pub idle_timeout: Duration,
    pub max_lifetime: Duration,
}

impl DatabaseConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let url = lookup("DATABASE_URL")
            .ok_or_else(|| anyhow!("DATABASE_URL must be set when STORE_BACKEND=postgres"))?;

        Ok(Self {
            url,
            max_connections: parse_var(&lookup, "DATABASE_MAX_CONNECTIONS")?.unwrap_or(20),
            min_connections: parse_var(&lookup, "DATABASE_MIN_CONNECTIONS")?.unwrap_or(5),
            acquire_timeout: Duration::from_secs(30),
            idle_timeout: Duration::from_secs(300),
            max_lifetime: Duration::from_secs(3600),
        })
    }

    /// Crear un nuevo pool de conexiones
    pub async fn create_pool(&self) -> Result<PgPool, sqlx::Error> {
        PgPoolOptions::new()
            .max_connections(self.max_connections)
            .min_connections(self.min_connections)
            .acquire_timeout(self.acquire_timeout)
            .idle_timeout(self.idle_timeout)
            .max_lifetime(self.max_lifetime)
            .connect(&self.url)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_url_is_error() {
        assert!(DatabaseConfig::from_lookup(|_| None).is_err());
    }

    #[test]
    fn test_pool_sizing() {
        let config = DatabaseConfig::from_lookup(|key| match key {
            "DATABASE_URL" => Some("postgres://u:p@localhost/db".to_string()),
            "DATABASE_MAX_CONNECTIONS" => Some("8".to_string()),
            _ => None,
        })
        .unwrap();

        assert_eq!(config.max_connections, 8);
        assert_eq!(config.min_connections, 5);
    }
}
