//! Inicialización de la persistencia
//!
//! Este módulo construye el [`Store`](crate::repositories::Store) elegido
//! por configuración y aplica las migraciones de PostgreSQL.

use std::sync::Arc;

use anyhow::{Context, Result};
use sqlx::PgPool;
use tracing::info;

use crate::config::{DatabaseConfig, EnvironmentConfig, StoreBackend};
use crate::repositories::{DynStore, MemoryStore, PgStore};

/// Crear el store según `STORE_BACKEND`
pub async fn init_store(config: &EnvironmentConfig) -> Result<DynStore> {
    match config.store_backend {
        StoreBackend::Memory => {
            info!("🧠 Usando almacenamiento en memoria");
            Ok(Arc::new(MemoryStore::new()))
        }
        StoreBackend::Postgres => {
            let db_config = DatabaseConfig::from_env()?;
            info!("🐘 Conectando a PostgreSQL: {}", mask_database_url(&db_config.url));

            let pool = db_config
                .create_pool()
                .await
                .context("failed to connect to PostgreSQL")?;

            if config.run_migrations {
                run_migrations(&pool).await?;
            }

            info!("✅ PostgreSQL conectado");
            Ok(Arc::new(PgStore::new(pool)))
        }
    }
}

/// Ejecutar migraciones de la base de datos
pub async fn run_migrations(pool: &PgPool) -> Result<()> {
    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .context("failed to run database migrations")?;

    info!("📜 Migraciones aplicadas");
    Ok(())
}

/// Función helper para enmascarar la URL de la base de datos en logs
pub fn mask_database_url(url: &str) -> String {
    let Some(at_pos) = url.find('@') else {
        return url.to_string();
    };

    let scheme_end = url.find("://").map(|p| p + 3).unwrap_or(0);
    if scheme_end > at_pos || !url[scheme_end..at_pos].contains(':') {
        return url.to_string();
    }

    format!("{}***:***@{}", &url[..scheme_end], &url[at_pos + 1..])
}
