use anyhow::Result;
use dotenvy::dotenv;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use route_scheduler::build_router;
use route_scheduler::config::EnvironmentConfig;
use route_scheduler::database::init_store;
use route_scheduler::state::AppState;

const DEFAULT_LOG_FILTER: &str = "route_scheduler=debug,tower_http=info";

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    info!("🚚 Route Scheduler API");
    info!("======================");

    let config = EnvironmentConfig::from_env()?;

    // Inicializar persistencia
    let store = match init_store(&config).await {
        Ok(store) => store,
        Err(e) => {
            error!("❌ Error inicializando el almacenamiento: {:#}", e);
            return Err(e);
        }
    };

    let addr: SocketAddr = config.server_url().parse()?;
    let app = build_router(AppState::new(store, config));

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  / - Liveness");
    info!("   GET  /health - Health check");
    info!("👤 Drivers:");
    info!("   POST /drivers - Crear conductor");
    info!("   GET  /drivers - Listar conductores");
    info!("   GET  /drivers/:id - Obtener conductor");
    info!("   GET  /drivers/:id/history - Historial de asignaciones");
    info!("🛣️ Routes:");
    info!("   POST /routes - Crear ruta y asignar conductor");
    info!("   GET  /routes?page=&limit= - Listar rutas paginadas");
    info!("📅 Schedule:");
    info!("   GET  /schedule - Schedule de rutas");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("❌ Error del servidor: {}", e);
        return Err(e.into());
    }

    info!("👋 Servidor terminado");
    Ok(())
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("❌ No se pudo instalar el handler de Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("❌ No se pudo instalar el handler de SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}
