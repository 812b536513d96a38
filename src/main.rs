use anyhow::{Context, Result};
use dotenvy::dotenv;
use tokio::signal;
use tracing::{error, info, warn};

use keeper::config::EnvironmentConfig;
use keeper::middleware::cors_layer;
use keeper::{build_app, database, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    let config = EnvironmentConfig::from_env().context("invalid configuration")?;

    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .init();

    info!("🚗 KEEPER - API de concesionarios");
    info!("================================");
    info!("🌍 Entorno: {}", config.environment);

    let pool = match database::connect(&config.database).await {
        Ok(pool) => pool,
        Err(e) => {
            error!("❌ Error conectando a la base de datos: {:#}", e);
            return Err(e);
        }
    };

    if config.run_migrations {
        database::run_migrations(&pool).await?;
    } else {
        info!("⏭️  Migraciones desactivadas (RUN_MIGRATIONS=false)");
    }

    if config.cors_origins.is_empty() && !config.is_development() {
        warn!("⚠️  CORS_ORIGINS vacío: se aceptan peticiones de cualquier origen");
    }

    let app = build_app(AppState::from_pool(pool.clone()), cors_layer(&config.cors_origins));

    let addr = config.server_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;

    info!("🌐 Servidor escuchando en http://{}", addr);
    info!("🔍 Recursos: /dealerships /employees /employments /clients /car /orders /appointments");
    info!("❤️  Health check: GET /healthcheck");
    info!("📚 Swagger UI: http://{}/swagger", addr);

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("❌ Error del servidor: {}", e);
        return Err(e.into());
    }

    pool.close().await;
    info!("👋 Servidor terminado");
    Ok(())
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("No se pudo instalar el handler de Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                error!("No se pudo instalar el handler de SIGTERM: {}", e);
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
