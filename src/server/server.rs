use std::sync::Arc;

use anyhow::Result;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::settings::SettingsConfig;
use crate::observability::metrics::get_metrics;
use crate::observability::routes::MetricsState;
use crate::relay::Relay;
use crate::server::orchestrate::{health, orchestrate};
use crate::utils::constants::{HEALTH_PATH, ORCHESTRATE_PATH};

#[derive(Clone)]
pub struct AppState {
    pub metrics_state: MetricsState,
    pub relay: Arc<Relay>,
}

impl AppState {
    pub async fn new(relay: Relay) -> Self {
        let metrics = get_metrics().await;
        Self {
            metrics_state: MetricsState::new(metrics.registry.clone()),
            relay: Arc::new(relay),
        }
    }
}

/// Routes, fully open CORS and per-request tracing.
pub fn router(settings_config: &SettingsConfig, state: AppState) -> Router {
    Router::new()
        .route(ORCHESTRATE_PATH, post(orchestrate))
        .route(HEALTH_PATH, get(health))
        .merge(state.metrics_state.router(&settings_config.metrics))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serve until Ctrl-C / SIGTERM.
pub async fn start(settings_config: &SettingsConfig, relay: Relay) -> Result<()> {
    let metrics = get_metrics().await;
    let state = AppState::new(relay).await;
    let app = router(settings_config, state);

    let bind_addr = settings_config.server.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    info!("listening on {}", listener.local_addr()?);

    metrics.up.set(1);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    metrics.up.set(0);

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to listen for ctrl-c: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    info!("shutdown signal received");
}
