//! HTTP surface: `POST /generate_chart`, `GET /image/{filename}`, `GET /health`.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use axum::Router;
use axum::routing::{get, post};
use tower_http::trace::TraceLayer;

use crate::config::ServiceConfig;
use crate::foundation::error::ChartResult;
use crate::pipeline::RadarChart;
use crate::render::fonts::FontBook;
use crate::store::artifacts::ArtifactStore;

/// JSON error responses.
pub mod error;
mod handlers;

pub use error::ApiError;

/// Shared, read-only state handed to every request.
#[derive(Clone, Debug)]
pub struct AppState {
    /// Chart pipeline.
    pub chart: RadarChart,
    /// Where reference-mode charts are written and served from.
    pub store: ArtifactStore,
    /// Effective service configuration.
    pub config: Arc<ServiceConfig>,
}

impl AppState {
    /// Validate `config` and assemble the pipeline around `fonts`.
    pub fn new(config: ServiceConfig, fonts: FontBook) -> ChartResult<Self> {
        config.validate()?;
        let chart = RadarChart::new(config.style.clone(), fonts)?;
        let store = ArtifactStore::new(config.artifact_dir.clone());
        Ok(Self {
            chart,
            store,
            config: Arc::new(config),
        })
    }
}

/// Build the service router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/generate_chart", post(handlers::generate_chart))
        .route("/image/{filename}", get(handlers::get_image))
        .route("/health", get(handlers::health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind, start the artifact sweeper if configured, and serve until Ctrl-C.
pub async fn run(config: ServiceConfig) -> anyhow::Result<()> {
    let fonts = FontBook::system(&config.font_dirs);
    tracing::info!(faces = fonts.face_count(), "font database loaded");

    let state = AppState::new(config, fonts)?;
    if let Some(ttl) = state.config.artifact_ttl_secs {
        spawn_sweeper(
            state.store.clone(),
            Duration::from_secs(ttl),
            Duration::from_secs(state.config.sweep_interval_secs),
        );
    }

    let listener = tokio::net::TcpListener::bind(&state.config.bind)
        .await
        .with_context(|| format!("bind {}", state.config.bind))?;
    tracing::info!(addr = %listener.local_addr()?, "radar chart service listening");

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("serve HTTP")?;
    Ok(())
}

fn spawn_sweeper(store: ArtifactStore, ttl: Duration, every: Duration) {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(every);
        loop {
            ticker.tick().await;
            let store = store.clone();
            match tokio::task::spawn_blocking(move || store.sweep_expired(ttl)).await {
                Ok(Ok(_)) => {}
                Ok(Err(e)) => tracing::warn!(error = %e, "artifact sweep failed"),
                Err(e) => tracing::warn!(error = %e, "artifact sweep task panicked"),
            }
        }
    });
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}

#[cfg(test)]
#[path = "../../tests/unit/server/mod.rs"]
mod tests;
