use axum::Json;
use axum::body::Bytes;
use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, header};
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use crate::config::{ServiceConfig, Transfer};
use crate::encode::format::ImageEncoding;
use crate::encode::sink::ChartSink;
use crate::foundation::error::ChartError;
use crate::server::AppState;
use crate::server::error::ApiError;
use crate::traits::input::scores_from_slice;

/// Optional per-request overrides for `POST /generate_chart`.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct GenerateParams {
    format: Option<String>,
    transfer: Option<String>,
}

pub(crate) async fn generate_chart(
    State(state): State<AppState>,
    Query(params): Query<GenerateParams>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, ApiError> {
    let scores = scores_from_slice(&body)?;
    let encoding = match params.format.as_deref() {
        Some(f) => f.parse::<ImageEncoding>()?,
        None => state.config.default_format,
    };
    let transfer = match params.transfer.as_deref() {
        Some(t) => t.parse::<Transfer>()?,
        None => state.config.default_transfer,
    };

    let sink = match transfer {
        Transfer::Direct => ChartSink::InMemory,
        Transfer::Reference => ChartSink::File(state.store.clone()),
    };
    let chart = state.chart.clone();
    let artifact =
        tokio::task::spawn_blocking(move || chart.generate(&scores, encoding, &sink))
            .await
            .map_err(|e| ChartError::encoding(format!("chart render task failed: {e}")))??;

    match transfer {
        Transfer::Direct => {
            Ok(([(header::CONTENT_TYPE, artifact.mime_type())], artifact.bytes).into_response())
        }
        Transfer::Reference => {
            let filename = artifact
                .filename
                .ok_or_else(|| ChartError::storage("file sink returned no filename"))?;
            let url = image_url(&state.config, &headers, &filename);
            Ok(Json(serde_json::json!({ "image_url": url })).into_response())
        }
    }
}

pub(crate) async fn get_image(
    State(state): State<AppState>,
    Path(filename): Path<String>,
) -> Result<Response, ApiError> {
    let store = state.store.clone();
    let (bytes, encoding) = tokio::task::spawn_blocking(move || store.open(&filename))
        .await
        .map_err(|e| ChartError::storage(format!("artifact read task failed: {e}")))??;
    Ok(([(header::CONTENT_TYPE, encoding.mime_type())], bytes).into_response())
}

pub(crate) async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

/// Absolute URL of a stored artifact.
pub(crate) fn image_url(config: &ServiceConfig, headers: &HeaderMap, filename: &str) -> String {
    let base = match &config.public_base_url {
        Some(base) => base.trim_end_matches('/').to_owned(),
        None => {
            let host = headers
                .get(header::HOST)
                .and_then(|h| h.to_str().ok())
                .unwrap_or("localhost");
            format!("http://{host}")
        }
    };
    format!("{base}/image/{filename}")
}
