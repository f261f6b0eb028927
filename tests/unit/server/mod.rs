use super::*;
use axum::http::{HeaderMap, HeaderValue, StatusCode, header};

use crate::foundation::error::ChartError;
use crate::server::handlers::image_url;

#[test]
fn api_error_status_follows_error_kind() {
    assert_eq!(
        ApiError(ChartError::validation("x")).status(),
        StatusCode::BAD_REQUEST
    );
    assert_eq!(
        ApiError(ChartError::not_found("x")).status(),
        StatusCode::NOT_FOUND
    );
    assert_eq!(
        ApiError(ChartError::storage("x")).status(),
        StatusCode::INTERNAL_SERVER_ERROR
    );
    assert_eq!(
        ApiError(ChartError::encoding("x")).status(),
        StatusCode::INTERNAL_SERVER_ERROR
    );
}

#[test]
fn image_url_prefers_configured_base() {
    let cfg = ServiceConfig {
        public_base_url: Some("https://charts.example.com/".to_owned()),
        ..ServiceConfig::default()
    };
    let mut headers = HeaderMap::new();
    headers.insert(header::HOST, HeaderValue::from_static("ignored:5000"));
    assert_eq!(
        image_url(&cfg, &headers, "a.png"),
        "https://charts.example.com/image/a.png"
    );
}

#[test]
fn image_url_falls_back_to_host_header() {
    let cfg = ServiceConfig::default();
    let mut headers = HeaderMap::new();
    headers.insert(header::HOST, HeaderValue::from_static("127.0.0.1:5000"));
    assert_eq!(
        image_url(&cfg, &headers, "a.png"),
        "http://127.0.0.1:5000/image/a.png"
    );
    assert_eq!(
        image_url(&cfg, &HeaderMap::new(), "b.jpg"),
        "http://localhost/image/b.jpg"
    );
}

#[test]
fn app_state_rejects_invalid_config() {
    let cfg = ServiceConfig {
        sweep_interval_secs: 0,
        ..ServiceConfig::default()
    };
    assert!(AppState::new(cfg, FontBook::empty()).is_err());
}
