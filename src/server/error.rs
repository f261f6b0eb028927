use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::foundation::error::ChartError;

/// HTTP face of [`ChartError`]: `{"error": <message>}` with a matching status.
#[derive(Debug)]
pub struct ApiError(pub ChartError);

impl ApiError {
    /// Status code reported for the wrapped error.
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            ChartError::Validation(_) => StatusCode::BAD_REQUEST,
            ChartError::NotFound(_) => StatusCode::NOT_FOUND,
            ChartError::Storage(_) | ChartError::Encoding(_) | ChartError::Other(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if !self.0.is_client_error() {
            tracing::error!(error = %self.0, "chart request failed");
        }
        let message = match self.0 {
            ChartError::Validation(msg) | ChartError::NotFound(msg) => msg,
            other => other.to_string(),
        };
        (status, Json(serde_json::json!({ "error": message }))).into_response()
    }
}

impl<E> From<E> for ApiError
where
    E: Into<ChartError>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
