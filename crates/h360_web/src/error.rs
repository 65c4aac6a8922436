use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use h360_core::Error;

#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct AppError(#[from] pub Error);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!("❌ Request failed: {}", self.0);
        (StatusCode::INTERNAL_SERVER_ERROR, format!("Prediction failed: {}", self.0)).into_response()
    }
}
