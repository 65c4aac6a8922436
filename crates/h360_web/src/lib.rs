use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub mod error;
pub mod handlers;
pub mod render;
pub mod state;

pub use error::AppError;
pub use state::AppState;

pub fn create_app(state: AppState) -> Router {
    let cors = CorsLayer::permissive();

    Router::new()
        .route("/", get(handlers::index))
        .route("/about", get(handlers::about))
        .route("/predict", get(handlers::prediction_form).post(handlers::submit_prediction))
        .route("/api/predict", post(handlers::api_predict))
        .route("/health", get(handlers::health))
        .fallback(handlers::not_found)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(Arc::new(state))
}

/// Bind and serve until the process is stopped.
pub async fn serve(state: AppState, bind: &str) -> h360_core::Result<()> {
    let app = create_app(state);
    let listener = tokio::net::TcpListener::bind(bind).await?;
    tracing::info!("🌐 Health360 listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}

pub mod prelude {
    pub use h360_core::{Error, PredictionOutcome, PredictionRequest, Result, View};
    pub use crate::{create_app, serve, AppState};
}
