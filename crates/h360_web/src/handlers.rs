use axum::{
    extract::{Query, State},
    http::{StatusCode, Uri},
    response::{Html, IntoResponse, Response},
    Form, Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::{debug, info};
use h360_core::widgets::{clamp_request, default_request};
use h360_core::{PredictionOutcome, PredictionRequest, View};
use crate::error::AppError;
use crate::render;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct ViewQuery {
    pub view: Option<String>,
}

/// `GET /` and the sidebar selector (`GET /?view=<slug>`)
pub async fn index(Query(query): Query<ViewQuery>) -> Response {
    let Some(requested) = query.view else {
        return Html(render::render_view(View::Home, &default_request())).into_response();
    };

    match requested.parse::<View>() {
        Ok(view) => {
            debug!("Rendering view {}", view.slug());
            Html(render::render_view(view, &default_request())).into_response()
        }
        Err(_) => (StatusCode::NOT_FOUND, Html(render::not_found_page(&requested))).into_response(),
    }
}

pub async fn about() -> Html<String> {
    Html(render::render_view(View::About, &default_request()))
}

pub async fn prediction_form() -> Html<String> {
    Html(render::render_view(View::Prediction, &default_request()))
}

pub async fn submit_prediction(
    State(state): State<Arc<AppState>>,
    Form(request): Form<PredictionRequest>,
) -> Result<Html<String>, AppError> {
    let request = clamp_request(request);
    let outcome = state.predictor.predict(&request).await?;
    info!("🔮 Prediction: {} (score {:.4})", outcome.risk, outcome.score);
    Ok(Html(render::prediction_page(&request, Some(&outcome))))
}

pub async fn api_predict(
    State(state): State<Arc<AppState>>,
    Json(request): Json<PredictionRequest>,
) -> Result<Json<PredictionOutcome>, AppError> {
    let request = clamp_request(request);
    let outcome = state.predictor.predict(&request).await?;
    Ok(Json(outcome))
}

pub async fn health(State(state): State<Arc<AppState>>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "model": state.predictor.model_name(),
        "scaling": state.predictor.scaling(),
    }))
}

pub async fn not_found(uri: Uri) -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Html(render::not_found_page(uri.path())))
}
