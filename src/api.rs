// src/api.rs
use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use tower_http::cors::CorsLayer;

use crate::trends::types::AggregateEnvelope;
use crate::trends::TrendAggregator;

#[derive(Clone)]
pub struct AppState {
    pub aggregator: Arc<TrendAggregator>,
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(trending_all))
        .layer(CorsLayer::very_permissive())
        .with_state(state)
}

/// The single aggregate route: a fresh fan-out per request, `code 0` once
/// every source has been attempted. The envelope is serialized by hand with
/// an explicit charset; serde_json leaves CJK words as literal UTF-8.
async fn trending_all(State(state): State<AppState>) -> Response {
    let board = state.aggregator.fetch_board().await;
    let envelope = AggregateEnvelope::success(board);
    match serde_json::to_string(&envelope) {
        Ok(body) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/json; charset=utf-8")],
            body,
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = ?e, "failed to serialize aggregate envelope");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
