use axum::{
    Router,
    body::Body,
    extract::Extension,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use serde::Serialize;
use std::sync::Arc;

use crate::store::memory::NodeStore;

pub const WELCOME_MESSAGE: &str =
    "Welcome to the Distributed System Simulator! Visit /nodes to get node data.";

#[derive(Debug, Serialize)]
struct WelcomeResponse {
    message: String,
}

/// Builds the application router with the store attached as an extension.
pub fn router(store: Arc<NodeStore>) -> Router {
    Router::new()
        .route("/", get(handle_root))
        .route("/nodes", get(handle_nodes))
        .layer(Extension(store))
}

/// `GET /` - welcome message.
pub async fn handle_root() -> Response {
    let message = WelcomeResponse {
        message: WELCOME_MESSAGE.to_string(),
    };

    match serde_json::to_vec(&message) {
        Ok(body) => json_response(body),
        Err(e) => {
            tracing::error!("Failed to encode welcome message: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to encode welcome message",
            )
                .into_response()
        }
    }
}

/// `GET /nodes` - a point-in-time snapshot of every node record.
pub async fn handle_nodes(Extension(store): Extension<Arc<NodeStore>>) -> Response {
    let nodes = store.snapshot().await;

    match serde_json::to_vec(&nodes) {
        Ok(body) => json_response(body),
        Err(e) => {
            tracing::error!("Failed to encode node data: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to encode node data",
            )
                .into_response()
        }
    }
}

fn json_response(body: Vec<u8>) -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Body::from(body),
    )
        .into_response()
}
