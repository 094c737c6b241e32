//! Route handlers for the AG3D converter service.

use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;
use tower_http::trace::TraceLayer;

/// Message payload returned by the stub endpoints
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    /// Human-readable status message
    pub message: String,
}

/// Root endpoint
pub async fn welcome() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Welcome to the AG3D Converter Service!".to_string(),
    })
}

/// Conversion endpoint. Placeholder for AG3D integration; the request body
/// is ignored.
pub async fn convert_image_to_3d() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Image conversion to 3D is not yet implemented.".to_string(),
    })
}

/// Build the Axum application with routes and middleware
pub fn build_app() -> Router {
    Router::new()
        .route("/", get(welcome))
        .route("/convert-image-to-3d", post(convert_image_to_3d))
        .layer(TraceLayer::new_for_http())
}
