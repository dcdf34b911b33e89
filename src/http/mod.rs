//! HTTP layer - Router, handlers, and error mapping
//!
//! The transport boundary: routes requests to handlers and maps store
//! failures to status codes. CORS policy is configurable; a `*` entry in
//! the allowed origins opens the service to any origin.

pub mod error;
pub mod handlers;

use std::sync::Arc;

use axum::http::HeaderValue;
use axum::routing::get;
use axum::Router;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::application::ports::TranscriptionStore;

/// Shared handler state
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn TranscriptionStore>,
}

impl AppState {
    /// Create state over the given store
    pub fn new(store: Arc<dyn TranscriptionStore>) -> Self {
        Self { store }
    }
}

/// Build the service router with the given CORS policy
pub fn build_router(state: AppState, allowed_origins: &[String]) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route(
            "/transcriptions",
            get(handlers::list_transcriptions).post(handlers::create_transcription),
        )
        .route(
            "/transcriptions/{id}",
            get(handlers::get_transcription).delete(handlers::delete_transcription),
        )
        .layer(cors_layer(allowed_origins))
        .with_state(state)
}

/// Build the CORS layer. A `*` entry allows any origin.
fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    if allowed_origins.iter().any(|o| o == "*") {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
    }

    let mut origins: Vec<HeaderValue> = Vec::new();
    for origin in allowed_origins {
        match origin.parse::<HeaderValue>() {
            Ok(value) => origins.push(value),
            Err(_) => tracing::warn!("Ignoring invalid CORS origin: {}", origin),
        }
    }

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any)
}
