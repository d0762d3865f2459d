use axum::{Router, routing::get};

use crate::AppState;
use crate::handlers;

/// Create directory browser routes
pub fn browse_routes() -> Router<AppState> {
    Router::new()
        // Health check
        .route("/health", get(handlers::health))
        // Mount point redirects
        .route("/", get(handlers::redirect_to_files))
        .route("/files", get(handlers::redirect_to_files))
        // Listing and file streaming
        .route("/files/", get(handlers::browse))
        .route("/files/{*path}", get(handlers::browse))
        // Page assets
        .route("/static/{asset}", get(handlers::static_asset))
}
