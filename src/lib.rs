//! HTTP directory browser library.
//!
//! Serves one root directory under `/files/`: directories render as an HTML
//! listing, files are streamed. Request paths are confined to the root by
//! stripping parent segments.

pub mod config;
pub mod entry;
pub mod error;
pub mod handlers;
pub mod humanize;
pub mod listing;
pub mod render;
pub mod resolve;
pub mod routes;

use std::path::PathBuf;
use std::sync::Arc;

use axum::Router;
use tower_http::trace::TraceLayer;

pub use config::Config;
pub use error::BrowseError;
pub use render::Renderer;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// Root directory to serve files from
    pub root_dir: PathBuf,
    /// Configuration
    pub config: Arc<Config>,
    /// Listing page renderer
    pub renderer: Arc<Renderer>,
}

impl AppState {
    /// Create a new AppState with the given root directory and default config.
    pub fn new(root_dir: PathBuf) -> Result<Self, BrowseError> {
        Self::with_config(root_dir, Config::default())
    }

    /// Create a new AppState with the given root directory and config.
    pub fn with_config(root_dir: PathBuf, config: Config) -> Result<Self, BrowseError> {
        Ok(Self {
            root_dir,
            config: Arc::new(config),
            renderer: Arc::new(Renderer::new()?),
        })
    }
}

/// Build the full application router with request tracing.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(routes::browse_routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
