use std::io::ErrorKind;
use std::path::Path;

use axum::{
    Json,
    extract::{Path as UrlPath, Request, State},
    http::{StatusCode, header},
    response::{Html, IntoResponse, Redirect, Response},
};
use serde::Serialize;
use tokio::fs;
use tower::ServiceExt;
use tower_http::services::ServeFile;
use tracing::{debug, info};

use crate::AppState;
use crate::entry::Entry;
use crate::error::BrowseError;
use crate::listing::list_directory;
use crate::resolve::resolve;

/// Mount point of the browsable tree
pub const FILES_MOUNT: &str = "/files/";

const APP_CSS: &str = include_str!("../assets/static/app.css");
const APP_JS: &str = include_str!("../assets/static/app.js");

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub root: String,
}

/// GET /health
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        root: state.root_dir.display().to_string(),
    })
}

/// GET / and GET /files - send the client to the mount point
pub async fn redirect_to_files() -> Redirect {
    Redirect::temporary(FILES_MOUNT)
}

/// GET /static/{asset} - embedded page assets
pub async fn static_asset(UrlPath(asset): UrlPath<String>) -> Response {
    let body = match asset.as_str() {
        "app.css" => APP_CSS,
        "app.js" => APP_JS,
        _ => return (StatusCode::NOT_FOUND, format!("{} not found", asset)).into_response(),
    };

    let mime = mime_guess::from_path(&asset)
        .first_or_octet_stream()
        .to_string();

    ([(header::CONTENT_TYPE, mime)], body).into_response()
}

/// GET /files/{*path} - stream a file, redirect a bare directory, or list it
pub async fn browse(
    State(state): State<AppState>,
    request: Request,
) -> Result<Response, BrowseError> {
    let url_path = request.uri().path().to_string();
    let resolved = resolve(&state.root_dir, &url_path);

    let stat = fs::metadata(resolved.path()).await;
    let metadata = match stat {
        Ok(metadata) => metadata,
        Err(err) if matches!(err.kind(), ErrorKind::NotFound | ErrorKind::NotADirectory) => {
            return Err(BrowseError::NotFound(resolved.into_path_buf()));
        }
        Err(err) => return Err(err.into()),
    };

    if !metadata.is_dir() {
        return serve_file(resolved.path(), request).await;
    }

    if !url_path.ends_with('/') {
        debug!("Redirecting {} to directory form", url_path);
        return Ok(Redirect::temporary(&format!("{}/", url_path)).into_response());
    }

    let config = state.config.clone();
    let dir = resolved.path().to_path_buf();
    let mut entries = tokio::task::spawn_blocking(move || list_directory(&dir, &config)).await??;

    if !resolved.is_root() {
        entries.insert(0, Entry::parent());
    }

    let page = state.renderer.render(&url_path, &entries)?;
    Ok(Html(page).into_response())
}

/// Stream a regular file.
///
/// Content type, `Last-Modified`, conditional requests and ranges are handled by
/// `ServeFile`. The handle it opens is owned by the response body and closed
/// when the body finishes or is dropped on disconnect.
///
/// `ServeFile` reports unreadable files as 404, so the file is opened once up
/// front to turn open failures into 500. That handle is closed before
/// `ServeFile` opens its own; a file removed or made unreadable in between
/// still comes back as `ServeFile`'s 404.
async fn serve_file(path: &Path, request: Request) -> Result<Response, BrowseError> {
    drop(fs::File::open(path).await?);

    info!("Streaming file: {}", path.display());

    let response = ServeFile::new(path)
        .oneshot(request)
        .await
        .unwrap_or_else(|never| match never {});

    Ok(response.into_response())
}
