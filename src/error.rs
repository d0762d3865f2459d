use std::path::PathBuf;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::{debug, error};

#[derive(Error, Debug)]
pub enum BrowseError {
    #[error("{} not found", .0.display())]
    NotFound(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Template error: {0}")]
    Template(#[from] minijinja::Error),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Background task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl BrowseError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            BrowseError::NotFound(_) => StatusCode::NOT_FOUND,
            BrowseError::Io(_)
            | BrowseError::Template(_)
            | BrowseError::Serialize(_)
            | BrowseError::Task(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for BrowseError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.to_string();

        if status.is_server_error() {
            error!("request failed: {}", message);
        } else {
            debug!("{}", message);
        }

        (status, message).into_response()
    }
}
