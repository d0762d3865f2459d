//! Shared helpers for HTTP integration tests.

use std::path::Path;

use axum::{
    Router,
    body::Body,
    http::{Method, Request},
    response::Response,
};
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

use dirbrowse::AppState;

/// Served tree used by most tests:
///
/// ```text
/// <outer>/secret.txt
/// <outer>/root/readme.txt
/// <outer>/root/docs/movie.mkv
/// <outer>/root/docs/notes.txt
/// <outer>/root/docs/drafts/
/// ```
pub struct Fixture {
    pub outer: TempDir,
}

impl Fixture {
    pub fn new() -> Self {
        let outer = TempDir::new().unwrap();
        let root = outer.path().join("root");
        std::fs::create_dir_all(root.join("docs/drafts")).unwrap();
        std::fs::write(outer.path().join("secret.txt"), "top secret").unwrap();
        std::fs::write(root.join("readme.txt"), "read me first").unwrap();
        std::fs::write(root.join("docs/movie.mkv"), vec![7u8; 4096]).unwrap();
        std::fs::write(root.join("docs/notes.txt"), "some notes\n").unwrap();
        Self { outer }
    }

    pub fn root(&self) -> std::path::PathBuf {
        self.outer.path().join("root")
    }

    pub fn app(&self) -> Router {
        test_app(&self.root())
    }
}

pub fn test_app(root: &Path) -> Router {
    let state = AppState::new(root.to_path_buf()).unwrap();
    dirbrowse::app(state)
}

pub async fn get(app: Router, uri: &str) -> Response {
    send(app, Request::builder().uri(uri).method(Method::GET)).await
}

pub async fn send(app: Router, builder: axum::http::request::Builder) -> Response {
    app.oneshot(builder.body(Body::empty()).unwrap())
        .await
        .unwrap()
}

pub async fn body_bytes(response: Response) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), 16 * 1024 * 1024)
        .await
        .unwrap()
        .to_vec()
}

pub async fn body_string(response: Response) -> String {
    String::from_utf8(body_bytes(response).await).unwrap()
}

/// Pull the inlined listing out of a rendered page and decode it.
pub fn listing_entries(html: &str) -> Vec<Value> {
    let start = html.find("JSON.parse(\"").expect("payload start") + "JSON.parse(\"".len();
    let end = start + html[start..].find("\");").expect("payload end");

    let mut json = String::new();
    let mut chars = html[start..end].chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            json.push(c);
            continue;
        }
        match chars.next() {
            Some('x') => {
                let hex: String = chars.by_ref().take(2).collect();
                json.push(u8::from_str_radix(&hex, 16).unwrap() as char);
            }
            Some('u') => {
                let hex: String = chars.by_ref().take(4).collect();
                json.push(char::from_u32(u32::from_str_radix(&hex, 16).unwrap()).unwrap());
            }
            Some(other) => json.push(other),
            None => panic!("dangling escape"),
        }
    }

    serde_json::from_str(&json).unwrap()
}
