//! Image asset delivery
//!
//! Serves files from the configured asset root under `/images`. Any
//! failure to produce the file, including traversal attempts, is
//! masked with a neutral inline SVG placeholder at status 200: the
//! visitor sees a quiet grey box, never a broken-image glyph.

use std::path::{Component, Path as FsPath, PathBuf};

use axum::extract::{Path, State};
use axum::http::header::{CACHE_CONTROL, CONTENT_TYPE};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;

use crate::AppState;

/// Neutral placeholder shown in place of a missing or unreadable image
const PLACEHOLDER_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 16 10">
  <rect width="16" height="10" fill="#e7e5e4"/>
</svg>"##;

pub fn assets_router() -> Router<AppState> {
    Router::new().route("/images/*path", get(serve_image))
}

/// GET /images/*path
async fn serve_image(State(state): State<AppState>, Path(path): Path<String>) -> Response {
    let Some(relative) = sanitize(&path) else {
        return placeholder();
    };

    let full_path = state.config.assets.root.join(relative);
    match tokio::fs::read(&full_path).await {
        Ok(bytes) => (
            [
                (CONTENT_TYPE, content_type_for(&path)),
                (CACHE_CONTROL, "public, max-age=3600"),
            ],
            bytes,
        )
            .into_response(),
        Err(error) => {
            tracing::debug!(%error, path = %path, "image unavailable, serving placeholder");
            placeholder()
        }
    }
}

fn placeholder() -> Response {
    (
        [
            (CONTENT_TYPE, "image/svg+xml"),
            (CACHE_CONTROL, "no-store"),
        ],
        PLACEHOLDER_SVG,
    )
        .into_response()
}

/// Reject anything that could escape the asset root
fn sanitize(path: &str) -> Option<PathBuf> {
    let relative = FsPath::new(path);
    let mut clean = PathBuf::new();
    for component in relative.components() {
        match component {
            Component::Normal(part) => clean.push(part),
            _ => return None,
        }
    }
    if clean.as_os_str().is_empty() {
        return None;
    }
    Some(clean)
}

fn content_type_for(path: &str) -> &'static str {
    let extension = path.rsplit('.').next().unwrap_or_default();
    match extension.to_ascii_lowercase().as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "svg" => "image/svg+xml",
        "avif" => "image/avif",
        _ => "application/octet-stream",
    }
}
