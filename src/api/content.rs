//! Content endpoints
//!
//! Read-only access to the static records. Unlike the view-resolution
//! endpoints, unknown ids here are real 404s: the placeholder
//! rendering belongs to the view layer, the direct API is exact.

use axum::extract::{Path, State};
use axum::response::Json;
use axum::routing::get;
use axum::Router;

use crate::api::dto::{PostDetail, PostSummary};
use crate::content::{Profile, Project};
use crate::error::{AppError, Result};
use crate::AppState;

pub fn content_router() -> Router<AppState> {
    Router::new()
        .route("/profile", get(profile))
        .route("/projects", get(projects))
        .route("/projects/:id", get(project))
        .route("/posts", get(posts))
        .route("/posts/:id", get(post))
}

/// GET /api/profile
async fn profile(State(state): State<AppState>) -> Json<Profile> {
    Json(state.content.profile().clone())
}

/// GET /api/projects
async fn projects(State(state): State<AppState>) -> Json<Vec<Project>> {
    Json(state.content.projects().to_vec())
}

/// GET /api/projects/:id
async fn project(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Project>> {
    let project = state.content.project(&id).ok_or(AppError::NotFound)?;
    Ok(Json(project.clone()))
}

/// GET /api/posts
async fn posts(State(state): State<AppState>) -> Json<Vec<PostSummary>> {
    Json(state.content.posts().iter().map(PostSummary::from).collect())
}

/// GET /api/posts/:id
///
/// Returns the full post with its markdown body rendered to the
/// rich-text tree.
async fn post(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<PostDetail>> {
    let post = state.content.post(&id).ok_or(AppError::NotFound)?;
    Ok(Json(PostDetail::from(post)))
}
