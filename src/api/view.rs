//! View endpoints
//!
//! The view router owns which top-level view is active; resolution
//! turns that view into the page payload the client renders. An
//! unresolvable post id resolves to the not-found placeholder rather
//! than an HTTP error, so navigation itself can never fail.

use axum::extract::State;
use axum::response::Json;
use axum::routing::{get, post};
use axum::Router;
use serde::Deserialize;

use crate::api::dto::{PagePayload, PostDetail, PostSummary, ViewSnapshot, POST_NOT_FOUND_MESSAGE};
use crate::api::gallery::gallery_page_for;
use crate::session::ViewState;
use crate::AppState;

pub fn view_router() -> Router<AppState> {
    Router::new()
        .route("/view", get(current_view))
        .route("/view/navigate", post(navigate))
        .route("/view/menu", post(set_menu))
}

#[derive(Debug, Deserialize)]
struct NavigateRequest {
    target: ViewState,
}

#[derive(Debug, Deserialize)]
struct MenuRequest {
    open: bool,
}

/// GET /api/view
async fn current_view(State(state): State<AppState>) -> Json<ViewSnapshot> {
    Json(snapshot(&state).await)
}

/// POST /api/view/navigate
///
/// Replaces the current view, closes the mobile overlay, and advances
/// the scroll-reset counter, then returns the new snapshot.
async fn navigate(
    State(state): State<AppState>,
    Json(request): Json<NavigateRequest>,
) -> Json<ViewSnapshot> {
    {
        let mut router = state.router.lock().await;
        router.navigate(request.target);
    }
    Json(snapshot(&state).await)
}

/// POST /api/view/menu
async fn set_menu(
    State(state): State<AppState>,
    Json(request): Json<MenuRequest>,
) -> Json<ViewSnapshot> {
    {
        let mut router = state.router.lock().await;
        router.set_mobile_nav(request.open);
    }
    Json(snapshot(&state).await)
}

/// Snapshot the router and resolve its view into a page payload
async fn snapshot(state: &AppState) -> ViewSnapshot {
    let (view, mobile_nav_open, scroll_resets) = {
        let router = state.router.lock().await;
        (
            router.current().clone(),
            router.mobile_nav_open(),
            router.scroll_resets(),
        )
    };

    let page = resolve_page(state, &view).await;

    ViewSnapshot {
        view,
        mobile_nav_open,
        scroll_resets,
        page,
    }
}

async fn resolve_page(state: &AppState, view: &ViewState) -> PagePayload {
    match view {
        ViewState::Home => PagePayload::Home {
            profile: state.content.profile().clone(),
            featured_projects: state
                .content
                .featured_projects()
                .into_iter()
                .cloned()
                .collect(),
        },
        ViewState::Projects => PagePayload::Projects {
            projects: state.content.projects().to_vec(),
        },
        ViewState::Blog => PagePayload::Blog {
            posts: state.content.posts().iter().map(PostSummary::from).collect(),
        },
        ViewState::Post { post_id } => match state.content.post(post_id) {
            Some(post) => PagePayload::Post {
                post: PostDetail::from(post),
            },
            None => PagePayload::PostNotFound {
                message: POST_NOT_FOUND_MESSAGE.to_string(),
            },
        },
        ViewState::Gallery { project_id } => PagePayload::Gallery {
            gallery: gallery_page_for(state, project_id).await,
        },
    }
}
