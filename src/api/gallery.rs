//! Gallery endpoints
//!
//! `/gallery/:id` is the one deep-linkable route on the site; every
//! other view is reached through in-app navigation. Opening a gallery
//! page resets the lightbox; lightbox commands mutate the active
//! viewer and return the refreshed page.

use axum::extract::{Path, State};
use axum::response::Json;
use axum::routing::{get, post};
use axum::Router;
use serde::Deserialize;

use crate::api::dto::{GalleryPage, GALLERY_EMPTY_MESSAGE, GALLERY_NOT_FOUND_MESSAGE};
use crate::content::Project;
use crate::session::{ClickTarget, GalleryViewer, LightboxKey};
use crate::{ActiveGallery, AppState};

pub fn gallery_router() -> Router<AppState> {
    Router::new()
        .route("/gallery/:id", get(gallery))
        .route("/gallery/:id/lightbox", post(lightbox))
}

/// Lightbox mutation, one UI gesture per variant
#[derive(Debug, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum LightboxCommand {
    Open { index: usize },
    Close,
    Next,
    Prev,
    Key { key: LightboxKey },
    Click { target: ClickTarget },
}

/// Images backing a project's gallery
///
/// The gallery list wins; a project without one falls back to its
/// cover image, and a project with neither yields the empty state.
pub(crate) fn gallery_images(project: &Project) -> Vec<String> {
    if !project.gallery.is_empty() {
        return project.gallery.clone();
    }
    if project.image_url.is_empty() {
        return Vec::new();
    }
    vec![project.image_url.clone()]
}

/// Build the page payload for a project id without touching lightbox
/// state, used by view resolution
pub(crate) async fn gallery_page_for(state: &AppState, project_id: &str) -> GalleryPage {
    let Some(project) = state.content.project(project_id) else {
        return GalleryPage::NotFound {
            message: GALLERY_NOT_FOUND_MESSAGE.to_string(),
        };
    };

    let images = gallery_images(project);
    if images.is_empty() {
        return GalleryPage::Empty {
            project_id: project.id.clone(),
            title: project.title.clone(),
            message: GALLERY_EMPTY_MESSAGE.to_string(),
        };
    }

    let lightbox = state.lightbox.lock().await;
    let active_index = lightbox
        .as_ref()
        .filter(|active| active.project_id == project_id)
        .and_then(|active| active.viewer.active());

    GalleryPage::Grid {
        project_id: project.id.clone(),
        title: project.title.clone(),
        images,
        active_index,
    }
}

/// GET /gallery/:id
///
/// Renders the gallery page and resets the lightbox to closed for
/// this project. Unknown ids and empty galleries are placeholder
/// pages, not errors.
async fn gallery(State(state): State<AppState>, Path(id): Path<String>) -> Json<GalleryPage> {
    let Some(project) = state.content.project(&id) else {
        return Json(GalleryPage::NotFound {
            message: GALLERY_NOT_FOUND_MESSAGE.to_string(),
        });
    };

    let images = gallery_images(project);
    if images.is_empty() {
        return Json(GalleryPage::Empty {
            project_id: project.id.clone(),
            title: project.title.clone(),
            message: GALLERY_EMPTY_MESSAGE.to_string(),
        });
    }

    let mut lightbox = state.lightbox.lock().await;
    *lightbox = Some(ActiveGallery {
        project_id: project.id.clone(),
        viewer: GalleryViewer::new(images.clone()),
    });

    Json(GalleryPage::Grid {
        project_id: project.id.clone(),
        title: project.title.clone(),
        images,
        active_index: None,
    })
}

/// POST /gallery/:id/lightbox
///
/// Applies one command to the project's lightbox. A command arriving
/// before the gallery page was opened initializes a closed viewer
/// first, so deep-linked clients behave the same as navigated ones.
async fn lightbox(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(command): Json<LightboxCommand>,
) -> Json<GalleryPage> {
    let Some(project) = state.content.project(&id) else {
        return Json(GalleryPage::NotFound {
            message: GALLERY_NOT_FOUND_MESSAGE.to_string(),
        });
    };

    let images = gallery_images(project);
    if images.is_empty() {
        return Json(GalleryPage::Empty {
            project_id: project.id.clone(),
            title: project.title.clone(),
            message: GALLERY_EMPTY_MESSAGE.to_string(),
        });
    }

    let mut lightbox = state.lightbox.lock().await;
    let stale = !matches!(&*lightbox, Some(active) if active.project_id == id);
    if stale {
        *lightbox = Some(ActiveGallery {
            project_id: project.id.clone(),
            viewer: GalleryViewer::new(images.clone()),
        });
    }
    let active = lightbox.as_mut().expect("lightbox was just initialized");

    match command {
        LightboxCommand::Open { index } => active.viewer.open(index),
        LightboxCommand::Close => active.viewer.close(),
        LightboxCommand::Next => active.viewer.next(),
        LightboxCommand::Prev => active.viewer.prev(),
        LightboxCommand::Key { key } => active.viewer.handle_key(key),
        LightboxCommand::Click { target } => active.viewer.handle_click(target),
    }

    Json(GalleryPage::Grid {
        project_id: project.id.clone(),
        title: project.title.clone(),
        images,
        active_index: active.viewer.active(),
    })
}
