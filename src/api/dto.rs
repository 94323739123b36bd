//! API response DTOs
//!
//! Wire shapes for the JSON API. Content records serialize directly;
//! the types here cover derived payloads: post summaries vs. rendered
//! detail, resolved view pages, chat state, gallery pages.

use chrono::NaiveDate;
use serde::Serialize;

use crate::content::{BlogPost, Category, Profile, Project};
use crate::markdown::{self, RichTextNode};
use crate::session::{ChatMessage, ChatSession};

/// Placeholder text for a post id with no matching record
pub const POST_NOT_FOUND_MESSAGE: &str = "Post not found.";

/// Placeholder text for a gallery id with no matching project
pub const GALLERY_NOT_FOUND_MESSAGE: &str = "Project not found.";

/// Empty-state text for a gallery with no images
pub const GALLERY_EMPTY_MESSAGE: &str = "No images in this gallery yet.";

/// Post list entry, without the body
#[derive(Debug, Clone, Serialize)]
pub struct PostSummary {
    pub id: String,
    pub title: String,
    pub summary: String,
    pub date: NaiveDate,
    pub category: Category,
    pub read_time: String,
}

impl From<&BlogPost> for PostSummary {
    fn from(post: &BlogPost) -> Self {
        Self {
            id: post.id.clone(),
            title: post.title.clone(),
            summary: post.summary.clone(),
            date: post.date,
            category: post.category,
            read_time: post.read_time.clone(),
        }
    }
}

/// Full post with the rendered rich-text body
#[derive(Debug, Clone, Serialize)]
pub struct PostDetail {
    pub id: String,
    pub title: String,
    pub summary: String,
    pub date: NaiveDate,
    pub category: Category,
    pub read_time: String,
    pub body: Vec<RichTextNode>,
}

impl From<&BlogPost> for PostDetail {
    fn from(post: &BlogPost) -> Self {
        Self {
            id: post.id.clone(),
            title: post.title.clone(),
            summary: post.summary.clone(),
            date: post.date,
            category: post.category,
            read_time: post.read_time.clone(),
            body: markdown::render(&post.body),
        }
    }
}

/// Resolved payload for the active view
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "page", rename_all = "snake_case")]
pub enum PagePayload {
    Home {
        profile: Profile,
        featured_projects: Vec<Project>,
    },
    Projects {
        projects: Vec<Project>,
    },
    Blog {
        posts: Vec<PostSummary>,
    },
    Post {
        post: PostDetail,
    },
    PostNotFound {
        message: String,
    },
    Gallery {
        gallery: GalleryPage,
    },
}

/// Gallery page payload
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum GalleryPage {
    /// Grid of images, with the lightbox index when one is active
    Grid {
        project_id: String,
        title: String,
        images: Vec<String>,
        active_index: Option<usize>,
    },
    /// Project exists but has nothing to show
    Empty {
        project_id: String,
        title: String,
        message: String,
    },
    /// No project with this id
    NotFound { message: String },
}

/// Current view plus its resolved page
#[derive(Debug, Clone, Serialize)]
pub struct ViewSnapshot {
    pub view: crate::session::ViewState,
    pub mobile_nav_open: bool,
    /// Monotonic counter; a new value means scroll smoothly to top
    pub scroll_resets: u64,
    pub page: PagePayload,
}

/// Chat widget state
#[derive(Debug, Clone, Serialize)]
pub struct ChatState {
    pub transcript: Vec<ChatMessage>,
    pub pending: bool,
    pub open: bool,
    /// Index of the newest message; the client scrolls it into view
    /// after every mutation and whenever the widget opens
    pub scroll_target: usize,
}

impl ChatState {
    pub fn from_session(session: &ChatSession) -> Self {
        let transcript = session.transcript().to_vec();
        let scroll_target = transcript.len().saturating_sub(1);
        Self {
            transcript,
            pending: session.pending(),
            open: session.open(),
            scroll_target,
        }
    }
}
