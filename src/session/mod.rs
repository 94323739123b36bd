//! Visitor session state
//!
//! The three mutable state containers of the site, each owned by one
//! component and mutated by at most one request handler at a time:
//!
//! - `ViewRouter`: the current top-level view
//! - `ChatSession`: the chat transcript and pending flag
//! - `GalleryViewer`: the gallery lightbox index

mod chat;
mod gallery;
mod view;

pub use chat::{
    ChatMessage, ChatSession, Role, Submission, CONNECTIVITY_ERROR_REPLY, EMPTY_REPLY_FALLBACK,
};
pub use gallery::{ClickTarget, GalleryViewer, LightboxKey};
pub use view::{ViewRouter, ViewState};
