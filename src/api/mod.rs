//! API layer
//!
//! HTTP handlers for:
//! - Content (profile, projects, posts)
//! - View routing and resolution
//! - Chat widget
//! - Gallery pages and lightbox
//! - Image assets

mod assets;
mod chat;
mod content;
mod dto;
mod gallery;
mod view;

pub use dto::*;

pub use assets::assets_router;
pub use chat::chat_router;
pub use content::content_router;
pub use gallery::gallery_router;
pub use view::view_router;
