//! Static site content
//!
//! The content layer holds the immutable records every other
//! component reads: the owner profile, the project list, and the
//! journal posts.

mod models;
mod store;

pub use models::{BlogPost, Category, Profile, Project, SocialLinks};
pub use store::ContentStore;
