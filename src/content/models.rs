//! Content models
//!
//! Rust structs representing the static portfolio records. All of
//! them are loaded once at startup and never mutated afterwards.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// =============================================================================
// Profile
// =============================================================================

/// The single site owner
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    /// Headline shown on the home view
    pub title: String,
    pub bio: String,
    pub socials: SocialLinks,
    pub skills: Vec<String>,
}

/// Optional per-platform profile URLs
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLinks {
    pub github: Option<String>,
    pub twitter: Option<String>,
    pub linkedin: Option<String>,
    pub email: Option<String>,
}

// =============================================================================
// Project
// =============================================================================

/// A portfolio project
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Unique across all projects
    pub id: String,
    pub title: String,
    pub description: String,
    pub tech_stack: Vec<String>,
    /// Live deployment, if any
    pub link: Option<String>,
    /// Source repository, if any
    pub repository: Option<String>,
    /// Cover image path, served via `/images`
    pub image_url: String,
    /// Shown on the home view when set
    pub featured: bool,
    /// Image paths for the gallery view; empty for most projects
    #[serde(default)]
    pub gallery: Vec<String>,
}

// =============================================================================
// Blog post
// =============================================================================

/// Post category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Technical,
    Life,
    Thoughts,
}

/// A journal entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogPost {
    /// Unique across all posts
    pub id: String,
    pub title: String,
    pub summary: String,
    /// Markdown body, rendered by the markdown presenter on detail views
    pub body: String,
    pub date: NaiveDate,
    pub category: Category,
    /// Display label, e.g. "4 min"
    pub read_time: String,
}
