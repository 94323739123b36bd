//! View router
//!
//! Holds the single current view for the visitor session and performs
//! transitions between the five top-level views. Navigation replaces
//! the view wholesale, closes the mobile navigation overlay, and
//! signals a smooth scroll back to the top of the page.

use serde::{Deserialize, Serialize};

/// The mutually exclusive top-level views
///
/// Only the post and gallery cases carry data. An unresolved post or
/// project id is not rejected here; the view resolution layer renders
/// an explicit not-found placeholder for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ViewState {
    Home,
    Projects,
    Blog,
    Post { post_id: String },
    Gallery { project_id: String },
}

/// State container owning the current view
#[derive(Debug)]
pub struct ViewRouter {
    current: ViewState,
    mobile_nav_open: bool,
    /// Bumped on every navigation; the client animates a smooth
    /// scroll-to-top whenever it observes a new value.
    scroll_resets: u64,
}

impl Default for ViewRouter {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewRouter {
    /// Start at the home view with the overlay closed
    pub fn new() -> Self {
        Self {
            current: ViewState::Home,
            mobile_nav_open: false,
            scroll_resets: 0,
        }
    }

    pub fn current(&self) -> &ViewState {
        &self.current
    }

    pub fn mobile_nav_open(&self) -> bool {
        self.mobile_nav_open
    }

    pub fn scroll_resets(&self) -> u64 {
        self.scroll_resets
    }

    /// Replace the current view with `target`
    ///
    /// Every view transitions to every other view; no validation is
    /// performed beyond the variant tag. Side effects: the mobile
    /// overlay closes and the scroll-reset counter advances.
    pub fn navigate(&mut self, target: ViewState) {
        self.current = target;
        self.mobile_nav_open = false;
        self.scroll_resets += 1;
    }

    /// Open or close the mobile navigation overlay
    pub fn set_mobile_nav(&mut self, open: bool) {
        self.mobile_nav_open = open;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_views() -> Vec<ViewState> {
        vec![
            ViewState::Home,
            ViewState::Projects,
            ViewState::Blog,
            ViewState::Post {
                post_id: "minimalism-code".to_string(),
            },
            ViewState::Gallery {
                project_id: "artworks".to_string(),
            },
        ]
    }

    #[test]
    fn starts_at_home() {
        let router = ViewRouter::new();
        assert_eq!(router.current(), &ViewState::Home);
        assert!(!router.mobile_nav_open());
        assert_eq!(router.scroll_resets(), 0);
    }

    #[test]
    fn every_view_reaches_every_other_view() {
        for from in all_views() {
            for to in all_views() {
                let mut router = ViewRouter::new();
                router.navigate(from.clone());
                router.navigate(to.clone());
                assert_eq!(router.current(), &to);
            }
        }
    }

    #[test]
    fn navigate_closes_mobile_nav_and_bumps_scroll() {
        let mut router = ViewRouter::new();
        router.set_mobile_nav(true);

        router.navigate(ViewState::Blog);

        assert!(!router.mobile_nav_open());
        assert_eq!(router.scroll_resets(), 1);

        router.navigate(ViewState::Home);
        assert_eq!(router.scroll_resets(), 2);
    }

    #[test]
    fn view_state_serializes_with_tag() {
        let json = serde_json::to_value(ViewState::Post {
            post_id: "p".to_string(),
        })
        .unwrap();
        assert_eq!(json["type"], "post");
        assert_eq!(json["post_id"], "p");

        let json = serde_json::to_value(ViewState::Home).unwrap();
        assert_eq!(json["type"], "home");
    }
}
