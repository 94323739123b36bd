//! Gallery viewer
//!
//! Lightbox state for a project's image gallery: the grid itself is
//! stateless, the enlarged single-image view is an index into the
//! ordered image list with wraparound navigation. The index resets to
//! closed whenever the gallery page is opened and on Escape or a
//! backdrop click; clicking the enlarged image itself is contained.

use serde::{Deserialize, Serialize};

/// Keyboard input the lightbox reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LightboxKey {
    Escape,
    ArrowLeft,
    ArrowRight,
}

/// Pointer input relative to the open lightbox
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClickTarget {
    /// The enlarged image; the click is contained and changes nothing
    Image,
    /// Anywhere outside the enlarged image; closes the lightbox
    Backdrop,
}

/// Lightbox state for one gallery page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryViewer {
    images: Vec<String>,
    active: Option<usize>,
}

impl GalleryViewer {
    /// Create a viewer over an ordered image list, lightbox closed
    pub fn new(images: Vec<String>) -> Self {
        Self {
            images,
            active: None,
        }
    }

    pub fn images(&self) -> &[String] {
        &self.images
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Active image index, if the lightbox is open
    pub fn active(&self) -> Option<usize> {
        self.active
    }

    /// Open the lightbox at `index`
    ///
    /// Out-of-range indices are ignored, keeping the invariant that
    /// an active index is always within `[0, count)`.
    pub fn open(&mut self, index: usize) {
        if index < self.images.len() {
            self.active = Some(index);
        }
    }

    pub fn close(&mut self) {
        self.active = None;
    }

    /// Advance to the next image, wrapping past the end
    pub fn next(&mut self) {
        if let Some(index) = self.active {
            self.active = Some((index + 1) % self.images.len());
        }
    }

    /// Retreat to the previous image, wrapping past the start
    pub fn prev(&mut self) {
        if let Some(index) = self.active {
            let count = self.images.len();
            self.active = Some((index + count - 1) % count);
        }
    }

    /// Keyboard handling while the lightbox is open
    pub fn handle_key(&mut self, key: LightboxKey) {
        if self.active.is_none() {
            return;
        }
        match key {
            LightboxKey::Escape => self.close(),
            LightboxKey::ArrowRight => self.next(),
            LightboxKey::ArrowLeft => self.prev(),
        }
    }

    /// Click handling while the lightbox is open
    pub fn handle_click(&mut self, target: ClickTarget) {
        match target {
            ClickTarget::Backdrop => self.close(),
            ClickTarget::Image => {}
        }
    }
}
