//! Coordinate conversion between screen pixels and the page render area.
//!
//! Pointer events arrive in screen (client) coordinates. Stamps are stored
//! relative to the top-left of the page's rendered container.

use crate::geometry::{Point, point};
use serde::{Deserialize, Serialize};

/// On-screen rectangle of the page render container, as reported by the
/// host's layout (`getBoundingClientRect`-style).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContainerBounds {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl ContainerBounds {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Container with its origin at the screen origin.
    pub fn sized(width: f32, height: f32) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    #[inline]
    pub fn origin(&self) -> Point {
        point(self.left, self.top)
    }

    /// True when the container has a usable, finite area.
    pub fn is_valid(&self) -> bool {
        [self.left, self.top, self.width, self.height]
            .iter()
            .all(|v| v.is_finite())
            && self.width > 0.0
            && self.height > 0.0
    }
}

pub struct CoordinateConverter;

impl CoordinateConverter {
    /// Convert screen position to page-relative position
    #[inline]
    pub fn screen_to_page(screen_pos: Point, bounds: &ContainerBounds) -> Point {
        screen_pos - bounds.origin()
    }

    /// Convert page-relative position to screen position
    #[inline]
    pub fn page_to_screen(page_pos: Point, bounds: &ContainerBounds) -> Point {
        page_pos + bounds.origin()
    }
}
