//! Handle layout and hit testing for a single stamp.
//!
//! Handles are laid out in the stamp's own unrotated frame: four square
//! corner handles and a round rotate handle above the top edge. A pointer is
//! tested by rotating it back into that frame first, so handles follow the
//! stamp as it turns.

use crate::constants::{HANDLE_SIZE, ROTATE_HANDLE_OFFSET, ROTATE_HANDLE_RADIUS};
use crate::geometry::{Point, Rect, deg_to_rad, distance, point, rotate_about};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Corner handle that started a resize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResizeHandle {
    Nw,
    Ne,
    Sw,
    Se,
}

impl ResizeHandle {
    pub const ALL: [ResizeHandle; 4] = [Self::Nw, Self::Ne, Self::Sw, Self::Se];

    /// True for handles on the left edge; the right edge stays anchored.
    pub fn moves_left_edge(self) -> bool {
        matches!(self, Self::Nw | Self::Sw)
    }

    /// True for handles on the top edge; the bottom edge stays anchored.
    pub fn moves_top_edge(self) -> bool {
        matches!(self, Self::Nw | Self::Ne)
    }

    /// Signed growth along x and y for a pointer delta.
    ///
    /// Dragging a left handle leftwards grows the stamp, so its x delta is
    /// negated; likewise for top handles and y.
    pub fn growth(self, dx: f32, dy: f32) -> (f32, f32) {
        let gx = if self.moves_left_edge() { -dx } else { dx };
        let gy = if self.moves_top_edge() { -dy } else { dy };
        (gx, gy)
    }

    /// Single growth value used when the aspect ratio is locked: the mean of
    /// both signed deltas (`se` → `(dx+dy)/2`, `nw` → `(-dx-dy)/2`, ...).
    pub fn averaged_growth(self, dx: f32, dy: f32) -> f32 {
        let (gx, gy) = self.growth(dx, dy);
        (gx + gy) / 2.0
    }

    /// Corner of `rect` this handle sits on.
    pub fn corner(self, rect: &Rect) -> Point {
        let left = rect.origin.x;
        let top = rect.origin.y;
        let right = left + rect.width;
        let bottom = top + rect.height;
        match self {
            Self::Nw => point(left, top),
            Self::Ne => point(right, top),
            Self::Sw => point(left, bottom),
            Self::Se => point(right, bottom),
        }
    }
}

impl fmt::Display for ResizeHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Nw => "nw",
            Self::Ne => "ne",
            Self::Sw => "sw",
            Self::Se => "se",
        };
        f.write_str(name)
    }
}

/// What part of a stamp the pointer landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    Body,
    Resize(ResizeHandle),
    Rotate,
}

/// Handle dimensions, in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandleMetrics {
    pub handle_size: f32,
    pub rotate_offset: f32,
    pub rotate_radius: f32,
}

impl Default for HandleMetrics {
    fn default() -> Self {
        Self {
            handle_size: HANDLE_SIZE,
            rotate_offset: ROTATE_HANDLE_OFFSET,
            rotate_radius: ROTATE_HANDLE_RADIUS,
        }
    }
}

impl HandleMetrics {
    /// How far handles reach outside the stamp's box.
    pub fn reach(&self) -> f32 {
        (self.handle_size / 2.0).max(self.rotate_offset + self.rotate_radius)
    }

    /// Centre of the rotate handle in the unrotated frame.
    pub fn rotate_handle_center(&self, rect: &Rect) -> Point {
        point(rect.center().x, rect.origin.y - self.rotate_offset)
    }
}

/// Resolve `pos` against a stamp occupying `rect` rotated by `rotation`
/// degrees about its centre.
///
/// Rotate handle wins over corner handles, which win over the body.
pub fn hit_test(
    rect: &Rect,
    rotation: f32,
    pos: Point,
    metrics: &HandleMetrics,
) -> Option<HitTarget> {
    let local = rotate_about(pos, rect.center(), -deg_to_rad(rotation));

    if distance(local, metrics.rotate_handle_center(rect)) <= metrics.rotate_radius {
        return Some(HitTarget::Rotate);
    }

    let half = metrics.handle_size / 2.0;
    for handle in ResizeHandle::ALL {
        let c = handle.corner(rect);
        if (local.x - c.x).abs() <= half && (local.y - c.y).abs() <= half {
            return Some(HitTarget::Resize(handle));
        }
    }

    rect.contains(local).then_some(HitTarget::Body)
}

/// True when `pos` lies on the stamp's body itself, ignoring handles.
pub fn body_contains(rect: &Rect, rotation: f32, pos: Point) -> bool {
    rect.contains(rotate_about(pos, rect.center(), -deg_to_rad(rotation)))
}
