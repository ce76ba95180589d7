//! Geometry helpers shared by the interaction and hit-testing code.
//!
//! Everything here is pure and total: no function fails or panics for
//! finite input.

use crate::constants::FULL_TURN_DEGREES;
use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};

/// A 2D point or vector in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

/// Shorthand constructor for [`Point`].
#[inline]
pub const fn point(x: f32, y: f32) -> Point {
    Point { x, y }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        point(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        point(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Axis-aligned rectangle given by its top-left corner and size.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub origin: Point,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            origin: point(x, y),
            width,
            height,
        }
    }

    pub fn center(&self) -> Point {
        point(
            self.origin.x + self.width / 2.0,
            self.origin.y + self.height / 2.0,
        )
    }

    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.origin.x
            && p.x <= self.origin.x + self.width
            && p.y >= self.origin.y
            && p.y <= self.origin.y + self.height
    }

    /// Axis-aligned bounds of this rectangle rotated about its centre.
    pub fn rotated_bounds(&self, degrees: f32) -> Rect {
        let radians = deg_to_rad(degrees);
        let (sin, cos) = radians.sin_cos();
        let w = self.width * cos.abs() + self.height * sin.abs();
        let h = self.width * sin.abs() + self.height * cos.abs();
        let c = self.center();
        Rect::new(c.x - w / 2.0, c.y - h / 2.0, w, h)
    }

    /// Grow the rectangle by `margin` on every side.
    pub fn inflate(&self, margin: f32) -> Rect {
        Rect::new(
            self.origin.x - margin,
            self.origin.y - margin,
            self.width + margin * 2.0,
            self.height + margin * 2.0,
        )
    }
}

/// Restrict `value` to `[lo, hi]`.
///
/// Callers should pass `lo <= hi`. For an inverted range (a stamp wider than
/// its container) the lower bound wins; `f32::clamp` would panic here.
#[inline]
pub fn clamp(value: f32, lo: f32, hi: f32) -> f32 {
    value.min(hi).max(lo)
}

/// Euclidean distance between two points.
#[inline]
pub fn distance(p1: Point, p2: Point) -> f32 {
    let dx = p2.x - p1.x;
    let dy = p2.y - p1.y;
    (dx * dx + dy * dy).sqrt()
}

/// Bearing from `center` to `p` in radians, as returned by `atan2`.
#[inline]
pub fn angle(center: Point, p: Point) -> f32 {
    (p.y - center.y).atan2(p.x - center.x)
}

#[inline]
pub fn deg_to_rad(degrees: f32) -> f32 {
    degrees * (std::f32::consts::PI / 180.0)
}

#[inline]
pub fn rad_to_deg(radians: f32) -> f32 {
    radians * (180.0 / std::f32::consts::PI)
}

/// Map any rotation onto `[0, 360)` for rendering.
#[inline]
pub fn normalize_degrees(degrees: f32) -> f32 {
    let normalized = degrees.rem_euclid(FULL_TURN_DEGREES);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if normalized >= FULL_TURN_DEGREES {
        0.0
    } else {
        normalized
    }
}

/// Rotate `p` about `center` by `radians` (screen orientation, y down).
pub fn rotate_about(p: Point, center: Point, radians: f32) -> Point {
    let (sin, cos) = radians.sin_cos();
    let d = p - center;
    point(
        center.x + d.x * cos - d.y * sin,
        center.y + d.x * sin + d.y * cos,
    )
}
