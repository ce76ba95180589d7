//! Corner resize math.
//!
//! Pure function of the geometry captured at gesture start and the pointer
//! delta since then; nothing here reads or writes the collection.

use crate::input::handles::ResizeHandle;
use crate::types::StampGeometry;

/// Constraints a resize must respect.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResizeLimits {
    /// Floor for both width and height
    pub min_size: f32,
    /// Size of the page render area the stamp must stay inside, if known
    pub container: Option<(f32, f32)>,
}

/// New geometry for a resize from `handle` by pointer delta `(dx, dy)`.
///
/// With `maintain_aspect_ratio` one averaged delta drives the width and the
/// height follows from the starting ratio. The corner opposite `handle`
/// never moves. Width and height never drop below `limits.min_size`, and
/// growth stops where the anchored box would leave the container.
pub fn resized_geometry(
    start: StampGeometry,
    handle: ResizeHandle,
    dx: f32,
    dy: f32,
    maintain_aspect_ratio: bool,
    limits: ResizeLimits,
) -> StampGeometry {
    let min = limits.min_size;

    // Room between the anchored edges and the container edges
    let (room_w, room_h) = match limits.container {
        Some((cw, ch)) => {
            let room_w = if handle.moves_left_edge() {
                start.x + start.width
            } else {
                cw - start.x
            };
            let room_h = if handle.moves_top_edge() {
                start.y + start.height
            } else {
                ch - start.y
            };
            (room_w, room_h)
        }
        None => (f32::INFINITY, f32::INFINITY),
    };

    let (width, height) = if maintain_aspect_ratio && start.width > 0.0 && start.height > 0.0 {
        let ratio = start.width / start.height;
        // Smallest width that keeps both sides at or above the floor
        let min_width = min * ratio.max(1.0);
        let max_width = room_w.min(room_h * ratio).max(min_width);
        let width = (start.width + handle.averaged_growth(dx, dy))
            .min(max_width)
            .max(min_width);
        (width, width / ratio)
    } else {
        let (gx, gy) = handle.growth(dx, dy);
        let width = (start.width + gx).min(room_w.max(min)).max(min);
        let height = (start.height + gy).min(room_h.max(min)).max(min);
        (width, height)
    };

    let x = if handle.moves_left_edge() {
        start.x + (start.width - width)
    } else {
        start.x
    };
    let y = if handle.moves_top_edge() {
        start.y + (start.height - height)
    } else {
        start.y
    };

    StampGeometry {
        x,
        y,
        width,
        height,
        rotation: start.rotation,
    }
}
