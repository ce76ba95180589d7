//! Pointer move handling - drag, resize and rotate updates.
//!
//! ## Performance Notes
//!
//! Pointer move fires for every input event while a gesture is active, and
//! each update has to finish before the next one arrives:
//! - Early exit when idle
//! - Geometry is computed by pure functions, then written back once
//! - The spatial index is refreshed on pointer up, not per move
//!
//! Enable profiling with `cargo build --features profiling` to see timing.

use crate::editor::StampEditor;
use crate::geometry::{Point, angle, clamp, point, rad_to_deg};
use crate::input::coords::{ContainerBounds, CoordinateConverter};
use crate::input::resize::{ResizeLimits, resized_geometry};
use crate::input::InputState;
use crate::profile_scope;
use crate::types::StampGeometry;
use tracing::trace;

/// Top-left of a dragged stamp, in page-relative coordinates, kept fully
/// inside the container.
///
/// A stamp larger than the container is pinned to its top/left edge.
pub fn dragged_position(
    pointer: Point,
    drag_offset: Point,
    bounds: &ContainerBounds,
    width: f32,
    height: f32,
) -> Point {
    let pos = CoordinateConverter::screen_to_page(pointer - drag_offset, bounds);
    point(
        clamp(pos.x, 0.0, bounds.width - width),
        clamp(pos.y, 0.0, bounds.height - height),
    )
}

/// Rotation in degrees after the pointer moved to `pointer`, for a session
/// that started at bearing `initial_angle` with rotation `initial_rotation`.
pub fn rotated_rotation(
    center: Point,
    initial_angle: f32,
    initial_rotation: f32,
    pointer: Point,
) -> f32 {
    initial_rotation + rad_to_deg(angle(center, pointer) - initial_angle)
}

impl StampEditor {
    /// Advance the active gesture to `screen_pos`. Returns the geometry
    /// written to the target stamp, or None when no gesture is active.
    pub fn handle_pointer_move(&mut self, screen_pos: Point) -> Option<StampGeometry> {
        profile_scope!("handle_pointer_move");

        let container = self.viewport.container();
        let limits = ResizeLimits {
            min_size: self.settings.min_stamp_size,
            container: self.viewport.containment(),
        };

        let id = self.input_state.target()?;
        let Some(stamp) = self.stamps.get_mut(id) else {
            // Target vanished mid-gesture
            trace!(stamp = %id, "Gesture target missing, resetting");
            self.input_state.reset();
            return None;
        };

        let current = stamp.geometry();
        let updated = match self.input_state {
            InputState::Idle => return None,
            InputState::Dragging { drag_offset, .. } => {
                let pos = dragged_position(
                    screen_pos,
                    drag_offset,
                    &container,
                    current.width,
                    current.height,
                );
                StampGeometry {
                    x: pos.x,
                    y: pos.y,
                    ..current
                }
            }
            InputState::Resizing {
                handle,
                start_pos,
                start_geometry,
                ..
            } => {
                let delta = screen_pos - start_pos;
                resized_geometry(
                    start_geometry,
                    handle,
                    delta.x,
                    delta.y,
                    stamp.maintain_aspect_ratio,
                    limits,
                )
            }
            InputState::Rotating {
                center,
                initial_angle,
                initial_rotation,
                ..
            } => StampGeometry {
                rotation: rotated_rotation(center, initial_angle, initial_rotation, screen_pos),
                ..current
            },
        };

        stamp.set_geometry(updated);
        self.dirty = true;
        Some(updated)
    }
}
