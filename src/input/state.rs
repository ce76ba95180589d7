//! Interaction state machine - one explicit state for every pointer gesture.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Dragging             (pointer down on a stamp body)
//! Idle -> Resizing(handle)     (pointer down on a corner handle)
//! Idle -> Rotating             (pointer down on the rotate handle)
//!
//! Any -> Idle                  (pointer up or cancel)
//! ```
//!
//! A session only references its target stamp by id; the collection owns
//! the stamp itself.

use crate::geometry::Point;
use crate::input::handles::ResizeHandle;
use crate::types::{StampGeometry, StampId};

/// Kind of an active gesture, without its captured data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureKind {
    Drag,
    Resize(ResizeHandle),
    Rotate,
}

/// Unified state for all pointer interaction with placed stamps.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum InputState {
    /// No active gesture
    #[default]
    Idle,

    /// Moving a stamp
    Dragging {
        stamp_id: StampId,
        /// Offset from the stamp's top-left corner to the pointer, so the
        /// stamp does not jump under the pointer
        drag_offset: Point,
    },

    /// Resizing a stamp from one corner
    Resizing {
        stamp_id: StampId,
        handle: ResizeHandle,
        /// Pointer position at gesture start (screen pixels)
        start_pos: Point,
        /// Geometry at gesture start
        start_geometry: StampGeometry,
    },

    /// Rotating a stamp about its centre
    Rotating {
        stamp_id: StampId,
        /// Rotation centre in screen pixels, fixed for the whole session
        center: Point,
        /// Bearing from centre to pointer at gesture start, in radians
        initial_angle: f32,
        /// Stored rotation at gesture start, in degrees
        initial_rotation: f32,
    },
}

impl InputState {
    /// Returns true if the state is Idle
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Returns true if any gesture is in progress
    pub fn is_active(&self) -> bool {
        !self.is_idle()
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }

    pub fn is_resizing(&self) -> bool {
        matches!(self, Self::Resizing { .. })
    }

    pub fn is_rotating(&self) -> bool {
        matches!(self, Self::Rotating { .. })
    }

    /// The stamp the active gesture targets, if any
    pub fn target(&self) -> Option<StampId> {
        match self {
            Self::Idle => None,
            Self::Dragging { stamp_id, .. }
            | Self::Resizing { stamp_id, .. }
            | Self::Rotating { stamp_id, .. } => Some(*stamp_id),
        }
    }

    pub fn kind(&self) -> Option<GestureKind> {
        match self {
            Self::Idle => None,
            Self::Dragging { .. } => Some(GestureKind::Drag),
            Self::Resizing { handle, .. } => Some(GestureKind::Resize(*handle)),
            Self::Rotating { .. } => Some(GestureKind::Rotate),
        }
    }

    /// Get the resize handle, if resizing
    pub fn resize_handle(&self) -> Option<ResizeHandle> {
        match self {
            Self::Resizing { handle, .. } => Some(*handle),
            _ => None,
        }
    }

    /// Get drag offset
    pub fn drag_offset(&self) -> Option<Point> {
        match self {
            Self::Dragging { drag_offset, .. } => Some(*drag_offset),
            _ => None,
        }
    }

    /// Get the fixed rotation centre, if rotating
    pub fn rotation_center(&self) -> Option<Point> {
        match self {
            Self::Rotating { center, .. } => Some(*center),
            _ => None,
        }
    }

    /// Reset to Idle state
    pub fn reset(&mut self) {
        *self = Self::Idle;
    }

    pub fn start_dragging(&mut self, stamp_id: StampId, drag_offset: Point) {
        *self = Self::Dragging {
            stamp_id,
            drag_offset,
        };
    }

    pub fn start_resizing(
        &mut self,
        stamp_id: StampId,
        handle: ResizeHandle,
        start_pos: Point,
        start_geometry: StampGeometry,
    ) {
        *self = Self::Resizing {
            stamp_id,
            handle,
            start_pos,
            start_geometry,
        };
    }

    pub fn start_rotating(
        &mut self,
        stamp_id: StampId,
        center: Point,
        initial_angle: f32,
        initial_rotation: f32,
    ) {
        *self = Self::Rotating {
            stamp_id,
            center,
            initial_angle,
            initial_rotation,
        };
    }
}
