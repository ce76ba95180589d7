//! Pointer up handling - ending and cancelling gestures.

use crate::editor::StampEditor;
use crate::types::StampId;
use tracing::debug;

impl StampEditor {
    /// End the active gesture. Always returns the machine to Idle; returns
    /// the stamp the gesture was acting on, if any.
    pub fn handle_pointer_up(&mut self) -> Option<StampId> {
        self.finish_gesture("Gesture ended")
    }

    /// Abandon the active gesture, e.g. when the host window loses focus.
    /// Geometry reached so far is kept.
    pub fn cancel_gesture(&mut self) -> Option<StampId> {
        self.finish_gesture("Gesture cancelled")
    }

    fn finish_gesture(&mut self, message: &'static str) -> Option<StampId> {
        let id = self.input_state.target()?;
        let kind = self.input_state.kind();
        self.input_state.reset();

        // Hit areas follow the final geometry
        if let Some(stamp) = self.stamps.get(id) {
            if self.viewport.is_visible(stamp) {
                self.spatial.insert(stamp);
            }
        }
        self.dirty = true;
        debug!(stamp = %id, gesture = ?kind, "{}", message);
        Some(id)
    }
}
