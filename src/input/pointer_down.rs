//! Pointer down handling - hit testing and gesture start.
//!
//! Hit testing goes through the R-tree first, so only stamps whose
//! (handle-inflated) bounds contain the pointer are resolved exactly.

use crate::editor::StampEditor;
use crate::error::{EditorError, EditorResult};
use crate::geometry::{Point, angle, point};
use crate::input::coords::CoordinateConverter;
use crate::input::handles::{HitTarget, body_contains, hit_test};
use crate::profile_scope;
use crate::types::StampId;
use tracing::{debug, trace};

impl StampEditor {
    /// Resolve a screen position to the topmost stamp on the current page
    /// and the part of it that was hit.
    pub fn hit_test(&self, screen_pos: Point) -> Option<(StampId, HitTarget)> {
        let pos = CoordinateConverter::screen_to_page(screen_pos, &self.viewport.container());
        let candidates = self.spatial.query_point(pos.x, pos.y);
        if candidates.is_empty() {
            return None;
        }

        let metrics = self.settings.handle_metrics();
        let selected = self.stamps.selected_id();

        // Handles only exist on the selected stamp
        if let Some(stamp) = selected
            .filter(|id| candidates.contains(id))
            .and_then(|id| self.stamps.get(id))
        {
            if let Some(target @ (HitTarget::Resize(_) | HitTarget::Rotate)) =
                hit_test(&stamp.rect(), stamp.rotation, pos, &metrics)
            {
                return Some((stamp.id, target));
            }
        }

        // Later stamps are drawn on top
        self.stamps
            .on_page(self.viewport.current_page())
            .rev()
            .filter(|s| candidates.contains(&s.id))
            .find(|s| body_contains(&s.rect(), s.rotation, pos))
            .map(|s| (s.id, HitTarget::Body))
    }

    /// Start whatever gesture the pointer landed on. Returns true when a
    /// gesture started.
    ///
    /// Pointer down on empty page area leaves the selection alone, and a
    /// pointer down while another gesture is active is ignored.
    pub fn handle_pointer_down(&mut self, screen_pos: Point) -> bool {
        profile_scope!("handle_pointer_down");

        let Some((id, target)) = self.hit_test(screen_pos) else {
            trace!(x = screen_pos.x, y = screen_pos.y, "Pointer down on empty area");
            return false;
        };
        self.begin_gesture(id, target, screen_pos)
    }

    /// Start a gesture on a known stamp and part, e.g. when the host does its
    /// own hit testing on the rendered elements. Invalid targets are ignored.
    pub fn begin_gesture(&mut self, id: StampId, target: HitTarget, screen_pos: Point) -> bool {
        match self.start_gesture(id, target, screen_pos) {
            Ok(()) => true,
            Err(e) => {
                trace!("Ignoring pointer down: {}", e);
                false
            }
        }
    }

    fn start_gesture(
        &mut self,
        id: StampId,
        target: HitTarget,
        screen_pos: Point,
    ) -> EditorResult<()> {
        // Gestures only start from Idle; the active one must end first
        if let Some(active) = self.input_state.target() {
            return Err(EditorError::InvalidGesture(format!(
                "gesture on stamp {active} still active"
            )));
        }
        let page = self.viewport.current_page();
        let stamp = self
            .stamps
            .get(id)
            .ok_or_else(|| EditorError::InvalidGesture(format!("no stamp {id}")))?;
        if stamp.page != page {
            return Err(EditorError::InvalidGesture(format!(
                "stamp {id} is on page {}, not {page}",
                stamp.page
            )));
        }

        let container = self.viewport.container();
        let geometry = stamp.geometry();
        let center = CoordinateConverter::page_to_screen(stamp.center(), &container);

        match target {
            HitTarget::Body => {
                let top_left =
                    CoordinateConverter::page_to_screen(point(geometry.x, geometry.y), &container);
                self.input_state.start_dragging(id, screen_pos - top_left);
            }
            HitTarget::Resize(handle) => {
                self.input_state.start_resizing(id, handle, screen_pos, geometry);
            }
            HitTarget::Rotate => {
                let initial_angle = angle(center, screen_pos);
                self.input_state
                    .start_rotating(id, center, initial_angle, geometry.rotation);
            }
        }

        self.select(id);
        self.dirty = true;
        debug!(stamp = %id, gesture = ?self.input_state.kind(), "Gesture started");
        Ok(())
    }
}
