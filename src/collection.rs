//! Placed stamp collection and selection.
//!
//! Stamps are kept in creation order across every page. The order has no
//! meaning beyond z-order for hit testing (later stamps sit on top).

use crate::apply::{ApplyMode, ApplyRequest, ApplyStampEntry};
use crate::types::{PlacedStamp, StampId};

#[derive(Debug, Clone, Default)]
pub struct StampCollection {
    stamps: Vec<PlacedStamp>,
    selected: Option<StampId>,
}

impl StampCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a stamp. It becomes visible immediately if it is on the page
    /// being shown.
    pub fn add(&mut self, stamp: PlacedStamp) -> StampId {
        let id = stamp.id;
        self.stamps.push(stamp);
        id
    }

    /// Remove a stamp by id, clearing the selection if it pointed at it.
    ///
    /// Returns the removed stamp; removing an unknown id is a no-op.
    pub fn remove(&mut self, id: StampId) -> Option<PlacedStamp> {
        let index = self.stamps.iter().position(|s| s.id == id)?;
        if self.selected == Some(id) {
            self.selected = None;
        }
        Some(self.stamps.remove(index))
    }

    /// Remove every stamp on every page and drop the selection.
    pub fn clear(&mut self) {
        self.stamps.clear();
        self.selected = None;
    }

    pub fn get(&self, id: StampId) -> Option<&PlacedStamp> {
        self.stamps.iter().find(|s| s.id == id)
    }

    pub fn get_mut(&mut self, id: StampId) -> Option<&mut PlacedStamp> {
        self.stamps.iter_mut().find(|s| s.id == id)
    }

    pub fn contains(&self, id: StampId) -> bool {
        self.get(id).is_some()
    }

    /// Select a stamp. Unknown ids leave the selection unchanged.
    pub fn select(&mut self, id: StampId) -> bool {
        if self.contains(id) {
            self.selected = Some(id);
            true
        } else {
            false
        }
    }

    pub fn deselect(&mut self) {
        self.selected = None;
    }

    pub fn selected_id(&self) -> Option<StampId> {
        self.selected
    }

    pub fn selected(&self) -> Option<&PlacedStamp> {
        self.selected.and_then(|id| self.get(id))
    }

    pub fn selected_mut(&mut self) -> Option<&mut PlacedStamp> {
        let id = self.selected?;
        self.get_mut(id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PlacedStamp> {
        self.stamps.iter()
    }

    /// Stamps placed on `page`, in creation order.
    pub fn on_page(&self, page: u32) -> impl DoubleEndedIterator<Item = &PlacedStamp> {
        self.stamps.iter().filter(move |s| s.page == page)
    }

    pub fn len(&self) -> usize {
        self.stamps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stamps.is_empty()
    }

    /// Build the request handed to the apply backend.
    ///
    /// Every stamp on every page is included; each entry carries its own
    /// page so the backend can put it back where it was placed.
    pub fn build_apply_payload(
        &self,
        session_id: &str,
        mode: ApplyMode,
        random_variation: bool,
        current_page: u32,
    ) -> ApplyRequest {
        ApplyRequest {
            session_id: session_id.to_string(),
            stamps: self.stamps.iter().map(ApplyStampEntry::from).collect(),
            apply_mode: mode,
            current_page,
            random_variation,
        }
    }
}
