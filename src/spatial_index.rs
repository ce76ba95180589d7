//! Spatial Index Module
//!
//! R-tree over the stamps on the page being shown, used to narrow pointer
//! hit testing to the few stamps near the pointer. Entries cover each
//! stamp's rotated bounds grown by the handle reach, so a handle sticking
//! out of a stamp is still found.

use crate::geometry::Rect;
use crate::types::{PlacedStamp, StampId};
use rstar::{AABB, RTree, RTreeObject};
use std::collections::HashMap;

/// A spatial entry representing a stamp's hit area in page coordinates.
#[derive(Debug, Clone, Copy)]
pub struct SpatialEntry {
    pub stamp_id: StampId,
    pub min_x: f32,
    pub min_y: f32,
    pub max_x: f32,
    pub max_y: f32,
}

impl SpatialEntry {
    pub fn new(stamp: &PlacedStamp, margin: f32) -> Self {
        let bounds = stamp.rect().rotated_bounds(stamp.rotation).inflate(margin);
        Self::from_rect(stamp.id, &bounds)
    }

    fn from_rect(stamp_id: StampId, rect: &Rect) -> Self {
        Self {
            stamp_id,
            min_x: rect.origin.x,
            min_y: rect.origin.y,
            max_x: rect.origin.x + rect.width,
            max_y: rect.origin.y + rect.height,
        }
    }

    #[inline]
    pub fn contains_point(&self, x: f32, y: f32) -> bool {
        x >= self.min_x && x <= self.max_x && y >= self.min_y && y <= self.max_y
    }
}

impl RTreeObject for SpatialEntry {
    type Envelope = AABB<[f32; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners([self.min_x, self.min_y], [self.max_x, self.max_y])
    }
}

impl PartialEq for SpatialEntry {
    fn eq(&self, other: &Self) -> bool {
        self.stamp_id == other.stamp_id
    }
}

/// Spatial index for the stamps of one page.
pub struct SpatialIndex {
    tree: RTree<SpatialEntry>,
    entries: HashMap<StampId, SpatialEntry>,
    /// How far hit areas extend beyond a stamp's bounds
    margin: f32,
}

impl SpatialIndex {
    pub fn new(margin: f32) -> Self {
        Self {
            tree: RTree::new(),
            entries: HashMap::new(),
            margin,
        }
    }

    /// Build an index from the stamps of a page.
    pub fn from_stamps<'a, I>(stamps: I, margin: f32) -> Self
    where
        I: IntoIterator<Item = &'a PlacedStamp>,
    {
        let mut index = Self::new(margin);
        index.rebuild(stamps);
        index
    }

    /// Insert or refresh a stamp's entry.
    pub fn insert(&mut self, stamp: &PlacedStamp) {
        if let Some(old_entry) = self.entries.remove(&stamp.id) {
            self.tree.remove(&old_entry);
        }

        let entry = SpatialEntry::new(stamp, self.margin);
        self.tree.insert(entry);
        self.entries.insert(stamp.id, entry);
    }

    pub fn remove(&mut self, stamp_id: StampId) -> bool {
        if let Some(entry) = self.entries.remove(&stamp_id) {
            self.tree.remove(&entry);
            true
        } else {
            false
        }
    }

    /// Query all stamps whose hit area contains the point (page coordinates).
    pub fn query_point(&self, x: f32, y: f32) -> Vec<StampId> {
        let point_envelope = AABB::from_point([x, y]);

        self.tree
            .locate_in_envelope_intersecting(&point_envelope)
            .filter(|entry| entry.contains_point(x, y))
            .map(|entry| entry.stamp_id)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn margin(&self) -> f32 {
        self.margin
    }

    /// Change the hit margin and re-index the given stamps with it.
    pub fn set_margin<'a, I>(&mut self, margin: f32, stamps: I)
    where
        I: IntoIterator<Item = &'a PlacedStamp>,
    {
        self.margin = margin;
        self.rebuild(stamps);
    }

    pub fn rebuild<'a, I>(&mut self, stamps: I)
    where
        I: IntoIterator<Item = &'a PlacedStamp>,
    {
        let entries: Vec<SpatialEntry> = stamps
            .into_iter()
            .map(|stamp| SpatialEntry::new(stamp, self.margin))
            .collect();

        self.entries = entries.iter().map(|e| (e.stamp_id, *e)).collect();
        self.tree = RTree::bulk_load(entries);
    }

    pub fn clear(&mut self) {
        self.tree = RTree::new();
        self.entries.clear();
    }
}

impl Default for SpatialIndex {
    fn default() -> Self {
        Self::new(0.0)
    }
}
