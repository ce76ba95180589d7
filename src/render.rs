//! View models for the rendering step.
//!
//! Model updates never touch the display. After each handled event the host
//! asks for a snapshot of what the current page should show and syncs its
//! own elements from it.

use crate::catalog::StampCatalog;
use crate::collection::StampCollection;
use crate::geometry::normalize_degrees;
use crate::types::{PlacedStamp, StampId};
use crate::viewport::Viewport;

/// Everything needed to draw one stamp on the current page.
#[derive(Clone, Debug, PartialEq)]
pub struct StampView {
    pub id: StampId,
    pub asset_id: String,
    /// Image reference from the catalog, if the asset is known
    pub reference: Option<String>,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Rotation in `[0, 360)`
    pub rotation: f32,
    pub selected: bool,
}

impl StampView {
    pub fn new(stamp: &PlacedStamp, reference: Option<String>, selected: bool) -> Self {
        Self {
            id: stamp.id,
            asset_id: stamp.asset_id.clone(),
            reference,
            x: stamp.x,
            y: stamp.y,
            width: stamp.width,
            height: stamp.height,
            rotation: normalize_degrees(stamp.rotation),
            selected,
        }
    }

    /// CSS-style transform for the stamp element.
    pub fn transform(&self) -> String {
        format!("rotate({}deg)", self.rotation)
    }
}

/// Snapshot of the page being shown.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PageView {
    pub page: u32,
    pub page_count: u32,
    pub stamps: Vec<StampView>,
    pub has_prev: bool,
    pub has_next: bool,
}

/// Snapshot the stamps visible on the viewport's current page, in drawing
/// order.
pub fn snapshot(stamps: &StampCollection, catalog: &StampCatalog, viewport: &Viewport) -> PageView {
    let page = viewport.current_page();
    let selected = stamps.selected_id();
    PageView {
        page,
        page_count: viewport.page_count(),
        stamps: stamps
            .on_page(page)
            .map(|stamp| {
                let reference = catalog.get(&stamp.asset_id).map(|a| a.reference.clone());
                StampView::new(stamp, reference, selected == Some(stamp.id))
            })
            .collect(),
        has_prev: viewport.has_prev_page(),
        has_next: viewport.has_next_page(),
    }
}
