//! Core types for the stamp placement engine.
//!
//! This module defines the data carried between the catalog, the placed
//! stamp collection and the interaction state machine. Field names on the
//! wire follow what the document backend sends and expects.

use crate::constants::{
    DEFAULT_PAGE_COUNT, DEFAULT_PAGE_HEIGHT, DEFAULT_PAGE_WIDTH, DEFAULT_ROTATION,
};
use crate::geometry::{Point, Rect, point};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

// ============================================================================
// Identifiers
// ============================================================================

/// Unique id of a placed stamp, generated at placement time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StampId(Uuid);

impl StampId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for StampId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for StampId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Stamp Assets
// ============================================================================

/// A stamp image available for placement.
///
/// Deserializes directly from a catalog entry
/// (`{id, filename, url, width, height}`).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StampAsset {
    pub id: String,
    #[serde(rename = "filename")]
    pub name: String,
    #[serde(rename = "url")]
    pub reference: String,
    /// Intrinsic width in pixels
    pub width: f32,
    /// Intrinsic height in pixels
    pub height: f32,
}

impl StampAsset {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        reference: impl Into<String>,
        width: f32,
        height: f32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            reference: reference.into(),
            width,
            height,
        }
    }
}

// ============================================================================
// Placed Stamps
// ============================================================================

fn default_maintain_aspect_ratio() -> bool {
    true
}

/// One stamp asset positioned on a document page.
///
/// `x`/`y` are the top-left corner in viewport pixels relative to the page
/// render area. `rotation` is stored as entered, in degrees, and is only
/// normalized when rendered.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlacedStamp {
    pub id: StampId,
    pub asset_id: String,
    /// 1-indexed page number
    pub page: u32,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub rotation: f32,
    #[serde(default = "default_maintain_aspect_ratio")]
    pub maintain_aspect_ratio: bool,
}

impl PlacedStamp {
    /// Place `asset` on `page` with its top-left at `(x, y)`, keeping the
    /// asset's intrinsic size.
    pub fn create(asset: &StampAsset, page: u32, x: f32, y: f32) -> Self {
        Self {
            id: StampId::new(),
            asset_id: asset.id.clone(),
            page,
            x,
            y,
            width: asset.width,
            height: asset.height,
            rotation: DEFAULT_ROTATION,
            maintain_aspect_ratio: default_maintain_aspect_ratio(),
        }
    }

    pub fn geometry(&self) -> StampGeometry {
        StampGeometry {
            x: self.x,
            y: self.y,
            width: self.width,
            height: self.height,
            rotation: self.rotation,
        }
    }

    /// Write back a geometry computed by the interaction state machine.
    pub fn set_geometry(&mut self, geometry: StampGeometry) {
        self.x = geometry.x;
        self.y = geometry.y;
        self.width = geometry.width;
        self.height = geometry.height;
        self.rotation = geometry.rotation;
    }

    /// Overwrite every editable field from the precise settings form.
    ///
    /// No clamping and no minimum size are applied here, unlike interactive
    /// resizing. The editing surface is expected to bound its inputs.
    pub fn apply_precise_edit(&mut self, edit: &PreciseEdit) {
        self.x = edit.x;
        self.y = edit.y;
        self.width = edit.width;
        self.height = edit.height;
        self.rotation = edit.rotation;
        self.maintain_aspect_ratio = edit.maintain_aspect_ratio;
    }

    /// Unrotated bounding box in page-relative pixels.
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    pub fn center(&self) -> Point {
        point(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

/// Position, size and rotation of a stamp, detached from its identity.
///
/// The interaction state machine produces these; the editor writes them
/// back into the collection.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct StampGeometry {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub rotation: f32,
}

/// Values entered in the precise settings form.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PreciseEdit {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub rotation: f32,
    #[serde(default = "default_maintain_aspect_ratio")]
    pub maintain_aspect_ratio: bool,
}

impl PreciseEdit {
    /// Pre-fill the form from a stamp. Position and size are shown with one
    /// decimal place; rotation is shown as stored.
    pub fn from_stamp(stamp: &PlacedStamp) -> Self {
        fn one_decimal(v: f32) -> f32 {
            (v * 10.0).round() / 10.0
        }
        Self {
            x: one_decimal(stamp.x),
            y: one_decimal(stamp.y),
            width: one_decimal(stamp.width),
            height: one_decimal(stamp.height),
            rotation: stamp.rotation,
            maintain_aspect_ratio: stamp.maintain_aspect_ratio,
        }
    }
}

// ============================================================================
// Document Metadata
// ============================================================================

/// Size of one rendered page, as reported by the page endpoint.
///
/// `page_*` is the document's own size; `display_*` is the size of the
/// rendered raster.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PageMetrics {
    pub page_width: f32,
    pub page_height: f32,
    #[serde(alias = "width")]
    pub display_width: f32,
    #[serde(alias = "height")]
    pub display_height: f32,
}

impl Default for PageMetrics {
    fn default() -> Self {
        Self {
            page_width: DEFAULT_PAGE_WIDTH,
            page_height: DEFAULT_PAGE_HEIGHT,
            display_width: DEFAULT_PAGE_WIDTH,
            display_height: DEFAULT_PAGE_HEIGHT,
        }
    }
}

/// Per-page entry of [`DocumentInfo`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PageInfo {
    pub page_num: u32,
    pub width: f32,
    pub height: f32,
}

/// Page count and page sizes of the document being stamped.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DocumentInfo {
    pub page_count: u32,
    #[serde(default)]
    pub pages: Vec<PageInfo>,
}

impl Default for DocumentInfo {
    fn default() -> Self {
        Self {
            page_count: DEFAULT_PAGE_COUNT,
            pages: vec![PageInfo {
                page_num: 1,
                width: DEFAULT_PAGE_WIDTH,
                height: DEFAULT_PAGE_HEIGHT,
            }],
        }
    }
}

impl DocumentInfo {
    pub fn page(&self, page_num: u32) -> Option<&PageInfo> {
        self.pages.iter().find(|p| p.page_num == page_num)
    }
}
