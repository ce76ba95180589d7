//! Viewport and page binding.
//!
//! Tracks which page is shown, the on-screen container that page is rendered
//! into, and the size metadata needed to map view pixels back to document
//! units. Switching pages only changes what is visible; stamps placed on
//! other pages are kept.

use crate::error::{EditorError, EditorResult};
use crate::geometry::{Point, point};
use crate::input::coords::ContainerBounds;
use crate::types::{DocumentInfo, PageMetrics, PlacedStamp};
use tracing::{debug, warn};

#[derive(Debug, Clone)]
pub struct Viewport {
    document: DocumentInfo,
    current_page: u32,
    metrics: PageMetrics,
    container: ContainerBounds,
}

impl Viewport {
    /// Start on page 1 of `document`, rendered into `container`.
    pub fn new(document: DocumentInfo, container: ContainerBounds) -> Self {
        let document = if document.page_count == 0 {
            warn!("Document reports no pages, using default page");
            DocumentInfo::default()
        } else {
            document
        };
        let metrics = Self::metrics_from_document(&document, 1);
        Self {
            document,
            current_page: 1,
            metrics,
            container,
        }
    }

    fn metrics_from_document(document: &DocumentInfo, page: u32) -> PageMetrics {
        document
            .page(page)
            .map(|info| PageMetrics {
                page_width: info.width,
                page_height: info.height,
                display_width: info.width,
                display_height: info.height,
            })
            .unwrap_or_default()
    }

    pub fn document(&self) -> &DocumentInfo {
        &self.document
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn page_count(&self) -> u32 {
        self.document.page_count
    }

    pub fn has_next_page(&self) -> bool {
        self.current_page < self.page_count()
    }

    pub fn has_prev_page(&self) -> bool {
        self.current_page > 1
    }

    /// Share of the document already paged through, in percent.
    pub fn progress_percent(&self) -> f32 {
        self.current_page as f32 / self.page_count().max(1) as f32 * 100.0
    }

    /// Switch to `page`.
    ///
    /// Returns `Ok(false)` when `page` is already shown and an error when it
    /// lies outside the document; the current page is kept in both cases.
    pub fn go_to_page(&mut self, page: u32) -> EditorResult<bool> {
        if page == 0 || page > self.page_count() {
            return Err(EditorError::PageOutOfRange {
                page,
                page_count: self.page_count(),
            });
        }
        if page == self.current_page {
            return Ok(false);
        }
        debug!(from = self.current_page, to = page, "Switching page");
        self.current_page = page;
        self.metrics = Self::metrics_from_document(&self.document, page);
        Ok(true)
    }

    pub fn next_page(&mut self) -> bool {
        self.has_next_page() && self.go_to_page(self.current_page + 1).unwrap_or(false)
    }

    pub fn prev_page(&mut self) -> bool {
        self.has_prev_page() && self.go_to_page(self.current_page - 1).unwrap_or(false)
    }

    pub fn metrics(&self) -> PageMetrics {
        self.metrics
    }

    /// Record metadata reported for the page being shown.
    ///
    /// Metrics with a zero or non-finite size are replaced by the defaults.
    pub fn set_metrics(&mut self, metrics: PageMetrics) {
        let valid = [
            metrics.page_width,
            metrics.page_height,
            metrics.display_width,
            metrics.display_height,
        ]
        .iter()
        .all(|v| v.is_finite() && *v > 0.0);

        self.metrics = if valid {
            metrics
        } else {
            warn!(?metrics, "Invalid page metrics, using defaults");
            PageMetrics::default()
        };
    }

    pub fn container(&self) -> ContainerBounds {
        self.container
    }

    /// The container moved or was resized (scroll, zoom, window resize).
    pub fn set_container(&mut self, container: ContainerBounds) {
        self.container = container;
    }

    /// Width and height a dragged stamp must stay inside.
    pub fn clamp_bounds(&self) -> (f32, f32) {
        (self.container.width, self.container.height)
    }

    /// Container size if it is usable for containment checks.
    pub fn containment(&self) -> Option<(f32, f32)> {
        self.container
            .is_valid()
            .then(|| self.clamp_bounds())
    }

    pub fn is_visible(&self, stamp: &PlacedStamp) -> bool {
        stamp.page == self.current_page
    }

    /// Document units per view pixel along x and y.
    pub fn document_scale(&self) -> (f32, f32) {
        if !self.container.is_valid() {
            return (1.0, 1.0);
        }
        (
            self.metrics.page_width / self.container.width,
            self.metrics.page_height / self.container.height,
        )
    }

    /// Map a page-relative view position into document units.
    pub fn view_to_document(&self, p: Point) -> Point {
        let (sx, sy) = self.document_scale();
        point(p.x * sx, p.y * sy)
    }

    /// Map a document position into page-relative view pixels.
    pub fn document_to_view(&self, p: Point) -> Point {
        let (sx, sy) = self.document_scale();
        point(p.x / sx, p.y / sy)
    }
}
