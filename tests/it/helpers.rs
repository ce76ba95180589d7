//! Test helpers and builders for reducing boilerplate in tests.
//!
//! This module provides:
//! - `TestEditorBuilder` - Builder pattern for editors with placed stamps
//! - `RecordingBackend` - Apply backend that records requests
//! - Small assertion helpers

use stampdesk::apply::{ApplyBackend, ApplyReceipt, ApplyRequest};
use stampdesk::catalog::StampCatalog;
use stampdesk::geometry::point;
use stampdesk::input::coords::ContainerBounds;
use stampdesk::settings::EditorSettings;
use stampdesk::types::{DocumentInfo, PageInfo, PlacedStamp, StampAsset, StampId};
use stampdesk::{EditorError, EditorResult, StampEditor};
use std::cell::RefCell;

// ============================================================================
// TestEditorBuilder - Builder pattern for creating test editors
// ============================================================================

/// Builder for creating test editors with stamps and configuration.
///
/// # Example
/// ```ignore
/// let (editor, ids) = TestEditorBuilder::new()
///     .with_pages(2)
///     .with_stamp("square", 1, (50.0, 50.0))
///     .build();
/// ```
pub struct TestEditorBuilder {
    session_id: String,
    container: ContainerBounds,
    page_count: u32,
    assets: Vec<StampAsset>,
    stamps: Vec<(String, u32, (f32, f32), Option<(f32, f32)>)>,
    settings: EditorSettings,
}

impl Default for TestEditorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestEditorBuilder {
    /// 600x800 container at the screen origin, one page, two assets:
    /// `square` (100x100) and `wide` (200x100).
    pub fn new() -> Self {
        Self {
            session_id: "session".to_string(),
            container: ContainerBounds::sized(600.0, 800.0),
            page_count: 1,
            assets: vec![
                StampAsset::new("square", "square.png", "/stamps/square.png", 100.0, 100.0),
                StampAsset::new("wide", "wide.png", "/stamps/wide.png", 200.0, 100.0),
            ],
            stamps: Vec::new(),
            settings: EditorSettings::default(),
        }
    }

    pub fn with_session(mut self, session_id: impl Into<String>) -> Self {
        self.session_id = session_id.into();
        self
    }

    pub fn with_container(mut self, container: ContainerBounds) -> Self {
        self.container = container;
        self
    }

    pub fn with_pages(mut self, page_count: u32) -> Self {
        self.page_count = page_count;
        self
    }

    pub fn with_settings(mut self, settings: EditorSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Place `asset_id` on `page` with its top-left at `pos` (page-relative).
    pub fn with_stamp(mut self, asset_id: &str, page: u32, pos: (f32, f32)) -> Self {
        self.stamps.push((asset_id.to_string(), page, pos, None));
        self
    }

    /// Place a stamp with an explicit size.
    pub fn with_sized_stamp(
        mut self,
        asset_id: &str,
        page: u32,
        pos: (f32, f32),
        size: (f32, f32),
    ) -> Self {
        self.stamps.push((asset_id.to_string(), page, pos, Some(size)));
        self
    }

    /// Build the editor; returns the ids of the placed stamps in order.
    pub fn build(self) -> (StampEditor, Vec<StampId>) {
        let document = DocumentInfo {
            page_count: self.page_count,
            pages: (1..=self.page_count)
                .map(|page_num| PageInfo {
                    page_num,
                    width: self.container.width,
                    height: self.container.height,
                })
                .collect(),
        };
        let catalog = StampCatalog::new(self.assets.clone());
        let mut editor = StampEditor::new(
            self.session_id,
            document,
            catalog,
            self.container,
            self.settings,
        );

        let ids = self
            .stamps
            .iter()
            .map(|(asset_id, page, (x, y), size)| {
                let asset = editor.catalog().get(asset_id).expect("asset in test catalog").clone();
                let mut stamp = PlacedStamp::create(&asset, *page, *x, *y);
                if let Some((w, h)) = size {
                    stamp.width = *w;
                    stamp.height = *h;
                }
                editor.add_stamp(stamp)
            })
            .collect();
        (editor, ids)
    }
}

// ============================================================================
// RecordingBackend - Apply backend double
// ============================================================================

/// Apply backend that records every request and answers with a canned
/// result.
pub struct RecordingBackend {
    pub requests: RefCell<Vec<ApplyRequest>>,
    failure: Option<String>,
}

impl RecordingBackend {
    pub fn succeeding() -> Self {
        Self {
            requests: RefCell::new(Vec::new()),
            failure: None,
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            requests: RefCell::new(Vec::new()),
            failure: Some(message.to_string()),
        }
    }

    pub fn calls(&self) -> usize {
        self.requests.borrow().len()
    }
}

impl ApplyBackend for RecordingBackend {
    fn apply(&self, request: &ApplyRequest) -> EditorResult<ApplyReceipt> {
        self.requests.borrow_mut().push(request.clone());
        match &self.failure {
            Some(message) => Err(EditorError::ApplyFailure(message.clone())),
            None => Ok(ApplyReceipt {
                download_url: format!("/download/{}", request.session_id),
                signed_session_id: Some(format!("{}_signed", request.session_id)),
            }),
        }
    }
}

// ============================================================================
// Assertions
// ============================================================================

/// Assert two floats are equal within a small tolerance.
#[track_caller]
pub fn assert_close(actual: f32, expected: f32) {
    assert!(
        (actual - expected).abs() < 1e-3,
        "expected {expected}, got {actual}"
    );
}

/// Drive one complete gesture: down at `from`, move to each of `path`, up.
pub fn gesture(editor: &mut StampEditor, from: (f32, f32), path: &[(f32, f32)]) {
    assert!(
        editor.handle_pointer_down(point(from.0, from.1)),
        "pointer down at {from:?} hit nothing"
    );
    for (x, y) in path {
        editor.handle_pointer_move(point(*x, *y));
    }
    editor.handle_pointer_up();
}
