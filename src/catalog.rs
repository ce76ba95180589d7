//! Stamp catalog and document input.
//!
//! The catalog and the page metadata come from an external source. When
//! either cannot be fetched the editor carries on with documented defaults
//! instead of failing.

use crate::constants::{PLACEHOLDER_ASSET_ID, PLACEHOLDER_ASSET_NAME};
use crate::error::{EditorError, EditorResult};
use crate::settings::EditorSettings;
use crate::types::{DocumentInfo, PageInfo, PageMetrics, StampAsset};
use tracing::warn;

/// Supplier of the document and stamp assets for a session.
pub trait DocumentSource {
    fn document_info(&self, session_id: &str) -> EditorResult<DocumentInfo>;

    fn page_metrics(&self, session_id: &str, page: u32) -> EditorResult<PageMetrics>;

    fn stamp_catalog(&self, session_id: &str) -> EditorResult<Vec<StampAsset>>;
}

/// Document info from `source`, or a single default page if unavailable.
pub fn load_document_info(
    source: &dyn DocumentSource,
    session_id: &str,
    settings: &EditorSettings,
) -> DocumentInfo {
    match source.document_info(session_id) {
        Ok(info) if info.page_count > 0 => info,
        Ok(_) => {
            warn!("Document info reports no pages, using default");
            fallback_document(settings)
        }
        Err(e) => {
            warn!("Could not load document info, using default: {}", e);
            fallback_document(settings)
        }
    }
}

pub fn fallback_document(settings: &EditorSettings) -> DocumentInfo {
    let (width, height) = settings.fallback_page_size;
    DocumentInfo {
        page_count: 1,
        pages: vec![PageInfo {
            page_num: 1,
            width,
            height,
        }],
    }
}

/// The stamp images available for placement in one session.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StampCatalog {
    assets: Vec<StampAsset>,
}

impl StampCatalog {
    pub fn new(assets: Vec<StampAsset>) -> Self {
        Self { assets }
    }

    /// Fetch the catalog, substituting the placeholder asset on failure.
    pub fn load(source: &dyn DocumentSource, session_id: &str, settings: &EditorSettings) -> Self {
        match source.stamp_catalog(session_id) {
            Ok(assets) => Self::new(assets),
            Err(e) => {
                warn!("Could not load stamp catalog, using placeholder: {}", e);
                Self::fallback(session_id, settings)
            }
        }
    }

    /// Parse a catalog response body (`{"stamps": [...]}`).
    pub fn from_json(json: &str) -> EditorResult<Self> {
        #[derive(serde::Deserialize)]
        struct CatalogBody {
            #[serde(default)]
            stamps: Vec<StampAsset>,
        }

        let body: CatalogBody = serde_json::from_str(json)
            .map_err(|e| EditorError::InputUnavailable(format!("catalog: {e}")))?;
        Ok(Self::new(body.stamps))
    }

    /// Single placeholder asset served by the session's stamp endpoint.
    pub fn fallback(session_id: &str, settings: &EditorSettings) -> Self {
        let (width, height) = settings.placeholder_asset_size;
        Self::new(vec![StampAsset::new(
            PLACEHOLDER_ASSET_ID,
            PLACEHOLDER_ASSET_NAME,
            format!("/api/stamp/{session_id}/0"),
            width,
            height,
        )])
    }

    pub fn get(&self, id: &str) -> Option<&StampAsset> {
        self.assets.iter().find(|a| a.id == id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, StampAsset> {
        self.assets.iter()
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }
}
