//! Boundary to the external apply operation.
//!
//! The backend burns the placed stamps into the document and answers with a
//! download reference. This module holds the wire types and the
//! [`ApplyBackend`] seam; transport is up to the implementor.

use crate::error::{EditorError, EditorResult};
use crate::types::PlacedStamp;
use serde::{Deserialize, Serialize};

/// Where the backend should apply the stamps.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplyMode {
    #[default]
    CurrentPage,
    AllPages,
}

/// One placed stamp as sent to the backend.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApplyStampEntry {
    /// Asset id of the stamp image (not the placement id)
    #[serde(rename = "stamp_id")]
    pub asset_id: String,
    pub page: u32,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub rotation: f32,
}

impl From<&PlacedStamp> for ApplyStampEntry {
    fn from(stamp: &PlacedStamp) -> Self {
        Self {
            asset_id: stamp.asset_id.clone(),
            page: stamp.page,
            x: stamp.x,
            y: stamp.y,
            width: stamp.width,
            height: stamp.height,
            rotation: stamp.rotation,
        }
    }
}

/// Body of an apply request.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApplyRequest {
    pub session_id: String,
    pub stamps: Vec<ApplyStampEntry>,
    pub apply_mode: ApplyMode,
    pub current_page: u32,
    pub random_variation: bool,
}

/// Successful apply result.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApplyReceipt {
    pub download_url: String,
    #[serde(default)]
    pub signed_session_id: Option<String>,
}

/// Raw backend answer: `{success, download_url, ...}` or `{error}`.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ApplyResponse {
    #[serde(default)]
    pub success: bool,
    pub download_url: Option<String>,
    pub signed_session_id: Option<String>,
    pub error: Option<String>,
}

impl ApplyResponse {
    /// Turn the wire answer into a receipt, keeping the backend's error
    /// message verbatim.
    pub fn into_result(self) -> EditorResult<ApplyReceipt> {
        match (self.success, self.download_url) {
            (true, Some(download_url)) => Ok(ApplyReceipt {
                download_url,
                signed_session_id: self.signed_session_id,
            }),
            (true, None) => Err(EditorError::ApplyFailure(
                "Apply succeeded without a download reference".to_string(),
            )),
            (false, _) => Err(EditorError::ApplyFailure(
                self.error.unwrap_or_else(|| "Failed to apply stamps".to_string()),
            )),
        }
    }
}

/// The external operation that permanently composites stamps.
pub trait ApplyBackend {
    fn apply(&self, request: &ApplyRequest) -> EditorResult<ApplyReceipt>;
}

impl<F> ApplyBackend for F
where
    F: Fn(&ApplyRequest) -> EditorResult<ApplyReceipt>,
{
    fn apply(&self, request: &ApplyRequest) -> EditorResult<ApplyReceipt> {
        self(request)
    }
}
