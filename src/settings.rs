//! Editor settings, stored as JSON in the user's config directory.
//!
//! Every field has a default, so a partial or missing file still loads.

use crate::apply::ApplyMode;
use crate::constants::{
    DEFAULT_PAGE_HEIGHT, DEFAULT_PAGE_WIDTH, HANDLE_SIZE, MIN_STAMP_SIZE, PLACEHOLDER_ASSET_SIZE,
    ROTATE_HANDLE_OFFSET, ROTATE_HANDLE_RADIUS,
};
use crate::error::EditorResult;
use crate::input::handles::HandleMetrics;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorSettings {
    /// Floor for width and height during interactive resize
    pub min_stamp_size: f32,
    /// Side length of corner resize handles
    pub handle_size: f32,
    /// Distance of the rotate handle above the stamp
    pub rotate_handle_offset: f32,
    /// Hit radius of the rotate handle
    pub rotate_handle_radius: f32,
    /// Apply mode preselected in the apply form
    pub default_apply_mode: ApplyMode,
    /// Whether random variation is preselected in the apply form
    pub random_variation: bool,
    /// Page size assumed when page metadata is unavailable
    pub fallback_page_size: (f32, f32),
    /// Size of the placeholder asset used when the catalog is unavailable
    pub placeholder_asset_size: (f32, f32),
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            min_stamp_size: MIN_STAMP_SIZE,
            handle_size: HANDLE_SIZE,
            rotate_handle_offset: ROTATE_HANDLE_OFFSET,
            rotate_handle_radius: ROTATE_HANDLE_RADIUS,
            default_apply_mode: ApplyMode::default(),
            random_variation: false,
            fallback_page_size: (DEFAULT_PAGE_WIDTH, DEFAULT_PAGE_HEIGHT),
            placeholder_asset_size: PLACEHOLDER_ASSET_SIZE,
        }
    }
}

impl EditorSettings {
    /// Load from the default location, falling back to defaults when the
    /// file is missing or unreadable.
    pub fn load() -> Self {
        let Some(path) = default_settings_path() else {
            return Self::default();
        };
        if !path.exists() {
            return Self::default();
        }
        match Self::load_from(&path) {
            Ok(settings) => settings,
            Err(e) => {
                warn!("Failed to load settings from {:?}: {}", path, e);
                Self::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> EditorResult<Self> {
        let content = fs::read_to_string(path)?;
        let settings: Self = serde_json::from_str(&content)?;
        debug!("Loaded settings from {:?}", path);
        Ok(settings.sanitized())
    }

    pub fn save_to(&self, path: &Path) -> EditorResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    /// Replace nonsensical values with their defaults.
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        let positive = |v: f32| v.is_finite() && v > 0.0;
        if !positive(self.min_stamp_size) {
            self.min_stamp_size = defaults.min_stamp_size;
        }
        if !positive(self.handle_size) {
            self.handle_size = defaults.handle_size;
        }
        if !self.rotate_handle_offset.is_finite() || self.rotate_handle_offset < 0.0 {
            self.rotate_handle_offset = defaults.rotate_handle_offset;
        }
        if !positive(self.rotate_handle_radius) {
            self.rotate_handle_radius = defaults.rotate_handle_radius;
        }
        if !positive(self.fallback_page_size.0) || !positive(self.fallback_page_size.1) {
            self.fallback_page_size = defaults.fallback_page_size;
        }
        if !positive(self.placeholder_asset_size.0) || !positive(self.placeholder_asset_size.1) {
            self.placeholder_asset_size = defaults.placeholder_asset_size;
        }
        self
    }

    pub fn handle_metrics(&self) -> HandleMetrics {
        HandleMetrics {
            handle_size: self.handle_size,
            rotate_offset: self.rotate_handle_offset,
            rotate_radius: self.rotate_handle_radius,
        }
    }
}

/// `<config dir>/stampdesk/settings.json`, if the platform has a config dir.
pub fn default_settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("stampdesk").join("settings.json"))
}
