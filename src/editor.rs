//! The editor controller - single owner of all editing state.
//!
//! Every pointer, keyboard and page event goes through a [`StampEditor`].
//! It owns the placed stamps, the active interaction session, the catalog
//! and the viewport, and hands pure geometry updates back to the host for
//! rendering.
//!
//! Pointer handlers live in `crate::input` as further `impl StampEditor`
//! blocks.

use crate::apply::{ApplyBackend, ApplyMode, ApplyReceipt, ApplyRequest};
use crate::catalog::{DocumentSource, StampCatalog, load_document_info};
use crate::collection::StampCollection;
use crate::constants::SIGNED_PREVIEW_SUFFIX;
use crate::error::{EditorError, EditorResult};
use crate::geometry::Point;
use crate::input::InputState;
use crate::input::coords::{ContainerBounds, CoordinateConverter};
use crate::render::{self, PageView};
use crate::settings::EditorSettings;
use crate::settings_watcher::{SettingsEvent, SettingsWatcher, default_settings_path};
use crate::spatial_index::SpatialIndex;
use crate::types::{DocumentInfo, PlacedStamp, PreciseEdit, StampId};
use crate::viewport::Viewport;
use std::path::PathBuf;
use tracing::{debug, error, info, warn};

pub struct StampEditor {
    pub(crate) session_id: String,
    pub(crate) catalog: StampCatalog,
    pub(crate) stamps: StampCollection,
    pub(crate) viewport: Viewport,
    /// Input state machine
    pub(crate) input_state: InputState,
    /// Hit-test index over the stamps of the current page
    pub(crate) spatial: SpatialIndex,
    pub(crate) settings: EditorSettings,
    settings_watcher: Option<SettingsWatcher>,
    apply_in_flight: bool,
    download_url: Option<String>,
    /// Set whenever something visible changed since the last `take_dirty`
    pub(crate) dirty: bool,
}

impl StampEditor {
    pub fn new(
        session_id: impl Into<String>,
        document: DocumentInfo,
        catalog: StampCatalog,
        container: ContainerBounds,
        settings: EditorSettings,
    ) -> Self {
        let settings = settings.sanitized();
        let margin = settings.handle_metrics().reach();
        Self {
            session_id: session_id.into(),
            catalog,
            stamps: StampCollection::new(),
            viewport: Viewport::new(document, container),
            input_state: InputState::default(),
            spatial: SpatialIndex::new(margin),
            settings,
            settings_watcher: None,
            apply_in_flight: false,
            download_url: None,
            dirty: true,
        }
    }

    /// Build an editor from an external source, substituting defaults for
    /// anything the source cannot provide. The settings file at the default
    /// location is watched for changes.
    pub fn load(
        session_id: impl Into<String>,
        source: &dyn DocumentSource,
        container: ContainerBounds,
        settings: EditorSettings,
    ) -> Self {
        let session_id = session_id.into();
        let document = load_document_info(source, &session_id, &settings);
        let catalog = StampCatalog::load(source, &session_id, &settings);
        let mut editor = Self::new(session_id, document, catalog, container, settings);
        if let Err(e) = editor.load_page(source) {
            warn!("Initial page load failed: {}", e);
        }
        editor.settings_watcher =
            default_settings_path().and_then(|path| SettingsWatcher::new(path).ok());
        editor
    }

    // ==================== Accessors ====================

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    pub fn catalog(&self) -> &StampCatalog {
        &self.catalog
    }

    pub fn stamps(&self) -> &StampCollection {
        &self.stamps
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn input_state(&self) -> &InputState {
        &self.input_state
    }

    pub fn settings(&self) -> &EditorSettings {
        &self.settings
    }

    pub fn current_page(&self) -> u32 {
        self.viewport.current_page()
    }

    pub fn selected_id(&self) -> Option<StampId> {
        self.stamps.selected_id()
    }

    pub fn download_url(&self) -> Option<&str> {
        self.download_url.as_deref()
    }

    pub fn is_apply_in_flight(&self) -> bool {
        self.apply_in_flight
    }

    /// Returns whether anything changed since the last call, and resets it.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    // ==================== Settings ====================

    /// Swap in reloaded settings. Hit areas are re-indexed with the new
    /// handle sizes.
    pub fn apply_settings(&mut self, settings: EditorSettings) {
        self.settings = settings.sanitized();
        let page = self.viewport.current_page();
        let margin = self.settings.handle_metrics().reach();
        self.spatial.set_margin(margin, self.stamps.on_page(page));
        self.dirty = true;
    }

    /// Watch the settings file at `path`, replacing any earlier watch.
    pub fn watch_settings(&mut self, path: PathBuf) -> EditorResult<()> {
        self.settings_watcher = Some(SettingsWatcher::new(path)?);
        Ok(())
    }

    /// Check for settings file changes and reload if needed. Returns true
    /// when new settings were applied.
    pub fn check_settings_reload(&mut self) -> bool {
        let Some(event) = self.settings_watcher.as_mut().and_then(|w| w.poll()) else {
            return false;
        };
        self.handle_settings_event(event)
    }

    /// React to one change of the settings file. A file that fails to load
    /// leaves the current settings in place.
    pub fn handle_settings_event(&mut self, event: SettingsEvent) -> bool {
        match event {
            SettingsEvent::Modified | SettingsEvent::Created => {
                info!("Settings file changed, reloading...");
                let loaded = match &self.settings_watcher {
                    Some(watcher) => EditorSettings::load_from(watcher.path()),
                    None => Ok(EditorSettings::load()),
                };
                match loaded {
                    Ok(settings) => {
                        self.apply_settings(settings);
                        true
                    }
                    Err(e) => {
                        warn!("Keeping current settings: {}", e);
                        false
                    }
                }
            }
            SettingsEvent::Deleted => {
                warn!("Settings file deleted");
                false
            }
            SettingsEvent::Error(e) => {
                error!("Settings watch error: {}", e);
                false
            }
        }
    }

    // ==================== Placement ====================

    /// Drop a catalog asset onto the page being shown; `screen_pos` becomes
    /// the stamp's top-left corner.
    pub fn drop_asset(&mut self, asset_id: &str, screen_pos: Point) -> EditorResult<StampId> {
        let asset = self
            .catalog
            .get(asset_id)
            .ok_or_else(|| EditorError::UnknownAsset(asset_id.to_string()))?;
        let pos = CoordinateConverter::screen_to_page(screen_pos, &self.viewport.container());
        let stamp = PlacedStamp::create(asset, self.viewport.current_page(), pos.x, pos.y);
        Ok(self.add_stamp(stamp))
    }

    /// Add an already built stamp, e.g. restored from elsewhere.
    pub fn add_stamp(&mut self, stamp: PlacedStamp) -> StampId {
        if self.viewport.is_visible(&stamp) {
            self.spatial.insert(&stamp);
        }
        debug!(stamp = %stamp.id, asset = %stamp.asset_id, page = stamp.page, "Stamp placed");
        self.dirty = true;
        self.stamps.add(stamp)
    }

    pub fn select(&mut self, id: StampId) -> bool {
        if self.stamps.selected_id() == Some(id) {
            return true;
        }
        let selected = self.stamps.select(id);
        self.dirty |= selected;
        selected
    }

    pub fn deselect(&mut self) {
        if self.stamps.selected_id().is_some() {
            self.stamps.deselect();
            self.dirty = true;
        }
    }

    /// Remove a stamp. Unknown ids are ignored.
    pub fn remove(&mut self, id: StampId) -> bool {
        if self.input_state.target() == Some(id) {
            self.input_state.reset();
        }
        let removed = self.stamps.remove(id).is_some();
        if removed {
            self.spatial.remove(id);
            self.dirty = true;
            debug!(stamp = %id, "Stamp removed");
        }
        removed
    }

    /// Delete-key handling: remove the selected stamp, if any.
    pub fn remove_selected(&mut self) -> bool {
        match self.stamps.selected_id() {
            Some(id) => self.remove(id),
            None => false,
        }
    }

    /// Remove every stamp on every page. The host confirms with the user
    /// first.
    pub fn clear_all(&mut self) {
        if self.stamps.is_empty() {
            return;
        }
        self.input_state.reset();
        self.stamps.clear();
        self.spatial.clear();
        self.dirty = true;
        debug!("All stamps cleared");
    }

    // ==================== Precise settings ====================

    /// Values to pre-fill the precise settings form for the selected stamp.
    pub fn precise_edit_form(&self) -> Option<PreciseEdit> {
        self.stamps.selected().map(PreciseEdit::from_stamp)
    }

    /// Overwrite the selected stamp's geometry from the precise settings
    /// form. No minimum size or containment is enforced on this path.
    pub fn apply_precise_edit(&mut self, edit: &PreciseEdit) -> bool {
        let Some(stamp) = self.stamps.selected_mut() else {
            return false;
        };
        stamp.apply_precise_edit(edit);
        if stamp.page == self.viewport.current_page() {
            self.spatial.insert(stamp);
        }
        self.dirty = true;
        true
    }

    // ==================== Pages ====================

    pub fn go_to_page(&mut self, page: u32) -> EditorResult<bool> {
        let changed = self.viewport.go_to_page(page)?;
        if changed {
            self.on_page_changed();
        }
        Ok(changed)
    }

    pub fn next_page(&mut self) -> bool {
        let changed = self.viewport.next_page();
        if changed {
            self.on_page_changed();
        }
        changed
    }

    pub fn prev_page(&mut self) -> bool {
        let changed = self.viewport.prev_page();
        if changed {
            self.on_page_changed();
        }
        changed
    }

    fn on_page_changed(&mut self) {
        // A gesture cannot outlive the page it started on
        self.input_state.reset();
        let page = self.viewport.current_page();
        self.spatial.rebuild(self.stamps.on_page(page));
        self.dirty = true;
    }

    /// Fetch metadata for the page being shown. On failure the previous
    /// metadata is kept and the error returned for reporting.
    pub fn load_page(&mut self, source: &dyn DocumentSource) -> EditorResult<()> {
        let page = self.viewport.current_page();
        let metrics = source.page_metrics(&self.session_id, page)?;
        self.viewport.set_metrics(metrics);
        self.dirty = true;
        Ok(())
    }

    /// The page container moved or changed size.
    pub fn set_container(&mut self, container: ContainerBounds) {
        self.viewport.set_container(container);
        self.dirty = true;
    }

    // ==================== Apply ====================

    /// Build the apply request and mark an apply as outstanding.
    pub fn begin_apply(
        &mut self,
        mode: ApplyMode,
        random_variation: bool,
    ) -> EditorResult<ApplyRequest> {
        if self.apply_in_flight {
            return Err(EditorError::ApplyInFlight);
        }
        if self.stamps.is_empty() {
            return Err(EditorError::NothingToApply);
        }
        self.input_state.reset();
        self.apply_in_flight = true;
        let request = self.stamps.build_apply_payload(
            &self.session_id,
            mode,
            random_variation,
            self.viewport.current_page(),
        );
        info!(stamps = request.stamps.len(), mode = ?mode, "Applying stamps");
        Ok(request)
    }

    /// Consume the backend's answer to the outstanding apply.
    ///
    /// On success the stamps are now part of the document, so the
    /// collection is cleared and the session switches to the signed
    /// preview. On failure nothing changes and the error is returned as is.
    pub fn finish_apply(
        &mut self,
        result: EditorResult<ApplyReceipt>,
    ) -> EditorResult<ApplyReceipt> {
        self.apply_in_flight = false;
        match result {
            Ok(receipt) => {
                info!(download = %receipt.download_url, "Stamps applied");
                self.download_url = Some(receipt.download_url.clone());
                self.session_id = format!("{}{}", self.session_id, SIGNED_PREVIEW_SUFFIX);
                self.stamps.clear();
                self.spatial.clear();
                self.input_state.reset();
                self.dirty = true;
                Ok(receipt)
            }
            Err(e) => {
                warn!("Apply failed: {}", e);
                Err(e)
            }
        }
    }

    /// Run a full apply against `backend`.
    pub fn submit_apply(
        &mut self,
        backend: &dyn ApplyBackend,
        mode: ApplyMode,
        random_variation: bool,
    ) -> EditorResult<ApplyReceipt> {
        let request = self.begin_apply(mode, random_variation)?;
        let result = backend.apply(&request);
        self.finish_apply(result)
    }

    // ==================== Rendering ====================

    /// What the current page should show.
    pub fn page_view(&self) -> PageView {
        render::snapshot(&self.stamps, &self.catalog, &self.viewport)
    }
}
