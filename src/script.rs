//! Replay of recorded editor sessions.
//!
//! A script is a JSON document describing the document, the catalog and a
//! list of input events. Replaying it drives a real [`StampEditor`], which
//! makes it handy for reproducing interaction bugs without a UI.
//!
//! ```json
//! {
//!   "session_id": "abc",
//!   "container": {"left": 0, "top": 0, "width": 600, "height": 800},
//!   "catalog": [{"id": "stamp_0", "filename": "a.png", "url": "/a", "width": 100, "height": 100}],
//!   "events": [
//!     {"event": "drop", "asset_id": "stamp_0", "x": 50, "y": 50},
//!     {"event": "down", "x": 60, "y": 60},
//!     {"event": "move", "x": 70, "y": 70},
//!     {"event": "up"},
//!     {"event": "apply", "mode": "all_pages"}
//!   ]
//! }
//! ```

use crate::apply::{ApplyBackend, ApplyMode};
use crate::catalog::{StampCatalog, fallback_document};
use crate::constants::{DEFAULT_PAGE_HEIGHT, DEFAULT_PAGE_WIDTH};
use crate::editor::StampEditor;
use crate::error::{EditorError, EditorResult};
use crate::geometry::point;
use crate::input::coords::ContainerBounds;
use crate::settings::EditorSettings;
use crate::types::{DocumentInfo, PreciseEdit, StampAsset};
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, info};

#[derive(Debug, Clone, Deserialize)]
pub struct Script {
    pub session_id: String,
    #[serde(default = "default_container")]
    pub container: ContainerBounds,
    #[serde(default)]
    pub document: Option<DocumentInfo>,
    /// Assets to place from; the placeholder asset when empty
    #[serde(default)]
    pub catalog: Vec<StampAsset>,
    #[serde(default)]
    pub settings: Option<EditorSettings>,
    pub events: Vec<ScriptEvent>,
}

fn default_container() -> ContainerBounds {
    ContainerBounds::sized(DEFAULT_PAGE_WIDTH, DEFAULT_PAGE_HEIGHT)
}

/// One recorded input event. Positions are screen pixels.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum ScriptEvent {
    Drop { asset_id: String, x: f32, y: f32 },
    Down { x: f32, y: f32 },
    Move { x: f32, y: f32 },
    Up,
    Cancel,
    Page { page: u32 },
    NextPage,
    PrevPage,
    /// Select the n-th placed stamp, in placement order
    Select { index: usize },
    Deselect,
    Delete,
    Clear,
    Precise(PreciseEdit),
    Container(ContainerBounds),
    Apply {
        #[serde(default)]
        mode: Option<ApplyMode>,
        #[serde(default)]
        random_variation: Option<bool>,
    },
}

impl Script {
    pub fn from_json(json: &str) -> EditorResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> EditorResult<Self> {
        Self::from_json(&std::fs::read_to_string(path)?)
    }

    /// Build the editor the script starts from.
    pub fn editor(&self) -> StampEditor {
        let settings = self.settings.clone().unwrap_or_default();
        let document = self
            .document
            .clone()
            .unwrap_or_else(|| fallback_document(&settings));
        let catalog = if self.catalog.is_empty() {
            StampCatalog::fallback(&self.session_id, &settings)
        } else {
            StampCatalog::new(self.catalog.clone())
        };
        StampEditor::new(self.session_id.clone(), document, catalog, self.container, settings)
    }

    /// Replay every event against a fresh editor and return it.
    pub fn run(&self, backend: &dyn ApplyBackend) -> EditorResult<StampEditor> {
        let mut editor = self.editor();
        for (n, event) in self.events.iter().enumerate() {
            debug!(n, ?event, "Replaying");
            replay(&mut editor, event, backend)?;
        }
        info!(
            events = self.events.len(),
            stamps = editor.stamps().len(),
            "Replay finished"
        );
        Ok(editor)
    }
}

fn replay(
    editor: &mut StampEditor,
    event: &ScriptEvent,
    backend: &dyn ApplyBackend,
) -> EditorResult<()> {
    match event {
        ScriptEvent::Drop { asset_id, x, y } => {
            editor.drop_asset(asset_id, point(*x, *y))?;
        }
        ScriptEvent::Down { x, y } => {
            editor.handle_pointer_down(point(*x, *y));
        }
        ScriptEvent::Move { x, y } => {
            editor.handle_pointer_move(point(*x, *y));
        }
        ScriptEvent::Up => {
            editor.handle_pointer_up();
        }
        ScriptEvent::Cancel => {
            editor.cancel_gesture();
        }
        ScriptEvent::Page { page } => {
            editor.go_to_page(*page)?;
        }
        ScriptEvent::NextPage => {
            editor.next_page();
        }
        ScriptEvent::PrevPage => {
            editor.prev_page();
        }
        ScriptEvent::Select { index } => {
            let id = editor
                .stamps()
                .iter()
                .nth(*index)
                .map(|s| s.id)
                .ok_or_else(|| EditorError::InvalidGesture(format!("no stamp at index {index}")))?;
            editor.select(id);
        }
        ScriptEvent::Deselect => editor.deselect(),
        ScriptEvent::Delete => {
            editor.remove_selected();
        }
        ScriptEvent::Clear => editor.clear_all(),
        ScriptEvent::Precise(edit) => {
            editor.apply_precise_edit(edit);
        }
        ScriptEvent::Container(bounds) => editor.set_container(*bounds),
        ScriptEvent::Apply {
            mode,
            random_variation,
        } => {
            let mode = mode.unwrap_or(editor.settings().default_apply_mode);
            let random_variation = random_variation.unwrap_or(editor.settings().random_variation);
            editor.submit_apply(backend, mode, random_variation)?;
        }
    }
    Ok(())
}
