//! Stampdesk - interactive placement of stamp images on document pages.
//!
//! The [`editor::StampEditor`] owns all editing state and turns raw pointer
//! positions into position, size and rotation updates for placed stamps.
//! Rendering reads snapshots from [`render`]; the backend that burns stamps
//! into the document sits behind [`apply::ApplyBackend`].

pub mod apply;
pub mod catalog;
pub mod collection;
pub mod constants;
pub mod editor;
pub mod error;
pub mod geometry;
pub mod input;
pub mod logging;
pub mod perf;
pub mod render;
pub mod script;
pub mod settings;
pub mod settings_watcher;
pub mod shared;
pub mod spatial_index;
pub mod types;
pub mod viewport;

pub use editor::StampEditor;
pub use error::{EditorError, EditorResult};
pub use shared::SharedEditor;
