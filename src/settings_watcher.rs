//! Settings file hot-reload.
//!
//! Watches the directory holding the settings file (editors often replace
//! the file rather than write it in place) and reports changes to that one
//! file through a non-blocking `poll`.

use crate::error::EditorResult;
use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::path::{Path, PathBuf};
use std::sync::mpsc::{Receiver, TryRecvError, channel};

pub use crate::settings::default_settings_path;

/// A change to the watched settings file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsEvent {
    Created,
    Modified,
    Deleted,
    Error(String),
}

pub struct SettingsWatcher {
    path: PathBuf,
    rx: Receiver<notify::Result<Event>>,
    // Dropping the watcher stops delivery
    _watcher: RecommendedWatcher,
}

impl SettingsWatcher {
    pub fn new(path: PathBuf) -> EditorResult<Self> {
        let (tx, rx) = channel();
        let mut watcher = notify::recommended_watcher(tx)?;
        let dir = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        watcher.watch(dir, RecursiveMode::NonRecursive)?;
        Ok(Self {
            path,
            rx,
            _watcher: watcher,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Next pending change to the settings file, without blocking.
    pub fn poll(&mut self) -> Option<SettingsEvent> {
        loop {
            match self.rx.try_recv() {
                Ok(Ok(event)) => {
                    if let Some(settings_event) = self.classify(&event) {
                        return Some(settings_event);
                    }
                }
                Ok(Err(e)) => return Some(SettingsEvent::Error(e.to_string())),
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => return None,
            }
        }
    }

    fn classify(&self, event: &Event) -> Option<SettingsEvent> {
        let ours = event
            .paths
            .iter()
            .any(|p| p.file_name() == self.path.file_name());
        if !ours {
            return None;
        }
        match event.kind {
            EventKind::Create(_) => Some(SettingsEvent::Created),
            EventKind::Modify(_) => Some(SettingsEvent::Modified),
            EventKind::Remove(_) => Some(SettingsEvent::Deleted),
            _ => None,
        }
    }
}
