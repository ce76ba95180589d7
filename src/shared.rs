//! Thread-safe handle to an editor.
//!
//! Hosts that deliver events from more than one context (a UI thread and a
//! network task, say) share one [`StampEditor`] behind a mutex. The apply
//! round trip releases the lock while the backend works so pointer events
//! keep flowing.

use crate::apply::{ApplyBackend, ApplyMode, ApplyReceipt};
use crate::editor::StampEditor;
use crate::error::EditorResult;
use parking_lot::{Mutex, MutexGuard};
use std::sync::Arc;

#[derive(Clone)]
pub struct SharedEditor(Arc<Mutex<StampEditor>>);

impl SharedEditor {
    pub fn new(editor: StampEditor) -> Self {
        Self(Arc::new(Mutex::new(editor)))
    }

    pub fn lock(&self) -> MutexGuard<'_, StampEditor> {
        self.0.lock()
    }

    /// Run `f` with exclusive access to the editor.
    pub fn with<R>(&self, f: impl FnOnce(&mut StampEditor) -> R) -> R {
        f(&mut *self.0.lock())
    }

    /// Apply without holding the lock across the backend call. A second
    /// apply started meanwhile is rejected with `ApplyInFlight`.
    pub fn submit_apply(
        &self,
        backend: &dyn ApplyBackend,
        mode: ApplyMode,
        random_variation: bool,
    ) -> EditorResult<ApplyReceipt> {
        let request = self.0.lock().begin_apply(mode, random_variation)?;
        let result = backend.apply(&request);
        self.0.lock().finish_apply(result)
    }
}
