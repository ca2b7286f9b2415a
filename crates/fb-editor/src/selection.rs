//! Selection state: at most one field is active at a time.
//!
//! The selection holds a `FieldId`, never a reference, so a deleted field
//! cannot dangle. A stale id (field no longer in the registry) is detected
//! on every access and treated exactly like no selection.

use fb_core::id::FieldId;
use fb_core::model::{Canvas, Field};
use thiserror::Error;

/// Why a settings panel edit was discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EditRejected {
    /// No field is selected — the edit is dropped, not queued.
    #[error("no active selection")]
    NoActiveSelection,

    /// The selection pointed at a field no longer in the registry.
    /// Handled defensively; treated like no selection.
    #[error("selection references a removed field")]
    StaleSelection,
}

/// Tracks which single field is active.
#[derive(Debug, Clone, Copy, Default)]
pub struct Selection {
    active: Option<FieldId>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the active field.
    pub fn select(&mut self, id: FieldId) {
        log::debug!("select {id:?}");
        self.active = Some(id);
    }

    /// Clear the active reference.
    pub fn clear(&mut self) {
        if self.active.is_some() {
            log::debug!("selection cleared");
        }
        self.active = None;
    }

    /// The raw active id, if any (may be stale; prefer `resolve`).
    pub fn active(&self) -> Option<FieldId> {
        self.active
    }

    /// Resolve the active field against the registry, distinguishing
    /// "nothing selected" from "selected field vanished". A stale id is
    /// dropped as a side effect so later calls see a clean state.
    pub fn resolve<'a>(&mut self, canvas: &'a Canvas) -> Result<&'a Field, EditRejected> {
        let id = self.active.ok_or(EditRejected::NoActiveSelection)?;
        match canvas.get(id) {
            Some(field) => Ok(field),
            None => {
                log::warn!("stale selection {id:?} dropped");
                self.active = None;
                Err(EditRejected::StaleSelection)
            }
        }
    }
}
