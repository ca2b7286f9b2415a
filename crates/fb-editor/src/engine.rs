//! Canvas engine: mutations applied to the authoritative canvas state.
//!
//! All editing flows through `CanvasMutation` values so every state change
//! has one choke point. The engine owns the canvas, the resolved field
//! bounds, and the viewport; bounds are re-resolved after each mutation so
//! hit-testing and drag math always see current geometry.

use fb_core::id::FieldId;
use fb_core::layout::{FieldBounds, Viewport, resolve_layout};
use fb_core::model::{Canvas, Color, Field};
use std::collections::HashMap;

/// A mutation that can be applied to the canvas.
#[derive(Debug, Clone)]
pub enum CanvasMutation {
    /// Append a freshly created field (palette drop).
    AppendField { field: Box<Field> },

    /// Relocate a field to `index` in the sequence (post-removal index,
    /// clamped). Emitted live on every drag move.
    MoveField { id: FieldId, index: usize },

    /// Delete a field (panel delete button).
    RemoveField { id: FieldId },

    /// Replace a field's label (stored without the trailing separator).
    SetLabel { id: FieldId, text: String },

    /// Replace a field's placeholder hint.
    SetPlaceholder { id: FieldId, text: String },

    /// Replace a select field's whole option list. An empty list is valid —
    /// the select renders with zero options.
    SetOptions { id: FieldId, options: Vec<String> },

    /// Change the page background color.
    SetBackground { color: Color },
}

/// Owns the canvas plus the geometry derived from it.
pub struct CanvasEngine {
    /// The authoritative canvas state.
    pub canvas: Canvas,

    /// Resolved layout bounds (recomputed after mutations).
    pub bounds: HashMap<FieldId, FieldBounds>,

    /// Canvas viewport dimensions.
    pub viewport: Viewport,

    /// Drop-zone highlight: a palette token is hovering over the canvas.
    pub drop_hover: bool,
}

impl CanvasEngine {
    /// Create a new engine over an empty canvas.
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        let canvas = Canvas::new();
        let bounds = resolve_layout(&canvas, viewport);
        Self {
            canvas,
            bounds,
            viewport,
            drop_hover: false,
        }
    }

    /// Apply one mutation, then re-resolve layout.
    ///
    /// Mutations naming an absent field are absorbed as no-ops: with
    /// single-threaded event ordering they should not occur, but callers
    /// must treat them as reachable.
    pub fn apply_mutation(&mut self, mutation: CanvasMutation) {
        match mutation {
            CanvasMutation::AppendField { field } => {
                self.canvas.append(*field);
            }
            CanvasMutation::MoveField { id, index } => {
                self.canvas.move_to(id, index);
            }
            CanvasMutation::RemoveField { id } => {
                if self.canvas.remove(id).is_none() {
                    log::warn!("remove of absent field {id:?} ignored");
                }
            }
            CanvasMutation::SetLabel { id, text } => {
                match self.canvas.get_mut(id) {
                    Some(field) if field.kind.has_label() => field.label = Some(text),
                    Some(field) => {
                        log::debug!("label edit ignored: {:?} has no label", field.kind)
                    }
                    None => log::warn!("label edit for absent field {id:?} ignored"),
                }
            }
            CanvasMutation::SetPlaceholder { id, text } => match self.canvas.get_mut(id) {
                Some(field) if field.kind.accepts_placeholder() => field.placeholder = Some(text),
                Some(field) => {
                    log::debug!("placeholder edit ignored: {:?} takes none", field.kind)
                }
                None => log::warn!("placeholder edit for absent field {id:?} ignored"),
            },
            CanvasMutation::SetOptions { id, options } => match self.canvas.get_mut(id) {
                Some(field) if field.kind.has_options() => {
                    field.options = options.into_iter().collect();
                }
                Some(field) => log::debug!("options edit ignored: {:?} has none", field.kind),
                None => log::warn!("options edit for absent field {id:?} ignored"),
            },
            CanvasMutation::SetBackground { color } => {
                self.canvas.background = color;
            }
        }

        self.resolve();
    }

    /// Re-resolve layout after mutations.
    pub fn resolve(&mut self) {
        self.bounds = resolve_layout(&self.canvas, self.viewport);
    }
}
