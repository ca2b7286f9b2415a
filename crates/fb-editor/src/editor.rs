//! The `FormBuilder` facade: one controller wiring input events through
//! selection, drag, and the settings panel into canvas mutations.
//!
//! Everything runs to completion on discrete events, in arrival order — a
//! drag-move handler and a panel-input handler can never interleave
//! mid-mutation.

use crate::drag::DragEngine;
use crate::engine::{CanvasEngine, CanvasMutation};
use crate::hit::hit_test;
use crate::input::{InputEvent, PanelControl};
use crate::panel::{self, PanelState};
use crate::selection::Selection;
use fb_core::factory;
use fb_core::html::{self, Export};
use fb_core::id::FieldId;
use fb_core::layout::Viewport;
use fb_core::model::Canvas;

/// A user-visible acknowledgment the environment should surface.
/// The dialog mechanism itself is outside the core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    /// The live form's submit was suppressed (no network submission).
    FormSubmitted,
}

/// The top-level form builder controller.
pub struct FormBuilder {
    engine: CanvasEngine,
    selection: Selection,
    drag: DragEngine,
    panel: PanelState,
}

impl FormBuilder {
    /// Create a builder over an empty canvas with the given drop-zone size.
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            engine: CanvasEngine::new(viewport),
            selection: Selection::new(),
            drag: DragEngine::new(),
            panel: PanelState::blank(),
        }
    }

    /// Process one input event. Returns an acknowledgment for the
    /// environment to surface, if the event produced one.
    pub fn handle(&mut self, event: InputEvent) -> Option<Notice> {
        match event {
            InputEvent::PaletteDrop { tag } => {
                self.engine.drop_hover = false;
                match factory::create(&tag) {
                    Ok(field) => self.engine.apply_mutation(CanvasMutation::AppendField {
                        field: Box::new(field),
                    }),
                    // Unrecognized tag: silent no-op, nothing enters the canvas.
                    Err(err) => log::debug!("palette drop ignored: {err}"),
                }
            }
            InputEvent::DropHover => self.engine.drop_hover = true,
            InputEvent::DropLeave => self.engine.drop_hover = false,

            InputEvent::PointerDown { x, y } => {
                let hit = hit_test(&self.engine.canvas, &self.engine.bounds, x, y);
                match hit {
                    Some(id) => {
                        self.selection.select(id);
                        self.refresh_panel();
                    }
                    None => {
                        self.selection.clear();
                        self.panel = PanelState::blank();
                    }
                }
                self.drag.pointer_down(hit);
            }
            InputEvent::PointerMove { x: _, y } => {
                if let Some(mutation) =
                    self.drag
                        .pointer_move(&self.engine.canvas, &self.engine.bounds, y)
                {
                    self.engine.apply_mutation(mutation);
                }
            }
            InputEvent::PointerUp { .. } => {
                self.drag.pointer_up();
            }

            InputEvent::PanelInput { control, value } => {
                // Edits with no (or a stale) selection are discarded, not queued.
                if let Ok(field) = self.selection.resolve(&self.engine.canvas) {
                    let mutation = panel::edit_mutation(field, control, &value);
                    // Mirror the keystroke as typed; re-snapshotting here
                    // would rewrite the text under the user's cursor.
                    match control {
                        PanelControl::Label => self.panel.label = value,
                        PanelControl::Placeholder => self.panel.placeholder = value,
                        PanelControl::Options => self.panel.options = value,
                    }
                    if let Some(mutation) = mutation {
                        self.engine.apply_mutation(mutation);
                    }
                } else {
                    self.panel = PanelState::blank();
                }
            }
            InputEvent::DeleteField => {
                if let Ok(field) = self.selection.resolve(&self.engine.canvas) {
                    let id = field.id;
                    self.engine.apply_mutation(CanvasMutation::RemoveField { id });
                }
                self.selection.clear();
                self.panel = PanelState::blank();
            }

            InputEvent::SetBackground { color } => {
                // Applied live to the canvas, read again at export time.
                self.engine.apply_mutation(CanvasMutation::SetBackground { color });
            }
            InputEvent::Submit => return Some(Notice::FormSubmitted),
        }
        None
    }

    /// Serialize the canvas into the download bundle (`saved_form.html`).
    #[must_use]
    pub fn save(&self) -> Export {
        html::export(&self.engine.canvas)
    }

    // ─── Queries ─────────────────────────────────────────────────────────

    pub fn canvas(&self) -> &Canvas {
        &self.engine.canvas
    }

    /// The settings panel contents, fully derived from the selection.
    pub fn panel(&self) -> &PanelState {
        &self.panel
    }

    pub fn selected(&self) -> Option<FieldId> {
        self.selection.active()
    }

    /// The field currently marked as moving by a drag gesture.
    pub fn dragging(&self) -> Option<FieldId> {
        self.drag.moving()
    }

    /// Whether the drop zone should highlight (palette token hovering).
    pub fn drop_hover(&self) -> bool {
        self.engine.drop_hover
    }

    fn refresh_panel(&mut self) {
        self.panel = match self.selection.resolve(&self.engine.canvas) {
            Ok(field) => PanelState::snapshot(field),
            Err(_) => PanelState::blank(),
        };
    }
}
