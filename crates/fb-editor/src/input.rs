//! Input abstraction layer.
//!
//! Normalizes the environment's events (palette drag-and-drop, pointer
//! gestures on the canvas, settings panel keystrokes, toolbar actions) into
//! one `InputEvent` enum consumed by the `FormBuilder` facade. Events are
//! processed strictly in arrival order; every handler runs to completion.

use fb_core::model::Color;

/// Which settings panel control an edit came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelControl {
    Label,
    Placeholder,
    Options,
}

/// A normalized input event.
#[derive(Debug, Clone)]
pub enum InputEvent {
    /// A palette token was dropped on the canvas. Carries the token's one
    /// opaque string — its field-type tag.
    PaletteDrop { tag: String },

    /// A palette token is hovering over the canvas (highlight the drop zone).
    DropHover,

    /// The hovering token left the canvas without dropping.
    DropLeave,

    /// Pointer pressed on the canvas.
    PointerDown { x: f32, y: f32 },

    /// Pointer moved over the canvas.
    PointerMove { x: f32, y: f32 },

    /// Pointer released.
    PointerUp { x: f32, y: f32 },

    /// A settings panel control changed (fires on every keystroke).
    PanelInput { control: PanelControl, value: String },

    /// The panel's delete button was pressed.
    DeleteField,

    /// The background color input changed.
    SetBackground { color: Color },

    /// The live form's submit button was pressed.
    Submit,
}

impl InputEvent {
    /// Extract position if this is a pointer event.
    pub fn position(&self) -> Option<(f32, f32)> {
        match self {
            Self::PointerDown { x, y }
            | Self::PointerMove { x, y }
            | Self::PointerUp { x, y } => Some((*x, *y)),
            _ => None,
        }
    }
}
