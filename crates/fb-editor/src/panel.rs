//! Settings panel binder: two-way sync between the active field and the
//! panel's four controls (label, placeholder, options, delete).
//!
//! Field → panel happens on selection change via `snapshot`; panel → field
//! happens on every keystroke via `edit_mutation`. The panel has no state of
//! its own — `PanelState` is entirely derived from the selection.
//!
//! Control visibility is type-conditional: the placeholder control only
//! applies to text-like inputs and the options control only to `select` —
//! an inapplicable control is hidden and cleared, and its edits are
//! discarded.

use crate::engine::CanvasMutation;
use crate::input::PanelControl;
use fb_core::model::Field;

/// What the settings panel shows. A blank default means "nothing selected".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PanelState {
    pub label: String,
    pub label_visible: bool,
    pub placeholder: String,
    pub placeholder_visible: bool,
    pub options: String,
    pub options_visible: bool,
}

impl PanelState {
    /// The blank panel shown when no field is selected.
    pub fn blank() -> Self {
        Self::default()
    }

    /// Mirror a field's editable attributes into the panel.
    pub fn snapshot(field: &Field) -> Self {
        Self {
            label: field.label.clone().unwrap_or_default(),
            label_visible: field.kind.has_label(),
            placeholder: field.placeholder.clone().unwrap_or_default(),
            placeholder_visible: field.kind.accepts_placeholder(),
            options: field.options.join(", "),
            options_visible: field.kind.has_options(),
        }
    }
}

/// Parse the options control's comma-separated encoding.
///
/// Splits on `,` and trims each entry; entries that trim to nothing are
/// dropped, so text that is empty or all-commas yields zero options (a
/// degraded but valid select).
pub fn parse_options(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}

/// Translate a panel keystroke into a canvas mutation for the active field.
///
/// Returns `None` when the control does not apply to the field's type —
/// the edit is discarded, matching the hidden control.
pub fn edit_mutation(field: &Field, control: PanelControl, value: &str) -> Option<CanvasMutation> {
    match control {
        PanelControl::Label if field.kind.has_label() => Some(CanvasMutation::SetLabel {
            id: field.id,
            text: value.to_string(),
        }),
        PanelControl::Placeholder if field.kind.accepts_placeholder() => {
            Some(CanvasMutation::SetPlaceholder {
                id: field.id,
                text: value.to_string(),
            })
        }
        PanelControl::Options if field.kind.has_options() => Some(CanvasMutation::SetOptions {
            id: field.id,
            options: parse_options(value),
        }),
        _ => {
            log::debug!("{control:?} edit discarded for {:?}", field.kind);
            None
        }
    }
}
