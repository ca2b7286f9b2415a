//! Bidirectional panel sync through the `FormBuilder` facade:
//! selection fills the panel, keystrokes flow back into the field, and
//! delete blanks everything.

use fb_core::layout::Viewport;
use fb_editor::{FormBuilder, InputEvent, PanelControl, PanelState};
use pretty_assertions::assert_eq;

fn builder_with(tags: &[&str]) -> FormBuilder {
    let mut fb = FormBuilder::new(Viewport::default());
    for tag in tags {
        fb.handle(InputEvent::PaletteDrop {
            tag: tag.to_string(),
        });
    }
    fb
}

fn select_field(fb: &mut FormBuilder, index: usize) {
    let id = fb.canvas().fields()[index].id;
    let bounds = fb_core::resolve_layout(fb.canvas(), Viewport::default());
    let b = bounds[&id];
    fb.handle(InputEvent::PointerDown {
        x: b.x + 1.0,
        y: b.midpoint_y(),
    });
    fb.handle(InputEvent::PointerUp {
        x: b.x + 1.0,
        y: b.midpoint_y(),
    });
}

#[test]
fn label_edit_flows_into_the_field_and_the_export() {
    let mut fb = builder_with(&["text"]);
    select_field(&mut fb, 0);
    assert_eq!(fb.panel().label, "Text Input");

    fb.handle(InputEvent::PanelInput {
        control: PanelControl::Label,
        value: "Full name".into(),
    });

    // Stored without the separator, rendered with it.
    assert_eq!(fb.canvas().fields()[0].label.as_deref(), Some("Full name"));
    assert!(fb.save().html.contains("<label>Full name:</label>"));
}

#[test]
fn placeholder_edit_applies_per_keystroke() {
    let mut fb = builder_with(&["email"]);
    select_field(&mut fb, 0);

    for typed in ["y", "yo", "you@example.com"] {
        fb.handle(InputEvent::PanelInput {
            control: PanelControl::Placeholder,
            value: typed.into(),
        });
        assert_eq!(fb.canvas().fields()[0].placeholder.as_deref(), Some(typed));
    }
}

#[test]
fn options_text_binds_trimmed_entries() {
    let mut fb = builder_with(&["select"]);
    select_field(&mut fb, 0);

    fb.handle(InputEvent::PanelInput {
        control: PanelControl::Options,
        value: "A, B ,C".into(),
    });

    assert_eq!(fb.canvas().fields()[0].options.as_slice(), ["A", "B", "C"]);
    let html = fb.save().html;
    assert!(html.contains("<option>A</option><option>B</option><option>C</option>"));
}

#[test]
fn empty_options_text_yields_a_zero_option_select() {
    let mut fb = builder_with(&["select"]);
    select_field(&mut fb, 0);

    fb.handle(InputEvent::PanelInput {
        control: PanelControl::Options,
        value: " , ".into(),
    });

    assert!(fb.canvas().fields()[0].options.is_empty());
    assert!(fb.save().html.contains("<select></select>"));
}

#[test]
fn options_control_hidden_for_non_select() {
    let mut fb = builder_with(&["text", "select"]);

    select_field(&mut fb, 1);
    assert!(fb.panel().options_visible);

    select_field(&mut fb, 0);
    assert!(!fb.panel().options_visible);
    assert_eq!(fb.panel().options, "", "hidden control is also cleared");
}

#[test]
fn delete_clears_selection_and_blanks_the_panel() {
    let mut fb = builder_with(&["text", "email"]);
    let doomed = fb.canvas().fields()[0].id;
    select_field(&mut fb, 0);

    fb.handle(InputEvent::DeleteField);

    assert_eq!(fb.canvas().len(), 1);
    assert!(!fb.canvas().contains(doomed));
    assert_eq!(fb.selected(), None);
    assert_eq!(fb.panel(), &PanelState::blank());

    // A later edit event with nothing selected is a no-op.
    fb.handle(InputEvent::PanelInput {
        control: PanelControl::Label,
        value: "ghost".into(),
    });
    assert_eq!(fb.canvas().fields()[0].label.as_deref(), Some("Email"));
}

#[test]
fn delete_without_selection_is_a_noop() {
    let mut fb = builder_with(&["text"]);
    fb.handle(InputEvent::DeleteField);
    assert_eq!(fb.canvas().len(), 1);
}

#[test]
fn reselecting_refreshes_the_panel_from_current_state() {
    let mut fb = builder_with(&["text", "select"]);

    select_field(&mut fb, 0);
    fb.handle(InputEvent::PanelInput {
        control: PanelControl::Label,
        value: "Nickname".into(),
    });

    // Switch away and back: the panel mirrors the stored field, not the
    // last keystrokes.
    select_field(&mut fb, 1);
    select_field(&mut fb, 0);
    assert_eq!(fb.panel().label, "Nickname");
    assert!(fb.panel().placeholder_visible);
    assert!(!fb.panel().options_visible);
}
