//! Full drag-reorder gestures driven through the `FormBuilder` facade,
//! using real resolved layout rather than synthetic bounds.

use fb_core::id::FieldId;
use fb_core::layout::Viewport;
use fb_editor::{FormBuilder, InputEvent};
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

fn order(fb: &FormBuilder) -> Vec<FieldId> {
    fb.canvas().fields().iter().map(|f| f.id).collect()
}

fn midpoint_of(fb: &FormBuilder, id: FieldId) -> (f32, f32) {
    let bounds = fb_core::resolve_layout(fb.canvas(), Viewport::default());
    let b = bounds[&id];
    (b.x + 1.0, b.midpoint_y())
}

#[test]
fn drag_last_field_to_the_top() {
    let mut fb = builder_with(&["text", "email", "number"]);
    let ids = order(&fb);
    let (x, y) = midpoint_of(&fb, ids[2]);

    fb.handle(InputEvent::PointerDown { x, y });
    // Move above the first field's midpoint: closest midpoint below the
    // pointer is the topmost field, so the moving field lands before it.
    fb.handle(InputEvent::PointerMove { x, y: 20.0 });
    assert_eq!(fb.dragging(), Some(ids[2]));
    assert_eq!(order(&fb), vec![ids[2], ids[0], ids[1]]);

    fb.handle(InputEvent::PointerUp { x, y: 20.0 });
    assert_eq!(fb.dragging(), None);
    assert_eq!(order(&fb), vec![ids[2], ids[0], ids[1]]);
}

#[test]
fn reorder_is_live_across_frames() {
    let mut fb = builder_with(&["text", "email", "number"]);
    let ids = order(&fb);
    let (x, y) = midpoint_of(&fb, ids[0]);

    fb.handle(InputEvent::PointerDown { x, y });

    // Frame 1: drag the first field below everything.
    fb.handle(InputEvent::PointerMove { x, y: 10_000.0 });
    assert_eq!(order(&fb), vec![ids[1], ids[2], ids[0]]);

    // Frame 2: back up between the two remaining fields. Bounds were
    // re-resolved after frame 1, so the midpoints reflect the new order.
    let (_, mid1) = midpoint_of(&fb, ids[2]);
    fb.handle(InputEvent::PointerMove { x, y: mid1 - 1.0 });
    assert_eq!(order(&fb), vec![ids[1], ids[0], ids[2]]);

    fb.handle(InputEvent::PointerUp { x, y: mid1 - 1.0 });
    assert_eq!(order(&fb), vec![ids[1], ids[0], ids[2]]);
}

#[test]
fn abandoned_gesture_leaves_a_committed_order() {
    let mut fb = builder_with(&["text", "email", "number", "date"]);
    let ids = order(&fb);
    let (x, y) = midpoint_of(&fb, ids[3]);

    fb.handle(InputEvent::PointerDown { x, y });
    fb.handle(InputEvent::PointerMove { x, y: 20.0 });
    let mid_gesture = order(&fb);

    // No PointerUp ever arrives: pointer capture was lost. The order from
    // the last move is already permanent, and the registry holds the same
    // field multiset.
    let mut expected: Vec<_> = ids.clone();
    let mut got = mid_gesture.clone();
    expected.sort_by_key(|id| id.as_str().to_string());
    got.sort_by_key(|id| id.as_str().to_string());
    assert_eq!(got, expected, "reorder must be a permutation");

    // The next gesture starts cleanly.
    let (x2, y2) = midpoint_of(&fb, ids[0]);
    fb.handle(InputEvent::PointerDown { x: x2, y: y2 });
    fb.handle(InputEvent::PointerUp { x: x2, y: y2 });
    assert_eq!(order(&fb), mid_gesture);
}

#[test]
fn click_without_movement_never_reorders() {
    let mut fb = builder_with(&["text", "email"]);
    let ids = order(&fb);
    let (x, y) = midpoint_of(&fb, ids[1]);

    fb.handle(InputEvent::PointerDown { x, y });
    fb.handle(InputEvent::PointerUp { x, y });

    assert_eq!(order(&fb), ids);
    assert_eq!(fb.selected(), Some(ids[1]));
}

#[test]
fn dragging_a_single_field_is_stable() {
    let mut fb = builder_with(&["select"]);
    let ids = order(&fb);
    let (x, y) = midpoint_of(&fb, ids[0]);

    fb.handle(InputEvent::PointerDown { x, y });
    fb.handle(InputEvent::PointerMove { x, y: 5.0 });
    fb.handle(InputEvent::PointerMove { x, y: 5_000.0 });
    fb.handle(InputEvent::PointerUp { x, y: 5_000.0 });

    assert_eq!(order(&fb), ids);
}
