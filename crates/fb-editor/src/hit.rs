//! Hit testing: point → field lookup.
//!
//! Fields never overlap in the vertical stack, but we still walk the
//! sequence back-to-front so behavior stays well defined if bounds ever do.

use fb_core::id::FieldId;
use fb_core::layout::FieldBounds;
use fb_core::model::Canvas;
use std::collections::HashMap;

/// Find the field at position (px, py).
/// Returns `None` when the pointer is over empty canvas.
pub fn hit_test(
    canvas: &Canvas,
    bounds: &HashMap<FieldId, FieldBounds>,
    px: f32,
    py: f32,
) -> Option<FieldId> {
    canvas
        .fields()
        .iter()
        .rev()
        .find(|field| {
            bounds
                .get(&field.id)
                .is_some_and(|b| b.contains(px, py))
        })
        .map(|field| field.id)
}
