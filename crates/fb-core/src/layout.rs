//! Vertical stack layout solver.
//!
//! Assigns each field on the canvas an absolute y-extent by stacking the
//! sequence top to bottom inside the viewport. The resolved bounds feed the
//! drag-reorder engine (vertical midpoints) and click hit-testing — the
//! geometry here is the single source of truth for where a field "is".

use crate::id::FieldId;
use crate::model::{Canvas, FieldType};
use std::collections::HashMap;

/// Outer padding around the field stack.
const PAD: f32 = 16.0;
/// Vertical gap between consecutive fields.
const GAP: f32 = 10.0;

/// The canvas (drop zone) dimensions.
#[derive(Debug, Clone, Copy)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 480.0,
            height: 640.0,
        }
    }
}

/// Resolved absolute bounding box of one field.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FieldBounds {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl FieldBounds {
    pub fn contains(&self, px: f32, py: f32) -> bool {
        px >= self.x && px <= self.x + self.width && py >= self.y && py <= self.y + self.height
    }

    /// The vertical midpoint — the drag engine's insertion criterion.
    pub fn midpoint_y(&self) -> f32 {
        self.y + self.height / 2.0
    }
}

/// Nominal row height for each field kind.
fn intrinsic_height(kind: FieldType) -> f32 {
    match kind {
        FieldType::Header => 44.0,
        FieldType::Textarea => 96.0,
        _ => 38.0,
    }
}

/// Resolve bounds for every field by stacking the sequence vertically.
///
/// Returns a map from `FieldId` → `FieldBounds`. The stack may overflow the
/// viewport height; bounds keep growing downward (the canvas scrolls).
pub fn resolve_layout(canvas: &Canvas, viewport: Viewport) -> HashMap<FieldId, FieldBounds> {
    let mut bounds = HashMap::with_capacity(canvas.len());
    let width = (viewport.width - 2.0 * PAD).max(0.0);

    let mut y = PAD;
    for field in canvas.fields() {
        let height = intrinsic_height(field.kind);
        bounds.insert(
            field.id,
            FieldBounds {
                x: PAD,
                y,
                width,
                height,
            },
        );
        y += height + GAP;
    }

    bounds
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::factory;
    use pretty_assertions::assert_eq;

    #[test]
    fn stacks_in_sequence_order() {
        let mut canvas = Canvas::new();
        canvas.append(factory::create("header").unwrap());
        canvas.append(factory::create("text").unwrap());
        canvas.append(factory::create("submit").unwrap());

        let bounds = resolve_layout(&canvas, Viewport::default());
        assert_eq!(bounds.len(), 3);

        let ys: Vec<f32> = canvas
            .fields()
            .iter()
            .map(|f| bounds[&f.id].y)
            .collect();
        assert!(ys[0] < ys[1] && ys[1] < ys[2], "fields must stack downward");

        // No overlap: each field starts below the previous one's bottom.
        let first = bounds[&canvas.fields()[0].id];
        assert!(ys[1] >= first.y + first.height);
    }

    #[test]
    fn empty_canvas_resolves_empty() {
        let bounds = resolve_layout(&Canvas::new(), Viewport::default());
        assert!(bounds.is_empty());
    }

    #[test]
    fn midpoint_sits_inside_bounds() {
        let b = FieldBounds {
            x: 16.0,
            y: 100.0,
            width: 300.0,
            height: 38.0,
        };
        assert_eq!(b.midpoint_y(), 119.0);
        assert!(b.contains(20.0, b.midpoint_y()));
        assert!(!b.contains(20.0, 99.0));
    }
}
