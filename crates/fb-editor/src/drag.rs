//! Drag-reorder engine for existing canvas fields.
//!
//! An explicit two-state machine over a pointer gesture:
//!
//! ```text
//! Idle --pointer-down on a field--> Armed --pointer-move--> Dragging
//! Dragging --pointer-up / abandonment--> Idle
//! ```
//!
//! Reordering is live: every pointer move relocates the moving field to its
//! computed insertion point immediately, so each intermediate order is a
//! committed, renderable state. Drop merely unmarks the field, and a gesture
//! abandoned mid-drag (lost pointer capture) leaves the registry exactly
//! where the last move put it. There is no rollback path.
//!
//! The insertion point is the field — among all fields except the moving
//! one — whose vertical midpoint is strictly below the pointer, taking the
//! smallest such midpoint when several qualify. If none qualify the field
//! goes to the end of the list.

use crate::engine::CanvasMutation;
use fb_core::id::FieldId;
use fb_core::layout::FieldBounds;
use fb_core::model::Canvas;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragState {
    Idle,
    /// Pointer is down on a field but has not moved yet.
    Armed { id: FieldId },
    /// The field is marked as moving and follows the pointer.
    Dragging { id: FieldId },
}

/// State machine driving live reorder of canvas fields.
#[derive(Debug, Clone, Copy)]
pub struct DragEngine {
    state: DragState,
}

impl Default for DragEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl DragEngine {
    pub fn new() -> Self {
        Self {
            state: DragState::Idle,
        }
    }

    /// The field currently marked as moving, if a drag is in progress.
    pub fn moving(&self) -> Option<FieldId> {
        match self.state {
            DragState::Dragging { id } => Some(id),
            _ => None,
        }
    }

    /// Pointer pressed. A hit on a field arms the gesture; empty canvas
    /// leaves the machine idle.
    pub fn pointer_down(&mut self, hit: Option<FieldId>) {
        self.state = match hit {
            Some(id) => DragState::Armed { id },
            None => DragState::Idle,
        };
    }

    /// Pointer moved. Entering `Dragging` on the first move after a press;
    /// afterwards, recompute the insertion point and emit the move. The
    /// caller applies the mutation (and re-resolves bounds) before the next
    /// event arrives.
    pub fn pointer_move(
        &mut self,
        canvas: &Canvas,
        bounds: &HashMap<FieldId, FieldBounds>,
        pointer_y: f32,
    ) -> Option<CanvasMutation> {
        let id = match self.state {
            DragState::Idle => return None,
            DragState::Armed { id } | DragState::Dragging { id } => id,
        };
        self.state = DragState::Dragging { id };

        let index = insertion_index(canvas, bounds, id, pointer_y);
        // Skip the no-op move when the field is already in place.
        if canvas.index_of(id) == Some(index) {
            return None;
        }
        Some(CanvasMutation::MoveField { id, index })
    }

    /// Pointer released (or the gesture was abandoned). Unmarks the moving
    /// field; the sequence order at this instant is already permanent.
    /// Returns the field that was being dragged, if any.
    pub fn pointer_up(&mut self) -> Option<FieldId> {
        let moving = self.moving();
        self.state = DragState::Idle;
        moving
    }
}

/// Compute the insertion index for `moving` given the pointer's vertical
/// position: the position (in the sequence without the moving field) of the
/// closest field whose midpoint lies strictly below the pointer, or the end
/// of the list when no midpoint does.
pub fn insertion_index(
    canvas: &Canvas,
    bounds: &HashMap<FieldId, FieldBounds>,
    moving: FieldId,
    pointer_y: f32,
) -> usize {
    let mut best: Option<(usize, f32)> = None;
    let mut index = 0;

    for field in canvas.fields() {
        if field.id == moving {
            continue;
        }
        if let Some(b) = bounds.get(&field.id) {
            let mid = b.midpoint_y();
            if pointer_y < mid && best.is_none_or(|(_, best_mid)| mid < best_mid) {
                best = Some((index, mid));
            }
        }
        index += 1;
    }

    // `index` is now the length of the sequence without the moving field.
    best.map_or(index, |(i, _)| i)
}
