pub mod drag;
pub mod editor;
pub mod engine;
pub mod hit;
pub mod input;
pub mod panel;
pub mod selection;

pub use drag::{DragEngine, DragState, insertion_index};
pub use editor::{FormBuilder, Notice};
pub use engine::{CanvasEngine, CanvasMutation};
pub use hit::hit_test;
pub use input::{InputEvent, PanelControl};
pub use panel::{PanelState, parse_options};
pub use selection::{EditRejected, Selection};
