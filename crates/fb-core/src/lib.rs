pub mod factory;
pub mod html;
pub mod id;
pub mod layout;
pub mod model;

pub use factory::UnknownFieldType;
pub use html::{Export, emit_document, export, field_markup};
pub use id::FieldId;
pub use layout::{FieldBounds, Viewport, resolve_layout};
pub use model::*;
