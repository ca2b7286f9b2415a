//! Field factory: palette tag → new field with type-specific defaults.
//!
//! The defaults mirror what the canvas shows the instant a token is dropped:
//! a text input arrives labeled "Text Input" with hint "Enter text", a
//! dropdown arrives with two options, and so on. Creation has no side
//! effects — a rejected tag constructs nothing.

use crate::id::FieldId;
use crate::model::{Field, FieldType};
use smallvec::{SmallVec, smallvec};
use thiserror::Error;

/// A palette drop carried a tag no field type recognizes.
/// Policy: callers ignore it — no field is created, no state changes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown field type tag: {0:?}")]
pub struct UnknownFieldType(pub String);

/// Create a new field from a palette tag.
pub fn create(tag: &str) -> Result<Field, UnknownFieldType> {
    let kind = FieldType::from_tag(tag).ok_or_else(|| UnknownFieldType(tag.to_string()))?;
    Ok(with_defaults(kind))
}

/// Create a new field of a known type with its literal defaults.
pub fn with_defaults(kind: FieldType) -> Field {
    let (label, placeholder): (Option<&str>, Option<&str>) = match kind {
        FieldType::Text => (Some("Text Input"), Some("Enter text")),
        FieldType::Email => (Some("Email"), Some("Enter email")),
        FieldType::Password => (Some("Password"), Some("Enter password")),
        FieldType::Number => (Some("Number"), Some("Enter number")),
        FieldType::Date => (Some("Date"), None),
        FieldType::Time => (Some("Time"), None),
        FieldType::Select => (Some("Dropdown"), None),
        FieldType::Textarea => (Some("Textarea"), Some("Enter text")),
        // Header, checkbox, radio, and submit embed their text in the
        // markup template itself — no editable label.
        FieldType::Header | FieldType::Checkbox | FieldType::Radio | FieldType::Submit => {
            (None, None)
        }
    };

    let options: SmallVec<[String; 2]> = if kind.has_options() {
        smallvec!["Option 1".to_string(), "Option 2".to_string()]
    } else {
        SmallVec::new()
    };

    Field {
        id: FieldId::fresh(kind.tag()),
        kind,
        label: label.map(str::to_string),
        placeholder: placeholder.map(str::to_string),
        options,
    }
}
