//! Core data model for canvas forms.
//!
//! A form is an ordered sequence of heterogeneous `Field` values owned by a
//! `Canvas`. The sequence order *is* the render order and the export order —
//! there is no implicit sorting anywhere. Fields are addressed by stable
//! `FieldId`, never by position or live reference, so reordering and deletion
//! cannot invalidate anything a caller is holding.

use crate::id::FieldId;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

// ─── Field types ─────────────────────────────────────────────────────────

/// The fixed set of form element kinds a palette can offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Header,
    Text,
    Email,
    Password,
    Number,
    Date,
    Time,
    Checkbox,
    Radio,
    Select,
    Textarea,
    Submit,
}

impl FieldType {
    /// Every recognized type, in palette order.
    pub const ALL: [FieldType; 12] = [
        FieldType::Header,
        FieldType::Text,
        FieldType::Email,
        FieldType::Password,
        FieldType::Number,
        FieldType::Date,
        FieldType::Time,
        FieldType::Checkbox,
        FieldType::Radio,
        FieldType::Select,
        FieldType::Textarea,
        FieldType::Submit,
    ];

    /// The opaque tag carried by a palette token.
    pub fn tag(self) -> &'static str {
        match self {
            FieldType::Header => "header",
            FieldType::Text => "text",
            FieldType::Email => "email",
            FieldType::Password => "password",
            FieldType::Number => "number",
            FieldType::Date => "date",
            FieldType::Time => "time",
            FieldType::Checkbox => "checkbox",
            FieldType::Radio => "radio",
            FieldType::Select => "select",
            FieldType::Textarea => "textarea",
            FieldType::Submit => "submit",
        }
    }

    /// Parse a palette tag. Unrecognized tags yield `None`.
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|ty| ty.tag() == tag)
    }

    /// Whether this kind renders a standalone `<label>` before its input.
    /// Header, checkbox, radio, and submit embed their text differently
    /// and have no editable label.
    pub fn has_label(self) -> bool {
        !matches!(
            self,
            FieldType::Header | FieldType::Checkbox | FieldType::Radio | FieldType::Submit
        )
    }

    /// Whether this kind carries a placeholder hint (text-like inputs only).
    pub fn accepts_placeholder(self) -> bool {
        matches!(
            self,
            FieldType::Text
                | FieldType::Email
                | FieldType::Password
                | FieldType::Number
                | FieldType::Textarea
        )
    }

    /// Whether this kind carries an option list.
    pub fn has_options(self) -> bool {
        matches!(self, FieldType::Select)
    }
}

// ─── Field ───────────────────────────────────────────────────────────────

/// A single form element placed on the canvas.
///
/// `label` is stored without its trailing `:` separator — the separator is
/// appended at render time. `placeholder` is only meaningful for text-like
/// kinds and `options` only for `select`; the factory leaves them unset
/// everywhere else.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Field {
    pub id: FieldId,
    pub kind: FieldType,
    pub label: Option<String>,
    pub placeholder: Option<String>,
    pub options: SmallVec<[String; 2]>,
}

// ─── Background color ────────────────────────────────────────────────────

/// RGB color for the page background. Stored as 3 × u8.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Helper to parse a single hex digit.
fn hex_val(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

impl Color {
    pub const WHITE: Color = Color {
        r: 0xFF,
        g: 0xFF,
        b: 0xFF,
    };

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a hex color string: `#RGB` or `#RRGGBB`.
    /// The string may optionally start with `#`.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        let bytes = hex.as_bytes();

        match bytes.len() {
            3 => {
                let r = hex_val(bytes[0])?;
                let g = hex_val(bytes[1])?;
                let b = hex_val(bytes[2])?;
                Some(Self::rgb(r * 17, g * 17, b * 17))
            }
            6 => {
                let r = hex_val(bytes[0])? << 4 | hex_val(bytes[1])?;
                let g = hex_val(bytes[2])? << 4 | hex_val(bytes[3])?;
                let b = hex_val(bytes[4])? << 4 | hex_val(bytes[5])?;
                Some(Self::rgb(r, g, b))
            }
            _ => None,
        }
    }

    /// Emit as `#RRGGBB` — the form a browser color input produces.
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

// ─── Canvas (field registry) ─────────────────────────────────────────────

/// The ordered field sequence plus the page background color.
///
/// Created empty at session start; fields enter only through `append`
/// (palette drop) and leave only through `remove` (delete of the selected
/// field). Nothing here is persisted — the one exported snapshot is produced
/// by the emitter.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Canvas {
    fields: Vec<Field>,
    pub background: Color,
}

impl Canvas {
    /// Create a new empty canvas with a white background.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The live ordered sequence. Mutate only through the operations below.
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Add a field to the end of the sequence.
    pub fn append(&mut self, field: Field) {
        log::debug!("append {:?} ({})", field.id, field.kind.tag());
        self.fields.push(field);
    }

    /// Position of a field in the sequence.
    pub fn index_of(&self, id: FieldId) -> Option<usize> {
        self.fields.iter().position(|f| f.id == id)
    }

    /// Look up a field by ID.
    pub fn get(&self, id: FieldId) -> Option<&Field> {
        self.fields.iter().find(|f| f.id == id)
    }

    /// Look up a field mutably by ID.
    pub fn get_mut(&mut self, id: FieldId) -> Option<&mut Field> {
        self.fields.iter_mut().find(|f| f.id == id)
    }

    pub fn contains(&self, id: FieldId) -> bool {
        self.index_of(id).is_some()
    }

    /// Move a field to `target` (an index in the sequence *after* removal,
    /// clamped to `[0, len]`). No-op when the field is absent or already in
    /// place. Returns true if the order changed.
    pub fn move_to(&mut self, id: FieldId, target: usize) -> bool {
        let Some(pos) = self.index_of(id) else {
            return false;
        };
        let field = self.fields.remove(pos);
        let target = target.min(self.fields.len());
        self.fields.insert(target, field);
        if target != pos {
            log::debug!("move {id:?}: {pos} -> {target}");
        }
        target != pos
    }

    /// Delete a field. Silent no-op when the ID is not present — the ID can
    /// only come from a still-valid selection, but stale callers are treated
    /// as reachable.
    pub fn remove(&mut self, id: FieldId) -> Option<Field> {
        let pos = self.index_of(id)?;
        log::debug!("remove {id:?}");
        Some(self.fields.remove(pos))
    }
}
