//! Field descriptor extraction.
//!
//! Every section record carries a static table of [`FieldSpec`] entries, one
//! per exported field. A spec pairs the field with its tag, written the same
//! way a struct-tag would be: the emitted key first, then optional modifiers.
//!
//! ```text
//! "Description"                -> key "Description", required
//! "Documentation,omitempty"    -> key "Documentation", optional
//! "After, OmitEmpty"           -> key "After", optional
//! ```
//!
//! [`descriptors`] combines the static table with a record's current values.

use crate::sections::SectionRecord;

/// Modifier marking a field as emitted only when it holds a value.
const OMIT_EMPTY: &str = "omitempty";

/// Static description of one exported field of a section record.
pub struct FieldSpec<R> {
    /// Rust field name.
    pub field: &'static str,
    /// Tag text: emitted key, then comma-separated modifiers.
    pub tag: &'static str,
    /// Read the field's current content.
    pub get: fn(&R) -> &str,
    /// Replace the field's content.
    pub set: fn(&mut R, String),
}

impl<R> FieldSpec<R> {
    /// Field name without the raw-identifier prefix (`r#type` reads `type`).
    pub fn name(&self) -> &'static str {
        self.field.trim_start_matches("r#")
    }

    /// Key written to the unit file.
    pub fn key(&self) -> &'static str {
        parse_tag(self.tag).0
    }

    /// Whether the field is left out of the output when it holds no value.
    pub fn optional(&self) -> bool {
        parse_tag(self.tag).1
    }
}

/// Derived view of one field: key, optionality and current value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor<'a> {
    pub key: &'static str,
    pub field: &'static str,
    pub optional: bool,
    pub value: Option<&'a str>,
}

/// Split a tag into its emitted key and optionality.
///
/// The key is the first comma-separated segment, trimmed. The field is
/// optional when any later segment equals `omitempty`, ignoring case.
pub fn parse_tag(tag: &str) -> (&str, bool) {
    let mut segments = tag.split(',').map(str::trim);
    let key = segments.next().unwrap_or_default();
    let optional = segments.any(|segment| segment.eq_ignore_ascii_case(OMIT_EMPTY));
    (key, optional)
}

/// Interpret raw field content. Empty content counts as "no value".
pub fn presence(raw: &str) -> Option<&str> {
    if raw.is_empty() {
        None
    } else {
        Some(raw)
    }
}

/// Produce the descriptor list of `record`, in field table order.
pub fn descriptors<R: SectionRecord>(record: &R) -> Vec<FieldDescriptor<'_>> {
    R::FIELDS
        .iter()
        .map(|spec| {
            let (key, optional) = parse_tag(spec.tag);
            FieldDescriptor {
                key,
                field: spec.name(),
                optional,
                value: presence((spec.get)(record)),
            }
        })
        .collect()
}
