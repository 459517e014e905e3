//! The four section records of a service unit file.
//!
//! Each record is a struct of string fields plus a static field table tying
//! every field to its tag (see [`crate::descriptor`]). Both are generated by
//! `section_record!` from a single declaration, so a field can't be added to
//! the struct without also being given a key.

use crate::codec::Section;
use crate::descriptor::{self, FieldDescriptor, FieldSpec};
use crate::projector;

/// A typed section of a unit file.
pub trait SectionRecord: Default + Sized + 'static {
    /// Section header name, e.g. `Unit`.
    const SECTION: &'static str;

    /// Exported fields, in output order.
    const FIELDS: &'static [FieldSpec<Self>];

    /// Descriptors of this record's fields with their current values.
    fn descriptors(&self) -> Vec<FieldDescriptor<'_>> {
        descriptor::descriptors(self)
    }

    /// Key/value pairs this record writes.
    fn assignments(&self) -> Section {
        projector::project(&self.descriptors())
    }
}

macro_rules! section_record {
    (
        $(#[$meta:meta])*
        pub struct $name:ident => $section:literal {
            $(
                $(#[$field_meta:meta])*
                $field:ident: $tag:literal,
            )*
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
        #[serde(default, deny_unknown_fields)]
        pub struct $name {
            $(
                $(#[$field_meta])*
                #[serde(skip_serializing_if = "String::is_empty")]
                pub $field: String,
            )*
        }

        impl $crate::sections::SectionRecord for $name {
            const SECTION: &'static str = $section;

            const FIELDS: &'static [$crate::descriptor::FieldSpec<Self>] = &[
                $(
                    $crate::descriptor::FieldSpec {
                        field: stringify!($field),
                        tag: $tag,
                        get: |record| record.$field.as_str(),
                        set: |record, value| record.$field = value,
                    },
                )*
            ];
        }
    };
}

mod install;
mod service;
mod socket;
mod unit;

pub use install::Install;
pub use service::Service;
pub use socket::Socket;
pub use unit::Unit;
