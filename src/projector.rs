//! Section projection: which key/value pairs a section actually writes.

use crate::codec::Section;
use crate::descriptor::FieldDescriptor;

/// Build the key/value map to emit for one section.
///
/// Required fields are always included, with an empty value when unset.
/// Optional fields are included only when they hold a value. Descriptor
/// order is preserved.
pub fn project(descriptors: &[FieldDescriptor<'_>]) -> Section {
    descriptors
        .iter()
        .filter(|descriptor| !descriptor.optional || descriptor.value.is_some())
        .map(|descriptor| {
            (
                descriptor.key.to_string(),
                descriptor.value.unwrap_or_default().to_string(),
            )
        })
        .collect()
}
