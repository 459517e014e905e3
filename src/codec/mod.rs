//! Section codec: key/value maps to section text and back.
//!
//! Rendering goes through `serde_ini`'s item writer; the written lines are
//! then normalized so every entry reads `Key = Value` (or `Key=Value` with
//! [`Delimiter::Tight`](crate::options::Delimiter::Tight)). Reading goes
//! through [`Document`].

mod document;

pub use document::{Document, ParseError, ProjectionError, SectionHandle};

use indexmap::IndexMap;
use serde_ini::parse::Item;
use serde_ini::write::{LineEnding, Writer};
use tracing::debug;

use crate::error::Error;
use crate::options::{FormatOptions, ParseOptions};
use crate::sections::SectionRecord;

/// Ordered key/value entries of one section.
pub type Section = IndexMap<String, String>;

/// Failure while rendering a section.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("invalid section name '{name}'")]
    InvalidSectionName { name: String },

    #[error("invalid key '{key}'")]
    InvalidKey { key: String },

    #[error("value of '{key}' {reason}")]
    InvalidValue { key: String, reason: &'static str },

    #[error("writing section")]
    Io(#[from] std::io::Error),

    #[error("rendered section is not UTF-8")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Render one section: header, one line per entry, then a blank line.
pub fn encode_section(
    name: &str,
    entries: &Section,
    options: &FormatOptions,
) -> Result<String, RenderError> {
    check_section_name(name)?;

    let mut buffer = Vec::new();
    {
        let mut writer = Writer::new(&mut buffer, LineEnding::Linefeed);
        writer.write(&Item::Section {
            name: name.to_string(),
        })?;
        for (key, value) in entries {
            check_entry(key, value)?;
            writer.write(&Item::Value {
                key: key.clone(),
                value: value.clone(),
            })?;
        }
    }
    let raw = String::from_utf8(buffer)?;

    let delimiter = options.delimiter.as_str();
    let mut output = String::with_capacity(raw.len() + entries.len() * 2 + 1);
    for line in raw.lines() {
        match line.split_once('=') {
            Some((key, value)) => {
                let entry = format!("{}{}{}", key.trim(), delimiter, value.trim());
                output.push_str(entry.trim_end());
            }
            None => output.push_str(line),
        }
        output.push('\n');
    }
    output.push('\n');

    debug!(section = name, keys = entries.len(), "encoded section");
    Ok(output)
}

/// Entries of section `name`, or `None` when the document lacks it.
///
/// A repeated key contributes its last value.
pub fn decode_entries(document: &Document, name: &str) -> Option<Section> {
    document.section(name).map(|section| {
        section
            .entries()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect()
    })
}

/// Decode a section the document must contain.
pub fn decode_required<R: SectionRecord>(
    document: &Document,
    options: &ParseOptions,
) -> Result<R, Error> {
    let section = document
        .section(R::SECTION)
        .ok_or(Error::MissingSection {
            section: R::SECTION,
        })?;

    let mut record = R::default();
    section
        .project_into(&mut record, options)
        .map_err(|source| Error::MalformedSection {
            section: R::SECTION,
            source,
        })?;

    debug!(section = R::SECTION, keys = section.len(), "decoded section");
    Ok(record)
}

/// Decode a section the document may omit.
///
/// A missing section and a section without entries both yield `None`.
pub fn decode_optional<R: SectionRecord>(
    document: &Document,
    options: &ParseOptions,
) -> Result<Option<R>, Error> {
    let Some(section) = document.section(R::SECTION) else {
        return Ok(None);
    };
    if section.is_empty() {
        debug!(section = R::SECTION, "dropping empty optional section");
        return Ok(None);
    }

    let mut record = R::default();
    section
        .project_into(&mut record, options)
        .map_err(|source| Error::MalformedSection {
            section: R::SECTION,
            source,
        })?;

    debug!(section = R::SECTION, keys = section.len(), "decoded section");
    Ok(Some(record))
}

fn check_section_name(name: &str) -> Result<(), RenderError> {
    let invalid = name.trim().is_empty()
        || name.trim() != name
        || name.contains(['[', ']', '=', '\n', '\r']);
    if invalid {
        return Err(RenderError::InvalidSectionName {
            name: name.to_string(),
        });
    }
    Ok(())
}

fn check_entry(key: &str, value: &str) -> Result<(), RenderError> {
    let trimmed = key.trim();
    let invalid = trimmed.is_empty()
        || trimmed.starts_with(['#', ';', '['])
        || key.contains(['=', '\n', '\r']);
    if invalid {
        return Err(RenderError::InvalidKey {
            key: key.to_string(),
        });
    }
    if value.contains(['\n', '\r']) {
        return Err(RenderError::InvalidValue {
            key: key.to_string(),
            reason: "contains a line break",
        });
    }
    // Values are trimmed on read, so padding would not survive a round trip.
    if value.trim() != value {
        return Err(RenderError::InvalidValue {
            key: key.to_string(),
            reason: "has leading or trailing whitespace",
        });
    }
    Ok(())
}
