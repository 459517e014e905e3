//! Parsed INI documents.
//!
//! Line parsing is done by `serde_ini`'s item parser. This module groups the
//! items it yields into ordered, named sections and projects a section into
//! a typed record.

use std::convert::Infallible;

use indexmap::IndexMap;
use serde_ini::parse::{Error as IniError, Item, Parser, SyntaxError};
use thiserror::Error;
use tracing::debug;

use crate::options::ParseOptions;
use crate::sections::SectionRecord;

/// Text that is not a valid INI document.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("line {line}: {detail}")]
pub struct ParseError {
    /// 1-based line number.
    pub line: usize,
    pub detail: String,
}

/// Entries of a section that do not fit its record.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProjectionError {
    #[error("unknown key '{key}'")]
    UnknownKey { key: String },

    #[error("key '{key}' is set more than once")]
    DuplicateKey { key: String },
}

/// An INI document: named sections of ordered key/value entries.
///
/// Entries keep duplicates so that strict projection can reject them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    sections: IndexMap<String, Vec<(String, String)>>,
}

impl Document {
    /// Parse `text` into sections.
    ///
    /// Lines are trimmed before parsing and lines starting with `#` or `;`
    /// are comments. A repeated header continues the earlier section.
    /// Entries before the first header belong to no section and are dropped.
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        // Both `#` and `;` comments are blanked here so the accepted comment
        // syntax does not depend on the parser's own rules.
        let lines = text.lines().map(|line| {
            let line = line.trim();
            if line.starts_with('#') || line.starts_with(';') {
                Ok::<_, Infallible>("")
            } else {
                Ok(line)
            }
        });

        let mut sections: IndexMap<String, Vec<(String, String)>> = IndexMap::new();
        let mut current: Option<String> = None;

        for (idx, item) in Parser::new(lines).enumerate() {
            let item = item.map_err(|e| ParseError {
                line: idx + 1,
                detail: describe(e),
            })?;

            match item {
                Item::Section { name } => {
                    let name = name.trim().to_string();
                    sections.entry(name.clone()).or_default();
                    current = Some(name);
                }
                Item::Value { key, value } => {
                    let key = key.trim().to_string();
                    let value = value.trim().to_string();
                    match &current {
                        Some(name) => {
                            sections.entry(name.clone()).or_default().push((key, value));
                        }
                        None => {
                            debug!(line = idx + 1, %key, "ignoring key outside of any section");
                        }
                    }
                }
                _ => {}
            }
        }

        Ok(Self { sections })
    }

    /// Look up a section by its case-sensitive name.
    pub fn section(&self, name: &str) -> Option<SectionHandle<'_>> {
        self.sections
            .get_key_value(name)
            .map(|(name, entries)| SectionHandle { name, entries })
    }

    pub fn has_section(&self, name: &str) -> bool {
        self.sections.contains_key(name)
    }

    /// Section names in document order.
    pub fn section_names(&self) -> impl Iterator<Item = &str> {
        self.sections.keys().map(String::as_str)
    }
}

fn describe(error: IniError<Infallible>) -> String {
    let detail = match error {
        IniError::Syntax(SyntaxError::SectionNotClosed) => "section header is missing ']'",
        IniError::Syntax(SyntaxError::SectionName) => "section name contains ']'",
        IniError::Syntax(SyntaxError::MissingEquals) => "expected 'key = value'",
        _ => "unreadable line",
    };
    detail.to_string()
}

/// Borrowed view of one parsed section.
#[derive(Debug, Clone, Copy)]
pub struct SectionHandle<'a> {
    name: &'a str,
    entries: &'a [(String, String)],
}

impl<'a> SectionHandle<'a> {
    pub fn name(&self) -> &'a str {
        self.name
    }

    /// Number of entries, duplicates included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> impl Iterator<Item = (&'a str, &'a str)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    /// Last value of `key`, if present.
    pub fn get(&self, key: &str) -> Option<&'a str> {
        self.entries
            .iter()
            .rev()
            .find(|(k, _)| k == key)
            .map(|(_, value)| value.as_str())
    }

    /// Copy this section's entries into `record`.
    ///
    /// Leniently, unknown keys are ignored and the last of repeated keys
    /// wins. Under [`ParseOptions::strict`] both are errors.
    pub fn project_into<R: SectionRecord>(
        &self,
        record: &mut R,
        options: &ParseOptions,
    ) -> Result<(), ProjectionError> {
        let mut assigned: Vec<&str> = Vec::with_capacity(self.entries.len());

        for (key, value) in self.entries() {
            let Some(spec) = R::FIELDS.iter().find(|spec| spec.key() == key) else {
                if options.strict {
                    return Err(ProjectionError::UnknownKey {
                        key: key.to_string(),
                    });
                }
                debug!(section = self.name, %key, "ignoring unknown key");
                continue;
            };

            if assigned.contains(&key) && options.strict {
                return Err(ProjectionError::DuplicateKey {
                    key: key.to_string(),
                });
            }
            assigned.push(key);

            (spec.set)(record, value.to_string());
        }

        Ok(())
    }
}
