//! Rendering and parsing options.
//!
//! Options can be written as TOML:
//!
//! ```toml
//! [format]
//! delimiter = "tight"
//!
//! [parse]
//! strict = true
//! ```

use serde::{Deserialize, Serialize};

/// How a key is joined to its value on output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Delimiter {
    /// `Key = Value`
    #[default]
    Spaced,
    /// `Key=Value`, the form systemd's own tooling writes.
    Tight,
}

impl Delimiter {
    pub fn as_str(self) -> &'static str {
        match self {
            Delimiter::Spaced => " = ",
            Delimiter::Tight => "=",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FormatOptions {
    pub delimiter: Delimiter,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ParseOptions {
    /// Reject keys outside a section's field set and keys given twice.
    pub strict: bool,
}

/// Combined options, as loaded from a config file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Options {
    pub format: FormatOptions,
    pub parse: ParseOptions,
}

impl Options {
    pub fn from_toml_str(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }
}
