//! Loading daemon definitions and options from files.
//!
//! A definition is the serde form of [`Daemon`], written as TOML or JSON:
//!
//! ```toml
//! [unit]
//! description = "Example agent"
//! after = "network-online.target"
//!
//! [service]
//! type = "exec"
//! exec_start = "/usr/bin/example-agent"
//!
//! [install]
//! wanted_by = "multi-user.target"
//! ```

use anyhow::{bail, Context, Result};
use std::fs;
use std::path::Path;

use crate::daemon::Daemon;
use crate::options::Options;

/// Load a daemon definition, choosing the format by file extension.
pub fn load_daemon(path: &Path) -> Result<Daemon> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("reading daemon definition '{}'", path.display()))?;

    match path.extension().and_then(|ext| ext.to_str()) {
        Some("toml") => toml::from_str(&content)
            .with_context(|| format!("parsing daemon definition '{}'", path.display())),
        Some("json") => serde_json::from_str(&content)
            .with_context(|| format!("parsing daemon definition '{}'", path.display())),
        other => bail!(
            "unsupported daemon definition '{}': extension {:?} (expected 'toml' or 'json')",
            path.display(),
            other.unwrap_or("")
        ),
    }
}

/// Load options from a TOML file.
pub fn load_options(path: &Path) -> Result<Options> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("reading options '{}'", path.display()))?;
    Options::from_toml_str(&content)
        .with_context(|| format!("parsing options '{}'", path.display()))
}

/// Read and parse a unit file.
pub fn load_unit_file(path: &Path, options: &Options) -> Result<Daemon> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("reading unit file '{}'", path.display()))?;
    crate::unmarshal_with(&content, options)
        .with_context(|| format!("decoding unit file '{}'", path.display()))
}
