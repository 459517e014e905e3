//! Errors surfaced by [`marshal`](crate::marshal) and [`unmarshal`](crate::unmarshal).

use std::fmt;

use thiserror::Error;

use crate::codec::{ParseError, ProjectionError, RenderError};

/// Failure of a whole-document operation.
#[derive(Debug, Error)]
pub enum Error {
    /// A mandatory section (`Unit`, `Service`, `Install`) is absent from the input.
    #[error("missing required [{section}] section")]
    MissingSection { section: &'static str },

    /// A section exists but its entries could not be projected into its record.
    #[error("unable to decode [{section}] section")]
    MalformedSection {
        section: &'static str,
        #[source]
        source: ProjectionError,
    },

    /// The text could not be read as an INI document at all.
    #[error("unable to parse unit file")]
    Parse(#[source] ParseError),

    /// One or more sections failed to render. Every failure is listed.
    #[error("unable to encode unit file: {0}")]
    Encode(EncodeFailures),
}

impl Error {
    /// Section this error is about, when it concerns a single section.
    pub fn section(&self) -> Option<&'static str> {
        match self {
            Error::MissingSection { section } | Error::MalformedSection { section, .. } => {
                Some(*section)
            }
            Error::Parse(_) | Error::Encode(_) => None,
        }
    }
}

/// A single section that failed to render.
#[derive(Debug)]
pub struct EncodeFailure {
    pub section: &'static str,
    pub source: RenderError,
}

/// Every section that failed during one serialize call, in document order.
#[derive(Debug, Default)]
pub struct EncodeFailures(pub Vec<EncodeFailure>);

impl EncodeFailures {
    pub fn push(&mut self, section: &'static str, source: RenderError) {
        self.0.push(EncodeFailure { section, source });
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &EncodeFailure> {
        self.0.iter()
    }
}

impl fmt::Display for EncodeFailures {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, failure) in self.0.iter().enumerate() {
            if idx > 0 {
                write!(f, "; ")?;
            }
            write!(f, "[{}]: {}", failure.section, failure.source)?;
        }
        Ok(())
    }
}

impl std::error::Error for EncodeFailures {}
