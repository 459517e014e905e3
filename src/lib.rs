//! Typed marshalling of systemd service unit files.
//!
//! A unit file is a line-oriented INI document. This crate maps the four
//! sections of a `.service` unit to plain structs and back:
//!
//! - **Sections** - [`Unit`], [`Service`], [`Install`] (mandatory) and
//!   [`Socket`] (optional), each a struct of string fields
//! - **Descriptors** - per-field key and optionality, read from a static tag
//!   table instead of runtime reflection
//! - **Codec** - section rendering and parsing on top of `serde_ini`
//! - **Daemon** - the whole document
//!
//! # Architecture
//!
//! ```text
//! marshal(daemon)
//!     │
//!     ├── SectionRecord::descriptors()   (descriptor)
//!     ├── project()                      (projector)
//!     └── encode_section()  ×4           (codec)
//!
//! unmarshal(text)
//!     │
//!     ├── Document::parse()              (codec)
//!     └── decode_required() ×3, decode_optional() ×1
//! ```
//!
//! # Example
//!
//! ```rust
//! use unitfile::{marshal, unmarshal, Daemon, Install, Service, Unit};
//!
//! let daemon = Daemon {
//!     unit: Unit {
//!         description: "Example agent".into(),
//!         after: "network-online.target".into(),
//!         ..Default::default()
//!     },
//!     service: Service {
//!         exec_start: "/usr/bin/example-agent".into(),
//!         ..Default::default()
//!     },
//!     install: Install {
//!         wanted_by: "multi-user.target".into(),
//!         ..Default::default()
//!     },
//!     socket: None,
//! };
//!
//! let text = marshal(&daemon).unwrap();
//! assert!(text.starts_with("[Unit]\nDescription = Example agent\n"));
//! assert_eq!(unmarshal(&text).unwrap(), daemon);
//! ```

pub mod codec;
pub mod daemon;
pub mod descriptor;
pub mod error;
pub mod manifest;
pub mod options;
pub mod projector;
pub mod sections;

pub use daemon::{marshal, marshal_with, unmarshal, unmarshal_with, Daemon};
pub use error::Error;
pub use options::{Delimiter, FormatOptions, Options, ParseOptions};
pub use sections::{Install, SectionRecord, Service, Socket, Unit};
