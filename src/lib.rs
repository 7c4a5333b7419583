//! Config and assets manifest registry for CodeMirror editor instances
//!
//! The host application describes its editor configurations, mode and theme
//! tables, and base asset lists in [`ManifestSettings`], registers the
//! configurations it uses on a [`Manifest`], and queries that registry from
//! its templating layer for editor parameters and ordered, de-duplicated
//! Javascript/CSS path lists. Asset paths are opaque strings; this crate does
//! no I/O.

pub mod error;
pub mod manifest;
pub mod settings;

// Re-export main types for convenience
pub use error::{ManifestError, Result};
pub use manifest::{CodeMirrorConfig, Manifest};
pub use settings::{ConfigOptions, ManifestSettings};
