//! Error types for the manifest registry
//!
//! Every lookup failure carries the offending name and surfaces to the
//! immediate caller; there is no partial or degraded result mode.

use thiserror::Error;

/// Errors raised by the manifest registry
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ManifestError {
    /// Requested config name does not exist in the settings source
    #[error("Given config name '{0}' does not exist in manifest settings")]
    UnknownConfig(String),

    /// Requested mode name does not exist in the mode table
    #[error("Given mode name '{0}' does not exist in the modes map")]
    UnknownMode(String),

    /// Requested theme name does not exist in the theme table
    #[error("Given theme name '{0}' does not exist in the themes map")]
    UnknownTheme(String),

    /// Config name exists in settings but `register` was never called for it
    #[error("Given config name '{0}' is not registered")]
    NotRegistered(String),
}

pub type Result<T> = std::result::Result<T, ManifestError>;
