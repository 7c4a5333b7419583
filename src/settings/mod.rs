//! Manifest settings supplied by the host application
//!
//! Every asset path here is an opaque identifier (commonly a path relative to
//! the host's static directory); the registry never touches the filesystem.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Placeholder substituted with the configuration name in bundle templates
pub const SETTINGS_NAME_PLACEHOLDER: &str = "{settings_name}";

/// External configuration source for the manifest registry
///
/// Built once by the host at startup, then handed to
/// [`Manifest::new`](crate::Manifest::new). Maps keep insertion order because
/// autoregistration and asset aggregation iterate them in source order.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ManifestSettings {
    /// Available editor configurations, by name
    #[serde(default)]
    pub configs: IndexMap<String, ConfigOptions>,

    /// Mode name to Javascript file path
    #[serde(default)]
    pub modes: IndexMap<String, String>,

    /// Theme name to CSS file path
    #[serde(default)]
    pub themes: IndexMap<String, String>,

    /// Javascript paths always included, before any config assets
    #[serde(default)]
    pub base_js: Vec<String>,

    /// CSS paths always included, before any config assets
    #[serde(default)]
    pub base_css: Vec<String>,

    /// CSS bundle name template, containing `{settings_name}`
    #[serde(default = "default_css_bundle_name")]
    pub css_bundle_name: String,

    /// Javascript bundle name template, containing `{settings_name}`
    #[serde(default = "default_js_bundle_name")]
    pub js_bundle_name: String,
}

// Default values
fn default_css_bundle_name() -> String {
    "codemirror-{settings_name}-css".to_string()
}
fn default_js_bundle_name() -> String {
    "codemirror-{settings_name}-js".to_string()
}

impl Default for ManifestSettings {
    fn default() -> Self {
        Self {
            configs: IndexMap::new(),
            modes: IndexMap::new(),
            themes: IndexMap::new(),
            base_js: Vec::new(),
            base_css: Vec::new(),
            css_bundle_name: default_css_bundle_name(),
            js_bundle_name: default_js_bundle_name(),
        }
    }
}

impl ManifestSettings {
    /// Parse settings from a JSON document
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// CSS bundle name for a configuration name
    pub fn css_bundle_for(&self, name: &str) -> String {
        self.css_bundle_name.replace(SETTINGS_NAME_PLACEHOLDER, name)
    }

    /// Javascript bundle name for a configuration name
    pub fn js_bundle_for(&self, name: &str) -> String {
        self.js_bundle_name.replace(SETTINGS_NAME_PLACEHOLDER, name)
    }
}

/// Raw options for one named editor configuration
///
/// The explicit fields are internal to the registry; everything else is
/// collected into `extra` and forwarded verbatim to the CodeMirror instance.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct ConfigOptions {
    /// Current mode, automatically added to `modes`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,

    /// Enabled mode names
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub modes: Vec<String>,

    /// Addon file paths to load (already paths, no name resolution)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub addons: Vec<String>,

    /// Theme names to load
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub themes: Vec<String>,

    /// Pass-through CodeMirror parameters
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl ConfigOptions {
    /// Create empty options
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the current mode
    pub fn with_mode(mut self, mode: impl Into<String>) -> Self {
        self.mode = Some(mode.into());
        self
    }

    /// Set the enabled mode names
    pub fn with_modes(mut self, modes: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.modes = modes.into_iter().map(Into::into).collect();
        self
    }

    /// Set the addon file paths
    pub fn with_addons(mut self, addons: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.addons = addons.into_iter().map(Into::into).collect();
        self
    }

    /// Set the theme names
    pub fn with_themes(mut self, themes: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.themes = themes.into_iter().map(Into::into).collect();
        self
    }

    /// Add a pass-through CodeMirror parameter
    pub fn with_option(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }
}
