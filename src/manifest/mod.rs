//! CodeMirror config and assets manifest
//!
//! The registry maps configuration names to resolved records and aggregates
//! the Javascript/CSS file paths each one needs. The host registers every
//! configuration at startup, then templating code queries the registry while
//! rendering.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ManifestError, Result};
use crate::settings::ManifestSettings;

/// A registered editor configuration
///
/// Produced by [`Manifest::register`]; `Clone` is a deep copy, records never
/// share state with each other or with the settings source.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct CodeMirrorConfig {
    /// Current mode
    ///
    /// When derived from the first `modes` entry this holds the resolved file
    /// path, while an explicitly configured mode stays a raw name.
    pub mode: Option<String>,

    /// Enabled mode names
    pub modes: Vec<String>,

    /// Addon file paths to load
    pub addons: Vec<String>,

    /// Theme names to load
    pub themes: Vec<String>,

    /// CSS bundle name to fill
    pub css_bundle_name: Option<String>,

    /// Javascript bundle name to fill
    pub js_bundle_name: Option<String>,

    /// Pass-through CodeMirror parameters
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// CodeMirror config and assets manifest registry
#[derive(Debug, Clone, Default)]
pub struct Manifest {
    /// External configuration source
    settings: ManifestSettings,

    /// Registered configurations, in registration order
    registry: IndexMap<String, CodeMirrorConfig>,
}

impl Manifest {
    /// Create an empty registry over the given settings
    pub fn new(settings: ManifestSettings) -> Self {
        Self {
            settings,
            registry: IndexMap::new(),
        }
    }

    /// The settings source this registry was built from
    pub fn settings(&self) -> &ManifestSettings {
        &self.settings
    }

    /// Whether a configuration name has been registered
    pub fn is_registered(&self, name: &str) -> bool {
        self.registry.contains_key(name)
    }

    /// Register configuration for an editor instance
    ///
    /// `name` must exist in the settings config map. Any prior record for the
    /// same name is overwritten. Returns a copy of the stored record.
    pub fn register(&mut self, name: &str) -> Result<CodeMirrorConfig> {
        let options = self
            .settings
            .configs
            .get(name)
            .cloned()
            .ok_or_else(|| ManifestError::UnknownConfig(name.to_string()))?;

        let mut config = CodeMirrorConfig {
            mode: options.mode,
            modes: options.modes,
            addons: options.addons,
            themes: options.themes,
            css_bundle_name: Some(self.settings.css_bundle_for(name)),
            js_bundle_name: Some(self.settings.js_bundle_for(name)),
            extra: options.extra,
        };

        // If mode is empty but modes is not, use the first modes item as
        // current mode (this is the CodeMirror behavior, made explicit here).
        // The derived value is the resolved file path while `modes` keeps raw
        // names. Else if mode is set, make sure it leads the modes list.
        let mode_is_set = config.mode.as_deref().is_some_and(|m| !m.is_empty());
        if !mode_is_set && !config.modes.is_empty() {
            config.mode = Some(self.resolve_mode(&config.modes[0])?.to_string());
        } else if let Some(mode) = config.mode.clone() {
            if !config.modes.contains(&mode) {
                config.modes.insert(0, mode);
            }
        }

        debug!("Registered CodeMirror config '{}'", name);
        self.registry.insert(name.to_string(), config.clone());

        Ok(config)
    }

    /// Register every configuration from the settings config map
    ///
    /// Runs in settings order; the first failure aborts the whole call.
    pub fn autoregister(&mut self) -> Result<()> {
        let names: Vec<String> = self.settings.configs.keys().cloned().collect();
        for name in &names {
            self.register(name)?;
        }
        debug!("Autoregistered {} CodeMirror configs", names.len());
        Ok(())
    }

    /// Resolve a mode name to its file path from the settings mode map
    pub fn resolve_mode(&self, name: &str) -> Result<&str> {
        self.settings
            .modes
            .get(name)
            .map(String::as_str)
            .ok_or_else(|| ManifestError::UnknownMode(name.to_string()))
    }

    /// Resolve a theme name to its file path from the settings theme map
    pub fn resolve_theme(&self, name: &str) -> Result<&str> {
        self.settings
            .themes
            .get(name)
            .map(String::as_str)
            .ok_or_else(|| ManifestError::UnknownTheme(name.to_string()))
    }

    /// Return registered configurations
    ///
    /// With a `name`, the result holds just that configuration; without one it
    /// covers every registered configuration, in registration order. The
    /// returned map borrows the stored records.
    pub fn get_configs(&self, name: Option<&str>) -> Result<IndexMap<&str, &CodeMirrorConfig>> {
        match name {
            Some(name) => {
                let (key, config) = self
                    .registry
                    .get_key_value(name)
                    .ok_or_else(|| ManifestError::NotRegistered(name.to_string()))?;
                Ok(IndexMap::from_iter([(key.as_str(), config)]))
            }
            None => Ok(self
                .registry
                .iter()
                .map(|(name, config)| (name.as_str(), config))
                .collect()),
        }
    }

    /// Return a copy of the registered configuration for the given name
    pub fn get_config(&self, name: &str) -> Result<CodeMirrorConfig> {
        self.registry
            .get(name)
            .cloned()
            .ok_or_else(|| ManifestError::NotRegistered(name.to_string()))
    }

    /// Return the CodeMirror parameters for the given config name
    ///
    /// This is the registered record without the internal-only fields, the
    /// subset forwarded verbatim to the editor instance. An empty mode is not
    /// exposed.
    pub fn get_codemirror_config(
        &self,
        name: &str,
    ) -> Result<serde_json::Map<String, serde_json::Value>> {
        let config = self.get_config(name)?;

        let mut parameters = config.extra;
        if let Some(mode) = config.mode {
            if !mode.is_empty() {
                parameters.insert("mode".to_string(), serde_json::Value::String(mode));
            }
        }

        Ok(parameters)
    }

    /// Return all needed Javascript file paths for the given config name, or
    /// for every registered config when no name is given
    ///
    /// The base Javascript paths come first, then addon paths from every
    /// selected config, then resolved mode paths. Paths are de-duplicated,
    /// first occurrence wins. An unknown mode name fails the whole call.
    pub fn js(&self, name: Option<&str>) -> Result<Vec<String>> {
        let mut filepaths = self.settings.base_js.clone();

        let configs = self.get_configs(name)?;

        // Addons first
        for opts in configs.values() {
            for item in &opts.addons {
                if !filepaths.contains(item) {
                    filepaths.push(item.clone());
                }
            }
        }

        // Then modes
        for opts in configs.values() {
            for item in &opts.modes {
                let resolved = self.resolve_mode(item)?;
                if !filepaths.iter().any(|path| path == resolved) {
                    filepaths.push(resolved.to_string());
                }
            }
        }

        Ok(filepaths)
    }

    /// Return all needed CSS file paths for the given config name, or for
    /// every registered config when no name is given
    ///
    /// The base CSS paths come first, then resolved theme paths, with the same
    /// de-duplication and failure behavior as [`Manifest::js`].
    pub fn css(&self, name: Option<&str>) -> Result<Vec<String>> {
        let mut filepaths = self.settings.base_css.clone();

        let configs = self.get_configs(name)?;

        for opts in configs.values() {
            for item in &opts.themes {
                let resolved = self.resolve_theme(item)?;
                if !filepaths.iter().any(|path| path == resolved) {
                    filepaths.push(resolved.to_string());
                }
            }
        }

        Ok(filepaths)
    }
}
