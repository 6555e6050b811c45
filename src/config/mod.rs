//! Resolver settings and the persisted selection session.
//!
//! ## Data Flow
//!
//! ```text
//! settings.json / settings.yaml → Settings { resolver, session }
//!                                     │            │
//!                                     ▼            ▼
//!                                 Resolver     EntityFilters
//! ```

mod session;

pub use session::Session;

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::ResolverError;
use crate::resolve::DEFAULT_PLACEHOLDER;

/// Tuning for [`crate::resolver::Resolver`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Label used when nothing is known about a parent.
    pub placeholder: String,

    /// Fall back to matching parent names against the store when no id
    /// source is present.
    pub name_fallback: bool,

    /// Repair chains against the store before building lineage labels.
    pub repair_chains: bool,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            name_fallback: false,
            repair_chains: true,
        }
    }
}

impl ResolverConfig {
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn with_name_fallback(mut self, enabled: bool) -> Self {
        self.name_fallback = enabled;
        self
    }

    pub fn with_repair_chains(mut self, enabled: bool) -> Self {
        self.repair_chains = enabled;
        self
    }
}

/// Everything persisted between runs.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub resolver: ResolverConfig,
    pub session: Session,
}

/// On-disk encodings of [`Settings`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum SettingsFormat {
    Json,
    #[cfg_attr(not(feature = "yaml"), allow(dead_code))]
    Yaml,
}

impl SettingsFormat {
    fn detect(path: &Path) -> Result<Self, ResolverError> {
        let ext = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_lowercase)
            .unwrap_or_default();
        match ext.as_str() {
            "json" => Ok(Self::Json),
            #[cfg(feature = "yaml")]
            "yaml" | "yml" => Ok(Self::Yaml),
            _ => Err(ResolverError::unsupported(format!(
                "settings file '{}'",
                path.display()
            ))),
        }
    }
}

impl Settings {
    /// Parse settings from JSON text.
    pub fn from_json(text: &str) -> Result<Self, ResolverError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Parse settings from YAML text.
    #[cfg(feature = "yaml")]
    pub fn from_yaml(text: &str) -> Result<Self, ResolverError> {
        Ok(serde_yaml::from_str(text)?)
    }

    /// Read settings, choosing the format by file extension.
    pub fn read_from_file(path: impl AsRef<Path>) -> Result<Self, ResolverError> {
        let path = path.as_ref();
        let format = SettingsFormat::detect(path)?;
        let content = std::fs::read_to_string(path)?;
        let settings = match format {
            SettingsFormat::Json => Self::from_json(&content)?,
            #[cfg(feature = "yaml")]
            SettingsFormat::Yaml => Self::from_yaml(&content)?,
            #[cfg(not(feature = "yaml"))]
            SettingsFormat::Yaml => return Err(ResolverError::unsupported("yaml")),
        };
        tracing::debug!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Write settings, choosing the format by file extension.
    pub fn write_to_file(&self, path: impl AsRef<Path>) -> Result<(), ResolverError> {
        let path = path.as_ref();
        let content = match SettingsFormat::detect(path)? {
            SettingsFormat::Json => serde_json::to_string_pretty(self)?,
            #[cfg(feature = "yaml")]
            SettingsFormat::Yaml => serde_yaml::to_string(self)?,
            #[cfg(not(feature = "yaml"))]
            SettingsFormat::Yaml => return Err(ResolverError::unsupported("yaml")),
        };
        std::fs::write(path, content)?;
        Ok(())
    }
}
