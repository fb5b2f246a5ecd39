//! Serializable output configuration.

use std::path::PathBuf;

use serde::Deserialize;

use super::{NamespaceLayout, TargetLanguage};
#[cfg(any(feature = "json", feature = "yaml", feature = "toml"))]
use crate::error::OutputError;

/// Where and how a generation run writes its artifacts.
///
/// Typically embedded in a generator's own configuration file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OutputConfig {
    /// Root directory for generated sources
    pub base_dir: PathBuf,
    /// Dotted namespace of the generated artifacts (empty for the root)
    #[serde(default)]
    pub namespace: String,
    /// Target language: "java", "cpp", "csharp", "golang", "rust"
    #[serde(default)]
    pub language: Option<TargetLanguage>,
    /// Explicit extension overriding the language's
    #[serde(default)]
    pub extension: Option<String>,
    /// Explicit layout overriding the language's
    #[serde(default)]
    pub layout: Option<NamespaceLayout>,
}

impl OutputConfig {
    /// Create a configuration for the given base directory and namespace.
    pub fn new(base_dir: impl Into<PathBuf>, namespace: impl Into<String>) -> Self {
        Self {
            base_dir: base_dir.into(),
            namespace: namespace.into(),
            language: None,
            extension: None,
            layout: None,
        }
    }

    /// Set the target language.
    pub fn with_language(mut self, language: TargetLanguage) -> Self {
        self.language = Some(language);
        self
    }

    /// Set an explicit extension.
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = Some(extension.into());
        self
    }

    /// Set an explicit layout.
    pub fn with_layout(mut self, layout: NamespaceLayout) -> Self {
        self.layout = Some(layout);
        self
    }

    /// Parse a configuration from JSON.
    #[cfg(feature = "json")]
    pub fn from_json_str(s: &str) -> Result<Self, OutputError> {
        serde_json::from_str(s).map_err(|e| OutputError::Config(e.to_string()))
    }

    /// Parse a configuration from YAML.
    #[cfg(feature = "yaml")]
    pub fn from_yaml_str(s: &str) -> Result<Self, OutputError> {
        serde_yaml::from_str(s).map_err(|e| OutputError::Config(e.to_string()))
    }

    /// Parse a configuration from TOML.
    #[cfg(feature = "toml")]
    pub fn from_toml_str(s: &str) -> Result<Self, OutputError> {
        toml::from_str(s).map_err(|e| OutputError::Config(e.to_string()))
    }
}
