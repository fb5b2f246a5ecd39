//! Builder for creating output managers.

use std::path::PathBuf;

use crate::config::{NamespaceLayout, OutputConfig, TargetLanguage};
use crate::error::OutputError;
use crate::io::PackageOutputManager;

#[derive(Debug, Clone)]
pub struct OutputManagerBuilder {
    base_dir: PathBuf,
    namespace: String,
    language: TargetLanguage,
    extension: Option<String>,
    layout: Option<NamespaceLayout>,
}

impl OutputManagerBuilder {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            namespace: String::new(),
            language: TargetLanguage::default(),
            extension: None,
            layout: None,
        }
    }

    /// Start from a deserialized configuration.
    pub fn from_config(config: &OutputConfig) -> Result<Self, OutputError> {
        let mut builder =
            Self::new(config.base_dir.clone()).with_namespace(config.namespace.clone());

        if let Some(language) = config.language {
            builder = builder.with_language(language);
        }
        if let Some(extension) = &config.extension {
            builder = builder.with_extension(extension.clone());
        }
        if let Some(layout) = config.layout {
            builder = builder.with_layout(layout);
        }

        Ok(builder)
    }

    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    pub fn with_language(mut self, language: TargetLanguage) -> Self {
        self.language = language;
        self
    }

    /// Override the language's extension.
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = Some(extension.into());
        self
    }

    /// Override the language's layout.
    pub fn with_layout(mut self, layout: NamespaceLayout) -> Self {
        self.layout = Some(layout);
        self
    }

    fn effective_extension(&self) -> &str {
        self.extension
            .as_deref()
            .unwrap_or_else(|| self.language.extension())
    }

    fn effective_layout(&self) -> NamespaceLayout {
        self.layout.unwrap_or_else(|| self.language.default_layout())
    }

    /// Create the namespace directory and return the manager bound to it.
    pub fn build(self) -> Result<PackageOutputManager, OutputError> {
        PackageOutputManager::create_with(
            &self.base_dir,
            &self.namespace,
            self.effective_extension(),
            self.effective_layout(),
        )
    }

    /// Async variant of [`build`](Self::build).
    #[cfg(feature = "async")]
    pub async fn build_async(self) -> Result<crate::io::AsyncPackageOutputManager, OutputError> {
        crate::io::AsyncPackageOutputManager::create_with(
            &self.base_dir,
            &self.namespace,
            self.effective_extension(),
            self.effective_layout(),
        )
        .await
    }
}
