//! CLI integration helpers for genout.
//!
//! Converts generator command-line arguments into an output manager.
//!
//! # Example with clap
//!
//! ```rust,ignore
//! use clap::Parser;
//! use genout::cli::OutputArgs;
//!
//! #[derive(Parser)]
//! struct Cli {
//!     #[clap(flatten)]
//!     output: OutputArgs,
//! }
//!
//! fn main() {
//!     let cli = Cli::parse();
//!     let manager = cli.output.to_builder()?.build()?;
//! }
//! ```

use crate::builder::OutputManagerBuilder;
use crate::config::{NamespaceLayout, TargetLanguage};
use crate::error::OutputError;

#[cfg(feature = "sarge")]
mod sarge;

#[cfg(feature = "sarge")]
pub use self::sarge::UnknownLanguage;

/// Base directory used when none is given on the command line.
pub const DEFAULT_BASE_DIR: &str = ".";

/// Common output arguments for code generator CLIs.
#[derive(Debug, Clone, Default)]
pub struct OutputArgs {
    /// Output base directory.
    pub base_dir: Option<String>,
    /// Dotted namespace of the generated artifacts.
    pub namespace: String,
    /// Target language name.
    pub language: Option<String>,
    /// Explicit extension (overrides the language's).
    pub extension: Option<String>,
    /// Write every namespace into a single flattened directory.
    pub flatten: bool,
}

impl OutputArgs {
    /// Create new empty output arguments.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base directory.
    pub fn with_base_dir(mut self, dir: impl Into<String>) -> Self {
        self.base_dir = Some(dir.into());
        self
    }

    /// Set the namespace.
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    /// Set the target language.
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Set an explicit extension.
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = Some(extension.into());
        self
    }

    /// Enable the flattened layout.
    pub fn with_flatten(mut self) -> Self {
        self.flatten = true;
        self
    }

    /// Parse the language string into a TargetLanguage.
    pub fn language_kind(&self) -> Option<TargetLanguage> {
        self.language
            .as_ref()
            .and_then(|s| TargetLanguage::from_str(s))
    }

    /// Turn the arguments into a builder.
    ///
    /// Fails with `InvalidArgument` for an unknown language name.
    pub fn to_builder(&self) -> Result<OutputManagerBuilder, OutputError> {
        let base_dir = self.base_dir.as_deref().unwrap_or(DEFAULT_BASE_DIR);
        let mut builder =
            OutputManagerBuilder::new(base_dir).with_namespace(self.namespace.clone());

        if let Some(raw) = &self.language {
            builder = builder.with_language(TargetLanguage::parse(raw)?);
        }
        if let Some(extension) = &self.extension {
            builder = builder.with_extension(extension.clone());
        }
        if self.flatten {
            builder = builder.with_layout(NamespaceLayout::Flattened);
        }

        Ok(builder)
    }
}
