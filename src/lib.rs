//! # genout
//!
//! Output destinations for source-code generators.
//!
//! ## Overview
//!
//! A code generator produces one artifact (a class, a header, a module) per
//! generated unit, grouped under a dotted namespace. genout maps that
//! namespace onto a directory below a base directory, creates it once, and
//! hands out one writable destination per artifact:
//!
//! - **Namespace mapping**: `com.example` under `/out` becomes `/out/com/example`
//! - **Extension policy**: fixed per target language (`Widget` -> `Widget.java`)
//! - **Scoped handles**: each output flushes and closes when dropped
//! - **Pluggable sinks**: implement `OutputManager` for other destinations;
//!   `InMemoryOutputManager` is provided for tests
//! - **Sync and Async**: both synchronous and asynchronous managers
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::io::Write;
//!
//! use genout::{OutputManager, PackageOutputManager};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let manager = PackageOutputManager::create("generated", "com.example")?;
//!
//!     let mut out = manager.new_output("Widget")?;
//!     writeln!(out, "package com.example;")?;
//!     out.finish()?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - `json` / `yaml` / `toml` - Parse `OutputConfig` from these formats
//! - `async` - Async output managers with Tokio
//! - `miette` - Pretty error reporting with miette
//! - `sarge` - The `genout` command-line tool
//!
//! ## Semantics
//!
//! - The namespace directory is created, recursively, only when a manager is
//!   constructed. An existing directory is accepted as is, without checking
//!   that it is empty or writable.
//! - `new_output` opens `dir/<name>.<ext>` creating or truncating it; calling
//!   it twice for the same name replaces the first output.
//! - Managers keep no state between calls and take no locks. Writing the same
//!   artifact from several threads at once is left to the caller.

pub mod builder;
pub mod cli;
pub mod config;
pub mod error;
pub mod io;

pub use builder::OutputManagerBuilder;
pub use config::{Namespace, NamespaceLayout, OutputConfig, TargetLanguage};
pub use error::OutputError;
pub use io::{InMemoryOutputManager, OutputHandle, OutputManager, PackageOutputManager};

// Async re-exports
#[cfg(feature = "async")]
pub use io::{AsyncOutputHandle, AsyncOutputManager, AsyncPackageOutputManager};

/// Build a directory-backed output manager from an `OutputConfig`.
pub fn build_manager_from_config(
    config: &OutputConfig,
) -> Result<PackageOutputManager, OutputError> {
    OutputManagerBuilder::from_config(config)?.build()
}

/// Build a directory-backed output manager from an `OutputConfig`, allowing the
/// caller to further customize the builder before it is built.
pub fn build_manager_from_config_with<F>(
    config: &OutputConfig,
    customize: F,
) -> Result<PackageOutputManager, OutputError>
where
    F: FnOnce(OutputManagerBuilder) -> OutputManagerBuilder,
{
    let builder = OutputManagerBuilder::from_config(config)?;
    customize(builder).build()
}

// Miette re-exports
#[cfg(feature = "miette")]
pub use error::OutputDiagnostic;
