//! Configuration types for output destinations.
//!
//! This module provides:
//! - `TargetLanguage`: Extension policy of a generator's language binding
//! - `Namespace` and `NamespaceLayout`: Mapping of dotted namespaces onto directories
//! - `OutputConfig`: Deserializable description of a generation run's output

mod language;
mod namespace;
mod output;

pub use language::TargetLanguage;
pub use namespace::{NAMESPACE_SEPARATOR, Namespace, NamespaceLayout};
pub use output::OutputConfig;
