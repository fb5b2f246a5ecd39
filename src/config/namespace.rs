//! Namespace parsing and its mapping onto directories.

use std::fmt;
use std::path::{Component, Path, PathBuf};

use serde::Deserialize;

use crate::error::OutputError;

/// Separator between namespace segments.
pub const NAMESPACE_SEPARATOR: char = '.';

/// How the segments of a namespace become directories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NamespaceLayout {
    /// `a.b.c` becomes `a/b/c`
    #[default]
    Nested,
    /// `a.b.c` becomes the single directory `a_b_c`
    Flattened,
}

impl NamespaceLayout {
    /// Parse a layout from a string.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "nested" => Some(NamespaceLayout::Nested),
            "flattened" | "flat" => Some(NamespaceLayout::Flattened),
            _ => None,
        }
    }
}

/// A dotted identifier grouping generated artifacts.
///
/// The empty namespace is valid and denotes the root of the base directory.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Namespace {
    raw: String,
}

impl Namespace {
    /// Parse a namespace, rejecting empty segments such as `a..b` or `.a`
    /// and segments that would leave the base directory, such as `/tmp`.
    pub fn parse(raw: &str) -> Result<Self, OutputError> {
        if raw.is_empty() {
            return Ok(Self::default());
        }

        for segment in raw.split(NAMESPACE_SEPARATOR) {
            if segment.is_empty() {
                return Err(OutputError::invalid_argument(
                    "namespace",
                    format!("`{raw}` contains an empty segment"),
                ));
            }
            if !is_relative_segment(segment) {
                return Err(OutputError::invalid_argument(
                    "namespace",
                    format!("segment `{segment}` of `{raw}` is not a relative path"),
                ));
            }
        }

        Ok(Self {
            raw: raw.to_string(),
        })
    }

    /// The namespace as given.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Check if this is the root namespace.
    pub fn is_root(&self) -> bool {
        self.raw.is_empty()
    }

    /// Iterate over the segments, in order.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.raw
            .split(NAMESPACE_SEPARATOR)
            .filter(|segment| !segment.is_empty())
    }

    /// Path of the namespace directory relative to the base directory.
    pub fn relative_dir(&self, layout: NamespaceLayout) -> PathBuf {
        match layout {
            NamespaceLayout::Nested => self.segments().collect(),
            NamespaceLayout::Flattened if self.is_root() => PathBuf::new(),
            NamespaceLayout::Flattened => PathBuf::from(self.raw.replace(NAMESPACE_SEPARATOR, "_")),
        }
    }
}

/// Only plain names stay below the base directory once joined.
fn is_relative_segment(segment: &str) -> bool {
    Path::new(segment)
        .components()
        .all(|component| matches!(component, Component::Normal(_)))
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}
