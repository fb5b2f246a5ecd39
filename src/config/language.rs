//! Target language bindings and their file extension policy.

use std::fmt;

use serde::Deserialize;

use super::NamespaceLayout;
use crate::error::OutputError;

/// Target language of the generator, fixing the extension of every artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetLanguage {
    #[default]
    Java,
    #[serde(alias = "c++")]
    Cpp,
    #[serde(alias = "c#", alias = "cs")]
    CSharp,
    #[serde(alias = "go")]
    Golang,
    #[serde(alias = "rs")]
    Rust,
}

impl TargetLanguage {
    /// All supported languages.
    pub const ALL: [TargetLanguage; 5] = [
        TargetLanguage::Java,
        TargetLanguage::Cpp,
        TargetLanguage::CSharp,
        TargetLanguage::Golang,
        TargetLanguage::Rust,
    ];

    /// File extension (without the leading dot) appended to artifact names.
    pub fn extension(self) -> &'static str {
        match self {
            TargetLanguage::Java => "java",
            TargetLanguage::Cpp => "h",
            TargetLanguage::CSharp => "cs",
            TargetLanguage::Golang => "go",
            TargetLanguage::Rust => "rs",
        }
    }

    /// How namespaces map onto directories for this language.
    ///
    /// C++ headers live in one directory per namespace; everything else nests.
    pub fn default_layout(self) -> NamespaceLayout {
        match self {
            TargetLanguage::Cpp => NamespaceLayout::Flattened,
            _ => NamespaceLayout::Nested,
        }
    }

    /// Parse a language from a string.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "java" => Some(TargetLanguage::Java),
            "cpp" | "c++" => Some(TargetLanguage::Cpp),
            "csharp" | "c#" | "cs" => Some(TargetLanguage::CSharp),
            "golang" | "go" => Some(TargetLanguage::Golang),
            "rust" | "rs" => Some(TargetLanguage::Rust),
            _ => None,
        }
    }

    /// Like [`from_str`](Self::from_str), failing with `InvalidArgument`.
    pub fn parse(s: &str) -> Result<Self, OutputError> {
        Self::from_str(s).ok_or_else(|| {
            OutputError::invalid_argument("language", format!("unknown target language `{s}`"))
        })
    }
}

impl fmt::Display for TargetLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TargetLanguage::Java => write!(f, "java"),
            TargetLanguage::Cpp => write!(f, "cpp"),
            TargetLanguage::CSharp => write!(f, "csharp"),
            TargetLanguage::Golang => write!(f, "golang"),
            TargetLanguage::Rust => write!(f, "rust"),
        }
    }
}
