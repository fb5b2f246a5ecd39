use sarge::ArgumentType;
use thiserror::Error;

use crate::config::TargetLanguage;

/// A `--lang` value that names no supported language.
#[derive(Debug, Error)]
#[error("unknown target language `{0}`")]
pub struct UnknownLanguage(pub String);

impl ArgumentType for TargetLanguage {
    type Error = UnknownLanguage;

    fn from_value(val: Option<&str>) -> sarge::ArgResult<Self> {
        let raw = val?.trim();
        Some(TargetLanguage::from_str(raw).ok_or_else(|| UnknownLanguage(raw.to_string())))
    }

    fn default_value() -> Option<Self> {
        Some(TargetLanguage::default())
    }
}
