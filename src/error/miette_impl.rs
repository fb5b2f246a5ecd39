//! Miette integration for pretty error reporting.

use miette::{Diagnostic, Severity};
use thiserror::Error;

use super::OutputError;

/// A diagnostic wrapper for output errors compatible with miette.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
pub struct OutputDiagnostic {
    /// The error message
    pub message: String,

    #[source]
    /// The underlying error source
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,

    #[help]
    /// Help text for the user
    pub help: Option<String>,

    #[diagnostic(severity)]
    /// Severity level
    pub severity: Severity,
}

fn help_for(error: &OutputError) -> Option<String> {
    match error {
        OutputError::InvalidArgument { .. } => {
            Some("Check the base directory, namespace and artifact name".into())
        }
        OutputError::DirectoryCreationFailed { .. } => {
            Some("Make sure no regular file sits on the namespace path".into())
        }
        OutputError::FileOpenFailed { .. } => {
            Some("Artifact names must be valid file names within the namespace directory".into())
        }
        OutputError::WriteFailed { .. } => None,
        OutputError::Config(_) => Some("Check the output configuration document".into()),
    }
}

impl From<OutputError> for OutputDiagnostic {
    fn from(e: OutputError) -> Self {
        let message = e.to_string();
        let help = help_for(&e);
        let source: Option<Box<dyn std::error::Error + Send + Sync>> = match e {
            OutputError::DirectoryCreationFailed { source, .. }
            | OutputError::FileOpenFailed { source, .. }
            | OutputError::WriteFailed { source, .. } => Some(Box::new(source)),
            OutputError::InvalidArgument { .. } | OutputError::Config(_) => None,
        };

        OutputDiagnostic {
            message,
            source,
            help,
            severity: Severity::Error,
        }
    }
}

impl From<OutputError> for miette::Report {
    fn from(e: OutputError) -> Self {
        miette::Report::new(OutputDiagnostic::from(e))
    }
}
