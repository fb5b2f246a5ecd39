//! Output manager trait and the scoped handle it hands out.

use std::fmt::{self, Debug};
use std::io::{self, BufWriter, Write};
use std::path::{Component, Path};

use crate::error::OutputError;

/// Capability to obtain a writable destination for a named artifact.
///
/// Implementors decide where the bytes end up: a namespace directory on
/// disk, an in-memory buffer, etc. Callers emit one artifact per call.
pub trait OutputManager: Send + Sync + Debug {
    /// Returns an identifier for this manager.
    ///
    /// This is used for error messages and logging.
    /// Convention: the resolved directory for filesystem managers.
    fn id(&self) -> &str;

    /// Open a new output for the artifact `name`, replacing any previous
    /// output of the same name.
    fn new_output(&self, name: &str) -> Result<OutputHandle, OutputError>;
}

/// Validate an artifact name and append the extension to it.
///
/// The name is used verbatim; an empty extension appends nothing. Rooted
/// names are rejected since joining them would discard the output directory.
pub(crate) fn artifact_file_name(name: &str, extension: &str) -> Result<String, OutputError> {
    if name.is_empty() {
        return Err(OutputError::invalid_argument(
            "name",
            "artifact name must not be empty",
        ));
    }

    let rooted = Path::new(name)
        .components()
        .any(|c| matches!(c, Component::RootDir | Component::Prefix(_)));
    if rooted {
        return Err(OutputError::invalid_argument(
            "name",
            format!("artifact name `{name}` must not be an absolute path"),
        ));
    }

    if extension.is_empty() {
        Ok(name.to_string())
    } else {
        Ok(format!("{name}.{extension}"))
    }
}

/// Strip the leading dot callers sometimes include in an extension.
pub(crate) fn normalize_extension(extension: &str) -> String {
    extension.trim_start_matches('.').to_string()
}

/// A buffered writer bound to exactly one artifact.
///
/// The caller owns the handle. Dropping it flushes buffered content and
/// closes the underlying stream on every exit path; call [`finish`] to
/// observe flush failures instead of losing them.
///
/// [`finish`]: OutputHandle::finish
pub struct OutputHandle {
    name: String,
    id: String,
    writer: BufWriter<Box<dyn Write + Send>>,
}

impl OutputHandle {
    /// Wrap a raw stream for the artifact `name`.
    pub fn new(
        name: impl Into<String>,
        id: impl Into<String>,
        stream: Box<dyn Write + Send>,
    ) -> Self {
        Self {
            name: name.into(),
            id: id.into(),
            writer: BufWriter::new(stream),
        }
    }

    /// Artifact name this handle was opened for.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Identifier of the destination (file path, in-memory key).
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Flush everything written so far and release the stream.
    pub fn finish(mut self) -> Result<(), OutputError> {
        self.writer.flush().map_err(|source| OutputError::WriteFailed {
            target: self.id.clone(),
            source,
        })?;
        tracing::trace!(artifact = %self.name, target = %self.id, "output finished");
        Ok(())
    }
}

impl Debug for OutputHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OutputHandle")
            .field("name", &self.name)
            .field("id", &self.id)
            .finish_non_exhaustive()
    }
}

impl Write for OutputHandle {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.writer.write(buf)
    }

    fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
        self.writer.write_all(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}
