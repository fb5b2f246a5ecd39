//! Directory-backed output manager.

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};

use super::output::{OutputHandle, OutputManager, artifact_file_name, normalize_extension};
use crate::config::{Namespace, NamespaceLayout, TargetLanguage};
use crate::error::OutputError;

/// Validate the inputs of a manager and compute its namespace directory.
///
/// No filesystem access happens here.
pub(crate) fn resolve_output_dir(
    base_dir: &Path,
    namespace: &str,
    layout: NamespaceLayout,
) -> Result<(Namespace, PathBuf), OutputError> {
    if base_dir.as_os_str().is_empty() {
        return Err(OutputError::invalid_argument(
            "base_directory",
            "base directory must not be empty",
        ));
    }

    let namespace = Namespace::parse(namespace)?;
    let relative = namespace.relative_dir(layout);
    let output_dir = if relative.as_os_str().is_empty() {
        base_dir.to_path_buf()
    } else {
        base_dir.join(relative)
    };

    tracing::trace!(
        namespace = %namespace,
        dir = %output_dir.display(),
        "resolved namespace directory"
    );
    Ok((namespace, output_dir))
}

/// Output manager writing each artifact as a file in a namespace directory.
///
/// The directory is created, if missing, when the manager is constructed and
/// never touched again afterwards. Nothing is retained between calls to
/// [`OutputManager::new_output`].
#[derive(Debug, Clone)]
pub struct PackageOutputManager {
    id: String,
    base_dir: PathBuf,
    namespace: Namespace,
    layout: NamespaceLayout,
    extension: String,
    output_dir: PathBuf,
}

impl PackageOutputManager {
    /// Create a manager for Java-style package output under `base_dir`.
    ///
    /// Namespace `com.example` under `/out` writes into `/out/com/example`.
    pub fn create(base_dir: impl AsRef<Path>, namespace: &str) -> Result<Self, OutputError> {
        let language = TargetLanguage::Java;
        Self::create_with(
            base_dir,
            namespace,
            language.extension(),
            language.default_layout(),
        )
    }

    /// Create a manager with an explicit extension and layout.
    pub fn create_with(
        base_dir: impl AsRef<Path>,
        namespace: &str,
        extension: &str,
        layout: NamespaceLayout,
    ) -> Result<Self, OutputError> {
        let base_dir = base_dir.as_ref();
        let (namespace, output_dir) = resolve_output_dir(base_dir, namespace, layout)?;

        if !output_dir.is_dir() {
            // Tolerates the directory appearing concurrently.
            fs::create_dir_all(&output_dir)
                .map_err(|e| OutputError::directory_creation(&output_dir, e))?;
            tracing::debug!(dir = %output_dir.display(), "created output directory");
        }

        Ok(Self {
            id: output_dir.to_string_lossy().into_owned(),
            base_dir: base_dir.to_path_buf(),
            namespace,
            layout,
            extension: normalize_extension(extension),
            output_dir,
        })
    }

    /// Get the base directory.
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Get the namespace.
    pub fn namespace(&self) -> &Namespace {
        &self.namespace
    }

    /// Get the namespace layout.
    pub fn layout(&self) -> NamespaceLayout {
        self.layout
    }

    /// Get the extension appended to artifact names.
    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// Get the resolved namespace directory.
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Path the artifact `name` is written to. Performs no I/O.
    pub fn output_path(&self, name: &str) -> Result<PathBuf, OutputError> {
        let file_name = artifact_file_name(name, &self.extension)?;
        Ok(self.output_dir.join(file_name))
    }
}

impl OutputManager for PackageOutputManager {
    fn id(&self) -> &str {
        &self.id
    }

    fn new_output(&self, name: &str) -> Result<OutputHandle, OutputError> {
        let path = self.output_path(name)?;
        let file = OpenOptions::new()
            .create(true)
            .truncate(true)
            .write(true)
            .open(&path)
            .map_err(|e| OutputError::file_open(&path, e))?;

        tracing::debug!(artifact = name, path = %path.display(), "opened output");
        Ok(OutputHandle::new(
            name,
            path.to_string_lossy().into_owned(),
            Box::new(file),
        ))
    }
}
