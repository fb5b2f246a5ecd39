//! Async directory-backed output manager.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs::OpenOptions;

use super::async_output::{AsyncOutputHandle, AsyncOutputManager};
use super::output::{artifact_file_name, normalize_extension};
use super::package::resolve_output_dir;
use crate::config::{Namespace, NamespaceLayout, TargetLanguage};
use crate::error::OutputError;

/// Async counterpart of [`PackageOutputManager`](super::PackageOutputManager).
#[derive(Debug, Clone)]
pub struct AsyncPackageOutputManager {
    id: String,
    namespace: Namespace,
    extension: String,
    output_dir: PathBuf,
}

impl AsyncPackageOutputManager {
    /// Create a manager for Java-style package output under `base_dir`.
    pub async fn create(base_dir: impl AsRef<Path>, namespace: &str) -> Result<Self, OutputError> {
        let language = TargetLanguage::Java;
        Self::create_with(
            base_dir,
            namespace,
            language.extension(),
            language.default_layout(),
        )
        .await
    }

    /// Create a manager with an explicit extension and layout.
    pub async fn create_with(
        base_dir: impl AsRef<Path>,
        namespace: &str,
        extension: &str,
        layout: NamespaceLayout,
    ) -> Result<Self, OutputError> {
        let (namespace, output_dir) = resolve_output_dir(base_dir.as_ref(), namespace, layout)?;

        tokio::fs::create_dir_all(&output_dir)
            .await
            .map_err(|e| OutputError::directory_creation(&output_dir, e))?;
        tracing::debug!(dir = %output_dir.display(), "ensured output directory");

        Ok(Self {
            id: output_dir.to_string_lossy().into_owned(),
            namespace,
            extension: normalize_extension(extension),
            output_dir,
        })
    }

    /// Get the namespace.
    pub fn namespace(&self) -> &Namespace {
        &self.namespace
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

#[async_trait]
impl AsyncOutputManager for AsyncPackageOutputManager {
    fn id(&self) -> &str {
        &self.id
    }

    async fn new_output(&self, name: &str) -> Result<AsyncOutputHandle, OutputError> {
        let path = self.output_path(name)?;
        let file = OpenOptions::new()
            .create(true)
            .truncate(true)
            .write(true)
            .open(&path)
            .await
            .map_err(|e| OutputError::file_open(&path, e))?;

        tracing::debug!(artifact = name, path = %path.display(), "opened async output");
        Ok(AsyncOutputHandle::new(
            name,
            path.to_string_lossy().into_owned(),
            Box::new(file),
        ))
    }
}
