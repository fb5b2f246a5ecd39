//! In-memory output manager for testing generators without touching disk.

use std::collections::BTreeMap;
use std::io::{self, Write};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use super::output::{OutputHandle, OutputManager, artifact_file_name, normalize_extension};
use crate::error::OutputError;

type Buffer = Arc<Mutex<Vec<u8>>>;

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// In-memory output manager.
///
/// Outputs are keyed by file name (artifact name plus extension). Clones
/// share the same storage.
#[derive(Debug, Clone)]
pub struct InMemoryOutputManager {
    id: String,
    extension: String,
    outputs: Arc<Mutex<BTreeMap<String, Buffer>>>,
}

impl InMemoryOutputManager {
    /// Create a new empty manager appending `extension` to artifact names.
    pub fn new(id: impl Into<String>, extension: &str) -> Self {
        Self {
            id: id.into(),
            extension: normalize_extension(extension),
            outputs: Arc::new(Mutex::new(BTreeMap::new())),
        }
    }

    /// Get the contents written for the artifact `name`.
    pub fn contents(&self, name: &str) -> Option<Vec<u8>> {
        let file_name = artifact_file_name(name, &self.extension).ok()?;
        let outputs = lock(&self.outputs);
        outputs.get(&file_name).map(|buf| lock(buf).clone())
    }

    /// Get the contents written for the artifact `name` as a string.
    pub fn contents_string(&self, name: &str) -> Option<String> {
        self.contents(name)
            .map(|bytes| String::from_utf8_lossy(&bytes).into_owned())
    }

    /// File names of every output opened so far, sorted.
    pub fn file_names(&self) -> Vec<String> {
        lock(&self.outputs).keys().cloned().collect()
    }

    /// Number of outputs opened so far.
    pub fn len(&self) -> usize {
        lock(&self.outputs).len()
    }

    /// Check if no output has been opened.
    pub fn is_empty(&self) -> bool {
        lock(&self.outputs).is_empty()
    }

    /// Drop every stored output.
    pub fn clear(&self) {
        lock(&self.outputs).clear();
    }
}

impl OutputManager for InMemoryOutputManager {
    fn id(&self) -> &str {
        &self.id
    }

    fn new_output(&self, name: &str) -> Result<OutputHandle, OutputError> {
        let file_name = artifact_file_name(name, &self.extension)?;
        let buf: Buffer = Arc::new(Mutex::new(Vec::new()));
        // Overwrite: a fresh buffer replaces any previous one.
        lock(&self.outputs).insert(file_name.clone(), Arc::clone(&buf));

        Ok(OutputHandle::new(
            name,
            format!("{}:{file_name}", self.id),
            Box::new(InMemoryWriteHandle { buf }),
        ))
    }
}

/// Write handle for an in-memory output.
struct InMemoryWriteHandle {
    buf: Buffer,
}

impl Write for InMemoryWriteHandle {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        lock(&self.buf).extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
