//! Async output manager trait and handle.

use std::fmt::{self, Debug};
use std::io;
use std::pin::Pin;
use std::task::{Context, Poll};

use async_trait::async_trait;
use tokio::io::{AsyncWrite, AsyncWriteExt};

use crate::error::OutputError;

/// Trait for asynchronous output managers.
#[async_trait]
pub trait AsyncOutputManager: Send + Sync + Debug {
    /// Returns an identifier for this manager.
    fn id(&self) -> &str;

    /// Open a new output for the artifact `name`, truncating any previous one.
    async fn new_output(&self, name: &str) -> Result<AsyncOutputHandle, OutputError>;
}

/// An async writer bound to exactly one artifact.
///
/// Writes are not buffered by the handle. Await [`finish`] to flush and shut
/// the stream down before dropping it; a dropped file still closes, but any
/// write still in flight is not reported.
///
/// [`finish`]: AsyncOutputHandle::finish
pub struct AsyncOutputHandle {
    name: String,
    id: String,
    stream: Box<dyn AsyncWrite + Unpin + Send>,
}

impl AsyncOutputHandle {
    /// Wrap a raw async stream for the artifact `name`.
    pub fn new(
        name: impl Into<String>,
        id: impl Into<String>,
        stream: Box<dyn AsyncWrite + Unpin + Send>,
    ) -> Self {
        Self {
            name: name.into(),
            id: id.into(),
            stream,
        }
    }

    /// Artifact name this handle was opened for.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Identifier of the destination.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Flush everything written so far and shut the stream down.
    pub async fn finish(mut self) -> Result<(), OutputError> {
        let result = match self.stream.flush().await {
            Ok(()) => self.stream.shutdown().await,
            Err(e) => Err(e),
        };
        result.map_err(|source| OutputError::WriteFailed {
            target: self.id.clone(),
            source,
        })
    }
}

impl Debug for AsyncOutputHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AsyncOutputHandle")
            .field("name", &self.name)
            .field("id", &self.id)
            .finish_non_exhaustive()
    }
}

impl AsyncWrite for AsyncOutputHandle {
    fn poll_write(
        mut self: Pin<&mut Self>,
        cx: &mut Context<'_>,
        buf: &[u8],
    ) -> Poll<io::Result<usize>> {
        Pin::new(&mut self.stream).poll_write(cx, buf)
    }

    fn poll_flush(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<io::Result<()>> {
        Pin::new(&mut self.stream).poll_flush(cx)
    }

    fn poll_shutdown(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<io::Result<()>> {
        Pin::new(&mut self.stream).poll_shutdown(cx)
    }
}
