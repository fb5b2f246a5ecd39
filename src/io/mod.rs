//! Output managers and the handles they produce.
//!
//! This module provides:
//! - `OutputManager`: Trait for "give me a writable destination for artifact X"
//! - `OutputHandle`: Scoped, buffered writer owned by the caller
//! - `PackageOutputManager`: Namespace directory on disk
//! - `InMemoryOutputManager`: In-memory implementation for testing

mod memory;
mod output;
mod package;

pub use memory::InMemoryOutputManager;
pub use output::{OutputHandle, OutputManager};
pub use package::PackageOutputManager;

// Async I/O support
#[cfg(feature = "async")]
mod async_output;
#[cfg(feature = "async")]
mod async_package;

#[cfg(feature = "async")]
pub use async_output::{AsyncOutputHandle, AsyncOutputManager};
#[cfg(feature = "async")]
pub use async_package::AsyncPackageOutputManager;
