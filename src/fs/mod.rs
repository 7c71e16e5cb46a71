mod real;

#[cfg(test)]
mod mock;

pub use real::RealFileSystem;

#[cfg(test)]
pub use mock::MockFileSystem;

use anyhow::Result;
use async_trait::async_trait;
use std::path::Path;

use crate::models::{EntryMetadata, FsEntry, LinkTarget};

#[async_trait]
pub trait FileSystem: Send + Sync {
    /// Whether `path` is a directory, following symlinks. Missing paths are not.
    async fn is_dir(&self, path: &Path) -> bool;

    /// List `dir` without following symlinks in the entries.
    async fn read_dir(&self, dir: &Path) -> Result<Vec<FsEntry>>;

    async fn is_hidden(&self, entry: &FsEntry) -> Result<bool>;

    async fn metadata(&self, path: &Path) -> Result<EntryMetadata>;

    async fn resolve_link(&self, path: &Path) -> Result<LinkTarget>;
}
