use anyhow::{Result, anyhow};
use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::models::{EntryMetadata, FsEntry, LinkTarget};

use super::FileSystem;

#[derive(Clone, Debug)]
enum Response {
    Ok(Vec<FsEntry>),
    Err(String),
}

#[derive(Clone, Default)]
pub struct MockFileSystem {
    inner: Arc<Mutex<Inner>>,
}

#[derive(Default)]
struct Inner {
    responses: HashMap<PathBuf, Response>,
    hidden_errors: HashSet<PathBuf>,
    metadata: HashMap<PathBuf, EntryMetadata>,
    links: HashMap<PathBuf, LinkTarget>,
    calls: Vec<PathBuf>,
    metadata_calls: Vec<PathBuf>,
}

impl MockFileSystem {
    pub fn set_dir_entries(&self, dir: impl Into<PathBuf>, entries: Vec<FsEntry>) {
        let mut inner = self.inner.lock().expect("mock fs lock");
        inner.responses.insert(dir.into(), Response::Ok(entries));
    }

    pub fn set_error(&self, dir: impl Into<PathBuf>, message: impl Into<String>) {
        let mut inner = self.inner.lock().expect("mock fs lock");
        inner
            .responses
            .insert(dir.into(), Response::Err(message.into()));
    }

    pub fn set_hidden_error(&self, path: impl Into<PathBuf>) {
        let mut inner = self.inner.lock().expect("mock fs lock");
        inner.hidden_errors.insert(path.into());
    }

    pub fn set_metadata(&self, path: impl Into<PathBuf>, metadata: EntryMetadata) {
        let mut inner = self.inner.lock().expect("mock fs lock");
        inner.metadata.insert(path.into(), metadata);
    }

    pub fn set_link(&self, path: impl Into<PathBuf>, target: LinkTarget) {
        let mut inner = self.inner.lock().expect("mock fs lock");
        inner.links.insert(path.into(), target);
    }

    pub fn calls(&self) -> Vec<PathBuf> {
        let inner = self.inner.lock().expect("mock fs lock");
        inner.calls.clone()
    }

    pub fn metadata_calls(&self) -> Vec<PathBuf> {
        let inner = self.inner.lock().expect("mock fs lock");
        inner.metadata_calls.clone()
    }
}

#[async_trait]
impl FileSystem for MockFileSystem {
    async fn is_dir(&self, path: &Path) -> bool {
        let inner = self.inner.lock().expect("mock fs lock");
        inner.responses.contains_key(path)
    }

    async fn read_dir(&self, dir: &Path) -> Result<Vec<FsEntry>> {
        let mut inner = self.inner.lock().expect("mock fs lock");
        inner.calls.push(dir.to_path_buf());

        match inner.responses.get(dir) {
            Some(Response::Ok(entries)) => Ok(entries.clone()),
            Some(Response::Err(message)) => Err(anyhow!("{message}")),
            None => Err(anyhow!("no mock response for {}", dir.display())),
        }
    }

    async fn is_hidden(&self, entry: &FsEntry) -> Result<bool> {
        let inner = self.inner.lock().expect("mock fs lock");
        if inner.hidden_errors.contains(&entry.path) {
            return Err(anyhow!("cannot stat {}", entry.path.display()));
        }
        Ok(entry.name.starts_with('.'))
    }

    async fn metadata(&self, path: &Path) -> Result<EntryMetadata> {
        let mut inner = self.inner.lock().expect("mock fs lock");
        inner.metadata_calls.push(path.to_path_buf());

        inner
            .metadata
            .get(path)
            .cloned()
            .ok_or_else(|| anyhow!("Permission denied"))
    }

    async fn resolve_link(&self, path: &Path) -> Result<LinkTarget> {
        let inner = self.inner.lock().expect("mock fs lock");
        inner
            .links
            .get(path)
            .cloned()
            .ok_or_else(|| anyhow!("no mock link for {}", path.display()))
    }
}
