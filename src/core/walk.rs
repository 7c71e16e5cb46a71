use std::path::Path;

use tracing::{debug, warn};

use crate::fs::FileSystem;
use crate::models::{DirTree, EntryKind, FsEntry, Setting, Settings, TreeNode};

/// Configuration options for directory traversal.
#[derive(Debug, Clone, Default)]
pub struct WalkOptions {
    /// Maximum depth to traverse (None means unlimited)
    pub max_depth: Option<usize>,
    pub settings: Settings,
}

impl WalkOptions {
    fn descends_below(&self, depth: usize) -> bool {
        self.max_depth.is_none_or(|max| depth + 1 < max)
    }
}

/// Walk a directory tree with the given options, starting at depth 0.
pub async fn walk_dir<F: FileSystem>(fs: &F, dir: &Path, options: &WalkOptions) -> DirTree {
    walk_dir_internal(fs, dir, options, 0).await
}

async fn walk_dir_internal<F: FileSystem>(
    fs: &F,
    dir: &Path,
    options: &WalkOptions,
    current_depth: usize,
) -> DirTree {
    debug!(dir = %dir.display(), depth = current_depth, "reading directory");

    let entries = match fs.read_dir(dir).await {
        Ok(entries) => entries,
        Err(err) => {
            return DirTree {
                error: Some(err.to_string()),
                children: Vec::new(),
            };
        }
    };

    let mut visible = Vec::with_capacity(entries.len());
    for entry in entries {
        if options.settings.contains(Setting::ShowHidden) || !is_hidden(fs, &entry).await {
            visible.push(entry);
        }
    }

    visible.sort_by(|a, b| a.path.cmp(&b.path));

    let mut children = Vec::with_capacity(visible.len());
    for entry in visible {
        let mut node = TreeNode::new(entry.name.clone(), entry.kind);

        if options.settings.wants_metadata() {
            match fs.metadata(&entry.path).await {
                Ok(metadata) => node.metadata = Some(metadata),
                Err(err) => warn!(path = %entry.path.display(), "cannot read metadata: {err}"),
            }
        }

        match entry.kind {
            // Never followed, even when the target is a directory within the limit.
            EntryKind::Symlink => match fs.resolve_link(&entry.path).await {
                Ok(target) => {
                    node.is_dir = target.is_dir;
                    node.link = Some(target);
                }
                Err(err) => warn!(path = %entry.path.display(), "cannot resolve link: {err}"),
            },
            EntryKind::Directory if options.descends_below(current_depth) => {
                let subtree =
                    Box::pin(walk_dir_internal(fs, &entry.path, options, current_depth + 1))
                        .await;
                if let Some(error) = subtree.error.as_deref() {
                    warn!(dir = %entry.path.display(), "cannot open directory: {error}");
                }
                node.error = subtree.error;
                node.children = subtree.children;
            }
            EntryKind::Directory | EntryKind::File | EntryKind::Other => {}
        }

        children.push(node);
    }

    DirTree {
        error: None,
        children,
    }
}

/// A failing hidden check excludes the entry.
async fn is_hidden<F: FileSystem>(fs: &F, entry: &FsEntry) -> bool {
    match fs.is_hidden(entry).await {
        Ok(hidden) => hidden,
        Err(err) => {
            debug!(path = %entry.path.display(), "hidden check failed, skipping: {err}");
            true
        }
    }
}
