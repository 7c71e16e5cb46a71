use anyhow::{Result, anyhow};
use async_trait::async_trait;
use std::fs::Metadata;
use std::path::{Path, PathBuf};
use tokio::task;
use tracing::debug;

use crate::models::{EntryKind, EntryMetadata, FsEntry, LinkTarget};

use super::FileSystem;

pub struct RealFileSystem;

#[async_trait]
impl FileSystem for RealFileSystem {
    async fn is_dir(&self, path: &Path) -> bool {
        let path = path.to_path_buf();
        task::spawn_blocking(move || path.is_dir())
            .await
            .unwrap_or(false)
    }

    async fn read_dir(&self, dir: &Path) -> Result<Vec<FsEntry>> {
        let dir = dir.to_path_buf();
        task::spawn_blocking(move || {
            let mut entries = Vec::new();
            for entry in std::fs::read_dir(&dir)? {
                let entry = match entry {
                    Ok(entry) => entry,
                    Err(err) => {
                        debug!(dir = %dir.display(), "skipping unreadable entry: {err}");
                        continue;
                    }
                };
                let file_type = match entry.file_type() {
                    Ok(file_type) => file_type,
                    Err(err) => {
                        debug!(path = %entry.path().display(), "skipping entry without file type: {err}");
                        continue;
                    }
                };
                let kind = if file_type.is_symlink() {
                    EntryKind::Symlink
                } else if file_type.is_dir() {
                    EntryKind::Directory
                } else if file_type.is_file() {
                    EntryKind::File
                } else {
                    EntryKind::Other
                };

                entries.push(FsEntry {
                    path: entry.path(),
                    name: entry.file_name().to_string_lossy().into_owned(),
                    kind,
                });
            }
            Ok(entries)
        })
        .await?
    }

    async fn is_hidden(&self, entry: &FsEntry) -> Result<bool> {
        hidden(entry)
    }

    async fn metadata(&self, path: &Path) -> Result<EntryMetadata> {
        let path = path.to_path_buf();
        task::spawn_blocking(move || {
            // Attributes describe what a link points at; dangling links fall back to the link itself.
            let metadata = std::fs::metadata(&path).or_else(|_| std::fs::symlink_metadata(&path))?;
            Ok(entry_metadata(&metadata))
        })
        .await?
    }

    async fn resolve_link(&self, path: &Path) -> Result<LinkTarget> {
        let path = path.to_path_buf();
        task::spawn_blocking(move || resolve_link_blocking(&path)).await?
    }
}

fn resolve_link_blocking(link: &Path) -> Result<LinkTarget> {
    let link_dir = link
        .parent()
        .ok_or_else(|| anyhow!("{} has no parent directory", link.display()))?;

    let target = match std::fs::canonicalize(link) {
        Ok(target) => target,
        // Dangling: show the literal target instead.
        Err(_) => {
            let raw = std::fs::read_link(link)?;
            let absolute = link_dir.join(&raw);
            return Ok(LinkTarget {
                same_parent: same_dir(link_dir, absolute.parent()),
                path: raw,
                is_dir: false,
            });
        }
    };

    Ok(LinkTarget {
        same_parent: same_dir(link_dir, target.parent()),
        is_dir: target.is_dir(),
        path: target,
    })
}

fn same_dir(link_dir: &Path, target_dir: Option<&Path>) -> bool {
    let Some(target_dir) = target_dir else {
        return false;
    };
    match (canonical(link_dir), canonical(target_dir)) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}

fn canonical(dir: &Path) -> Option<PathBuf> {
    let dir = if dir.as_os_str().is_empty() {
        Path::new(".")
    } else {
        dir
    };
    std::fs::canonicalize(dir).ok()
}

#[cfg(windows)]
fn hidden(entry: &FsEntry) -> Result<bool> {
    use std::os::windows::fs::MetadataExt;

    const FILE_ATTRIBUTE_HIDDEN: u32 = 0x2;
    let metadata = std::fs::symlink_metadata(&entry.path)?;
    Ok(metadata.file_attributes() & FILE_ATTRIBUTE_HIDDEN != 0)
}

#[cfg(not(windows))]
fn hidden(entry: &FsEntry) -> Result<bool> {
    Ok(entry.name.starts_with('.'))
}

#[cfg(unix)]
fn entry_metadata(metadata: &Metadata) -> EntryMetadata {
    use std::os::unix::fs::MetadataExt;

    EntryMetadata {
        mode: metadata.mode(),
        owner: owner_name(metadata.uid()),
        group: group_name(metadata.gid()),
        size: metadata.len(),
    }
}

#[cfg(not(unix))]
fn entry_metadata(metadata: &Metadata) -> EntryMetadata {
    EntryMetadata {
        mode: if metadata.permissions().readonly() {
            0o444
        } else {
            0o666
        },
        owner: "?".to_owned(),
        group: "?".to_owned(),
        size: metadata.len(),
    }
}

/// Unknown uids fall back to the numeric id.
#[cfg(unix)]
fn owner_name(uid: u32) -> String {
    uzers::get_user_by_uid(uid)
        .map(|u| u.name().to_string_lossy().into_owned())
        .unwrap_or_else(|| uid.to_string())
}

#[cfg(unix)]
fn group_name(gid: u32) -> String {
    uzers::get_group_by_gid(gid)
        .map(|g| g.name().to_string_lossy().into_owned())
        .unwrap_or_else(|| gid.to_string())
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::os::unix::fs::{PermissionsExt, symlink};

    #[tokio::test]
    async fn read_dir_reports_symlinks_without_following() {
        let temp = tempfile::TempDir::new().unwrap();
        std::fs::create_dir(temp.path().join("dir")).unwrap();
        symlink(temp.path().join("dir"), temp.path().join("link")).unwrap();

        let mut entries = RealFileSystem.read_dir(temp.path()).await.unwrap();
        entries.sort_by(|a, b| a.path.cmp(&b.path));
        let kinds: Vec<_> = entries.iter().map(|e| (e.name.as_str(), e.kind)).collect();
        assert_eq!(
            kinds,
            vec![("dir", EntryKind::Directory), ("link", EntryKind::Symlink)]
        );
    }

    #[tokio::test]
    async fn sibling_link_resolves_to_same_parent() {
        let temp = tempfile::TempDir::new().unwrap();
        std::fs::write(temp.path().join("real.txt"), "x").unwrap();
        symlink("real.txt", temp.path().join("alias")).unwrap();

        let target = RealFileSystem
            .resolve_link(&temp.path().join("alias"))
            .await
            .unwrap();
        assert!(target.same_parent);
        assert!(!target.is_dir);
        assert_eq!(target.display_text(), "real.txt");
    }

    #[tokio::test]
    async fn sibling_directory_link_is_a_directory() {
        let temp = tempfile::TempDir::new().unwrap();
        std::fs::create_dir(temp.path().join("sub")).unwrap();
        symlink(temp.path().join("sub"), temp.path().join("to_sub")).unwrap();

        let target = RealFileSystem
            .resolve_link(&temp.path().join("to_sub"))
            .await
            .unwrap();
        assert!(target.is_dir);
        assert!(target.same_parent);
        assert_eq!(target.display_text(), "sub");
    }

    #[tokio::test]
    async fn link_into_subdirectory_is_not_same_parent() {
        let temp = tempfile::TempDir::new().unwrap();
        std::fs::create_dir(temp.path().join("sub")).unwrap();
        std::fs::write(temp.path().join("sub/inner.txt"), "x").unwrap();
        symlink(temp.path().join("sub/inner.txt"), temp.path().join("to_inner")).unwrap();
        let target = RealFileSystem
            .resolve_link(&temp.path().join("to_inner"))
            .await
            .unwrap();
        assert!(!target.same_parent);
        assert!(target.path.ends_with("sub/inner.txt"));
    }

    #[tokio::test]
    async fn dangling_link_keeps_literal_target() {
        let temp = tempfile::TempDir::new().unwrap();
        symlink("missing.txt", temp.path().join("broken")).unwrap();

        let target = RealFileSystem
            .resolve_link(&temp.path().join("broken"))
            .await
            .unwrap();
        assert_eq!(target.path, PathBuf::from("missing.txt"));
        assert!(target.same_parent);
    }

    #[tokio::test]
    async fn metadata_reports_mode_and_size() {
        let temp = tempfile::TempDir::new().unwrap();
        let file = temp.path().join("f.txt");
        std::fs::write(&file, "hello").unwrap();
        std::fs::set_permissions(&file, std::fs::Permissions::from_mode(0o640)).unwrap();

        let metadata = RealFileSystem.metadata(&file).await.unwrap();
        assert_eq!(metadata.mode & 0o777, 0o640);
        assert_eq!(metadata.size, 5);
        assert!(!metadata.owner.is_empty());
        assert!(!metadata.group.is_empty());
    }

    #[tokio::test]
    async fn missing_path_is_not_a_directory() {
        let temp = tempfile::TempDir::new().unwrap();
        assert!(RealFileSystem.is_dir(temp.path()).await);
        assert!(!RealFileSystem.is_dir(&temp.path().join("nope")).await);
    }
}
