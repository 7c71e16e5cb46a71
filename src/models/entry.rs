use std::path::PathBuf;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum EntryKind {
    Directory,
    File,
    Symlink,
    Other,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FsEntry {
    pub path: PathBuf,
    pub name: String,
    pub kind: EntryKind,
}

/// POSIX-style attributes shown in the bracketed metadata block.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EntryMetadata {
    /// Permission bits; only the low nine are rendered.
    pub mode: u32,
    pub owner: String,
    pub group: String,
    pub size: u64,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LinkTarget {
    pub path: PathBuf,
    /// The target lives in the same directory as the link itself.
    pub same_parent: bool,
    pub is_dir: bool,
}

impl LinkTarget {
    /// Text printed after ` -> `: the bare file name for siblings, the full path otherwise.
    pub fn display_text(&self) -> String {
        if self.same_parent
            && let Some(name) = self.path.file_name()
        {
            return name.to_string_lossy().into_owned();
        }
        self.path.to_string_lossy().into_owned()
    }
}
