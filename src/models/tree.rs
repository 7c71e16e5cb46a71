use super::{EntryKind, EntryMetadata, LinkTarget};

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TreeNode {
    pub name: String,
    pub kind: EntryKind,
    /// Directory after following symlinks; decides which counter the node lands in.
    pub is_dir: bool,
    /// `None` when metadata was not requested or could not be read.
    pub metadata: Option<EntryMetadata>,
    /// Set for symlinks whose target could be resolved.
    pub link: Option<LinkTarget>,
    pub error: Option<String>,
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    pub fn new(name: impl Into<String>, kind: EntryKind) -> Self {
        Self {
            name: name.into(),
            kind,
            is_dir: kind == EntryKind::Directory,
            metadata: None,
            link: None,
            error: None,
            children: Vec::new(),
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DirTree {
    pub error: Option<String>,
    pub children: Vec<TreeNode>,
}

/// Running totals shared by every root of one invocation.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Counters {
    pub directories: usize,
    pub files: usize,
}

impl Counters {
    pub fn record(&mut self, node: &TreeNode) {
        if node.is_dir {
            self.directories += 1;
        } else {
            self.files += 1;
        }
    }

    /// `<N> directories, <M> files`, singular when a count is exactly one.
    pub fn summary(&self) -> String {
        format!(
            "{} {}, {} {}",
            self.directories,
            if self.directories == 1 {
                "directory"
            } else {
                "directories"
            },
            self.files,
            if self.files == 1 { "file" } else { "files" },
        )
    }
}
