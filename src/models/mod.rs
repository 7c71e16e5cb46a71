mod entry;
mod settings;
mod tree;

pub use entry::{EntryKind, EntryMetadata, FsEntry, LinkTarget};
pub use settings::{Setting, Settings};
pub use tree::{Counters, DirTree, TreeNode};
