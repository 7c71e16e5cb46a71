mod format;
mod render;
mod tree;
mod walk;

pub use format::{metadata_block, permissions_string};
pub use render::write_children;
pub use tree::tree;
pub use walk::{WalkOptions, walk_dir};
