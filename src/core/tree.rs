use std::io::{self, Write};
use std::path::PathBuf;

use tracing::{info, warn};

use crate::fs::FileSystem;
use crate::models::Counters;

use super::render::{OPEN_DIR_ERROR, write_children};
use super::walk::{WalkOptions, walk_dir};

/// Render every root in turn, then the blank line and the summary.
///
/// Roots that are missing, not directories, or cannot be listed get an inline
/// `[error opening dir]` marker and do not stop the remaining roots. Counters
/// accumulate across all roots and are returned.
pub async fn tree<F: FileSystem, W: Write>(
    fs: &F,
    writer: &mut W,
    roots: &[PathBuf],
    options: &WalkOptions,
) -> io::Result<Counters> {
    let mut counters = Counters::default();

    for root in roots {
        if !fs.is_dir(root).await {
            warn!(root = %root.display(), "not a directory");
            writeln!(writer, "{} {OPEN_DIR_ERROR}", root.display())?;
            continue;
        }

        writeln!(writer, "{}", root.display())?;

        let dir_tree = walk_dir(fs, root, options).await;
        match dir_tree.error {
            Some(error) => {
                warn!(root = %root.display(), "cannot open directory: {error}");
                writeln!(writer, "{} {OPEN_DIR_ERROR}", root.display())?;
            }
            None => write_children(writer, &dir_tree.children, &options.settings, &mut counters)?,
        }
    }

    writeln!(writer)?;
    writeln!(writer, "{}", counters.summary())?;
    info!(
        directories = counters.directories,
        files = counters.files,
        "tree complete"
    );

    Ok(counters)
}
