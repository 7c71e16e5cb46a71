use std::io::{self, Write};

use crate::models::{Counters, Settings, TreeNode};

use super::format::metadata_block;

pub const OPEN_DIR_ERROR: &str = "[error opening dir]";

const VERTICAL_LINE: &[u8] = "│   ".as_bytes();
const EMPTY: &[u8] = b"    ";
const T_LINE: &[u8] = "├── ".as_bytes();
const CORNER_LINE: &[u8] = "└── ".as_bytes();

/// Write one root's children, counting every node written.
pub fn write_children<W: Write>(
    writer: &mut W,
    children: &[TreeNode],
    settings: &Settings,
    counters: &mut Counters,
) -> io::Result<()> {
    let mut opened_folders = Vec::new();
    write_children_inner(writer, children, settings, counters, &mut opened_folders)
}

fn write_children_inner<W: Write>(
    writer: &mut W,
    children: &[TreeNode],
    settings: &Settings,
    counters: &mut Counters,
    opened_folders: &mut Vec<bool>,
) -> io::Result<()> {
    for (index, node) in children.iter().enumerate() {
        let is_last = index + 1 == children.len();

        for &has_more in opened_folders.iter() {
            if has_more {
                writer.write_all(VERTICAL_LINE)?;
            } else {
                writer.write_all(EMPTY)?;
            }
        }

        if is_last {
            writer.write_all(CORNER_LINE)?;
        } else {
            writer.write_all(T_LINE)?;
        }

        if let Some(block) = metadata_block(node, settings) {
            writer.write_all(block.as_bytes())?;
        }

        writer.write_all(node.name.as_bytes())?;

        if let Some(target) = node.link.as_ref() {
            write!(writer, " -> {}", target.display_text())?;
        }

        if node.error.is_some() {
            write!(writer, " {OPEN_DIR_ERROR}")?;
        }

        writer.write_all(b"\n")?;
        counters.record(node);

        if !node.children.is_empty() {
            opened_folders.push(!is_last);
            let result =
                write_children_inner(writer, &node.children, settings, counters, opened_folders);
            opened_folders.pop();
            result?;
        }
    }

    Ok(())
}
