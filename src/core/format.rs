use crate::models::{EntryKind, EntryMetadata, Setting, Settings, TreeNode};

/// Shown in place of a field whose metadata could not be read.
pub const UNKNOWN_FIELD: &str = "?";

type FieldFormatter = fn(EntryKind, &EntryMetadata) -> String;

/// Metadata fields in display order, each keyed by the setting that enables it.
const FIELDS: [(Setting, FieldFormatter); 4] = [
    (Setting::ShowPermissions, permissions_field),
    (Setting::ShowOwner, owner_field),
    (Setting::ShowGroup, group_field),
    (Setting::ShowSize, size_field),
];

fn permissions_field(kind: EntryKind, metadata: &EntryMetadata) -> String {
    permissions_string(kind, metadata.mode)
}

fn owner_field(_: EntryKind, metadata: &EntryMetadata) -> String {
    metadata.owner.clone()
}

fn group_field(_: EntryKind, metadata: &EntryMetadata) -> String {
    metadata.group.clone()
}

fn size_field(_: EntryKind, metadata: &EntryMetadata) -> String {
    metadata.size.to_string()
}

const PERMISSION_BITS: [(u32, char); 9] = [
    (0o400, 'r'),
    (0o200, 'w'),
    (0o100, 'x'),
    (0o040, 'r'),
    (0o020, 'w'),
    (0o010, 'x'),
    (0o004, 'r'),
    (0o002, 'w'),
    (0o001, 'x'),
];

/// `ls -l` style: type character followed by owner, group and other `rwx` triplets.
pub fn permissions_string(kind: EntryKind, mode: u32) -> String {
    let type_char = match kind {
        EntryKind::File => '-',
        EntryKind::Directory => 'd',
        EntryKind::Symlink => 'l',
        EntryKind::Other => '?',
    };

    std::iter::once(type_char)
        .chain(
            PERMISSION_BITS
                .iter()
                .map(|&(bit, c)| if mode & bit != 0 { c } else { '-' }),
        )
        .collect()
}

/// The `[...]  ` prefix for a node, or `None` when no metadata setting is active.
pub fn metadata_block(node: &TreeNode, settings: &Settings) -> Option<String> {
    let fields: Vec<String> = FIELDS
        .iter()
        .filter(|(setting, _)| settings.contains(*setting))
        .map(|(_, format)| match node.metadata.as_ref() {
            Some(metadata) => format(node.kind, metadata),
            None => UNKNOWN_FIELD.to_owned(),
        })
        .collect();

    if fields.is_empty() {
        None
    } else {
        Some(format!("[{}]  ", fields.join(" ")))
    }
}
