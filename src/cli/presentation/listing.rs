//! Filesystem presentation: `ls` listings.

use crate::tree::{NodeId, Tree};
use owo_colors::OwoColorize;

/// One name per line; directories bold blue when `color` is set.
pub fn format_listing(tree: &Tree, ids: &[NodeId], color: bool) -> String {
    ids.iter()
        .map(|id| format_entry_name(tree, *id, color))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn format_entry_name(tree: &Tree, id: NodeId, color: bool) -> String {
    let name = tree.name(id);
    if color && tree.is_directory(id) {
        format!("{}", name.blue().bold())
    } else {
        name.to_string()
    }
}
