//! Folder tree structures for hierarchical display.
//!
//! The tree is derived from path structure alone; it is a read-only view and
//! never fed back into the store.

use std::collections::HashMap;
use std::fmt::Write;

use serde::{Deserialize, Serialize};

use super::model::Folder;
use super::path;

/// A node in a folder tree.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FolderNode {
    /// Folder name.
    pub name: String,
    /// Full path.
    pub path: String,
    /// Depth level.
    pub depth: usize,
    /// Child folder nodes.
    pub children: Vec<FolderNode>,
}

/// A folder tree built from a flat folder list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FolderTree {
    /// The root node(s) of the tree.
    pub roots: Vec<FolderNode>,
    /// Total number of folders in the tree.
    pub total_folders: usize,
}

impl FolderTree {
    /// Builds a tree from folders of a single organization.
    ///
    /// A folder whose parent path is not among `folders` becomes a root.
    /// Sibling order follows the input order.
    pub fn from_folders(folders: &[Folder]) -> Self {
        let present: HashMap<&str, usize> = folders
            .iter()
            .enumerate()
            .map(|(i, f)| (f.path.as_str(), i))
            .collect();

        let mut children: HashMap<usize, Vec<usize>> = HashMap::new();
        let mut roots = Vec::new();
        for (i, folder) in folders.iter().enumerate() {
            match path::parent_path(&folder.path).and_then(|p| present.get(p)) {
                Some(&parent) if parent != i => children.entry(parent).or_default().push(i),
                _ => roots.push(i),
            }
        }

        Self {
            roots: roots
                .into_iter()
                .map(|i| build_node(i, folders, &children))
                .collect(),
            total_folders: folders.len(),
        }
    }

    /// Renders the tree as indented text, one folder per line.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for root in &self.roots {
            render_node(root, 0, &mut out);
        }
        out
    }
}

fn build_node(index: usize, folders: &[Folder], children: &HashMap<usize, Vec<usize>>) -> FolderNode {
    let folder = &folders[index];
    FolderNode {
        name: folder.name.clone(),
        path: folder.path.clone(),
        depth: folder.depth(),
        children: children
            .get(&index)
            .map(|kids| {
                kids.iter()
                    .map(|&kid| build_node(kid, folders, children))
                    .collect()
            })
            .unwrap_or_default(),
    }
}

fn render_node(node: &FolderNode, level: usize, out: &mut String) {
    let indent = "  ".repeat(level);
    let _ = writeln!(out, "{indent}├── {}", node.name);
    for child in &node.children {
        render_node(child, level + 1, out);
    }
}
