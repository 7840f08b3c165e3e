/*!
 * Core types and data structures for the ScanFS application
 */

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Represents a folder in the scanned tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FolderNode {
    /// Folder name
    pub name: String,
    /// Absolute path of the folder
    pub path: PathBuf,
    /// Entries directly below this folder, sorted by name
    pub children: Vec<Node>,
}

/// Represents a regular file in the scanned tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileNode {
    /// File name
    pub name: String,
    /// Path as joined during the walk (relative if the scan target was)
    pub path: PathBuf,
    /// Size in bytes
    pub size: u64,
}

/// A generic filesystem node
///
/// Serializes with a `type` discriminant of `"folder"` or `"file"`, which is
/// also the shape of the exported JSON document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Node {
    /// Folder node with its children
    Folder(FolderNode),
    /// File node with its size
    File(FileNode),
}

impl Node {
    /// Name of the underlying entry
    pub fn name(&self) -> &str {
        match self {
            Node::Folder(folder) => &folder.name,
            Node::File(file) => &file.name,
        }
    }
}
