/*!
 * Directory scanning functionality
 */

use std::fs;
use std::io::ErrorKind;
use std::path;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{Result, ScanFsError};
use crate::types::{FileNode, FolderNode, Node};

/// Scanner that builds an in-memory tree of a directory
///
/// Traversal is sequential and depth-first. Each directory is read in a
/// single pass, sorted ascending by entry name with files and folders mixed
/// together. An unreadable subtree degrades to a warning and a partial
/// child list; it never aborts the scan.
pub struct Scanner {
    /// Directory the scan starts from
    target: PathBuf,
}

impl Scanner {
    /// Create a new scanner for the given target directory
    pub fn new<P: Into<PathBuf>>(target: P) -> Self {
        Self {
            target: target.into(),
        }
    }

    /// Scan the target directory and return the node tree
    pub fn scan(&self) -> Result<Node> {
        if !self.target.exists() {
            return Err(ScanFsError::PathNotFound(
                self.target.display().to_string(),
            ));
        }

        Ok(Node::Folder(self.scan_directory(&self.target)))
    }

    /// Scan one directory level and recurse into subdirectories
    ///
    /// `walk_path` is the path as supplied (joined down from the target),
    /// so file nodes keep a relative path when the target was relative,
    /// while folder nodes always store the absolutized path.
    fn scan_directory(&self, walk_path: &Path) -> FolderNode {
        let abs_path = path::absolute(walk_path).unwrap_or_else(|_| walk_path.to_path_buf());
        let name = abs_path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();

        let mut children = Vec::new();

        for entry in WalkDir::new(walk_path)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
        {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    // Keep whatever was enumerated before the failure
                    if e.io_error().map(|io| io.kind()) == Some(ErrorKind::PermissionDenied) {
                        eprintln!("⚠️ Permission denied: {}", walk_path.display());
                    } else {
                        eprintln!("❌ Scan error at {}: {}", walk_path.display(), e);
                    }
                    break;
                }
            };

            let entry_path = walk_path.join(entry.file_name());

            match fs::metadata(&entry_path) {
                Ok(metadata) if metadata.is_dir() => {
                    children.push(Node::Folder(self.scan_directory(&entry_path)));
                }
                Ok(metadata) => {
                    children.push(Node::File(FileNode {
                        name: entry.file_name().to_string_lossy().to_string(),
                        path: entry_path,
                        size: metadata.len(),
                    }));
                }
                Err(e) => {
                    eprintln!("❌ Scan error at {}: {}", entry_path.display(), e);
                    break;
                }
            }
        }

        FolderNode {
            name,
            path: abs_path,
            children,
        }
    }
}
