/*!
 * Structure statistics over a built node tree
 */

use crate::types::Node;

/// Aggregated counts for a scanned tree
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    /// Number of folders, the scan root included
    pub folders: usize,
    /// Number of files
    pub files: usize,
    /// Sum of all file sizes in bytes
    pub total_bytes: u64,
}

impl Summary {
    /// Aggregate counts in a single pass over the tree
    pub fn of(node: &Node) -> Self {
        let mut summary = Summary::default();
        summary.visit(node);
        summary
    }

    fn visit(&mut self, node: &Node) {
        if let Node::Folder(folder) = node {
            self.folders += 1;
            for child in &folder.children {
                match child {
                    Node::Folder(_) => self.visit(child),
                    Node::File(file) => {
                        self.files += 1;
                        self.total_bytes += file.size;
                    }
                }
            }
        }
    }
}
