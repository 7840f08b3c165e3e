/*!
 * Depth-bounded text digest of a node tree
 *
 * The digest is never shown to the user; it is the structure summary
 * embedded into the remote analysis prompt, so its length stays bounded
 * by the depth limit and the branching factor near the root.
 */

use crate::types::Node;
use crate::utils::format_file_size;

/// Render a node tree as an indented text block, cut off below `max_depth`
pub fn structure_to_text(node: &Node, max_depth: usize) -> String {
    let mut text = String::new();
    append_node(node, 0, max_depth, &mut text);
    text
}

fn append_node(node: &Node, level: usize, max_depth: usize, text: &mut String) {
    let indent = "  ".repeat(level);

    if level > max_depth {
        text.push_str(&indent);
        text.push_str("...\n");
        return;
    }

    match node {
        Node::Folder(folder) => {
            text.push_str(&format!("{}📁 {}/\n", indent, folder.name));
            for child in &folder.children {
                append_node(child, level + 1, max_depth, text);
            }
        }
        Node::File(file) => {
            text.push_str(&format!(
                "{}📄 {} ({})\n",
                indent,
                file.name,
                format_file_size(file.size)
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{FileNode, FolderNode, Node};
    use std::path::PathBuf;

    fn file(name: &str, size: u64) -> Node {
        Node::File(FileNode {
            name: name.to_string(),
            path: PathBuf::from(name),
            size,
        })
    }

    fn folder(name: &str, children: Vec<Node>) -> Node {
        Node::Folder(FolderNode {
            name: name.to_string(),
            path: PathBuf::from(name),
            children,
        })
    }

    #[test]
    fn test_digest_lines_and_indent() {
        let tree = folder(
            "root",
            vec![folder("sub", vec![file("b.txt", 2048)]), file("a.txt", 10)],
        );

        let text = structure_to_text(&tree, 3);
        assert_eq!(
            text,
            "📁 root/\n  📁 sub/\n    📄 b.txt (2.0 KB)\n  📄 a.txt (10.0 B)\n"
        );
    }

    #[test]
    fn test_digest_truncates_below_max_depth() {
        let tree = folder(
            "root",
            vec![
                folder("one", vec![file("deep.txt", 1)]),
                folder("two", vec![folder("deeper", vec![])]),
            ],
        );

        let text = structure_to_text(&tree, 0);

        // One truncation marker per immediate child, nothing deeper
        assert_eq!(text, "📁 root/\n  ...\n  ...\n");
        assert!(!text.contains("deep.txt"));
        assert!(!text.contains("deeper"));
    }

    #[test]
    fn test_digest_keeps_nodes_at_the_boundary() {
        let tree = folder("root", vec![folder("sub", vec![file("c.txt", 1)])]);

        let text = structure_to_text(&tree, 1);
        assert_eq!(text, "📁 root/\n  📁 sub/\n    ...\n");
    }
}
