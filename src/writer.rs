/*!
 * JSON writer implementation for ScanFS
 */

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::types::Node;

/// Writes a node tree to a pretty-printed JSON document
///
/// The document mirrors the tree exactly: every node carries its name, a
/// `type` discriminant, its path, and either its size (files) or its
/// children (folders). Output is UTF-8 with non-ASCII characters written
/// literally.
pub struct JsonWriter {
    /// Output JSON file path
    output_file: PathBuf,
}

impl JsonWriter {
    /// Create a new JSON writer
    pub fn new<P: Into<PathBuf>>(output_file: P) -> Self {
        Self {
            output_file: output_file.into(),
        }
    }

    /// Serialize the tree, reporting failure instead of propagating it
    ///
    /// Any I/O error is printed with its reason and turned into `false`;
    /// other operations in the same run are unaffected.
    pub fn save(&self, node: &Node) -> bool {
        match self.write(node) {
            Ok(()) => {
                println!("✅ File structure saved to: {}", self.output_file.display());
                true
            }
            Err(e) => {
                eprintln!("❌ Failed to save file structure: {}", e);
                false
            }
        }
    }

    /// Write the tree to the configured output file
    fn write(&self, node: &Node) -> Result<()> {
        let file = File::create(&self.output_file)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, node)?;
        writer.flush()?;
        Ok(())
    }

    /// Load a previously saved tree back from disk
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Node> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        Ok(serde_json::from_reader(reader)?)
    }
}
