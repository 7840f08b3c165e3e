/*!
 * Console tree rendering
 */

use std::ffi::OsString;
use std::fs;
use std::io::{self, ErrorKind, Write};
use std::path::{self, Path};

use walkdir::WalkDir;

use crate::utils::format_file_size;

/// Renders a directory as a box-drawing tree
///
/// Walks the filesystem lazily and independently of the scanner: each level
/// is listed once, partitioned into folders and plain files (entries that
/// are neither, such as dangling symlinks, are skipped), and folders print
/// before files. Output is deterministic for a stable directory listing.
pub struct TreePrinter {
    /// Append formatted file sizes to file labels
    show_size: bool,
}

impl TreePrinter {
    /// Create a new tree printer
    pub fn new(show_size: bool) -> Self {
        Self { show_size }
    }

    /// Render the tree for `path` into `out`
    pub fn render<W: Write>(&self, path: &Path, out: &mut W) -> io::Result<()> {
        let abs_path = path::absolute(path)?;
        writeln!(out, "🌳 Folder structure: {}", abs_path.display())?;
        writeln!(out, "{}", "=".repeat(70))?;
        self.print_level(path, "", out)?;
        writeln!(out, "{}", "=".repeat(70))?;
        Ok(())
    }

    /// Print one directory level and recurse into its folders
    fn print_level<W: Write>(&self, path: &Path, prefix: &str, out: &mut W) -> io::Result<()> {
        let mut names: Vec<OsString> = Vec::new();
        for entry in WalkDir::new(path)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
        {
            match entry {
                Ok(entry) => names.push(entry.file_name().to_os_string()),
                Err(e) => {
                    if e.io_error().map(|io| io.kind()) == Some(ErrorKind::PermissionDenied) {
                        writeln!(out, "{}└── 🔒 [access denied]", prefix)?;
                    } else {
                        writeln!(out, "{}└── ❌ [error: {}]", prefix, e)?;
                    }
                    return Ok(());
                }
            }
        }

        // Folders before files, each bucket keeping the sorted name order
        let (folders, files): (Vec<_>, Vec<_>) =
            names.into_iter().partition(|name| path.join(name).is_dir());
        let files: Vec<_> = files
            .into_iter()
            .filter(|name| path.join(name).is_file())
            .collect();
        let total = folders.len() + files.len();

        for (i, name) in folders.iter().chain(files.iter()).enumerate() {
            let is_last = i == total - 1;
            let connector = if is_last { "└── " } else { "├── " };
            let entry_path = path.join(name);
            let label = name.to_string_lossy();

            if i < folders.len() {
                writeln!(out, "{}{}📁 {}/", prefix, connector, label)?;
                let child_prefix = format!("{}{}", prefix, if is_last { "    " } else { "│   " });
                self.print_level(&entry_path, &child_prefix, out)?;
            } else {
                let size_info = if self.show_size {
                    match fs::metadata(&entry_path) {
                        Ok(metadata) => format!(" ({})", format_file_size(metadata.len())),
                        Err(e) => {
                            // Size lookup failed mid-level; stop this branch
                            writeln!(out, "{}└── ❌ [error: {}]", prefix, e)?;
                            return Ok(());
                        }
                    }
                } else {
                    String::new()
                };
                writeln!(out, "{}{}📄 {}{}", prefix, connector, label, size_info)?;
            }
        }

        Ok(())
    }
}
