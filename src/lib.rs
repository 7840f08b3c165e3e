/*!
 * ScanFS - Scan directory structures and analyze them with an LLM
 *
 * This library builds an in-memory representation of a local directory
 * tree, renders and summarizes it, exports it as a JSON document, and can
 * forward a depth-bounded digest of it to a chat-completion endpoint.
 */

pub mod analysis;
pub mod config;
pub mod digest;
pub mod error;
pub mod report;
pub mod scanner;
pub mod summary;
pub mod tree;
pub mod types;
pub mod utils;
pub mod writer;


// Re-export main components for easier access
pub use analysis::{Analyzer, ChatTransport, HttpTransport};
pub use config::{ApiConfig, Args, Config};
pub use digest::structure_to_text;
pub use error::{Result, ScanFsError};
pub use report::{OpOutcome, ReportFormat, Reporter};
pub use scanner::Scanner;
pub use summary::Summary;
pub use tree::TreePrinter;
pub use types::{FileNode, FolderNode, Node};
pub use utils::format_file_size;
pub use writer::JsonWriter;

/// Version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
