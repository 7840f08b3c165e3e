/*!
 * Configuration handling for ScanFS
 */

use std::env;
use std::path::PathBuf;

use clap::Parser;
use clap_complete::Shell;

use crate::error::{Result, ScanFsError};

/// Fixed chat-completion endpoint
pub const DEFAULT_API_URL: &str = "https://api.deepseek.com/v1/chat/completions";

/// Fixed model identifier sent with every analysis request
pub const DEFAULT_MODEL: &str = "deepseek-chat";

/// Environment variable holding the bearer token
pub const API_KEY_VAR: &str = "DEEPSEEK_API_KEY";

/// Question asked on behalf of the user when `--all` is given
pub const DEFAULT_QUESTION: &str =
    "Analyze the structure, type, and likely purpose of this project";

/// Command-line arguments for ScanFS
#[derive(Parser, Debug, Clone)]
#[clap(
    name = "scanfs",
    version = env!("CARGO_PKG_VERSION"),
    about = "Scan directory structures, export them as JSON, and analyze them with an LLM",
    long_about = "Reads a local directory tree, displays it as a tree, summarizes it, \
exports it as a JSON document, and can forward a depth-bounded digest of it to a \
chat-completion endpoint for analysis."
)]
pub struct Args {
    /// Directory to scan
    #[clap(long, short, default_value = ".")]
    pub path: String,

    /// Display the directory tree
    #[clap(long, short)]
    pub tree: bool,

    /// Show file sizes in the tree display
    #[clap(long, short)]
    pub size: bool,

    /// Save the directory structure to the given JSON file
    #[clap(long, short, value_name = "FILE")]
    pub json: Option<String>,

    /// Display structure statistics
    #[clap(long)]
    pub stats: bool,

    /// Ask the AI a question about the directory structure
    #[clap(long, value_name = "QUESTION")]
    pub ai: Option<String>,

    /// Maximum directory depth for the AI digest
    #[clap(long, default_value = "3")]
    pub depth: usize,

    /// Run every operation: tree, stats, JSON export, AI analysis
    #[clap(long, short)]
    pub all: bool,

    /// JSON output file name used by --all
    #[clap(long, short, default_value = "file_structure.json")]
    pub output: String,

    /// Generate shell completions
    #[clap(long = "generate", value_enum)]
    pub generate: Option<Shell>,
}

/// Resolved application configuration
#[derive(Clone, Debug)]
pub struct Config {
    /// Target directory to scan
    pub target_dir: PathBuf,

    /// Display the directory tree
    pub tree: bool,

    /// Show file sizes in the tree display
    pub show_size: bool,

    /// Display structure statistics
    pub stats: bool,

    /// JSON export target, if requested
    pub json_file: Option<PathBuf>,

    /// Question for the AI, if requested
    pub question: Option<String>,

    /// Maximum directory depth for the AI digest
    pub max_depth: usize,
}

impl Config {
    /// Create configuration from command-line arguments
    ///
    /// `--all` expands into every operation, with the canned question and
    /// the `--output` file name taking over the AI and JSON slots.
    pub fn from_args(args: Args) -> Self {
        let (tree, stats, json, ai) = if args.all {
            (
                true,
                true,
                Some(args.output.clone()),
                Some(DEFAULT_QUESTION.to_string()),
            )
        } else {
            (args.tree, args.stats, args.json.clone(), args.ai.clone())
        };

        Self {
            target_dir: PathBuf::from(args.path),
            tree,
            show_size: args.size,
            stats,
            json_file: json.map(PathBuf::from),
            question: ai,
            max_depth: args.depth,
        }
    }

    /// True when no operation flag was selected
    pub fn no_operations(&self) -> bool {
        !self.tree && !self.stats && self.json_file.is_none() && self.question.is_none()
    }

    /// Validate that the target path exists
    pub fn validate(&self) -> Result<()> {
        if !self.target_dir.exists() {
            return Err(ScanFsError::PathNotFound(
                self.target_dir.display().to_string(),
            ));
        }
        Ok(())
    }
}

/// Settings for the remote analysis endpoint
///
/// Passed explicitly into the analyzer rather than read as ambient state,
/// so tests can inject a fake token and endpoint.
#[derive(Clone, Debug)]
pub struct ApiConfig {
    /// Bearer token for the endpoint
    pub api_key: String,
    /// Chat-completion URL
    pub api_url: String,
    /// Model identifier
    pub model: String,
}

impl ApiConfig {
    /// Read the bearer token, consulting a local `.env` file first
    ///
    /// A missing `.env` file is fine; the process environment still counts.
    /// A missing token is a fatal configuration error.
    pub fn from_env() -> Result<Self> {
        let _ = dotenvy::dotenv();

        let api_key = env::var(API_KEY_VAR).map_err(|_| {
            ScanFsError::Config(format!("{} environment variable not set", API_KEY_VAR))
        })?;

        Ok(Self {
            api_key,
            api_url: DEFAULT_API_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
        })
    }
}
