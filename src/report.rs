/*!
 * Reporting functionality for ScanFS
 *
 * Renders the structure statistics block and the final per-operation
 * results using the tabled library for clean, consistent table rendering.
 */

use std::path::Path;

use tabled::{
    settings::{object::Columns, Alignment, Modify, Padding, Style},
    Table, Tabled,
};

use crate::summary::Summary;
use crate::utils::format_file_size;

/// Outcome of a single dispatched operation
#[derive(Debug, Clone)]
pub struct OpOutcome {
    /// Operation label
    pub operation: String,
    /// Whether the operation completed
    pub success: bool,
    /// Extra detail, e.g. the JSON output path
    pub detail: Option<String>,
}

impl OpOutcome {
    /// Record a successful operation
    pub fn ok(operation: &str) -> Self {
        Self {
            operation: operation.to_string(),
            success: true,
            detail: None,
        }
    }

    /// Attach a detail string to the outcome
    pub fn with_detail(mut self, detail: String) -> Self {
        self.detail = Some(detail);
        self
    }

    /// Record a failed operation
    pub fn failed(operation: &str, detail: String) -> Self {
        Self {
            operation: operation.to_string(),
            success: false,
            detail: Some(detail),
        }
    }
}

/// Format of the report output
pub enum ReportFormat {
    /// Console table output
    ConsoleTable,
}

/// Report generator for run results
pub struct Reporter {
    format: ReportFormat,
}

impl Reporter {
    /// Create a new reporter
    pub fn new(format: ReportFormat) -> Self {
        Self { format }
    }

    /// Render the statistics block for a scanned tree
    pub fn stats_table(&self, summary: &Summary, scan_path: &Path) -> String {
        #[derive(Tabled)]
        struct StatRow {
            #[tabled(rename = "Metric")]
            key: String,

            #[tabled(rename = "Value")]
            value: String,
        }

        let rows = vec![
            StatRow {
                key: "📁 Folders".to_string(),
                value: summary.folders.to_string(),
            },
            StatRow {
                key: "📄 Files".to_string(),
                value: summary.files.to_string(),
            },
            StatRow {
                key: "💾 Total size".to_string(),
                value: format_file_size(summary.total_bytes),
            },
            StatRow {
                key: "📍 Scan path".to_string(),
                value: scan_path.display().to_string(),
            },
        ];

        self.style(Table::new(rows))
    }

    /// Render the final per-operation results table
    pub fn results_table(&self, outcomes: &[OpOutcome]) -> String {
        #[derive(Tabled)]
        struct ResultRow {
            #[tabled(rename = "Operation")]
            operation: String,

            #[tabled(rename = "Result")]
            result: String,
        }

        let rows: Vec<ResultRow> = outcomes
            .iter()
            .map(|outcome| {
                let result = match (&outcome.detail, outcome.success) {
                    (Some(detail), true) => format!("✅ {}", detail),
                    (None, true) => "✅ done".to_string(),
                    (Some(detail), false) => format!("❌ {}", detail),
                    (None, false) => "❌ failed".to_string(),
                };
                ResultRow {
                    operation: outcome.operation.clone(),
                    result,
                }
            })
            .collect();

        self.style(Table::new(rows))
    }

    /// Print a rendered table to stdout
    pub fn print(&self, table: &str) {
        println!("\n{}", table);
    }

    fn style(&self, mut table: Table) -> String {
        match self.format {
            ReportFormat::ConsoleTable => {
                table
                    .with(Style::rounded())
                    .with(Padding::new(1, 1, 0, 0))
                    .with(Modify::new(Columns::new(..)).with(Alignment::left()));
                table.to_string()
            }
        }
    }
}
