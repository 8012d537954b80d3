pub mod json;
pub mod table;

use clap::ValueEnum;

/// How `parse` prints a report's records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Aligned text tables
    Table,
    /// Pretty-printed JSON
    Json,
}
