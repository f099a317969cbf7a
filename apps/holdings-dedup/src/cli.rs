//! Command-line interface for holdings-dedup.
//!
//! ## Usage
//!
//! ```text
//! # Write duplication.csv in the current directory
//! holdings-dedup library-titles.csv
//!
//! # Also render the source co-occurrence graph
//! holdings-dedup library-titles.csv --graph relation.dot
//! dot -Tpng relation.dot -o relation.png
//!
//! # JSON run summary for scripting
//! holdings-dedup library-titles.csv --summary
//! ```

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "holdings-dedup")]
#[command(version)]
#[command(about = "Find titles held by more than one catalog")]
#[command(
    long_about = "holdings-dedup reads a CSV of catalog records (title, source catalog, ISSN, e-ISSN, ISBN, e-ISBN), clears malformed identifiers, groups records by title and writes the groups confirmed as duplicates across catalogs.\n\nA group is confirmed when every record agrees with the first on one identifier (an X check character matches any digit), or when no record carries any identifier."
)]
pub struct Cli {
    /// Input CSV file with a header row
    pub input: PathBuf,

    /// Output CSV of duplicate groups (overrides the config file)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Write the source co-occurrence graph as Graphviz DOT (overrides the config file)
    #[arg(short, long)]
    pub graph: Option<PathBuf>,

    /// Path to a TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Print a JSON summary of the run to stdout
    #[arg(long)]
    pub summary: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
