//! holdings-dedup binary
//!
//! Reads a catalog CSV, runs the deduplication pipeline and writes the
//! confirmed duplicate groups (and optionally the source graph).

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod config;
mod summary;

use config::AppConfig;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging: RUST_LOG wins, otherwise follow the verbosity flag
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("holdings_dedup=debug,holdings_core=debug,holdings_io=debug,info")
        } else {
            EnvFilter::new("warn")
        }
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = AppConfig::resolve(cli.config.as_deref()).context("Failed to load config")?;
    let duplicates_path = cli
        .output
        .clone()
        .unwrap_or_else(|| config.output.duplicates.clone());
    let graph_path = cli.graph.clone().or_else(|| config.output.graph.clone());

    let records = holdings_io::read_records(&cli.input, &config.columns)
        .with_context(|| format!("Failed to read {}", cli.input.display()))?;

    let outcome = holdings_core::run_pipeline(records);

    holdings_io::write_duplicates(&duplicates_path, &outcome.report, &config.columns)
        .with_context(|| format!("Failed to write {}", duplicates_path.display()))?;

    if let Some(graph_path) = &graph_path {
        let graph = holdings_core::SourceGraph::build(&outcome.title_groups, &outcome.report);
        holdings_io::write_graph(graph_path, &graph)
            .with_context(|| format!("Failed to write {}", graph_path.display()))?;
    }

    if cli.summary {
        let summary = summary::RunSummary::new(&outcome, &duplicates_path, graph_path.as_deref());
        println!("{}", serde_json::to_string_pretty(&summary)?);
    }

    Ok(())
}
