//! JSON run summary

use holdings_core::{PipelineOutcome, RunStats};
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::Path;

#[derive(Debug, Serialize)]
pub struct RunSummary {
    #[serde(flatten)]
    pub stats: RunStats,
    /// Confirmed groups per evidence rule, keyed by its label
    pub evidence: BTreeMap<String, usize>,
    /// Records per source catalog after same-source deduplication
    pub sources: BTreeMap<String, usize>,
    pub duplicates_file: String,
    pub graph_file: Option<String>,
}

impl RunSummary {
    pub fn new(outcome: &PipelineOutcome, duplicates: &Path, graph: Option<&Path>) -> Self {
        Self {
            stats: outcome.stats.clone(),
            evidence: outcome
                .report
                .evidence_counts()
                .into_iter()
                .map(|(evidence, count)| (evidence.to_string(), count))
                .collect(),
            sources: outcome.title_groups.source_counts(),
            duplicates_file: duplicates.display().to_string(),
            graph_file: graph.map(|p| p.display().to_string()),
        }
    }
}
