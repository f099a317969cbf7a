//! End-to-end deduplication run
//!
//! Validation, grouping and classification, in that order, over one batch
//! of records held in memory.

use crate::{find_duplicates, group_by_title, validate_records, DuplicateReport, Record, TitleGroups};
use serde::Serialize;

/// Counters describing one pipeline run
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct RunStats {
    /// Records supplied to the run
    pub records: usize,
    /// Identifier fields cleared by validation
    pub fields_cleared: usize,
    /// Distinct normalized titles
    pub title_groups: usize,
    /// Records dropped as same-source repeats
    pub same_source_dropped: usize,
    /// Confirmed duplicate groups
    pub duplicate_groups: usize,
    /// Largest confirmed duplicate group
    pub max_group_size: usize,
}

/// Everything a run produces: the title grouping, the confirmed duplicates
/// and the run counters.
#[derive(Clone, Debug)]
pub struct PipelineOutcome {
    pub title_groups: TitleGroups,
    pub report: DuplicateReport,
    pub stats: RunStats,
}

/// Run validation, title grouping and duplicate classification over `records`.
pub fn run_pipeline(mut records: Vec<Record>) -> PipelineOutcome {
    let record_count = records.len();
    let fields_cleared = validate_records(&mut records);
    let title_groups = group_by_title(records);
    let report = find_duplicates(&title_groups);

    let stats = RunStats {
        records: record_count,
        fields_cleared,
        title_groups: title_groups.len(),
        same_source_dropped: title_groups.dropped(),
        duplicate_groups: report.len(),
        max_group_size: report.max_group_size,
    };

    tracing::info!(
        records = stats.records,
        fields_cleared = stats.fields_cleared,
        titles = stats.title_groups,
        duplicates = stats.duplicate_groups,
        "Deduplication run complete"
    );

    PipelineOutcome {
        title_groups,
        report,
        stats,
    }
}
