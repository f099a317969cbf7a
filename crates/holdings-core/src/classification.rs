//! Duplicate classification
//!
//! A title group with two or more records is a confirmed duplicate when
//! every member agrees with the first record (the anchor) on one identifier
//! kind, checked in the order ISSN, e-ISSN, ISBN, e-ISBN. A group where no
//! member carries any identifier is also accepted. Members are compared with
//! the anchor only, never with each other.

use crate::{Record, TitleGroup, TitleGroups, TitleKey};
use holdings_identifiers::{identifiers_match, IdentifierKind};
use serde::Serialize;
use std::collections::BTreeMap;

/// The rule that accepted a duplicate group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchEvidence {
    /// Every member matches the anchor's identifier of this kind
    Identifier(IdentifierKind),
    /// No member has any identifier; the shared title is the only evidence
    NoIdentifiers,
}

impl std::fmt::Display for MatchEvidence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchEvidence::Identifier(kind) => write!(f, "{kind}"),
            MatchEvidence::NoIdentifiers => f.write_str("no identifiers"),
        }
    }
}

/// A title group confirmed as a duplicate, sorted by source.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DuplicateGroup {
    pub key: TitleKey,
    pub evidence: MatchEvidence,
    pub records: Vec<Record>,
}

impl DuplicateGroup {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Source of each member, in output order
    pub fn sources(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|r| r.source.as_str())
    }
}

/// Confirmed duplicate groups plus the widest group size.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct DuplicateReport {
    pub groups: Vec<DuplicateGroup>,
    /// Largest accepted group; 0 when nothing was accepted
    pub max_group_size: usize,
}

impl DuplicateReport {
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Number of accepted groups per evidence rule
    pub fn evidence_counts(&self) -> BTreeMap<MatchEvidence, usize> {
        let mut counts = BTreeMap::new();
        for group in &self.groups {
            *counts.entry(group.evidence).or_insert(0) += 1;
        }
        counts
    }
}

/// Decide whether a title group is a duplicate, and on what evidence.
///
/// Groups with fewer than two records are never duplicates.
pub fn classify_group(group: &TitleGroup) -> Option<MatchEvidence> {
    if group.len() < 2 {
        return None;
    }
    let anchor = group.anchor()?;

    for kind in IdentifierKind::ALL {
        if let Some(anchor_value) = anchor.identifier(kind) {
            let all_match = group
                .records
                .iter()
                .all(|r| identifiers_match(anchor_value, r.identifier(kind).unwrap_or("")));
            if all_match {
                return Some(MatchEvidence::Identifier(kind));
            }
        }
    }

    if group.records.iter().all(Record::has_no_identifiers) {
        return Some(MatchEvidence::NoIdentifiers);
    }

    None
}

/// Classify every title group and collect the confirmed duplicates.
pub fn find_duplicates(groups: &TitleGroups) -> DuplicateReport {
    let mut report = DuplicateReport::default();

    for group in groups {
        let Some(evidence) = classify_group(group) else {
            continue;
        };

        let mut records = group.records.clone();
        records.sort_by(|a, b| a.source.cmp(&b.source));

        report.max_group_size = report.max_group_size.max(records.len());
        report.groups.push(DuplicateGroup {
            key: group.key.clone(),
            evidence,
            records,
        });
    }

    tracing::debug!(
        duplicates = report.len(),
        max_group_size = report.max_group_size,
        "Classified title groups"
    );
    report
}
