//! Title grouping with same-source deduplication
//!
//! Records are bucketed by their normalized title. Within a bucket, a record
//! that repeats an earlier entry from the same source (all four identifiers
//! matching, absent fields included) is dropped.

use crate::{Record, TitleKey};
use holdings_identifiers::{optional_identifiers_match, IdentifierKind};
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

/// Records sharing a normalized title, in input order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TitleGroup {
    pub key: TitleKey,
    pub records: Vec<Record>,
}

impl TitleGroup {
    pub fn new(key: TitleKey) -> Self {
        Self {
            key,
            records: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The record every other member is classified against
    pub fn anchor(&self) -> Option<&Record> {
        self.records.first()
    }

    /// Append `record` unless the group already holds the same entry from the
    /// same source. Returns whether it was appended.
    pub fn insert(&mut self, record: Record) -> bool {
        if self.records.iter().any(|existing| same_holding(&record, existing)) {
            return false;
        }
        self.records.push(record);
        true
    }
}

/// Whether two records are the same entry from the same source catalog.
///
/// `incoming` is the record being placed and goes first in every comparison:
/// when both identifiers carry an `X`, the wildcard position comes from
/// `incoming`. Absent identifiers compare as empty strings, so absent only
/// matches absent.
pub fn same_holding(incoming: &Record, existing: &Record) -> bool {
    incoming.source == existing.source
        && IdentifierKind::ALL.iter().all(|&kind| {
            optional_identifiers_match(incoming.identifier(kind), existing.identifier(kind))
        })
}

/// Title groups in order of first appearance of each title.
#[derive(Clone, Debug, Default, Serialize)]
pub struct TitleGroups {
    groups: Vec<TitleGroup>,
    #[serde(skip)]
    index: HashMap<TitleKey, usize>,
    /// Records dropped as same-source repeats
    dropped: usize,
}

impl TitleGroups {
    pub fn new() -> Self {
        Self::default()
    }

    /// Place one record into its title group
    pub fn insert(&mut self, record: Record) -> bool {
        let key = record.title_key();
        let slot = match self.index.get(&key) {
            Some(&slot) => slot,
            None => {
                self.groups.push(TitleGroup::new(key.clone()));
                self.index.insert(key, self.groups.len() - 1);
                self.groups.len() - 1
            }
        };

        let inserted = self.groups[slot].insert(record);
        if !inserted {
            self.dropped += 1;
        }
        inserted
    }

    pub fn get(&self, key: &TitleKey) -> Option<&TitleGroup> {
        self.index.get(key).map(|&slot| &self.groups[slot])
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TitleGroup> {
        self.groups.iter()
    }

    /// Number of distinct titles
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Records kept across all groups
    pub fn record_count(&self) -> usize {
        self.groups.iter().map(TitleGroup::len).sum()
    }

    /// Records dropped as same-source repeats
    pub fn dropped(&self) -> usize {
        self.dropped
    }

    /// Number of kept records per source, sorted by source name
    pub fn source_counts(&self) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        for record in self.groups.iter().flat_map(|group| group.records.iter()) {
            *counts.entry(record.source.clone()).or_insert(0) += 1;
        }
        counts
    }
}

impl<'a> IntoIterator for &'a TitleGroups {
    type Item = &'a TitleGroup;
    type IntoIter = std::slice::Iter<'a, TitleGroup>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.iter()
    }
}

/// Partition records by normalized title, dropping same-source repeats.
pub fn group_by_title(records: impl IntoIterator<Item = Record>) -> TitleGroups {
    let mut groups = TitleGroups::new();
    for record in records {
        groups.insert(record);
    }

    tracing::debug!(
        titles = groups.len(),
        kept = groups.record_count(),
        dropped = groups.dropped(),
        "Grouped records by title"
    );
    groups
}
