//! Identifier validation for records

use crate::Record;
use holdings_identifiers::{validate_field, IdentifierKind};

/// Validate all four identifier fields of a record in place.
///
/// Malformed values are cleared, never reported as errors. Returns the number
/// of fields that were cleared.
pub fn validate_record(record: &mut Record) -> usize {
    IdentifierKind::ALL
        .iter()
        .filter(|&&kind| validate_field(kind, record.identifier_mut(kind)))
        .count()
}

/// Validate every record in a batch; returns the total number of fields cleared.
pub fn validate_records(records: &mut [Record]) -> usize {
    let cleared: usize = records.iter_mut().map(validate_record).sum();
    tracing::debug!(
        records = records.len(),
        cleared,
        "Validated identifier fields"
    );
    cleared
}
