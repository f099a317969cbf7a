//! CSV catalog reader

use crate::{ColumnLayout, IoError, IoResult};
use holdings_core::{IdentifierKind, Record};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Positions of the six record columns within a header row
#[derive(Debug, Clone, Copy)]
struct ColumnIndices {
    title: usize,
    source: usize,
    identifiers: [usize; 4],
}

impl ColumnIndices {
    fn resolve(headers: &csv::StringRecord, layout: &ColumnLayout) -> IoResult<Self> {
        let find = |name: &str| {
            headers
                .iter()
                .position(|h| h.trim() == name)
                .ok_or_else(|| IoError::MissingColumn(name.to_string()))
        };

        let mut identifiers = [0; 4];
        for (slot, kind) in identifiers.iter_mut().zip(IdentifierKind::ALL) {
            *slot = find(layout.identifier(kind))?;
        }

        Ok(Self {
            title: find(&layout.title)?,
            source: find(&layout.source)?,
            identifiers,
        })
    }
}

/// Read catalog records from a CSV file with a header row.
pub fn read_records(path: impl AsRef<Path>, layout: &ColumnLayout) -> IoResult<Vec<Record>> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(IoError::FileNotFound(path.display().to_string()));
    }

    let file = File::open(path).map_err(|e| IoError::OpenFailed(e.to_string()))?;
    let records = read_records_from(BufReader::new(file), layout)?;
    tracing::info!(path = %path.display(), records = records.len(), "Read catalog records");
    Ok(records)
}

/// Read catalog records from any CSV source with a header row.
///
/// Every configured column must be present in the header. Rows shorter than
/// the header are accepted and their missing cells read as empty; empty
/// identifier cells become absent identifiers. Values are passed through
/// untouched, so identifier validation is left to the pipeline.
pub fn read_records_from<R: Read>(reader: R, layout: &ColumnLayout) -> IoResult<Vec<Record>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers = reader.headers().map_err(|e| IoError::InvalidFormat {
        row: 0,
        message: e.to_string(),
    })?;
    let columns = ColumnIndices::resolve(headers, layout)?;

    let mut records = Vec::new();
    for (row, result) in reader.records().enumerate() {
        let row_data = result.map_err(|e| IoError::InvalidFormat {
            row: row + 1,
            message: e.to_string(),
        })?;
        let cell = |index: usize| row_data.get(index).unwrap_or("");

        let mut record = Record::new(cell(columns.title), cell(columns.source));
        for (kind, &index) in IdentifierKind::ALL.into_iter().zip(&columns.identifiers) {
            record.set_identifier(kind, cell(index));
        }
        records.push(record);
    }

    Ok(records)
}
