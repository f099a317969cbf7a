//! Fixed-width CSV output of confirmed duplicate groups
//!
//! Each row holds one duplicate group: the six record columns repeated once
//! per member, padded with empty cells up to the widest group. The header
//! repeats the six column names the same number of times.

use crate::{ColumnLayout, IoError, IoResult};
use holdings_core::{DuplicateReport, IdentifierKind, Record};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Columns contributed by each record
pub const FIELDS_PER_RECORD: usize = 6;

/// Write a duplicate report to a CSV file, replacing any existing file.
pub fn write_duplicates(
    path: impl AsRef<Path>,
    report: &DuplicateReport,
    layout: &ColumnLayout,
) -> IoResult<()> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|e| IoError::OpenFailed(e.to_string()))?;
    write_duplicates_to(BufWriter::new(file), report, layout)?;
    tracing::info!(
        path = %path.display(),
        groups = report.len(),
        width = report.max_group_size,
        "Wrote duplicate groups"
    );
    Ok(())
}

/// Write a duplicate report as CSV to any writer.
pub fn write_duplicates_to<W: Write>(
    mut writer: W,
    report: &DuplicateReport,
    layout: &ColumnLayout,
) -> IoResult<()> {
    let width = FIELDS_PER_RECORD * report.max_group_size;

    let header: Vec<&str> = layout
        .headers()
        .iter()
        .copied()
        .cycle()
        .take(width)
        .collect();
    // An empty report still gets a header line, left blank. Nothing is
    // buffered yet, so it can go straight to the underlying writer.
    if header.is_empty() {
        writer
            .write_all(b"\n")
            .map_err(|e| IoError::Write(e.to_string()))?;
    }
    let mut writer = csv::WriterBuilder::new()
        .flexible(false)
        .from_writer(writer);
    if !header.is_empty() {
        writer
            .write_record(&header)
            .map_err(|e| IoError::Write(e.to_string()))?;
    }

    for group in &report.groups {
        let mut row: Vec<&str> = Vec::with_capacity(width);
        for record in &group.records {
            row.extend(record_fields(record));
        }
        row.resize(width, "");
        writer
            .write_record(&row)
            .map_err(|e| IoError::Write(e.to_string()))?;
    }

    writer.flush().map_err(|e| IoError::Write(e.to_string()))?;
    Ok(())
}

/// The six output cells of one record; absent identifiers are empty.
pub fn record_fields(record: &Record) -> [&str; FIELDS_PER_RECORD] {
    let id = move |kind| record.identifier(kind).unwrap_or("");
    [
        record.title.as_str(),
        record.source.as_str(),
        id(IdentifierKind::Issn),
        id(IdentifierKind::EIssn),
        id(IdentifierKind::Isbn),
        id(IdentifierKind::EIsbn),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use holdings_core::{find_duplicates, group_by_title};

    fn report() -> DuplicateReport {
        let groups = group_by_title(vec![
            Record::new("A", "DB2"),
            Record::new("A", "DB1"),
            Record::new("A", "DB3"),
            Record::new("B", "DB1").with_identifier(IdentifierKind::Isbn, "0306406152"),
            Record::new("B", "DB2").with_identifier(IdentifierKind::Isbn, "030640615X"),
        ]);
        find_duplicates(&groups)
    }

    fn render(report: &DuplicateReport) -> String {
        let mut out = Vec::new();
        write_duplicates_to(&mut out, report, &ColumnLayout::default()).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_fixed_width_rows() {
        let text = render(&report());
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines[0],
            "TITLE,DB,ISSN,e-ISSN,ISBN,e-ISBN,TITLE,DB,ISSN,e-ISSN,ISBN,e-ISBN,TITLE,DB,ISSN,e-ISSN,ISBN,e-ISBN"
        );
        assert_eq!(lines[1], "A,DB1,,,,,A,DB2,,,,,A,DB3,,,,");
        assert_eq!(lines[2], "B,DB1,,,0306406152,,B,DB2,,,030640615X,,,,,,,");
        for line in &lines {
            assert_eq!(line.matches(',').count(), 17);
        }
    }

    #[test]
    fn test_empty_report() {
        let text = render(&DuplicateReport::default());
        assert_eq!(text, "\n");
    }
}
