//! Column naming for holdings CSV files

use holdings_core::IdentifierKind;
use serde::{Deserialize, Serialize};

/// Header names of the six record columns.
///
/// The same layout is used to locate columns on input and to label the
/// repeated column blocks on output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnLayout {
    pub title: String,
    pub source: String,
    pub issn: String,
    pub e_issn: String,
    pub isbn: String,
    pub e_isbn: String,
}

impl Default for ColumnLayout {
    fn default() -> Self {
        Self {
            title: "TITLE".to_string(),
            source: "DB".to_string(),
            issn: "ISSN".to_string(),
            e_issn: "e-ISSN".to_string(),
            isbn: "ISBN".to_string(),
            e_isbn: "e-ISBN".to_string(),
        }
    }
}

impl ColumnLayout {
    /// Header for one identifier kind
    pub fn identifier(&self, kind: IdentifierKind) -> &str {
        match kind {
            IdentifierKind::Issn => &self.issn,
            IdentifierKind::EIssn => &self.e_issn,
            IdentifierKind::Isbn => &self.isbn,
            IdentifierKind::EIsbn => &self.e_isbn,
        }
    }

    /// All six headers in record order: title, source, then the identifiers
    pub fn headers(&self) -> [&str; 6] {
        [
            &self.title,
            &self.source,
            &self.issn,
            &self.e_issn,
            &self.isbn,
            &self.e_isbn,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_headers() {
        let layout = ColumnLayout::default();
        assert_eq!(
            layout.headers(),
            ["TITLE", "DB", "ISSN", "e-ISSN", "ISBN", "e-ISBN"]
        );
        assert_eq!(layout.identifier(IdentifierKind::EIsbn), "e-ISBN");
    }
}
