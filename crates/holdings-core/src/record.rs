//! Catalog record model

use holdings_identifiers::IdentifierKind;
use serde::{Deserialize, Serialize};

/// One catalog entry as read from a source catalog.
///
/// Identifier fields are `None` when the catalog had no value or the value
/// failed validation. Records have no identity of their own; two records are
/// compared purely by their field values.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub title: String,
    /// Source catalog (database) the record came from
    pub source: String,

    // Identifiers
    pub issn: Option<String>,
    pub e_issn: Option<String>,
    pub isbn: Option<String>,
    pub e_isbn: Option<String>,
}

impl Record {
    /// Create a record with no identifiers
    pub fn new(title: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            source: source.into(),
            ..Default::default()
        }
    }

    /// Builder-style setter for one identifier field.
    ///
    /// Empty strings are stored as absent.
    pub fn with_identifier(mut self, kind: IdentifierKind, value: impl Into<String>) -> Self {
        self.set_identifier(kind, value);
        self
    }

    /// Set one identifier field; empty strings are stored as absent.
    pub fn set_identifier(&mut self, kind: IdentifierKind, value: impl Into<String>) {
        let value = value.into();
        *self.identifier_mut(kind) = if value.is_empty() { None } else { Some(value) };
    }

    pub fn identifier(&self, kind: IdentifierKind) -> Option<&str> {
        match kind {
            IdentifierKind::Issn => self.issn.as_deref(),
            IdentifierKind::EIssn => self.e_issn.as_deref(),
            IdentifierKind::Isbn => self.isbn.as_deref(),
            IdentifierKind::EIsbn => self.e_isbn.as_deref(),
        }
    }

    pub fn identifier_mut(&mut self, kind: IdentifierKind) -> &mut Option<String> {
        match kind {
            IdentifierKind::Issn => &mut self.issn,
            IdentifierKind::EIssn => &mut self.e_issn,
            IdentifierKind::Isbn => &mut self.isbn,
            IdentifierKind::EIsbn => &mut self.e_isbn,
        }
    }

    /// True when none of the four identifier fields has a value
    pub fn has_no_identifiers(&self) -> bool {
        IdentifierKind::ALL
            .iter()
            .all(|&kind| self.identifier(kind).is_none())
    }

    /// Grouping key for this record's title
    pub fn title_key(&self) -> TitleKey {
        TitleKey::from_title(&self.title)
    }
}

/// Normalized title used to bucket records: trimmed and upper-cased.
///
/// No other normalization is applied; punctuation and inner whitespace must
/// agree for two titles to share a key.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TitleKey(String);

impl TitleKey {
    pub fn from_title(title: &str) -> Self {
        Self(title.trim().to_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TitleKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
