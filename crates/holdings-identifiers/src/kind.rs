//! Identifier kinds carried by a holdings record

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the four standard identifier columns of a catalog record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdentifierKind {
    /// Print serial number
    Issn,
    /// Electronic serial number
    EIssn,
    /// Print book number
    Isbn,
    /// Electronic book number
    EIsbn,
}

impl IdentifierKind {
    /// All kinds, in classification precedence order.
    pub const ALL: [IdentifierKind; 4] = [
        IdentifierKind::Issn,
        IdentifierKind::EIssn,
        IdentifierKind::Isbn,
        IdentifierKind::EIsbn,
    ];

    /// Display label, matching the conventional catalog column name.
    pub fn label(self) -> &'static str {
        match self {
            IdentifierKind::Issn => "ISSN",
            IdentifierKind::EIssn => "e-ISSN",
            IdentifierKind::Isbn => "ISBN",
            IdentifierKind::EIsbn => "e-ISBN",
        }
    }

    /// Number of significant characters (digits plus `X`) a valid value may have.
    pub fn valid_lengths(self) -> &'static [usize] {
        match self {
            IdentifierKind::Issn | IdentifierKind::EIssn => &[8],
            IdentifierKind::Isbn | IdentifierKind::EIsbn => &[10, 13],
        }
    }
}

impl fmt::Display for IdentifierKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
