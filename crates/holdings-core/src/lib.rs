//! Cross-catalog holdings deduplication
//!
//! This crate turns a batch of catalog records into confirmed duplicate groups:
//! - Record: one catalog entry with title, source and four identifiers
//! - Validation: malformed identifiers are cleared in place
//! - Grouping: records are bucketed by normalized title, dropping repeats
//!   from the same source
//! - Classification: a title group is a duplicate when every member agrees
//!   with the first record on one identifier, or none has any identifier
//! - Graph: which sources share duplicates, for downstream rendering
//!
//! # Design
//!
//! Every stage is a plain function over owned or borrowed values. Nothing is
//! cached between runs; `run_pipeline` wires the stages together.

pub mod classification;
pub mod graph;
pub mod grouping;
pub mod pipeline;
pub mod record;
pub mod validation;

pub use classification::*;
pub use graph::*;
pub use grouping::*;
pub use pipeline::*;
pub use record::*;
pub use validation::*;

pub use holdings_identifiers::IdentifierKind;
