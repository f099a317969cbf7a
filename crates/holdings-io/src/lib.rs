//! holdings-io - file formats for holdings deduplication
//!
//! - **CSV input**: one catalog record per row, columns named by `ColumnLayout`
//! - **CSV output**: one confirmed duplicate group per fixed-width row
//! - **DOT output**: the source co-occurrence graph for Graphviz
//!
//! # Design
//!
//! Every file-based entry point has a `_from`/`_to` twin taking any
//! `Read`/`Write`, so the formats can be exercised without touching disk.

pub mod columns;
pub mod csv_reader;
pub mod csv_writer;
pub mod error;
pub mod graph_writer;

pub use columns::*;
pub use csv_reader::*;
pub use csv_writer::*;
pub use error::*;
pub use graph_writer::*;
