//! Graphviz output of the source co-occurrence graph

use crate::{IoError, IoResult};
use holdings_core::SourceGraph;
use std::io::Write;
use std::path::Path;

/// Write the graph as a DOT file, replacing any existing file.
pub fn write_graph(path: impl AsRef<Path>, graph: &SourceGraph) -> IoResult<()> {
    let path = path.as_ref();
    std::fs::write(path, graph.to_dot()).map_err(|e| IoError::Write(e.to_string()))?;
    tracing::info!(
        path = %path.display(),
        sources = graph.node_count(),
        links = graph.edge_count(),
        "Wrote source graph"
    );
    Ok(())
}

/// Write the graph in DOT format to any writer.
pub fn write_graph_to<W: Write>(mut writer: W, graph: &SourceGraph) -> IoResult<()> {
    writer
        .write_all(graph.to_dot().as_bytes())
        .map_err(|e| IoError::Write(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use holdings_core::run_pipeline;
    use holdings_core::Record;

    #[test]
    fn test_write_graph_to() {
        let outcome = run_pipeline(vec![Record::new("A", "DB1"), Record::new("A", "DB2")]);
        let graph = SourceGraph::build(&outcome.title_groups, &outcome.report);

        let mut out = Vec::new();
        write_graph_to(&mut out, &graph).unwrap();
        let dot = String::from_utf8(out).unwrap();
        assert!(dot.contains("label = \"DB1\""));
        assert!(dot.contains("0 -- 1"));
    }
}
