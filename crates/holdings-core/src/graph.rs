//! Source co-occurrence graph
//!
//! Nodes are source catalogs weighted by how many records they contributed;
//! an edge joins two sources when at least one confirmed duplicate group
//! contains records from both, weighted by the number of such groups.

use crate::{DuplicateReport, TitleGroups};
use petgraph::dot::{Config, Dot};
use petgraph::graph::{EdgeReference, NodeIndex, UnGraph};
use std::collections::{BTreeMap, BTreeSet};

/// A source catalog node
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceNode {
    pub name: String,
    /// Records kept for this source after same-source deduplication
    pub record_count: usize,
}

/// Undirected graph of sources sharing duplicate titles.
#[derive(Clone, Debug, Default)]
pub struct SourceGraph {
    graph: UnGraph<SourceNode, usize>,
    nodes: BTreeMap<String, NodeIndex>,
}

impl SourceGraph {
    /// Build the graph from the title groups (node weights) and the confirmed
    /// duplicates (edge weights).
    pub fn build(groups: &TitleGroups, report: &DuplicateReport) -> Self {
        let mut graph = SourceGraph::default();

        for (name, record_count) in groups.source_counts() {
            let index = graph.graph.add_node(SourceNode {
                name: name.clone(),
                record_count,
            });
            graph.nodes.insert(name, index);
        }

        for (pair, weight) in cooccurrence_counts(report) {
            let (Some(&a), Some(&b)) = (graph.nodes.get(&pair.0), graph.nodes.get(&pair.1)) else {
                continue;
            };
            graph.graph.add_edge(a, b, weight);
        }

        tracing::debug!(
            sources = graph.node_count(),
            links = graph.edge_count(),
            "Built source co-occurrence graph"
        );
        graph
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Nodes sorted by source name
    pub fn nodes(&self) -> impl Iterator<Item = &SourceNode> {
        self.nodes.values().filter_map(|&index| self.graph.node_weight(index))
    }

    /// Number of duplicate groups shared by two sources, if they are linked
    pub fn edge_weight(&self, a: &str, b: &str) -> Option<usize> {
        let a = *self.nodes.get(a)?;
        let b = *self.nodes.get(b)?;
        let edge = self.graph.find_edge(a, b)?;
        self.graph.edge_weight(edge).copied()
    }

    /// Render as Graphviz DOT in a circular layout.
    ///
    /// Node width grows with the source's record count and edge colour
    /// darkens with the number of shared duplicate groups.
    pub fn to_dot(&self) -> String {
        let max_records = self
            .graph
            .node_weights()
            .map(|n| n.record_count)
            .max()
            .unwrap_or(0)
            .max(1) as f64;
        let max_weight = self.graph.edge_weights().copied().max().unwrap_or(0).max(1) as f64;

        let edge_attrs = |_: &UnGraph<SourceNode, usize>, edge: EdgeReference<'_, usize>| {
            let intensity = *edge.weight() as f64 / max_weight;
            format!(
                "label = \"{}\" penwidth = 4 color = \"{}\"",
                edge.weight(),
                blue_shade(intensity)
            )
        };
        let node_attrs = |_: &UnGraph<SourceNode, usize>, (_, node): (NodeIndex, &SourceNode)| {
            let width = 0.3 + 2.0 * node.record_count as f64 / max_records;
            format!(
                "label = \"{}\" shape = circle style = filled fillcolor = \"#A0CBE2\" width = {:.2}",
                escape_label(&node.name),
                width
            )
        };

        let dot = Dot::with_attr_getters(
            &self.graph,
            &[Config::EdgeNoLabel, Config::NodeNoLabel],
            &edge_attrs,
            &node_attrs,
        );
        format!("{dot:?}").replacen("graph {", "graph {\n    layout = circo", 1)
    }
}

/// Count, for each unordered pair of sources, the duplicate groups containing both.
///
/// Pairs are keyed with the lexically smaller source first. Pairs that never
/// co-occur are absent.
pub fn cooccurrence_counts(report: &DuplicateReport) -> BTreeMap<(String, String), usize> {
    let mut counts = BTreeMap::new();

    for group in &report.groups {
        let sources: BTreeSet<&str> = group.sources().collect();
        let sources: Vec<&str> = sources.into_iter().collect();
        for (i, a) in sources.iter().enumerate() {
            for b in &sources[i + 1..] {
                *counts.entry((a.to_string(), b.to_string())).or_insert(0) += 1;
            }
        }
    }

    counts
}

/// Hex colour from pale to saturated blue as `intensity` goes 0 to 1.
fn blue_shade(intensity: f64) -> String {
    let t = intensity.clamp(0.0, 1.0);
    let lerp = |from: f64, to: f64| (from + (to - from) * t).round() as u8;
    format!("#{:02X}{:02X}{:02X}", lerp(247.0, 8.0), lerp(251.0, 48.0), lerp(255.0, 107.0))
}

fn escape_label(label: &str) -> String {
    label.replace('\\', "\\\\").replace('"', "\\\"")
}
