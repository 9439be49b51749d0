//! Lookup indices and the base graph derived from the ring list.
//!
//! The assembler never walks the original simulation graph; everything it
//! needs is derived from the rings themselves: which rings run through a
//! given consecutive vertex triple or edge (both orientations), and the
//! union graph of all ring edges whose connected-component count is the
//! baseline for the interior-capture test.

use std::collections::HashMap;

use petgraph::algo::connected_components;
use petgraph::graph::{NodeIndex, UnGraph};

use crate::cycles::Ring;

use super::types::RingId;

/// Consecutive (prev2, prev, v) triples around a cycle, wrapping.
pub(super) fn triplets(cycle: &[NodeIndex]) -> Vec<(NodeIndex, NodeIndex, NodeIndex)> {
    let n = cycle.len();
    (0..n)
        .map(|i| (cycle[(i + n - 2) % n], cycle[(i + n - 1) % n], cycle[i]))
        .collect()
}

/// Consecutive (prev, v) edges around a cycle, wrapping.
pub(super) fn cycle_edges(cycle: &[NodeIndex]) -> Vec<(NodeIndex, NodeIndex)> {
    let n = cycle.len();
    (0..n).map(|i| (cycle[(i + n - 1) % n], cycle[i])).collect()
}

/// Ring ids keyed by their boundary triples and edges, both orientations.
pub(super) struct RingIndices {
    pub tri: HashMap<(NodeIndex, NodeIndex, NodeIndex), Vec<RingId>>,
    pub edge: HashMap<(NodeIndex, NodeIndex), Vec<RingId>>,
}

impl RingIndices {
    pub fn build(rings: &[Ring]) -> Self {
        let mut tri: HashMap<(NodeIndex, NodeIndex, NodeIndex), Vec<RingId>> = HashMap::new();
        let mut edge: HashMap<(NodeIndex, NodeIndex), Vec<RingId>> = HashMap::new();
        for (rid, cycle) in rings.iter().enumerate() {
            for (a, b, c) in triplets(cycle) {
                tri.entry((a, b, c)).or_default().push(rid);
                tri.entry((c, b, a)).or_default().push(rid);
            }
            for (a, b) in cycle_edges(cycle) {
                edge.entry((a, b)).or_default().push(rid);
                edge.entry((b, a)).or_default().push(rid);
            }
        }
        Self { tri, edge }
    }
}

/// Union of all ring edges, with node weights carrying the original vertex
/// ids, plus the baseline component count.
pub(super) struct BaseGraph {
    pub graph: UnGraph<NodeIndex, ()>,
    pub to_base: HashMap<NodeIndex, NodeIndex>,
    pub ncompo: usize,
}

impl BaseGraph {
    pub fn build(rings: &[Ring]) -> Self {
        let mut graph: UnGraph<NodeIndex, ()> = UnGraph::new_undirected();
        let mut to_base: HashMap<NodeIndex, NodeIndex> = HashMap::new();
        for cycle in rings {
            for (a, b) in cycle_edges(cycle) {
                let ba = *to_base.entry(a).or_insert_with(|| graph.add_node(a));
                let bb = *to_base.entry(b).or_insert_with(|| graph.add_node(b));
                graph.update_edge(ba, bb, ());
            }
        }
        let ncompo = connected_components(&graph);
        Self {
            graph,
            to_base,
            ncompo,
        }
    }
}
