//! Triple enumeration, shortcut pruning, and the spanning filter.

use std::collections::{HashSet, VecDeque};
use std::fmt;

use nalgebra::Vector3;
use petgraph::graph::{NodeIndex, UnGraph};
use tracing::debug;

use crate::cell::loop_displacement;
use crate::oracle::PathOracle;

/// An ordered simple cycle of at least three vertices. Identity for
/// deduplication is the vertex set; the emitted ordering is whichever
/// traversal was discovered first.
pub type Ring = Vec<NodeIndex>;

/// Components of a loop displacement sum beyond this magnitude mark a
/// spanning ring.
const SPAN_EPS: f64 = 1e-5;

/// Input-contract violations for [`cycles_iter`], raised at entry only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CyclesError {
    /// The size bound admits no cycle: a simple cycle needs three vertices.
    MaxSizeTooSmall { maxsize: usize },
    /// The position table does not cover the node set.
    PositionCountMismatch { nodes: usize, positions: usize },
}

impl fmt::Display for CyclesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CyclesError::MaxSizeTooSmall { maxsize } => {
                write!(f, "maximum ring size {maxsize} is below 3")
            }
            CyclesError::PositionCountMismatch { nodes, positions } => write!(
                f,
                "position table holds {positions} entries for {nodes} nodes"
            ),
        }
    }
}

impl std::error::Error for CyclesError {}

/// Lazily enumerate the minimal rings of `graph` up to `maxsize` vertices.
///
/// With `pos` supplied (one fractional coordinate per node, node-index
/// order), spanning rings are excluded. The iterator is finite and
/// restartable only by calling `cycles_iter` again; two runs over the same
/// input produce the same set of vertex sets, in an unspecified order.
pub fn cycles_iter<'g, N, E>(
    graph: &'g UnGraph<N, E>,
    maxsize: usize,
    pos: Option<&'g [Vector3<f64>]>,
) -> Result<CyclesIter<'g, N, E>, CyclesError> {
    if maxsize < 3 {
        return Err(CyclesError::MaxSizeTooSmall { maxsize });
    }
    if let Some(p) = pos {
        if p.len() != graph.node_count() {
            return Err(CyclesError::PositionCountMismatch {
                nodes: graph.node_count(),
                positions: p.len(),
            });
        }
    }
    let nodes: Vec<NodeIndex> = graph.node_indices().collect();
    let neis = match nodes.first() {
        Some(&x) => sorted_neighbors(graph, x),
        None => Vec::new(),
    };
    Ok(CyclesIter {
        graph,
        pos,
        maxsize,
        oracle: PathOracle::new(graph),
        seen: HashSet::new(),
        pending: VecDeque::new(),
        nodes,
        node_cursor: 0,
        neis,
        pair_i: 0,
        pair_j: 1,
    })
}

/// Iterator over minimal rings; see [`cycles_iter`].
pub struct CyclesIter<'g, N, E> {
    graph: &'g UnGraph<N, E>,
    pos: Option<&'g [Vector3<f64>]>,
    maxsize: usize,
    oracle: PathOracle<'g, N, E>,
    /// Vertex sets of accepted rings (sorted vectors).
    seen: HashSet<Vec<NodeIndex>>,
    pending: VecDeque<Ring>,
    nodes: Vec<NodeIndex>,
    node_cursor: usize,
    /// Sorted neighbor list of the current pivot vertex.
    neis: Vec<NodeIndex>,
    pair_i: usize,
    pair_j: usize,
}

impl<'g, N, E> Iterator for CyclesIter<'g, N, E> {
    type Item = Ring;

    fn next(&mut self) -> Option<Ring> {
        loop {
            if let Some(ring) = self.pending.pop_front() {
                return Some(ring);
            }
            if !self.advance_triple() {
                return None;
            }
        }
    }
}

impl<'g, N, E> CyclesIter<'g, N, E> {
    /// Process the next (x, y, z) triple, filling `pending` with any rings
    /// it generates. Returns false when all triples are exhausted.
    fn advance_triple(&mut self) -> bool {
        loop {
            if let Some((i, j)) = self.next_pair() {
                let x = self.nodes[self.node_cursor];
                let (y, z) = (self.neis[i], self.neis[j]);
                self.harvest(x, y, z);
                return true;
            }
            self.node_cursor += 1;
            if self.node_cursor >= self.nodes.len() {
                return false;
            }
            self.neis = sorted_neighbors(self.graph, self.nodes[self.node_cursor]);
            self.pair_i = 0;
            self.pair_j = 1;
        }
    }

    fn next_pair(&mut self) -> Option<(usize, usize)> {
        if self.pair_j >= self.neis.len() {
            return None;
        }
        let pair = (self.pair_i, self.pair_j);
        self.pair_j += 1;
        if self.pair_j >= self.neis.len() {
            self.pair_i += 1;
            self.pair_j = self.pair_i + 1;
        }
        Some(pair)
    }

    /// Candidate rings through the triple y–x–z: `x` prepended to every
    /// tied-shortest z→y path avoiding `x`.
    fn harvest(&mut self, x: NodeIndex, y: NodeIndex, z: NodeIndex) {
        let avoid: HashSet<NodeIndex> = [x].into_iter().collect();
        let paths = self
            .oracle
            .shortest_paths_avoiding(z, y, &avoid, self.maxsize - 2);
        for path in paths {
            let mut ring = Vec::with_capacity(path.len() + 1);
            ring.push(x);
            ring.extend(path);
            if self.has_shortcut(&ring) {
                debug!(ring = ?ring, "shortcut, pruned");
                continue;
            }
            let mut key = ring.clone();
            key.sort_unstable();
            if self.seen.contains(&key) {
                continue;
            }
            if let Some(pos) = self.pos {
                if is_spanning(&ring, pos) {
                    debug!(ring = ?ring, "spans the periodic cell, pruned");
                    continue;
                }
            }
            self.seen.insert(key);
            self.pending.push_back(ring);
        }
    }

    /// A ring has a shortcut when some vertex pair is closer in the graph
    /// than along the ring.
    fn has_shortcut(&mut self, ring: &[NodeIndex]) -> bool {
        let n = ring.len();
        for i in 0..n {
            for j in (i + 1)..n {
                let along = (j - i).min(n - (j - i));
                if let Some(direct) = self.oracle.path_len(ring[i], ring[j]) {
                    if direct < along {
                        return true;
                    }
                }
            }
        }
        false
    }
}

fn sorted_neighbors<N, E>(graph: &UnGraph<N, E>, x: NodeIndex) -> Vec<NodeIndex> {
    let mut neis: Vec<NodeIndex> = graph.neighbors(x).collect();
    neis.sort_unstable();
    neis.dedup();
    neis
}

/// True when the minimum-image displacements around the ring do not cancel.
fn is_spanning(ring: &[NodeIndex], pos: &[Vector3<f64>]) -> bool {
    loop_displacement(ring, pos)
        .iter()
        .any(|c| c.abs() > SPAN_EPS)
}
