//! Homodromic cycles in a directed graph.
//!
//! A homodromic cycle is a directed cycle every edge of which points along
//! the traversal direction: in a hydrogen-bond network, a loop of uniformly
//! oriented bonds. Enumeration is by exact cycle size with head-minimum
//! symmetry breaking: a cycle is only reported from its smallest vertex, so
//! each directed cycle appears exactly once.

use std::collections::VecDeque;
use std::fmt;

use nalgebra::Vector3;
use petgraph::graph::{DiGraph, NodeIndex};

/// Components of a summed edge displacement below this magnitude count as
/// canceled.
const DIPOLE_EPS: f64 = 1e-8;

/// Input-contract violations for [`dicycles_iter`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DicyclesError {
    /// A directed cycle needs at least three vertices.
    SizeTooSmall { size: usize },
}

impl fmt::Display for DicyclesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DicyclesError::SizeTooSmall { size } => {
                write!(f, "cycle size {size} is below 3")
            }
        }
    }
}

impl std::error::Error for DicyclesError {}

/// Lazily enumerate the homodromic cycles of exactly `size` vertices.
///
/// Each cycle is reported once, starting at its smallest vertex, in the
/// direction of its edges.
pub fn dicycles_iter<N, E>(
    digraph: &DiGraph<N, E>,
    size: usize,
) -> Result<DicyclesIter<'_, N, E>, DicyclesError> {
    if size < 3 {
        return Err(DicyclesError::SizeTooSmall { size });
    }
    Ok(DicyclesIter {
        digraph,
        size,
        heads: digraph.node_indices().collect(),
        cursor: 0,
        pending: VecDeque::new(),
    })
}

/// As [`dicycles_iter`], but additionally require the per-edge displacement
/// vectors (the edge weights) to cancel around the loop, dropping cycles
/// that wind around the periodic cell.
pub fn dicycles_nonspanning_iter<N>(
    digraph: &DiGraph<N, Vector3<f64>>,
    size: usize,
) -> Result<impl Iterator<Item = Vec<NodeIndex>> + '_, DicyclesError> {
    Ok(dicycles_iter(digraph, size)?.filter(move |cycle| {
        let mut sum = Vector3::zeros();
        for i in 0..cycle.len() {
            let a = cycle[(i + cycle.len() - 1) % cycle.len()];
            let b = cycle[i];
            if let Some(e) = digraph.find_edge(a, b) {
                sum += digraph[e];
            }
        }
        sum.iter().all(|c| c.abs() <= DIPOLE_EPS)
    }))
}

/// Iterator over homodromic cycles; see [`dicycles_iter`].
pub struct DicyclesIter<'g, N, E> {
    digraph: &'g DiGraph<N, E>,
    size: usize,
    heads: Vec<NodeIndex>,
    cursor: usize,
    pending: VecDeque<Vec<NodeIndex>>,
}

impl<'g, N, E> Iterator for DicyclesIter<'g, N, E> {
    type Item = Vec<NodeIndex>;

    fn next(&mut self) -> Option<Vec<NodeIndex>> {
        loop {
            if let Some(cycle) = self.pending.pop_front() {
                return Some(cycle);
            }
            if self.cursor >= self.heads.len() {
                return None;
            }
            let head = self.heads[self.cursor];
            self.cursor += 1;
            let mut history = vec![head];
            self.find(&mut history);
        }
    }
}

impl<'g, N, E> DicyclesIter<'g, N, E> {
    /// Depth-first extension of `history` along successor edges; vertices
    /// below the head are skipped so each cycle has a unique start.
    fn find(&mut self, history: &mut Vec<NodeIndex>) {
        let g = self.digraph;
        let head = history[0];
        let last = history[history.len() - 1];
        if history.len() == self.size {
            for succ in g.neighbors(last) {
                if succ == head {
                    self.pending.push_back(history.clone());
                }
            }
            return;
        }
        for succ in g.neighbors(last) {
            if succ < head || history.contains(&succ) {
                continue;
            }
            history.push(succ);
            self.find(history);
            history.pop();
        }
    }
}
