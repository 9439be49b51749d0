//! Shortest-path oracle over a fixed undirected graph.
//!
//! Purpose
//! - Answer pairwise shortest-path-length queries, memoized for the lifetime
//!   of one search invocation (the graph is immutable while an oracle is
//!   alive, so cached lengths never go stale).
//! - Enumerate *all* paths of minimum edge count between two vertices while
//!   avoiding an exclusion set, via a cost-ordered priority search with unit
//!   weights: once the first path reaches the goal at cost C, only remaining
//!   cost-C entries are drained and everything longer is discarded.
//!
//! The oracle is owned by a single search; it is deliberately not a
//! process-wide cache so two searches over different graphs cannot observe
//! each other's results.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap, HashSet, VecDeque};

use petgraph::graph::{NodeIndex, UnGraph};

/// Memoizing distance and tied-shortest-path queries for one graph.
pub struct PathOracle<'g, N, E> {
    graph: &'g UnGraph<N, E>,
    lens: HashMap<(NodeIndex, NodeIndex), Option<usize>>,
}

impl<'g, N, E> PathOracle<'g, N, E> {
    pub fn new(graph: &'g UnGraph<N, E>) -> Self {
        Self {
            graph,
            lens: HashMap::new(),
        }
    }

    /// Shortest-path edge count between `a` and `b`, `None` when no path
    /// exists. Memoized per unordered pair.
    pub fn path_len(&mut self, a: NodeIndex, b: NodeIndex) -> Option<usize> {
        let key = if a <= b { (a, b) } else { (b, a) };
        if let Some(&cached) = self.lens.get(&key) {
            return cached;
        }
        let len = self.bfs_len(a, b);
        self.lens.insert(key, len);
        len
    }

    fn bfs_len(&self, a: NodeIndex, b: NodeIndex) -> Option<usize> {
        if a == b {
            return Some(0);
        }
        let mut dist: HashMap<NodeIndex, usize> = HashMap::new();
        let mut queue = VecDeque::new();
        dist.insert(a, 0);
        queue.push_back(a);
        while let Some(v) = queue.pop_front() {
            let dv = dist[&v];
            for nb in self.graph.neighbors(v) {
                if !dist.contains_key(&nb) {
                    if nb == b {
                        return Some(dv + 1);
                    }
                    dist.insert(nb, dv + 1);
                    queue.push_back(nb);
                }
            }
        }
        None
    }

    /// All simple paths of minimum edge count from `start` to `goal` that
    /// avoid every vertex in `avoid`. Paths longer than `max_edges` are
    /// pruned during expansion, so an empty result means the two vertices do
    /// not connect within the bound under the exclusion set.
    pub fn shortest_paths_avoiding(
        &self,
        start: NodeIndex,
        goal: NodeIndex,
        avoid: &HashSet<NodeIndex>,
        max_edges: usize,
    ) -> Vec<Vec<NodeIndex>> {
        let mut found = Vec::new();
        if avoid.contains(&start) || avoid.contains(&goal) {
            return found;
        }
        let mut heap: BinaryHeap<Reverse<(usize, Vec<NodeIndex>)>> = BinaryHeap::new();
        heap.push(Reverse((0, vec![start])));
        let mut best: Option<usize> = None;
        while let Some(Reverse((cost, path))) = heap.pop() {
            if best.is_some_and(|b| cost > b) {
                break;
            }
            let last = path[path.len() - 1];
            if last == goal {
                if best.is_none() {
                    best = Some(cost);
                }
                found.push(path);
                continue;
            }
            // Once the goal cost is known, queued non-goal entries of that
            // cost cannot extend into further ties.
            if best.is_some() || cost >= max_edges {
                continue;
            }
            for nb in self.graph.neighbors(last) {
                if avoid.contains(&nb) || path.contains(&nb) {
                    continue;
                }
                let mut next = path.clone();
                next.push(nb);
                heap.push(Reverse((cost + 1, next)));
            }
        }
        found
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path_graph(n: usize) -> UnGraph<(), ()> {
        let mut g = UnGraph::new_undirected();
        let nodes: Vec<NodeIndex> = (0..n).map(|_| g.add_node(())).collect();
        for w in nodes.windows(2) {
            g.add_edge(w[0], w[1], ());
        }
        g
    }

    #[test]
    fn path_len_on_a_chain() {
        let g = path_graph(5);
        let mut oracle = PathOracle::new(&g);
        assert_eq!(
            oracle.path_len(NodeIndex::new(0), NodeIndex::new(4)),
            Some(4)
        );
        assert_eq!(
            oracle.path_len(NodeIndex::new(2), NodeIndex::new(2)),
            Some(0)
        );
        // Cached on the unordered pair.
        assert_eq!(
            oracle.path_len(NodeIndex::new(4), NodeIndex::new(0)),
            Some(4)
        );
    }

    #[test]
    fn path_len_unreachable() {
        let mut g = path_graph(3);
        let isolated = g.add_node(());
        let mut oracle = PathOracle::new(&g);
        assert_eq!(oracle.path_len(NodeIndex::new(0), isolated), None);
    }

    #[test]
    fn ties_are_all_reported() {
        // A 4-cycle has two shortest paths between opposite corners.
        let mut g = UnGraph::<(), ()>::new_undirected();
        let n: Vec<NodeIndex> = (0..4).map(|_| g.add_node(())).collect();
        for i in 0..4 {
            g.add_edge(n[i], n[(i + 1) % 4], ());
        }
        let oracle = PathOracle::new(&g);
        let paths = oracle.shortest_paths_avoiding(n[0], n[2], &HashSet::new(), 8);
        assert_eq!(paths.len(), 2);
        assert!(paths.iter().all(|p| p.len() == 3));
    }

    #[test]
    fn exclusion_reroutes_or_blocks() {
        // 0-1-2 plus the detour 0-3-4-2.
        let mut g = UnGraph::<(), ()>::new_undirected();
        let n: Vec<NodeIndex> = (0..5).map(|_| g.add_node(())).collect();
        g.add_edge(n[0], n[1], ());
        g.add_edge(n[1], n[2], ());
        g.add_edge(n[0], n[3], ());
        g.add_edge(n[3], n[4], ());
        g.add_edge(n[4], n[2], ());
        let oracle = PathOracle::new(&g);

        let direct = oracle.shortest_paths_avoiding(n[0], n[2], &HashSet::new(), 8);
        assert_eq!(direct.len(), 1);
        assert_eq!(direct[0], vec![n[0], n[1], n[2]]);

        let avoid: HashSet<NodeIndex> = [n[1]].into_iter().collect();
        let detour = oracle.shortest_paths_avoiding(n[0], n[2], &avoid, 8);
        assert_eq!(detour.len(), 1);
        assert_eq!(detour[0], vec![n[0], n[3], n[4], n[2]]);

        // The detour needs three edges; a tighter bound suppresses it.
        let blocked = oracle.shortest_paths_avoiding(n[0], n[2], &avoid, 2);
        assert!(blocked.is_empty());
    }

    #[test]
    fn longer_ties_are_not_reported() {
        // Direct edge 0-2 wins; the two-edge route around 1 is dropped.
        let mut g = UnGraph::<(), ()>::new_undirected();
        let n: Vec<NodeIndex> = (0..3).map(|_| g.add_node(())).collect();
        g.add_edge(n[0], n[1], ());
        g.add_edge(n[1], n[2], ());
        g.add_edge(n[0], n[2], ());
        let oracle = PathOracle::new(&g);
        let paths = oracle.shortest_paths_avoiding(n[0], n[2], &HashSet::new(), 8);
        assert_eq!(paths, vec![vec![n[0], n[2]]]);
    }
}
