//! Perimeter-growth backtracking search over the ring set.

use std::collections::{HashMap, HashSet, VecDeque};

use petgraph::algo::connected_components;
use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;
use tracing::debug;

use crate::cycles::Ring;

use super::build::{cycle_edges, triplets, BaseGraph, RingIndices};
use super::types::{AssemblyCfg, Cage, PolyhedError, RingId};
use super::zipper::merge_cycles;

/// Lazily enumerate the closed polyhedral fragments that can be assembled
/// from `rings` under `cfg`.
///
/// Each item is the sorted list of face-ring ids of one distinct cage.
/// Every dead branch of the search is pruned silently; only the input
/// contract is checked here.
pub fn polyhedra_iter(rings: &[Ring], cfg: AssemblyCfg) -> Result<PolyhedraIter<'_>, PolyhedError> {
    if cfg.max_faces < 1 {
        return Err(PolyhedError::FaceBoundTooSmall);
    }
    if let Some((index, cycle)) = rings.iter().enumerate().find(|(_, c)| c.len() < 3) {
        return Err(PolyhedError::DegenerateRing {
            index,
            len: cycle.len(),
        });
    }
    let indices = RingIndices::build(rings);
    let base = BaseGraph::build(rings);
    Ok(PolyhedraIter {
        rings,
        cfg,
        indices,
        base,
        seen: HashSet::new(),
        pending: VecDeque::new(),
        seed_cursor: 0,
    })
}

/// Iterator over closed fragments; see [`polyhedra_iter`].
pub struct PolyhedraIter<'a> {
    rings: &'a [Ring],
    cfg: AssemblyCfg,
    indices: RingIndices,
    base: BaseGraph,
    /// Fragments already emitted, keyed by sorted face ids.
    seen: HashSet<Cage>,
    pending: VecDeque<Cage>,
    seed_cursor: RingId,
}

impl<'a> Iterator for PolyhedraIter<'a> {
    type Item = Cage;

    fn next(&mut self) -> Option<Cage> {
        loop {
            if let Some(cage) = self.pending.pop_front() {
                return Some(cage);
            }
            if self.seed_cursor >= self.rings.len() {
                return None;
            }
            let seed = self.seed_cursor;
            self.seed_cursor += 1;
            self.expand_seed(seed);
        }
    }
}

impl<'a> PolyhedraIter<'a> {
    /// Try every second face across the seed ring's first boundary edge.
    fn expand_seed(&mut self, seed: RingId) {
        let rings = self.rings;
        let peri = &rings[seed];
        let edge = (peri[0], peri[1]);
        let candidates: Vec<RingId> = self.indices.edge.get(&edge).cloned().unwrap_or_default();
        let mut mult: HashMap<NodeIndex, u32> = HashMap::new();
        for &v in peri {
            mult.insert(v, 1);
        }
        for second in candidates {
            // Symmetry breaking: the seed carries the smallest face id.
            if seed >= second {
                continue;
            }
            let nodes = &rings[second];
            if let Some(newperi) = merge_cycles(peri, nodes, edge.0, edge.1) {
                for &v in nodes {
                    *mult.entry(v).or_insert(0) += 1;
                }
                let mut fragment: HashSet<RingId> = [seed, second].into_iter().collect();
                debug!(seed, second, peri = ?newperi, "seed pair merged");
                self.grow(seed, newperi, &mut fragment, &mut mult);
                for &v in nodes {
                    if let Some(m) = mult.get_mut(&v) {
                        *m -= 1;
                    }
                }
            }
        }
    }

    /// Extend the fragment one face at a time until the perimeter closes,
    /// undoing every multiplicity increment on the way back out.
    fn grow(
        &mut self,
        origin: RingId,
        peri: Vec<NodeIndex>,
        fragment: &mut HashSet<RingId>,
        mult: &mut HashMap<NodeIndex, u32>,
    ) {
        let rings = self.rings;
        if fragment.len() > self.cfg.max_faces {
            return;
        }
        if peri.is_empty() {
            self.finish(fragment);
            return;
        }
        // A boundary vertex buried under three faces can never close.
        if peri
            .iter()
            .any(|v| mult.get(v).copied().unwrap_or(0) > 2)
        {
            return;
        }
        for i in 0..peri.len() {
            if mult.get(&peri[i]).copied().unwrap_or(0) != 2 {
                continue;
            }
            // The next face must cover the corner left-center-right.
            let center = peri[i];
            let left = peri[(i + peri.len() - 1) % peri.len()];
            let right = peri[(i + 1) % peri.len()];
            let mut trynext = false;
            let candidates: Vec<RingId> = self
                .indices
                .tri
                .get(&(left, center, right))
                .cloned()
                .unwrap_or_default();
            for rid in candidates {
                if origin >= rid || fragment.contains(&rid) {
                    continue;
                }
                let nodes = &rings[rid];
                match merge_cycles(&peri, nodes, center, right) {
                    None => {
                        // Non-simple fusion here; another pivot may work.
                        trynext = true;
                    }
                    Some(newperi) => {
                        for &v in nodes {
                            *mult.entry(v).or_insert(0) += 1;
                        }
                        fragment.insert(rid);
                        self.grow(origin, newperi, fragment, mult);
                        fragment.remove(&rid);
                        for &v in nodes {
                            if let Some(m) = mult.get_mut(&v) {
                                *m -= 1;
                            }
                        }
                    }
                }
            }
            if !trynext {
                break;
            }
        }
    }

    /// The perimeter closed: validate and emit.
    fn finish(&mut self, fragment: &HashSet<RingId>) {
        if self.contains_extra_rings(fragment) {
            debug!(fragment = ?fragment, "encloses a ring that is not a face");
            return;
        }
        if self.captures_interior(fragment) {
            debug!(fragment = ?fragment, "traps interior vertices");
            return;
        }
        let mut cage: Cage = fragment.iter().copied().collect();
        cage.sort_unstable();
        if self.seen.insert(cage.clone()) {
            self.pending.push_back(cage);
        }
    }

    /// True when some ring outside the fragment lies entirely on fragment
    /// vertices, i.e. the surface swallowed a face it did not use.
    fn contains_extra_rings(&self, fragment: &HashSet<RingId>) -> bool {
        let rings = self.rings;
        let mut tris: HashSet<(NodeIndex, NodeIndex, NodeIndex)> = HashSet::new();
        let mut allnodes: HashSet<NodeIndex> = HashSet::new();
        for &rid in fragment {
            let nodes = &rings[rid];
            allnodes.extend(nodes.iter().copied());
            tris.extend(triplets(nodes));
        }
        for tri in &tris {
            if let Some(ids) = self.indices.tri.get(tri) {
                for &rid in ids {
                    if !fragment.contains(&rid)
                        && rings[rid].iter().all(|v| allnodes.contains(v))
                    {
                        return true;
                    }
                }
            }
        }
        false
    }

    /// True when the fragment walls off part of the base graph, i.e. it is
    /// not an empty cage.
    fn captures_interior(&self, fragment: &HashSet<RingId>) -> bool {
        let mut nodes: HashSet<NodeIndex> = HashSet::new();
        for &rid in fragment {
            nodes.extend(self.rings[rid].iter().copied());
        }
        if self.cfg.quick {
            self.has_swallowed_neighbor(&nodes)
        } else {
            self.splits_base_graph(&nodes)
        }
    }

    /// Exact test: delete the fragment vertices and compare component
    /// counts against the baseline.
    fn splits_base_graph(&self, frag_nodes: &HashSet<NodeIndex>) -> bool {
        let base = &self.base.graph;
        let mut survivors: HashMap<NodeIndex, NodeIndex> = HashMap::new();
        let mut g2: UnGraph<(), ()> = UnGraph::new_undirected();
        for b in base.node_indices() {
            if !frag_nodes.contains(&base[b]) {
                survivors.insert(b, g2.add_node(()));
            }
        }
        for er in base.edge_references() {
            if let (Some(&a), Some(&b)) = (survivors.get(&er.source()), survivors.get(&er.target()))
            {
                g2.add_edge(a, b, ());
            }
        }
        connected_components(&g2) > self.base.ncompo
    }

    /// Heuristic test: a neighbor of the fragment all of whose own
    /// neighbors lie inside the fragment is an interior vertex. Fragments
    /// with two or more adjacent interior vertices can escape this check.
    fn has_swallowed_neighbor(&self, frag_nodes: &HashSet<NodeIndex>) -> bool {
        let base = &self.base.graph;
        let mut adjacent: HashSet<NodeIndex> = HashSet::new();
        for &v in frag_nodes {
            if let Some(&bv) = self.base.to_base.get(&v) {
                for nb in base.neighbors(bv) {
                    if !frag_nodes.contains(&base[nb]) {
                        adjacent.insert(nb);
                    }
                }
            }
        }
        for &bn in &adjacent {
            let linked = base
                .neighbors(bn)
                .any(|nb| !frag_nodes.contains(&base[nb]));
            if !linked {
                return true;
            }
        }
        false
    }
}

/// Materialize a cage's face boundaries as a graph. Node weights carry the
/// vertex ids from the originating graph.
pub fn cage_to_graph(cage: &[RingId], rings: &[Ring]) -> UnGraph<NodeIndex, ()> {
    let mut g: UnGraph<NodeIndex, ()> = UnGraph::new_undirected();
    let mut seen: HashMap<NodeIndex, NodeIndex> = HashMap::new();
    for &rid in cage {
        for (a, b) in cycle_edges(&rings[rid]) {
            let ga = *seen.entry(a).or_insert_with(|| g.add_node(a));
            let gb = *seen.entry(b).or_insert_with(|| g.add_node(b));
            g.update_edge(ga, gb, ());
        }
    }
    g
}
