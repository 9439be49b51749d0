//! Small-motif matchers: triangles, tetrahedra, octahedra.
//!
//! Index-ordered scans for the simplices; octahedra go through subgraph
//! isomorphism against the octahedron template, with square-bipyramid
//! impostors (an antipodal pair bonded through the middle) filtered out.

use std::collections::{HashMap, HashSet};

use petgraph::algo::subgraph_isomorphisms_iter;
use petgraph::graph::{NodeIndex, UnGraph};

/// All triangles, each reported once with ascending vertex indices.
pub fn triangles<N, E>(g: &UnGraph<N, E>) -> Vec<[NodeIndex; 3]> {
    let mut out = Vec::new();
    for i in g.node_indices() {
        for j in g.neighbors(i) {
            if j <= i {
                continue;
            }
            for k in g.neighbors(j) {
                if k > j && g.contains_edge(k, i) {
                    out.push([i, j, k]);
                }
            }
        }
    }
    out
}

/// All tetrahedra (4-cliques), each reported once with ascending vertex
/// indices.
pub fn tetrahedra<N, E>(g: &UnGraph<N, E>) -> Vec<[NodeIndex; 4]> {
    let mut out = Vec::new();
    for [i, j, k] in triangles(g) {
        for l in g.neighbors(k) {
            if l > k && g.contains_edge(l, j) && g.contains_edge(i, l) {
                out.push([i, j, k, l]);
            }
        }
    }
    out
}

/// Octahedron adjacency over nodes 0..6: vertex 0 and 5 are the apices,
/// 1-2-3-4 the equator; antipodal pairs are (0,5), (1,3), (2,4).
fn octahedron_template() -> UnGraph<(), ()> {
    let mut t = UnGraph::new_undirected();
    let n: Vec<NodeIndex> = (0..6).map(|_| t.add_node(())).collect();
    for (a, b) in [
        (0, 1),
        (0, 2),
        (0, 3),
        (0, 4),
        (1, 2),
        (2, 3),
        (3, 4),
        (4, 1),
        (1, 5),
        (2, 5),
        (3, 5),
        (4, 5),
    ] {
        t.add_edge(n[a], n[b], ());
    }
    t
}

/// All octahedral six-vertex motifs, each reported once with ascending
/// vertex indices. Matches where an antipodal pair of the template is
/// bonded in `g` are square bipyramids, not octahedra, and are skipped.
pub fn octahedra<N, E>(g: &UnGraph<N, E>) -> Vec<[NodeIndex; 6]> {
    let template = octahedron_template();
    let tpl_ref = &template;
    let g_ref = &g;
    let mut node_match = |_: &(), _: &N| true;
    let mut edge_match = |_: &(), _: &E| true;
    let mut seen: HashSet<[NodeIndex; 6]> = HashSet::new();
    let mut out = Vec::new();
    if let Some(matches) =
        subgraph_isomorphisms_iter(&tpl_ref, g_ref, &mut node_match, &mut edge_match)
    {
        for m in matches {
            let v: Vec<NodeIndex> = m.into_iter().map(NodeIndex::new).collect();
            if g.contains_edge(v[0], v[5])
                || g.contains_edge(v[1], v[3])
                || g.contains_edge(v[2], v[4])
            {
                continue;
            }
            let mut key = [v[0], v[1], v[2], v[3], v[4], v[5]];
            key.sort_unstable();
            if seen.insert(key) {
                out.push(key);
            }
        }
    }
    out
}

/// Tetrahedra plus their face-adjacency graph: one node per tetrahedron
/// (node weight = position in the returned list), an edge wherever two
/// tetrahedra share a triangular face.
pub fn tetra_adjacency<N, E>(g: &UnGraph<N, E>) -> (Vec<[NodeIndex; 4]>, UnGraph<usize, ()>) {
    let tets = tetrahedra(g);
    let mut gtet: UnGraph<usize, ()> = UnGraph::with_capacity(tets.len(), tets.len());
    for id in 0..tets.len() {
        gtet.add_node(id);
    }
    let mut last_at_face: HashMap<[NodeIndex; 3], usize> = HashMap::new();
    for (id, &[i, j, k, l]) in tets.iter().enumerate() {
        for face in [[i, j, k], [i, j, l], [i, k, l], [j, k, l]] {
            if let Some(&prev) = last_at_face.get(&face) {
                gtet.update_edge(NodeIndex::new(prev), NodeIndex::new(id), ());
            }
            last_at_face.insert(face, id);
        }
    }
    (tets, gtet)
}
