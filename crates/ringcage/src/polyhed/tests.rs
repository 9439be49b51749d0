//! Assembler tests: handcrafted cages, the periodic-lattice scenario, and
//! rejection paths.

use std::collections::HashSet;

use nalgebra::Vector3;
use petgraph::graph::{NodeIndex, UnGraph};

use super::*;
use crate::cell::min_image;
use crate::cycles::{cycles_iter, Ring};

fn ids(v: &[usize]) -> Ring {
    v.iter().map(|&i| NodeIndex::new(i)).collect()
}

/// The six faces of a cube over vertices 0..8 (0-3 bottom, 4-7 top).
fn cube_faces() -> Vec<Ring> {
    vec![
        ids(&[0, 1, 2, 3]),
        ids(&[4, 5, 6, 7]),
        ids(&[0, 1, 5, 4]),
        ids(&[1, 2, 6, 5]),
        ids(&[2, 3, 7, 6]),
        ids(&[3, 0, 4, 7]),
    ]
}

/// 4×4×4 periodic cubic lattice, as in the ring-finder tests.
fn lattice4() -> (UnGraph<(), ()>, Vec<Vector3<f64>>) {
    let mut g = UnGraph::new_undirected();
    let mut pos = Vec::new();
    for x in 0..4 {
        for y in 0..4 {
            for z in 0..4 {
                g.add_node(());
                pos.push(Vector3::new(x as f64, y as f64, z as f64) / 4.0);
            }
        }
    }
    for a in 0..pos.len() {
        for b in 0..a {
            let d = min_image(pos[b] - pos[a]);
            if d.dot(&d) < 0.09 {
                g.add_edge(NodeIndex::new(a), NodeIndex::new(b), ());
            }
        }
    }
    (g, pos)
}

#[test]
fn cube_faces_close_into_one_cage() {
    let rings = cube_faces();
    let cages: Vec<Cage> =
        polyhedra_iter(&rings, AssemblyCfg::default()).expect("valid inputs").collect();
    assert_eq!(cages, vec![vec![0, 1, 2, 3, 4, 5]]);
}

#[test]
fn quick_mode_agrees_on_the_cube() {
    let rings = cube_faces();
    let cfg = AssemblyCfg {
        quick: true,
        ..AssemblyCfg::default()
    };
    let cages: Vec<Cage> = polyhedra_iter(&rings, cfg).expect("valid inputs").collect();
    assert_eq!(cages, vec![vec![0, 1, 2, 3, 4, 5]]);
}

#[test]
fn single_ring_cannot_close() {
    let rings = vec![ids(&[0, 1, 2])];
    let cages: Vec<Cage> =
        polyhedra_iter(&rings, AssemblyCfg::default()).expect("valid inputs").collect();
    assert!(cages.is_empty());
}

#[test]
fn face_bound_limits_fragment_size() {
    let rings = cube_faces();
    let cfg = AssemblyCfg {
        max_faces: 5,
        ..AssemblyCfg::default()
    };
    let cages: Vec<Cage> = polyhedra_iter(&rings, cfg).expect("valid inputs").collect();
    assert!(cages.is_empty());
}

#[test]
fn trapped_vertices_reject_the_cage() {
    // Two extra triangles hang one vertex inside the cube's wall span and
    // one outside; deleting the cube's vertices then separates them, so the
    // cube is no longer an empty cage.
    let mut rings = cube_faces();
    rings.push(ids(&[0, 1, 8]));
    rings.push(ids(&[0, 1, 9]));
    let cages: Vec<Cage> =
        polyhedra_iter(&rings, AssemblyCfg::default()).expect("valid inputs").collect();
    assert!(cages.is_empty());
}

#[test]
fn zero_face_bound_is_rejected() {
    let rings = cube_faces();
    let cfg = AssemblyCfg {
        max_faces: 0,
        ..AssemblyCfg::default()
    };
    assert_eq!(
        polyhedra_iter(&rings, cfg).err(),
        Some(PolyhedError::FaceBoundTooSmall)
    );
}

#[test]
fn degenerate_rings_are_rejected() {
    let rings = vec![ids(&[0, 1, 2, 3]), ids(&[4, 5])];
    assert_eq!(
        polyhedra_iter(&rings, AssemblyCfg::default()).err(),
        Some(PolyhedError::DegenerateRing { index: 1, len: 2 })
    );
}

#[test]
fn lattice_rings_assemble_into_64_cubes() {
    let (g, pos) = lattice4();
    let rings: Vec<Ring> = cycles_iter(&g, 4, Some(&pos))
        .expect("valid inputs")
        .collect();
    assert_eq!(rings.len(), 192);

    let cages: Vec<Cage> =
        polyhedra_iter(&rings, AssemblyCfg::default()).expect("valid inputs").collect();
    assert_eq!(cages.len(), 64);
    assert!(cages.iter().all(|c| c.len() == 6));

    // Every cage covers eight distinct lattice vertices and each lattice
    // vertex belongs to exactly eight of the 64 cells.
    let mut touch: std::collections::HashMap<NodeIndex, usize> = std::collections::HashMap::new();
    for cage in &cages {
        let verts: HashSet<NodeIndex> = cage
            .iter()
            .flat_map(|&rid| rings[rid].iter().copied())
            .collect();
        assert_eq!(verts.len(), 8);
        for v in verts {
            *touch.entry(v).or_insert(0) += 1;
        }
    }
    assert!(touch.values().all(|&c| c == 8));
    assert_eq!(touch.len(), 64);
}

#[test]
fn quick_mode_agrees_on_the_lattice() {
    let (g, pos) = lattice4();
    let rings: Vec<Ring> = cycles_iter(&g, 4, Some(&pos))
        .expect("valid inputs")
        .collect();
    let cfg = AssemblyCfg {
        quick: true,
        ..AssemblyCfg::default()
    };
    let quick: HashSet<Cage> = polyhedra_iter(&rings, cfg).expect("valid inputs").collect();
    let exact: HashSet<Cage> = polyhedra_iter(&rings, AssemblyCfg::default())
        .expect("valid inputs")
        .collect();
    assert_eq!(quick, exact);
    assert_eq!(exact.len(), 64);
}

#[test]
fn assembly_is_idempotent() {
    let rings = cube_faces();
    let first: HashSet<Cage> = polyhedra_iter(&rings, AssemblyCfg::default())
        .expect("valid inputs")
        .collect();
    let second: HashSet<Cage> = polyhedra_iter(&rings, AssemblyCfg::default())
        .expect("valid inputs")
        .collect();
    assert_eq!(first, second);
}

#[test]
fn cage_to_graph_rebuilds_the_cube() {
    let rings = cube_faces();
    let cages: Vec<Cage> =
        polyhedra_iter(&rings, AssemblyCfg::default()).expect("valid inputs").collect();
    let g = cage_to_graph(&cages[0], &rings);
    assert_eq!(g.node_count(), 8);
    assert_eq!(g.edge_count(), 12);
}
