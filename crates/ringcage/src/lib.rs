//! Topological motif extraction for periodic networks.
//!
//! Purpose
//! - Find minimal rings (shortcut-free simple cycles) in an undirected graph,
//!   optionally embedded in a periodic unit cell via fractional coordinates,
//!   and assemble those rings into closed cage-like polyhedral fragments.
//! - Typical input is a hydrogen-bond network from a molecular simulation;
//!   the engines themselves are pure graph topology.
//!
//! Layout
//! - `cell`: minimum-image arithmetic on fractional coordinates.
//! - `oracle`: memoized shortest-path lengths and tied-shortest-path
//!   enumeration with exclusion sets.
//! - `cycles`: the minimal-ring finder.
//! - `polyhed`: the polyhedron assembler.
//! - `dicycles`, `simplex`: homodromic directed cycles and small-motif
//!   matchers over the same graph types.
//!
//! Graphs are `petgraph` graphs with compact node indices; positions, when
//! given, are one fractional `Vector3<f64>` per node in node-index order.

pub mod cell;
pub mod cycles;
pub mod dicycles;
pub mod oracle;
pub mod polyhed;
pub mod simplex;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::cell::{center_of_mass, loop_displacement, min_image};
    pub use crate::cycles::{cycles_iter, CyclesError, CyclesIter, Ring};
    pub use crate::dicycles::{dicycles_iter, dicycles_nonspanning_iter, DicyclesError};
    pub use crate::oracle::PathOracle;
    pub use crate::polyhed::{
        cage_to_graph, polyhedra_iter, AssemblyCfg, Cage, PolyhedError, PolyhedraIter, RingId,
    };
    pub use crate::simplex::{octahedra, tetra_adjacency, tetrahedra, triangles};
    pub use nalgebra::Vector3;
    pub use petgraph::graph::{DiGraph, NodeIndex, UnGraph};
}
