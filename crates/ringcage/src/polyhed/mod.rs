//! Polyhedron assembly from a ring set.
//!
//! Purpose
//! - Grow closed cage-like fragments by gluing rings edge-to-edge: starting
//!   from a seed pair of rings sharing an edge, repeatedly zipper-merge a
//!   new face onto the open perimeter until it vanishes, backtracking on
//!   every constraint violation.
//! - A finished fragment is accepted only if it is a genuine empty cage: no
//!   unused ring lies entirely on its vertices, and deleting its vertices
//!   does not split the graph spanned by the ring set (a split would mean
//!   the fragment traps interior vertices).
//!
//! Constraints maintained during growth
//! - No vertex may be touched by more than two faces of the fragment.
//! - Every merge must keep the perimeter a simple cycle.
//! - Candidate faces must carry an id greater than the seed ring's, which
//!   breaks the permutation symmetry of face orderings.

mod build;
mod search;
mod types;
mod zipper;

pub use search::{cage_to_graph, polyhedra_iter, PolyhedraIter};
pub use types::{AssemblyCfg, Cage, PolyhedError, RingId};

#[cfg(test)]
mod tests;
