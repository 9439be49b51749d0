//! Minimal-ring enumeration.
//!
//! Purpose
//! - Enumerate every minimal ring of an undirected graph up to a size bound:
//!   simple cycles in which no vertex pair has a graph path shorter than its
//!   along-cycle distance.
//! - When fractional coordinates are supplied, drop rings whose edge
//!   displacements wind around the periodic cell (spanning rings), which are
//!   artifacts of wraparound rather than physical motifs.
//!
//! Search shape
//! - Every ring is generated at least once from a vertex `x` and an
//!   unordered pair of its neighbors (y, z): the candidate rings through
//!   that triple are `x` prepended to each tied-shortest z→y path that
//!   avoids `x` (see `oracle`). Candidates with shortcuts are pruned and
//!   the survivors deduplicated by vertex set.

mod search;

pub use search::{cycles_iter, CyclesError, CyclesIter, Ring};
