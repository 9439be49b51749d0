//! Identifier types, configuration, and the assembler error type.

use std::fmt;

/// Index of a ring in the input ring list.
pub type RingId = usize;

/// A finished polyhedral fragment: the sorted ids of its face rings.
pub type Cage = Vec<RingId>;

/// Assembly configuration.
#[derive(Clone, Copy, Debug)]
pub struct AssemblyCfg {
    /// Maximum number of faces per fragment; growth beyond this is abandoned.
    pub max_faces: usize,
    /// Use the isolated-neighbor heuristic instead of the exact
    /// connected-component test when validating a closed fragment. Faster,
    /// but fragments enclosing two or more mutually adjacent interior
    /// vertices can escape detection.
    pub quick: bool,
}

impl Default for AssemblyCfg {
    fn default() -> Self {
        Self {
            max_faces: 20,
            quick: false,
        }
    }
}

/// Input-contract violations for [`polyhedra_iter`](super::polyhedra_iter),
/// raised at entry only. Dead search branches are pruned silently, never
/// reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PolyhedError {
    /// A fragment needs at least one face.
    FaceBoundTooSmall,
    /// A ring in the input list has fewer than three vertices.
    DegenerateRing { index: usize, len: usize },
}

impl fmt::Display for PolyhedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PolyhedError::FaceBoundTooSmall => {
                write!(f, "maximum face count must be at least 1")
            }
            PolyhedError::DegenerateRing { index, len } => {
                write!(f, "ring {index} has {len} vertices; rings need at least 3")
            }
        }
    }
}

impl std::error::Error for PolyhedError {}
