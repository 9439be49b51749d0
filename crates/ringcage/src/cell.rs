//! Minimum-image arithmetic on fractional coordinates.
//!
//! All coordinates live in a periodic unit cell normalized to [0, 1) per
//! axis. A displacement between two points is only meaningful after wrapping
//! it into the cell centered on zero; every routine here takes and returns
//! fractional vectors.

use nalgebra::Vector3;
use petgraph::graph::NodeIndex;

/// Wrap a fractional displacement into [-0.5, 0.5) per component.
#[inline]
pub fn min_image(d: Vector3<f64>) -> Vector3<f64> {
    d.map(|c| c - (c + 0.5).floor())
}

/// Sum of minimum-image displacements around a closed vertex loop.
///
/// Zero (within tolerance) for a loop that stays inside one periodic image;
/// non-zero when the loop winds around the cell.
pub fn loop_displacement(cycle: &[NodeIndex], pos: &[Vector3<f64>]) -> Vector3<f64> {
    let mut sum = Vector3::zeros();
    for i in 0..cycle.len() {
        let prev = cycle[(i + cycle.len() - 1) % cycle.len()];
        let d = pos[prev.index()] - pos[cycle[i].index()];
        sum += min_image(d);
    }
    sum
}

/// Minimum-image-aware centroid of a vertex set, wrapped back into [0, 1).
///
/// Displacements are accumulated relative to the first member so a cluster
/// that straddles the cell boundary averages correctly. `members` must be
/// non-empty.
pub fn center_of_mass(members: &[NodeIndex], rpos: &[Vector3<f64>]) -> Vector3<f64> {
    let origin = rpos[members[0].index()];
    let mut dsum = Vector3::zeros();
    for &member in members {
        dsum += min_image(rpos[member.index()] - origin);
    }
    let com = origin + dsum / members.len() as f64;
    com.map(|c| c - c.floor())
}
