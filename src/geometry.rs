//! The non-predicate part of the geometry kernel.

use nalgebra::{Point2, Vector2};

use crate::{error::InvalidInput, utils::types::Vertex2};

pub use crate::predicates::{in_circle, in_circle_legal, orient_2d};
pub use crate::utils::point_order::lexicographic_cmp;

/// Dot product of the vectors `a -> b` and `a -> c`.
pub fn dot(a: &Vertex2, b: &Vertex2, c: &Vertex2) -> f64 {
    let ab = Vector2::new(b[0] - a[0], b[1] - a[1]);
    let ac = Vector2::new(c[0] - a[0], c[1] - a[1]);
    ab.dot(&ac)
}

/// Euclidean distance between `a` and `b`.
pub fn distance(a: &Vertex2, b: &Vertex2) -> f64 {
    nalgebra::distance(&Point2::from(*a), &Point2::from(*b))
}

/// Checks if the closed segment `p1 -- p2` intersects the closed segment `p3 -- p4`.
///
/// Solves `p1 + k1 (p2 - p1) = p3 + k2 (p4 - p3)` and reports an intersection iff `k1, k2 ∈ [0, 1]`.
///
/// Parallel segments are reported as not intersecting, even when they are collinear and overlap.
/// Do not rely on this function for overlap detection.
pub fn segments_intersect(
    p1: &Vertex2,
    p2: &Vertex2,
    p3: &Vertex2,
    p4: &Vertex2,
) -> Result<bool, InvalidInput> {
    for (s, t) in [(p1, p2), (p3, p4)] {
        if s == t {
            return Err(InvalidInput::DegenerateSegment { x: s[0], y: s[1] });
        }
    }

    let a = p1[0] - p3[0];
    let b = p1[1] - p3[1];
    let m1 = p1[0] - p2[0];
    let m2 = p4[0] - p3[0];
    let m3 = p1[1] - p2[1];
    let m4 = p4[1] - p3[1];

    let det = m1 * m4 - m2 * m3;
    if det == 0.0 {
        return Ok(false);
    }

    let k1 = (m4 * a - m2 * b) / det;
    let k2 = (m1 * b - m3 * a) / det;
    log::trace!("segment intersection parameters: k1 = {k1}, k2 = {k2}");

    Ok((0.0..=1.0).contains(&k1) && (0.0..=1.0).contains(&k2))
}
