use std::cmp::Ordering;

use super::types::{Vertex2, VertexIdx};

/// Lexicographic order on vertices: ascending x, ties broken by ascending y.
///
/// Coordinate-equal vertices compare [Ordering::Equal]. Coordinates must be finite.
pub fn lexicographic_cmp(a: &Vertex2, b: &Vertex2) -> Ordering {
    a[0].partial_cmp(&b[0])
        .unwrap_or(Ordering::Equal)
        .then_with(|| a[1].partial_cmp(&b[1]).unwrap_or(Ordering::Equal))
}

/// Sorts vertex indices lexicographically by their coordinates.
///
/// The sort is stable, so coordinate-equal vertices keep their input order.
pub fn sort_lexicographic(vertices: &[Vertex2]) -> Vec<VertexIdx> {
    let mut order: Vec<VertexIdx> = (0..vertices.len()).collect();
    order.sort_by(|&i, &j| lexicographic_cmp(&vertices[i], &vertices[j]));
    order
}
