use crate::{
    geometry::distance,
    utils::types::{Segment2, Vertex2, VertexIdx},
};
use core::fmt;

/// An undirected edge between two vertices, identified by their index in the input vertex list.
///
/// The pair is stored normalized, i.e. `a < b`, such that two edges are equal iff they connect the same
/// pair of vertices, regardless of the order they were created with.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Copy, Clone, Debug)]
pub struct Edge {
    a: VertexIdx,
    b: VertexIdx,
}

impl Edge {
    /// Create an edge between two distinct vertices.
    pub fn new(u: VertexIdx, v: VertexIdx) -> Self {
        debug_assert_ne!(u, v, "an edge needs two distinct vertices");
        if u < v {
            Self { a: u, b: v }
        } else {
            Self { a: v, b: u }
        }
    }

    /// The two vertex indices, smaller one first.
    pub const fn vertices(&self) -> [VertexIdx; 2] {
        [self.a, self.b]
    }

    /// Check if `v` is one of the endpoints.
    pub const fn contains(&self, v: VertexIdx) -> bool {
        self.a == v || self.b == v
    }

    /// The Euclidean length of the edge.
    pub fn length(&self, vertices: &[Vertex2]) -> f64 {
        distance(&vertices[self.a], &vertices[self.b])
    }

    /// The coordinates of the two endpoints.
    pub fn segment(&self, vertices: &[Vertex2]) -> Segment2 {
        [vertices[self.a], vertices[self.b]]
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Edge({} -- {})", self.a, self.b)
    }
}

/// Sum of the lengths of all edges.
pub fn total_length(edges: &[Edge], vertices: &[Vertex2]) -> f64 {
    edges.iter().map(|e| e.length(vertices)).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_is_unordered() {
        assert_eq!(Edge::new(3, 1), Edge::new(1, 3));
        assert_eq!(Edge::new(3, 1).vertices(), [1, 3]);
        assert_ne!(Edge::new(1, 2), Edge::new(1, 3));
    }

    #[test]
    fn test_edge_identity_not_coordinates() {
        // coordinate-equal vertices are still distinct
        let vertices = [[0.0, 0.0], [1.0, 0.0], [1.0, 0.0]];
        assert_ne!(Edge::new(0, 1), Edge::new(0, 2));
        assert_eq!(
            Edge::new(0, 1).length(&vertices),
            Edge::new(0, 2).length(&vertices)
        );
    }

    #[test]
    fn test_total_length() {
        let vertices = [[0.0, 0.0], [3.0, 0.0], [3.0, 4.0]];
        let edges = [Edge::new(0, 1), Edge::new(1, 2)];
        assert_eq!(total_length(&edges, &vertices), 7.0);
        assert_eq!(Edge::new(2, 0).to_string(), "Edge(0 -- 2)");
    }
}
