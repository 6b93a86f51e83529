//! Euclidean minimum spanning trees via Kruskal's algorithm.

use std::collections::HashMap;

use rayon::prelude::*;

use crate::{
    disjoint_set::DisjointSet,
    edge::Edge,
    utils::types::{Vertex2, VertexIdx},
};

/// The Euclidean minimum spanning tree of `vertices`, built from the complete graph.
///
/// Returns `n - 1` edges for `n` distinct vertices and no edges for `n <= 1`.
/// Vertices with equal coordinates are not supported; ties between equally long edges are broken by the
/// order of [complete_edge_set], which makes the result deterministic.
///
/// ```
/// use dactri::euclidean_mst;
///
/// let vertices = vec![[0.0, 0.0], [1.0, 0.0], [3.0, 0.0]];
/// let mst = euclidean_mst(&vertices);
///
/// assert_eq!(mst.len(), 2);
/// ```
pub fn euclidean_mst(vertices: &[Vertex2]) -> Vec<Edge> {
    kruskal(vertices, complete_edge_set(vertices.len()))
}

/// All `n (n - 1) / 2` edges between `n` vertices.
pub fn complete_edge_set(n: usize) -> Vec<Edge> {
    let mut edges = Vec::with_capacity(n * n.saturating_sub(1) / 2);
    for i in 0..n {
        for j in i + 1..n {
            edges.push(Edge::new(i, j));
        }
    }
    edges
}

/// Kruskal's algorithm on an arbitrary edge set.
///
/// Every distinct vertex referenced by `edges` gets a slot in a fresh [DisjointSet], in order of first
/// appearance. The edges are then visited by ascending length and kept iff they connect two different
/// components. If the edge set is connected, the result is a minimum spanning tree of the referenced vertices,
/// otherwise a minimum spanning forest.
pub fn kruskal(vertices: &[Vertex2], edges: Vec<Edge>) -> Vec<Edge> {
    let mut slots: HashMap<VertexIdx, usize> = HashMap::new();
    for edge in &edges {
        for v in edge.vertices() {
            let next = slots.len();
            slots.entry(v).or_insert(next);
        }
    }

    let mut components = DisjointSet::new(slots.len());

    let mut by_length: Vec<(f64, Edge)> = edges
        .into_par_iter()
        .map(|e| (e.length(vertices), e))
        .collect();
    // stable, equally long edges keep their input order
    by_length.par_sort_by(|(l0, _), (l1, _)| l0.total_cmp(l1));

    let mut mst = Vec::with_capacity(slots.len().saturating_sub(1));
    for (_, edge) in by_length {
        let [a, b] = edge.vertices();
        if components.union(slots[&a], slots[&b]) {
            mst.push(edge);
            if components.num_sets() == 1 {
                break;
            }
        }
    }

    log::debug!(
        "Kruskal selected {} edges spanning {} vertices",
        mst.len(),
        slots.len()
    );

    mst
}
