use core::ops::Range;

use super::adjacency_list::AdjacencyList;
use crate::{
    edge::Edge,
    utils::types::{SortedIdx, Vertex2},
};

/// The planar subdivision built by the divide-and-conquer engine.
///
/// Holds exactly one [AdjacencyList] per vertex, indexed by the vertex position in the lexicographically
/// sorted vertex list. The graph is created with all lists empty and never resized.
#[derive(Debug, Clone, Default)]
pub struct AdjacencyGraph {
    lists: Vec<AdjacencyList>,
}

impl AdjacencyGraph {
    pub fn new(num_vertices: usize) -> Self {
        Self {
            lists: (0..num_vertices).map(AdjacencyList::new).collect(),
        }
    }

    pub fn num_vertices(&self) -> usize {
        self.lists.len()
    }

    /// The neighbors of `u` in ccw order.
    pub fn neighbors(&self, u: SortedIdx) -> &[SortedIdx] {
        self.lists[u].neighbors()
    }

    /// A mutable view over the whole graph.
    pub fn view<'a>(&'a mut self, vertices: &'a [Vertex2]) -> GraphView<'a> {
        debug_assert_eq!(vertices.len(), self.lists.len());

        GraphView {
            vertices,
            lists: &mut self.lists,
            offset: 0,
        }
    }

    /// Every undirected edge exactly once, as `Edge(u, v)` of sorted positions.
    pub fn flatten(&self) -> Vec<Edge> {
        let mut edges = Vec::new();
        for list in &self.lists {
            let u = list.center();
            for &v in list.neighbors() {
                // the smaller endpoint emits the edge
                if u < v {
                    edges.push(Edge::new(u, v));
                }
            }
        }
        edges
    }

    pub fn num_edges(&self) -> usize {
        self.lists.iter().map(AdjacencyList::len).sum::<usize>() / 2
    }
}

/// Mutable access to the adjacency lists of a contiguous range of sorted vertices.
///
/// All operations are keyed by sorted vertex positions and must stay within [GraphView::range].
/// Two views obtained by [GraphView::split_at] never alias, so they can be mutated on different threads.
#[derive(Debug)]
pub struct GraphView<'a> {
    vertices: &'a [Vertex2],
    lists: &'a mut [AdjacencyList],
    offset: SortedIdx,
}

impl<'a> GraphView<'a> {
    /// The sorted positions covered by this view.
    pub fn range(&self) -> Range<SortedIdx> {
        self.offset..self.offset + self.lists.len()
    }

    /// All sorted vertices, not only the ones in [GraphView::range].
    pub const fn vertices(&self) -> &'a [Vertex2] {
        self.vertices
    }

    pub fn vertex(&self, u: SortedIdx) -> &Vertex2 {
        &self.vertices[u]
    }

    fn list(&self, u: SortedIdx) -> &AdjacencyList {
        &self.lists[u - self.offset]
    }

    fn list_mut(&mut self, u: SortedIdx) -> &mut AdjacencyList {
        &mut self.lists[u - self.offset]
    }

    /// Split into the views `[start, mid)` and `[mid, end)`.
    pub fn split_at(&mut self, mid: SortedIdx) -> (GraphView<'_>, GraphView<'_>) {
        let (left, right) = self.lists.split_at_mut(mid - self.offset);
        (
            GraphView {
                vertices: self.vertices,
                lists: left,
                offset: self.offset,
            },
            GraphView {
                vertices: self.vertices,
                lists: right,
                offset: mid,
            },
        )
    }

    pub fn add_edge(&mut self, u: SortedIdx, v: SortedIdx) {
        let vertices = self.vertices;
        self.list_mut(u).insert(v, vertices);
        self.list_mut(v).insert(u, vertices);
    }

    /// Panics if `u` and `v` are not connected.
    pub fn delete_edge(&mut self, u: SortedIdx, v: SortedIdx) {
        self.list_mut(u).remove(v);
        self.list_mut(v).remove(u);
    }

    /// The neighbor of `u` following `v` in ccw order.
    pub fn succ(&self, u: SortedIdx, v: SortedIdx) -> SortedIdx {
        self.list(u).successor(v)
    }

    /// The neighbor of `u` preceding `v` in ccw order.
    pub fn pred(&self, u: SortedIdx, v: SortedIdx) -> SortedIdx {
        self.list(u).predecessor(v)
    }

    /// For a convex hull vertex `u`, its successor on the ccw hull; `u` itself if it has no neighbors.
    pub fn hull_next(&self, u: SortedIdx) -> SortedIdx {
        self.list(u).first_neighbor()
    }

    /// For a convex hull vertex `u`, its predecessor on the ccw hull; `u` itself if it has no neighbors.
    pub fn hull_prev(&self, u: SortedIdx) -> SortedIdx {
        self.list(u).last_neighbor()
    }
}
