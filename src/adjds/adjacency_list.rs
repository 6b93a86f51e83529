use crate::{
    predicates::orient_2d,
    utils::types::{SortedIdx, Vertex2},
};

/// The neighbors of a single vertex, kept in ccw angular order around it.
///
/// The order is circular, the stored sequence is one way to cut the circle open. For a vertex whose neighbors
/// lie within a wedge of less than 180°, e.g. a convex hull vertex, the sequence starts at the cw-most
/// neighbor and ends at the ccw-most one.
///
/// The angular slot of a new neighbor is found with orientation tests only, no angles are computed.
/// The vertices must be in general position w.r.t. the center: neither duplicates nor two neighbors collinear
/// with the center on the same ray are supported.
#[derive(Debug, Clone)]
pub struct AdjacencyList {
    center: SortedIdx,
    neighbors: Vec<SortedIdx>,
}

impl AdjacencyList {
    pub const fn new(center: SortedIdx) -> Self {
        Self {
            center,
            neighbors: Vec::new(),
        }
    }

    pub const fn center(&self) -> SortedIdx {
        self.center
    }

    /// The neighbors in ccw order.
    pub fn neighbors(&self) -> &[SortedIdx] {
        &self.neighbors
    }

    pub fn len(&self) -> usize {
        self.neighbors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.neighbors.is_empty()
    }

    pub fn contains(&self, v: SortedIdx) -> bool {
        self.neighbors.contains(&v)
    }

    /// Insert `v` into its angular slot.
    ///
    /// `v` is placed right after the first run of neighbors that lie cw of it (i.e. right of `center -> v`).
    /// If there is no such neighbor, it becomes the first one.
    pub fn insert(&mut self, v: SortedIdx, vertices: &[Vertex2]) {
        debug_assert!(!self.contains(v), "{v} is already a neighbor of {}", self.center);

        let center = &vertices[self.center];
        let new = &vertices[v];

        let mut slot = 0;
        for (i, &n) in self.neighbors.iter().enumerate() {
            if orient_2d(center, new, &vertices[n]) < 0.0 {
                slot = i + 1;
            } else if slot != 0 {
                break;
            }
        }

        self.neighbors.insert(slot, v);
    }

    /// Position of `v` in the sequence.
    ///
    /// Panics if `v` is not a neighbor, which can only be caused by a corrupted angular order.
    fn position(&self, v: SortedIdx) -> usize {
        match self.neighbors.iter().position(|&n| n == v) {
            Some(pos) => pos,
            None => panic!("vertex {v} not found in adjacency list of {}", self.center),
        }
    }

    /// Remove the neighbor `v`.
    pub fn remove(&mut self, v: SortedIdx) {
        let pos = self.position(v);
        self.neighbors.remove(pos);
    }

    /// The neighbor following `v` in ccw order, wrapping around.
    pub fn successor(&self, v: SortedIdx) -> SortedIdx {
        let pos = self.position(v);
        self.neighbors[(pos + 1) % self.neighbors.len()]
    }

    /// The neighbor preceding `v` in ccw order, wrapping around.
    pub fn predecessor(&self, v: SortedIdx) -> SortedIdx {
        let pos = self.position(v);
        let len = self.neighbors.len();
        self.neighbors[(pos + len - 1) % len]
    }

    /// The first neighbor of the sequence, or the center itself if there are no neighbors yet.
    pub fn first_neighbor(&self) -> SortedIdx {
        self.neighbors.first().copied().unwrap_or(self.center)
    }

    /// The last neighbor of the sequence, or the center itself if there are no neighbors yet.
    pub fn last_neighbor(&self) -> SortedIdx {
        self.neighbors.last().copied().unwrap_or(self.center)
    }
}
