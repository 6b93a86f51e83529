/// A disjoint-set forest over `[0, n)` with path compression.
///
/// Union does not balance by rank or size, which keeps it correct but gives weaker height guarantees.
#[derive(Debug, Clone)]
pub struct DisjointSet {
    parent: Vec<usize>,
    num_sets: usize,
}

impl DisjointSet {
    /// Every element starts in its own set.
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            num_sets: n,
        }
    }

    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// The number of disjoint sets.
    pub const fn num_sets(&self) -> usize {
        self.num_sets
    }

    /// The representative of the set containing `x`.
    ///
    /// Every element on the way to the root is re-pointed to the root.
    pub fn find(&mut self, x: usize) -> usize {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        let mut node = x;
        while self.parent[node] != root {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }

        root
    }

    /// Merge the sets of `x` and `y`; returns `false` if they were already the same set.
    pub fn union(&mut self, x: usize, y: usize) -> bool {
        let x_root = self.find(x);
        let y_root = self.find(y);
        if x_root == y_root {
            return false;
        }

        self.parent[x_root] = y_root;
        self.num_sets -= 1;
        true
    }
}
