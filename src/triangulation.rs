use crate::{
    adjds::adjacency_graph::{AdjacencyGraph, GraphView},
    edge::Edge,
    error::InvalidInput,
    mst::kruskal,
    predicates::{in_circle_legal, orient_2d},
    utils::{
        point_order::sort_lexicographic,
        types::{SortedIdx, Triangle2, Vertex2, VertexIdx},
    },
};
use anyhow::Result as HowResult;
use log::error;
use rayon::prelude::*;

/// The Delaunay triangulation edges of `vertices`, computed by divide and conquer.
///
/// Total over any input size, 0 and 1 vertices yield no edges. The vertices must be finite and in general
/// position, i.e. without duplicates and without three collinear vertices; otherwise the result is unspecified.
///
/// ```
/// use dactri::triangulate;
///
/// let vertices = vec![[0.0, 0.0], [2.0, 0.0], [1.0, 1.5], [1.0, -1.0]];
/// let edges = triangulate(&vertices);
///
/// assert_eq!(edges.len(), 5);
/// ```
pub fn triangulate(vertices: &[Vertex2]) -> Vec<Edge> {
    let order = sort_lexicographic(vertices);
    let sorted: Vec<Vertex2> = order.iter().map(|&idx| vertices[idx]).collect();

    let graph = triangulate_sorted(&sorted, None);
    input_edges(&graph, &order)
}

/// Triangulate vertices that are already in lexicographic order. The graph is keyed by sorted position.
fn triangulate_sorted(sorted: &[Vertex2], parallel_cutoff: Option<usize>) -> AdjacencyGraph {
    let mut graph = AdjacencyGraph::new(sorted.len());
    if !sorted.is_empty() {
        dac_triangulate(&mut graph.view(sorted), parallel_cutoff);
    }
    graph
}

/// Flatten the graph and translate sorted positions back to input indices.
fn input_edges(graph: &AdjacencyGraph, order: &[VertexIdx]) -> Vec<Edge> {
    let mut edges: Vec<Edge> = graph
        .flatten()
        .into_iter()
        .map(|e| {
            let [u, v] = e.vertices();
            Edge::new(order[u], order[v])
        })
        .collect();
    edges.sort_unstable();
    edges
}

/// Divide and conquer on the range of the view; the view must hold no edges yet.
fn dac_triangulate(graph: &mut GraphView<'_>, parallel_cutoff: Option<usize>) {
    let range = graph.range();

    if range.len() <= 3 {
        for u in range.clone() {
            for v in u + 1..range.end {
                graph.add_edge(u, v);
            }
        }
        return;
    }

    let mid = range.start + range.len() / 2;
    {
        let (mut left, mut right) = graph.split_at(mid);
        match parallel_cutoff {
            Some(cutoff) if range.len() >= cutoff => {
                rayon::join(
                    || dac_triangulate(&mut left, parallel_cutoff),
                    || dac_triangulate(&mut right, parallel_cutoff),
                );
            }
            _ => {
                dac_triangulate(&mut left, parallel_cutoff);
                dac_triangulate(&mut right, parallel_cutoff);
            }
        }
    }

    merge(graph, mid);
}

/// The lower common tangent of the two triangulations left and right of `mid`, as `(left, right)`.
fn lower_tangent(graph: &GraphView<'_>, mid: SortedIdx) -> (SortedIdx, SortedIdx) {
    let p = graph.vertices();

    // rightmost vertex of the left half, leftmost of the right half
    let mut x = mid - 1;
    let mut y = mid;
    let mut next_x = graph.hull_prev(x);
    let mut next_y = graph.hull_next(y);

    loop {
        if orient_2d(&p[x], &p[y], &p[next_y]) < 0.0 {
            y = next_y;
            next_y = graph.hull_next(y);
        } else if orient_2d(&p[x], &p[y], &p[next_x]) < 0.0 {
            x = next_x;
            next_x = graph.hull_prev(x);
        } else {
            return (x, y);
        }
    }
}

/// The upper common tangent of the two triangulations left and right of `mid`, as `(left, right)`.
fn upper_tangent(graph: &GraphView<'_>, mid: SortedIdx) -> (SortedIdx, SortedIdx) {
    let p = graph.vertices();

    let mut x = mid - 1;
    let mut y = mid;
    let mut next_x = graph.hull_next(x);
    let mut next_y = graph.hull_prev(y);

    loop {
        if orient_2d(&p[x], &p[y], &p[next_y]) > 0.0 {
            y = next_y;
            next_y = graph.hull_prev(y);
        } else if orient_2d(&p[x], &p[y], &p[next_x]) > 0.0 {
            x = next_x;
            next_x = graph.hull_next(x);
        } else {
            return (x, y);
        }
    }
}

/// Stitch the Delaunay triangulations of `[start, mid)` and `[mid, end)` together.
///
/// Starting from the lower common tangent, the cross edges are added bottom to top. At each step the base edge
/// `l -- r` is completed to a triangle with a candidate from either side. Candidate edges that would become
/// illegal are deleted first. The walk ends with the upper common tangent.
fn merge(graph: &mut GraphView<'_>, mid: SortedIdx) {
    let p = graph.vertices();

    let (upper_l, upper_r) = upper_tangent(graph, mid);
    let (mut l, mut r) = lower_tangent(graph, mid);
    log::trace!("Merging at {mid}: lower tangent {l} -- {r}, upper tangent {upper_l} -- {upper_r}");

    graph.add_edge(l, r);

    while l != upper_l || r != upper_r {
        // right candidate: the neighbor of r right after l in cw order, valid iff above the base edge
        let mut r1 = graph.pred(r, l);
        let right_valid = orient_2d(&p[l], &p[r], &p[r1]) > 0.0;
        if right_valid {
            let mut r2 = graph.pred(r, r1);
            while !in_circle_legal(&p[r1], &p[l], &p[r], &p[r2]) {
                log::trace!("Deleting right edge {r} -- {r1}");
                graph.delete_edge(r, r1);
                r1 = r2;
                r2 = graph.pred(r, r1);
            }
        }

        // left candidate: the neighbor of l right after r in ccw order
        let mut l1 = graph.succ(l, r);
        let left_valid = orient_2d(&p[r], &p[l], &p[l1]) < 0.0;
        if left_valid {
            let mut l2 = graph.succ(l, l1);
            while !in_circle_legal(&p[l], &p[r], &p[l1], &p[l2]) {
                log::trace!("Deleting left edge {l} -- {l1}");
                graph.delete_edge(l, l1);
                l1 = l2;
                l2 = graph.succ(l, l1);
            }
        }

        if !right_valid {
            l = l1;
        } else if !left_valid || in_circle_legal(&p[l], &p[r], &p[r1], &p[l1]) {
            r = r1;
        } else {
            l = l1;
        }

        graph.add_edge(l, r);
    }
}

/// A 2D Delaunay triangulation computed by divide and conquer.
///
/// ```
/// use dactri::Triangulation;
///
/// let vertices = vec![
///     [0.0, 0.0],
///     [-0.5, 1.0],
///     [0.0, 2.5],
///     [2.0, 3.0],
///     [4.0, 2.5],
///     [5.0, 1.5],
///     [4.5, 0.5],
///     [2.5, -0.5],
///     [1.5, 1.6],
///     [3.0, 1.1],
/// ];
///
/// let mut triangulation = Triangulation::new(None); // specify a parallel cutoff here
/// triangulation.insert_vertices(&vertices).unwrap();
///
/// assert!(triangulation.is_delaunay().unwrap());
/// assert_eq!(triangulation.num_edges(), 3 * 10 - 3 - triangulation.hull().len());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Triangulation {
    vertices: Vec<Vertex2>,
    /// sorted position -> input index
    order: Vec<VertexIdx>,
    /// input index -> sorted position
    rank: Vec<SortedIdx>,
    /// The planar subdivision, keyed by sorted position.
    graph: AdjacencyGraph,
    edges: Vec<Edge>,
    /// Sub-problems with at least this many vertices triangulate their halves in parallel.
    parallel_cutoff: Option<usize>,
    triangulated: bool,

    #[cfg(feature = "timing")]
    time_sorting: u128,
    #[cfg(feature = "timing")]
    time_dividing: u128,
    #[cfg(feature = "timing")]
    time_flattening: u128,
}

/// Create a new [`Triangulation`] from vertices with an optional parallel cutoff.
///
/// ## Example
/// ```
/// # use dactri::triangulation;
/// triangulation!(&[[0.0, 9.9], [6.9, 12.3], [5.2, 3.33]]);
/// // halves with at least 1024 vertices are triangulated in parallel
/// triangulation!(&[[0.0, 9.9], [6.9, 12.3], [5.2, 3.33]], parallel_cutoff = 1024);
/// ```
#[macro_export]
macro_rules! triangulation {
    ($vertices:expr) => {{
        let mut triangulation = $crate::Triangulation::new(None);
        let _ = triangulation.insert_vertices($vertices);
        triangulation
    }};
    ($vertices:expr, parallel_cutoff = $cutoff:expr) => {{
        let mut triangulation = $crate::Triangulation::new(Some($cutoff));
        let _ = triangulation.insert_vertices($vertices);
        triangulation
    }};
}

impl Triangulation {
    pub fn new(parallel_cutoff: Option<usize>) -> Self {
        Self {
            parallel_cutoff,
            ..Default::default()
        }
    }

    /// Triangulate a set of vertices.
    ///
    /// Every coordinate must be finite. The vertices can only be inserted once, there is no incremental insertion.
    /// Identity of a vertex is its index in `vertices`, coordinate-equal vertices are distinct but not supported.
    pub fn insert_vertices(&mut self, vertices: &[Vertex2]) -> HowResult<()> {
        if self.triangulated {
            return Err(anyhow::Error::msg(
                "Vertices were already inserted, incremental insertion is not supported!",
            ));
        }

        if let Some(idx) = vertices
            .iter()
            .position(|v| !v[0].is_finite() || !v[1].is_finite())
        {
            return Err(InvalidInput::NonFiniteVertex { idx }.into());
        }

        log::debug!("Triangulating {} vertices", vertices.len());

        #[cfg(feature = "timing")]
        let now = std::time::Instant::now();

        self.vertices = vertices.to_vec();
        self.order = sort_lexicographic(vertices);
        self.rank = vec![0; vertices.len()];
        for (u, &idx) in self.order.iter().enumerate() {
            self.rank[idx] = u;
        }
        let sorted: Vec<Vertex2> = self.order.iter().map(|&idx| vertices[idx]).collect();

        #[cfg(feature = "timing")]
        {
            self.time_sorting = now.elapsed().as_micros();
        }
        #[cfg(feature = "timing")]
        let now = std::time::Instant::now();

        self.graph = triangulate_sorted(&sorted, self.parallel_cutoff);

        #[cfg(feature = "timing")]
        {
            self.time_dividing = now.elapsed().as_micros();
        }
        #[cfg(feature = "timing")]
        let now = std::time::Instant::now();

        self.edges = input_edges(&self.graph, &self.order);
        self.triangulated = true;

        #[cfg(feature = "timing")]
        {
            self.time_flattening = now.elapsed().as_micros();
            self.log_time();
        }

        log::debug!("Triangulation has {} edges", self.edges.len());

        Ok(())
    }

    pub fn vertices(&self) -> &Vec<Vertex2> {
        &self.vertices
    }

    /// The triangulation edges, sorted, each undirected edge once.
    pub fn edges(&self) -> &Vec<Edge> {
        &self.edges
    }

    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    pub const fn parallel_cutoff(&self) -> Option<usize> {
        self.parallel_cutoff
    }

    /// The neighbors of vertex `v` in ccw order around it.
    pub fn neighbors(&self, v: VertexIdx) -> HowResult<Vec<VertexIdx>> {
        let u = self.sorted_idx(v)?;
        Ok(self
            .graph
            .neighbors(u)
            .iter()
            .map(|&n| self.order[n])
            .collect())
    }

    /// The convex hull vertices in ccw order, starting at the lexicographically smallest vertex.
    pub fn hull(&self) -> Vec<VertexIdx> {
        if self.order.is_empty() {
            return Vec::new();
        }

        // the lexicographically smallest vertex is on the hull; the first neighbor of a hull vertex is its
        // ccw successor on the hull
        let first_neighbor = |u: SortedIdx| self.graph.neighbors(u).first().copied().unwrap_or(u);

        let mut hull = vec![self.order[0]];
        let mut u = first_neighbor(0);
        while u != 0 && hull.len() <= self.order.len() {
            hull.push(self.order[u]);
            u = first_neighbor(u);
        }

        hull
    }

    /// The triangles of the triangulation as input indices in ccw order.
    pub fn tri_idxs(&self) -> Vec<[VertexIdx; 3]> {
        let mut tris = Vec::new();

        for u in 0..self.graph.num_vertices() {
            let neighbors = self.graph.neighbors(u);
            let k = neighbors.len();
            if k < 2 {
                continue;
            }

            for i in 0..k {
                let v = neighbors[i];
                let w = neighbors[(i + 1) % k];

                // consecutive ccw neighbors span a face if they are connected and the wedge is convex;
                // the smallest of the three sorted positions reports the face
                if u < v
                    && u < w
                    && self.graph.neighbors(v).contains(&w)
                    && orient_2d(&self.sorted_vertex(u), &self.sorted_vertex(v), &self.sorted_vertex(w))
                        > 0.0
                {
                    tris.push([self.order[u], self.order[v], self.order[w]]);
                }
            }
        }

        tris
    }

    /// The triangles of the triangulation as coordinates in ccw order.
    pub fn tris(&self) -> Vec<Triangle2> {
        self.tri_idxs()
            .into_iter()
            .map(|[a, b, c]| [self.vertices[a], self.vertices[b], self.vertices[c]])
            .collect()
    }

    pub fn num_tris(&self) -> usize {
        self.tri_idxs().len()
    }

    /// Checks that no vertex lies strictly inside the circumcircle of any triangle and that no triangle is flat.
    pub fn is_delaunay(&self) -> HowResult<bool> {
        if !self.triangulated {
            return Err(anyhow::Error::msg(
                "Vertices must be inserted before the triangulation can be verified!",
            ));
        }

        for [a, b, c] in self.tri_idxs() {
            let [va, vb, vc] = [self.vertices[a], self.vertices[b], self.vertices[c]];

            if orient_2d(&va, &vb, &vc) <= 0.0 {
                error!("Flat triangle: [{a}, {b}, {c}]");
                return Ok(false);
            }

            for (idx, v) in self.vertices.iter().enumerate() {
                if idx == a || idx == b || idx == c {
                    continue;
                }

                if !in_circle_legal(&va, &vb, &vc, v) {
                    error!("Vertex {idx} in circumcircle of triangle [{a}, {b}, {c}]");
                    return Ok(false);
                }
            }
        }

        Ok(true)
    }

    /// The fraction of triangles that have no vertex strictly inside their circumcircle, checked in parallel.
    ///
    /// Returns `1.0` for a Delaunay triangulation, and also if there are no triangles.
    pub fn par_is_delaunay(&self) -> f64 {
        let tris = self.tri_idxs();
        if tris.is_empty() {
            return 1.0;
        }

        let num_legal = tris
            .par_iter()
            .filter(|[a, b, c]| {
                let [va, vb, vc] = [self.vertices[*a], self.vertices[*b], self.vertices[*c]];
                self.vertices
                    .iter()
                    .enumerate()
                    .filter(|(idx, _)| idx != a && idx != b && idx != c)
                    .all(|(_, v)| in_circle_legal(&va, &vb, &vc, v))
            })
            .count();

        num_legal as f64 / tris.len() as f64
    }

    /// The Euclidean minimum spanning tree, computed from the triangulation edges only.
    ///
    /// The Euclidean minimum spanning tree is a subgraph of the Delaunay triangulation, so this equals
    /// [crate::euclidean_mst] while sorting `O(n)` instead of `O(n²)` edges.
    pub fn mst(&self) -> Vec<Edge> {
        kruskal(&self.vertices, self.edges.clone())
    }

    fn sorted_idx(&self, v: VertexIdx) -> HowResult<SortedIdx> {
        self.rank
            .get(v)
            .copied()
            .ok_or_else(|| anyhow::Error::msg("Vertex index out of bounds!"))
    }

    fn sorted_vertex(&self, u: SortedIdx) -> Vertex2 {
        self.vertices[self.order[u]]
    }

    #[cfg(feature = "timing")]
    fn log_time(&self) {
        log::debug!("-------------------------------------------");
        log::debug!("Time elapsed:");
        log::debug!("Sorting computed in {} μs", self.time_sorting);
        log::debug!("Divide and conquer computed in {} μs", self.time_dividing);
        log::debug!("Flattening computed in {} μs", self.time_flattening);
        log::debug!("-------------------------------------------");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        edge::total_length,
        mst::euclidean_mst,
        utils::point_order::lexicographic_cmp,
    };
    use approx::assert_relative_eq;
    use dactri_test_utils::{sample_clustered_vertices_2d, sample_vertices_2d};
    use std::collections::HashSet;

    const NUM_VERTICES_LIST: [usize; 7] = [3, 5, 10, 50, 100, 500, 1000];

    fn init_logger() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn half_hull_size<'a>(vertices: impl Iterator<Item = &'a Vertex2>) -> usize {
        let mut chain: Vec<Vertex2> = Vec::new();
        for v in vertices {
            while chain.len() >= 2
                && orient_2d(&chain[chain.len() - 2], &chain[chain.len() - 1], v) <= 0.0
            {
                chain.pop();
            }
            chain.push(*v);
        }
        chain.len()
    }

    /// Andrew's monotone chain, independent of the adjacency structure.
    fn convex_hull_size(vertices: &[Vertex2]) -> usize {
        let mut sorted = vertices.to_vec();
        sorted.sort_by(lexicographic_cmp);

        half_hull_size(sorted.iter()) + half_hull_size(sorted.iter().rev()) - 2
    }

    fn verify_triangulation(triangulation: &Triangulation) {
        let n = triangulation.vertices().len();
        let edges = triangulation.edges();

        assert!(triangulation.is_delaunay().unwrap());

        let unique: HashSet<Edge> = edges.iter().copied().collect();
        assert_eq!(unique.len(), edges.len(), "duplicate edges");
        assert!(edges.iter().all(|e| {
            let [a, b] = e.vertices();
            a != b && b < n
        }));

        let h = convex_hull_size(triangulation.vertices());
        assert_eq!(triangulation.hull().len(), h);
        assert_eq!(edges.len(), 3 * n - 3 - h);
        assert_eq!(triangulation.num_tris(), 2 * n - 2 - h);
    }

    #[test]
    fn test_trivial_inputs() {
        assert!(triangulate(&[]).is_empty());
        assert!(triangulate(&[[0.5, 0.5]]).is_empty());
        assert_eq!(triangulate(&[[0.0, 0.0], [1.0, 0.0]]), vec![Edge::new(0, 1)]);

        let triangulation = triangulation!(&[]);
        assert_eq!(triangulation.num_edges(), 0);
        assert!(triangulation.hull().is_empty());
        assert!(triangulation.is_delaunay().unwrap());
    }

    #[test]
    fn test_single_triangle() {
        // not in lexicographic order, edges must refer to the input indices
        let vertices = [[1.0, 0.0], [0.0, 0.0], [0.5, 1.0]];
        let triangulation = triangulation!(&vertices);

        assert_eq!(
            triangulation.edges(),
            &vec![Edge::new(0, 1), Edge::new(0, 2), Edge::new(1, 2)]
        );
        assert_eq!(triangulation.tri_idxs(), vec![[1, 0, 2]]);
        assert_eq!(triangulation.hull(), vec![1, 0, 2]);
        assert_eq!(triangulation.neighbors(1).unwrap(), vec![0, 2]);
    }

    #[test]
    fn test_square() {
        let vertices = [[0.0, 0.0], [1.0, 0.0], [0.0, 1.0], [1.0, 1.0]];
        let edges = triangulate(&vertices);

        assert_eq!(edges.len(), 5);
        for side in [(0, 1), (0, 2), (1, 3), (2, 3)] {
            assert!(edges.contains(&Edge::new(side.0, side.1)));
        }

        let diagonals = [Edge::new(0, 3), Edge::new(1, 2)];
        let num_diagonals = diagonals.iter().filter(|d| edges.contains(d)).count();
        assert_eq!(num_diagonals, 1);
    }

    #[test]
    fn test_delaunay_2d() {
        init_logger();

        for (seed, n) in NUM_VERTICES_LIST.into_iter().enumerate() {
            let vertices = sample_vertices_2d(n, None, seed as u64);
            let triangulation = triangulation!(&vertices);

            verify_triangulation(&triangulation);
        }
    }

    #[test]
    fn test_delaunay_2d_clustered() {
        for (seed, n) in [20, 200, 1000].into_iter().enumerate() {
            let vertices = sample_clustered_vertices_2d(n, 4, 0.05, seed as u64);
            let triangulation = triangulation!(&vertices);

            verify_triangulation(&triangulation);
            assert_eq!(triangulation.par_is_delaunay(), 1.0);
        }
    }

    #[test]
    fn test_free_function_matches_struct() {
        let vertices = sample_vertices_2d(300, Some(0.0..=256.0), 105060);
        let triangulation = triangulation!(&vertices);

        assert_eq!(&triangulate(&vertices), triangulation.edges());
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let vertices = sample_vertices_2d(5000, None, 11);

        let sequential = triangulation!(&vertices);
        let parallel = triangulation!(&vertices, parallel_cutoff = 64);

        assert_eq!(parallel.parallel_cutoff(), Some(64));
        assert_eq!(sequential.edges(), parallel.edges());
    }

    #[test]
    fn test_deterministic() {
        let vertices = sample_vertices_2d(500, None, 4);
        assert_eq!(triangulate(&vertices), triangulate(&vertices));
    }

    #[test]
    fn test_neighbors_are_ccw() {
        let vertices = sample_vertices_2d(200, None, 9);
        let triangulation = triangulation!(&vertices);

        for v in 0..vertices.len() {
            let neighbors = triangulation.neighbors(v).unwrap();
            let num_cw_turns = (0..neighbors.len())
                .filter(|&i| {
                    let a = vertices[neighbors[i]];
                    let b = vertices[neighbors[(i + 1) % neighbors.len()]];
                    orient_2d(&vertices[v], &a, &b) < 0.0
                })
                .count();

            // going once around, at most one wedge (the outer one of a hull vertex) is reflex
            assert!(num_cw_turns <= 1, "neighbors of {v} are not in ccw order");
        }
    }

    #[test]
    fn test_mst_from_triangulation() {
        let vertices = sample_vertices_2d(500, Some(0.0..=300.0), 80);
        let triangulation = triangulation!(&vertices);

        let from_triangulation = triangulation.mst();
        let from_complete_graph = euclidean_mst(&vertices);

        assert_eq!(from_triangulation.len(), 499);
        assert_relative_eq!(
            total_length(&from_triangulation, &vertices),
            total_length(&from_complete_graph, &vertices),
            max_relative = 1e-9
        );
    }

    #[test]
    fn test_insert_twice() {
        let mut triangulation = Triangulation::new(None);
        triangulation
            .insert_vertices(&sample_vertices_2d(10, None, 0))
            .unwrap();

        assert!(triangulation
            .insert_vertices(&sample_vertices_2d(10, None, 1))
            .is_err());
    }

    #[test]
    fn test_non_finite_vertex() {
        let mut triangulation = Triangulation::new(None);
        let result = triangulation.insert_vertices(&[[0.0, 0.0], [f64::NAN, 1.0], [1.0, 1.0]]);

        let err = result.unwrap_err();
        assert_eq!(
            err.downcast_ref::<InvalidInput>(),
            Some(&InvalidInput::NonFiniteVertex { idx: 1 })
        );
    }

    #[test]
    fn test_verify_before_insert() {
        let triangulation = Triangulation::default();
        assert!(triangulation.is_delaunay().is_err());
        assert!(triangulation.neighbors(0).is_err());
    }

    #[test]
    fn test_detects_illegal_triangle() {
        // already in lexicographic order, sorted positions equal input indices
        let vertices = [[0.0, 0.0], [2.0, -1.0], [2.0, 1.0], [4.0, 0.0]];
        let triangulation = triangulation!(&vertices);

        assert!(triangulation.edges().contains(&Edge::new(1, 2)));
        assert!(triangulation.is_delaunay().unwrap());
        assert_eq!(triangulation.par_is_delaunay(), 1.0);

        // flip the diagonal, 1 and 2 are then inside the circumcircles of the new triangles
        let mut flipped = triangulation.clone();
        let mut view = flipped.graph.view(&vertices);
        view.delete_edge(1, 2);
        view.add_edge(0, 3);

        assert_eq!(flipped.num_tris(), 2);
        assert!(!flipped.is_delaunay().unwrap());
        assert_eq!(flipped.par_is_delaunay(), 0.0);
    }
}
