//! utils for dactri tests and fuzzing
#![forbid(unsafe_code)]
#![deny(unused)]
#![warn(clippy::all, clippy::missing_const_for_fn)]

use rand::{distr::Uniform, prelude::Distribution, rngs::StdRng, seq::SliceRandom, SeedableRng};
use rand_distr::Normal;
use std::ops::RangeInclusive;

pub type Vertex2 = [f64; 2];

/// Samples `n` vertices in 2D space from the [Uniform] distribution, using a generator seeded with `seed`.
///
/// If no range is specified, the unit-square centered around the origin is used, `[-0.5, 0.5]`.
pub fn sample_vertices_2d(n: usize, range: Option<RangeInclusive<f64>>, seed: u64) -> Vec<Vertex2> {
    let mut rng = StdRng::seed_from_u64(seed);
    sample_vertices_2d_with(&mut rng, n, range)
}

/// Same as [sample_vertices_2d], but draws from a caller owned generator.
pub fn sample_vertices_2d_with(
    rng: &mut StdRng,
    n: usize,
    range: Option<RangeInclusive<f64>>,
) -> Vec<Vertex2> {
    let range = range.unwrap_or(-0.5..=0.5);
    let uniform = Uniform::try_from(range).expect("Expected range with a greater start then end");

    let mut vertices: Vec<Vertex2> = Vec::with_capacity(n);
    for _ in 0..n {
        let x = uniform.sample(rng);
        let y = uniform.sample(rng);
        vertices.push([x, y]);
    }

    vertices
}

/// Samples `n` vertices spread over `num_clusters` gaussian blobs.
///
/// The cluster centers are uniform in `[-0.5, 0.5]`, each vertex is offset from its center by a [Normal] with `σ = std_dev`.
pub fn sample_clustered_vertices_2d(
    n: usize,
    num_clusters: usize,
    std_dev: f64,
    seed: u64,
) -> Vec<Vertex2> {
    let mut rng = StdRng::seed_from_u64(seed);
    let centers = sample_vertices_2d_with(&mut rng, num_clusters.max(1), None);
    let normal = Normal::new(0.0, std_dev).unwrap();

    let mut vertices: Vec<Vertex2> = Vec::with_capacity(n);
    for i in 0..n {
        let c = centers[i % centers.len()];
        let dx: f64 = normal.sample(&mut rng);
        let dy: f64 = normal.sample(&mut rng);
        vertices.push([c[0] + dx, c[1] + dy]);
    }

    vertices
}

/// Returns a seeded permutation of `items`.
pub fn shuffle<T: Clone>(items: &[T], seed: u64) -> Vec<T> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut shuffled = items.to_vec();
    shuffled.shuffle(&mut rng);
    shuffled
}
