#![no_main]

use dactri::{euclidean_mst, DisjointSet};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: Vec<[i16; 2]>| {
    let mut vertices: Vec<[f64; 2]> = data
        .iter()
        .map(|[x, y]| [f64::from(*x), f64::from(*y)])
        .collect();
    vertices.sort_by(|a, b| a.partial_cmp(b).unwrap_or(core::cmp::Ordering::Equal));
    vertices.dedup();
    if vertices.len() > 64 {
        return;
    }

    let mst = euclidean_mst(&vertices);
    assert_eq!(mst.len(), vertices.len().saturating_sub(1));

    let mut components = DisjointSet::new(vertices.len());
    for edge in &mst {
        let [a, b] = edge.vertices();
        assert!(components.union(a, b));
    }
});
