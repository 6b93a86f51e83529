#![no_main]

use dactri::{
    predicates::{in_circle, orient_2d},
    Triangulation, Vertex2,
};
use libfuzzer_sys::fuzz_target;

/// Finite, distinct, no three collinear and no four cocircular.
fn in_general_position(vertices: &[Vertex2]) -> bool {
    let n = vertices.len();
    if vertices.iter().any(|v| !v[0].is_finite() || !v[1].is_finite()) {
        return false;
    }

    for a in 0..n {
        for b in a + 1..n {
            if vertices[a] == vertices[b] {
                return false;
            }
            for c in b + 1..n {
                if orient_2d(&vertices[a], &vertices[b], &vertices[c]) == 0.0 {
                    return false;
                }
                for d in c + 1..n {
                    if in_circle(&vertices[a], &vertices[b], &vertices[c], &vertices[d]) == 0.0 {
                        return false;
                    }
                }
            }
        }
    }

    true
}

fuzz_target!(|data: Vec<[f64; 2]>| {
    if data.len() > 24 || !in_general_position(&data) {
        return;
    }

    let mut triangulation = Triangulation::new(None);
    if triangulation.insert_vertices(&data).is_ok() {
        assert!(triangulation.is_delaunay().unwrap_or(false));
    }
});
