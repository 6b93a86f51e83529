//! # dactri
//!
//! 2D Delaunay triangulation via divide and conquer, and Euclidean minimum spanning trees via Kruskal's algorithm.
//!
//! ```
//! use dactri::{euclidean_mst, triangulation};
//!
//! let vertices = vec![[0.0, 0.0], [1.0, 0.0], [0.0, 1.0], [1.0, 1.0], [0.3, 0.6]];
//!
//! let triangulation = triangulation!(&vertices);
//! assert!(triangulation.is_delaunay().unwrap());
//!
//! // the minimum spanning tree is contained in the triangulation
//! let mst = euclidean_mst(&vertices);
//! assert!(mst.iter().all(|e| triangulation.edges().contains(e)));
//! ```
#![forbid(unsafe_code)]
#![deny(unused, clippy::incompatible_msrv)]
#![warn(clippy::all, clippy::missing_const_for_fn)]

pub use disjoint_set::DisjointSet;
pub use edge::Edge;
pub use error::InvalidInput;
pub use mst::{euclidean_mst, kruskal};
pub use triangulation::{triangulate, Triangulation};
pub use utils::types::{Segment2, Triangle2, Vertex2, VertexIdx};

pub mod adjds;
pub mod disjoint_set;
pub mod edge;
pub mod error;
pub mod geometry;
pub mod mst;
pub mod predicates;
pub mod triangulation;
pub mod utils;
