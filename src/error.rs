//! Error types for caller-facing input validation.

use crate::utils::types::VertexIdx;
use thiserror::Error;

/// Input the caller passed that the geometry kernel cannot work with.
///
/// Internal invariant violations of the adjacency structure are not represented here, they panic.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidInput {
    /// A segment whose two endpoints coincide.
    #[error("degenerate segment: both endpoints are at [{x}, {y}]")]
    DegenerateSegment { x: f64, y: f64 },

    /// A vertex with a NaN or infinite coordinate.
    #[error("vertex {idx} has a non-finite coordinate")]
    NonFiniteVertex { idx: VertexIdx },
}
