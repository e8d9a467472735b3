use crate::complex::Triangle;
use crate::graph::VertexId;
use thiserror::Error;

/// Errors that can occur in harmonix-core.
///
/// Every variant is a structural violation in the input; there are no
/// recoverable transient failures. Errors are raised by the first
/// component that observes the violated precondition, before any
/// partial result is produced.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// An edge references a vertex that is not part of the vertex set.
    #[error("edge ({tail} -> {head}) references unknown vertex {vertex}")]
    UnknownVertex {
        /// The missing vertex.
        vertex: VertexId,
        /// Tail of the offending edge.
        tail: VertexId,
        /// Head of the offending edge.
        head: VertexId,
    },
    /// An edge connects a vertex to itself.
    #[error("self-loop at vertex {0}")]
    SelfLoop(VertexId),
    /// The same label appears twice in the vertex sequence.
    #[error("duplicate vertex {0}")]
    DuplicateVertex(VertexId),
    /// The same unordered vertex pair appears twice in the edge
    /// sequence (in either orientation).
    #[error("duplicate edge between {tail} and {head}")]
    DuplicateEdge {
        /// Tail of the repeated edge.
        tail: VertexId,
        /// Head of the repeated edge.
        head: VertexId,
    },
    /// A triangle's boundary pair has no matching edge in either
    /// orientation. Cannot occur for triangles derived by
    /// [`triangles`](crate::triangles); only reachable with an
    /// externally supplied triangle list.
    #[error("triangle {triangle} has no boundary edge between {tail} and {head}")]
    MissingBoundaryEdge {
        /// The triangle whose boundary is incomplete.
        triangle: Triangle,
        /// Tail of the missing boundary pair.
        tail: VertexId,
        /// Head of the missing boundary pair.
        head: VertexId,
    },
}

/// Result type alias for harmonix-core.
pub type Result<T> = std::result::Result<T, Error>;
