//! Vertex, edge and validated graph types.
//!
//! An [`OrientedGraph`] is the immutable input to the whole pipeline:
//! an ordered vertex set and an ordered sequence of oriented edges. A
//! vertex's position in the vertex sequence is its column index in the
//! vertex coboundary; an edge's position is its row/column index in
//! every edge-space operator. Construction validates the input once so
//! that every later stage can assume a well-formed complex.

use crate::error::{Error, Result};
use petgraph::algo::connected_components;
use petgraph::graph::{NodeIndex, UnGraph};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Unique identifier for a vertex.
///
/// Any totally ordered label domain works; the reference construction
/// uses 1-based consecutive integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct VertexId(pub u32);

impl VertexId {
    /// Create a new vertex ID.
    pub fn new(id: u32) -> Self {
        Self(id)
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for VertexId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

/// An oriented edge: an ordered pair of distinct vertices.
///
/// The order fixes the sign convention in the coboundary operators; it
/// is not a geometric direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    /// Tail vertex (gets `-1` in the vertex coboundary).
    pub tail: VertexId,
    /// Head vertex (gets `+1` in the vertex coboundary).
    pub head: VertexId,
}

impl Edge {
    /// Create a new oriented edge.
    pub fn new(tail: impl Into<VertexId>, head: impl Into<VertexId>) -> Self {
        Self {
            tail: tail.into(),
            head: head.into(),
        }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({} -> {})", self.tail, self.head)
    }
}

/// A validated oriented graph.
///
/// Immutable once constructed; the whole analysis is a pure function of
/// this value. Alongside the vertex and edge sequences it keeps an
/// index from each normalized (ascending-position) vertex pair to the
/// matching edge's index and stored orientation, so boundary lookups
/// are O(1) instead of a scan over the edge sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrientedGraph {
    vertices: Vec<VertexId>,
    edges: Vec<Edge>,
    /// Vertex ID -> position in the vertex sequence.
    position: HashMap<VertexId, usize>,
    /// (low position, high position) -> (edge index, sign of the stored
    /// orientation relative to ascending position order).
    pair_index: HashMap<(usize, usize), (usize, i64)>,
    /// Per edge: (tail position, head position).
    edge_positions: Vec<(usize, usize)>,
}

impl OrientedGraph {
    /// Build a graph from vertex and edge sequences, validating both.
    ///
    /// Rejects duplicate vertices, self-loops, edges whose endpoints
    /// are not in the vertex set, and unordered pairs appearing twice
    /// in either orientation.
    pub fn new(vertices: Vec<VertexId>, edges: Vec<Edge>) -> Result<Self> {
        let mut position = HashMap::with_capacity(vertices.len());
        for (pos, &v) in vertices.iter().enumerate() {
            if position.insert(v, pos).is_some() {
                return Err(Error::DuplicateVertex(v));
            }
        }

        let mut pair_index = HashMap::with_capacity(edges.len());
        let mut edge_positions = Vec::with_capacity(edges.len());
        for (index, edge) in edges.iter().enumerate() {
            if edge.tail == edge.head {
                return Err(Error::SelfLoop(edge.tail));
            }
            let lookup = |v: VertexId| {
                position.get(&v).copied().ok_or(Error::UnknownVertex {
                    vertex: v,
                    tail: edge.tail,
                    head: edge.head,
                })
            };
            let tail_pos = lookup(edge.tail)?;
            let head_pos = lookup(edge.head)?;

            let key = (tail_pos.min(head_pos), tail_pos.max(head_pos));
            let sign = if tail_pos < head_pos { 1 } else { -1 };
            if pair_index.insert(key, (index, sign)).is_some() {
                return Err(Error::DuplicateEdge {
                    tail: edge.tail,
                    head: edge.head,
                });
            }
            edge_positions.push((tail_pos, head_pos));
        }

        Ok(Self {
            vertices,
            edges,
            position,
            pair_index,
            edge_positions,
        })
    }

    /// Convenience constructor from numeric labels and `(tail, head)`
    /// pairs.
    pub fn from_pairs(vertices: &[u32], edges: &[(u32, u32)]) -> Result<Self> {
        Self::new(
            vertices.iter().copied().map(VertexId).collect(),
            edges
                .iter()
                .map(|&(tail, head)| Edge::new(tail, head))
                .collect(),
        )
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// The vertex sequence.
    pub fn vertices(&self) -> &[VertexId] {
        &self.vertices
    }

    /// The edge sequence.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Position of a vertex in the vertex sequence.
    pub fn vertex_position(&self, vertex: VertexId) -> Option<usize> {
        self.position.get(&vertex).copied()
    }

    /// Per-edge `(tail position, head position)` pairs, in edge order.
    pub fn edge_endpoint_positions(&self) -> &[(usize, usize)] {
        &self.edge_positions
    }

    /// Look up the edge realizing the unordered pair `{from, to}`.
    ///
    /// Returns the edge's index and the sign of the traversal
    /// `from -> to` relative to the stored orientation: `+1` if the
    /// edge is stored as `(from, to)`, `-1` if stored reversed.
    pub fn oriented_edge(&self, from: VertexId, to: VertexId) -> Option<(usize, i64)> {
        let from_pos = self.vertex_position(from)?;
        let to_pos = self.vertex_position(to)?;
        self.oriented_edge_at(from_pos, to_pos)
    }

    /// Position-indexed variant of [`oriented_edge`](Self::oriented_edge).
    pub(crate) fn oriented_edge_at(&self, from: usize, to: usize) -> Option<(usize, i64)> {
        let key = (from.min(to), from.max(to));
        let &(index, stored_sign) = self.pair_index.get(&key)?;
        let traversal = if from < to { 1 } else { -1 };
        Some((index, stored_sign * traversal))
    }

    /// Whether some edge realizes the unordered position pair `{i, j}`.
    pub(crate) fn has_pair_at(&self, i: usize, j: usize) -> bool {
        self.pair_index.contains_key(&(i.min(j), i.max(j)))
    }

    /// Undirected petgraph view of the graph.
    ///
    /// Node indices coincide with vertex positions. Orientation is an
    /// algebraic convention, not connectivity, so the view is
    /// undirected.
    pub fn as_petgraph(&self) -> UnGraph<VertexId, ()> {
        let mut graph = UnGraph::with_capacity(self.vertices.len(), self.edges.len());
        for &v in &self.vertices {
            graph.add_node(v);
        }
        for &(tail, head) in &self.edge_positions {
            graph.add_edge(NodeIndex::new(tail), NodeIndex::new(head), ());
        }
        graph
    }

    /// Number of connected components (the zeroth Betti number).
    pub fn connected_component_count(&self) -> usize {
        connected_components(&self.as_petgraph())
    }

    /// Cycle-space dimension of the bare graph: `|E| - |V| + c`.
    ///
    /// This counts independent cycles before any triangle is filled;
    /// the harmonic analysis reports how many of them survive.
    pub fn circuit_rank(&self) -> usize {
        self.edges.len() + self.connected_component_count() - self.vertices.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference() -> OrientedGraph {
        OrientedGraph::from_pairs(
            &[1, 2, 3, 4, 5, 6],
            &[(1, 2), (2, 3), (3, 4), (4, 1), (3, 5), (5, 6), (3, 6)],
        )
        .unwrap()
    }

    #[test]
    fn test_counts() {
        let graph = reference();
        assert_eq!(graph.vertex_count(), 6);
        assert_eq!(graph.edge_count(), 7);
    }

    #[test]
    fn test_oriented_edge_signs() {
        let graph = reference();
        // (3, 4) is stored in that orientation
        assert_eq!(
            graph.oriented_edge(VertexId(3), VertexId(4)),
            Some((2, 1))
        );
        // Traversing it backwards flips the sign
        assert_eq!(
            graph.oriented_edge(VertexId(4), VertexId(3)),
            Some((2, -1))
        );
        // (4, 1) is stored against ascending order
        assert_eq!(
            graph.oriented_edge(VertexId(4), VertexId(1)),
            Some((3, 1))
        );
        assert_eq!(
            graph.oriented_edge(VertexId(1), VertexId(4)),
            Some((3, -1))
        );
        // No edge between 1 and 3
        assert_eq!(graph.oriented_edge(VertexId(1), VertexId(3)), None);
    }

    #[test]
    fn test_unknown_vertex_rejected() {
        let err = OrientedGraph::from_pairs(&[1, 2], &[(1, 2), (2, 9)]).unwrap_err();
        assert_eq!(
            err,
            Error::UnknownVertex {
                vertex: VertexId(9),
                tail: VertexId(2),
                head: VertexId(9),
            }
        );
    }

    #[test]
    fn test_self_loop_rejected() {
        let err = OrientedGraph::from_pairs(&[1, 2], &[(1, 1)]).unwrap_err();
        assert_eq!(err, Error::SelfLoop(VertexId(1)));
    }

    #[test]
    fn test_duplicate_vertex_rejected() {
        let err = OrientedGraph::from_pairs(&[1, 2, 1], &[]).unwrap_err();
        assert_eq!(err, Error::DuplicateVertex(VertexId(1)));
    }

    #[test]
    fn test_duplicate_edge_rejected_in_either_orientation() {
        let err = OrientedGraph::from_pairs(&[1, 2], &[(1, 2), (2, 1)]).unwrap_err();
        assert_eq!(
            err,
            Error::DuplicateEdge {
                tail: VertexId(2),
                head: VertexId(1),
            }
        );
    }

    #[test]
    fn test_empty_graph_is_valid() {
        let graph = OrientedGraph::from_pairs(&[], &[]).unwrap();
        assert_eq!(graph.vertex_count(), 0);
        assert_eq!(graph.edge_count(), 0);
        assert_eq!(graph.connected_component_count(), 0);
        assert_eq!(graph.circuit_rank(), 0);
    }

    #[test]
    fn test_components_and_circuit_rank() {
        let graph = reference();
        assert_eq!(graph.connected_component_count(), 1);
        // Square + triangle: two independent cycles
        assert_eq!(graph.circuit_rank(), 2);

        let two_squares = OrientedGraph::from_pairs(
            &[1, 2, 3, 4, 5, 6, 7, 8],
            &[
                (1, 2),
                (2, 3),
                (3, 4),
                (4, 1),
                (5, 6),
                (6, 7),
                (7, 8),
                (8, 5),
            ],
        )
        .unwrap();
        assert_eq!(two_squares.connected_component_count(), 2);
        assert_eq!(two_squares.circuit_rank(), 2);
    }

    #[test]
    fn test_isolated_vertices_count_as_components() {
        let graph = OrientedGraph::from_pairs(&[1, 2, 3], &[(1, 2)]).unwrap();
        assert_eq!(graph.connected_component_count(), 2);
        assert_eq!(graph.circuit_rank(), 0);
    }
}
