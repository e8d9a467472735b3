//! Triangle derivation from 3-cliques.
//!
//! The 2-simplices of the complex are not input: every 3-clique of the
//! graph is filled. Enumeration is exhaustive over strictly increasing
//! position triples `(i, j, k)`, so the triangle sequence is in
//! lexicographic order of vertex positions; that order determines the
//! row order of the edge coboundary operator.

use crate::graph::{OrientedGraph, VertexId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// An unordered 3-clique `{a, b, c}`, stored with `a < b < c` in
/// vertex-sequence position order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Triangle {
    /// First vertex (lowest position).
    pub a: VertexId,
    /// Second vertex.
    pub b: VertexId,
    /// Third vertex (highest position).
    pub c: VertexId,
}

impl Triangle {
    /// The three boundary pairs in cyclic order:
    /// `(a, b), (b, c), (c, a)`.
    ///
    /// This cyclic convention fixes the signs in the edge coboundary
    /// operator.
    pub fn boundary_pairs(&self) -> [(VertexId, VertexId); 3] {
        [(self.a, self.b), (self.b, self.c), (self.c, self.a)]
    }
}

impl fmt::Display for Triangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}, {}, {}}}", self.a, self.b, self.c)
    }
}

/// Derive all triangles of the graph.
///
/// A position triple `(i, j, k)` with `i < j < k` qualifies iff each of
/// the three unordered pairs it induces is realized by some edge, in
/// either orientation. Every triple is considered, including those
/// anchored at the first vertex.
///
/// # Complexity
///
/// Cubic in the number of vertices; intended for small graphs.
#[must_use]
pub fn triangles(graph: &OrientedGraph) -> Vec<Triangle> {
    let vertices = graph.vertices();
    let n = vertices.len();
    let mut found = Vec::new();
    for i in 0..n {
        for j in (i + 1)..n {
            if !graph.has_pair_at(i, j) {
                continue;
            }
            for k in (j + 1)..n {
                if graph.has_pair_at(j, k) && graph.has_pair_at(i, k) {
                    found.push(Triangle {
                        a: vertices[i],
                        b: vertices[j],
                        c: vertices[k],
                    });
                }
            }
        }
    }
    found
}
