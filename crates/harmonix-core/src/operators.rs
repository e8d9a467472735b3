//! Coboundary operator assembly and composition.
//!
//! # Sign conventions
//!
//! The vertex coboundary `A` (|E| x |V|) encodes edge endpoints: row
//! `e` has `-1` at the tail's column and `+1` at the head's column.
//!
//! The edge coboundary `B` (|T| x |E|) walks each triangle's boundary
//! in cyclic order `(a, b), (b, c), (c, a)`: the matching edge's column
//! gets `+1` if its stored orientation agrees with the traversal and
//! `-1` if it is stored reversed.
//!
//! # Composition
//!
//! ```text
//! L = Aᵗ·A            (graph Laplacian, |V| x |V|)
//! H = A·Aᵗ + Bᵗ·B     (Helmholtzian,    |E| x |E|)
//! ```
//!
//! Both are symmetric and positive semi-definite; the null space of `H`
//! is the harmonic (cycle) space of the complex. All entries are
//! integers and every product here is integer matrix arithmetic;
//! nothing is rounded anywhere in the pipeline.

use crate::complex::Triangle;
use crate::error::{Error, Result};
use crate::graph::OrientedGraph;
use ndarray::Array2;

/// Assemble the vertex coboundary operator `A` (|E| x |V|).
///
/// Total function of the validated graph; no failure modes.
#[must_use]
pub fn vertex_coboundary(graph: &OrientedGraph) -> Array2<i64> {
    let mut a = Array2::zeros((graph.edge_count(), graph.vertex_count()));
    for (row, &(tail, head)) in graph.edge_endpoint_positions().iter().enumerate() {
        a[[row, tail]] = -1;
        a[[row, head]] = 1;
    }
    a
}

/// Assemble the edge coboundary operator `B` (|T| x |E|).
///
/// For triangles produced by [`triangles`](crate::triangles) every
/// boundary lookup succeeds; an externally supplied triangle whose
/// boundary pair matches no edge yields
/// [`Error::MissingBoundaryEdge`].
pub fn edge_coboundary(graph: &OrientedGraph, triangles: &[Triangle]) -> Result<Array2<i64>> {
    let mut b = Array2::zeros((triangles.len(), graph.edge_count()));
    for (row, triangle) in triangles.iter().enumerate() {
        for (from, to) in triangle.boundary_pairs() {
            let (index, sign) =
                graph
                    .oriented_edge(from, to)
                    .ok_or(Error::MissingBoundaryEdge {
                        triangle: *triangle,
                        tail: from,
                        head: to,
                    })?;
            b[[row, index]] = sign;
        }
    }
    Ok(b)
}

/// The combinatorial graph Laplacian `L = Aᵗ·A` (|V| x |V|).
///
/// Not consumed by the rest of the pipeline; exposed because it
/// documents the Hodge decomposition alongside the Helmholtzian.
#[must_use]
pub fn graph_laplacian(a: &Array2<i64>) -> Array2<i64> {
    a.t().dot(a)
}

/// The Helmholtzian `H = A·Aᵗ + Bᵗ·B` (|E| x |E|).
#[must_use]
pub fn helmholtzian(a: &Array2<i64>, b: &Array2<i64>) -> Array2<i64> {
    a.dot(&a.t()) + b.t().dot(b)
}
