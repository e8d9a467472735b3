//! Harmonic-space extraction: the full analysis pipeline.
//!
//! # Intuition
//!
//! Filling a 3-clique with a 2-simplex declares its bounding cycle
//! trivial. The harmonic space is what remains of the graph's cycle
//! space after every such fill: cycles that are neither gradients of a
//! vertex potential nor boundaries of filled triangles.
//!
//! # Definition
//!
//! With `A` the vertex coboundary and `B` the edge coboundary, the
//! Helmholtzian on edge space is
//!
//! ```text
//! H = A·Aᵗ + Bᵗ·B
//! ```
//!
//! The Hodge decomposition splits edge space into gradient, curl and
//! harmonic components; `ker H` is exactly the harmonic part, and its
//! dimension is the first Betti number of the complex.
//!
//! # Algorithm
//!
//! Builder -> Assembler -> Composer -> Extractor, strictly forward:
//! derive triangles, assemble `A` and `B`, compose `H` over the
//! integers, row-reduce over exact rationals and read the kernel basis
//! off the free columns. Single-threaded and deterministic; identical
//! input yields identical output, including basis order.
//!
//! # References
//!
//! - Lim (2020). "Hodge Laplacians on graphs"
//! - Jiang, Lim, Yao, Ye (2011). "Statistical ranking and combinatorial
//!   Hodge theory"

use crate::complex::triangles;
use crate::error::Result;
use crate::graph::OrientedGraph;
use crate::matrix::RationalMatrix;
use crate::operators::{edge_coboundary, helmholtzian, vertex_coboundary};
use crate::report::HodgeAnalysis;

/// Run the full harmonic analysis of a graph's clique complex.
///
/// Pure function of the validated graph. The only failure mode is a
/// structural contract violation surfaced by the operator assembler;
/// for triangles derived here that cannot happen.
///
/// # Example
///
/// ```
/// use harmonix_core::{analyze, OrientedGraph};
///
/// let graph = OrientedGraph::from_pairs(
///     &[1, 2, 3, 4, 5, 6],
///     &[(1, 2), (2, 3), (3, 4), (4, 1), (3, 5), (5, 6), (3, 6)],
/// ).unwrap();
///
/// let analysis = analyze(&graph).unwrap();
/// // The filled triangle {3, 5, 6} kills one of the two graph cycles.
/// assert_eq!(analysis.circuit_rank, 2);
/// assert_eq!(analysis.betti, 1);
/// ```
pub fn analyze(graph: &OrientedGraph) -> Result<HodgeAnalysis> {
    let triangles = triangles(graph);
    let a = vertex_coboundary(graph);
    let b = edge_coboundary(graph, &triangles)?;
    let h = helmholtzian(&a, &b);

    let rref = RationalMatrix::from_integer(&h).into_rref();
    let kernel = rref.null_space_basis();

    Ok(HodgeAnalysis {
        vertex_count: graph.vertex_count(),
        edges: graph.edges().to_vec(),
        triangles,
        betti: kernel.len(),
        kernel,
        components: graph.connected_component_count(),
        circuit_rank: graph.circuit_rank(),
    })
}
