// Allow minor clippy style warnings at crate level
// These are mostly style preferences, not bugs
#![allow(clippy::must_use_candidate)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::uninlined_format_args)]

//! Discrete Hodge theory on graph-derived simplicial complexes.
//!
//! Given a vertex set and a sequence of oriented edges, this crate fills
//! every 3-clique with a 2-simplex, assembles the signed coboundary
//! operators between 0-, 1- and 2-simplices, composes the Helmholtzian
//! operator on edge space, and extracts an exact basis of its null space
//! (the harmonic space). The dimension of that basis is the first Betti
//! number of the complex.
//!
//! All arithmetic is exact: the incidence operators are integer matrices
//! and the kernel extraction runs over arbitrary-precision rationals, so
//! there are no tolerance thresholds and no false near-zero pivots.
//!
//! - [`OrientedGraph`] - validated vertex/edge input
//! - [`triangles`] - 2-simplices from exhaustive 3-clique enumeration
//! - [`operators`] - coboundary assembly and operator composition
//! - [`RationalMatrix`] - exact row reduction with pivot tracking
//! - [`analyze`] - the full pipeline, returning a [`HodgeAnalysis`]
//!
//! # Example
//!
//! ```rust
//! use harmonix_core::{analyze, OrientedGraph};
//!
//! // A 4-cycle with no triangle: one harmonic cycle survives.
//! let graph = OrientedGraph::from_pairs(
//!     &[1, 2, 3, 4],
//!     &[(1, 2), (2, 3), (3, 4), (4, 1)],
//! ).unwrap();
//!
//! let analysis = analyze(&graph).unwrap();
//! assert_eq!(analysis.betti, 1);
//! ```

/// Pipeline algorithms (harmonic analysis).
pub mod algo;

/// Triangle derivation from 3-cliques.
pub mod complex;

/// Error types.
pub mod error;

/// Vertex, edge and validated graph types.
pub mod graph;

/// Exact rational matrices and row reduction.
pub mod matrix;

/// Coboundary operator assembly and composition.
pub mod operators;

/// Analysis result and its renderings.
pub mod report;

pub use algo::harmonic::analyze;
pub use complex::{triangles, Triangle};
pub use error::{Error, Result};
pub use graph::{Edge, OrientedGraph, VertexId};
pub use matrix::{RationalMatrix, Rref};
pub use operators::{edge_coboundary, graph_laplacian, helmholtzian, vertex_coboundary};
pub use report::HodgeAnalysis;

// Re-exported so callers can consume kernel vectors without naming the
// num crates themselves.
pub use num_rational::BigRational;
