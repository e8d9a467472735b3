//! Property-based tests over random small graphs.
//!
//! Strategies generate an arbitrary subset of the unordered vertex
//! pairs, each with an arbitrary stored orientation, so both the clique
//! detection and the sign conventions get exercised from every angle.

use harmonix_core::{
    analyze, edge_coboundary, graph_laplacian, helmholtzian, triangles, vertex_coboundary,
    OrientedGraph, RationalMatrix,
};
use num_traits::Zero;
use proptest::prelude::*;

/// All unordered pairs over `1..=n`.
fn all_pairs(n: u32) -> Vec<(u32, u32)> {
    (1..=n)
        .flat_map(|i| ((i + 1)..=n).map(move |j| (i, j)))
        .collect()
}

/// A random graph on up to 7 vertices: each possible edge is included
/// or not, and each included edge gets a random orientation.
fn arb_graph() -> impl Strategy<Value = OrientedGraph> {
    (0u32..=7).prop_flat_map(|n| {
        let pairs = all_pairs(n);
        let m = pairs.len();
        (
            proptest::collection::vec(any::<bool>(), m),
            proptest::collection::vec(any::<bool>(), m),
        )
            .prop_map(move |(include, flip)| {
                let edges: Vec<(u32, u32)> = pairs
                    .iter()
                    .zip(include.iter().zip(flip.iter()))
                    .filter(|(_, (&inc, _))| inc)
                    .map(|(&(a, b), (_, &flip))| if flip { (b, a) } else { (a, b) })
                    .collect();
                let vertices: Vec<u32> = (1..=n).collect();
                OrientedGraph::from_pairs(&vertices, &edges)
                    .expect("generated graphs are well-formed")
            })
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn kernel_annihilates_exactly(graph in arb_graph()) {
        let ts = triangles(&graph);
        let a = vertex_coboundary(&graph);
        let b = edge_coboundary(&graph, &ts).unwrap();
        let h = RationalMatrix::from_integer(&helmholtzian(&a, &b));

        let analysis = analyze(&graph).unwrap();
        for v in &analysis.kernel {
            let image = h.apply(v);
            prop_assert!(
                image.iter().all(Zero::is_zero),
                "H*v != 0 for v = {:?}",
                v
            );
        }
    }

    #[test]
    fn rank_nullity(graph in arb_graph()) {
        let ts = triangles(&graph);
        let a = vertex_coboundary(&graph);
        let b = edge_coboundary(&graph, &ts).unwrap();
        let rank = RationalMatrix::from_integer(&helmholtzian(&a, &b))
            .into_rref()
            .rank();

        let analysis = analyze(&graph).unwrap();
        prop_assert_eq!(analysis.betti + rank, graph.edge_count());
    }

    #[test]
    fn helmholtzian_is_symmetric(graph in arb_graph()) {
        let ts = triangles(&graph);
        let a = vertex_coboundary(&graph);
        let b = edge_coboundary(&graph, &ts).unwrap();
        let h = helmholtzian(&a, &b);
        prop_assert_eq!(&h, &h.t());
    }

    #[test]
    fn quadratic_forms_are_nonnegative(
        (graph, x) in arb_graph().prop_flat_map(|g| {
            let m = g.edge_count();
            let n = g.vertex_count();
            (
                Just(g),
                proptest::collection::vec(-5i64..=5, m.max(n)),
            )
        }),
    ) {
        // x'Hx >= 0 and y'Ly >= 0: both operators are positive
        // semi-definite, checked exactly on integer vectors.
        let ts = triangles(&graph);
        let a = vertex_coboundary(&graph);
        let b = edge_coboundary(&graph, &ts).unwrap();
        let h = helmholtzian(&a, &b);
        let l = graph_laplacian(&a);

        let m = graph.edge_count();
        let quad_h: i64 = (0..m)
            .flat_map(|r| (0..m).map(move |c| (r, c)))
            .map(|(r, c)| x[r] * h[[r, c]] * x[c])
            .sum();
        prop_assert!(quad_h >= 0, "x'Hx = {} < 0", quad_h);

        let n = graph.vertex_count();
        let quad_l: i64 = (0..n)
            .flat_map(|r| (0..n).map(move |c| (r, c)))
            .map(|(r, c)| x[r] * l[[r, c]] * x[c])
            .sum();
        prop_assert!(quad_l >= 0, "y'Ly = {} < 0", quad_l);
    }

    #[test]
    fn betti_never_exceeds_circuit_rank(graph in arb_graph()) {
        // Triangle fills can only kill cycles, never create them
        let analysis = analyze(&graph).unwrap();
        prop_assert!(analysis.betti <= analysis.circuit_rank);
    }

    #[test]
    fn betti_equals_circuit_rank_without_triangles(graph in arb_graph()) {
        let analysis = analyze(&graph).unwrap();
        if analysis.triangles.is_empty() {
            prop_assert_eq!(analysis.betti, analysis.circuit_rank);
        }
    }

    #[test]
    fn analysis_is_deterministic(graph in arb_graph()) {
        prop_assert_eq!(analyze(&graph).unwrap(), analyze(&graph).unwrap());
    }
}
