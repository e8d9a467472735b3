//! Analysis result and its renderings.

use crate::complex::Triangle;
use crate::graph::Edge;
use num_rational::BigRational;
use serde::{Serialize, Serializer};
use std::fmt;

/// The result of a harmonic analysis: an immutable value produced once
/// by [`analyze`](crate::analyze).
///
/// Kernel vectors are indexed by edge position; the `edges` field
/// records that order. Serialization renders kernel entries as exact
/// rational strings (`"1"`, `"-3/2"`), never rounded floats.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HodgeAnalysis {
    /// Number of vertices.
    pub vertex_count: usize,
    /// The edge sequence, fixing the coordinate order of kernel
    /// vectors.
    pub edges: Vec<Edge>,
    /// Derived triangles, in enumeration order.
    pub triangles: Vec<Triangle>,
    /// Exact basis of the Helmholtzian's null space.
    #[serde(serialize_with = "rationals_as_strings")]
    pub kernel: Vec<Vec<BigRational>>,
    /// Null-space dimension: the first Betti number of the complex.
    pub betti: usize,
    /// Connected components of the graph (the zeroth Betti number).
    pub components: usize,
    /// Cycle-space dimension of the bare graph, before triangle fills.
    pub circuit_rank: usize,
}

fn rationals_as_strings<S>(kernel: &[Vec<BigRational>], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let rendered: Vec<Vec<String>> = kernel
        .iter()
        .map(|v| v.iter().map(ToString::to_string).collect())
        .collect();
    rendered.serialize(serializer)
}

fn write_vector(f: &mut fmt::Formatter<'_>, vector: &[BigRational]) -> fmt::Result {
    write!(f, "[")?;
    for (i, entry) in vector.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{entry}")?;
    }
    write!(f, "]")
}

impl fmt::Display for HodgeAnalysis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Vertices:             {}", self.vertex_count)?;
        writeln!(f, "Edges:                {}", self.edges.len())?;
        writeln!(f, "Triangles:            {}", self.triangles.len())?;
        for triangle in &self.triangles {
            writeln!(f, "  {triangle}")?;
        }
        writeln!(f, "Connected components: {}", self.components)?;
        writeln!(f, "Circuit rank:         {}", self.circuit_rank)?;
        if self.edges.is_empty() {
            writeln!(f, "Edge order:           (none)")?;
        } else {
            write!(f, "Edge order:           ")?;
            for (i, edge) in self.edges.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{edge}")?;
            }
            writeln!(f)?;
        }
        if self.kernel.is_empty() {
            writeln!(f, "Harmonic basis:       (none)")?;
        } else {
            writeln!(f, "Harmonic basis:")?;
            for vector in &self.kernel {
                write!(f, "  ")?;
                write_vector(f, vector)?;
                writeln!(f)?;
            }
        }
        write!(f, "Betti number:         {}", self.betti)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algo::harmonic::analyze;
    use crate::graph::OrientedGraph;

    fn reference_analysis() -> HodgeAnalysis {
        let graph = OrientedGraph::from_pairs(
            &[1, 2, 3, 4, 5, 6],
            &[(1, 2), (2, 3), (3, 4), (4, 1), (3, 5), (5, 6), (3, 6)],
        )
        .unwrap();
        analyze(&graph).unwrap()
    }

    #[test]
    fn test_display_reference() {
        let rendered = reference_analysis().to_string();
        assert!(rendered.contains("Triangles:            1"));
        assert!(rendered.contains("{3, 5, 6}"));
        assert!(rendered.contains("[1, 1, 1, 1, 0, 0, 0]"));
        assert!(rendered.contains("Betti number:         1"));
    }

    #[test]
    fn test_display_empty_kernel() {
        let graph = OrientedGraph::from_pairs(&[1, 2, 3], &[(1, 2), (2, 3), (3, 1)]).unwrap();
        let rendered = analyze(&graph).unwrap().to_string();
        assert!(rendered.contains("Harmonic basis:       (none)"));
        assert!(rendered.contains("Betti number:         0"));
    }

    #[test]
    fn test_json_kernel_entries_are_exact_strings() {
        let json = serde_json::to_value(reference_analysis()).unwrap();
        assert_eq!(json["betti"], 1);
        assert_eq!(json["kernel"][0][0], "1");
        assert_eq!(json["kernel"][0][4], "0");
        assert_eq!(json["edges"][0]["tail"], 1);
        assert_eq!(json["edges"][0]["head"], 2);
    }
}
