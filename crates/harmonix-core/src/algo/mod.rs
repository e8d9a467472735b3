//! Algorithms over the simplicial complex.

/// Harmonic-space extraction (the full pipeline).
pub mod harmonic;
