use crate::core::errors::{RainbowError, Result};
use crate::vector::similarity_simd::dot_simd;
use crate::vector::types::Vector;

/// Compute the inner product of two equal-length vectors.
///
/// Rejects unequal lengths before touching either slice; dispatches to the
/// accelerated kernel where the platform provides one.
pub fn dot(a: &[f64], b: &[f64]) -> Result<f64> {
    if a.len() != b.len() {
        return Err(RainbowError::DimensionMismatch {
            expected: a.len(),
            got: b.len(),
        });
    }
    Ok(dot_simd(a, b))
}

/// Inner product without the length check.
///
/// Callers must hold the equal-length invariant, e.g. rows of one
/// [`crate::vector::types::VectorCollection`].
pub fn dot_unchecked(a: &[f64], b: &[f64]) -> f64 {
    debug_assert_eq!(a.len(), b.len(), "Vectors must have the same dimension");
    dot_simd(a, b)
}

/// Portable scalar inner product; reference implementation for the
/// accelerated kernel.
pub fn dot_portable(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b.iter()).map(|(x, y)| x * y).sum()
}

/// Weighted column projection: `sum_i weights[i] * rows[i].values[col]`.
///
/// The transposed counterpart of [`dot`]: combines one feature column
/// across all rows, weighted per row.
pub fn dot_column(weights: &[f64], rows: &[Vector], col: usize) -> f64 {
    debug_assert_eq!(weights.len(), rows.len(), "One weight per row required");
    weights
        .iter()
        .zip(rows.iter())
        .map(|(w, row)| w * row.values[col])
        .sum()
}
