/// Self-entropy engine: unsupervised information-content scoring.
///
/// For each row the engine computes an attention-style weighting over the
/// batch (similarity row + softmax), projects the weights back onto the
/// feature columns, renormalizes, and takes the Shannon entropy of the
/// resulting column distribution. Cost is O(N^2 * D) per batch, which is
/// why the rainbow scheduler restricts batches to small windows.

use crate::core::errors::{RainbowError, Result};
use crate::vector::similarity::{dot_column, dot_unchecked};
use crate::vector::softmax::softmax;
use crate::vector::types::{Vector, VectorCollection};

/// Compute one entropy score per row of `rows`, without mutating them.
///
/// Rejects empty batches and wrong-dimension rows before any similarity
/// is computed. Scores are finite and non-negative.
pub fn self_entropy_scores(rows: &[Vector], dimension: usize) -> Result<Vec<f64>> {
    if rows.is_empty() {
        return Err(RainbowError::EmptyInput("self-entropy batch"));
    }
    if dimension == 0 {
        return Err(RainbowError::EmptyInput("self-entropy projection"));
    }
    for row in rows {
        if row.dim() != dimension {
            return Err(RainbowError::DimensionMismatch {
                expected: dimension,
                got: row.dim(),
            });
        }
    }

    let mut similarity = vec![0.0; rows.len()];
    let mut projection = vec![0.0; dimension];
    let mut scores = Vec::with_capacity(rows.len());

    for k in rows {
        for (j, q) in rows.iter().enumerate() {
            similarity[j] = dot_unchecked(&k.values, &q.values);
        }
        softmax(&mut similarity)?;

        for (c, slot) in projection.iter_mut().enumerate() {
            *slot = dot_column(&similarity, rows, c);
        }
        softmax(&mut projection)?;

        // Shannon entropy, natural log; 0 ln 0 taken as 0
        let mut entropy = 0.0;
        for &p in projection.iter() {
            if p > 0.0 {
                entropy += p * p.ln();
            }
        }
        scores.push(-entropy);
    }

    Ok(scores)
}

/// Compute and store one entropy score per row, in place.
pub fn self_entropy(rows: &mut [Vector], dimension: usize) -> Result<()> {
    let scores = self_entropy_scores(rows, dimension)?;
    for (row, score) in rows.iter_mut().zip(scores) {
        row.entropy = score;
    }
    Ok(())
}

/// Score a whole collection as a single batch.
pub fn self_entropy_collection(collection: &mut VectorCollection) -> Result<()> {
    let dimension = collection.dimension();
    self_entropy(collection.rows_mut(), dimension)
}
