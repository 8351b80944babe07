use std::collections::BTreeMap;

use crate::core::errors::{RainbowError, Result};
use crate::entropy::self_entropy;
use crate::vector::types::{Vector, VectorCollection};

/// Neighbors consulted per query when none is specified.
pub const DEFAULT_NEIGHBORS: usize = 10;

/// Majority-vote classifier over an entropy-sorted index.
///
/// Entropy is only meaningful relative to the batch it was computed in,
/// so the classifier keeps a probe window: a fixed set of labeled
/// reference exemplars plus one reserved slot. Each query is scored by
/// placing it in the reserved slot and re-running the self-entropy engine
/// over the whole probe window, which makes the query's entropy
/// comparable to the index's.
pub struct EntropyClassifier {
    probe: VectorCollection,
}

impl EntropyClassifier {
    /// Build a classifier around a non-empty exemplar set.
    ///
    /// Appends the reserved probe slot; the exemplars themselves are
    /// never mutated afterwards.
    pub fn new(mut exemplars: VectorCollection) -> Result<Self> {
        if exemplars.is_empty() {
            return Err(RainbowError::EmptyInput("classifier exemplars"));
        }
        let probe_slot = Vector::zeroed(exemplars.dimension());
        exemplars.push(probe_slot)?;
        Ok(EntropyClassifier { probe: exemplars })
    }

    /// Score a query relative to the probe window.
    pub fn query_entropy(&mut self, query: Vector) -> Result<f64> {
        let dimension = self.probe.dimension();
        if query.dim() != dimension {
            return Err(RainbowError::DimensionMismatch {
                expected: dimension,
                got: query.dim(),
            });
        }

        let rows = self.probe.rows_mut();
        let slot = rows.len() - 1;
        rows[slot] = query;
        self_entropy(rows, dimension)?;
        Ok(rows[slot].entropy)
    }

    /// Classify `query` against an entropy-sorted index by majority vote
    /// over the `k` nearest entropy neighbors.
    ///
    /// Neighbors are the entries at and after the query entropy's
    /// insertion point (lower-bound semantics); fewer than `k` are used
    /// near the end of the index. Vote ties break toward the lowest
    /// label. An insertion point at or past the end of the index is
    /// reported as [`RainbowError::IndexExhausted`].
    pub fn classify(
        &mut self,
        index: &VectorCollection,
        query: Vector,
        k: usize,
    ) -> Result<String> {
        if k == 0 {
            return Err(RainbowError::EmptyInput("neighbor count"));
        }
        if index.dimension() != self.probe.dimension() {
            return Err(RainbowError::DimensionMismatch {
                expected: self.probe.dimension(),
                got: index.dimension(),
            });
        }

        let entropy = self.query_entropy(query)?;
        let position = index.rows().partition_point(|row| row.entropy < entropy);
        if position >= index.len() {
            return Err(RainbowError::IndexExhausted);
        }

        let neighbors = &index.rows()[position..(position + k).min(index.len())];
        let mut votes: BTreeMap<&str, usize> = BTreeMap::new();
        for neighbor in neighbors {
            *votes.entry(neighbor.label.as_str()).or_insert(0) += 1;
        }

        // BTreeMap iterates labels in order, so a strictly-greater fold
        // resolves ties toward the lowest label
        let mut best_label = "";
        let mut best_count = 0;
        for (label, count) in votes {
            if count > best_count {
                best_label = label;
                best_count = count;
            }
        }

        Ok(best_label.to_string())
    }
}
