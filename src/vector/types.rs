use serde::{Deserialize, Serialize};

use crate::core::errors::{RainbowError, Result};

/// Marks a row as reference ("training") or probe ("test") data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Partition {
    Train,
    Test,
}

/// One ranked item: a dense feature vector with its label and entropy score.
///
/// `entropy` is 0.0 until a self-entropy pass writes it; it is overwritten
/// on every pass, never accumulated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vector {
    pub values: Vec<f64>,
    pub entropy: f64,
    pub label: String,
    pub partition: Partition,
}

impl Vector {
    /// Create a new vector with an uncomputed entropy score.
    pub fn new(values: Vec<f64>, label: impl Into<String>, partition: Partition) -> Self {
        Vector {
            values,
            entropy: 0.0,
            label: label.into(),
            partition,
        }
    }

    /// All-zero vector of the given dimension; placeholder for a probe slot.
    pub fn zeroed(dimension: usize) -> Self {
        Vector {
            values: vec![0.0; dimension],
            entropy: 0.0,
            label: String::new(),
            partition: Partition::Test,
        }
    }

    /// Get the dimension of the vector.
    pub fn dim(&self) -> usize {
        self.values.len()
    }
}

/// An ordered, fixed-dimension collection of vectors.
///
/// The collection exclusively owns its rows. Every row has length exactly
/// `dimension`; [`VectorCollection::push`] rejects anything else. Windows
/// are plain mutable slices into the row storage, so a window never
/// resizes or reorders independently of its parent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VectorCollection {
    dimension: usize,
    rows: Vec<Vector>,
}

impl VectorCollection {
    /// Create an empty collection of the given dimension.
    pub fn new(dimension: usize) -> Self {
        VectorCollection {
            dimension,
            rows: Vec::new(),
        }
    }

    /// Build a collection from existing rows, validating every dimension.
    pub fn from_rows(dimension: usize, rows: Vec<Vector>) -> Result<Self> {
        for row in &rows {
            if row.dim() != dimension {
                return Err(RainbowError::DimensionMismatch {
                    expected: dimension,
                    got: row.dim(),
                });
            }
        }
        Ok(VectorCollection { dimension, rows })
    }

    /// Append a vector, rejecting wrong-dimension rows before storing.
    pub fn push(&mut self, vector: Vector) -> Result<()> {
        if vector.dim() != self.dimension {
            return Err(RainbowError::DimensionMismatch {
                expected: self.dimension,
                got: vector.dim(),
            });
        }
        self.rows.push(vector);
        Ok(())
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[Vector] {
        &self.rows
    }

    pub fn rows_mut(&mut self) -> &mut [Vector] {
        &mut self.rows
    }

    /// Non-owning contiguous view of rows `[begin, end)`.
    ///
    /// Mutations through the window are visible through the parent; the
    /// window aliases the same storage.
    pub fn window(&mut self, begin: usize, end: usize) -> &mut [Vector] {
        &mut self.rows[begin..end]
    }

    /// Sort rows ascending by entropy score.
    pub fn sort_by_entropy(&mut self) {
        self.rows.sort_by(|a, b| {
            a.entropy.partial_cmp(&b.entropy).unwrap_or(std::cmp::Ordering::Equal)
        });
    }
}
