/// Data source seam: how labeled vectors enter the system.
///
/// Concrete image or measurement loaders live outside the crate; the
/// core only consumes this interface. A load failure is fatal to the
/// run that requested it.

use crate::core::errors::{RainbowError, Result};
use crate::vector::types::{Partition, Vector, VectorCollection};

/// Labeled vectors split into reference and probe partitions.
#[derive(Debug, Clone)]
pub struct LabeledDataset {
    pub training: VectorCollection,
    pub test: VectorCollection,
}

/// A source of labeled, fixed-dimension feature vectors.
pub trait DataSource {
    fn load(&self) -> Result<LabeledDataset>;
}

/// In-process data source over `(values, label)` tuples.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    dimension: usize,
    training: Vec<(Vec<f64>, String)>,
    test: Vec<(Vec<f64>, String)>,
}

impl MemorySource {
    pub fn new(dimension: usize) -> Self {
        MemorySource {
            dimension,
            training: Vec::new(),
            test: Vec::new(),
        }
    }

    pub fn push_training(&mut self, values: Vec<f64>, label: impl Into<String>) {
        self.training.push((values, label.into()));
    }

    pub fn push_test(&mut self, values: Vec<f64>, label: impl Into<String>) {
        self.test.push((values, label.into()));
    }

    fn build(
        &self,
        items: &[(Vec<f64>, String)],
        partition: Partition,
    ) -> Result<VectorCollection> {
        let mut collection = VectorCollection::new(self.dimension);
        for (values, label) in items {
            collection.push(Vector::new(values.clone(), label.clone(), partition))?;
        }
        Ok(collection)
    }
}

impl DataSource for MemorySource {
    fn load(&self) -> Result<LabeledDataset> {
        if self.training.is_empty() {
            return Err(RainbowError::DataSourceFailure {
                message: "source has no training items".to_string(),
            });
        }
        Ok(LabeledDataset {
            training: self.build(&self.training, Partition::Train)?,
            test: self.build(&self.test, Partition::Test)?,
        })
    }
}
