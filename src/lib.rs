// ============================================================================
// CORE TYPES & UTILITIES
// ============================================================================
pub mod core;

// ============================================================================
// VECTORS, SIMILARITY & NORMALIZATION
// ============================================================================
pub mod vector;

// ============================================================================
// SELF-ENTROPY ENGINE & RAINBOW SCHEDULER
// ============================================================================
pub mod entropy;
pub mod rainbow;

// ============================================================================
// RETRIEVAL & CLASSIFICATION
// ============================================================================
pub mod search;

// ============================================================================
// STORAGE & DATA SOURCES
// ============================================================================
pub mod dataset;
pub mod storage;

// Re-export commonly used types
pub use crate::core::{ErrorCode, RainbowConfig, RainbowError, Result};
pub use crate::dataset::{DataSource, LabeledDataset, MemorySource};
pub use crate::entropy::{self_entropy, self_entropy_collection, self_entropy_scores};
pub use crate::rainbow::{
    rainbow, rainbow_with, BlockProcessor, PooledBlockProcessor, SequentialBlockProcessor,
};
pub use crate::search::{EntropyClassifier, DEFAULT_NEIGHBORS};
pub use crate::storage::{
    decode_collection, encode_collection, load_collection, save_collection,
};
pub use crate::vector::{
    dot, dot_portable, softmax, Partition, Vector, VectorCollection, SOFTMAX_SCALE,
};
