pub mod classifier;

pub use classifier::{EntropyClassifier, DEFAULT_NEIGHBORS};
