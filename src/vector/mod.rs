pub mod similarity;
pub mod similarity_simd;
pub mod softmax;
pub mod types;


pub use similarity::{dot, dot_column, dot_portable, dot_unchecked};
pub use softmax::{softmax, SOFTMAX_SCALE};
pub use types::{Partition, Vector, VectorCollection};
