use std::fmt;

/// Error codes for programmatic error handling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// 1000-1099: Dimension/Vector errors
    DimensionMismatch = 1001,

    /// 1100-1199: Normalization/Batch errors
    EmptyInput = 1101,

    /// 1300-1399: Persistence errors
    StorageIOError = 1301,
    EncodeFailed = 1302,
    DecodeFailed = 1303,
    ChecksumMismatch = 1304,
    UnsupportedFormat = 1305,

    /// 1400-1499: Retrieval errors
    IndexExhausted = 1401,

    /// 1500-1599: Data source errors
    DataSourceFailure = 1501,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::DimensionMismatch => "DIMENSION_MISMATCH",
            ErrorCode::EmptyInput => "EMPTY_INPUT",
            ErrorCode::StorageIOError => "STORAGE_IO_ERROR",
            ErrorCode::EncodeFailed => "ENCODE_FAILED",
            ErrorCode::DecodeFailed => "DECODE_FAILED",
            ErrorCode::ChecksumMismatch => "CHECKSUM_MISMATCH",
            ErrorCode::UnsupportedFormat => "UNSUPPORTED_FORMAT",
            ErrorCode::IndexExhausted => "INDEX_EXHAUSTED",
            ErrorCode::DataSourceFailure => "DATA_SOURCE_FAILURE",
        }
    }
}

#[derive(Debug, Clone)]
pub enum RainbowError {
    /// Dimension mismatch between vectors, or between a vector and its collection
    DimensionMismatch { expected: usize, got: usize },
    /// Empty input where a non-empty batch or sequence is required
    EmptyInput(&'static str),
    /// External data source failed to load
    DataSourceFailure { message: String },
    /// Encoding/decoding a collection failed
    PersistenceFailure { code: ErrorCode, message: String },
    /// Retrieval found no neighbors: the query entropy sorts past the end of the index
    IndexExhausted,
}

impl RainbowError {
    pub fn code(&self) -> ErrorCode {
        match self {
            RainbowError::DimensionMismatch { .. } => ErrorCode::DimensionMismatch,
            RainbowError::EmptyInput(_) => ErrorCode::EmptyInput,
            RainbowError::DataSourceFailure { .. } => ErrorCode::DataSourceFailure,
            RainbowError::PersistenceFailure { code, .. } => *code,
            RainbowError::IndexExhausted => ErrorCode::IndexExhausted,
        }
    }
}

impl fmt::Display for RainbowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RainbowError::DimensionMismatch { expected, got } => {
                write!(f, "[{}] Vector dimension mismatch: expected {}, got {}",
                    self.code().as_str(), expected, got)
            }
            RainbowError::EmptyInput(context) => {
                write!(f, "[{}] Empty input: {}", self.code().as_str(), context)
            }
            RainbowError::DataSourceFailure { message } => {
                write!(f, "[{}] Data source failure: {}", self.code().as_str(), message)
            }
            RainbowError::PersistenceFailure { code, message } => {
                write!(f, "[{}] Persistence failure: {}", code.as_str(), message)
            }
            RainbowError::IndexExhausted => {
                write!(f, "[{}] No neighbors found: query entropy past end of index",
                    self.code().as_str())
            }
        }
    }
}

impl std::error::Error for RainbowError {}

pub type Result<T> = std::result::Result<T, RainbowError>;
