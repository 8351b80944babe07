use std::fs::File;
use std::io::Write;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::errors::{ErrorCode, RainbowError, Result};
use crate::vector::types::{Vector, VectorCollection};

const FORMAT_VERSION: u32 = 1;

/// Header describing an encoded collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectionMetadata {
    pub version: u32,
    pub dimension: usize,
    pub num_vectors: usize,
    /// FNV-1a 64 hash of the row payload, for corruption detection
    pub checksum: u64,
}

fn persistence_err(code: ErrorCode, message: impl Into<String>) -> RainbowError {
    RainbowError::PersistenceFailure {
        code,
        message: message.into(),
    }
}

/// FNV-1a 64-bit rolling hash.
fn fnv1a(data: &[u8]) -> u64 {
    let mut hash: u64 = 0xcbf29ce484222325;
    for &byte in data {
        hash ^= byte as u64;
        hash = hash.wrapping_mul(0x100000001b3);
    }
    hash
}

/// Encode a collection as a length-prefixed metadata header plus row payload.
///
/// Layout: `u32` little-endian metadata length, JSON metadata, JSON rows.
pub fn encode_collection(collection: &VectorCollection) -> Result<Vec<u8>> {
    let payload = serde_json::to_vec(collection.rows())
        .map_err(|e| persistence_err(ErrorCode::EncodeFailed, format!("Row encode error: {}", e)))?;

    let metadata = CollectionMetadata {
        version: FORMAT_VERSION,
        dimension: collection.dimension(),
        num_vectors: collection.len(),
        checksum: fnv1a(&payload),
    };
    let metadata_json = serde_json::to_vec(&metadata)
        .map_err(|e| persistence_err(ErrorCode::EncodeFailed, format!("Header encode error: {}", e)))?;

    let mut out = Vec::with_capacity(4 + metadata_json.len() + payload.len());
    out.extend_from_slice(&(metadata_json.len() as u32).to_le_bytes());
    out.extend_from_slice(&metadata_json);
    out.extend_from_slice(&payload);
    Ok(out)
}

/// Decode a collection, verifying format version, checksum, and row dimensions.
pub fn decode_collection(data: &[u8]) -> Result<VectorCollection> {
    if data.len() < 4 {
        return Err(persistence_err(ErrorCode::DecodeFailed, "Truncated header"));
    }
    let meta_len = u32::from_le_bytes([data[0], data[1], data[2], data[3]]) as usize;
    if data.len() < 4 + meta_len {
        return Err(persistence_err(ErrorCode::DecodeFailed, "Truncated metadata"));
    }

    let metadata: CollectionMetadata = serde_json::from_slice(&data[4..4 + meta_len])
        .map_err(|e| persistence_err(ErrorCode::DecodeFailed, format!("Header decode error: {}", e)))?;
    if metadata.version != FORMAT_VERSION {
        return Err(persistence_err(
            ErrorCode::UnsupportedFormat,
            format!("Unsupported format version {}", metadata.version),
        ));
    }

    let payload = &data[4 + meta_len..];
    let checksum = fnv1a(payload);
    if checksum != metadata.checksum {
        tracing::error!(
            expected = metadata.checksum,
            got = checksum,
            "collection payload corrupted"
        );
        return Err(persistence_err(ErrorCode::ChecksumMismatch, "Payload checksum mismatch"));
    }

    let rows: Vec<Vector> = serde_json::from_slice(payload)
        .map_err(|e| persistence_err(ErrorCode::DecodeFailed, format!("Row decode error: {}", e)))?;
    if rows.len() != metadata.num_vectors {
        return Err(persistence_err(
            ErrorCode::DecodeFailed,
            format!("Expected {} rows, decoded {}", metadata.num_vectors, rows.len()),
        ));
    }

    VectorCollection::from_rows(metadata.dimension, rows)
}

/// Persist an encoded collection to `path`.
pub fn save_collection(path: &Path, collection: &VectorCollection) -> Result<()> {
    let encoded = encode_collection(collection)?;

    let mut file = File::create(path)
        .map_err(|e| persistence_err(ErrorCode::StorageIOError, format!("File create error: {}", e)))?;
    file.write_all(&encoded)
        .map_err(|e| persistence_err(ErrorCode::StorageIOError, format!("Write error: {}", e)))?;
    file.sync_all()
        .map_err(|e| persistence_err(ErrorCode::StorageIOError, format!("Sync error: {}", e)))?;

    tracing::debug!(path = %path.display(), rows = collection.len(), "collection saved");
    Ok(())
}

/// Load a collection previously written by [`save_collection`].
pub fn load_collection(path: &Path) -> Result<VectorCollection> {
    let data = std::fs::read(path)
        .map_err(|e| persistence_err(ErrorCode::StorageIOError, format!("Read error: {}", e)))?;
    decode_collection(&data)
}
