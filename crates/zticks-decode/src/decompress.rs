//! Gzip decompression for day files.

use flate2::read::GzDecoder;
use std::io::Read;
use thiserror::Error;

/// Initial output capacity as a multiple of the compressed size.
///
/// Day files do not record their uncompressed size. The buffer still grows
/// past this if needed.
pub const SIZE_FACTOR: usize = 16;

/// Gzip magic bytes.
const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Errors that can occur during decompression.
#[derive(Error, Debug)]
pub enum DecompressError {
    /// Empty input data.
    #[error("Empty input data")]
    EmptyInput,

    /// Input does not start with a gzip header.
    #[error("Invalid gzip header")]
    InvalidHeader,

    /// Gzip stream is corrupt or does not end cleanly.
    #[error("Gzip decompression failed: {0}")]
    GzipError(String),
}

/// Decompresses a gzip-wrapped day file.
///
/// Only a stream that ends cleanly (complete deflate data and matching
/// trailer) is accepted; otherwise the partial output is dropped.
///
/// # Errors
///
/// Returns an error if the input is empty, not gzip, or corrupt.
pub fn decompress_zticks(compressed: &[u8]) -> Result<Vec<u8>, DecompressError> {
    if compressed.is_empty() {
        return Err(DecompressError::EmptyInput);
    }
    if !compressed.starts_with(&GZIP_MAGIC) {
        return Err(DecompressError::InvalidHeader);
    }

    let mut decompressed = Vec::with_capacity(compressed.len().saturating_mul(SIZE_FACTOR));
    GzDecoder::new(compressed)
        .read_to_end(&mut decompressed)
        .map_err(|e| DecompressError::GzipError(e.to_string()))?;

    Ok(decompressed)
}
