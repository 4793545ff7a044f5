//! Day file encoding.
//!
//! Produces files in the same layout the cache uses, which is handy for
//! building fixtures and trimmed-down caches.

use byteorder::{ByteOrder, LittleEndian};
use flate2::Compression;
use flate2::write::GzEncoder;
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use zticks_types::RawTick;

/// Serializes ticks into uncompressed 24-byte little-endian records.
#[must_use]
pub fn encode_ticks(ticks: &[RawTick]) -> Vec<u8> {
    let mut data = vec![0u8; ticks.len() * RawTick::SIZE];
    for (chunk, tick) in data.chunks_exact_mut(RawTick::SIZE).zip(ticks) {
        LittleEndian::write_i64(&mut chunk[0..8], tick.millis);
        LittleEndian::write_u64(&mut chunk[8..16], u64::from(tick.bid));
        LittleEndian::write_u64(&mut chunk[16..24], u64::from(tick.ask));
    }
    data
}

/// Gzip-compresses encoded record data.
///
/// # Errors
///
/// Returns an error if compression fails.
pub fn compress_zticks(data: &[u8]) -> io::Result<Vec<u8>> {
    let mut encoder = GzEncoder::new(Vec::with_capacity(data.len() / 4), Compression::default());
    encoder.write_all(data)?;
    encoder.finish()
}

/// Writes ticks to a day file, creating parent directories as needed.
///
/// # Errors
///
/// Returns an error if the directories or the file cannot be written.
pub fn write_day_file(path: &Path, ticks: &[RawTick]) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, compress_zticks(&encode_ticks(ticks))?)
}
