//! Binary tick parsing from the day file record format.

use byteorder::{ByteOrder, LittleEndian};
use zticks_types::{RawTick, TickSeries};

/// Parses raw ticks from decompressed day file data.
///
/// Records are 24 bytes little-endian:
/// - `i64`: milliseconds since the Unix epoch (bytes 0-7)
/// - `i64`: bid in tick units, low 32 bits used (bytes 8-15)
/// - `i64`: ask in tick units, low 32 bits used (bytes 16-23)
///
/// A trailing partial record is ignored.
pub fn parse_ticks(data: &[u8]) -> impl ExactSizeIterator<Item = RawTick> + '_ {
    data.chunks_exact(RawTick::SIZE).map(parse_single_tick)
}

/// Parses a single tick from a 24-byte chunk.
#[inline]
fn parse_single_tick(data: &[u8]) -> RawTick {
    RawTick::new(
        LittleEndian::read_i64(&data[0..8]),
        LittleEndian::read_u64(&data[8..16]) as u32,
        LittleEndian::read_u64(&data[16..24]) as u32,
    )
}

/// Parses and zero-fills decompressed day file data into a series.
#[must_use]
pub fn decode_ticks(data: &[u8]) -> TickSeries {
    TickSeries::from_raw(parse_ticks(data))
}

/// Returns the number of complete records in the given data.
#[must_use]
pub const fn tick_count(data_len: usize) -> usize {
    data_len / RawTick::SIZE
}

/// Returns the number of bytes left over after the last complete record.
#[must_use]
pub const fn trailing_bytes(data_len: usize) -> usize {
    data_len % RawTick::SIZE
}
