//! Fixed-width integer / byte-sequence conversions
//!
//! Big-endian is the canonical wire form throughout: `int_to_bytes` and
//! friends always emit the most significant byte first, and the decode
//! direction reads the same order back. The `warp_*` functions layer a
//! byte-reinterpretation step on top of that canonical form.

use crate::error::{CodecError, Result};

/// Encode an `i32` as its 4-byte big-endian representation
pub fn int_to_bytes(value: i32) -> [u8; 4] {
    value.to_be_bytes()
}

/// Decode the first 4 bytes of `data` as a big-endian `i32`
///
/// Bytes past the fixed width are ignored. Fails with
/// [`CodecError::OutOfRange`] when fewer than 4 bytes are supplied.
pub fn bytes_to_int(data: &[u8]) -> Result<i32> {
    let bytes: [u8; 4] = data
        .get(..4)
        .and_then(|s| s.try_into().ok())
        .ok_or_else(|| {
            CodecError::out_of_range(format!("need 4 bytes for i32, got {}", data.len()))
        })?;
    Ok(i32::from_be_bytes(bytes))
}

/// Encode an `i64` as its 8-byte big-endian representation
pub fn long_to_bytes(value: i64) -> [u8; 8] {
    value.to_be_bytes()
}

/// Decode the first 8 bytes of `data` as a big-endian `i64`
///
/// Bytes past the fixed width are ignored. Fails with
/// [`CodecError::OutOfRange`] when fewer than 8 bytes are supplied.
pub fn bytes_to_long(data: &[u8]) -> Result<i64> {
    let bytes: [u8; 8] = data
        .get(..8)
        .and_then(|s| s.try_into().ok())
        .ok_or_else(|| {
            CodecError::out_of_range(format!("need 8 bytes for i64, got {}", data.len()))
        })?;
    Ok(i64::from_be_bytes(bytes))
}

/// Copy the half-open range `[start, end)` out of `data`
///
/// The result is always an independent owned buffer of length exactly
/// `end - start`, never a view into `data`. Fails with
/// [`CodecError::OutOfRange`] when `end < start` or `end > data.len()`.
pub fn sub_bytes(data: &[u8], start: usize, end: usize) -> Result<Vec<u8>> {
    if end < start || end > data.len() {
        return Err(CodecError::out_of_range(format!(
            "range {}..{} invalid for {} bytes",
            start,
            end,
            data.len()
        )));
    }
    Ok(data[start..end].to_vec())
}

/// Reinterpret an `i32` by encoding it big-endian and decoding the same
/// bytes little-endian
///
/// For `0x00000001` the big-endian bytes are `[0x00, 0x00, 0x00, 0x01]`,
/// which read back little-endian gives `0x01000000`.
pub fn warp_high_low_i32(value: i32) -> i32 {
    i32::from_le_bytes(int_to_bytes(value))
}

/// Reinterpret an `i64` by encoding it big-endian and decoding the same
/// bytes little-endian
pub fn warp_high_low_i64(value: i64) -> i64 {
    i64::from_le_bytes(long_to_bytes(value))
}

/// Encode an `i32` big-endian and decode the same bytes big-endian
///
/// Encode and decode use the same byte order here, so the input comes back
/// unchanged. This is NOT the inverse of [`warp_high_low_i32`]; call sites
/// use the named pair to spell out framing direction, and the legacy
/// behavior is kept exactly. See DESIGN.md for the inconsistency note.
pub fn warp_low_high_i32(value: i32) -> i32 {
    i32::from_be_bytes(int_to_bytes(value))
}

/// Encode an `i64` big-endian and decode the same bytes big-endian
///
/// Same framing caveat as [`warp_low_high_i32`].
pub fn warp_low_high_i64(value: i64) -> i64 {
    i64::from_be_bytes(long_to_bytes(value))
}
