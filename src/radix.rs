//! Digit-string radix conversion and fixed-width padding
//!
//! All conversions operate on the textual form of a 32-bit signed integer.
//! Formatting a negative value in binary/octal/hex yields the unsigned
//! two's-complement digit form (standard behavior for signed radix
//! formatting); parsing rejects anything that does not fit 32 bits.

use crate::error::{CodecError, Result};

/// Left-pad `digits` with `'0'` until it is `width` characters long
///
/// Input already at or beyond `width` is returned unchanged; nothing is ever
/// truncated.
pub fn fix_bit(digits: &str, width: usize) -> String {
    format!("{:0>width$}", digits)
}

/// Format an `i32` as a binary digit string
pub fn dec_to_bin(value: i32) -> String {
    format!("{:b}", value)
}

/// Format an `i32` as an octal digit string
pub fn dec_to_oct(value: i32) -> String {
    format!("{:o}", value)
}

/// Format an `i32` as a lowercase hex digit string
pub fn dec_to_hex(value: i32) -> String {
    format!("{:x}", value)
}

/// Parse a binary digit string into its decimal form
pub fn bin_to_dec(digits: &str) -> Result<String> {
    parse_radix(digits, 2)
}

/// Parse an octal digit string into its decimal form
pub fn oct_to_dec(digits: &str) -> Result<String> {
    parse_radix(digits, 8)
}

/// Parse a hex digit string into its decimal form
pub fn hex_to_dec(digits: &str) -> Result<String> {
    parse_radix(digits, 16)
}

/// Reformat a hex digit string as binary
///
/// Composition of [`hex_to_dec`] and [`dec_to_bin`], not an independent
/// parser.
pub fn hex_to_bin(digits: &str) -> Result<String> {
    let dec = hex_to_dec(digits)?;
    let value = dec
        .parse::<i32>()
        .map_err(|e| CodecError::malformed(format!("'{}': {}", dec, e)))?;
    Ok(dec_to_bin(value))
}

fn parse_radix(digits: &str, radix: u32) -> Result<String> {
    i32::from_str_radix(digits, radix)
        .map(|v| v.to_string())
        .map_err(|e| CodecError::malformed(format!("'{}' as base-{}: {}", digits, radix, e)))
}
