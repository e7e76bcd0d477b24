//! Data codec utility library
//!
//! Stateless conversion helpers shared by protocol and tooling code:
//!
//! - **Bytes**: fixed-width i32/i64 ⇄ big-endian byte conversion, slicing,
//!   and high/low byte reinterpretation ("warp")
//! - **Text**: string ⇄ bytes under a named character encoding
//! - **Hex**: byte ⇄ uppercase hex text transforms
//! - **Radix**: binary/octal/decimal/hex digit-string conversion and
//!   fixed-width zero padding
//!
//! Every function is a pure transform of its inputs: no shared state, no
//! I/O, and errors surface synchronously to the caller as [`CodecError`].

pub mod bytes;
pub mod error;
pub mod hex;
pub mod radix;
pub mod text;

// Re-export core types and conversions
pub use bytes::{
    bytes_to_int, bytes_to_long, int_to_bytes, long_to_bytes, sub_bytes, warp_high_low_i32,
    warp_high_low_i64, warp_low_high_i32, warp_low_high_i64,
};
pub use error::{CodecError, Result};
pub use hex::{bytes_to_hex, hex_to_string};
pub use radix::{
    bin_to_dec, dec_to_bin, dec_to_hex, dec_to_oct, fix_bit, hex_to_bin, hex_to_dec, oct_to_dec,
};
pub use text::{bytes_to_string, string_to_bytes, CHARSET_UTF8};
