//! Hexadecimal text transforms
//!
//! The encode direction turns raw bytes into uppercase hex text. The decode
//! direction is deliberately NOT its mirror image: `hex_to_string` rebuilds
//! the bytes from hex pairs and then interprets them as UTF-8 text, so the
//! two functions have different result types. Legacy callers depend on that
//! shape; see DESIGN.md before changing it.

use crate::error::{CodecError, Result};

/// Fixed uppercase alphabet used by the decode lookup
const HEX_ALPHABET: &str = "0123456789ABCDEF";

/// Convert a byte slice to an uppercase hex string
///
/// Each byte becomes exactly two characters (`0x0A` → `"0A"`), concatenated
/// in sequence order. Empty input gives an empty string.
///
/// # Example
///
/// ```rust
/// use data_codec::hex::bytes_to_hex;
///
/// assert_eq!(bytes_to_hex(&[0x00, 0xFF, 0x1A]), "00FF1A");
/// ```
pub fn bytes_to_hex(data: &[u8]) -> String {
    ::hex::encode_upper(data)
}

/// Decode an uppercase hex string into the text its bytes spell in UTF-8
///
/// Each pair of characters is looked up in the fixed alphabet
/// `0123456789ABCDEF`. The lookup is case-sensitive: lowercase digits are
/// outside the alphabet and fail with [`CodecError::MalformedInput`], as does
/// an odd-length input. The reconstructed bytes are then decoded as UTF-8
/// with the standard replacement policy for malformed sequences.
///
/// # Example
///
/// ```rust
/// use data_codec::hex::hex_to_string;
///
/// assert_eq!(hex_to_string("414243").unwrap(), "ABC");
/// ```
pub fn hex_to_string(hex: &str) -> Result<String> {
    if hex.len() % 2 != 0 {
        return Err(CodecError::malformed(format!(
            "hex string length {} is odd",
            hex.len()
        )));
    }

    let mut bytes = Vec::with_capacity(hex.len() / 2);
    let mut chars = hex.chars();
    while let (Some(high), Some(low)) = (chars.next(), chars.next()) {
        let high = hex_digit(high)?;
        let low = hex_digit(low)?;
        bytes.push((high << 4) | low);
    }

    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

fn hex_digit(c: char) -> Result<u8> {
    HEX_ALPHABET
        .find(c)
        .map(|i| i as u8)
        .ok_or_else(|| CodecError::malformed(format!("'{}' is not an uppercase hex digit", c)))
}
