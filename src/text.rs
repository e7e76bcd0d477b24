//! String / byte-sequence conversion under a named character encoding
//!
//! Encoding lookup is delegated to `encoding_rs`, which resolves WHATWG
//! labels ("UTF-8", "GBK", "windows-1252", ...). Malformed or unmappable
//! input follows the chosen encoding's standard replacement policy; no extra
//! validation layer is added on top.

use encoding_rs::Encoding;
use tracing::trace;

use crate::error::{CodecError, Result};

/// Canonical UTF-8 encoding label, for caller convenience
pub const CHARSET_UTF8: &str = "UTF-8";

/// Encode `text` into bytes under the named encoding
///
/// Fails with [`CodecError::UnsupportedEncoding`] when `encoding` is not a
/// recognized label. Characters the target encoding cannot represent follow
/// the encoder's standard substitution policy.
pub fn string_to_bytes(text: &str, encoding: &str) -> Result<Vec<u8>> {
    let codec = lookup(encoding)?;
    let (bytes, _, had_errors) = codec.encode(text);
    if had_errors {
        trace!(encoding = codec.name(), "unmappable characters substituted during encode");
    }
    Ok(bytes.into_owned())
}

/// Decode `data` into text under the named encoding
///
/// Fails with [`CodecError::UnsupportedEncoding`] when `encoding` is not a
/// recognized label. Byte sequences malformed for that encoding become
/// replacement characters per the decoder's standard policy.
pub fn bytes_to_string(data: &[u8], encoding: &str) -> Result<String> {
    let codec = lookup(encoding)?;
    let (text, _, had_errors) = codec.decode(data);
    if had_errors {
        trace!(encoding = codec.name(), "replacement characters substituted during decode");
    }
    Ok(text.into_owned())
}

fn lookup(label: &str) -> Result<&'static Encoding> {
    Encoding::for_label(label.as_bytes())
        .ok_or_else(|| CodecError::unsupported_encoding(label.to_string()))
}
