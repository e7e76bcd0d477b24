//! Cross-module codec integration tests
//!
//! Exercises the conversion families together the way protocol code uses
//! them: encode a value, carry it as hex or text, and recover it on the
//! other side.

use data_codec::{
    bytes_to_hex, bytes_to_int, bytes_to_long, bytes_to_string, dec_to_hex, fix_bit, hex_to_dec,
    hex_to_string, int_to_bytes, long_to_bytes, string_to_bytes, sub_bytes, warp_high_low_i32,
    warp_low_high_i32, CodecError, CHARSET_UTF8,
};

#[test]
fn int_survives_hex_transport() {
    let value = 0x0012_34AB;
    let frame = int_to_bytes(value);
    let hex = bytes_to_hex(&frame);
    assert_eq!(hex, "001234AB");

    // receiving side: hex text back to a frame, then to the value
    let mut recovered = Vec::new();
    for pair in hex.as_bytes().chunks(2) {
        let digits = std::str::from_utf8(pair).unwrap();
        recovered.push(u8::from_str_radix(digits, 16).unwrap());
    }
    assert_eq!(bytes_to_int(&recovered).unwrap(), value);
}

#[test]
fn frame_field_extraction() {
    // an 8-byte payload carrying a long, sliced and re-decoded
    let payload = long_to_bytes(0x0102_0304_0506_0708);
    let head = sub_bytes(&payload, 0, 4).unwrap();
    let tail = sub_bytes(&payload, 4, 8).unwrap();

    assert_eq!(bytes_to_int(&head).unwrap(), 0x0102_0304);
    assert_eq!(bytes_to_int(&tail).unwrap(), 0x0506_0708);
    assert_eq!(bytes_to_long(&payload).unwrap(), 0x0102_0304_0506_0708);
}

#[test]
fn warp_pair_is_asymmetric() {
    // high-low reinterprets the byte order, low-high does not; both pinned
    assert_eq!(warp_high_low_i32(1), 16_777_216);
    assert_eq!(warp_low_high_i32(1), 1);
    assert_ne!(
        warp_high_low_i32(0x12345678),
        warp_low_high_i32(0x12345678)
    );
}

#[test]
fn text_crosses_encodings() {
    let message = "état: OK";
    let utf8 = string_to_bytes(message, CHARSET_UTF8).unwrap();
    let latin1 = string_to_bytes(message, "windows-1252").unwrap();

    assert_ne!(utf8, latin1);
    assert_eq!(bytes_to_string(&utf8, CHARSET_UTF8).unwrap(), message);
    assert_eq!(bytes_to_string(&latin1, "windows-1252").unwrap(), message);
}

#[test]
fn hex_decode_yields_text_not_bytes() {
    let hex = bytes_to_hex("OK".as_bytes());
    let decoded: String = hex_to_string(&hex).unwrap();
    assert_eq!(decoded, "OK");
}

#[test]
fn register_display_formatting() {
    // format a register value as a fixed-width hex field
    let raw = 255;
    let field = fix_bit(&dec_to_hex(raw), 4);
    assert_eq!(field, "00ff");
    assert_eq!(hex_to_dec(&field).unwrap(), "255");
}

#[test]
fn errors_surface_to_caller() {
    assert!(matches!(
        bytes_to_int(&[0x00]).unwrap_err(),
        CodecError::OutOfRange(_)
    ));
    assert!(matches!(
        hex_to_string("abcd").unwrap_err(),
        CodecError::MalformedInput(_)
    ));
    assert!(matches!(
        string_to_bytes("x", "EBCDIC-9000").unwrap_err(),
        CodecError::UnsupportedEncoding(_)
    ));
}
