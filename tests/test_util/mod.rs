//! Shared helpers for integration tests.

#![expect(
    dead_code,
    reason = "helpers are reused across multiple tests so some may be unused"
)]

use constlit::{ConstantValue, RealLiteralError, parse_double, parse_float};

/// Parse `text` as a double, panicking with the diagnostic on failure.
pub fn double_or_panic(text: &str) -> f64 {
    parse_double(text).unwrap_or_else(|e| panic!("{text}: {e}"))
}

/// Parse `text` as a float, panicking with the diagnostic on failure.
pub fn float_or_panic(text: &str) -> f32 {
    parse_float(text).unwrap_or_else(|e| panic!("{text}: {e}"))
}

/// Assert that `text` is rejected as malformed.
pub fn assert_syntax_error(text: &str) {
    match parse_double(text) {
        Err(RealLiteralError::Syntax(errors)) => assert!(!errors.is_empty(), "{text}"),
        other => panic!("{text}: expected a syntax error, got {other:?}"),
    }
}

/// Lower-case hex rendering of a digest.
pub fn hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}

/// The metadata blob encoding of `value`.
pub fn serialized(value: &ConstantValue) -> Vec<u8> {
    let mut out = Vec::new();
    value
        .serialize(&mut out)
        .unwrap_or_else(|e| panic!("writing to a Vec failed: {e}"));
    out
}
