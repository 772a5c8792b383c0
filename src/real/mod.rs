//! Decimal real literal conversion.
//!
//! Literal text is normalised by [`DecimalFloatingPointString`], converted
//! exactly with arbitrary-precision integers, and rounded once
//! (round-to-nearest, ties-to-even) into an IEEE-754 bit pattern.
//!
//! [`try_parse_double`] and [`try_parse_float`] trust their input to be a
//! lexically valid literal. [`parse_double`] and [`parse_float`] validate the
//! text first and report malformed input and overflow as errors.

mod assemble;
mod convert;
mod decimal_string;
mod format;
mod syntax;

pub use decimal_string::{DecimalFloatingPointString, RealTokenKind, Span, tokenize_real};
pub use format::FloatingPointType;
pub use syntax::{diagnostic_message, is_valid_real_literal, validate_real_literal};

use chumsky::error::Simple;
use thiserror::Error;

/// Outcome of converting a decimal literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RealParseStatus {
    /// The value was rounded into range.
    Ok,
    /// The literal contained no significant digits; the value is zero.
    NoDigits,
    /// The magnitude is below the smallest denormal; the value is zero.
    Underflow,
    /// The magnitude exceeds the largest finite value; the value is infinity.
    Overflow,
}

/// A converted value together with the conversion status.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParsedReal<T> {
    /// Converted value; `+inf` on overflow and `+0.0` on underflow.
    pub value: T,
    /// How the conversion ended.
    pub status: RealParseStatus,
}

impl<T> ParsedReal<T> {
    /// `false` only when the literal overflowed the target format.
    #[must_use]
    pub fn succeeded(&self) -> bool {
        self.status != RealParseStatus::Overflow
    }
}

/// Raw result of a conversion into a [`FloatingPointType`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ConvertedBits {
    pub(crate) bits: u64,
    pub(crate) status: RealParseStatus,
}

impl ConvertedBits {
    const fn ok(bits: u64) -> Self {
        Self {
            bits,
            status: RealParseStatus::Ok,
        }
    }

    const fn no_digits(target: FloatingPointType) -> Self {
        Self {
            bits: target.zero_bits(),
            status: RealParseStatus::NoDigits,
        }
    }

    const fn underflow(target: FloatingPointType) -> Self {
        Self {
            bits: target.zero_bits(),
            status: RealParseStatus::Underflow,
        }
    }

    const fn overflow(target: FloatingPointType) -> Self {
        Self {
            bits: target.infinity_bits(),
            status: RealParseStatus::Overflow,
        }
    }
}

/// Error returned by the validating parse functions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RealLiteralError {
    /// The text is not a decimal real literal.
    #[error("malformed real literal: {}", render_errors(.0))]
    Syntax(Vec<Simple<char>>),
    /// The literal is too large for the target format.
    #[error("real literal '{literal}' is outside the range of {target}")]
    Overflow {
        /// The offending literal text.
        literal: String,
        /// Name of the target format.
        target: &'static str,
    },
}

fn render_errors(errors: &[Simple<char>]) -> String {
    errors
        .iter()
        .map(diagnostic_message)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Convert a pre-validated literal into the bits of `target`.
#[must_use]
pub fn convert_to_bits(text: &str, target: FloatingPointType) -> (u64, RealParseStatus) {
    let decimal = DecimalFloatingPointString::from_source(text);
    let converted = convert::convert_decimal_to_bits(&decimal, target);
    (converted.bits, converted.status)
}

/// Parse a pre-validated decimal literal as an `f64`.
///
/// The text must match `[0-9]*('.'[0-9]*)?([eE][+-]?[0-9]+)?` with at least
/// one digit; this is not checked. Overflow yields `+inf` and an unsuccessful
/// result; underflow yields `+0.0` and still counts as success.
#[must_use]
pub fn try_parse_double(text: &str) -> ParsedReal<f64> {
    let (bits, status) = convert_to_bits(text, FloatingPointType::DOUBLE);
    ParsedReal {
        value: f64::from_bits(bits),
        status,
    }
}

/// Parse a pre-validated decimal literal as an `f32`.
///
/// Same contract as [`try_parse_double`] at single precision.
#[must_use]
pub fn try_parse_float(text: &str) -> ParsedReal<f32> {
    let (bits, status) = convert_to_bits(text, FloatingPointType::SINGLE);
    ParsedReal {
        value: u32::try_from(bits).map_or(f32::INFINITY, f32::from_bits),
        status,
    }
}

/// Validate and parse a decimal literal as an `f64`.
///
/// # Errors
/// Returns [`RealLiteralError::Syntax`] when `text` is not a decimal real
/// literal and [`RealLiteralError::Overflow`] when it exceeds `f64::MAX`
/// after rounding.
pub fn parse_double(text: &str) -> Result<f64, RealLiteralError> {
    validate_real_literal(text).map_err(RealLiteralError::Syntax)?;
    let parsed = try_parse_double(text);
    if parsed.succeeded() {
        Ok(parsed.value)
    } else {
        Err(RealLiteralError::Overflow {
            literal: text.to_string(),
            target: "double",
        })
    }
}

/// Validate and parse a decimal literal as an `f32`.
///
/// # Errors
/// Returns [`RealLiteralError::Syntax`] when `text` is not a decimal real
/// literal and [`RealLiteralError::Overflow`] when it exceeds `f32::MAX`
/// after rounding.
pub fn parse_float(text: &str) -> Result<f32, RealLiteralError> {
    validate_real_literal(text).map_err(RealLiteralError::Syntax)?;
    let parsed = try_parse_float(text);
    if parsed.succeeded() {
        Ok(parsed.value)
    } else {
        Err(RealLiteralError::Overflow {
            literal: text.to_string(),
            target: "float",
        })
    }
}
