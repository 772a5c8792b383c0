//! Grammar checks for decimal real literals.
//!
//! The conversion functions assume their input is well formed. The checks
//! here run over the same token stream and report every violation with its
//! byte span, using the `chumsky` error type shared with the rest of the
//! diagnostics.

use chumsky::error::{Simple, SimpleReason};

use super::{RealTokenKind, Span, tokenize_real};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    Start,
    Integer,
    Point,
    Fraction,
    Exponent,
}

/// Check `text` against `[0-9]*('.'[0-9]*)?([eE][+-]?[0-9]+)?`.
///
/// At least one mantissa digit is required; a sign is never accepted.
///
/// # Errors
/// Returns one error per offending region of `text`.
pub fn validate_real_literal(text: &str) -> Result<(), Vec<Simple<char>>> {
    let mut errors = Vec::new();
    let mut stage = Stage::Start;
    let mut has_digits = false;

    for (kind, span) in tokenize_real(text) {
        let next = match (stage, kind) {
            (_, RealTokenKind::Error) => {
                errors.push(unexpected_text(text, span));
                continue;
            }
            (Stage::Start, RealTokenKind::Digits) => Stage::Integer,
            (Stage::Point, RealTokenKind::Digits) => Stage::Fraction,
            (Stage::Start | Stage::Integer, RealTokenKind::Dot) => Stage::Point,
            (Stage::Point | Stage::Fraction, RealTokenKind::Dot) => {
                errors.push(Simple::custom(span, "multiple decimal points"));
                continue;
            }
            (Stage::Start | Stage::Integer | Stage::Point | Stage::Fraction, RealTokenKind::Exponent) => {
                Stage::Exponent
            }
            (Stage::Exponent, _) => {
                errors.push(Simple::custom(span, "unexpected text after exponent"));
                continue;
            }
            (Stage::Integer | Stage::Fraction, RealTokenKind::Digits) => {
                errors.push(Simple::custom(span, "unexpected digits"));
                continue;
            }
        };
        if kind == RealTokenKind::Digits {
            has_digits = true;
        }
        stage = next;
    }

    if !has_digits {
        errors.push(Simple::custom(0..text.len(), "real literal has no mantissa digits"));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Whether `text` is a well-formed decimal real literal.
#[must_use]
pub fn is_valid_real_literal(text: &str) -> bool {
    validate_real_literal(text).is_ok()
}

/// Human-readable text of a literal diagnostic.
///
/// `Simple`'s own `Display` ignores custom reasons, so those are rendered
/// from the reason directly.
#[must_use]
pub fn diagnostic_message(error: &Simple<char>) -> String {
    match error.reason() {
        SimpleReason::Custom(msg) => msg.clone(),
        SimpleReason::Unexpected | SimpleReason::Unclosed { .. } => error.to_string(),
    }
}

fn unexpected_text(text: &str, span: Span) -> Simple<char> {
    let fragment = text.get(span.clone()).unwrap_or_default();
    if fragment.starts_with(['e', 'E']) {
        return Simple::custom(span, "exponent is missing digits");
    }
    match fragment.chars().next() {
        Some(ch) => Simple::custom(span, format!("unexpected character '{ch}'")),
        None => Simple::custom(span, "unexpected end of literal"),
    }
}
