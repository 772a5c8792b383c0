//! Lexing and normalisation of decimal real literals.
//!
//! Literal text is split into digit runs, the decimal point and the exponent
//! suffix using `logos`. [`DecimalFloatingPointString::from_source`] folds
//! those tokens into a normalised mantissa and decimal exponent.

use logos::Logos;

/// Byte range of a token within the literal text.
pub type Span = std::ops::Range<usize>;

/// Largest decimal exponent magnitude tracked before saturating.
pub(crate) const MAX_DECIMAL_EXPONENT: i32 = 1 << 30;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
enum Token {
    #[regex(r"[0-9]+")]
    Digits,
    #[token(".")]
    Dot,
    #[regex(r"[eE][+-]?[0-9]+")]
    Exponent,
}

/// Token classes of a real literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RealTokenKind {
    /// A run of decimal digits.
    Digits,
    /// The decimal point.
    Dot,
    /// An exponent suffix including its marker and optional sign.
    Exponent,
    /// Text that is not part of the literal grammar.
    Error,
}

/// Split `src` into `(RealTokenKind, Span)` pairs.
///
/// Unrecognised input is reported as [`RealTokenKind::Error`] rather than
/// aborting, so callers can produce diagnostics for every bad region.
#[must_use]
pub fn tokenize_real(src: &str) -> Vec<(RealTokenKind, Span)> {
    let mut lexer = Token::lexer(src);
    let mut out = Vec::new();
    while let Some(result) = lexer.next() {
        let span = lexer.span();
        let kind = match result {
            Ok(Token::Digits) => RealTokenKind::Digits,
            Ok(Token::Dot) => RealTokenKind::Dot,
            Ok(Token::Exponent) => RealTokenKind::Exponent,
            Err(()) => RealTokenKind::Error,
        };
        out.push((kind, span));
    }
    out
}

/// A decimal value `0.mantissa * 10^exponent`.
///
/// The mantissa holds ASCII digits with no leading or trailing zero. An
/// empty mantissa means the literal was zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecimalFloatingPointString {
    mantissa: String,
    exponent: i32,
}

impl DecimalFloatingPointString {
    /// Normalise a lexically valid real literal.
    ///
    /// The input must already match
    /// `[0-9]*('.'[0-9]*)?([eE][+-]?[0-9]+)?`; text outside that grammar is
    /// skipped and yields an unspecified (but memory-safe) result.
    #[must_use]
    pub fn from_source(source: &str) -> Self {
        let mut mantissa = String::with_capacity(source.len());
        let mut exponent: i32 = 0;
        let mut deferred_zeros = 0_usize;
        let mut in_fraction = false;

        for (kind, span) in tokenize_real(source) {
            let text = source.get(span).unwrap_or_default();
            match kind {
                RealTokenKind::Digits => {
                    for digit in text.chars() {
                        if digit == '0' && mantissa.is_empty() {
                            // Leading zeros only move the point when they
                            // follow it.
                            if in_fraction {
                                exponent = exponent.saturating_sub(1);
                            }
                            continue;
                        }
                        if !in_fraction {
                            exponent = exponent.saturating_add(1);
                        }
                        if digit == '0' {
                            deferred_zeros += 1;
                        } else {
                            mantissa.extend(std::iter::repeat_n('0', deferred_zeros));
                            deferred_zeros = 0;
                            mantissa.push(digit);
                        }
                    }
                }
                RealTokenKind::Dot => in_fraction = true,
                RealTokenKind::Exponent => exponent = apply_exponent_suffix(exponent, text),
                RealTokenKind::Error => {
                    log::debug!("skipping unexpected real literal text {text:?}");
                }
            }
        }

        if mantissa.is_empty() {
            exponent = 0;
        }
        Self {
            mantissa,
            exponent: exponent.clamp(-MAX_DECIMAL_EXPONENT, MAX_DECIMAL_EXPONENT),
        }
    }

    /// Significant decimal digits.
    #[must_use]
    pub fn mantissa(&self) -> &str {
        &self.mantissa
    }

    /// Decimal exponent applied to `0.mantissa`.
    #[must_use]
    pub const fn exponent(&self) -> i32 {
        self.exponent
    }

    /// Whether the literal denotes zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.mantissa.is_empty()
    }
}

fn apply_exponent_suffix(exponent: i32, suffix: &str) -> i32 {
    let unsigned = suffix.trim_start_matches(['e', 'E']);
    let (negative, digits) = unsigned.strip_prefix('-').map_or_else(
        || (false, unsigned.strip_prefix('+').unwrap_or(unsigned)),
        |rest| (true, rest),
    );

    match digits.parse::<i32>() {
        Ok(magnitude) if magnitude <= MAX_DECIMAL_EXPONENT => {
            if negative {
                exponent.saturating_sub(magnitude)
            } else {
                exponent.saturating_add(magnitude)
            }
        }
        _ if negative => -MAX_DECIMAL_EXPONENT,
        _ => MAX_DECIMAL_EXPONENT,
    }
}
