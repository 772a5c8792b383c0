//! Library crate for constlit.
//!
//! Exposes correctly rounded parsing of decimal real literals, the
//! compile-time constant model, and source-hash computation over constants.

#![forbid(unsafe_code)]

pub mod constant;
pub mod real;
pub mod source_hash;

pub use constant::{ConstantValue, ConstantValueTypeDiscriminator, PrimitiveValue, Rope};
pub use real::{
    DecimalFloatingPointString, FloatingPointType, ParsedReal, RealLiteralError, RealParseStatus,
    parse_double, parse_float, try_parse_double, try_parse_float,
};
pub use source_hash::{SourceHashAlgorithm, compute_source_hash, compute_source_hash_constants};
