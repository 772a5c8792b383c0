//! Compile-time constant values.
//!
//! [`ConstantValue`] is a cheap-to-clone handle over an immutable payload
//! tagged by [`ConstantValueTypeDiscriminator`]. Common values (null, bad,
//! `true`/`false`, and zero/one of every numeric kind) are process-wide
//! singletons, so creating them never allocates and they compare equal by
//! identity as well as by value.
//!
//! `Single` constants are carried at double precision, since folding always
//! happens in `f64`, and narrowed on read. NaN is stored as one canonical bit
//! pattern so equality and hashing are deterministic.

mod access;
mod create;
mod discriminator;
mod display;
mod eq;
mod primitive;
mod rope;
mod serialize;

pub use discriminator::ConstantValueTypeDiscriminator;
pub use primitive::PrimitiveValue;
pub use rope::{Chunks, Rope};
pub use rust_decimal::Decimal;

use std::sync::{Arc, OnceLock};

/// Canonical NaN: sign set, quiet bit set, no payload.
pub const CANONICAL_NAN_BITS: u64 = 0xFFF8_0000_0000_0000;

/// [`CANONICAL_NAN_BITS`] narrowed to single precision.
pub const CANONICAL_SINGLE_NAN_BITS: u32 = 0xFFC0_0000;

/// An immutable compile-time constant.
#[derive(Clone)]
pub struct ConstantValue(Arc<Payload>);

pub(crate) enum Payload {
    Null,
    Unset,
    Bad,
    Boolean(bool),
    SByte(i8),
    Byte(u8),
    Int16(i16),
    UInt16(u16),
    Char(u16),
    Int32(i32),
    UInt32(u32),
    NInt(i32),
    NUInt(u32),
    Int64(i64),
    UInt64(u64),
    Single(f64),
    Double(f64),
    Decimal(Decimal),
    DateTime(i64),
    String(ConstantString),
}

impl Payload {
    const fn discriminator(&self) -> ConstantValueTypeDiscriminator {
        use ConstantValueTypeDiscriminator as D;
        match self {
            Self::Null | Self::Unset => D::Null,
            Self::Bad => D::Bad,
            Self::Boolean(_) => D::Boolean,
            Self::SByte(_) => D::SByte,
            Self::Byte(_) => D::Byte,
            Self::Int16(_) => D::Int16,
            Self::UInt16(_) => D::UInt16,
            Self::Char(_) => D::Char,
            Self::Int32(_) => D::Int32,
            Self::UInt32(_) => D::UInt32,
            Self::NInt(_) => D::NInt,
            Self::NUInt(_) => D::NUInt,
            Self::Int64(_) => D::Int64,
            Self::UInt64(_) => D::UInt64,
            Self::Single(_) => D::Single,
            Self::Double(_) => D::Double,
            Self::Decimal(_) => D::Decimal,
            Self::DateTime(_) => D::DateTime,
            Self::String(_) => D::String,
        }
    }
}

/// String payload: a rope plus its lazily flattened text.
pub(crate) struct ConstantString {
    rope: Rope,
    flat: OnceLock<Arc<str>>,
}

impl ConstantString {
    fn from_rope(rope: Rope) -> Self {
        Self {
            rope,
            flat: OnceLock::new(),
        }
    }

    fn from_flat(text: Arc<str>) -> Self {
        Self {
            rope: Rope::from(Arc::clone(&text)),
            flat: OnceLock::from(text),
        }
    }

    pub(crate) const fn rope(&self) -> &Rope {
        &self.rope
    }

    /// Flattened text, computed on first use.
    pub(crate) fn flat(&self) -> &Arc<str> {
        self.flat
            .get_or_init(|| Arc::from(self.rope.to_flat_string()))
    }
}

impl ConstantValue {
    fn new(payload: Payload) -> Self {
        Self(Arc::new(payload))
    }

    pub(crate) fn payload(&self) -> &Payload {
        &self.0
    }

    /// Kind of the stored value.
    #[must_use]
    pub fn discriminator(&self) -> ConstantValueTypeDiscriminator {
        self.0.discriminator()
    }

    /// Whether both handles refer to the same instance.
    ///
    /// Singletons (null, bad, unset, booleans, zero/one) are shared, so two
    /// independently created zeros of one kind are the same instance.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

/// The four 32-bit words of a decimal: low, middle and high mantissa words,
/// then the flags word carrying the scale (bits 16..24) and sign (bit 31).
#[must_use]
pub fn decimal_bits(value: &Decimal) -> [u32; 4] {
    let mantissa = value.mantissa().unsigned_abs();
    let word = |shift: u32| u32::try_from((mantissa >> shift) & 0xFFFF_FFFF).unwrap_or_default();
    let sign = if value.is_sign_negative() { 1_u32 << 31 } else { 0 };
    [word(0), word(32), word(64), sign | (value.scale() << 16)]
}

#[cfg(test)]
mod tests;
