//! Boxed primitive payloads.
//!
//! [`PrimitiveValue`] is what a constant looks like once it leaves the
//! constant model, e.g. when handed to an emitter or a reflection layer.

use std::sync::Arc;

use rust_decimal::Decimal;

use super::ConstantValueTypeDiscriminator;

/// A primitive value detached from any constant.
#[derive(Debug, Clone, PartialEq)]
pub enum PrimitiveValue {
    /// `bool`
    Boolean(bool),
    /// `sbyte`
    SByte(i8),
    /// `byte`
    Byte(u8),
    /// `short`
    Int16(i16),
    /// `ushort`
    UInt16(u16),
    /// `char` as a UTF-16 code unit.
    Char(u16),
    /// `int`
    Int32(i32),
    /// `uint`
    UInt32(u32),
    /// `long`
    Int64(i64),
    /// `ulong`
    UInt64(u64),
    /// `float`
    Single(f32),
    /// `double`
    Double(f64),
    /// `decimal`
    Decimal(Decimal),
    /// `DateTime` as its raw 64-bit encoding.
    DateTime(i64),
    /// `string`
    String(Arc<str>),
}

impl PrimitiveValue {
    /// The discriminator a constant created from this value would carry.
    #[must_use]
    pub const fn discriminator(&self) -> ConstantValueTypeDiscriminator {
        use ConstantValueTypeDiscriminator as D;
        match self {
            Self::Boolean(_) => D::Boolean,
            Self::SByte(_) => D::SByte,
            Self::Byte(_) => D::Byte,
            Self::Int16(_) => D::Int16,
            Self::UInt16(_) => D::UInt16,
            Self::Char(_) => D::Char,
            Self::Int32(_) => D::Int32,
            Self::UInt32(_) => D::UInt32,
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
