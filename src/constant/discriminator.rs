//! Kinds of compile-time constant.
//!
//! The discriminator is a closed set. Conversions to and from the stable
//! `u8` encoding are derived with `num_derive`, and the runtime type names
//! are looked up through a static `phf` map.

use num_derive::{FromPrimitive as FromPrimitiveDerive, ToPrimitive as ToPrimitiveDerive};
use num_traits::{FromPrimitive, ToPrimitive};
use phf::phf_map;

/// Tag identifying which primitive kind a constant holds.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, FromPrimitiveDerive, ToPrimitiveDerive,
)]
#[repr(u8)]
pub enum ConstantValueTypeDiscriminator {
    /// The null constant (also "nothing" and the unset marker).
    Null = 0,
    /// A constant that failed to evaluate.
    Bad,
    /// `sbyte`
    SByte,
    /// `byte`
    Byte,
    /// `short`
    Int16,
    /// `ushort`
    UInt16,
    /// `int`
    Int32,
    /// `uint`
    UInt32,
    /// `long`
    Int64,
    /// `ulong`
    UInt64,
    /// `nint`, carried as a 32-bit payload.
    NInt,
    /// `nuint`, carried as a 32-bit payload.
    NUInt,
    /// `char`, a UTF-16 code unit.
    Char,
    /// `bool`
    Boolean,
    /// `float`
    Single,
    /// `double`
    Double,
    /// `string`
    String,
    /// `decimal`
    Decimal,
    /// `DateTime`
    DateTime,
}

impl ConstantValueTypeDiscriminator {
    /// Alias of [`Self::Null`] used by languages that call it "nothing".
    pub const NOTHING: Self = Self::Null;

    /// Every discriminator, in encoding order.
    pub const ALL: [Self; 19] = [
        Self::Null,
        Self::Bad,
        Self::SByte,
        Self::Byte,
        Self::Int16,
        Self::UInt16,
        Self::Int32,
        Self::UInt32,
        Self::Int64,
        Self::UInt64,
        Self::NInt,
        Self::NUInt,
        Self::Char,
        Self::Boolean,
        Self::Single,
        Self::Double,
        Self::String,
        Self::Decimal,
        Self::DateTime,
    ];

    /// Decode a discriminator from its `u8` encoding.
    #[must_use]
    pub fn from_u8(value: u8) -> Option<Self> {
        <Self as FromPrimitive>::from_u8(value)
    }

    /// Encode the discriminator as `u8`.
    #[must_use]
    pub fn to_u8(self) -> u8 {
        ToPrimitive::to_u8(&self).unwrap_or_default()
    }

    /// Integer kinds, including the native-sized ones.
    #[must_use]
    pub const fn is_integral(self) -> bool {
        matches!(
            self,
            Self::SByte
                | Self::Byte
                | Self::Int16
                | Self::UInt16
                | Self::Int32
                | Self::UInt32
                | Self::Int64
                | Self::UInt64
                | Self::NInt
                | Self::NUInt
        )
    }

    /// Unsigned integer kinds. `Char` is not counted.
    #[must_use]
    pub const fn is_unsigned(self) -> bool {
        matches!(
            self,
            Self::Byte | Self::UInt16 | Self::UInt32 | Self::UInt64 | Self::NUInt
        )
    }

    /// `Single` or `Double`.
    #[must_use]
    pub const fn is_floating(self) -> bool {
        matches!(self, Self::Single | Self::Double)
    }

    /// Integral, floating or decimal.
    #[must_use]
    pub const fn is_numeric(self) -> bool {
        self.is_integral() || self.is_floating() || matches!(self, Self::Decimal)
    }

    /// Fully qualified runtime name of the primitive type, if any.
    #[must_use]
    pub const fn primitive_type_name(self) -> Option<&'static str> {
        let name = match self {
            Self::Null | Self::Bad => return None,
            Self::SByte => "System.SByte",
            Self::Byte => "System.Byte",
            Self::Int16 => "System.Int16",
            Self::UInt16 => "System.UInt16",
            Self::Int32 => "System.Int32",
            Self::UInt32 => "System.UInt32",
            Self::Int64 => "System.Int64",
            Self::UInt64 => "System.UInt64",
            Self::NInt => "System.IntPtr",
            Self::NUInt => "System.UIntPtr",
            Self::Char => "System.Char",
            Self::Boolean => "System.Boolean",
            Self::Single => "System.Single",
            Self::Double => "System.Double",
            Self::String => "System.String",
            Self::Decimal => "System.Decimal",
            Self::DateTime => "System.DateTime",
        };
        Some(name)
    }

    /// Reverse lookup of [`Self::primitive_type_name`].
    #[must_use]
    pub fn from_primitive_type_name(name: &str) -> Option<Self> {
        PRIMITIVE_TYPE_NAMES.get(name).copied()
    }
}

static PRIMITIVE_TYPE_NAMES: phf::Map<&'static str, ConstantValueTypeDiscriminator> = phf_map! {
    "System.SByte" => ConstantValueTypeDiscriminator::SByte,
    "System.Byte" => ConstantValueTypeDiscriminator::Byte,
    "System.Int16" => ConstantValueTypeDiscriminator::Int16,
    "System.UInt16" => ConstantValueTypeDiscriminator::UInt16,
    "System.Int32" => ConstantValueTypeDiscriminator::Int32,
    "System.UInt32" => ConstantValueTypeDiscriminator::UInt32,
    "System.Int64" => ConstantValueTypeDiscriminator::Int64,
    "System.UInt64" => ConstantValueTypeDiscriminator::UInt64,
    "System.IntPtr" => ConstantValueTypeDiscriminator::NInt,
    "System.UIntPtr" => ConstantValueTypeDiscriminator::NUInt,
    "System.Char" => ConstantValueTypeDiscriminator::Char,
    "System.Boolean" => ConstantValueTypeDiscriminator::Boolean,
    "System.Single" => ConstantValueTypeDiscriminator::Single,
    "System.Double" => ConstantValueTypeDiscriminator::Double,
    "System.String" => ConstantValueTypeDiscriminator::String,
    "System.Decimal" => ConstantValueTypeDiscriminator::Decimal,
    "System.DateTime" => ConstantValueTypeDiscriminator::DateTime,
};
