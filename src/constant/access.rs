//! Typed accessors and classification predicates.
//!
//! Integer accessors widen: any integral constant whose storage is no wider
//! than the accessor's type can be read through it, sign-extending signed
//! kinds and zero-extending unsigned ones. Reading across signedness at the
//! same width reinterprets the bits, as shared storage would.
//!
//! Calling an accessor that does not apply to the stored kind is a contract
//! violation and panics.

use std::num::FpCategory;
use std::sync::Arc;

use rust_decimal::Decimal;

use super::{
    CANONICAL_SINGLE_NAN_BITS, ConstantValue, ConstantValueTypeDiscriminator, Payload,
    PrimitiveValue, Rope,
};

/// Storage width class of an integral payload: 8, 16, 32 or 64 bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Width {
    W8,
    W16,
    W32,
    W64,
}

#[track_caller]
fn invalid_access(accessor: &str, discriminator: ConstantValueTypeDiscriminator) -> ! {
    panic!("{accessor} is not valid for a {discriminator:?} constant")
}

fn is_zero_float(value: f64) -> bool {
    value.classify() == FpCategory::Zero
}

fn is_one_float(value: f64) -> bool {
    value.to_bits() == 1.0_f64.to_bits()
}

impl ConstantValue {
    /// Numeric value of an integral payload together with its storage width.
    fn integral(&self) -> Option<(i128, Width)> {
        let widened = match *self.payload() {
            Payload::SByte(v) => (i128::from(v), Width::W8),
            Payload::Byte(v) => (i128::from(v), Width::W8),
            Payload::Int16(v) => (i128::from(v), Width::W16),
            Payload::UInt16(v) | Payload::Char(v) => (i128::from(v), Width::W16),
            Payload::Int32(v) | Payload::NInt(v) => (i128::from(v), Width::W32),
            Payload::UInt32(v) | Payload::NUInt(v) => (i128::from(v), Width::W32),
            Payload::Int64(v) => (i128::from(v), Width::W64),
            Payload::UInt64(v) => (i128::from(v), Width::W64),
            _ => return None,
        };
        Some(widened)
    }

    #[track_caller]
    fn integral_within(&self, accessor: &str, width: Width) -> i128 {
        match self.integral() {
            Some((value, stored)) if stored <= width => value,
            _ => invalid_access(accessor, self.discriminator()),
        }
    }

    /// The `bool` payload.
    ///
    /// # Panics
    /// When the constant is not a `Boolean`.
    #[must_use]
    #[track_caller]
    pub fn boolean_value(&self) -> bool {
        match *self.payload() {
            Payload::Boolean(v) => v,
            _ => invalid_access("boolean_value", self.discriminator()),
        }
    }

    /// The payload as `sbyte`.
    ///
    /// # Panics
    /// When the constant is not an 8-bit integer.
    #[must_use]
    #[track_caller]
    #[expect(clippy::cast_possible_truncation, reason = "8-bit storage reinterpreted")]
    pub fn sbyte_value(&self) -> i8 {
        self.integral_within("sbyte_value", Width::W8) as i8
    }

    /// The payload as `byte`.
    ///
    /// # Panics
    /// When the constant is not an 8-bit integer.
    #[must_use]
    #[track_caller]
    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "8-bit storage reinterpreted"
    )]
    pub fn byte_value(&self) -> u8 {
        self.integral_within("byte_value", Width::W8) as u8
    }

    /// The payload widened to `short`.
    ///
    /// # Panics
    /// When the constant is not an integer of at most 16 bits.
    #[must_use]
    #[track_caller]
    #[expect(clippy::cast_possible_truncation, reason = "16-bit storage reinterpreted")]
    pub fn int16_value(&self) -> i16 {
        self.integral_within("int16_value", Width::W16) as i16
    }

    /// The payload widened to `ushort`.
    ///
    /// # Panics
    /// When the constant is not an integer of at most 16 bits.
    #[must_use]
    #[track_caller]
    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "16-bit storage reinterpreted"
    )]
    pub fn uint16_value(&self) -> u16 {
        self.integral_within("uint16_value", Width::W16) as u16
    }

    /// The payload as a UTF-16 code unit.
    ///
    /// # Panics
    /// When the constant is not an integer of at most 16 bits.
    #[must_use]
    #[track_caller]
    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "16-bit storage reinterpreted"
    )]
    pub fn char_value(&self) -> u16 {
        self.integral_within("char_value", Width::W16) as u16
    }

    /// The payload widened to `int`.
    ///
    /// # Panics
    /// When the constant is not an integer of at most 32 bits.
    #[must_use]
    #[track_caller]
    #[expect(clippy::cast_possible_truncation, reason = "32-bit storage reinterpreted")]
    pub fn int32_value(&self) -> i32 {
        self.integral_within("int32_value", Width::W32) as i32
    }

    /// The payload widened to `uint`.
    ///
    /// # Panics
    /// When the constant is not an integer of at most 32 bits.
    #[must_use]
    #[track_caller]
    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "32-bit storage reinterpreted"
    )]
    pub fn uint32_value(&self) -> u32 {
        self.integral_within("uint32_value", Width::W32) as u32
    }

    /// The payload widened to `long`.
    ///
    /// # Panics
    /// When the constant is not an integer.
    #[must_use]
    #[track_caller]
    #[expect(clippy::cast_possible_truncation, reason = "64-bit storage reinterpreted")]
    pub fn int64_value(&self) -> i64 {
        self.integral_within("int64_value", Width::W64) as i64
    }

    /// The payload widened to `ulong`.
    ///
    /// # Panics
    /// When the constant is not an integer.
    #[must_use]
    #[track_caller]
    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "64-bit storage reinterpreted"
    )]
    pub fn uint64_value(&self) -> u64 {
        self.integral_within("uint64_value", Width::W64) as u64
    }

    /// The floating payload at double precision.
    ///
    /// # Panics
    /// When the constant is neither `Single` nor `Double`.
    #[must_use]
    #[track_caller]
    pub fn double_value(&self) -> f64 {
        match *self.payload() {
            Payload::Single(v) | Payload::Double(v) => v,
            _ => invalid_access("double_value", self.discriminator()),
        }
    }

    /// The floating payload narrowed to single precision.
    ///
    /// # Panics
    /// When the constant is neither `Single` nor `Double`.
    #[must_use]
    #[track_caller]
    #[expect(clippy::cast_possible_truncation, reason = "narrowing is the point")]
    pub fn single_value(&self) -> f32 {
        let value = self.double_value();
        if value.is_nan() {
            f32::from_bits(CANONICAL_SINGLE_NAN_BITS)
        } else {
            value as f32
        }
    }

    /// The `decimal` payload.
    ///
    /// # Panics
    /// When the constant is not a `Decimal`.
    #[must_use]
    #[track_caller]
    pub fn decimal_value(&self) -> Decimal {
        match *self.payload() {
            Payload::Decimal(v) => v,
            _ => invalid_access("decimal_value", self.discriminator()),
        }
    }

    /// The raw `DateTime` encoding.
    ///
    /// # Panics
    /// When the constant is not a `DateTime`.
    #[must_use]
    #[track_caller]
    pub fn date_time_value(&self) -> i64 {
        match *self.payload() {
            Payload::DateTime(v) => v,
            _ => invalid_access("date_time_value", self.discriminator()),
        }
    }

    /// The string payload, `None` for the null constant.
    ///
    /// Rope-backed strings are flattened on first access and cached.
    ///
    /// # Panics
    /// When the constant is neither a `String` nor null.
    #[must_use]
    #[track_caller]
    pub fn string_value(&self) -> Option<Arc<str>> {
        match self.payload() {
            Payload::String(s) => Some(Arc::clone(s.flat())),
            Payload::Null | Payload::Unset => None,
            _ => invalid_access("string_value", self.discriminator()),
        }
    }

    /// The rope behind a string constant, `None` for the null constant.
    ///
    /// # Panics
    /// When the constant is neither a `String` nor null.
    #[must_use]
    #[track_caller]
    pub fn rope_value(&self) -> Option<Rope> {
        match self.payload() {
            Payload::String(s) => Some(s.rope().clone()),
            Payload::Null | Payload::Unset => None,
            _ => invalid_access("rope_value", self.discriminator()),
        }
    }

    /// The payload boxed as a [`PrimitiveValue`].
    ///
    /// Null, bad and unset constants have no value. Native-sized integers box
    /// as their 32-bit payload; `Single` boxes narrowed.
    #[must_use]
    pub fn value(&self) -> Option<PrimitiveValue> {
        let boxed = match self.payload() {
            Payload::Null | Payload::Unset | Payload::Bad => return None,
            Payload::Boolean(v) => PrimitiveValue::Boolean(*v),
            Payload::SByte(v) => PrimitiveValue::SByte(*v),
            Payload::Byte(v) => PrimitiveValue::Byte(*v),
            Payload::Int16(v) => PrimitiveValue::Int16(*v),
            Payload::UInt16(v) => PrimitiveValue::UInt16(*v),
            Payload::Char(v) => PrimitiveValue::Char(*v),
            Payload::Int32(v) | Payload::NInt(v) => PrimitiveValue::Int32(*v),
            Payload::UInt32(v) | Payload::NUInt(v) => PrimitiveValue::UInt32(*v),
            Payload::Int64(v) => PrimitiveValue::Int64(*v),
            Payload::UInt64(v) => PrimitiveValue::UInt64(*v),
            Payload::Single(_) => PrimitiveValue::Single(self.single_value()),
            Payload::Double(v) => PrimitiveValue::Double(*v),
            Payload::Decimal(v) => PrimitiveValue::Decimal(*v),
            Payload::DateTime(v) => PrimitiveValue::DateTime(*v),
            Payload::String(s) => PrimitiveValue::String(Arc::clone(s.flat())),
        };
        Some(boxed)
    }

    /// A failed evaluation.
    #[must_use]
    pub fn is_bad(&self) -> bool {
        matches!(self.payload(), Payload::Bad)
    }

    /// The null constant or the unset marker.
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self.payload(), Payload::Null | Payload::Unset)
    }

    /// Same as [`Self::is_null`], for languages that spell null "nothing".
    #[must_use]
    pub fn is_nothing(&self) -> bool {
        self.is_null()
    }

    /// The not-yet-computed marker.
    #[must_use]
    pub fn is_unset(&self) -> bool {
        matches!(self.payload(), Payload::Unset)
    }

    /// A `Boolean` constant.
    #[must_use]
    pub fn is_boolean(&self) -> bool {
        matches!(self.payload(), Payload::Boolean(_))
    }

    /// A `Char` constant.
    #[must_use]
    pub fn is_char(&self) -> bool {
        matches!(self.payload(), Payload::Char(_))
    }

    /// A non-null `String` constant.
    #[must_use]
    pub fn is_string(&self) -> bool {
        matches!(self.payload(), Payload::String(_))
    }

    /// A `Decimal` constant.
    #[must_use]
    pub fn is_decimal(&self) -> bool {
        matches!(self.payload(), Payload::Decimal(_))
    }

    /// A `DateTime` constant.
    #[must_use]
    pub fn is_date_time(&self) -> bool {
        matches!(self.payload(), Payload::DateTime(_))
    }

    /// A `Single` or `Double` constant.
    #[must_use]
    pub fn is_floating(&self) -> bool {
        self.discriminator().is_floating()
    }

    /// An integer constant of any width.
    #[must_use]
    pub fn is_integral(&self) -> bool {
        self.discriminator().is_integral()
    }

    /// An unsigned integer constant.
    #[must_use]
    pub fn is_unsigned(&self) -> bool {
        self.discriminator().is_unsigned()
    }

    /// An integral, floating or decimal constant.
    #[must_use]
    pub fn is_numeric(&self) -> bool {
        self.discriminator().is_numeric()
    }

    /// Whether the constant is the default value of its type.
    ///
    /// Both `+0.0` and `-0.0` count, as do decimal zeros of any scale. Null
    /// is the default of reference types; `bad` is never a default.
    #[must_use]
    pub fn is_default_value(&self) -> bool {
        match self.payload() {
            Payload::Null | Payload::Unset => true,
            Payload::Bad | Payload::String(_) => false,
            Payload::Boolean(v) => !v,
            Payload::Single(v) | Payload::Double(v) => is_zero_float(*v),
            Payload::Decimal(v) => v.is_zero(),
            Payload::DateTime(v) => *v == 0,
            _ => self.integral().is_some_and(|(value, _)| value == 0),
        }
    }

    /// Whether the constant is numerically one, or `true`.
    ///
    /// `Char` is not numeric and never counts.
    #[must_use]
    pub fn is_one(&self) -> bool {
        match self.payload() {
            Payload::Boolean(v) => *v,
            Payload::Single(v) | Payload::Double(v) => is_one_float(*v),
            Payload::Decimal(v) => *v == Decimal::ONE,
            Payload::Char(_) => false,
            _ => self.integral().is_some_and(|(value, _)| value == 1),
        }
    }

    /// Whether the constant is a numeric value below zero.
    ///
    /// `-0.0` and NaN are not negative.
    #[must_use]
    pub fn is_negative_numeric(&self) -> bool {
        match self.payload() {
            Payload::Single(v) | Payload::Double(v) => *v < 0.0,
            Payload::Decimal(v) => v.is_sign_negative() && !v.is_zero(),
            _ => self.integral().is_some_and(|(value, _)| value < 0),
        }
    }

    /// For integral zero or one, `Some(is_one)`; otherwise `None`.
    #[must_use]
    pub fn is_integral_value_zero_or_one(&self) -> Option<bool> {
        if !self.is_integral() {
            return None;
        }
        match self.integral() {
            Some((0, _)) => Some(false),
            Some((1, _)) => Some(true),
            _ => None,
        }
    }
}
