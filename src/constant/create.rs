//! Constant factories and the singleton cache.

use std::sync::{Arc, LazyLock};

use rust_decimal::Decimal;

use super::{
    CANONICAL_NAN_BITS, ConstantString, ConstantValue, ConstantValueTypeDiscriminator as D,
    Payload, PrimitiveValue, Rope, decimal_bits,
};

/// Shared instances, indexed by discriminator encoding.
struct Singletons {
    unset: ConstantValue,
    defaults: Vec<ConstantValue>,
    ones: Vec<Option<ConstantValue>>,
}

static SINGLETONS: LazyLock<Singletons> = LazyLock::new(|| {
    let null = ConstantValue::new(Payload::Null);
    Singletons {
        unset: ConstantValue::new(Payload::Unset),
        defaults: D::ALL
            .iter()
            .map(|d| match d {
                // Reference types default to the one null instance.
                D::Null | D::String => null.clone(),
                _ => ConstantValue::new(default_payload(*d)),
            })
            .collect(),
        ones: D::ALL
            .iter()
            .map(|d| one_payload(*d).map(ConstantValue::new))
            .collect(),
    }
});

fn default_payload(discriminator: D) -> Payload {
    match discriminator {
        D::Null | D::String => Payload::Null,
        D::Bad => Payload::Bad,
        D::SByte => Payload::SByte(0),
        D::Byte => Payload::Byte(0),
        D::Int16 => Payload::Int16(0),
        D::UInt16 => Payload::UInt16(0),
        D::Int32 => Payload::Int32(0),
        D::UInt32 => Payload::UInt32(0),
        D::Int64 => Payload::Int64(0),
        D::UInt64 => Payload::UInt64(0),
        D::NInt => Payload::NInt(0),
        D::NUInt => Payload::NUInt(0),
        D::Char => Payload::Char(0),
        D::Boolean => Payload::Boolean(false),
        D::Single => Payload::Single(0.0),
        D::Double => Payload::Double(0.0),
        D::Decimal => Payload::Decimal(Decimal::ZERO),
        D::DateTime => Payload::DateTime(0),
    }
}

fn one_payload(discriminator: D) -> Option<Payload> {
    let payload = match discriminator {
        D::Null | D::Bad | D::String | D::Char | D::DateTime => return None,
        D::SByte => Payload::SByte(1),
        D::Byte => Payload::Byte(1),
        D::Int16 => Payload::Int16(1),
        D::UInt16 => Payload::UInt16(1),
        D::Int32 => Payload::Int32(1),
        D::UInt32 => Payload::UInt32(1),
        D::Int64 => Payload::Int64(1),
        D::UInt64 => Payload::UInt64(1),
        D::NInt => Payload::NInt(1),
        D::NUInt => Payload::NUInt(1),
        D::Boolean => Payload::Boolean(true),
        D::Single => Payload::Single(1.0),
        D::Double => Payload::Double(1.0),
        D::Decimal => Payload::Decimal(Decimal::ONE),
    };
    Some(payload)
}

fn cached_default(discriminator: D) -> ConstantValue {
    SINGLETONS
        .defaults
        .get(usize::from(discriminator.to_u8()))
        .cloned()
        .unwrap_or_else(|| ConstantValue::new(default_payload(discriminator)))
}

fn cached_one(discriminator: D, fallback: Payload) -> ConstantValue {
    SINGLETONS
        .ones
        .get(usize::from(discriminator.to_u8()))
        .cloned()
        .flatten()
        .unwrap_or_else(|| ConstantValue::new(fallback))
}

/// Pick the zero or one singleton, or allocate a fresh constant.
fn cached_or_new(discriminator: D, payload: Payload, is_zero: bool, is_one: bool) -> ConstantValue {
    if is_zero {
        cached_default(discriminator)
    } else if is_one {
        cached_one(discriminator, payload)
    } else {
        ConstantValue::new(payload)
    }
}

const ONE_BITS: u64 = 0x3FF0_0000_0000_0000;

fn canonical_double(value: f64) -> f64 {
    if value.is_nan() {
        f64::from_bits(CANONICAL_NAN_BITS)
    } else {
        value
    }
}

/// A boxed value that cannot be unboxed as `target`.
#[track_caller]
fn unexpected_payload(value: &PrimitiveValue, target: D) -> ! {
    panic!("unexpected value: cannot create a {target:?} constant from {value:?}")
}

impl ConstantValue {
    /// The null constant.
    #[must_use]
    pub fn null() -> Self {
        cached_default(D::Null)
    }

    /// Marker for a constant that has not been computed yet.
    ///
    /// It carries the `Null` discriminator but equals only itself.
    #[must_use]
    pub fn unset() -> Self {
        SINGLETONS.unset.clone()
    }

    /// The constant produced by a failed evaluation.
    #[must_use]
    pub fn bad() -> Self {
        cached_default(D::Bad)
    }

    /// The shared zero (or null/`false`) instance for `discriminator`.
    ///
    /// `String` maps to null, since that is the default of a reference type.
    #[must_use]
    pub fn default_for(discriminator: D) -> Self {
        cached_default(discriminator)
    }

    /// `true` or `false`.
    #[must_use]
    pub fn create_bool(value: bool) -> Self {
        cached_or_new(D::Boolean, Payload::Boolean(value), !value, value)
    }

    /// An `sbyte` constant.
    #[must_use]
    pub fn create_sbyte(value: i8) -> Self {
        cached_or_new(D::SByte, Payload::SByte(value), value == 0, value == 1)
    }

    /// A `byte` constant.
    #[must_use]
    pub fn create_byte(value: u8) -> Self {
        cached_or_new(D::Byte, Payload::Byte(value), value == 0, value == 1)
    }

    /// A `short` constant.
    #[must_use]
    pub fn create_int16(value: i16) -> Self {
        cached_or_new(D::Int16, Payload::Int16(value), value == 0, value == 1)
    }

    /// A `ushort` constant.
    #[must_use]
    pub fn create_uint16(value: u16) -> Self {
        cached_or_new(D::UInt16, Payload::UInt16(value), value == 0, value == 1)
    }

    /// A `char` constant from a UTF-16 code unit.
    #[must_use]
    pub fn create_char(value: u16) -> Self {
        cached_or_new(D::Char, Payload::Char(value), value == 0, false)
    }

    /// An `int` constant.
    #[must_use]
    pub fn create_int32(value: i32) -> Self {
        cached_or_new(D::Int32, Payload::Int32(value), value == 0, value == 1)
    }

    /// A `uint` constant.
    #[must_use]
    pub fn create_uint32(value: u32) -> Self {
        cached_or_new(D::UInt32, Payload::UInt32(value), value == 0, value == 1)
    }

    /// An `nint` constant.
    #[must_use]
    pub fn create_native_int(value: i32) -> Self {
        cached_or_new(D::NInt, Payload::NInt(value), value == 0, value == 1)
    }

    /// An `nuint` constant.
    #[must_use]
    pub fn create_native_uint(value: u32) -> Self {
        cached_or_new(D::NUInt, Payload::NUInt(value), value == 0, value == 1)
    }

    /// A `long` constant.
    #[must_use]
    pub fn create_int64(value: i64) -> Self {
        cached_or_new(D::Int64, Payload::Int64(value), value == 0, value == 1)
    }

    /// A `ulong` constant.
    #[must_use]
    pub fn create_uint64(value: u64) -> Self {
        cached_or_new(D::UInt64, Payload::UInt64(value), value == 0, value == 1)
    }

    /// A `float` constant.
    #[must_use]
    pub fn create_single(value: f32) -> Self {
        Self::create_single_from_double(f64::from(value))
    }

    /// A `float` constant from a value folded at double precision.
    ///
    /// Only `+0.0` is mapped to the shared zero; `-0.0` keeps its sign.
    #[must_use]
    pub fn create_single_from_double(value: f64) -> Self {
        let value = canonical_double(value);
        let bits = value.to_bits();
        cached_or_new(D::Single, Payload::Single(value), bits == 0, bits == ONE_BITS)
    }

    /// A `double` constant.
    ///
    /// Only `+0.0` is mapped to the shared zero; `-0.0` keeps its sign.
    #[must_use]
    pub fn create_double(value: f64) -> Self {
        let value = canonical_double(value);
        let bits = value.to_bits();
        cached_or_new(D::Double, Payload::Double(value), bits == 0, bits == ONE_BITS)
    }

    /// A `decimal` constant.
    ///
    /// Zero and one are shared only for their canonical encodings (positive,
    /// scale zero); `0.00` or `1.0` get their own instance.
    #[must_use]
    pub fn create_decimal(value: Decimal) -> Self {
        let canonical = decimal_bits(&value)[3] == 0;
        cached_or_new(
            D::Decimal,
            Payload::Decimal(value),
            canonical && value.is_zero(),
            canonical && value == Decimal::ONE,
        )
    }

    /// A `DateTime` constant from its raw 64-bit encoding.
    #[must_use]
    pub fn create_date_time(value: i64) -> Self {
        cached_or_new(D::DateTime, Payload::DateTime(value), value == 0, false)
    }

    /// A string constant.
    #[must_use]
    pub fn create_string(value: impl Into<Arc<str>>) -> Self {
        Self::new(Payload::String(ConstantString::from_flat(value.into())))
    }

    /// A string constant backed by `rope`; flattening is deferred.
    #[must_use]
    pub fn from_rope(rope: Rope) -> Self {
        Self::new(Payload::String(ConstantString::from_rope(rope)))
    }

    /// Create a constant of kind `discriminator` from a boxed value.
    ///
    /// `None` stands for a null reference and is accepted for `Null`,
    /// `String` and `Bad`. `NInt`/`NUInt` take `Int32`/`UInt32` values and
    /// `Single` also accepts a `Double` folded at double precision.
    ///
    /// # Panics
    /// When the boxed value does not have the type `discriminator` names.
    #[must_use]
    #[track_caller]
    pub fn create_from(value: Option<PrimitiveValue>, discriminator: D) -> Self {
        let Some(value) = value else {
            return match discriminator {
                D::Bad => Self::bad(),
                D::Null | D::String => Self::null(),
                other => panic!("unexpected value: null is not a {other:?} constant"),
            };
        };

        match (discriminator, value) {
            (D::Null, _) => Self::null(),
            (D::Bad, _) => Self::bad(),
            (D::Boolean, PrimitiveValue::Boolean(v)) => Self::create_bool(v),
            (D::SByte, PrimitiveValue::SByte(v)) => Self::create_sbyte(v),
            (D::Byte, PrimitiveValue::Byte(v)) => Self::create_byte(v),
            (D::Int16, PrimitiveValue::Int16(v)) => Self::create_int16(v),
            (D::UInt16, PrimitiveValue::UInt16(v)) => Self::create_uint16(v),
            (D::Char, PrimitiveValue::Char(v)) => Self::create_char(v),
            (D::Int32, PrimitiveValue::Int32(v)) => Self::create_int32(v),
            (D::UInt32, PrimitiveValue::UInt32(v)) => Self::create_uint32(v),
            (D::NInt, PrimitiveValue::Int32(v)) => Self::create_native_int(v),
            (D::NUInt, PrimitiveValue::UInt32(v)) => Self::create_native_uint(v),
            (D::Int64, PrimitiveValue::Int64(v)) => Self::create_int64(v),
            (D::UInt64, PrimitiveValue::UInt64(v)) => Self::create_uint64(v),
            (D::Single, PrimitiveValue::Single(v)) => Self::create_single(v),
            (D::Single, PrimitiveValue::Double(v)) => Self::create_single_from_double(v),
            (D::Double, PrimitiveValue::Double(v)) => Self::create_double(v),
            (D::Decimal, PrimitiveValue::Decimal(v)) => Self::create_decimal(v),
            (D::DateTime, PrimitiveValue::DateTime(v)) => Self::create_date_time(v),
            (D::String, PrimitiveValue::String(v)) => Self::create_string(v),
            (target, value) => unexpected_payload(&value, target),
        }
    }
}

macro_rules! impl_from_for_constant {
    ($($ty:ty => $ctor:ident),* $(,)?) => {
        $(
            impl From<$ty> for ConstantValue {
                fn from(value: $ty) -> Self {
                    Self::$ctor(value)
                }
            }
        )*
    };
}

impl_from_for_constant! {
    bool => create_bool,
    i8 => create_sbyte,
    u8 => create_byte,
    i16 => create_int16,
    u16 => create_uint16,
    i32 => create_int32,
    u32 => create_uint32,
    i64 => create_int64,
    u64 => create_uint64,
    f32 => create_single,
    f64 => create_double,
    Decimal => create_decimal,
    Rope => from_rope,
}

impl From<&str> for ConstantValue {
    fn from(value: &str) -> Self {
        Self::create_string(value)
    }
}

impl From<String> for ConstantValue {
    fn from(value: String) -> Self {
        Self::create_string(value)
    }
}
