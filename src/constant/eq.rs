//! Value equality and hashing.
//!
//! Two constants are equal when they have the same kind and the same value.
//! Floating payloads compare by bit pattern, except that `+0.0 == -0.0`;
//! NaN is canonical at creation so every NaN equals every other NaN.

use std::hash::{Hash, Hasher};
use std::num::FpCategory;

use super::{ConstantValue, Payload};

fn float_eq(left: f64, right: f64) -> bool {
    left.to_bits() == right.to_bits()
        || (left.classify() == FpCategory::Zero && right.classify() == FpCategory::Zero)
        || (left.is_nan() && right.is_nan())
}

fn float_hash_bits(value: f64) -> u64 {
    if value.classify() == FpCategory::Zero {
        0
    } else {
        value.to_bits()
    }
}

impl PartialEq for ConstantValue {
    fn eq(&self, other: &Self) -> bool {
        if self.ptr_eq(other) {
            return true;
        }
        match (self.payload(), other.payload()) {
            (Payload::Null, Payload::Null) | (Payload::Bad, Payload::Bad) => true,
            (Payload::Boolean(a), Payload::Boolean(b)) => a == b,
            (Payload::SByte(a), Payload::SByte(b)) => a == b,
            (Payload::Byte(a), Payload::Byte(b)) => a == b,
            (Payload::Int16(a), Payload::Int16(b)) => a == b,
            (Payload::UInt16(a), Payload::UInt16(b)) | (Payload::Char(a), Payload::Char(b)) => {
                a == b
            }
            (Payload::Int32(a), Payload::Int32(b)) | (Payload::NInt(a), Payload::NInt(b)) => a == b,
            (Payload::UInt32(a), Payload::UInt32(b)) | (Payload::NUInt(a), Payload::NUInt(b)) => {
                a == b
            }
            (Payload::Int64(a), Payload::Int64(b)) | (Payload::DateTime(a), Payload::DateTime(b)) => {
                a == b
            }
            (Payload::UInt64(a), Payload::UInt64(b)) => a == b,
            (Payload::Single(a), Payload::Single(b)) | (Payload::Double(a), Payload::Double(b)) => {
                float_eq(*a, *b)
            }
            (Payload::Decimal(a), Payload::Decimal(b)) => a == b,
            (Payload::String(a), Payload::String(b)) => a.flat() == b.flat(),
            // `Unset` only equals itself, which the identity check covered.
            _ => false,
        }
    }
}

impl Eq for ConstantValue {}

impl Hash for ConstantValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let payload = self.payload();
        matches!(payload, Payload::Unset).hash(state);
        self.discriminator().to_u8().hash(state);
        match payload {
            Payload::Null | Payload::Unset | Payload::Bad => {}
            Payload::Boolean(v) => v.hash(state),
            Payload::SByte(v) => v.hash(state),
            Payload::Byte(v) => v.hash(state),
            Payload::Int16(v) => v.hash(state),
            Payload::UInt16(v) | Payload::Char(v) => v.hash(state),
            Payload::Int32(v) | Payload::NInt(v) => v.hash(state),
            Payload::UInt32(v) | Payload::NUInt(v) => v.hash(state),
            Payload::Int64(v) | Payload::DateTime(v) => v.hash(state),
            Payload::UInt64(v) => v.hash(state),
            Payload::Single(v) | Payload::Double(v) => float_hash_bits(*v).hash(state),
            Payload::Decimal(v) => v.hash(state),
            Payload::String(s) => s.flat().hash(state),
        }
    }
}
