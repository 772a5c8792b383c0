use std::fmt;

use super::{ConstantValue, Payload};

fn write_float(f: &mut fmt::Formatter<'_>, value: impl Into<f64> + fmt::Display + Copy) -> fmt::Result {
    let wide: f64 = value.into();
    if wide.is_nan() {
        f.write_str("NaN")
    } else if wide.is_infinite() {
        f.write_str(if wide.is_sign_negative() { "-Infinity" } else { "Infinity" })
    } else {
        write!(f, "{value}")
    }
}

fn write_char(f: &mut fmt::Formatter<'_>, unit: u16) -> fmt::Result {
    match char::from_u32(u32::from(unit)) {
        Some(c) => write!(f, "{c:?}"),
        // Lone surrogate.
        None => write!(f, "'\\u{{{unit:04X}}}'"),
    }
}

impl fmt::Display for ConstantValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.payload() {
            Payload::Null => f.write_str("null"),
            Payload::Unset => f.write_str("unset"),
            Payload::Bad => f.write_str("bad"),
            Payload::Boolean(true) => f.write_str("True"),
            Payload::Boolean(false) => f.write_str("False"),
            Payload::SByte(v) => write!(f, "{v}"),
            Payload::Byte(v) => write!(f, "{v}"),
            Payload::Int16(v) => write!(f, "{v}"),
            Payload::UInt16(v) => write!(f, "{v}"),
            Payload::Char(v) => write_char(f, *v),
            Payload::Int32(v) | Payload::NInt(v) => write!(f, "{v}"),
            Payload::UInt32(v) | Payload::NUInt(v) => write!(f, "{v}"),
            Payload::Int64(v) => write!(f, "{v}"),
            Payload::UInt64(v) => write!(f, "{v}"),
            Payload::Single(_) => write_float(f, self.single_value()),
            Payload::Double(v) => write_float(f, *v),
            Payload::Decimal(v) => write!(f, "{v}"),
            Payload::DateTime(v) => write!(f, "DateTime({v})"),
            Payload::String(s) => write!(f, "{:?}", &**s.flat()),
        }
    }
}

impl fmt::Debug for ConstantValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_unset() {
            return f.write_str("ConstantValue(Unset)");
        }
        write!(f, "ConstantValue({:?}: {self})", self.discriminator())
    }
}
