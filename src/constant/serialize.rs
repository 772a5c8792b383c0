//! Raw metadata encoding of constant payloads.
//!
//! The encoding carries no discriminator tag; readers know the kind from
//! the surrounding metadata row.

use std::io::{self, Write};

use super::{ConstantValue, Payload};

impl ConstantValue {
    /// Write the payload as little-endian primitive bytes.
    ///
    /// Strings are written as UTF-16 code units. The null constant is written
    /// as a 4-byte zero, the encoding of a null class reference. `Single`
    /// payloads are narrowed first.
    ///
    /// # Errors
    /// Propagates failures from `writer`.
    ///
    /// # Panics
    /// For `bad`, unset and `Decimal` constants, which have no blob form.
    #[track_caller]
    #[expect(clippy::little_endian_bytes, reason = "metadata blobs are little-endian")]
    pub fn serialize<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        match self.payload() {
            Payload::Boolean(v) => writer.write_all(&[u8::from(*v)]),
            Payload::SByte(v) => writer.write_all(&v.to_le_bytes()),
            Payload::Byte(v) => writer.write_all(&[*v]),
            Payload::Int16(v) => writer.write_all(&v.to_le_bytes()),
            Payload::UInt16(v) | Payload::Char(v) => writer.write_all(&v.to_le_bytes()),
            Payload::Int32(v) | Payload::NInt(v) => writer.write_all(&v.to_le_bytes()),
            Payload::UInt32(v) | Payload::NUInt(v) => writer.write_all(&v.to_le_bytes()),
            Payload::Int64(v) | Payload::DateTime(v) => writer.write_all(&v.to_le_bytes()),
            Payload::UInt64(v) => writer.write_all(&v.to_le_bytes()),
            Payload::Single(_) => writer.write_all(&self.single_value().to_le_bytes()),
            Payload::Double(v) => writer.write_all(&v.to_le_bytes()),
            Payload::String(s) => s
                .flat()
                .encode_utf16()
                .try_for_each(|unit| writer.write_all(&unit.to_le_bytes())),
            Payload::Null => writer.write_all(&[0; 4]),
            Payload::Unset | Payload::Bad | Payload::Decimal(_) => {
                panic!("unexpected value: {self:?} has no metadata encoding")
            }
        }
    }
}
