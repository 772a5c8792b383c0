//! Source hashes for reproducible builds.
//!
//! A source hash is the digest of a file's raw bytes, or of a sequence of
//! constants fed through a fixed little-endian encoding so the digest does
//! not depend on the host.

use std::fmt;

use digest::Digest;
use sha1::Sha1;
use sha2::Sha256;

use crate::constant::{ConstantValue, ConstantValueTypeDiscriminator, decimal_bits};

/// Digest algorithm used for source hashing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SourceHashAlgorithm {
    /// SHA-1, kept for older debuggers.
    Sha1,
    /// SHA-256.
    #[default]
    Sha256,
}

impl SourceHashAlgorithm {
    /// The algorithm used when none is specified.
    pub const DEFAULT: Self = Self::Sha256;

    /// Digest length in bytes.
    #[must_use]
    pub const fn digest_len(self) -> usize {
        match self {
            Self::Sha1 => 20,
            Self::Sha256 => 32,
        }
    }

    /// Identifier recorded for the algorithm in PDB checksum records.
    #[must_use]
    pub const fn guid(self) -> &'static str {
        match self {
            Self::Sha1 => "ff1816ec-aa5e-4d10-87f7-6f4963833460",
            Self::Sha256 => "8829d00f-11b8-4213-878b-770e8597ac16",
        }
    }

    /// Look up an algorithm by its PDB identifier, ignoring case.
    #[must_use]
    pub fn from_guid(guid: &str) -> Option<Self> {
        [Self::Sha1, Self::Sha256]
            .into_iter()
            .find(|algorithm| algorithm.guid().eq_ignore_ascii_case(guid))
    }
}

impl fmt::Display for SourceHashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Sha1 => "SHA1",
            Self::Sha256 => "SHA256",
        })
    }
}

/// Digest of `bytes`.
#[must_use]
pub fn compute_source_hash(bytes: &[u8], algorithm: SourceHashAlgorithm) -> Vec<u8> {
    match algorithm {
        SourceHashAlgorithm::Sha1 => Sha1::digest(bytes).to_vec(),
        SourceHashAlgorithm::Sha256 => Sha256::digest(bytes).to_vec(),
    }
}

/// Digest of a sequence of constants.
///
/// Only null, string, native-sized integer and decimal constants have a
/// hash encoding:
///
/// - null: a single zero byte
/// - string: its UTF-16 code units, little-endian
/// - `nint`/`nuint`: the 32-bit payload, little-endian
/// - decimal: the four 32-bit words of [`decimal_bits`], little-endian
///
/// # Panics
/// When a constant of any other kind is encountered.
#[must_use]
#[track_caller]
pub fn compute_source_hash_constants<'a, I>(constants: I, algorithm: SourceHashAlgorithm) -> Vec<u8>
where
    I: IntoIterator<Item = &'a ConstantValue>,
{
    match algorithm {
        SourceHashAlgorithm::Sha1 => hash_constants::<Sha1, _>(constants),
        SourceHashAlgorithm::Sha256 => hash_constants::<Sha256, _>(constants),
    }
}

#[track_caller]
fn hash_constants<'a, H, I>(constants: I) -> Vec<u8>
where
    H: Digest,
    I: IntoIterator<Item = &'a ConstantValue>,
{
    let mut hasher = H::new();
    let mut count = 0_usize;
    for constant in constants {
        encode_constant(&mut hasher, constant);
        count += 1;
    }
    log::trace!("hashed {count} constants");
    hasher.finalize().to_vec()
}

#[track_caller]
#[expect(clippy::little_endian_bytes, reason = "hash input is fixed little-endian")]
fn encode_constant<H: Digest>(hasher: &mut H, constant: &ConstantValue) {
    use ConstantValueTypeDiscriminator as D;
    match constant.discriminator() {
        D::Null => hasher.update([0_u8]),
        D::String => {
            if let Some(text) = constant.string_value() {
                for unit in text.encode_utf16() {
                    hasher.update(unit.to_le_bytes());
                }
            }
        }
        D::NInt => hasher.update(constant.int32_value().to_le_bytes()),
        D::NUInt => hasher.update(constant.uint32_value().to_le_bytes()),
        D::Decimal => {
            for word in decimal_bits(&constant.decimal_value()) {
                hasher.update(word.to_le_bytes());
            }
        }
        other => panic!("unexpected value: {other:?} constants have no source hash encoding"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn hex(bytes: &[u8]) -> String {
        bytes.iter().map(|b| format!("{b:02x}")).collect()
    }

    #[rstest]
    #[case::sha1(SourceHashAlgorithm::Sha1, "a9993e364706816aba3e25717850c26c9cd0d89d")]
    #[case::sha256(
        SourceHashAlgorithm::Sha256,
        "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
    )]
    fn hashes_raw_bytes(#[case] algorithm: SourceHashAlgorithm, #[case] expected: &str) {
        let digest = compute_source_hash(b"abc", algorithm);
        assert_eq!(digest.len(), algorithm.digest_len());
        assert_eq!(hex(&digest), expected);
    }

    #[rstest]
    #[case::sha1(SourceHashAlgorithm::Sha1)]
    #[case::sha256(SourceHashAlgorithm::Sha256)]
    fn guid_round_trips(#[case] algorithm: SourceHashAlgorithm) {
        assert_eq!(SourceHashAlgorithm::from_guid(algorithm.guid()), Some(algorithm));
        assert_eq!(
            SourceHashAlgorithm::from_guid(&algorithm.guid().to_ascii_uppercase()),
            Some(algorithm)
        );
    }

    #[test]
    fn default_is_sha256() {
        assert_eq!(SourceHashAlgorithm::default(), SourceHashAlgorithm::DEFAULT);
        assert_eq!(SourceHashAlgorithm::DEFAULT, SourceHashAlgorithm::Sha256);
    }

    #[test]
    fn null_hashes_as_one_zero_byte() {
        let constants = [ConstantValue::null()];
        assert_eq!(
            compute_source_hash_constants(&constants, SourceHashAlgorithm::Sha256),
            compute_source_hash(&[0], SourceHashAlgorithm::Sha256)
        );
    }

    #[test]
    #[should_panic(expected = "unexpected value")]
    fn rejects_kinds_without_encoding() {
        let constants = [ConstantValue::create_int32(1)];
        let _ = compute_source_hash_constants(&constants, SourceHashAlgorithm::Sha1);
    }
}
