//! Packing of a binary mantissa and exponent into IEEE-754 bits.
//!
//! Rounding is always round-to-nearest, ties-to-even. Callers pass the
//! mantissa with at least one bit more than the target precision (when that
//! many bits are available) plus a flag saying whether every bit below the
//! supplied mantissa is zero.

use super::{ConvertedBits, FloatingPointType};

impl FloatingPointType {
    /// Assemble the value `initial_mantissa * 2^(initial_exponent - mantissa_bits)`.
    ///
    /// `has_zero_tail` must be `true` only when the supplied mantissa is the
    /// exact value, with no nonzero bits dropped before this call.
    pub(crate) fn assemble(
        self,
        initial_mantissa: u64,
        initial_exponent: i32,
        has_zero_tail: bool,
    ) -> ConvertedBits {
        if initial_mantissa == 0 {
            return ConvertedBits::underflow(self);
        }

        let normal_mantissa_shift =
            i32::from(self.normal_mantissa_bits()) - significant_bits(initial_mantissa);
        let normal_exponent = initial_exponent.saturating_sub(normal_mantissa_shift);

        let mut mantissa = initial_mantissa;
        let mut exponent = normal_exponent;

        if normal_exponent > self.max_binary_exponent() {
            return ConvertedBits::overflow(self);
        }

        if normal_exponent < self.min_binary_exponent() {
            // One less than the normal shift: denormals have no hidden bit.
            let denormal_mantissa_shift =
                normal_mantissa_shift + normal_exponent + self.exponent_bias() - 1;
            exponent = -self.exponent_bias();

            if denormal_mantissa_shift < 0 {
                mantissa = right_shift_with_rounding(
                    mantissa,
                    denormal_mantissa_shift.unsigned_abs(),
                    has_zero_tail,
                );
                if mantissa == 0 {
                    return ConvertedBits::underflow(self);
                }
                // Rounding carried into the hidden bit: the smallest normal.
                if mantissa > self.denormal_mantissa_mask() {
                    exponent = self.min_binary_exponent();
                }
            } else {
                mantissa <<= denormal_mantissa_shift.unsigned_abs();
            }
        } else if normal_mantissa_shift < 0 {
            mantissa = right_shift_with_rounding(
                mantissa,
                normal_mantissa_shift.unsigned_abs(),
                has_zero_tail,
            );
            if mantissa > self.normal_mantissa_mask() {
                mantissa >>= 1;
                exponent += 1;
                if exponent > self.max_binary_exponent() {
                    return ConvertedBits::overflow(self);
                }
            }
        } else if normal_mantissa_shift > 0 {
            mantissa <<= normal_mantissa_shift.unsigned_abs();
        }

        mantissa &= self.denormal_mantissa_mask();
        let biased_exponent = u64::from((exponent + self.exponent_bias()).unsigned_abs());
        let bits = (biased_exponent << self.mantissa_bits()) | mantissa;
        log::trace!(
            "assembled mantissa {initial_mantissa:#x} exponent {initial_exponent} into {bits:#x}"
        );
        ConvertedBits::ok(bits)
    }
}

/// Number of bits up to and including the most significant set bit.
pub(crate) fn significant_bits(value: u64) -> i32 {
    let bits = u64::BITS - value.leading_zeros();
    i32::try_from(bits).unwrap_or(i32::MAX)
}

/// Shift `value` right by `shift` bits, rounding half to even.
///
/// `has_zero_tail` reports whether the bits below `value` (already discarded
/// by the caller) were all zero.
pub(crate) fn right_shift_with_rounding(value: u64, shift: u32, has_zero_tail: bool) -> u64 {
    if shift == 0 {
        return value;
    }
    if shift > u64::BITS {
        return 0;
    }

    let wide = u128::from(value);
    let lsb_bit = (wide >> shift) & 1 == 1;
    let round_bit = (wide >> (shift - 1)) & 1 == 1;
    let extra_bits_mask = (1_u128 << (shift - 1)) - 1;
    let has_tail_bits = !has_zero_tail || wide & extra_bits_mask != 0;

    let shifted = value.checked_shr(shift).unwrap_or(0);
    shifted + u64::from(should_round_up(lsb_bit, round_bit, has_tail_bits))
}

/// Round-to-nearest, ties-to-even.
///
/// Round up when past the midpoint, or exactly on it with an odd retained
/// least significant bit.
pub(crate) const fn should_round_up(lsb_bit: bool, round_bit: bool, has_tail_bits: bool) -> bool {
    round_bit && (has_tail_bits || lsb_bit)
}
