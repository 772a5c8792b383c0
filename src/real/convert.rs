//! Correctly rounded decimal to binary conversion.
//!
//! The decimal mantissa is split at the decimal point into an integer part
//! and a fractional part. Both are evaluated exactly with `num-bigint`; the
//! fractional part only contributes the bits the integer part could not
//! supply, and the exactness of the division remainder decides ties.

use num_bigint::BigUint;
use num_traits::{One, Zero};

use super::{ConvertedBits, DecimalFloatingPointString, FloatingPointType};

/// Convert a normalised decimal string into the bits of `target`.
pub(crate) fn convert_decimal_to_bits(
    data: &DecimalFloatingPointString,
    target: FloatingPointType,
) -> ConvertedBits {
    let digits = data.mantissa().as_bytes();
    if digits.is_empty() {
        return ConvertedBits::no_digits(target);
    }
    log::trace!("converting 0.{}e{}", data.mantissa(), data.exponent());

    // One bit beyond the mantissa decides rounding.
    let required_bits = u64::from(target.normal_mantissa_bits()) + 1;

    let digit_count = digits.len();
    let positive_exponent = usize::try_from(data.exponent().max(0)).unwrap_or(usize::MAX);
    let integer_digits_present = positive_exponent.min(digit_count);
    let integer_digits_missing = positive_exponent - integer_digits_present;
    let (integer_digits, fractional_digits) = digits.split_at(integer_digits_present);

    let mut integer_value = accumulate_digits(integer_digits);
    if integer_digits_missing > 0 {
        let Some(padding) = u32::try_from(integer_digits_missing)
            .ok()
            .filter(|missing| *missing <= target.overflow_decimal_exponent())
        else {
            log::debug!("decimal exponent {} overflows", data.exponent());
            return ConvertedBits::overflow(target);
        };
        integer_value *= power_of_ten(padding);
    }

    let integer_bits = integer_value.bits();
    if integer_bits >= required_bits || fractional_digits.is_empty() {
        return big_integer_to_bits(
            &integer_value,
            integer_bits,
            !fractional_digits.is_empty(),
            target,
        );
    }

    // The fraction is numerator / 10^denominator_exponent.
    let fractional_count = u64::try_from(fractional_digits.len()).unwrap_or(u64::MAX);
    let leading_fraction_zeros = u64::from(data.exponent().min(0).unsigned_abs());
    let denominator_exponent = fractional_count.saturating_add(leading_fraction_zeros);
    if integer_bits == 0 && leading_fraction_zeros > u64::from(target.overflow_decimal_exponent()) {
        log::debug!("decimal exponent {} underflows", data.exponent());
        return ConvertedBits::underflow(target);
    }
    let Ok(denominator_exponent) = u32::try_from(denominator_exponent) else {
        return ConvertedBits::underflow(target);
    };

    let mut numerator = accumulate_digits(fractional_digits);
    let denominator = power_of_ten(denominator_exponent);

    // Align the numerator's top bit with the denominator's so each further
    // left shift yields exactly one quotient bit.
    let fractional_shift = denominator.bits().saturating_sub(numerator.bits());
    if fractional_shift > 0 {
        numerator <<= fractional_shift;
    }

    let required_fractional_bits = required_bits - integer_bits;
    let mut remaining_bits = required_fractional_bits;
    if integer_bits > 0 {
        // The fraction starts below every bit we could keep; it can only
        // make the tail inexact.
        if fractional_shift > remaining_bits {
            return big_integer_to_bits(&integer_value, integer_bits, true, target);
        }
        remaining_bits -= fractional_shift;
    }

    let fractional_exponent = if numerator < denominator {
        fractional_shift + 1
    } else {
        fractional_shift
    };

    numerator <<= remaining_bits;
    let quotient = &numerator / &denominator;
    let remainder = &numerator % &denominator;
    let mut fractional_mantissa = low_u64(&quotient);
    let mut has_zero_tail = remainder.is_zero();

    // Normalisation can yield one bit more than requested.
    let fractional_mantissa_bits = u64::from(u64::BITS - fractional_mantissa.leading_zeros());
    if fractional_mantissa_bits > required_fractional_bits {
        let excess = u32::try_from(fractional_mantissa_bits - required_fractional_bits)
            .unwrap_or(u64::BITS);
        let dropped_mask = 1_u64.checked_shl(excess).map_or(u64::MAX, |bit| bit - 1);
        has_zero_tail = has_zero_tail && fractional_mantissa & dropped_mask == 0;
        fractional_mantissa = fractional_mantissa.checked_shr(excess).unwrap_or(0);
    }

    let integer_shift = u32::try_from(required_fractional_bits).unwrap_or(u64::BITS);
    let complete_mantissa = low_u64(&integer_value)
        .checked_shl(integer_shift)
        .unwrap_or(0)
        + fractional_mantissa;

    // Both branches subtract one more for the extra rounding bit.
    let final_exponent = if integer_bits > 0 {
        to_i32(integer_bits) - 2
    } else {
        -to_i32(fractional_exponent) - 1
    };

    target.assemble(complete_mantissa, final_exponent, has_zero_tail)
}

/// Assemble an integer value, keeping only its top 64 bits.
fn big_integer_to_bits(
    value: &BigUint,
    bits: u64,
    has_nonzero_fraction: bool,
    target: FloatingPointType,
) -> ConvertedBits {
    let base_exponent = i32::from(target.mantissa_bits());

    if bits <= u64::from(u64::BITS) {
        return target.assemble(low_u64(value), base_exponent, !has_nonzero_fraction);
    }

    let shift = bits - u64::from(u64::BITS);
    let top = low_u64(&(value >> shift));
    let has_zero_tail =
        !has_nonzero_fraction && value.trailing_zeros().is_some_and(|zeros| zeros >= shift);
    target.assemble(top, base_exponent.saturating_add(to_i32(shift)), has_zero_tail)
}

fn accumulate_digits(digits: &[u8]) -> BigUint {
    BigUint::parse_bytes(digits, 10).unwrap_or_default()
}

fn power_of_ten(exponent: u32) -> BigUint {
    if exponent == 0 {
        return BigUint::one();
    }
    BigUint::from(10_u32).pow(exponent)
}

fn low_u64(value: &BigUint) -> u64 {
    value.iter_u64_digits().next().unwrap_or(0)
}

fn to_i32(value: u64) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}
