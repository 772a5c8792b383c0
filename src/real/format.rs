//! IEEE-754 binary interchange formats targeted by the converter.
//!
//! A [`FloatingPointType`] captures the field widths and exponent range of a
//! binary format so that the conversion and assembly code can be written once
//! and instantiated for both `binary32` and `binary64`.

/// Field layout and exponent range of a binary floating-point format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FloatingPointType {
    mantissa_bits: u16,
    exponent_bits: u16,
    max_binary_exponent: i32,
    exponent_bias: i32,
    zero_bits: u64,
    infinity_bits: u64,
}

impl FloatingPointType {
    /// IEEE-754 `binary32` (`f32`).
    pub const SINGLE: Self = Self {
        mantissa_bits: 23,
        exponent_bits: 8,
        max_binary_exponent: 127,
        exponent_bias: 127,
        zero_bits: 0,
        infinity_bits: 0x7F80_0000,
    };

    /// IEEE-754 `binary64` (`f64`).
    pub const DOUBLE: Self = Self {
        mantissa_bits: 52,
        exponent_bits: 11,
        max_binary_exponent: 1023,
        exponent_bias: 1023,
        zero_bits: 0,
        infinity_bits: 0x7FF0_0000_0000_0000,
    };

    /// Number of explicitly stored mantissa bits.
    #[must_use]
    pub const fn mantissa_bits(self) -> u16 {
        self.mantissa_bits
    }

    /// Mantissa width of a normal value, counting the hidden bit.
    #[must_use]
    pub const fn normal_mantissa_bits(self) -> u16 {
        self.mantissa_bits + 1
    }

    /// Width of the biased exponent field.
    #[must_use]
    pub const fn exponent_bits(self) -> u16 {
        self.exponent_bits
    }

    /// Largest unbiased exponent of a finite value.
    #[must_use]
    pub const fn max_binary_exponent(self) -> i32 {
        self.max_binary_exponent
    }

    /// Smallest unbiased exponent of a normal value.
    #[must_use]
    pub const fn min_binary_exponent(self) -> i32 {
        1 - self.max_binary_exponent
    }

    /// Bias added to the unbiased exponent when packing.
    #[must_use]
    pub const fn exponent_bias(self) -> i32 {
        self.exponent_bias
    }

    /// Decimal exponent beyond which a value cannot be finite (or nonzero).
    ///
    /// Each decimal digit contributes a little over three bits, so anything
    /// past this bound saturates regardless of the remaining digits.
    #[must_use]
    pub const fn overflow_decimal_exponent(self) -> u32 {
        #[expect(
            clippy::integer_division,
            clippy::integer_division_remainder_used,
            reason = "conservative bound, truncation intended"
        )]
        let bound = (self.max_binary_exponent + 2 * (self.mantissa_bits as i32 + 1)) / 3;
        bound.unsigned_abs()
    }

    /// Mask selecting the stored mantissa field.
    #[must_use]
    pub const fn denormal_mantissa_mask(self) -> u64 {
        (1 << self.mantissa_bits) - 1
    }

    /// Mask selecting a normal mantissa including the hidden bit.
    #[must_use]
    pub const fn normal_mantissa_mask(self) -> u64 {
        (1 << self.normal_mantissa_bits()) - 1
    }

    /// Bit pattern of positive zero.
    #[must_use]
    pub const fn zero_bits(self) -> u64 {
        self.zero_bits
    }

    /// Bit pattern of positive infinity.
    #[must_use]
    pub const fn infinity_bits(self) -> u64 {
        self.infinity_bits
    }
}
