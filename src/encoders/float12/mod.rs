//! A 12-bit floating-point format carried as two Base64 symbols.
//!
//! One sign bit, six exponent bits (stored with a +32 bias) and five
//! fraction bits under an implicit leading one, so every non-zero value is
//! `±(32 + fraction) × 2^(exponent - 5)`. There are no NaNs, infinities or
//! subnormals. The all-zero exponent/fraction pattern is reserved for zero,
//! which means the smallest normal magnitude (`2^-32`) cannot be
//! represented and anything below `33 × 2^-37` encodes as zero.

mod decoder;
mod encoder;
pub mod layout;

pub use decoder::{decode_number, decode_number_checked, from_bits};
pub use encoder::{encode_number, encode_number_into, parts_of, to_bits};

use layout::{
    EXPONENT_BIAS, EXPONENT_MASK, EXPONENT_MAX, EXPONENT_MIN, EXPONENT_SHIFT, FRACTION_BITS,
    FRACTION_MASK, IMPLICIT_BIT, SIGN_SHIFT,
};
use std::fmt;

/// The three fields of a Float12 value, with the exponent unbiased.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Float12Parts {
    pub negative: bool,
    /// Signed exponent in `EXPONENT_MIN..=EXPONENT_MAX`.
    pub exponent: i32,
    /// Fraction bits without the implicit leading one, `0..=31`.
    pub fraction: u16,
}

impl Float12Parts {
    /// The reserved zero pattern.
    pub const ZERO: Self = Self {
        negative: false,
        exponent: EXPONENT_MIN,
        fraction: 0,
    };

    /// Largest positive magnitude.
    pub const MAX: Self = Self {
        negative: false,
        exponent: EXPONENT_MAX,
        fraction: FRACTION_MASK,
    };

    /// Splits a 12-bit pattern into its fields. Bits above 11 are ignored.
    pub const fn from_bits(bits: u16) -> Self {
        let stored = (bits >> EXPONENT_SHIFT) & EXPONENT_MASK;
        Self {
            negative: (bits >> SIGN_SHIFT) & 1 == 1,
            exponent: stored as i32 - EXPONENT_BIAS,
            fraction: bits & FRACTION_MASK,
        }
    }

    /// Packs the fields into a 12-bit pattern. Out-of-range fields are
    /// masked to their widths.
    pub const fn to_bits(self) -> u16 {
        let sign = (self.negative as u16) << SIGN_SHIFT;
        let stored = (self.stored_exponent() & EXPONENT_MASK) << EXPONENT_SHIFT;
        sign | stored | (self.fraction & FRACTION_MASK)
    }

    /// The exponent as written on the wire (`exponent + 32`).
    pub const fn stored_exponent(self) -> u16 {
        (self.exponent + EXPONENT_BIAS) as u16
    }

    /// The fraction with the implicit leading bit restored, `32..=63`.
    pub const fn significand(self) -> u16 {
        (self.fraction & FRACTION_MASK) | IMPLICIT_BIT
    }

    /// True for the reserved zero pattern, whatever the sign bit says.
    pub const fn is_zero(self) -> bool {
        self.stored_exponent() & EXPONENT_MASK == 0 && self.fraction & FRACTION_MASK == 0
    }

    /// Reconstructs the numeric value.
    pub fn value(self) -> f64 {
        if self.is_zero() {
            return 0.0;
        }
        let magnitude =
            self.significand() as f64 * 2f64.powi(self.exponent - FRACTION_BITS as i32);
        if self.negative { -magnitude } else { magnitude }
    }
}

impl fmt::Display for Float12Parts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "sign={} exponent={} (stored {}) fraction={}",
            self.negative as u8,
            self.exponent,
            self.stored_exponent(),
            self.fraction
        )
    }
}
