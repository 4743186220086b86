//! Bit layout of the 12-bit float: `[sign:1][exponent:6][fraction:5]`, MSB
//! first, with an implicit leading significand bit.

use crate::core::bitmask::{mask_of_width, mask_of_width_shifted};

pub const FRACTION_BITS: u32 = 5;
pub const IMPLICIT_BITS: u32 = 1;
pub const EXPONENT_BITS: u32 = 6;
pub const SIGN_BITS: u32 = 1;
pub const TOTAL_BITS: u32 = SIGN_BITS + EXPONENT_BITS + FRACTION_BITS;

/// Fraction plus the implicit leading one.
pub const SIGNIFICAND_BITS: u32 = FRACTION_BITS + IMPLICIT_BITS;

pub const FRACTION_SHIFT: u32 = 0;
pub const EXPONENT_SHIFT: u32 = FRACTION_SHIFT + FRACTION_BITS;
pub const SIGN_SHIFT: u32 = EXPONENT_SHIFT + EXPONENT_BITS;

pub const FRACTION_MASK: u16 = mask_of_width(FRACTION_BITS) as u16;
pub const EXPONENT_MASK: u16 = mask_of_width(EXPONENT_BITS) as u16;

pub const FRACTION_FIELD_MASK: u16 = mask_of_width_shifted(FRACTION_BITS, FRACTION_SHIFT) as u16;
pub const EXPONENT_FIELD_MASK: u16 = mask_of_width_shifted(EXPONENT_BITS, EXPONENT_SHIFT) as u16;
pub const SIGN_FIELD_MASK: u16 = mask_of_width_shifted(SIGN_BITS, SIGN_SHIFT) as u16;

/// The implicit leading significand bit, re-inserted on decode.
pub const IMPLICIT_BIT: u16 = 1 << FRACTION_BITS;

/// Stored exponent = signed exponent + bias.
pub const EXPONENT_BIAS: i32 = 1 << (EXPONENT_BITS - 1);
pub const EXPONENT_MIN: i32 = -EXPONENT_BIAS;
pub const EXPONENT_MAX: i32 = EXPONENT_MASK as i32 - EXPONENT_BIAS;

pub const FRACTION_MIN: u16 = 0;
pub const FRACTION_MAX: u16 = FRACTION_MASK;

pub const SIGNIFICAND_MIN: u16 = IMPLICIT_BIT;
pub const SIGNIFICAND_MAX: u16 = IMPLICIT_BIT | FRACTION_MASK;

/// Largest representable magnitude: `63 × 2^26`.
pub const MAX_MAGNITUDE: f64 =
    SIGNIFICAND_MAX as f64 * (1u64 << (EXPONENT_MAX - FRACTION_BITS as i32)) as f64;
