use super::Float12Parts;
use super::layout::{
    EXPONENT_MAX, EXPONENT_MIN, FRACTION_BITS, FRACTION_MASK, SIGNIFICAND_MAX, SIGNIFICAND_MIN,
};
use crate::encoders::uint12;

/// Splits `value` into Float12 fields.
///
/// Zero, NaN and infinities map to [`Float12Parts::ZERO`]. Magnitudes below
/// the smallest exponent underflow to zero, magnitudes above the largest
/// saturate at `63 × 2^26` with the sign kept. The significand is
/// truncated, never rounded.
pub fn parts_of(value: f64) -> Float12Parts {
    if value == 0.0 || !value.is_finite() {
        return Float12Parts::ZERO;
    }

    let negative = value < 0.0;
    let magnitude = value.abs();

    // floor, not round: rounding can push the leading bit out of the window
    let estimate = magnitude.log2().floor();
    if estimate < EXPONENT_MIN as f64 - 1.0 {
        return Float12Parts::ZERO;
    }
    if estimate > EXPONENT_MAX as f64 + 1.0 {
        return saturated(negative);
    }

    let mut exponent = estimate as i32;
    let mut significand = scaled_significand(magnitude, exponent);

    // log2 may be off by an ulp right next to a power of two
    if significand < SIGNIFICAND_MIN as f64 {
        exponent -= 1;
        significand = scaled_significand(magnitude, exponent);
    } else if significand > SIGNIFICAND_MAX as f64 {
        exponent += 1;
        significand = scaled_significand(magnitude, exponent);
    }

    if exponent < EXPONENT_MIN {
        return Float12Parts::ZERO;
    }
    if exponent > EXPONENT_MAX {
        return saturated(negative);
    }

    Float12Parts {
        negative,
        exponent,
        fraction: (significand as u16) & FRACTION_MASK,
    }
}

/// Encodes `value` into its 12-bit pattern.
pub fn to_bits(value: f64) -> u16 {
    parts_of(value).to_bits()
}

/// Encodes `value` as two Base64 symbols.
pub fn encode_number(value: f64) -> [u8; 2] {
    uint12::encode(to_bits(value))
}

/// Writes the two symbols for `value` at `output[offset..offset + 2]`.
///
/// # Panics
///
/// Panics if the slot does not fit in `output`.
pub fn encode_number_into(value: f64, output: &mut [u8], offset: usize) {
    uint12::encode_into(to_bits(value), output, offset);
}

fn saturated(negative: bool) -> Float12Parts {
    Float12Parts {
        negative,
        ..Float12Parts::MAX
    }
}

fn scaled_significand(magnitude: f64, exponent: i32) -> f64 {
    (magnitude * 2f64.powi(FRACTION_BITS as i32 - exponent)).trunc()
}
