//! 12-bit unsigned integers carried as two Base64 symbols.
//!
//! The first symbol holds bits 11..6 and the second bits 5..0. Values above
//! 4095 are masked to their low 12 bits before encoding.

use crate::core::alphabet::{DECODE_TABLE, INVALID, encode_uint6};
use crate::core::bitmask::mask_of_width;

/// Number of bits in a Uint12 value.
pub const BIT_COUNT: u32 = 12;

/// Largest encodable value.
pub const MAX: u16 = mask_of_width(BIT_COUNT) as u16;

/// Symbols per encoded value.
pub const SYMBOLS_PER_VALUE: usize = 2;

/// Encodes the low 12 bits of `value` as two symbols.
#[inline]
pub const fn encode(value: u16) -> [u8; 2] {
    let value = value & MAX;
    [encode_uint6((value >> 6) as u8), encode_uint6(value as u8)]
}

/// Writes the two symbols for `value` at `output[offset..offset + 2]`.
///
/// # Panics
///
/// Panics if the slot does not fit in `output`.
#[inline]
pub fn encode_into(value: u16, output: &mut [u8], offset: usize) {
    output[offset..offset + SYMBOLS_PER_VALUE].copy_from_slice(&encode(value));
}

/// Decodes two symbols without validating them.
///
/// An invalid symbol yields a meaningless (but still 12-bit) result; use
/// [`decode_checked`] when the input has not been filtered.
#[inline]
pub const fn decode(high: u8, low: u8) -> u16 {
    let high = DECODE_TABLE[high as usize] as u16;
    let low = DECODE_TABLE[low as usize] as u16;
    ((high << 6) | (low & 0x3F)) & MAX
}

/// Decodes two symbols, returning `None` if either is outside the alphabet.
#[inline]
pub const fn decode_checked(high: u8, low: u8) -> Option<u16> {
    if DECODE_TABLE[high as usize] == INVALID || DECODE_TABLE[low as usize] == INVALID {
        return None;
    }
    Some(decode(high, low))
}
