//! The fixed 64-symbol Base64 alphabet shared by every codec in the crate.
//!
//! Symbols `A-Z`, `a-z`, `0-9`, `+`, `/` carry the 6-bit values 0 through 63
//! in that order. Decoding also accepts the URL-safe aliases `-` (62) and
//! `_` (63); encoding never produces them. Every other byte maps to
//! [`INVALID`], which stream decoders treat as a separator to skip.

/// Marker stored in [`DECODE_TABLE`] for bytes outside the alphabet.
pub const INVALID: u8 = 255;

/// Number of symbols in the alphabet.
pub const SYMBOL_COUNT: usize = 64;

/// Bits carried by one symbol.
pub const BITS_PER_SYMBOL: u32 = 6;

/// 6-bit value → symbol.
pub const ENCODE_TABLE: [u8; SYMBOL_COUNT] =
    *b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

/// Byte → 6-bit value, or [`INVALID`].
pub const DECODE_TABLE: [u8; 256] = build_decode_table();

const fn build_decode_table() -> [u8; 256] {
    let mut table = [INVALID; 256];
    let mut i = 0;
    while i < SYMBOL_COUNT {
        table[ENCODE_TABLE[i] as usize] = i as u8;
        i += 1;
    }
    // URL-safe aliases
    table[b'-' as usize] = 62;
    table[b'_' as usize] = 63;
    table
}

/// Returns the symbol for the low 6 bits of `value`.
#[inline]
pub const fn encode_uint6(value: u8) -> u8 {
    ENCODE_TABLE[(value & 0x3F) as usize]
}

/// Returns the 6-bit value of `symbol`, or `None` if it is not part of the
/// alphabet.
#[inline]
pub const fn decode_symbol(symbol: u8) -> Option<u8> {
    match DECODE_TABLE[symbol as usize] {
        INVALID => None,
        value => Some(value),
    }
}

#[inline]
pub const fn is_valid_symbol(symbol: u8) -> bool {
    DECODE_TABLE[symbol as usize] != INVALID
}
