//! All-ones bit masks used to build the field layouts.

/// Returns a value with the low `bit_count` bits set (`2^bit_count - 1`).
///
/// `bit_count` may range over `0..=64`; 64 yields `u64::MAX`.
pub const fn mask_of_width(bit_count: u32) -> u64 {
    if bit_count >= u64::BITS {
        u64::MAX
    } else {
        (1u64 << bit_count) - 1
    }
}

/// Returns `mask_of_width(bit_count) << shift`.
pub const fn mask_of_width_shifted(bit_count: u32, shift: u32) -> u64 {
    mask_of_width(bit_count) << shift
}
