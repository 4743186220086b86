use super::Float12Parts;
use crate::encoders::uint12;

/// Decodes a 12-bit pattern. Bits above 11 are ignored.
///
/// The pattern with a zero stored exponent and zero fraction is `0.0`,
/// whatever its sign bit.
pub fn from_bits(bits: u16) -> f64 {
    Float12Parts::from_bits(bits).value()
}

/// Decodes two Base64 symbols without validating them.
pub fn decode_number(high: u8, low: u8) -> f64 {
    from_bits(uint12::decode(high, low))
}

/// Decodes two Base64 symbols, returning `None` if either is outside the
/// alphabet.
pub fn decode_number_checked(high: u8, low: u8) -> Option<f64> {
    uint12::decode_checked(high, low).map(from_bits)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_pattern() {
        assert_eq!(decode_number(b'A', b'A'), 0.0);
        // sign bit set, exponent and fraction zero
        assert_eq!(decode_number(b'g', b'A'), 0.0);
        assert_eq!(from_bits(0x800), 0.0);
    }

    #[test]
    fn test_known_values() {
        assert_eq!(decode_number(b'Q', b'A'), 1.0);
        assert_eq!(decode_number(b'S', b'/'), 63.0);
        assert_eq!(decode_number(b'x', b'g'), -8.0);
        assert_eq!(decode_number(b'/', b'/'), -63.0 * 2f64.powi(26));
    }

    #[test]
    fn test_min_exponent_with_fraction() {
        // stored exponent 0, fraction 1 is the smallest non-zero magnitude
        assert_eq!(from_bits(0x001), 33.0 * 2f64.powi(-37));
        assert_eq!(from_bits(0x801), -33.0 * 2f64.powi(-37));
    }

    #[test]
    fn test_url_safe_aliases() {
        assert_eq!(decode_number(b'-', b'_'), decode_number(b'+', b'/'));
    }

    #[test]
    fn test_checked() {
        assert_eq!(decode_number_checked(b'Q', b'A'), Some(1.0));
        assert_eq!(decode_number_checked(b'Q', b' '), None);
    }

    #[test]
    fn test_high_bits_ignored() {
        assert_eq!(from_bits(0xF000 | 0x400), from_bits(0x400));
    }
}
