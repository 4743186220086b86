//! The per-value codecs the streaming drivers are generic over.

use crate::encoders::{float12, uint12};

/// A value type carried as one 12-bit unit (two Base64 symbols).
pub trait PairCodec {
    /// The in-memory value type.
    type Value: Copy;

    /// Human-readable name used in log output.
    const NAME: &'static str;

    /// Packs a value into its 12-bit pattern. Never fails.
    fn to_bits(value: Self::Value) -> u16;

    /// Unpacks a 12-bit pattern.
    fn from_bits(bits: u16) -> Self::Value;

    /// Writes the two symbols for `value` at `output[offset..offset + 2]`.
    fn encode_into(value: Self::Value, output: &mut [u8], offset: usize) {
        uint12::encode_into(Self::to_bits(value), output, offset);
    }
}

/// Marker for the 12-bit float codec.
#[derive(Debug, Clone, Copy, Default)]
pub struct Float12;

/// Marker for the 12-bit unsigned integer codec.
#[derive(Debug, Clone, Copy, Default)]
pub struct Uint12;

impl PairCodec for Float12 {
    type Value = f64;
    const NAME: &'static str = "float12";

    fn to_bits(value: f64) -> u16 {
        float12::to_bits(value)
    }

    fn from_bits(bits: u16) -> f64 {
        float12::from_bits(bits)
    }
}

impl PairCodec for Uint12 {
    type Value = u16;
    const NAME: &'static str = "uint12";

    /// Values above 4095 are masked to their low 12 bits.
    fn to_bits(value: u16) -> u16 {
        value & uint12::MAX
    }

    fn from_bits(bits: u16) -> u16 {
        bits & uint12::MAX
    }
}
