//! One-shot helpers over the streaming drivers, plus parsing of numeric
//! text input.

use crate::encoders::streaming::{Float12Decoder, Float12Encoder, Uint12Decoder, Uint12Encoder};
use crate::encoders::uint12;
use crate::errors::InputError;

/// Encodes every value as two Float12 symbols.
pub fn encode_float12(values: &[f64]) -> String {
    into_text(Float12Encoder::new(values).finish())
}

/// Decodes Float12 text after discarding `skip_lines` leading lines.
///
/// Line breaks and other bytes outside the alphabet are ignored.
pub fn decode_float12(text: &str, skip_lines: usize) -> Vec<f64> {
    Float12Decoder::new(text.as_bytes())
        .with_skip_lines(skip_lines)
        .finish()
}

/// Encodes every value as two Uint12 symbols; values above 4095 are masked
/// to their low 12 bits.
pub fn encode_uint12(values: &[u16]) -> String {
    into_text(Uint12Encoder::new(values).finish())
}

/// Decodes Uint12 text, ignoring bytes outside the alphabet.
pub fn decode_uint12(text: &str) -> Vec<u16> {
    Uint12Decoder::new(text.as_bytes()).finish()
}

/// Parses numbers separated by whitespace and/or commas.
pub fn parse_floats(text: &str) -> Result<Vec<f64>, InputError> {
    tokens(text)
        .map(|(line, token)| {
            token.parse::<f64>().map_err(|_| InputError::InvalidNumber {
                token: token.to_string(),
                line,
                expected: "number",
            })
        })
        .collect()
}

/// Parses unsigned integers in `0..=4095` separated by whitespace and/or
/// commas.
pub fn parse_uint12s(text: &str) -> Result<Vec<u16>, InputError> {
    tokens(text)
        .map(|(line, token)| {
            let value = token
                .parse::<u64>()
                .map_err(|_| InputError::InvalidNumber {
                    token: token.to_string(),
                    line,
                    expected: "unsigned integer",
                })?;
            if value > uint12::MAX as u64 {
                return Err(InputError::OutOfRange { value, line });
            }
            Ok(value as u16)
        })
        .collect()
}

/// Non-empty tokens with their 1-based line numbers.
fn tokens(text: &str) -> impl Iterator<Item = (usize, &str)> {
    text.lines().enumerate().flat_map(|(index, line)| {
        line.split(|c: char| c == ',' || c.is_whitespace())
            .filter(|token| !token.is_empty())
            .map(move |token| (index + 1, token))
    })
}

/// Encoder output is always ASCII.
pub(crate) fn into_text(encoded: Vec<u8>) -> String {
    String::from_utf8(encoded)
        .unwrap_or_else(|e| String::from_utf8_lossy(e.as_bytes()).into_owned())
}
