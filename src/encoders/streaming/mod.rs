//! Cooperative, chunked drivers for encoding and decoding large arrays.
//!
//! The drivers are plain state machines: the caller calls `step()` until it
//! returns [`Step::Done`], and may do other work (or give up) whenever it
//! gets a [`Step::Suspended`] checkpoint back.

mod decoder;
mod encoder;
mod progress;

pub use decoder::StreamingDecoder;
pub use encoder::StreamingEncoder;
pub use progress::{Progress, Step};

use crate::encoders::codec::{Float12, Uint12};

pub type Float12Decoder<'a> = StreamingDecoder<'a, Float12>;
pub type Float12Encoder<'a> = StreamingEncoder<'a, Float12>;
pub type Uint12Decoder<'a> = StreamingDecoder<'a, Uint12>;
pub type Uint12Encoder<'a> = StreamingEncoder<'a, Uint12>;

/// Inserts a `\n` after every `width` symbols of encoded output.
///
/// Decoders skip the line breaks, so wrapped text decodes to the same
/// values. A width of zero leaves the text on one line.
pub fn wrap_lines(encoded: &[u8], width: usize) -> Vec<u8> {
    if width == 0 || encoded.len() <= width {
        return encoded.to_vec();
    }
    let mut wrapped = Vec::with_capacity(encoded.len() + encoded.len() / width);
    for (i, line) in encoded.chunks(width).enumerate() {
        if i > 0 {
            wrapped.push(b'\n');
        }
        wrapped.extend_from_slice(line);
    }
    wrapped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_values() -> Vec<f64> {
        (0..5000)
            .map(|i| {
                let x = i as f64;
                (x * 0.731).sin() * 10f64.powi((i % 13) as i32 - 6)
            })
            .collect()
    }

    #[test]
    fn test_chunk_size_does_not_change_output() {
        let values = sample_values();
        let reference = Float12Encoder::new(&values).finish();

        for suspend in [1, 2, 3, 7, 64, 1000, 10240] {
            let encoded = Float12Encoder::new(&values)
                .with_suspend_count(suspend)
                .finish();
            assert_eq!(encoded, reference, "encode suspend {}", suspend);
        }

        let text = wrap_lines(&reference, 76);
        let decoded_reference = Float12Decoder::new(&text).finish();
        assert_eq!(decoded_reference.len(), values.len());

        for suspend in [1, 2, 3, 7, 64, 1000, 10240] {
            let decoded = Float12Decoder::new(&text)
                .with_suspend_count(suspend)
                .finish();
            assert_eq!(decoded, decoded_reference, "decode suspend {}", suspend);
        }
    }

    #[test]
    fn test_decode_reencodes_identically() {
        let values = sample_values();
        let encoded = Float12Encoder::new(&values).finish();
        let decoded = Float12Decoder::new(&encoded).finish();
        assert_eq!(Float12Encoder::new(&decoded).finish(), encoded);
    }

    #[test]
    fn test_progress_is_monotonic() {
        let values = sample_values();
        let encoded = wrap_lines(&Float12Encoder::new(&values).finish(), 60);
        let mut decoder = Float12Decoder::new(&encoded).with_suspend_count(100);
        let mut last = 0;
        while let Step::Suspended(progress) = decoder.step() {
            assert!(progress.processed() > last);
            assert_eq!(progress.total(), encoded.len());
            last = progress.processed();
        }
        assert!(decoder.progress().is_complete());
    }

    #[test]
    fn test_wrap_lines() {
        assert_eq!(wrap_lines(b"AAAAAA", 4), b"AAAA\nAA");
        assert_eq!(wrap_lines(b"AAAA", 4), b"AAAA");
        assert_eq!(wrap_lines(b"AAAAAAAA", 4), b"AAAA\nAAAA");
        assert_eq!(wrap_lines(b"AAAA", 0), b"AAAA");
    }

    #[test]
    fn test_uint12_roundtrip_through_stream() {
        let values: Vec<u16> = (0..=4095).collect();
        let encoded = wrap_lines(&Uint12Encoder::new(&values).finish(), 64);
        let decoded = Uint12Decoder::new(&encoded).with_suspend_count(17).finish();
        assert_eq!(decoded, values);
    }
}
