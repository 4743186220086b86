use crate::core::alphabet::decode_symbol;
use crate::core::config::{DEFAULT_SUSPEND_COUNT, StreamingSettings};
use crate::encoders::codec::PairCodec;
use std::borrow::Cow;
use std::marker::PhantomData;
use std::mem;

use super::progress::{Progress, Step};

/// Resumable decoder for Base64 text holding a sequence of 12-bit units.
///
/// Each call to [`step`](Self::step) consumes up to `suspend_count` input
/// bytes and returns [`Step::Suspended`] with the current progress, or
/// [`Step::Done`] with every decoded value once the input is exhausted.
///
/// Bytes outside the alphabet (line breaks, spaces, padding) are skipped
/// but still counted as progress. A trailing symbol without a partner is
/// dropped. The output never depends on the suspend count.
pub struct StreamingDecoder<'a, C: PairCodec> {
    input: Cow<'a, [u8]>,
    position: usize,
    lines_to_skip: usize,
    /// High 6 bits of a unit whose second symbol has not been read yet.
    pending: Option<u8>,
    output: Vec<C::Value>,
    progress: Progress,
    suspend_count: usize,
    since_suspend: usize,
    started: bool,
    finished: bool,
    _codec: PhantomData<fn() -> C>,
}

impl<'a, C: PairCodec> StreamingDecoder<'a, C> {
    /// Creates a decoder over borrowed input.
    pub fn new(input: &'a [u8]) -> Self {
        Self::from_cow(Cow::Borrowed(input))
    }

    fn from_cow(input: Cow<'a, [u8]>) -> Self {
        let total = input.len();
        StreamingDecoder {
            input,
            position: 0,
            lines_to_skip: 0,
            pending: None,
            output: Vec::with_capacity(total / 2),
            progress: Progress::new(total),
            suspend_count: DEFAULT_SUSPEND_COUNT,
            since_suspend: 0,
            started: false,
            finished: false,
            _codec: PhantomData,
        }
    }

    /// Discards the first `count` lines (CR, LF and CRLF each end one)
    /// before decoding.
    pub fn with_skip_lines(mut self, count: usize) -> Self {
        self.lines_to_skip = count;
        self
    }

    /// Sets how many input bytes are consumed between suspensions. Zero is
    /// treated as one.
    pub fn with_suspend_count(mut self, count: usize) -> Self {
        self.suspend_count = count.max(1);
        self
    }

    /// Applies the decoder-related streaming settings.
    pub fn with_settings(self, settings: &StreamingSettings) -> Self {
        self.with_skip_lines(settings.skip_line_count)
            .with_suspend_count(settings.suspend_byte_count)
    }

    pub fn progress(&self) -> Progress {
        self.progress
    }

    /// Runs until the next checkpoint or the end of the input.
    ///
    /// Calling this again after [`Step::Done`] returns `Done` with an empty
    /// buffer.
    pub fn step(&mut self) -> Step<Vec<C::Value>> {
        if self.finished {
            return Step::Done(Vec::new());
        }
        if !self.started {
            self.started = true;
            log::debug!(
                "{} decode: {} input bytes, skipping {} lines, suspending every {} bytes",
                C::NAME,
                self.input.len(),
                self.lines_to_skip,
                self.suspend_count
            );
        }

        while self.position < self.input.len() {
            let consumed = if self.lines_to_skip > 0 {
                self.skip_line_byte()
            } else {
                self.decode_byte()
            };
            self.progress.advance(consumed);
            self.since_suspend += consumed;

            // never suspend between the two symbols of a unit
            if self.since_suspend >= self.suspend_count
                && self.pending.is_none()
                && self.position < self.input.len()
            {
                self.since_suspend = 0;
                log::trace!("{} decode suspended at {}", C::NAME, self.progress);
                return Step::Suspended(self.progress);
            }
        }

        self.finish_step()
    }

    /// Drives the decoder to completion, discarding checkpoints.
    pub fn finish(mut self) -> Vec<C::Value> {
        loop {
            if let Step::Done(output) = self.step() {
                return output;
            }
        }
    }

    fn skip_line_byte(&mut self) -> usize {
        let byte = self.input[self.position];
        self.position += 1;
        match byte {
            b'\r' => {
                self.lines_to_skip -= 1;
                if self.input.get(self.position) == Some(&b'\n') {
                    self.position += 1;
                    return 2;
                }
            }
            b'\n' => self.lines_to_skip -= 1,
            _ => {}
        }
        1
    }

    fn decode_byte(&mut self) -> usize {
        let byte = self.input[self.position];
        self.position += 1;
        if let Some(value) = decode_symbol(byte) {
            match self.pending.take() {
                None => self.pending = Some(value),
                Some(high) => {
                    let bits = ((high as u16) << 6) | value as u16;
                    self.output.push(C::from_bits(bits));
                }
            }
        }
        1
    }

    fn finish_step(&mut self) -> Step<Vec<C::Value>> {
        self.finished = true;
        if self.pending.take().is_some() {
            log::debug!("{} decode: dropped trailing unpaired symbol", C::NAME);
        }
        let mut output = mem::take(&mut self.output);
        output.shrink_to_fit();
        log::debug!(
            "{} decode finished: {} values from {} bytes",
            C::NAME,
            output.len(),
            self.progress.total()
        );
        Step::Done(output)
    }
}

impl<C: PairCodec> StreamingDecoder<'static, C> {
    /// Creates a decoder over several text parts, read as if concatenated.
    pub fn from_parts<S: AsRef<str>>(parts: &[S]) -> Self {
        let joined: Vec<u8> = parts
            .iter()
            .flat_map(|part| part.as_ref().bytes())
            .collect();
        Self::from_cow(Cow::Owned(joined))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoders::codec::{Float12, Uint12};

    fn decode_all(input: &str, skip_lines: usize) -> Vec<f64> {
        StreamingDecoder::<Float12>::new(input.as_bytes())
            .with_skip_lines(skip_lines)
            .finish()
    }

    #[test]
    fn test_decode_simple() {
        assert_eq!(decode_all("QAS/xg", 0), vec![1.0, 63.0, -8.0]);
    }

    #[test]
    fn test_empty_input() {
        let mut decoder = StreamingDecoder::<Float12>::new(b"");
        assert_eq!(decoder.step(), Step::Done(Vec::new()));
        assert!(decoder.progress().is_complete());
    }

    #[test]
    fn test_skip_one_line_crlf() {
        let input = "AB\r\nCD\r\nEF";
        let mut decoder = StreamingDecoder::<Uint12>::new(input.as_bytes()).with_skip_lines(1);
        let output = match decoder.step() {
            Step::Done(output) => output,
            Step::Suspended(_) => panic!("small input should finish in one step"),
        };
        let expected: Vec<u16> = ["CD", "EF"]
            .iter()
            .map(|pair| crate::encoders::uint12::decode(pair.as_bytes()[0], pair.as_bytes()[1]))
            .collect();
        assert_eq!(output, expected);
        assert_eq!(decoder.progress().processed(), input.len());
    }

    #[test]
    fn test_skip_lines_lf_and_cr() {
        let lf = decode_all("junk\nQA", 1);
        let cr = decode_all("junk\rQA", 1);
        assert_eq!(lf, vec![1.0]);
        assert_eq!(cr, vec![1.0]);
    }

    #[test]
    fn test_skip_more_lines_than_present() {
        assert_eq!(decode_all("QA\nQA", 5), Vec::<f64>::new());
    }

    #[test]
    fn test_skip_line_does_not_eat_next_line_start() {
        // CR followed by a symbol: only the CR ends the line
        assert_eq!(decode_all("xx\rQA\nS/", 1), vec![1.0, 63.0]);
    }

    #[test]
    fn test_invalid_bytes_are_skipped() {
        let input = "A\nB C";
        let output = StreamingDecoder::<Uint12>::new(input.as_bytes()).finish();
        // A and B pair up, C is an unpaired trailing symbol
        assert_eq!(output, vec![crate::encoders::uint12::decode(b'A', b'B')]);
    }

    #[test]
    fn test_trailing_symbol_dropped() {
        assert_eq!(decode_all("QAS", 0), vec![1.0]);
    }

    #[test]
    fn test_url_safe_input() {
        let standard = StreamingDecoder::<Uint12>::new(b"+/").finish();
        let url_safe = StreamingDecoder::<Uint12>::new(b"-_").finish();
        assert_eq!(standard, url_safe);
    }

    #[test]
    fn test_suspends_at_checkpoints() {
        let input = "QA".repeat(10);
        let mut decoder = StreamingDecoder::<Float12>::new(input.as_bytes()).with_suspend_count(4);
        let mut checkpoints = Vec::new();
        let output = loop {
            match decoder.step() {
                Step::Suspended(progress) => checkpoints.push(progress.processed()),
                Step::Done(output) => break output,
            }
        };
        assert_eq!(checkpoints, vec![4, 8, 12, 16]);
        assert_eq!(output, vec![1.0; 10]);
    }

    #[test]
    fn test_never_suspends_mid_unit() {
        // odd suspend count: the pending symbol must be paired first
        let input = "QA".repeat(6);
        let mut decoder = StreamingDecoder::<Float12>::new(input.as_bytes()).with_suspend_count(3);
        while let Step::Suspended(progress) = decoder.step() {
            assert_eq!(progress.processed() % 2, 0);
        }
    }

    #[test]
    fn test_step_after_done() {
        let mut decoder = StreamingDecoder::<Float12>::new(b"QA");
        assert_eq!(decoder.step(), Step::Done(vec![1.0]));
        assert_eq!(decoder.step(), Step::Done(Vec::new()));
    }

    #[test]
    fn test_from_parts_concatenates() {
        let parts = ["Q", "AS", "/"];
        let output = StreamingDecoder::<Float12>::from_parts(&parts).finish();
        assert_eq!(output, vec![1.0, 63.0]);
    }

    #[test]
    fn test_with_settings() {
        let settings = StreamingSettings {
            suspend_byte_count: 2,
            suspend_element_count: 99,
            skip_line_count: 1,
        };
        let mut decoder =
            StreamingDecoder::<Float12>::new(b"header\nQAQA").with_settings(&settings);
        assert!(!decoder.step().is_done());
        let mut output = None;
        while output.is_none() {
            output = decoder.step().into_done();
        }
        assert_eq!(output, Some(vec![1.0, 1.0]));
    }
}
