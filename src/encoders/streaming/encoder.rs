use crate::core::config::{DEFAULT_SUSPEND_COUNT, StreamingSettings};
use crate::encoders::codec::PairCodec;
use crate::encoders::uint12::SYMBOLS_PER_VALUE;
use std::mem;

use super::progress::{Progress, Step};

/// Resumable encoder turning a slice of values into Base64 symbols.
///
/// The output buffer is allocated up front at exactly two bytes per input
/// value and filled in place; [`step`](Self::step) suspends after every
/// `suspend_count` values.
pub struct StreamingEncoder<'a, C: PairCodec> {
    input: &'a [C::Value],
    position: usize,
    output: Vec<u8>,
    progress: Progress,
    suspend_count: usize,
    since_suspend: usize,
    started: bool,
    finished: bool,
}

impl<'a, C: PairCodec> StreamingEncoder<'a, C> {
    pub fn new(input: &'a [C::Value]) -> Self {
        StreamingEncoder {
            input,
            position: 0,
            output: vec![0; input.len() * SYMBOLS_PER_VALUE],
            progress: Progress::new(input.len()),
            suspend_count: DEFAULT_SUSPEND_COUNT,
            since_suspend: 0,
            started: false,
            finished: false,
        }
    }

    /// Sets how many values are encoded between suspensions. Zero is
    /// treated as one.
    pub fn with_suspend_count(mut self, count: usize) -> Self {
        self.suspend_count = count.max(1);
        self
    }

    /// Applies the encoder-related streaming settings.
    pub fn with_settings(self, settings: &StreamingSettings) -> Self {
        self.with_suspend_count(settings.suspend_element_count)
    }

    pub fn progress(&self) -> Progress {
        self.progress
    }

    /// Runs until the next checkpoint or the end of the input.
    ///
    /// Calling this again after [`Step::Done`] returns `Done` with an empty
    /// buffer.
    pub fn step(&mut self) -> Step<Vec<u8>> {
        if self.finished {
            return Step::Done(Vec::new());
        }
        if !self.started {
            self.started = true;
            log::debug!(
                "{} encode: {} values, suspending every {} values",
                C::NAME,
                self.input.len(),
                self.suspend_count
            );
        }

        while self.position < self.input.len() {
            let offset = self.position * SYMBOLS_PER_VALUE;
            C::encode_into(self.input[self.position], &mut self.output, offset);
            self.position += 1;
            self.progress.advance(1);
            self.since_suspend += 1;

            if self.since_suspend >= self.suspend_count && self.position < self.input.len() {
                self.since_suspend = 0;
                log::trace!("{} encode suspended at {}", C::NAME, self.progress);
                return Step::Suspended(self.progress);
            }
        }

        self.finished = true;
        log::debug!(
            "{} encode finished: {} symbols",
            C::NAME,
            self.output.len()
        );
        Step::Done(mem::take(&mut self.output))
    }

    /// Drives the encoder to completion, discarding checkpoints.
    pub fn finish(mut self) -> Vec<u8> {
        loop {
            if let Step::Done(output) = self.step() {
                return output;
            }
        }
    }
}
