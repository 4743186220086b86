use serde::Serialize;
use std::fmt;

/// How far a streaming run has got, in input units.
///
/// Owned by the driver and advanced one unit per consumed input element;
/// callers read it from [`Step::Suspended`] between steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Progress {
    processed: usize,
    total: usize,
}

impl Progress {
    pub fn new(total: usize) -> Self {
        Progress {
            processed: 0,
            total,
        }
    }

    /// Advances by `count` units, never past the total.
    pub fn advance(&mut self, count: usize) {
        self.processed = self.processed.saturating_add(count).min(self.total);
    }

    pub fn processed(&self) -> usize {
        self.processed
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn remaining(&self) -> usize {
        self.total - self.processed
    }

    pub fn is_complete(&self) -> bool {
        self.processed >= self.total
    }

    /// Completion in `0.0..=100.0`. An empty run counts as complete.
    pub fn percentage(&self) -> f64 {
        if self.total == 0 {
            return 100.0;
        }
        self.processed as f64 / self.total as f64 * 100.0
    }
}

impl fmt::Display for Progress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{} ({:.1}%)",
            self.processed,
            self.total,
            self.percentage()
        )
    }
}

/// Result of one call to a streaming driver's `step()`.
#[derive(Debug, Clone, PartialEq)]
pub enum Step<T> {
    /// A chunk of work is done; call `step()` again to continue.
    Suspended(Progress),
    /// All input is consumed; carries the complete output.
    Done(T),
}

impl<T> Step<T> {
    pub fn is_done(&self) -> bool {
        matches!(self, Step::Done(_))
    }

    /// Returns the output if this is the final step.
    pub fn into_done(self) -> Option<T> {
        match self {
            Step::Done(output) => Some(output),
            Step::Suspended(_) => None,
        }
    }
}
