use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading or validating a [`CodecConfig`](crate::CodecConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("cannot read config file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration is not valid TOML or has the wrong shape.
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    /// A setting holds a value the codec cannot run with.
    #[error("invalid setting `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Errors raised while reading numeric input for encoding.
#[derive(Debug, Error)]
pub enum InputError {
    /// A token could not be parsed as a number of the expected kind.
    #[error("line {line}: `{token}` is not a valid {expected}")]
    InvalidNumber {
        token: String,
        line: usize,
        expected: &'static str,
    },

    /// A Uint12 input was outside `0..=4095`.
    #[error("line {line}: {value} does not fit in 12 bits (max 4095)")]
    OutOfRange { value: u64, line: usize },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
