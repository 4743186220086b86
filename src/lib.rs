//! Compact Base64 codecs for small numbers.
//!
//! Every value is one 12-bit unit written as two symbols of the standard
//! Base64 alphabet: either an unsigned integer in `0..=4095` ([`uint12`]) or
//! a 12-bit float with one sign bit, six exponent bits and five fraction
//! bits ([`float12`]). Large arrays go through the resumable drivers in
//! [`streaming`], which yield progress checkpoints so a host event loop is
//! never blocked for long.
//!
//! ```
//! use float12::{decode_float12, encode_float12};
//!
//! let text = encode_float12(&[1.0, 63.0, -8.0]);
//! assert_eq!(text, "QAS/xg");
//! assert_eq!(decode_float12(&text, 0), vec![1.0, 63.0, -8.0]);
//! ```

mod convenience;
mod core;
mod encoders;
mod errors;

pub mod prelude;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use crate::convenience::{
    decode_float12, decode_uint12, encode_float12, encode_uint12, parse_floats, parse_uint12s,
};
pub use crate::core::alphabet;
pub use crate::core::bitmask::{mask_of_width, mask_of_width_shifted};
pub use crate::core::config::{
    CodecConfig, DEFAULT_SUSPEND_COUNT, OutputSettings, StreamingSettings,
};
pub use crate::encoders::codec::{Float12, PairCodec, Uint12};
pub use crate::encoders::float12::{self, Float12Parts};
pub use crate::encoders::streaming::{
    self, Float12Decoder, Float12Encoder, Progress, Step, StreamingDecoder, StreamingEncoder,
    Uint12Decoder, Uint12Encoder, wrap_lines,
};
pub use crate::encoders::uint12;
pub use crate::errors::{ConfigError, InputError};
