//! Convenient re-exports for common usage.
//!
//! # Example
//!
//! ```
//! use float12::prelude::*;
//!
//! let values = [0.5, -2.0, 48.0];
//! let mut encoder = Float12Encoder::new(&values).with_suspend_count(2);
//! let encoded = loop {
//!     match encoder.step() {
//!         Step::Suspended(progress) => println!("{}", progress),
//!         Step::Done(encoded) => break encoded,
//!     }
//! };
//! assert_eq!(Float12Decoder::new(&encoded).finish(), values);
//! ```

pub use crate::{
    // Config
    CodecConfig,
    // Errors
    ConfigError,
    // Streaming
    Float12Decoder,
    Float12Encoder,
    Float12Parts,
    InputError,
    Progress,
    Step,
    Uint12Decoder,
    Uint12Encoder,
    // One-shot helpers
    decode_float12,
    decode_uint12,
    encode_float12,
    encode_uint12,
};
