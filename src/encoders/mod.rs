pub mod codec;
pub mod float12;
pub mod streaming;
pub mod uint12;
