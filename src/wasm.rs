//! WebAssembly bindings for float12
//!
//! Provides a JavaScript-friendly API over the one-shot helpers.

use wasm_bindgen::prelude::*;

use crate::encoders::uint12;

/// Error type for WASM operations
#[wasm_bindgen]
pub struct WasmError {
    message: String,
}

#[wasm_bindgen]
impl WasmError {
    /// Get the error message
    #[wasm_bindgen(getter)]
    pub fn message(&self) -> String {
        self.message.clone()
    }
}

impl From<String> for WasmError {
    fn from(message: String) -> Self {
        Self { message }
    }
}

/// Encode numbers as Float12 text (two symbols per number)
#[wasm_bindgen]
pub fn encode_float12(values: &[f64]) -> String {
    crate::encode_float12(values)
}

/// Decode Float12 text, discarding `skip_lines` leading lines
#[wasm_bindgen]
pub fn decode_float12(text: &str, skip_lines: usize) -> Vec<f64> {
    crate::decode_float12(text, skip_lines)
}

/// Encode integers in `0..=4095` as Uint12 text
///
/// Unlike the Rust API, out-of-range values are rejected rather than masked,
/// since JavaScript callers cannot see the truncation.
#[wasm_bindgen]
pub fn encode_uint12(values: &[u16]) -> Result<String, WasmError> {
    if let Some((index, value)) = values
        .iter()
        .enumerate()
        .find(|(_, value)| **value > uint12::MAX)
    {
        return Err(WasmError::from(format!(
            "value {} at index {} does not fit in 12 bits",
            value, index
        )));
    }
    Ok(crate::encode_uint12(values))
}

/// Decode Uint12 text
#[wasm_bindgen]
pub fn decode_uint12(text: &str) -> Vec<u16> {
    crate::decode_uint12(text)
}
