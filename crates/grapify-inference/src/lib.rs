//! ONNX inference abstraction layer for grapify.
//!
//! The grape-leaf classifier is a single-input, single-output float model,
//! so the interface here is deliberately narrow: one f32 tensor in, one f32
//! tensor out. Two backends implement it:
//! - `ort` with the XNNPACK execution provider for native platforms
//! - `tract` for WASM/browser environments

mod backend;
mod error;

pub use backend::InferenceBackend;
pub use error::InferenceError;

#[cfg(feature = "native")]
pub use backend::ort::OrtBackend;

#[cfg(feature = "wasm")]
pub use backend::tract::TractBackend;

/// Result type for inference operations.
pub type Result<T> = std::result::Result<T, InferenceError>;
