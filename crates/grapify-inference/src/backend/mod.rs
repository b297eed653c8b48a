//! Inference backend implementations.

#[cfg(feature = "native")]
pub mod ort;

#[cfg(feature = "wasm")]
pub mod tract;

use ndarray::ArrayD;

use crate::Result;

/// Trait for ONNX classification backends.
///
/// Abstracts over different ONNX runtime implementations so the same
/// classifier code runs on native platforms (via ort) and in the browser
/// (via tract). The classifier contract is a single f32 input tensor and a
/// single f32 output tensor.
pub trait InferenceBackend: Send + Sync {
    /// Run the model on one input tensor and return its first output.
    fn run(&self, input: ArrayD<f32>) -> Result<ArrayD<f32>>;

    /// Get the input names expected by the model.
    fn input_names(&self) -> &[String];

    /// Get the output names produced by the model.
    fn output_names(&self) -> &[String];
}
