//! Error types for the grapify-core library.

use thiserror::Error;

/// Main error type for the grapify library.
#[derive(Error, Debug)]
pub enum GrapifyError {
    /// Classification pipeline error.
    #[error("classification error: {0}")]
    Classify(#[from] ClassifyError),

    /// Inference error from the inference layer.
    #[error("inference error: {0}")]
    Inference(#[from] grapify_inference::InferenceError),

    /// Image decoding/processing error.
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors produced by the classification pipeline.
#[derive(Error, Debug)]
pub enum ClassifyError {
    /// Image preprocessing failed.
    #[error("preprocessing failed: {0}")]
    Preprocess(String),

    /// Model execution failed.
    #[error("model execution failed: {0}")]
    Inference(String),

    /// The model returned an empty output vector.
    #[error("model returned an empty output")]
    EmptyOutput,

    /// Invalid image format or dimensions.
    #[error("invalid image: {0}")]
    InvalidImage(String),
}

/// Result type for the grapify library.
pub type Result<T> = std::result::Result<T, GrapifyError>;
