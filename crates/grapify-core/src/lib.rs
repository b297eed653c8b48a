//! Core library for grape-leaf disease classification.
//!
//! This crate provides:
//! - Image preprocessing into the classifier's NHWC float tensor layout
//! - Classification over an ONNX backend with confidence-ranked labels
//! - The five-class grape-leaf label set and bilingual disease knowledge base
//! - Configuration and model inspection helpers

pub mod classify;
pub mod config;
pub mod disease;
pub mod error;
pub mod inspect;
pub mod labels;
pub mod preprocess;

pub use classify::{ClassPrediction, LeafClassifier, PredictionResult, rank_predictions};
pub use config::{ClassifierConfig, GrapifyConfig, ModelConfig};
pub use disease::{DiseaseInfo, Language, disease_info};
pub use error::{ClassifyError, GrapifyError, Result};
pub use inspect::{ModelReport, inspect_model};
pub use labels::{CLASS_NAMES, INPUT_SIZE, default_labels};
pub use preprocess::ImagePreprocessor;

/// Re-export inference types.
pub use grapify_inference::{InferenceBackend, InferenceError};

#[cfg(feature = "native")]
pub use grapify_inference::OrtBackend;

#[cfg(feature = "wasm")]
pub use grapify_inference::TractBackend;
