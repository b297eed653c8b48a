//! Classification pipeline: preprocess, run the model, rank the outputs.

mod classifier;
mod prediction;

pub use classifier::{LeafClassifier, rank_predictions};
pub use prediction::{ClassPrediction, PredictionResult};
