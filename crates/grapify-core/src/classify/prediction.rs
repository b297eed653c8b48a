//! Classification result types.

use serde::{Deserialize, Serialize};

/// One class paired with its confidence score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassPrediction {
    /// Class label.
    pub label: String,

    /// Model output value for this class, treated as a pseudo-probability
    /// in `[0, 1]` for display (no calibration guarantee).
    pub confidence: f32,
}

impl ClassPrediction {
    /// Create a new prediction.
    pub fn new(label: impl Into<String>, confidence: f32) -> Self {
        Self {
            label: label.into(),
            confidence,
        }
    }

    /// Confidence formatted as a percentage, e.g. `"97.42%"`.
    pub fn percentage(&self) -> String {
        format!("{:.2}%", self.confidence * 100.0)
    }
}

/// Result of classifying one image.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionResult {
    /// The top prediction (arg-max over the model output).
    pub predicted: ClassPrediction,

    /// All class predictions, sorted by descending confidence.
    pub rankings: Vec<ClassPrediction>,

    /// Raw model output vector, in model output order.
    pub raw_output: Vec<f32>,

    /// Original image dimensions (width, height).
    pub image_size: (u32, u32),

    /// Processing time in milliseconds.
    pub processing_time_ms: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_percentage_formatting() {
        assert_eq!(ClassPrediction::new("Grape Healthy", 0.97421).percentage(), "97.42%");
        assert_eq!(ClassPrediction::new("Grape Healthy", 0.0).percentage(), "0.00%");
        assert_eq!(ClassPrediction::new("Grape Healthy", 1.0).percentage(), "100.00%");
    }

    #[test]
    fn test_result_serializes_to_json() {
        let result = PredictionResult {
            predicted: ClassPrediction::new("Grape Black Rot", 0.9),
            rankings: vec![
                ClassPrediction::new("Grape Black Rot", 0.9),
                ClassPrediction::new("Grape Healthy", 0.1),
            ],
            raw_output: vec![0.9, 0.1],
            image_size: (640, 480),
            processing_time_ms: 12,
        };

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["predicted"]["label"], "Grape Black Rot");
        assert_eq!(json["rankings"].as_array().unwrap().len(), 2);
    }
}
