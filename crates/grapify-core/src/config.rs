//! Configuration structures for the classification pipeline.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::labels::{INPUT_SIZE, default_labels};

/// Main configuration for the grapify pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GrapifyConfig {
    /// Model file location.
    pub model: ModelConfig,

    /// Classifier configuration.
    pub classifier: ClassifierConfig,
}

impl Default for GrapifyConfig {
    fn default() -> Self {
        Self {
            model: ModelConfig::default(),
            classifier: ClassifierConfig::default(),
        }
    }
}

/// Model file paths.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    /// Directory containing model files.
    pub model_dir: PathBuf,

    /// Classifier model file name.
    pub model_file: String,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            model_dir: PathBuf::from("models"),
            model_file: "grapeleaf.onnx".to_string(),
        }
    }
}

/// Classifier configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Model input edge length in pixels.
    pub input_size: u32,

    /// Class labels in model output order.
    pub labels: Vec<String>,

    /// Hide ranked predictions below this confidence (0.0 shows all).
    pub min_confidence: f32,

    /// Number of ranked predictions to report (0 = all).
    pub top_k: usize,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            input_size: INPUT_SIZE,
            labels: default_labels(),
            min_confidence: 0.0,
            top_k: 0,
        }
    }
}

impl GrapifyConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<(), std::io::Error> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))?;
        std::fs::write(path, content)
    }

    /// Full path to the configured model file.
    pub fn model_path(&self) -> PathBuf {
        self.model.model_dir.join(&self.model.model_file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() {
        let config = GrapifyConfig::default();
        assert_eq!(config.classifier.input_size, 224);
        assert_eq!(config.classifier.labels.len(), 5);
        assert_eq!(config.model_path(), PathBuf::from("models/grapeleaf.onnx"));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: GrapifyConfig =
            serde_json::from_str(r#"{"classifier": {"input_size": 128}}"#).unwrap();
        assert_eq!(config.classifier.input_size, 128);
        assert_eq!(config.model.model_file, "grapeleaf.onnx");
        assert_eq!(config.classifier.labels.len(), 5);
    }

    #[test]
    fn test_json_round_trip() {
        let config = GrapifyConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let back: GrapifyConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.classifier.labels, config.classifier.labels);
        assert_eq!(back.model.model_dir, config.model.model_dir);
    }
}
