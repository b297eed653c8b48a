//! Leaf disease classifier orchestrating preprocessing and inference.

use std::time::Instant;

use image::{DynamicImage, GenericImageView};
use tracing::{debug, info};

use grapify_inference::InferenceBackend;

use crate::error::ClassifyError;
use crate::labels::{default_labels, label_at};
use crate::preprocess::ImagePreprocessor;

use super::{ClassPrediction, PredictionResult};

/// Pair each model output with its label and sort by descending confidence.
///
/// Output index `i` takes `labels[i]`, or `Unknown-{i}` when the model emits
/// more values than there are labels. The sort is stable, so equal scores
/// keep model output order.
pub fn rank_predictions(raw_output: &[f32], labels: &[String]) -> Vec<ClassPrediction> {
    let mut predictions: Vec<ClassPrediction> = raw_output
        .iter()
        .enumerate()
        .map(|(index, &confidence)| ClassPrediction::new(label_at(labels, index), confidence))
        .collect();

    predictions.sort_by(|a, b| {
        b.confidence
            .partial_cmp(&a.confidence)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    predictions
}

/// Grape-leaf disease classifier over an ONNX inference backend.
pub struct LeafClassifier<B: InferenceBackend> {
    backend: B,
    preprocessor: ImagePreprocessor,
    labels: Vec<String>,
}

impl<B: InferenceBackend> LeafClassifier<B> {
    /// Create a classifier with the default label set and input size.
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            preprocessor: ImagePreprocessor::new(),
            labels: default_labels(),
        }
    }

    /// Replace the label list (model output order).
    pub fn with_labels(mut self, labels: Vec<String>) -> Self {
        self.labels = labels;
        self
    }

    /// Set the model input edge length.
    pub fn with_input_size(mut self, size: u32) -> Self {
        self.preprocessor = ImagePreprocessor::new().with_input_size(size);
        self
    }

    /// The configured label list.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Access the underlying backend.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// The tensor shape fed to the model.
    pub fn input_shape(&self) -> [usize; 4] {
        self.preprocessor.input_shape()
    }

    /// Classify one image.
    ///
    /// Runs preprocess, a single forward pass, and confidence ranking.
    /// The model output is used as-is; no softmax is applied.
    pub fn classify(&self, image: &DynamicImage) -> Result<PredictionResult, ClassifyError> {
        let start = Instant::now();
        let (width, height) = image.dimensions();

        info!("Classifying image: {}x{}", width, height);

        let tensor = self.preprocessor.preprocess(image)?;

        let output = self
            .backend
            .run(tensor.into_dyn())
            .map_err(|e| ClassifyError::Inference(e.to_string()))?;

        // Flatten [1, K] (or [K]) into the raw score vector.
        let raw_output: Vec<f32> = output.iter().cloned().collect();
        if raw_output.is_empty() {
            return Err(ClassifyError::EmptyOutput);
        }

        debug!("Raw model output: {:?}", raw_output);

        let rankings = rank_predictions(&raw_output, &self.labels);

        // Arg-max with ties breaking toward the lowest index.
        let (max_index, _) = raw_output
            .iter()
            .enumerate()
            .fold((0, f32::NEG_INFINITY), |(best_i, best_v), (i, &v)| {
                if v > best_v { (i, v) } else { (best_i, best_v) }
            });

        let predicted =
            ClassPrediction::new(label_at(&self.labels, max_index), raw_output[max_index]);

        debug!(
            "Max value {} at index {} ({})",
            predicted.confidence, max_index, predicted.label
        );

        Ok(PredictionResult {
            predicted,
            rankings,
            raw_output,
            image_size: (width, height),
            processing_time_ms: start.elapsed().as_millis() as u64,
        })
    }
}

#[cfg(feature = "native")]
impl LeafClassifier<grapify_inference::OrtBackend> {
    /// Load a classifier from an ONNX model file using the native backend.
    pub fn from_model_file<P: AsRef<std::path::Path>>(path: P) -> crate::Result<Self> {
        let backend = grapify_inference::OrtBackend::from_file(path)?;
        Ok(Self::new(backend))
    }

    /// Load a classifier from ONNX model bytes using the native backend.
    pub fn from_model_bytes(bytes: &[u8]) -> crate::Result<Self> {
        let backend = grapify_inference::OrtBackend::from_bytes(bytes)?;
        Ok(Self::new(backend))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::ArrayD;
    use pretty_assertions::assert_eq;

    /// Backend returning a canned output vector, for pipeline tests.
    struct FixedBackend {
        output: Vec<f32>,
        names: Vec<String>,
    }

    impl FixedBackend {
        fn new(output: Vec<f32>) -> Self {
            Self {
                output,
                names: vec!["serving_default".to_string()],
            }
        }
    }

    impl InferenceBackend for FixedBackend {
        fn run(&self, _input: ArrayD<f32>) -> grapify_inference::Result<ArrayD<f32>> {
            let shape = vec![1, self.output.len()];
            Ok(ArrayD::from_shape_vec(ndarray::IxDyn(&shape), self.output.clone()).unwrap())
        }

        fn input_names(&self) -> &[String] {
            &self.names
        }

        fn output_names(&self) -> &[String] {
            &self.names
        }
    }

    fn test_image() -> DynamicImage {
        DynamicImage::ImageRgb8(image::RgbImage::from_pixel(64, 64, image::Rgb([40, 160, 40])))
    }

    #[test]
    fn test_rank_predictions_sorted_descending() {
        let labels = default_labels();
        let ranked = rank_predictions(&[0.05, 0.7, 0.1, 0.15, 0.0], &labels);

        assert_eq!(ranked[0].label, "Grape Esca (Black Measles)");
        assert_eq!(ranked[1].label, "Grape Healthy");
        assert_eq!(ranked[4].label, "Not Grape Leaf");
        assert!(ranked.windows(2).all(|w| w[0].confidence >= w[1].confidence));
    }

    #[test]
    fn test_rank_predictions_surplus_outputs_get_unknown_labels() {
        let labels = default_labels();
        let ranked = rank_predictions(&[0.1, 0.0, 0.0, 0.0, 0.0, 0.9, 0.2], &labels);

        assert_eq!(ranked[0].label, "Unknown-5");
        assert_eq!(ranked[1].label, "Unknown-6");
        assert_eq!(ranked[2].label, "Grape Black Rot");
    }

    #[test]
    fn test_rank_predictions_ties_keep_index_order() {
        let labels = default_labels();
        let ranked = rank_predictions(&[0.3, 0.3, 0.4, 0.3, 0.3], &labels);

        assert_eq!(ranked[0].label, "Grape Leaf Blight (Isariopsis Leaf Spot)");
        // Tied scores stay in model output order.
        assert_eq!(ranked[1].label, "Grape Black Rot");
        assert_eq!(ranked[2].label, "Grape Esca (Black Measles)");
        assert_eq!(ranked[3].label, "Grape Healthy");
        assert_eq!(ranked[4].label, "Not Grape Leaf");
    }

    #[test]
    fn test_classify_picks_argmax() {
        let classifier = LeafClassifier::new(FixedBackend::new(vec![0.02, 0.9, 0.05, 0.02, 0.01]));
        let result = classifier.classify(&test_image()).unwrap();

        assert_eq!(result.predicted.label, "Grape Esca (Black Measles)");
        assert!((result.predicted.confidence - 0.9).abs() < 1e-6);
        assert_eq!(result.rankings.len(), 5);
        assert_eq!(result.raw_output.len(), 5);
        assert_eq!(result.image_size, (64, 64));
    }

    #[test]
    fn test_classify_argmax_tie_takes_lowest_index() {
        let classifier = LeafClassifier::new(FixedBackend::new(vec![0.4, 0.4, 0.1, 0.05, 0.05]));
        let result = classifier.classify(&test_image()).unwrap();

        assert_eq!(result.predicted.label, "Grape Black Rot");
    }

    #[test]
    fn test_classify_empty_output_is_error() {
        let classifier = LeafClassifier::new(FixedBackend::new(vec![]));
        let err = classifier.classify(&test_image()).unwrap_err();

        assert!(matches!(err, ClassifyError::EmptyOutput));
    }

    #[test]
    fn test_classify_custom_labels() {
        let classifier = LeafClassifier::new(FixedBackend::new(vec![0.2, 0.8]))
            .with_labels(vec!["a".to_string(), "b".to_string()]);
        let result = classifier.classify(&test_image()).unwrap();

        assert_eq!(result.predicted.label, "b");
    }
}
