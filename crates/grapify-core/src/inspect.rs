//! Model inspection: report tensor names and probe the output shape.

use ndarray::Array4;
use serde::Serialize;
use tracing::debug;

use grapify_inference::InferenceBackend;

use crate::Result;

/// Report produced by probing a loaded model.
#[derive(Debug, Clone, Serialize)]
pub struct ModelReport {
    /// Input tensor names reported by the runtime.
    pub input_names: Vec<String>,

    /// Output tensor names reported by the runtime.
    pub output_names: Vec<String>,

    /// Shape of the probe input tensor.
    pub input_shape: Vec<usize>,

    /// Shape of the output the model produced for the probe.
    pub output_shape: Vec<usize>,

    /// Number of scores in the flattened output.
    pub output_len: usize,

    /// Number of configured class labels.
    pub label_count: usize,

    /// Whether the output length matches the label count.
    pub labels_match: bool,
}

/// Probe a model with a zero-filled input tensor of the classifier shape.
///
/// The ONNX runtimes expose tensor names but not always static shapes, so a
/// forward pass with a blank image is the reliable way to learn the output
/// length and compare it against the configured labels.
pub fn inspect_model<B: InferenceBackend>(
    backend: &B,
    input_size: u32,
    label_count: usize,
) -> Result<ModelReport> {
    let size = input_size as usize;
    let probe = Array4::<f32>::zeros((1, size, size, 3));
    let input_shape = probe.shape().to_vec();

    debug!("Probing model with zero tensor of shape {:?}", input_shape);

    let output = backend.run(probe.into_dyn())?;
    let output_shape = output.shape().to_vec();
    let output_len = output.len();

    debug!(
        "Probe output shape {:?} ({} scores)",
        output_shape, output_len
    );

    Ok(ModelReport {
        input_names: backend.input_names().to_vec(),
        output_names: backend.output_names().to_vec(),
        input_shape,
        output_shape,
        output_len,
        label_count,
        labels_match: output_len == label_count,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::ArrayD;

    struct EchoBackend {
        classes: usize,
        names: Vec<String>,
    }

    impl InferenceBackend for EchoBackend {
        fn run(&self, _input: ArrayD<f32>) -> grapify_inference::Result<ArrayD<f32>> {
            Ok(ArrayD::zeros(ndarray::IxDyn(&[1, self.classes])))
        }

        fn input_names(&self) -> &[String] {
            &self.names
        }

        fn output_names(&self) -> &[String] {
            &self.names
        }
    }

    #[test]
    fn test_report_matches_label_count() {
        let backend = EchoBackend {
            classes: 5,
            names: vec!["input_1".to_string()],
        };

        let report = inspect_model(&backend, 224, 5).unwrap();
        assert_eq!(report.input_shape, vec![1, 224, 224, 3]);
        assert_eq!(report.output_shape, vec![1, 5]);
        assert_eq!(report.output_len, 5);
        assert!(report.labels_match);
    }

    #[test]
    fn test_report_flags_mismatch() {
        let backend = EchoBackend {
            classes: 8,
            names: vec![],
        };

        let report = inspect_model(&backend, 224, 5).unwrap();
        assert!(!report.labels_match);
    }
}
