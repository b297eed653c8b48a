//! ONNX Runtime (ort) backend for native platforms with XNNPACK.

use std::path::Path;
use std::sync::Mutex;

use ndarray::ArrayD;
use ort::ep::XNNPACK;
use ort::session::Session;
use ort::session::builder::GraphOptimizationLevel;
use ort::value::Tensor;
use tracing::debug;

use crate::error::InferenceError;
use crate::{InferenceBackend, Result};

/// Backend using ONNX Runtime for native inference.
pub struct OrtBackend {
    session: Mutex<Session>,
    input_names: Vec<String>,
    output_names: Vec<String>,
}

impl OrtBackend {
    /// Load a model from a file path.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading ONNX model from: {}", path.display());

        let bytes = std::fs::read(path).map_err(InferenceError::Io)?;

        Self::from_bytes(&bytes)
    }

    /// Load a model from bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        debug!("Loading ONNX model from {} bytes", bytes.len());

        let session = Session::builder()
            .map_err(|e| InferenceError::SessionCreate(e.to_string()))?
            .with_execution_providers([XNNPACK::default().build()])
            .map_err(|e| InferenceError::SessionCreate(e.to_string()))?
            .with_optimization_level(GraphOptimizationLevel::Level3)
            .map_err(|e| InferenceError::SessionCreate(e.to_string()))?
            .with_intra_threads(4)
            .map_err(|e| InferenceError::SessionCreate(e.to_string()))?
            .commit_from_memory(bytes)
            .map_err(|e| InferenceError::ModelLoad(e.to_string()))?;

        let input_names: Vec<String> = session
            .inputs()
            .iter()
            .map(|i| i.name().to_string())
            .collect();

        let output_names: Vec<String> = session
            .outputs()
            .iter()
            .map(|o| o.name().to_string())
            .collect();

        debug!("Model inputs: {:?}", input_names);
        debug!("Model outputs: {:?}", output_names);

        Ok(Self {
            session: Mutex::new(session),
            input_names,
            output_names,
        })
    }
}

impl InferenceBackend for OrtBackend {
    fn run(&self, input: ArrayD<f32>) -> Result<ArrayD<f32>> {
        let input_name = self
            .input_names
            .first()
            .cloned()
            .ok_or_else(|| InferenceError::InvalidInput("model has no inputs".to_string()))?;

        let shape: Vec<i64> = input.shape().iter().map(|&s| s as i64).collect();
        let data: Vec<f32> = input.iter().cloned().collect();
        let value: ort::session::SessionInputValue<'static> = Tensor::from_array((shape, data))
            .map(Into::into)
            .map_err(|e| InferenceError::InvalidInput(e.to_string()))?;

        let mut session = self
            .session
            .lock()
            .map_err(|e| InferenceError::InferenceFailed(format!("Failed to lock session: {}", e)))?;

        let outputs = session
            .run(vec![(input_name.as_str(), value)])
            .map_err(|e| InferenceError::InferenceFailed(e.to_string()))?;

        let (name, value) = outputs
            .iter()
            .next()
            .ok_or_else(|| InferenceError::OutputExtraction("model produced no outputs".to_string()))?;

        let (shape_ref, data) = value.try_extract_tensor::<f32>().map_err(|_| {
            InferenceError::OutputExtraction(format!("output '{}' is not a float tensor", name))
        })?;

        let shape: Vec<usize> = shape_ref.iter().map(|&s| s as usize).collect();
        let arr = ArrayD::from_shape_vec(ndarray::IxDyn(&shape), data.to_vec())
            .map_err(|e| InferenceError::OutputExtraction(e.to_string()))?;

        Ok(arr)
    }

    fn input_names(&self) -> &[String] {
        &self.input_names
    }

    fn output_names(&self) -> &[String] {
        &self.output_names
    }
}
