//! Tract backend for cross-platform ONNX inference.

use std::path::Path;

use ndarray::ArrayD;
use tract_onnx::prelude::*;
use tracing::debug;

use crate::error::InferenceError;
use crate::{InferenceBackend, Result};

/// Default input shape: one NHWC image at the classifier's 224x224 edge.
const DEFAULT_INPUT_SHAPE: [usize; 4] = [1, 224, 224, 3];

/// Backend using Tract for cross-platform ONNX inference.
pub struct TractBackend {
    model: SimplePlan<TypedFact, Box<dyn TypedOp>, Graph<TypedFact, Box<dyn TypedOp>>>,
    input_names: Vec<String>,
    output_names: Vec<String>,
}

impl TractBackend {
    /// Load a model from a file path with the default classifier input shape.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::from_file_with_shape(path, &DEFAULT_INPUT_SHAPE)
    }

    /// Load a model from a file path with a specified input shape.
    pub fn from_file_with_shape<P: AsRef<Path>>(path: P, input_shape: &[usize]) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading ONNX model with Tract from: {}", path.display());

        let model = tract_onnx::onnx()
            .model_for_path(path)
            .map_err(|e| InferenceError::ModelLoad(format!("Failed to load model: {}", e)))?;

        Self::finish(model, input_shape)
    }

    /// Load a model from bytes with the default classifier input shape.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Self::from_bytes_with_shape(bytes, &DEFAULT_INPUT_SHAPE)
    }

    /// Load a model from bytes with a specified input shape.
    pub fn from_bytes_with_shape(bytes: &[u8], input_shape: &[usize]) -> Result<Self> {
        debug!("Loading ONNX model with Tract from {} bytes", bytes.len());

        let model = tract_onnx::onnx()
            .model_for_read(&mut std::io::Cursor::new(bytes))
            .map_err(|e| InferenceError::ModelLoad(format!("Failed to load model: {}", e)))?;

        Self::finish(model, input_shape)
    }

    fn finish(mut model: InferenceModel, input_shape: &[usize]) -> Result<Self> {
        // Pin the input fact to a concrete shape so dynamic batch dimensions
        // do not block typing/optimization.
        model
            .set_input_fact(0, InferenceFact::dt_shape(f32::datum_type(), input_shape))
            .map_err(|e| InferenceError::ModelLoad(format!("Failed to set input shape: {}", e)))?;

        let model = model
            .into_typed()
            .map_err(|e| InferenceError::ModelLoad(format!("Failed to type model: {}", e)))?
            .into_optimized()
            .map_err(|e| InferenceError::ModelLoad(format!("Failed to optimize: {}", e)))?
            .into_runnable()
            .map_err(|e| InferenceError::SessionCreate(e.to_string()))?;

        // Tract doesn't expose input/output names as easily, use placeholders
        let input_names = vec!["input".to_string()];
        let output_names = vec!["output".to_string()];

        Ok(Self {
            model,
            input_names,
            output_names,
        })
    }
}

impl InferenceBackend for TractBackend {
    fn run(&self, input: ArrayD<f32>) -> Result<ArrayD<f32>> {
        let shape: TVec<usize> = input.shape().iter().cloned().collect();
        let data: Vec<f32> = input.iter().cloned().collect();
        let tract_tensor =
            tract_ndarray::ArrayD::from_shape_vec(tract_ndarray::IxDyn(shape.as_slice()), data)
                .map_err(|e| InferenceError::InvalidInput(e.to_string()))?;

        let outputs = self
            .model
            .run(tvec![tract_tensor.into_tvalue()])
            .map_err(|e| InferenceError::InferenceFailed(e.to_string()))?;

        let output = outputs
            .first()
            .ok_or_else(|| InferenceError::OutputExtraction("model produced no outputs".to_string()))?;

        let view = output
            .to_array_view::<f32>()
            .map_err(|e| InferenceError::OutputExtraction(e.to_string()))?;

        let shape: Vec<usize> = view.shape().to_vec();
        let data: Vec<f32> = view.iter().cloned().collect();
        let arr = ArrayD::from_shape_vec(ndarray::IxDyn(&shape), data)
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
