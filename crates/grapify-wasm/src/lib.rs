//! WASM bindings for grape-leaf disease classification.
//!
//! This crate provides WebAssembly bindings for use in browsers and Node.js.
//! Inference runs on the tract backend, so no native runtime is required.

use wasm_bindgen::prelude::*;

use grapify_core::{Language, LeafClassifier, TractBackend, default_labels, disease_info};

/// Initialize panic hook for better error messages in console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Version information.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Class labels in model output order.
#[wasm_bindgen]
pub fn class_labels() -> Vec<String> {
    default_labels()
}

/// Look up the disease description for a class label.
///
/// `lang` is `"en"` or `"id"`. Returns `null` for labels outside the
/// five-class set.
#[wasm_bindgen]
pub fn disease_description(label: &str, lang: &str) -> Result<JsValue, JsValue> {
    let language = match lang {
        "en" => Language::English,
        "id" => Language::Indonesian,
        _ => return Err(JsValue::from_str("unsupported language, use 'en' or 'id'")),
    };

    match disease_info(label, language) {
        Some(info) => {
            serde_wasm_bindgen::to_value(&info).map_err(|e| JsValue::from_str(&e.to_string()))
        }
        None => Ok(JsValue::NULL),
    }
}

/// Leaf classifier for browser use.
#[wasm_bindgen]
pub struct LeafClassifierJs {
    classifier: LeafClassifier<TractBackend>,
}

#[wasm_bindgen]
impl LeafClassifierJs {
    /// Create a classifier from ONNX model bytes.
    #[wasm_bindgen(constructor)]
    pub fn new(model_bytes: &[u8]) -> Result<LeafClassifierJs, JsValue> {
        let backend =
            TractBackend::from_bytes(model_bytes).map_err(|e| JsValue::from_str(&e.to_string()))?;

        Ok(Self {
            classifier: LeafClassifier::new(backend),
        })
    }

    /// Classify an encoded image (PNG, JPEG, ...).
    ///
    /// Returns the full prediction result: top class, confidence-sorted
    /// rankings, raw output vector, and timing.
    #[wasm_bindgen]
    pub fn classify(&self, image_bytes: &[u8]) -> Result<JsValue, JsValue> {
        let image = image::load_from_memory(image_bytes)
            .map_err(|e| JsValue::from_str(&format!("failed to decode image: {}", e)))?;

        let result = self
            .classifier
            .classify(&image)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        serde_wasm_bindgen::to_value(&result).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// The label list used by this classifier.
    #[wasm_bindgen]
    pub fn labels(&self) -> Vec<String> {
        self.classifier.labels().to_vec()
    }
}
