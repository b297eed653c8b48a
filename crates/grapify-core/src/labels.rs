//! The grape-leaf class label set.

/// Edge length of the model's square input, in pixels.
pub const INPUT_SIZE: u32 = 224;

/// Class names in model output order.
///
/// Four disease states plus a rejection class for images that are not a
/// grape leaf at all. The order must match the output layer of the model.
pub const CLASS_NAMES: [&str; 5] = [
    "Grape Black Rot",
    "Grape Esca (Black Measles)",
    "Grape Leaf Blight (Isariopsis Leaf Spot)",
    "Grape Healthy",
    "Not Grape Leaf",
];

/// Default label list as owned strings, for configuration and classifiers.
pub fn default_labels() -> Vec<String> {
    CLASS_NAMES.iter().map(|s| s.to_string()).collect()
}

/// Label for output index `index`, falling back to `Unknown-{index}` when
/// the model emits more outputs than there are labels.
pub fn label_at(labels: &[String], index: usize) -> String {
    labels
        .get(index)
        .cloned()
        .unwrap_or_else(|| format!("Unknown-{}", index))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_count_is_five() {
        assert_eq!(CLASS_NAMES.len(), 5);
        assert_eq!(default_labels().len(), 5);
    }

    #[test]
    fn test_label_at_within_range() {
        let labels = default_labels();
        assert_eq!(label_at(&labels, 0), "Grape Black Rot");
        assert_eq!(label_at(&labels, 4), "Not Grape Leaf");
    }

    #[test]
    fn test_label_at_surplus_index() {
        let labels = default_labels();
        assert_eq!(label_at(&labels, 5), "Unknown-5");
        assert_eq!(label_at(&labels, 17), "Unknown-17");
    }
}
