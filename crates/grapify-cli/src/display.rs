//! Styled terminal rendering of classification results.

use console::Style;

use grapify_core::{Language, PredictionResult, disease_info};

/// Confidence band used for coloring scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfidenceBand {
    High,
    Good,
    Moderate,
    Low,
    VeryLow,
}

/// Band a confidence value for display.
pub fn confidence_band(confidence: f32) -> ConfidenceBand {
    if confidence >= 0.8 {
        ConfidenceBand::High
    } else if confidence >= 0.6 {
        ConfidenceBand::Good
    } else if confidence >= 0.4 {
        ConfidenceBand::Moderate
    } else if confidence >= 0.2 {
        ConfidenceBand::Low
    } else {
        ConfidenceBand::VeryLow
    }
}

/// Style for a confidence value.
pub fn confidence_style(confidence: f32) -> Style {
    match confidence_band(confidence) {
        ConfidenceBand::High => Style::new().green(),
        ConfidenceBand::Good => Style::new().color256(118), // light green
        ConfidenceBand::Moderate => Style::new().yellow(),
        ConfidenceBand::Low => Style::new().color256(208), // orange
        ConfidenceBand::VeryLow => Style::new().red(),
    }
}

/// Severity style for a class label.
pub fn disease_style(label: &str) -> Style {
    match label {
        "Grape Black Rot" => Style::new().red(),
        "Grape Esca (Black Measles)" => Style::new().color256(208), // orange
        "Grape Leaf Blight (Isariopsis Leaf Spot)" => Style::new().yellow(),
        "Grape Healthy" => Style::new().green(),
        "Not Grape Leaf" => Style::new().color256(245), // gray
        _ => Style::new().cyan(),
    }
}

/// Options for the text renderer.
pub struct TextOptions {
    /// Print the disease knowledge-base entry for the top prediction.
    pub details: bool,

    /// Language for the knowledge-base entry.
    pub language: Language,

    /// Print the raw output vector.
    pub raw: bool,

    /// Limit the ranked list (0 = all).
    pub top_k: usize,

    /// Hide ranked entries below this confidence.
    pub min_confidence: f32,
}

/// Print a classification result as a styled summary and ranked table.
pub fn print_result(result: &PredictionResult, opts: &TextOptions) {
    let label_style = disease_style(&result.predicted.label);
    let score_style = confidence_style(result.predicted.confidence);

    println!(
        "{} {} ({})",
        Style::new().green().apply_to("✓"),
        label_style.bold().apply_to(&result.predicted.label),
        score_style.apply_to(result.predicted.percentage()),
    );
    println!(
        "  {}x{} px, {}ms",
        result.image_size.0, result.image_size.1, result.processing_time_ms
    );

    println!();
    let mut shown = 0usize;
    for prediction in &result.rankings {
        if opts.top_k > 0 && shown >= opts.top_k {
            break;
        }
        if prediction.confidence < opts.min_confidence {
            continue;
        }
        println!(
            "  {:<44} {:>8}",
            disease_style(&prediction.label).apply_to(&prediction.label),
            confidence_style(prediction.confidence).apply_to(prediction.percentage()),
        );
        shown += 1;
    }

    if opts.raw {
        println!();
        println!("  raw output: {:?}", result.raw_output);
    }

    if opts.details {
        print_details(&result.predicted.label, opts.language);
    }
}

fn print_details(label: &str, language: Language) {
    let Some(info) = disease_info(label, language) else {
        return;
    };

    let (cause, symptoms, prevention) = match language {
        Language::English => ("Cause", "Symptoms", "Prevention"),
        Language::Indonesian => ("Penyebab", "Gejala", "Pencegahan"),
    };

    let heading = Style::new().bold().underlined();
    println!();
    println!("{}", heading.apply_to(cause));
    println!("{}", info.cause);
    println!();
    println!("{}", heading.apply_to(symptoms));
    println!("{}", info.symptoms);
    println!();
    println!("{}", heading.apply_to(prevention));
    println!("{}", info.prevention);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confidence_banding() {
        assert_eq!(confidence_band(0.95), ConfidenceBand::High);
        assert_eq!(confidence_band(0.8), ConfidenceBand::High);
        assert_eq!(confidence_band(0.7), ConfidenceBand::Good);
        assert_eq!(confidence_band(0.5), ConfidenceBand::Moderate);
        assert_eq!(confidence_band(0.25), ConfidenceBand::Low);
        assert_eq!(confidence_band(0.1), ConfidenceBand::VeryLow);
    }
}
