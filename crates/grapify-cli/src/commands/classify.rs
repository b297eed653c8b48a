//! Classify command - run the classifier on a single image.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info};

use grapify_core::{GrapifyConfig, Language, LeafClassifier, PredictionResult};

use crate::display::{self, TextOptions};

/// Arguments for the classify command.
#[derive(Args)]
pub struct ClassifyArgs {
    /// Input image (PNG, JPEG, BMP, TIFF, WebP)
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Model file (overrides config)
    #[arg(short, long)]
    model: Option<PathBuf>,

    /// Show the disease description for the top prediction
    #[arg(long)]
    details: bool,

    /// Language for disease descriptions
    #[arg(long, value_enum, default_value = "en")]
    lang: Lang,

    /// Print the raw model output vector
    #[arg(long)]
    raw: bool,

    /// Limit the ranked list to the top K entries (0 = all)
    #[arg(long)]
    top_k: Option<usize>,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// Styled text summary
    Text,
    /// JSON output
    Json,
    /// CSV ranked list
    Csv,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum Lang {
    /// English
    En,
    /// Indonesian
    Id,
}

impl From<Lang> for Language {
    fn from(lang: Lang) -> Self {
        match lang {
            Lang::En => Language::English,
            Lang::Id => Language::Indonesian,
        }
    }
}

pub async fn run(args: ClassifyArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    // Load configuration
    let config = if let Some(path) = config_path {
        GrapifyConfig::from_file(std::path::Path::new(path))?
    } else {
        GrapifyConfig::default()
    };

    // Check input file exists
    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    let model_path = args.model.clone().unwrap_or_else(|| config.model_path());
    if !model_path.exists() {
        anyhow::bail!(
            "Model file not found: {}. Pass --model or set model.model_dir in the config.",
            model_path.display()
        );
    }

    info!("Classifying file: {}", args.input.display());

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap(),
    );

    pb.set_message("Loading model...");
    let classifier = LeafClassifier::from_model_file(&model_path)?
        .with_labels(config.classifier.labels.clone())
        .with_input_size(config.classifier.input_size);

    pb.set_message("Running inference...");
    let image = image::open(&args.input)?;
    let result = classifier.classify(&image)?;

    pb.finish_and_clear();

    // Write or print the result
    match args.format {
        OutputFormat::Text => {
            if let Some(output_path) = &args.output {
                fs::write(output_path, format_plain(&result))?;
                print_written(output_path);
            } else {
                display::print_result(
                    &result,
                    &TextOptions {
                        details: args.details,
                        language: args.lang.into(),
                        raw: args.raw,
                        top_k: args.top_k.unwrap_or(config.classifier.top_k),
                        min_confidence: config.classifier.min_confidence,
                    },
                );
            }
        }
        OutputFormat::Json => {
            let output = format_json(&result)?;
            if let Some(output_path) = &args.output {
                fs::write(output_path, output)?;
                print_written(output_path);
            } else {
                println!("{}", output);
            }
        }
        OutputFormat::Csv => {
            let output = format_csv(&result)?;
            if let Some(output_path) = &args.output {
                fs::write(output_path, output)?;
                print_written(output_path);
            } else {
                print!("{}", output);
            }
        }
    }

    debug!("Total processing time: {:?}", start.elapsed());

    Ok(())
}

fn print_written(path: &PathBuf) {
    println!(
        "{} Output written to {}",
        style("✓").green(),
        path.display()
    );
}

pub fn format_json(result: &PredictionResult) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(result)?)
}

/// Unstyled text summary, used when writing text output to a file.
pub fn format_plain(result: &PredictionResult) -> String {
    let mut out = format!(
        "{} ({})\n\n",
        result.predicted.label,
        result.predicted.percentage()
    );
    for prediction in &result.rankings {
        out.push_str(&format!(
            "{}: {}\n",
            prediction.label,
            prediction.percentage()
        ));
    }
    out
}

pub fn format_csv(result: &PredictionResult) -> anyhow::Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["label", "confidence"])?;
    for prediction in &result.rankings {
        writer.write_record([
            prediction.label.as_str(),
            &format!("{:.6}", prediction.confidence),
        ])?;
    }
    let bytes = writer.into_inner()?;
    Ok(String::from_utf8(bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use grapify_core::ClassPrediction;

    fn sample_result() -> PredictionResult {
        PredictionResult {
            predicted: ClassPrediction::new("Grape Healthy", 0.85),
            rankings: vec![
                ClassPrediction::new("Grape Healthy", 0.85),
                ClassPrediction::new("Grape Black Rot", 0.15),
            ],
            raw_output: vec![0.15, 0.85],
            image_size: (320, 240),
            processing_time_ms: 7,
        }
    }

    #[test]
    fn test_format_csv_has_header_and_rows() {
        let csv = format_csv(&sample_result()).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "label,confidence");
        assert!(lines[1].starts_with("Grape Healthy,0.85"));
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn test_format_plain_lists_rankings() {
        let text = format_plain(&sample_result());
        assert!(text.starts_with("Grape Healthy (85.00%)"));
        assert!(text.contains("Grape Black Rot: 15.00%"));
    }

    #[test]
    fn test_format_json_round_trips() {
        let json = format_json(&sample_result()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["predicted"]["label"], "Grape Healthy");
    }
}
