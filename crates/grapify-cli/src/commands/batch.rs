//! Batch command - classify multiple images at once.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, error};

use grapify_core::{GrapifyConfig, LeafClassifier, PredictionResult};

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Input files or glob pattern (e.g. "photos/*.jpg")
    #[arg(required = true)]
    input: String,

    /// Directory for per-image JSON results
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Also generate a summary CSV
    #[arg(long)]
    summary: Option<PathBuf>,

    /// Continue on error
    #[arg(long)]
    continue_on_error: bool,

    /// Model file (overrides config)
    #[arg(short, long)]
    model: Option<PathBuf>,
}

/// Result of classifying a single file.
struct FileResult {
    path: PathBuf,
    result: Option<PredictionResult>,
    error: Option<String>,
}

pub async fn run(args: BatchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    // Load configuration
    let config = if let Some(path) = config_path {
        GrapifyConfig::from_file(std::path::Path::new(path))?
    } else {
        GrapifyConfig::default()
    };

    // Expand glob pattern
    let files: Vec<PathBuf> = glob(&args.input)?
        .filter_map(|r| r.ok())
        .filter(|p| {
            let ext = p.extension().and_then(|e| e.to_str()).unwrap_or("");
            matches!(
                ext.to_lowercase().as_str(),
                "png" | "jpg" | "jpeg" | "bmp" | "tiff" | "webp"
            )
        })
        .collect();

    if files.is_empty() {
        anyhow::bail!("No matching image files found for pattern: {}", args.input);
    }

    println!(
        "{} Found {} images to classify",
        style("ℹ").blue(),
        files.len()
    );

    // Create output directory if specified
    if let Some(ref output_dir) = args.output_dir {
        fs::create_dir_all(output_dir)?;
    }

    // Load the model once for the whole batch
    let model_path = args.model.clone().unwrap_or_else(|| config.model_path());
    if !model_path.exists() {
        anyhow::bail!(
            "Model file not found: {}. Pass --model or set model.model_dir in the config.",
            model_path.display()
        );
    }

    let classifier = LeafClassifier::from_model_file(&model_path)?
        .with_labels(config.classifier.labels.clone())
        .with_input_size(config.classifier.input_size);

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} images")
            .unwrap()
            .progress_chars("=>-"),
    );

    let mut results = Vec::with_capacity(files.len());

    for path in files {
        let outcome = classify_file(&classifier, &path);

        match outcome {
            Ok(result) => {
                debug!(
                    "{}: {} ({})",
                    path.display(),
                    result.predicted.label,
                    result.predicted.percentage()
                );

                if let Some(ref output_dir) = args.output_dir {
                    let file_name = path
                        .file_stem()
                        .and_then(|s| s.to_str())
                        .unwrap_or("result");
                    let out_path = output_dir.join(format!("{}.json", file_name));
                    fs::write(&out_path, serde_json::to_string_pretty(&result)?)?;
                }

                results.push(FileResult {
                    path,
                    result: Some(result),
                    error: None,
                });
            }
            Err(e) => {
                error!("Failed to classify {}: {}", path.display(), e);

                if !args.continue_on_error {
                    pb.abandon();
                    return Err(e.context(format!("while classifying {}", path.display())));
                }

                results.push(FileResult {
                    path,
                    result: None,
                    error: Some(e.to_string()),
                });
            }
        }

        pb.inc(1);
    }

    pb.finish_with_message("Done");

    // Summary CSV
    if let Some(ref summary_path) = args.summary {
        write_summary(summary_path, &results)?;
        println!(
            "{} Summary written to {}",
            style("✓").green(),
            summary_path.display()
        );
    }

    // Final tallies
    let succeeded = results.iter().filter(|r| r.result.is_some()).count();
    let failed = results.len() - succeeded;

    println!();
    for r in &results {
        match (&r.result, &r.error) {
            (Some(result), _) => println!(
                "  {} {} -> {} ({})",
                style("✓").green(),
                r.path.display(),
                result.predicted.label,
                result.predicted.percentage()
            ),
            (None, Some(err)) => println!(
                "  {} {} -> {}",
                style("✗").red(),
                r.path.display(),
                style(err).red()
            ),
            (None, None) => {}
        }
    }

    println!();
    println!(
        "{} {} classified, {} failed in {:.1}s",
        style("ℹ").blue(),
        succeeded,
        failed,
        start.elapsed().as_secs_f32()
    );

    Ok(())
}

fn classify_file(
    classifier: &LeafClassifier<grapify_core::OrtBackend>,
    path: &PathBuf,
) -> anyhow::Result<PredictionResult> {
    let image = image::open(path)?;
    Ok(classifier.classify(&image)?)
}

fn write_summary(path: &PathBuf, results: &[FileResult]) -> anyhow::Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(["file", "label", "confidence", "error"])?;

    for r in results {
        match &r.result {
            Some(result) => writer.write_record([
                r.path.display().to_string().as_str(),
                result.predicted.label.as_str(),
                &format!("{:.6}", result.predicted.confidence),
                "",
            ])?,
            None => writer.write_record([
                r.path.display().to_string().as_str(),
                "",
                "",
                r.error.as_deref().unwrap_or("unknown error"),
            ])?,
        }
    }

    writer.flush()?;
    Ok(())
}
