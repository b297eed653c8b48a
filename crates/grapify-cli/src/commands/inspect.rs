//! Inspect command - report a model's tensor names and probed output shape.

use std::path::PathBuf;

use clap::Args;
use console::style;

use grapify_core::{GrapifyConfig, OrtBackend, inspect_model};

/// Arguments for the inspect command.
#[derive(Args)]
pub struct InspectArgs {
    /// Model file (overrides config)
    #[arg(short, long)]
    model: Option<PathBuf>,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,
}

pub async fn run(args: InspectArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = if let Some(path) = config_path {
        GrapifyConfig::from_file(std::path::Path::new(path))?
    } else {
        GrapifyConfig::default()
    };

    let model_path = args.model.clone().unwrap_or_else(|| config.model_path());
    if !model_path.exists() {
        anyhow::bail!("Model file not found: {}", model_path.display());
    }

    let backend = OrtBackend::from_file(&model_path)?;
    let report = inspect_model(
        &backend,
        config.classifier.input_size,
        config.classifier.labels.len(),
    )?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("Model: {}", model_path.display());
    println!("  inputs:  {:?}", report.input_names);
    println!("  outputs: {:?}", report.output_names);
    println!("  probe input shape:  {:?}", report.input_shape);
    println!("  probe output shape: {:?}", report.output_shape);
    println!(
        "  scores: {} / labels: {}",
        report.output_len, report.label_count
    );

    if report.labels_match {
        println!("  {} output length matches the label set", style("✓").green());
    } else {
        println!(
            "  {} output length does not match the configured labels",
            style("✗").red()
        );
    }

    Ok(())
}
