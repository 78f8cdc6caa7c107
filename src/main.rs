//! CLI entry point. Argument parsing, console output, and exit codes live
//! here; the extraction and classification logic is in the library.

use std::fs;
use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;

use anyhow::Context;
use clap::{Parser, ValueEnum};

use exif_auditor::core::batch::BatchProcessor;
use exif_auditor::models::{BatchOptions, ReportFormat};
use exif_auditor::report::{export_records, export_risk_reports};

#[derive(Parser, Debug)]
#[command(
    name = "exif-auditor",
    version,
    about = "Extracts image metadata, maps GPS locations, and flags privacy risks"
)]
struct Cli {
    /// Image file or directory of images to process.
    path: PathBuf,

    /// Strip sensitive metadata from the images, keeping only safe technical tags.
    #[arg(long)]
    sanitize: bool,

    /// Produce a privacy risk report alongside the metadata export.
    #[arg(long)]
    risk: bool,

    /// Report output format.
    #[arg(long, value_enum, default_value = "csv")]
    format: FormatArg,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FormatArg {
    Csv,
    Json,
    Txt,
    All,
}

impl FormatArg {
    fn formats(self) -> Vec<ReportFormat> {
        match self {
            Self::Csv => vec![ReportFormat::Csv],
            Self::Json => vec![ReportFormat::Json],
            Self::Txt => vec![ReportFormat::Txt],
            Self::All => vec![ReportFormat::Csv, ReportFormat::Json, ReportFormat::Txt],
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let started = chrono::Utc::now();

    println!("{}", "=".repeat(50));
    println!("EXIF Auditor");
    println!("{}\n", "=".repeat(50));

    let processor = BatchProcessor::new();

    if cli.path.is_file() {
        process_single_file(&cli, &processor)?;
    } else {
        process_directory(&cli, &processor)?;
    }

    let elapsed = chrono::Utc::now().signed_duration_since(started);
    println!(
        "\nTotal run time: {:.2} seconds",
        elapsed.num_milliseconds() as f64 / 1000.0
    );
    println!("{}", "=".repeat(50));

    Ok(())
}

fn process_single_file(cli: &Cli, processor: &BatchProcessor) -> anyhow::Result<()> {
    let result = processor.process_image(&cli.path, cli.sanitize, cli.risk);

    if result.records.is_empty() {
        println!("No metadata found in the image");
        return Ok(());
    }

    let report_dir = cli
        .path
        .parent()
        .map(|parent| parent.join("metadata_reports"))
        .unwrap_or_else(|| PathBuf::from("metadata_reports"));
    fs::create_dir_all(&report_dir)
        .with_context(|| format!("creating report directory {}", report_dir.display()))?;

    println!(
        "Processing finished for: {}",
        cli.path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_else(|| cli.path.display().to_string())
    );

    for format in cli.format.formats() {
        let path = export_records(&result.records, format, &report_dir)?;
        println!("- Report written to: {}", path.display());
    }

    if let Some(report) = result.risk {
        let path = export_risk_reports(std::slice::from_ref(&report), &report_dir)?;
        println!("- Risk report written to: {}", path.display());
    }

    Ok(())
}

fn process_directory(cli: &Cli, processor: &BatchProcessor) -> anyhow::Result<()> {
    let options = BatchOptions {
        sanitize: cli.sanitize,
        risk_analysis: cli.risk,
        formats: cli.format.formats(),
    };

    let (progress_tx, progress_rx) = mpsc::channel::<exif_auditor::models::ProgressEvent>();
    let printer = thread::spawn(move || {
        for event in progress_rx {
            let status = if event.success { "ok" } else { "failed" };
            println!(
                "[{}/{}] {} ... {}",
                event.current, event.total, event.filename, status
            );
        }
    });

    let outcome = processor.process_directory(&cli.path, &options, progress_tx);
    let _ = printer.join();
    let outcome = outcome?;

    println!("\nProcessing finished:");
    println!("- Images processed: {}", outcome.processed);

    for path in &outcome.report_paths {
        println!("- Report written to: {}", path.display());
    }
    if let Some(path) = &outcome.map_path {
        println!("- Location map written to: {}", path.display());
    }
    if let Some(path) = &outcome.risk_path {
        println!("- Risk report written to: {}", path.display());
    }

    Ok(())
}
