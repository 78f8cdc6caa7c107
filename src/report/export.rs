use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::models::{MetadataRecord, ReportFormat, RiskReport};

pub const CSV_FILENAME: &str = "metadata_report.csv";
pub const JSON_FILENAME: &str = "metadata_report.json";
pub const TXT_FILENAME: &str = "security_analysis.txt";
pub const RISK_FILENAME: &str = "security_analysis.json";

/// Writes already-classified records into the requested format and returns
/// the path of the artifact.
pub fn export_records(
    records: &[MetadataRecord],
    format: ReportFormat,
    output_dir: &Path,
) -> Result<PathBuf> {
    match format {
        ReportFormat::Csv => write_csv(records, output_dir),
        ReportFormat::Json => write_json(records, output_dir),
        ReportFormat::Txt => write_txt(records, output_dir),
    }
}

/// Serializes the per-image risk reports as a JSON array.
pub fn export_risk_reports(reports: &[RiskReport], output_dir: &Path) -> Result<PathBuf> {
    let path = output_dir.join(RISK_FILENAME);
    let encoded = serde_json::to_string_pretty(reports)?;
    fs::write(&path, encoded)?;
    Ok(path)
}

fn write_csv(records: &[MetadataRecord], output_dir: &Path) -> Result<PathBuf> {
    let path = output_dir.join(CSV_FILENAME);
    let mut contents = String::from("Filename,Metadata Tag,Value\n");

    for record in records {
        contents.push_str(&csv_field(&record.filename));
        contents.push(',');
        contents.push_str(&csv_field(&record.tag));
        contents.push(',');
        contents.push_str(&csv_field(&record.value));
        contents.push('\n');
    }

    fs::write(&path, contents)?;
    Ok(path)
}

fn write_json(records: &[MetadataRecord], output_dir: &Path) -> Result<PathBuf> {
    let path = output_dir.join(JSON_FILENAME);
    let encoded = serde_json::to_string_pretty(records)?;
    fs::write(&path, encoded)?;
    Ok(path)
}

fn write_txt(records: &[MetadataRecord], output_dir: &Path) -> Result<PathBuf> {
    let path = output_dir.join(TXT_FILENAME);
    let mut contents = String::new();

    for record in records {
        contents.push_str(&format!("File: {}\n", record.filename));
        contents.push_str(&format!("Tag: {}\n", record.tag));
        contents.push_str(&format!("Value: {}\n", record.value));
        contents.push_str(&"-".repeat(50));
        contents.push('\n');
    }

    fs::write(&path, contents)?;
    Ok(path)
}

/// RFC 4180 quoting: fields containing separators or quotes get wrapped,
/// with embedded quotes doubled.
fn csv_field(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        String::from(value)
    }
}
