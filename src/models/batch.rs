use std::path::PathBuf;

use crate::models::{DecimalCoordinate, MetadataRecord, RiskReport};

/// Everything derived from a single image.
#[derive(Clone, Debug, PartialEq)]
pub struct ImageExtraction {
    pub records: Vec<MetadataRecord>,
    pub coordinate: Option<DecimalCoordinate>,
    pub risk: Option<RiskReport>,
}

/// Output format for the metadata record report.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ReportFormat {
    Csv,
    Json,
    Txt,
}

impl ReportFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
            Self::Txt => "txt",
        }
    }
}

/// Knobs for a batch run.
#[derive(Clone, Debug, Default)]
pub struct BatchOptions {
    pub sanitize: bool,
    pub risk_analysis: bool,
    pub formats: Vec<ReportFormat>,
}

/// Artifacts produced by a batch run.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BatchOutcome {
    pub report_paths: Vec<PathBuf>,
    pub map_path: Option<PathBuf>,
    pub risk_path: Option<PathBuf>,
    pub processed: usize,
}

/// Sent over the progress channel once per processed image.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProgressEvent {
    pub current: usize,
    pub total: usize,
    pub filename: String,
    pub success: bool,
}
