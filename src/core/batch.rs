use std::collections::BTreeMap;
use std::path::Path;
use std::sync::{
    atomic::{AtomicUsize, Ordering},
    mpsc::Sender,
};

use rayon::prelude::*;
use walkdir::WalkDir;

use crate::core::assemble::FieldAssembler;
use crate::core::sanitize::Sanitizer;
use crate::core::{decode, formats};
use crate::error::{AuditError, Result};
use crate::models::{
    BatchOptions, BatchOutcome, DecimalCoordinate, ImageExtraction, ProgressEvent, RiskPolicy,
    SanitizePolicy,
};
use crate::report::{export_records, export_risk_reports, generate_map};

/// Drives the per-image pipeline over single files and whole directories.
#[derive(Clone, Debug, Default)]
pub struct BatchProcessor {
    assembler: FieldAssembler,
    sanitizer: Sanitizer,
}

impl BatchProcessor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policies(risk: RiskPolicy, sanitize: SanitizePolicy) -> Self {
        Self {
            assembler: FieldAssembler::with_risk_policy(risk),
            sanitizer: Sanitizer::new(sanitize),
        }
    }

    /// Processes one image. Never fails: a decode error becomes the single
    /// placeholder record so a batch can keep going.
    ///
    /// In sanitize mode the reduced map is written back first and the
    /// extraction then reflects the sanitized state of the file.
    pub fn process_image(&self, path: &Path, sanitize: bool, want_risk: bool) -> ImageExtraction {
        let filename = file_name_of(path);

        let raw = match decode::read_raw_tags(path) {
            Ok(raw) => raw,
            Err(err) => return self.assembler.decode_failure(&filename, &err.to_string()),
        };

        let raw = if sanitize {
            let cleaned = self.sanitizer.sanitize(&raw);
            if let Err(err) = decode::write_sanitized(path, &cleaned) {
                return self.assembler.decode_failure(&filename, &err.to_string());
            }
            cleaned
        } else {
            raw
        };

        self.assembler.assemble(&raw, &filename, want_risk)
    }

    /// Walks `path`, processes every supported image in parallel, and writes
    /// the requested report artifacts into the same directory.
    ///
    /// Results are reduced in discovery order so each image's records stay
    /// contiguous in the exports. A missing root is the one fatal error.
    pub fn process_directory(
        &self,
        path: &Path,
        options: &BatchOptions,
        progress_tx: Sender<ProgressEvent>,
    ) -> Result<BatchOutcome> {
        if !path.exists() {
            return Err(AuditError::PathNotFound(path.to_path_buf()));
        }

        let files: Vec<_> = WalkDir::new(path)
            .into_iter()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_file())
            .map(|entry| entry.into_path())
            .filter(|file| formats::is_supported(file))
            .collect();

        let total = files.len();
        let progress_counter = AtomicUsize::new(0);

        let mut indexed: Vec<(usize, String, ImageExtraction)> = files
            .par_iter()
            .enumerate()
            .map(|(index, file)| {
                let filename = file_name_of(file);
                let extraction =
                    self.process_image(file, options.sanitize, options.risk_analysis);

                let success = !extraction.records.iter().any(|record| record.tag == "Error");
                let current = progress_counter.fetch_add(1, Ordering::Relaxed) + 1;
                let _ = progress_tx.send(ProgressEvent {
                    current,
                    total,
                    filename: filename.clone(),
                    success,
                });

                (index, filename, extraction)
            })
            .collect();

        indexed.sort_by_key(|(index, _, _)| *index);

        let mut all_records = Vec::new();
        let mut coordinates: BTreeMap<String, DecimalCoordinate> = BTreeMap::new();
        let mut risk_reports = Vec::new();

        for (_, filename, extraction) in indexed {
            all_records.extend(extraction.records);
            if let Some(coordinate) = extraction.coordinate {
                coordinates.insert(filename, coordinate);
            }
            if let Some(report) = extraction.risk {
                risk_reports.push(report);
            }
        }

        let mut outcome = BatchOutcome {
            processed: total,
            ..BatchOutcome::default()
        };

        if !all_records.is_empty() {
            for format in &options.formats {
                outcome
                    .report_paths
                    .push(export_records(&all_records, *format, path)?);
            }
        }

        outcome.map_path = generate_map(&coordinates, path)?;

        if !risk_reports.is_empty() {
            outcome.risk_path = Some(export_risk_reports(&risk_reports, path)?);
        }

        Ok(outcome)
    }
}

fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}
