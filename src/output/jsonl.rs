#![forbid(unsafe_code)]

//! JSONL output formatter for machine-readable output
//!
//! Outputs one JSON object per line in a deterministic order: per file, the
//! color records (verbose only, ordered like the human listing) followed by
//! that file's summary record; after all files, one status record.

use crate::engine::FileScan;
use serde::Serialize;
use std::path::PathBuf;

/// JSONL output formatter
pub struct JsonlFormatter {
    verbose: bool,
}

/// One distinct color within a file
#[derive(Debug, Serialize)]
struct ColorRecord {
    #[serde(rename = "type")]
    record_type: String,
    path: PathBuf,
    color: String,
    count: u64,
}

/// Per-file summary
#[derive(Debug, Serialize)]
struct SummaryRecord {
    #[serde(rename = "type")]
    record_type: String,
    path: PathBuf,
    colors: usize,
    frames: u32,
}

/// End-of-run status
#[derive(Debug, Serialize)]
struct StatusRecord {
    #[serde(rename = "type")]
    record_type: String,
    files_scanned: u64,
    files_failed: u64,
}

impl JsonlFormatter {
    /// Creates a new JsonlFormatter
    pub fn new(verbose: bool) -> Self {
        JsonlFormatter { verbose }
    }

    /// Format one file's records.
    ///
    /// Color records come first (verbose only), sorted by descending count
    /// with ties broken by ascending key, then the summary record.
    pub fn format_file(&self, scan: &FileScan) -> String {
        let mut output = String::new();

        if self.verbose {
            for (key, count) in scan.sorted_colors() {
                let (r, g, b) = scan.keying.display_rgb(key);
                let record = ColorRecord {
                    record_type: "color".to_string(),
                    path: scan.path.clone(),
                    color: format!("#{r:02X}{g:02X}{b:02X}"),
                    count,
                };
                push_record(&mut output, &record);
            }
        }

        let summary = SummaryRecord {
            record_type: "summary".to_string(),
            path: scan.path.clone(),
            colors: scan.distinct_colors(),
            frames: scan.frames,
        };
        push_record(&mut output, &summary);

        output
    }

    /// Format the end-of-run status record
    pub fn format_status(&self, files_scanned: u64, files_failed: u64) -> String {
        let mut output = String::new();
        let status = StatusRecord {
            record_type: "status".to_string(),
            files_scanned,
            files_failed,
        };
        push_record(&mut output, &status);
        output
    }
}

fn push_record<T: Serialize>(output: &mut String, record: &T) {
    if let Ok(json) = serde_json::to_string(record) {
        output.push_str(&json);
        output.push('\n');
    }
}
