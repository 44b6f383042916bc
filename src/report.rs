//! Summary of a conversion run, rendered as text or JSON.

use crate::config::ReportFormat;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use std::path::PathBuf;

/// What a run read, wrote, and changed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionReport {
    pub input: PathBuf,
    pub output: PathBuf,
    pub total_lines: usize,
    /// 1-based line numbers
    pub rewritten_lines: Vec<usize>,
    pub dry_run: bool,
}

impl ConversionReport {
    /// Format as pretty JSON
    ///
    /// # Errors
    ///
    /// Returns `Report` if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Format as the human-readable progress lines
    #[must_use]
    pub fn to_text(&self) -> String {
        let mut text = String::new();
        let _ = writeln!(text, "Processing file [{}]", self.input.display());
        if self.dry_run {
            let _ = writeln!(
                text,
                "Dry run: would write to output file [{}]",
                self.output.display()
            );
        } else {
            let _ = writeln!(text, "Writing to output file [{}]", self.output.display());
        }
        let _ = write!(
            text,
            "Rewrote {} of {} lines",
            self.rewritten_lines.len(),
            self.total_lines
        );
        text
    }

    /// Render according to the selected report format
    ///
    /// # Errors
    ///
    /// Returns `Report` if JSON serialization fails.
    pub fn render(&self, format: ReportFormat) -> Result<String> {
        match format {
            ReportFormat::Text => Ok(self.to_text()),
            ReportFormat::Json => self.to_json(),
        }
    }
}
