//! JSON output formatter for machine-readable results.

use super::formatter::JsonOutput;
use super::formatter::OutputFormatter;
use super::formatter::Status;
use anyhow::Result;
use resdeploy_core::CopyReport;
use resdeploy_core::ResourceLocator;
use serde::Serialize;
use std::io::Write;
use std::io::{self};
use std::path::Path;

pub struct JsonFormatter;

#[derive(Serialize)]
struct CopyOutput {
    locator: String,
    files_copied: usize,
    directories_created: usize,
    files_skipped: usize,
    bytes_written: u64,
    duration_ms: u128,
    warnings: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    failure: Option<String>,
}

impl CopyOutput {
    fn new(locator: &ResourceLocator, report: &CopyReport) -> Self {
        Self {
            locator: locator.to_string(),
            files_copied: report.files_copied,
            directories_created: report.directories_created,
            files_skipped: report.files_skipped,
            bytes_written: report.bytes_written,
            duration_ms: report.duration.as_millis(),
            warnings: report.warnings.clone(),
            failure: report.failure.clone(),
        }
    }
}

impl JsonFormatter {
    fn output<T: Serialize>(value: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(value)?;
        writeln!(io::stdout(), "{json}")?;
        Ok(())
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_copy_result(&self, locator: &ResourceLocator, report: &CopyReport) -> Result<()> {
        let status = if report.is_complete() {
            Status::Success
        } else {
            Status::Partial
        };
        Self::output(&JsonOutput::new(
            "copy",
            status,
            CopyOutput::new(locator, report),
        ))
    }

    fn format_write_result(&self, name: &str, dest: &Path, bytes: u64) -> Result<()> {
        #[derive(Serialize)]
        struct WriteOutput {
            name: String,
            destination: String,
            bytes_written: u64,
        }

        let data = WriteOutput {
            name: name.to_string(),
            destination: dest.display().to_string(),
            bytes_written: bytes,
        };
        Self::output(&JsonOutput::success("write", data))
    }
}
