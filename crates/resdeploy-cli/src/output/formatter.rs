//! Output formatter trait for CLI results.

use anyhow::Result;
use resdeploy_core::CopyReport;
use resdeploy_core::ResourceLocator;
use serde::Serialize;
use std::path::Path;

/// Common output formatter trait
pub trait OutputFormatter {
    /// Format the result of `resdeploy copy`
    fn format_copy_result(&self, locator: &ResourceLocator, report: &CopyReport) -> Result<()>;

    /// Format the result of `resdeploy write`
    fn format_write_result(&self, name: &str, dest: &Path, bytes: u64) -> Result<()>;
}

/// Generic JSON output structure
#[derive(Debug, Serialize)]
pub struct JsonOutput<T> {
    pub operation: String,
    pub status: Status,
    pub data: T,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
    /// A best-effort copy stopped before finishing.
    Partial,
}

impl<T: Serialize> JsonOutput<T> {
    pub fn new(operation: impl Into<String>, status: Status, data: T) -> Self {
        Self {
            operation: operation.into(),
            status,
            data,
        }
    }

    pub fn success(operation: impl Into<String>, data: T) -> Self {
        Self::new(operation, Status::Success, data)
    }
}
