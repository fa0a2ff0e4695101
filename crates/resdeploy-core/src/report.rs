//! Copy operation reporting.

use std::time::Duration;

/// Report of a resource copy operation.
///
/// Best-effort operations never return an error; when one stops early the
/// reason is kept in [`failure`](Self::failure) and everything counted before
/// that point is already on disk.
#[derive(Debug, Clone, Default)]
pub struct CopyReport {
    /// Number of files written.
    pub files_copied: usize,

    /// Number of directories created or confirmed from directory markers.
    pub directories_created: usize,

    /// Number of files the filter rejected or that already existed with
    /// overwriting disabled.
    pub files_skipped: usize,

    /// Total bytes written to disk.
    pub bytes_written: u64,

    /// Duration of the operation.
    pub duration: Duration,

    /// Warnings generated during the copy: archive entries skipped because
    /// they are links or special files, and the failure that stopped a
    /// best-effort copy.
    pub warnings: Vec<String>,

    /// Why a best-effort copy stopped early, if it did.
    pub failure: Option<String>,
}

impl CopyReport {
    /// Creates a new empty report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a warning message to the report.
    pub fn add_warning(&mut self, message: String) {
        self.warnings.push(message);
    }

    /// Returns the number of files and directories written.
    #[must_use]
    pub fn total_items(&self) -> usize {
        self.files_copied + self.directories_created
    }

    /// Returns whether any warnings were generated.
    #[must_use]
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Returns `true` unless a best-effort copy stopped early.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.failure.is_none()
    }

    /// Records the failure that stopped a best-effort copy.
    pub(crate) fn record_failure(&mut self, message: String) {
        self.warnings.push(message.clone());
        self.failure = Some(message);
    }
}
