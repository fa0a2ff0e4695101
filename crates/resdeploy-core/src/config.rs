//! Options controlling how resources are copied.

/// Options for directory, file and archive copies.
///
/// # Examples
///
/// ```
/// use resdeploy_core::CopyOptions;
///
/// // Same behavior as the plain `copy_resources` entry point
/// let options = CopyOptions::default();
/// assert!(options.preserve_timestamps);
/// assert!(options.overwrite);
///
/// // Keep files a previous deployment already wrote
/// let keep = CopyOptions::default().with_overwrite(false);
/// assert!(!keep.overwrite);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CopyOptions {
    /// Carry the source modification time over to copied files.
    ///
    /// Applies to plain directory-tree and single-file copies only. Archive
    /// entries are always written with the current time.
    pub preserve_timestamps: bool,

    /// Replace destination files that already exist.
    ///
    /// When `false`, existing files are left untouched and counted as
    /// skipped.
    pub overwrite: bool,
}

impl Default for CopyOptions {
    /// Default values:
    /// - `preserve_timestamps`: true
    /// - `overwrite`: true
    fn default() -> Self {
        Self {
            preserve_timestamps: true,
            overwrite: true,
        }
    }
}

impl CopyOptions {
    /// Sets whether modification times are preserved.
    #[must_use]
    pub const fn with_preserve_timestamps(mut self, preserve: bool) -> Self {
        self.preserve_timestamps = preserve;
        self
    }

    /// Sets whether existing destination files are replaced.
    #[must_use]
    pub const fn with_overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }
}
