//! High-level public API for copying bundled resources.

use std::path::Path;

use crate::CopyOptions;
use crate::CopyReport;
use crate::Result;
use crate::extraction::copy_archive_entries;
use crate::extraction::copy_directory;
use crate::extraction::copy_file;
use crate::filter::PathFilter;
use crate::locator::Connection;
use crate::locator::ResourceLocator;

/// Copies the resources a locator points at into `dest`.
///
/// - `None` locator: nothing happens and an empty report is returned.
/// - Archive-backed locator: entries under the mount prefix are extracted
///   best-effort; failures are logged and recorded in the report, never
///   returned.
/// - Plain directory: the tree is copied into `dest`, consulting `filter`
///   for every file.
/// - Plain file: the file is copied to `dest` as a file path. `filter` is
///   not consulted on this path.
///
/// # Errors
///
/// Returns an error only from the plain filesystem branches.
///
/// # Examples
///
/// ```no_run
/// use resdeploy_core::PatternFilter;
/// use resdeploy_core::ResourceLocator;
/// use resdeploy_core::copy_resources;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let locator: ResourceLocator = "jar:file:/opt/app.jar!/layout".parse()?;
/// let skip_maps = PatternFilter::new(["*.map"]);
/// let report = copy_resources(Some(&locator), "/srv/site", Some(&skip_maps))?;
/// println!("Copied {} files", report.files_copied);
/// # Ok(())
/// # }
/// ```
pub fn copy_resources(
    locator: Option<&ResourceLocator>,
    dest: impl AsRef<Path>,
    filter: Option<&dyn PathFilter>,
) -> Result<CopyReport> {
    copy_resources_with_options(locator, dest, filter, &CopyOptions::default())
}

/// [`copy_resources`] with explicit [`CopyOptions`].
///
/// # Errors
///
/// Returns an error only from the plain filesystem branches.
pub fn copy_resources_with_options(
    locator: Option<&ResourceLocator>,
    dest: impl AsRef<Path>,
    filter: Option<&dyn PathFilter>,
    options: &CopyOptions,
) -> Result<CopyReport> {
    let Some(locator) = locator else {
        return Ok(CopyReport::new());
    };
    let dest = dest.as_ref();

    match locator.connect() {
        Connection::Archive(connection) => {
            log::debug!("extracting {locator} into {}", dest.display());
            Ok(copy_archive_entries(&connection, dest, filter, options))
        }
        Connection::Plain(path) if path.is_dir() => {
            log::debug!("copying directory {} into {}", path.display(), dest.display());
            copy_directory(&path, dest, filter, options)
        }
        Connection::Plain(path) => {
            log::debug!("copying file {} to {}", path.display(), dest.display());
            copy_file(&path, dest, options)
        }
    }
}
