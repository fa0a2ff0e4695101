//! Best-effort extraction of a mounted archive directory.

use std::fs::create_dir_all;
use std::path::Path;
use std::time::Instant;

use crate::CopyOptions;
use crate::CopyReport;
use crate::Result;
use crate::copy::CopyBuffer;
use crate::filter::PathFilter;
use crate::filter::accepts;
use crate::formats::ArchiveEntry;
use crate::formats::EntryKind;
use crate::formats::open_archive;
use crate::locator::ArchiveConnection;
use crate::types::EntryPath;

use super::write_file;

/// Copies every entry under the connection's mount prefix into `dest`.
///
/// The whole archive is enumerated and each entry whose name starts with
/// `prefix/` is written to `dest` joined with the rest of its name. Directory
/// markers become directories; file entries are written only if `filter`
/// (when given) accepts their destination path. An empty prefix mounts the
/// archive root.
///
/// This never fails. The first error stops the copy, is logged at warn level
/// and is kept in [`CopyReport::failure`]; files already written stay on disk.
///
/// # Examples
///
/// ```no_run
/// use resdeploy_core::ArchiveConnection;
/// use resdeploy_core::CopyOptions;
/// use resdeploy_core::extraction::copy_archive_entries;
///
/// let conn = ArchiveConnection::new("/opt/app.jar", "layout");
/// let report = copy_archive_entries(&conn, "/srv/site", None, &CopyOptions::default());
/// if !report.is_complete() {
///     eprintln!("partial copy: {} files", report.files_copied);
/// }
/// ```
pub fn copy_archive_entries(
    connection: &ArchiveConnection,
    dest: impl AsRef<Path>,
    filter: Option<&dyn PathFilter>,
    options: &CopyOptions,
) -> CopyReport {
    let start = Instant::now();
    let mut report = CopyReport::new();

    if let Err(e) = try_copy_archive_entries(connection, dest.as_ref(), filter, options, &mut report)
    {
        log::warn!(
            "copying {}!/{} stopped early: {e}",
            connection.archive_path().display(),
            connection.entry_name()
        );
        report.record_failure(e.to_string());
    }

    report.duration = start.elapsed();
    report
}

fn try_copy_archive_entries(
    connection: &ArchiveConnection,
    dest: &Path,
    filter: Option<&dyn PathFilter>,
    options: &CopyOptions,
    report: &mut CopyReport,
) -> Result<()> {
    let mut archive = open_archive(connection.archive_path())?;
    let mount = match connection.entry_name() {
        "" => String::new(),
        prefix => format!("{prefix}/"),
    };
    let mut buffer = CopyBuffer::new();

    archive.for_each_entry(&mut |entry: ArchiveEntry<'_>| {
        let Some(rest) = entry.name.strip_prefix(mount.as_str()) else {
            return Ok(());
        };
        let target = EntryPath::new(rest)?.resolve(dest);

        match entry.kind {
            EntryKind::Directory => {
                create_dir_all(&target)?;
                report.directories_created += 1;
            }
            EntryKind::File => {
                if !accepts(filter, &target) {
                    log::debug!("filter rejected {}", target.display());
                    report.files_skipped += 1;
                } else if !options.overwrite && target.exists() {
                    log::debug!("keeping existing {}", target.display());
                    report.files_skipped += 1;
                } else {
                    let bytes = write_file(entry.reader, &target, None, &mut buffer)?;
                    log::debug!("{} -> {} ({bytes} bytes)", entry.name, target.display());
                    report.files_copied += 1;
                    report.bytes_written += bytes;
                }
            }
            EntryKind::Other => {
                log::debug!("skipping {}: not a file or directory", entry.name);
                report.add_warning(format!(
                    "skipped {}: not a regular file or directory",
                    entry.name
                ));
            }
        }
        Ok(())
    })
}
