//! Copies from plain filesystem sources.
//!
//! Unlike archive extraction these are strict: the first error is returned
//! to the caller.

use std::fs;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::path::PathBuf;
use std::time::Instant;
use std::time::SystemTime;

use walkdir::WalkDir;

use crate::CopyOptions;
use crate::CopyReport;
use crate::ResourceError;
use crate::Result;
use crate::copy::CopyBuffer;
use crate::filter::PathFilter;
use crate::filter::accepts;

use super::write_file;

/// Recursively copies the tree under `src` into `dest`.
///
/// `dest` and any missing subdirectories are created. `filter` is consulted
/// once per regular file with the file's destination path; directories are
/// always created. Symbolic links are skipped. If `dest` lies inside `src`
/// that subtree is left out of the copy.
///
/// # Errors
///
/// Returns an error if `src` is missing or not a directory, if `src` and
/// `dest` are the same directory, or on any I/O failure.
pub fn copy_directory(
    src: impl AsRef<Path>,
    dest: impl AsRef<Path>,
    filter: Option<&dyn PathFilter>,
    options: &CopyOptions,
) -> Result<CopyReport> {
    let src = src.as_ref();
    let dest = dest.as_ref();
    let start = Instant::now();

    if !src.exists() {
        return Err(ResourceError::SourceNotFound {
            path: src.to_path_buf(),
        });
    }
    if !src.is_dir() {
        return Err(ResourceError::Io(std::io::Error::new(
            std::io::ErrorKind::NotADirectory,
            format!("{} is not a directory", src.display()),
        )));
    }

    fs::create_dir_all(dest)?;
    let excluded = nested_destination(src, dest)?;

    let mut report = CopyReport::new();
    let mut buffer = CopyBuffer::new();
    let walker = WalkDir::new(src)
        .min_depth(1)
        .into_iter()
        .filter_entry(|entry| excluded.as_deref() != Some(entry.path()));

    for entry in walker {
        let entry = entry?;
        let relative = entry
            .path()
            .strip_prefix(src)
            .map_err(|e| ResourceError::Io(std::io::Error::other(e)))?;
        let target = dest.join(relative);
        let file_type = entry.file_type();

        if file_type.is_dir() {
            fs::create_dir_all(&target)?;
            report.directories_created += 1;
        } else if file_type.is_file() {
            if !accepts(filter, &target) {
                log::debug!("filter rejected {}", target.display());
                report.files_skipped += 1;
                continue;
            }
            if !options.overwrite && target.exists() {
                report.files_skipped += 1;
                continue;
            }
            report.bytes_written += copy_contents(entry.path(), &target, options, &mut buffer)?;
            report.files_copied += 1;
        } else {
            log::debug!("skipping {}: not a regular file", entry.path().display());
        }
    }

    report.duration = start.elapsed();
    Ok(report)
}

/// Copies the single file `src` to the file path `dest`.
///
/// Missing parents of `dest` are created and an existing file is replaced
/// (unless overwriting is disabled). There is no filter on this path.
///
/// # Errors
///
/// Returns an error if `src` is missing, if `dest` is an existing directory,
/// if both name the same file, or on any I/O failure.
pub fn copy_file(
    src: impl AsRef<Path>,
    dest: impl AsRef<Path>,
    options: &CopyOptions,
) -> Result<CopyReport> {
    let src = src.as_ref();
    let dest = dest.as_ref();
    let start = Instant::now();

    if !src.exists() {
        return Err(ResourceError::SourceNotFound {
            path: src.to_path_buf(),
        });
    }
    if dest.is_dir() {
        return Err(ResourceError::DestinationIsDirectory {
            path: dest.to_path_buf(),
        });
    }

    let mut report = CopyReport::new();
    if dest.exists() {
        if fs::canonicalize(src)? == fs::canonicalize(dest)? {
            return Err(ResourceError::SameFile {
                source_path: src.to_path_buf(),
                destination: dest.to_path_buf(),
            });
        }
        if !options.overwrite {
            report.files_skipped += 1;
            report.duration = start.elapsed();
            return Ok(report);
        }
    }

    report.bytes_written = copy_contents(src, dest, options, &mut CopyBuffer::new())?;
    report.files_copied = 1;
    report.duration = start.elapsed();
    Ok(report)
}

fn copy_contents(
    src: &Path,
    dest: &Path,
    options: &CopyOptions,
    buffer: &mut CopyBuffer,
) -> Result<u64> {
    let file = File::open(src)?;
    let modified: Option<SystemTime> = if options.preserve_timestamps {
        Some(file.metadata()?.modified()?)
    } else {
        None
    };
    let mut reader = BufReader::new(file);
    write_file(&mut reader, dest, modified, buffer)
}

/// If `dest` is inside `src`, returns the path under `src` the walk should
/// skip. Both directories must exist.
fn nested_destination(src: &Path, dest: &Path) -> Result<Option<PathBuf>> {
    let canonical_src = fs::canonicalize(src)?;
    let canonical_dest = fs::canonicalize(dest)?;

    if canonical_dest == canonical_src {
        return Err(ResourceError::SameFile {
            source_path: src.to_path_buf(),
            destination: dest.to_path_buf(),
        });
    }

    Ok(canonical_dest
        .strip_prefix(&canonical_src)
        .ok()
        .map(|inner| src.join(inner)))
}
