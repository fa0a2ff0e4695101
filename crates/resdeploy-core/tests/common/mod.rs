//! Shared helpers for integration tests.

#![allow(dead_code, clippy::unwrap_used)]

use std::collections::BTreeSet;
use std::fs;
use std::io::Cursor;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;
use std::sync::Once;

use walkdir::WalkDir;

static INIT: Once = Once::new();

/// Installs `env_logger` once per test binary.
pub fn init_logging() {
    INIT.call_once(|| {
        let _ = env_logger::builder().is_test(true).try_init();
    });
}

/// Entry in a test archive: a file with contents, or a directory marker.
pub enum Entry<'a> {
    File(&'a str, &'a [u8]),
    Dir(&'a str),
}

/// Writes a stored ZIP archive with `entries` to `dir/name`.
pub fn write_zip(dir: &Path, name: &str, entries: &[Entry<'_>]) -> PathBuf {
    let options = zip::write::SimpleFileOptions::default()
        .compression_method(zip::CompressionMethod::Stored)
        .unix_permissions(0o644);
    let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));

    for entry in entries {
        match entry {
            Entry::File(path, data) => {
                writer.start_file(*path, options).unwrap();
                writer.write_all(data).unwrap();
            }
            Entry::Dir(path) => writer.add_directory(*path, options).unwrap(),
        }
    }

    let path = dir.join(name);
    fs::write(&path, writer.finish().unwrap().into_inner()).unwrap();
    path
}

/// Writes a gzip-compressed tar archive with `entries` to `dir/name`.
pub fn write_tar_gz(dir: &Path, name: &str, entries: &[Entry<'_>]) -> PathBuf {
    let encoder = flate2::write::GzEncoder::new(Vec::new(), flate2::Compression::default());
    let mut builder = tar::Builder::new(encoder);

    for entry in entries {
        let mut header = tar::Header::new_gnu();
        match entry {
            Entry::File(path, data) => {
                header.set_size(data.len() as u64);
                header.set_mode(0o644);
                header.set_cksum();
                builder.append_data(&mut header, path, *data).unwrap();
            }
            Entry::Dir(path) => {
                header.set_entry_type(tar::EntryType::Directory);
                header.set_size(0);
                header.set_mode(0o755);
                header.set_cksum();
                builder
                    .append_data(&mut header, path, std::io::empty())
                    .unwrap();
            }
        }
    }

    let path = dir.join(name);
    let data = builder.into_inner().unwrap().finish().unwrap();
    fs::write(&path, data).unwrap();
    path
}

/// The sample layout used across tests: two entries under `prefix`, an
/// explicit directory marker and one entry outside the mount.
pub const SAMPLE: &[Entry<'static>] = &[
    Entry::File("prefix/a.txt", b"alpha"),
    Entry::Dir("prefix/sub/"),
    Entry::File("prefix/sub/b.txt", b"bravo"),
    Entry::File("other/c.txt", b"charlie"),
];

/// Every file and directory under `root`, relative and `/`-joined.
/// Directories carry a trailing `/`.
pub fn tree(root: &Path) -> BTreeSet<String> {
    WalkDir::new(root)
        .min_depth(1)
        .into_iter()
        .map(|entry| {
            let entry = entry.unwrap();
            let relative = entry
                .path()
                .strip_prefix(root)
                .unwrap()
                .iter()
                .map(|part| part.to_string_lossy().into_owned())
                .collect::<Vec<_>>()
                .join("/");
            if entry.file_type().is_dir() {
                format!("{relative}/")
            } else {
                relative
            }
        })
        .collect()
}

/// Builds the expected output of [`tree`] from string literals.
pub fn set(items: &[&str]) -> BTreeSet<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}
