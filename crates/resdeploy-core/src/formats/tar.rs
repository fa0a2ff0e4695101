//! Tar archive reader, plain or gzip-compressed.

use std::fs::File;
use std::io::BufReader;
use std::io::Read;
use std::path::Path;

use flate2::read::GzDecoder;

use crate::Result;

use super::traits::ArchiveEntry;
use super::traits::ArchiveFormat;
use super::traits::EntryKind;
use super::traits::EntryVisitor;

/// Tar archive reader.
///
/// Tar is a stream format, so each reader supports one enumeration pass.
pub struct TarArchive<R: Read> {
    inner: tar::Archive<R>,
}

impl TarArchive<BufReader<File>> {
    /// Opens an uncompressed tar archive from disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened.
    pub fn open(path: &Path) -> Result<Self> {
        Ok(Self::new(BufReader::new(File::open(path)?)))
    }
}

impl TarArchive<GzDecoder<BufReader<File>>> {
    /// Opens a gzip-compressed tar archive from disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened.
    pub fn open_gz(path: &Path) -> Result<Self> {
        let file = BufReader::new(File::open(path)?);
        Ok(Self::new(GzDecoder::new(file)))
    }
}

impl<R: Read> TarArchive<R> {
    /// Wraps a reader producing tar data.
    pub fn new(reader: R) -> Self {
        Self {
            inner: tar::Archive::new(reader),
        }
    }
}

impl<R: Read> ArchiveFormat for TarArchive<R> {
    fn for_each_entry(&mut self, visit: &mut EntryVisitor<'_>) -> Result<()> {
        for entry in self.inner.entries()? {
            let mut entry = entry?;
            let name = String::from_utf8_lossy(&entry.path_bytes()).into_owned();
            let entry_type = entry.header().entry_type();
            let kind = if entry_type.is_dir() {
                EntryKind::Directory
            } else if entry_type.is_file() {
                EntryKind::File
            } else {
                EntryKind::Other
            };
            visit(ArchiveEntry {
                name,
                kind,
                reader: &mut entry,
            })?;
        }
        Ok(())
    }

    fn format_name(&self) -> &str {
        "tar"
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::test_utils::TarTestBuilder;
    use flate2::Compression;
    use flate2::write::GzEncoder;
    use std::io::Cursor;
    use std::io::Write;

    fn names_and_kinds<A: ArchiveFormat>(archive: &mut A) -> Vec<(String, EntryKind)> {
        let mut seen = Vec::new();
        archive
            .for_each_entry(&mut |entry: ArchiveEntry<'_>| {
                let name = entry.name.trim_end_matches('/').to_string();
                seen.push((name, entry.kind));
                Ok(())
            })
            .unwrap();
        seen.sort_by(|a, b| a.0.cmp(&b.0));
        seen
    }

    #[test]
    fn test_enumerates_entries() {
        let data = TarTestBuilder::new()
            .add_directory("web/")
            .add_file("web/site.css", b"h1 {}")
            .add_symlink("web/link.css", "site.css")
            .build();
        let mut archive = TarArchive::new(Cursor::new(data));
        assert_eq!(archive.format_name(), "tar");

        assert_eq!(
            names_and_kinds(&mut archive),
            vec![
                ("web".to_string(), EntryKind::Directory),
                ("web/link.css".to_string(), EntryKind::Other),
                ("web/site.css".to_string(), EntryKind::File),
            ]
        );
    }

    #[test]
    fn test_reads_gzip_stream() {
        let data = TarTestBuilder::new()
            .add_file("web/site.css", b"h1 {}")
            .build();
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(&data).unwrap();
        let compressed = encoder.finish().unwrap();

        let mut archive = TarArchive::new(GzDecoder::new(Cursor::new(compressed)));
        assert_eq!(
            archive.read_entry("web/site.css").unwrap().as_deref(),
            Some(&b"h1 {}"[..])
        );
    }
}
