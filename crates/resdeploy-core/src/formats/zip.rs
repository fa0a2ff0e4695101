//! ZIP archive reader (zip, jar, war, ear).

use std::fs::File;
use std::io::BufReader;
use std::io::Read;
use std::io::Seek;
use std::path::Path;

use crate::ResourceError;
use crate::Result;

use super::traits::ArchiveEntry;
use super::traits::ArchiveFormat;
use super::traits::EntryKind;
use super::traits::EntryVisitor;

/// ZIP archive reader.
pub struct ZipArchive<R: Read + Seek> {
    inner: zip::ZipArchive<R>,
}

impl ZipArchive<BufReader<File>> {
    /// Opens a ZIP archive from disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or is not a valid ZIP.
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        Self::new(BufReader::new(file))
    }
}

impl<R: Read + Seek> ZipArchive<R> {
    /// Reads the central directory from `reader`.
    ///
    /// # Errors
    ///
    /// Returns an error if the data is not a valid ZIP archive.
    pub fn new(reader: R) -> Result<Self> {
        let inner = zip::ZipArchive::new(reader)?;
        Ok(Self { inner })
    }

    /// Number of entries in the central directory.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns `true` if the archive has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl<R: Read + Seek> ArchiveFormat for ZipArchive<R> {
    fn for_each_entry(&mut self, visit: &mut EntryVisitor<'_>) -> Result<()> {
        for index in 0..self.inner.len() {
            let mut file = self.inner.by_index(index)?;
            let name = file.name().to_string();
            let kind = if file.is_dir() {
                EntryKind::Directory
            } else {
                EntryKind::File
            };
            visit(ArchiveEntry {
                name,
                kind,
                reader: &mut file,
            })?;
        }
        Ok(())
    }

    fn read_entry(&mut self, name: &str) -> Result<Option<Vec<u8>>> {
        let mut file = match self.inner.by_name(name) {
            Ok(file) => file,
            Err(zip::result::ZipError::FileNotFound) => return Ok(None),
            Err(e) => return Err(ResourceError::from(e)),
        };
        if file.is_dir() {
            return Ok(None);
        }
        let mut contents = Vec::new();
        file.read_to_end(&mut contents)?;
        Ok(Some(contents))
    }

    fn format_name(&self) -> &str {
        "zip"
    }
}
