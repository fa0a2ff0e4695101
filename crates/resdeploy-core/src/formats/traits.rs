//! Common traits for archive format readers.

use std::io::Read;

use crate::Result;
use crate::copy::CopyBuffer;
use crate::copy::copy_with_buffer;

/// Kind of an archive entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// Regular file with contents.
    File,
    /// Directory marker.
    Directory,
    /// Links, devices and anything else that is neither.
    Other,
}

/// One entry handed out during enumeration.
///
/// The reader is only valid inside the visitor call.
pub struct ArchiveEntry<'a> {
    /// Entry name as stored in the archive.
    pub name: String,
    /// Entry kind.
    pub kind: EntryKind,
    /// Entry contents; empty for directories.
    pub reader: &'a mut dyn Read,
}

impl ArchiveEntry<'_> {
    /// Returns `true` for directory markers.
    #[must_use]
    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }
}

/// Visitor invoked once per archive entry.
pub type EntryVisitor<'v> = dyn FnMut(ArchiveEntry<'_>) -> Result<()> + 'v;

/// Trait for archive format readers.
pub trait ArchiveFormat {
    /// Visits every entry in the archive, in the order the format stores
    /// them.
    ///
    /// # Errors
    ///
    /// Returns the first error from reading the archive or from `visit`.
    fn for_each_entry(&mut self, visit: &mut EntryVisitor<'_>) -> Result<()>;

    /// Reads the full contents of the file entry called `name`.
    ///
    /// Returns `Ok(None)` if no file entry has that name.
    ///
    /// # Errors
    ///
    /// Returns an error if the archive cannot be read.
    fn read_entry(&mut self, name: &str) -> Result<Option<Vec<u8>>> {
        let mut found = None;
        let mut buffer = CopyBuffer::new();
        self.for_each_entry(&mut |entry: ArchiveEntry<'_>| {
            if found.is_none() && entry.kind == EntryKind::File && entry.name == name {
                let mut contents = Vec::new();
                copy_with_buffer(entry.reader, &mut contents, &mut buffer)?;
                found = Some(contents);
            }
            Ok(())
        })?;
        Ok(found)
    }

    /// Returns the archive format name.
    fn format_name(&self) -> &str;
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::io::Cursor;

    struct FixedEntries(Vec<(&'static str, EntryKind, &'static [u8])>);

    impl ArchiveFormat for FixedEntries {
        fn for_each_entry(&mut self, visit: &mut EntryVisitor<'_>) -> Result<()> {
            for (name, kind, data) in &self.0 {
                let mut reader = Cursor::new(*data);
                visit(ArchiveEntry {
                    name: (*name).to_string(),
                    kind: *kind,
                    reader: &mut reader,
                })?;
            }
            Ok(())
        }

        fn format_name(&self) -> &str {
            "fixed"
        }
    }

    #[test]
    fn test_default_read_entry() {
        let mut archive = FixedEntries(vec![
            ("web/", EntryKind::Directory, b""),
            ("web/a.css", EntryKind::File, b"body {}"),
        ]);

        assert_eq!(archive.format_name(), "fixed");
        assert_eq!(
            archive.read_entry("web/a.css").unwrap().as_deref(),
            Some(&b"body {}"[..])
        );
        assert!(archive.read_entry("web/").unwrap().is_none());
        assert!(archive.read_entry("missing").unwrap().is_none());
    }
}
