//! Named resources bundled with a program.
//!
//! A bundle maps logical names such as `/layout/main.css` to bytes. Names
//! always use `/` separators; a leading `/` is optional.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufReader;
use std::io::Cursor;
use std::io::Read;
use std::path::Path;
use std::path::PathBuf;

use crate::Result;
use crate::formats::ArchiveEntry;
use crate::formats::open_archive;
use crate::locator::ResourceLocator;
use crate::types::EntryPath;

/// A set of resources addressed by logical name.
pub trait ResourceBundle {
    /// Opens the resource called `name` for reading.
    ///
    /// Returns `Ok(None)` if the bundle has no such resource.
    ///
    /// # Errors
    ///
    /// Returns an error if the name tries to escape the bundle or the
    /// underlying storage cannot be read.
    fn open(&self, name: &str) -> Result<Option<Box<dyn Read + '_>>>;

    /// Returns a locator for `name` that [`copy_resources`] understands.
    ///
    /// Returns `Ok(None)` if the bundle has nothing under that name or cannot
    /// be addressed by locator.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying storage cannot be read.
    ///
    /// [`copy_resources`]: crate::copy_resources
    fn locate(&self, name: &str) -> Result<Option<ResourceLocator>>;
}

impl<B: ResourceBundle + ?Sized> ResourceBundle for Box<B> {
    fn open(&self, name: &str) -> Result<Option<Box<dyn Read + '_>>> {
        (**self).open(name)
    }

    fn locate(&self, name: &str) -> Result<Option<ResourceLocator>> {
        (**self).locate(name)
    }
}

/// Converts a logical name into the `/`-separated form stored in bundles.
fn normalize_name(name: &str) -> Result<String> {
    let path = EntryPath::new(name)?;
    let parts: Vec<_> = path
        .as_path()
        .iter()
        .map(|part| part.to_string_lossy())
        .collect();
    Ok(parts.join("/"))
}

/// Resources stored as loose files under a root directory.
#[derive(Debug, Clone)]
pub struct DirectoryBundle {
    root: PathBuf,
}

impl DirectoryBundle {
    /// Creates a bundle rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The bundle's root directory.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resolve(&self, name: &str) -> Result<PathBuf> {
        Ok(EntryPath::new(name)?.resolve(&self.root))
    }
}

impl ResourceBundle for DirectoryBundle {
    fn open(&self, name: &str) -> Result<Option<Box<dyn Read + '_>>> {
        let path = self.resolve(name)?;
        if !path.is_file() {
            return Ok(None);
        }
        Ok(Some(Box::new(BufReader::new(File::open(path)?))))
    }

    fn locate(&self, name: &str) -> Result<Option<ResourceLocator>> {
        let path = self.resolve(name)?;
        Ok(path.exists().then(|| ResourceLocator::File(path)))
    }
}

/// Resources stored as entries of a zip/jar or tar archive.
///
/// The archive is reopened on every call.
#[derive(Debug, Clone)]
pub struct ArchiveBundle {
    archive: PathBuf,
}

impl ArchiveBundle {
    /// Creates a bundle backed by the archive at `archive`.
    pub fn new(archive: impl Into<PathBuf>) -> Self {
        Self {
            archive: archive.into(),
        }
    }

    /// Path of the backing archive.
    #[must_use]
    pub fn archive_path(&self) -> &Path {
        &self.archive
    }
}

impl ResourceBundle for ArchiveBundle {
    fn open(&self, name: &str) -> Result<Option<Box<dyn Read + '_>>> {
        let name = normalize_name(name)?;
        let contents = open_archive(&self.archive)?.read_entry(&name)?;
        Ok(contents.map(|bytes| Box::new(Cursor::new(bytes)) as Box<dyn Read + '_>))
    }

    fn locate(&self, name: &str) -> Result<Option<ResourceLocator>> {
        let name = normalize_name(name)?;
        let mut archive = open_archive(&self.archive)?;
        let mut found = false;

        if name.is_empty() {
            found = true;
        } else {
            let as_dir = format!("{name}/");
            archive.for_each_entry(&mut |entry: ArchiveEntry<'_>| {
                found |= entry.name == name || entry.name.starts_with(&as_dir);
                Ok(())
            })?;
        }

        Ok(found.then(|| ResourceLocator::archive(&self.archive, &name)))
    }
}

/// Resources compiled into the binary.
///
/// # Examples
///
/// ```
/// use resdeploy_core::EmbeddedBundle;
/// use resdeploy_core::ResourceBundle;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let bundle = EmbeddedBundle::new([("layout/main.css", &b"body {}"[..])]);
/// assert!(bundle.open("/layout/main.css")?.is_some());
/// assert!(bundle.open("/layout/other.css")?.is_none());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct EmbeddedBundle {
    entries: BTreeMap<String, &'static [u8]>,
}

impl EmbeddedBundle {
    /// Creates a bundle from `(name, contents)` pairs.
    ///
    /// Names are normalized the same way lookups are. A name that climbs out
    /// of the bundle with `..` is dropped with a warning.
    pub fn new<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (&'static str, &'static [u8])>,
    {
        entries
            .into_iter()
            .fold(Self::default(), |bundle, (name, data)| bundle.with(name, data))
    }

    /// Adds or replaces a resource.
    #[must_use]
    pub fn with(mut self, name: &'static str, data: &'static [u8]) -> Self {
        match normalize_name(name) {
            Ok(key) => {
                self.entries.insert(key, data);
            }
            Err(e) => log::warn!("ignoring embedded resource {name}: {e}"),
        }
        self
    }

    /// Number of resources in the bundle.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the bundle holds no resources.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl ResourceBundle for EmbeddedBundle {
    fn open(&self, name: &str) -> Result<Option<Box<dyn Read + '_>>> {
        let name = normalize_name(name)?;
        Ok(self
            .entries
            .get(&name)
            .map(|data| Box::new(Cursor::new(*data)) as Box<dyn Read + '_>))
    }

    /// Embedded resources have no location on disk.
    fn locate(&self, _name: &str) -> Result<Option<ResourceLocator>> {
        Ok(None)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::ResourceError;
    use crate::test_utils::ZipTestBuilder;
    use std::fs;
    use tempfile::TempDir;

    fn read_all(mut reader: Box<dyn Read + '_>) -> String {
        let mut out = String::new();
        reader.read_to_string(&mut out).unwrap();
        out
    }

    #[test]
    fn test_normalize_name() {
        assert_eq!(normalize_name("/layout/main.css").unwrap(), "layout/main.css");
        assert_eq!(normalize_name("layout//main.css").unwrap(), "layout/main.css");
        assert_eq!(normalize_name("/").unwrap(), "");
        assert!(normalize_name("/../secret").is_err());
    }

    #[test]
    fn test_directory_bundle() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("layout")).unwrap();
        fs::write(temp.path().join("layout/main.css"), "body {}").unwrap();
        let bundle = DirectoryBundle::new(temp.path());

        assert_eq!(
            read_all(bundle.open("/layout/main.css").unwrap().unwrap()),
            "body {}"
        );
        assert!(bundle.open("/layout").unwrap().is_none());
        assert!(bundle.open("/missing.css").unwrap().is_none());
        assert_eq!(
            bundle.locate("/layout").unwrap(),
            Some(ResourceLocator::File(temp.path().join("layout")))
        );
        assert!(bundle.locate("/nowhere").unwrap().is_none());
    }

    #[test]
    fn test_directory_bundle_rejects_escape() {
        let temp = TempDir::new().unwrap();
        let bundle = DirectoryBundle::new(temp.path().join("root"));
        assert!(matches!(
            bundle.open("../outside.txt"),
            Err(ResourceError::PathTraversal { .. })
        ));
    }

    #[test]
    fn test_archive_bundle() {
        let temp = TempDir::new().unwrap();
        let archive = temp.path().join("app.jar");
        fs::write(
            &archive,
            ZipTestBuilder::new()
                .add_directory("layout/")
                .add_file("layout/main.css", b"body {}")
                .build(),
        )
        .unwrap();
        let bundle = ArchiveBundle::new(&archive);

        assert_eq!(
            read_all(bundle.open("/layout/main.css").unwrap().unwrap()),
            "body {}"
        );
        assert!(bundle.open("/layout/absent.css").unwrap().is_none());
        assert_eq!(
            bundle.locate("/layout").unwrap(),
            Some(ResourceLocator::archive(&archive, "layout"))
        );
        assert!(bundle.locate("/lay").unwrap().is_none());
    }

    #[test]
    fn test_embedded_bundle() {
        let bundle = EmbeddedBundle::default()
            .with("/fonts/a.woff", b"woff")
            .with("fonts/b.woff", b"woff2");

        assert_eq!(bundle.len(), 2);
        assert_eq!(read_all(bundle.open("fonts/a.woff").unwrap().unwrap()), "woff");
        assert_eq!(read_all(bundle.open("/fonts/b.woff").unwrap().unwrap()), "woff2");
        assert!(bundle.locate("/fonts").unwrap().is_none());
    }

    #[test]
    fn test_embedded_keys_are_normalized() {
        let bundle = EmbeddedBundle::new([
            ("a//b.css", &b"b"[..]),
            ("./c.css", &b"c"[..]),
            ("../escape.css", &b"x"[..]),
        ]);

        assert_eq!(bundle.len(), 2);
        assert_eq!(read_all(bundle.open("/a/b.css").unwrap().unwrap()), "b");
        assert_eq!(read_all(bundle.open("a//b.css").unwrap().unwrap()), "b");
        assert_eq!(read_all(bundle.open("c.css").unwrap().unwrap()), "c");
    }
}
