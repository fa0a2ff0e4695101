//! Resource locators and the connections they resolve to.
//!
//! A locator names either a directory or file on disk, or a directory inside
//! a packed archive. The textual form follows the URL shapes runtimes hand
//! out for bundled resources:
//!
//! | text | meaning |
//! |------|---------|
//! | `jar:file:/opt/app.jar!/layout` | entry prefix `layout` inside a jar |
//! | `zip:/opt/assets.zip!/layout` | entry prefix `layout` inside a zip |
//! | `tar:/opt/assets.tar.gz!/layout` | entry prefix `layout` inside a tarball |
//! | `file:/opt/assets/layout` | plain path |
//! | `/opt/assets/layout` | plain path |

use std::fmt;
use std::path::Path;
use std::path::PathBuf;
use std::str::FromStr;

use crate::ResourceError;
use crate::Result;

const ARCHIVE_SEPARATOR: &str = "!/";

/// Identifies a set of bundled resources to copy.
///
/// # Examples
///
/// ```
/// use resdeploy_core::Connection;
/// use resdeploy_core::ResourceLocator;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let locator: ResourceLocator = "jar:file:/opt/app.jar!/layout".parse()?;
/// match locator.connect() {
///     Connection::Archive(conn) => assert_eq!(conn.entry_name(), "layout"),
///     Connection::Plain(_) => unreachable!(),
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceLocator {
    /// A directory (or single file) inside a packed archive.
    Archive {
        /// Path of the archive file.
        archive: PathBuf,
        /// Entry prefix inside the archive, without leading or trailing `/`.
        entry: String,
        /// Scheme the locator was written with.
        scheme: ArchiveScheme,
    },
    /// A directory or file on the regular filesystem.
    File(PathBuf),
}

/// URL scheme of an archive-backed locator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArchiveScheme {
    /// `jar:file:<path>!/<entry>`
    Jar,
    /// `zip:<path>!/<entry>`
    Zip,
    /// `tar:<path>!/<entry>`
    Tar,
}

impl ArchiveScheme {
    fn prefix(self) -> &'static str {
        match self {
            Self::Jar => "jar:file:",
            Self::Zip => "zip:",
            Self::Tar => "tar:",
        }
    }
}

impl ResourceLocator {
    /// Locator for a plain filesystem path.
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self::File(path.into())
    }

    /// Locator for an entry prefix inside an archive.
    ///
    /// The scheme is chosen from the archive's file name: tarballs get
    /// `tar:`, `.jar` files get `jar:`, anything else `zip:`.
    pub fn archive(archive: impl Into<PathBuf>, entry: &str) -> Self {
        let archive = archive.into();
        let scheme = scheme_for(&archive);
        Self::Archive {
            archive,
            entry: normalize_entry(entry),
            scheme,
        }
    }

    /// Parses the textual form of a locator.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::InvalidLocator`] for empty text, or for an
    /// archive scheme without a `!/` separator.
    pub fn parse(text: &str) -> Result<Self> {
        let text = text.trim();
        if text.is_empty() {
            return Err(ResourceError::InvalidLocator(
                "locator is empty".to_string(),
            ));
        }

        for scheme in [ArchiveScheme::Jar, ArchiveScheme::Zip, ArchiveScheme::Tar] {
            if let Some(rest) = text.strip_prefix(scheme.prefix()) {
                return parse_archive(text, strip_authority(rest), scheme);
            }
        }

        if text.starts_with("jar:") {
            return Err(ResourceError::InvalidLocator(format!(
                "{text}: jar locators must point at a file: URL"
            )));
        }

        let path = text.strip_prefix("file:").map_or(text, strip_authority);
        Ok(Self::File(PathBuf::from(path)))
    }

    /// Resolves the locator into the connection used to copy from it.
    #[must_use]
    pub fn connect(&self) -> Connection {
        match self {
            Self::Archive { archive, entry, .. } => Connection::Archive(ArchiveConnection {
                archive: archive.clone(),
                entry_name: entry.clone(),
            }),
            Self::File(path) => Connection::Plain(path.clone()),
        }
    }

    /// Returns `true` if the locator points inside an archive.
    #[must_use]
    pub fn is_archive(&self) -> bool {
        matches!(self, Self::Archive { .. })
    }
}

impl FromStr for ResourceLocator {
    type Err = ResourceError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for ResourceLocator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Archive {
                archive,
                entry,
                scheme,
            } => write!(
                f,
                "{}{}{ARCHIVE_SEPARATOR}{entry}",
                scheme.prefix(),
                url_path(archive)
            ),
            Self::File(path) => write!(f, "file:{}", url_path(path)),
        }
    }
}

/// What a [`ResourceLocator`] resolves to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Connection {
    /// Entries under a prefix inside an archive.
    Archive(ArchiveConnection),
    /// A path on the regular filesystem.
    Plain(PathBuf),
}

/// An archive file plus the entry prefix mounted from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveConnection {
    archive: PathBuf,
    entry_name: String,
}

impl ArchiveConnection {
    /// Creates a connection to `entry_name` inside `archive`.
    pub fn new(archive: impl Into<PathBuf>, entry_name: &str) -> Self {
        Self {
            archive: archive.into(),
            entry_name: normalize_entry(entry_name),
        }
    }

    /// Path of the archive file.
    #[must_use]
    pub fn archive_path(&self) -> &Path {
        &self.archive
    }

    /// The mount prefix; empty when the archive root is mounted.
    #[must_use]
    pub fn entry_name(&self) -> &str {
        &self.entry_name
    }
}

fn parse_archive(text: &str, rest: &str, scheme: ArchiveScheme) -> Result<ResourceLocator> {
    let Some((archive, entry)) = rest.split_once(ARCHIVE_SEPARATOR) else {
        return Err(ResourceError::InvalidLocator(format!(
            "{text}: missing '{ARCHIVE_SEPARATOR}' between archive and entry"
        )));
    };
    if archive.is_empty() {
        return Err(ResourceError::InvalidLocator(format!(
            "{text}: archive path is empty"
        )));
    }

    Ok(ResourceLocator::Archive {
        archive: PathBuf::from(archive),
        entry: normalize_entry(entry),
        scheme,
    })
}

/// Drops an empty `//` authority, turning `///opt/x` into `/opt/x`.
fn strip_authority(path: &str) -> &str {
    path.strip_prefix("//").unwrap_or(path)
}

/// Renders `path` for a locator. A path starting with `//` gets an empty
/// authority in front so [`strip_authority`] gives it back unchanged.
fn url_path(path: &Path) -> String {
    let path = path.display().to_string();
    if path.starts_with("//") {
        format!("//{path}")
    } else {
        path
    }
}

fn normalize_entry(entry: &str) -> String {
    entry.trim_matches('/').to_string()
}

fn scheme_for(archive: &Path) -> ArchiveScheme {
    let name = archive
        .file_name()
        .map(|n| n.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();

    if name.ends_with(".tar") || name.ends_with(".tar.gz") || name.ends_with(".tgz") {
        ArchiveScheme::Tar
    } else if name.ends_with(".jar") {
        ArchiveScheme::Jar
    } else {
        ArchiveScheme::Zip
    }
}
