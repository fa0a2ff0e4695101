//! Archive entry names made safe to join onto a destination.

use std::path::Component;
use std::path::Path;
use std::path::PathBuf;

use crate::ResourceError;
use crate::Result;

/// A relative path derived from an archive entry name.
///
/// Guaranteed to contain only normal components, so joining it onto a
/// destination directory never leaves that directory. An empty path refers to
/// the destination itself.
///
/// # Examples
///
/// ```
/// use resdeploy_core::types::EntryPath;
/// use std::path::Path;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let path = EntryPath::new("/css/./site.css")?;
/// assert_eq!(path.as_path(), Path::new("css/site.css"));
///
/// assert!(EntryPath::new("/../../etc/passwd").is_err());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryPath(PathBuf);

impl EntryPath {
    /// Validates the part of an entry name left after stripping the mount
    /// prefix. A leading `/` is expected and ignored.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::PathTraversal`] if the name contains `..` or
    /// a drive prefix.
    pub fn new(relative_name: &str) -> Result<Self> {
        let trimmed = relative_name.trim_start_matches(['/', '\\']);
        let mut path = PathBuf::new();

        for component in Path::new(trimmed).components() {
            match component {
                Component::Normal(part) => path.push(part),
                Component::CurDir => {}
                Component::ParentDir | Component::RootDir | Component::Prefix(_) => {
                    return Err(ResourceError::PathTraversal {
                        path: PathBuf::from(relative_name),
                    });
                }
            }
        }

        Ok(Self(path))
    }

    /// Returns the validated relative path.
    #[must_use]
    pub fn as_path(&self) -> &Path {
        &self.0
    }

    /// Returns `true` if the path refers to the mount directory itself.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.0.as_os_str().is_empty()
    }

    /// Joins the path onto `dest`.
    #[must_use]
    pub fn resolve(&self, dest: &Path) -> PathBuf {
        if self.is_root() {
            dest.to_path_buf()
        } else {
            dest.join(&self.0)
        }
    }
}
