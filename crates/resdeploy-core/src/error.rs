//! Error types for resource extraction operations.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using `ResourceError`.
pub type Result<T> = std::result::Result<T, ResourceError>;

/// Errors that can occur while locating or copying resources.
#[derive(Error, Debug)]
pub enum ResourceError {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A named resource does not exist in the bundle.
    #[error("resource \"{name}\" not found")]
    NotFound {
        /// The logical resource name that was requested.
        name: String,
    },

    /// A plain filesystem source does not exist.
    #[error("source does not exist: {path}")]
    SourceNotFound {
        /// The missing source path.
        path: PathBuf,
    },

    /// A single-file copy targeted an existing directory.
    #[error("destination exists but is a directory: {path}")]
    DestinationIsDirectory {
        /// The destination path.
        path: PathBuf,
    },

    /// Source and destination overlap.
    #[error("source {source_path} and destination {destination} overlap")]
    SameFile {
        /// The source path.
        source_path: PathBuf,
        /// The destination path.
        destination: PathBuf,
    },

    /// Archive format could not be determined from the file name.
    #[error("unsupported archive format: {path}")]
    UnsupportedFormat {
        /// The archive path.
        path: PathBuf,
    },

    /// Archive is corrupted or invalid.
    #[error("invalid archive: {0}")]
    InvalidArchive(String),

    /// Locator text could not be parsed.
    #[error("invalid resource locator: {0}")]
    InvalidLocator(String),

    /// An archive entry would be written outside the destination.
    #[error("path traversal detected: {path}")]
    PathTraversal {
        /// The offending entry name.
        path: PathBuf,
    },
}

impl ResourceError {
    /// Returns `true` if the error means something was missing rather than
    /// broken.
    ///
    /// # Examples
    ///
    /// ```
    /// use resdeploy_core::ResourceError;
    ///
    /// let err = ResourceError::NotFound {
    ///     name: "/layout/main.css".to_string(),
    /// };
    /// assert!(err.is_not_found());
    ///
    /// let err = ResourceError::InvalidArchive("bad header".to_string());
    /// assert!(!err.is_not_found());
    /// ```
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::NotFound { .. } | Self::SourceNotFound { .. } => true,
            Self::Io(e) => e.kind() == std::io::ErrorKind::NotFound,
            _ => false,
        }
    }

    /// Returns a context string for this error, if available.
    ///
    /// # Examples
    ///
    /// ```
    /// use resdeploy_core::ResourceError;
    ///
    /// let err = ResourceError::InvalidLocator("jar:app.jar".to_string());
    /// assert_eq!(err.context(), Some("jar:app.jar"));
    /// ```
    #[must_use]
    pub fn context(&self) -> Option<&str> {
        match self {
            Self::InvalidArchive(msg) | Self::InvalidLocator(msg) => Some(msg),
            Self::NotFound { name } => Some(name),
            _ => None,
        }
    }
}

impl From<zip::result::ZipError> for ResourceError {
    fn from(err: zip::result::ZipError) -> Self {
        match err {
            zip::result::ZipError::Io(e) => Self::Io(e),
            other => Self::InvalidArchive(other.to_string()),
        }
    }
}

impl From<walkdir::Error> for ResourceError {
    fn from(err: walkdir::Error) -> Self {
        let message = err.to_string();
        err.into_io_error()
            .map_or_else(|| Self::Io(std::io::Error::other(message)), Self::Io)
    }
}
