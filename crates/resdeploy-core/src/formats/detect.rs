//! Archive format detection.

use std::path::Path;

use crate::ResourceError;
use crate::Result;

/// Archive formats resources can be read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArchiveType {
    /// ZIP container, including jar/war/ear files.
    Zip,
    /// Tar archive (uncompressed).
    Tar,
    /// Gzip-compressed tar archive.
    TarGz,
}

/// Detects the archive type from a file path.
///
/// # Errors
///
/// Returns [`ResourceError::UnsupportedFormat`] if the extension is unknown.
pub fn detect_format(path: &Path) -> Result<ArchiveType> {
    let unsupported = || ResourceError::UnsupportedFormat {
        path: path.to_path_buf(),
    };
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .ok_or_else(unsupported)?;

    match extension.to_ascii_lowercase().as_str() {
        "zip" | "jar" | "war" | "ear" => Ok(ArchiveType::Zip),
        "tar" => Ok(ArchiveType::Tar),
        "gz" | "tgz" => Ok(ArchiveType::TarGz),
        _ => Err(unsupported()),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_detect_zip_family() {
        for name in ["assets.zip", "app.jar", "site.war", "bundle.ear", "APP.JAR"] {
            assert_eq!(
                detect_format(&PathBuf::from(name)).unwrap(),
                ArchiveType::Zip,
                "{name}"
            );
        }
    }

    #[test]
    fn test_detect_tar() {
        let path = PathBuf::from("assets.tar");
        assert_eq!(detect_format(&path).unwrap(), ArchiveType::Tar);
    }

    #[test]
    fn test_detect_tar_gz() {
        assert_eq!(
            detect_format(&PathBuf::from("assets.tar.gz")).unwrap(),
            ArchiveType::TarGz
        );
        assert_eq!(
            detect_format(&PathBuf::from("assets.tgz")).unwrap(),
            ArchiveType::TarGz
        );
    }

    #[test]
    fn test_detect_unsupported() {
        assert!(matches!(
            detect_format(&PathBuf::from("assets.rar")),
            Err(ResourceError::UnsupportedFormat { .. })
        ));
        assert!(matches!(
            detect_format(&PathBuf::from("no_extension")),
            Err(ResourceError::UnsupportedFormat { .. })
        ));
    }
}
