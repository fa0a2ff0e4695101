//! Archive format readers.

pub mod detect;
pub mod tar;
pub mod traits;
pub mod zip;

use std::path::Path;

use crate::Result;

pub use detect::ArchiveType;
pub use detect::detect_format;
pub use tar::TarArchive;
pub use traits::ArchiveEntry;
pub use traits::ArchiveFormat;
pub use traits::EntryKind;
pub use zip::ZipArchive;

/// Opens the archive at `path` with the reader matching its extension.
///
/// # Errors
///
/// Returns an error if the format is unknown or the file cannot be opened.
pub fn open_archive(path: &Path) -> Result<Box<dyn ArchiveFormat>> {
    let archive: Box<dyn ArchiveFormat> = match detect_format(path)? {
        ArchiveType::Zip => Box::new(ZipArchive::open(path)?),
        ArchiveType::Tar => Box::new(TarArchive::open(path)?),
        ArchiveType::TarGz => Box::new(TarArchive::open_gz(path)?),
    };
    log::debug!(
        "opened {} archive {}",
        archive.format_name(),
        path.display()
    );
    Ok(archive)
}
