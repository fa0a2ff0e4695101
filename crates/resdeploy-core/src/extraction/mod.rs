//! Copy operations for archive-backed and plain filesystem sources.

pub mod archive;
pub mod directory;

mod common;

pub use archive::copy_archive_entries;
pub use directory::copy_directory;
pub use directory::copy_file;

pub(crate) use common::write_file;
