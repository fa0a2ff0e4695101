//! Validated path types.

mod entry_path;

pub use entry_path::EntryPath;
