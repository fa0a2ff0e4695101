//! Deploys bundled resource files into a destination directory.
//!
//! `resdeploy-core` copies static assets (templates, stylesheets, fonts)
//! that ship with a program, either as loose files on disk or packed inside
//! a zip/jar or tar archive, into a directory tree at runtime.
//!
//! Two error policies apply:
//!
//! - Writing a single named resource ([`ResourceWriter::write_resource`]) and
//!   copying from plain filesystem paths are strict and return errors.
//! - Extracting from an archive is best-effort: failures are logged through
//!   the [`log`] facade and recorded in [`CopyReport::failure`], and the call
//!   still returns normally.
//!
//! # Examples
//!
//! ```no_run
//! use resdeploy_core::ResourceLocator;
//! use resdeploy_core::copy_resources;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let locator: ResourceLocator = "jar:file:/opt/app.jar!/layout".parse()?;
//! let report = copy_resources(Some(&locator), "/srv/site", None)?;
//! println!("Copied {} files", report.files_copied);
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod api;
pub mod bundle;
pub mod config;
pub mod copy;
pub mod error;
pub mod extraction;
pub mod filter;
pub mod formats;
pub mod locator;
pub mod report;
pub mod types;
pub mod writer;

#[cfg(test)]
mod test_utils;

// Re-export main API types
pub use api::copy_resources;
pub use api::copy_resources_with_options;
pub use bundle::ArchiveBundle;
pub use bundle::DirectoryBundle;
pub use bundle::EmbeddedBundle;
pub use bundle::ResourceBundle;
pub use config::CopyOptions;
pub use error::ResourceError;
pub use error::Result;
pub use filter::PathFilter;
pub use filter::PatternFilter;
pub use locator::ArchiveConnection;
pub use locator::Connection;
pub use locator::ResourceLocator;
pub use report::CopyReport;
pub use writer::ResourceWriter;
