//! Error conversion utilities for CLI.
//!
//! Converts resdeploy-core's typed errors (thiserror) into user-facing
//! contextual errors (anyhow) with actionable guidance.

use anyhow::anyhow;
use resdeploy_core::ResourceError;

/// Converts `ResourceError` to an anyhow error mentioning `subject`, the
/// locator or resource name the user passed.
pub fn convert_resource_error(err: ResourceError, subject: &str) -> anyhow::Error {
    match err {
        ResourceError::NotFound { name } => {
            anyhow!(
                "Resource '{name}' not found in bundle\n\
                 HINT: Resource names are relative to the bundle root, e.g. /layout/main.css"
            )
        }
        ResourceError::SourceNotFound { path } => {
            anyhow!("Source '{}' does not exist", path.display())
        }
        ResourceError::DestinationIsDirectory { path } => {
            anyhow!(
                "Cannot copy the file '{subject}' onto directory '{}'\n\
                 HINT: Give the full destination file path, including the file name.",
                path.display()
            )
        }
        ResourceError::SameFile {
            source_path,
            destination,
        } => {
            anyhow!(
                "Source '{}' and destination '{}' are the same",
                source_path.display(),
                destination.display()
            )
        }
        ResourceError::InvalidLocator(reason) => {
            anyhow!(
                "Invalid locator: {reason}\n\
                 HINT: Use jar:file:APP.jar!/DIR, zip:FILE!/DIR, tar:FILE!/DIR or a plain path."
            )
        }
        ResourceError::UnsupportedFormat { path } => {
            anyhow!(
                "Archive format not supported: {}\n\
                 HINT: Supported formats: zip, jar, war, ear, tar, tar.gz",
                path.display()
            )
        }
        ResourceError::InvalidArchive(reason) => {
            anyhow!(
                "Invalid archive behind '{subject}': {reason}\n\
                 HINT: The archive may be corrupted or malformed."
            )
        }
        ResourceError::PathTraversal { path } => {
            anyhow!(
                "Resource name '{}' escapes the bundle root",
                path.display()
            )
        }
        ResourceError::Io(io_err) => {
            anyhow!("I/O error while processing '{subject}': {io_err}")
        }
    }
}

/// Maps the error side of `result` through [`convert_resource_error`].
pub fn add_resource_context<T>(
    result: Result<T, ResourceError>,
    subject: &str,
) -> anyhow::Result<T> {
    result.map_err(|e| convert_resource_error(e, subject))
}
