//! Writing named resources from a bundle to disk.

use std::path::Path;

use crate::CopyOptions;
use crate::CopyReport;
use crate::ResourceError;
use crate::Result;
use crate::api::copy_resources_with_options;
use crate::bundle::ResourceBundle;
use crate::copy::CopyBuffer;
use crate::extraction::write_file;
use crate::filter::PathFilter;
use crate::locator::ResourceLocator;

/// Materializes resources from a [`ResourceBundle`].
///
/// # Examples
///
/// ```no_run
/// use resdeploy_core::ArchiveBundle;
/// use resdeploy_core::ResourceWriter;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let writer = ResourceWriter::new(ArchiveBundle::new("/opt/app.jar"));
/// writer.write_resource("/layout/main.css", "/srv/site/main.css")?;
/// writer.copy_resources("/layout/fonts", "/srv/site/fonts", None)?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ResourceWriter<B> {
    bundle: B,
}

impl<B: ResourceBundle> ResourceWriter<B> {
    /// Creates a writer reading from `bundle`.
    pub const fn new(bundle: B) -> Self {
        Self { bundle }
    }

    /// The bundle resources are read from.
    pub const fn bundle(&self) -> &B {
        &self.bundle
    }

    /// Writes the resource `name` to the file `dest`, replacing it if it
    /// exists. Missing parent directories of `dest` are created.
    ///
    /// Returns the number of bytes written.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if the bundle has no such
    /// resource; nothing is created on disk in that case. I/O failures are
    /// returned as [`ResourceError::Io`].
    pub fn write_resource(&self, name: &str, dest: impl AsRef<Path>) -> Result<u64> {
        let dest = dest.as_ref();
        let mut reader = self
            .bundle
            .open(name)?
            .ok_or_else(|| ResourceError::NotFound {
                name: name.to_string(),
            })?;

        let bytes = write_file(&mut reader, dest, None, &mut CopyBuffer::new())?;
        log::debug!("wrote resource {name} to {} ({bytes} bytes)", dest.display());
        Ok(bytes)
    }

    /// Returns the locator for `name`, if the bundle can address it.
    ///
    /// # Errors
    ///
    /// Returns an error if the bundle storage cannot be read.
    pub fn locate(&self, name: &str) -> Result<Option<ResourceLocator>> {
        self.bundle.locate(name)
    }

    /// Copies everything under `name` into `dest`; see
    /// [`copy_resources`](crate::copy_resources).
    ///
    /// A name the bundle cannot locate copies nothing.
    ///
    /// # Errors
    ///
    /// Returns an error if the bundle cannot be read or a plain filesystem
    /// copy fails.
    pub fn copy_resources(
        &self,
        name: &str,
        dest: impl AsRef<Path>,
        filter: Option<&dyn PathFilter>,
    ) -> Result<CopyReport> {
        self.copy_resources_with_options(name, dest, filter, &CopyOptions::default())
    }

    /// [`copy_resources`](Self::copy_resources) with explicit options.
    ///
    /// # Errors
    ///
    /// Returns an error if the bundle cannot be read or a plain filesystem
    /// copy fails.
    pub fn copy_resources_with_options(
        &self,
        name: &str,
        dest: impl AsRef<Path>,
        filter: Option<&dyn PathFilter>,
        options: &CopyOptions,
    ) -> Result<CopyReport> {
        let locator = self.locate(name)?;
        if locator.is_none() {
            log::debug!("resource {name} not found, nothing to copy");
        }
        copy_resources_with_options(locator.as_ref(), dest, filter, options)
    }
}
