//! Write command implementation.

use crate::cli::WriteArgs;
use crate::error::add_resource_context;
use crate::output::OutputFormatter;
use anyhow::Result;
use resdeploy_core::ArchiveBundle;
use resdeploy_core::DirectoryBundle;
use resdeploy_core::ResourceBundle;
use resdeploy_core::ResourceWriter;

pub fn execute(args: &WriteArgs, formatter: &dyn OutputFormatter) -> Result<()> {
    let bundle: Box<dyn ResourceBundle> = if args.bundle.is_dir() {
        Box::new(DirectoryBundle::new(&args.bundle))
    } else {
        Box::new(ArchiveBundle::new(&args.bundle))
    };
    let writer = ResourceWriter::new(bundle);

    let bytes = add_resource_context(writer.write_resource(&args.name, &args.dest), &args.name)?;

    formatter.format_write_result(&args.name, &args.dest, bytes)?;

    Ok(())
}
