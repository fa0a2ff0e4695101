//! Copy command implementation.

use crate::cli::CopyArgs;
use crate::error::add_resource_context;
use crate::output::OutputFormatter;
use anyhow::Result;
use resdeploy_core::CopyOptions;
use resdeploy_core::PathFilter;
use resdeploy_core::PatternFilter;
use resdeploy_core::ResourceLocator;
use resdeploy_core::copy_resources_with_options;

pub fn execute(args: &CopyArgs, formatter: &dyn OutputFormatter) -> Result<()> {
    let locator = add_resource_context(ResourceLocator::parse(&args.locator), &args.locator)?;

    let options = CopyOptions::default()
        .with_preserve_timestamps(!args.no_preserve_timestamps)
        .with_overwrite(!args.no_overwrite);

    let excludes = PatternFilter::new(args.exclude.iter().cloned()).relative_to(&args.dest);
    let filter: Option<&dyn PathFilter> = if excludes.is_empty() {
        None
    } else {
        Some(&excludes)
    };

    let report = add_resource_context(
        copy_resources_with_options(Some(&locator), &args.dest, filter, &options),
        &args.locator,
    )?;

    formatter.format_copy_result(&locator, &report)?;

    Ok(())
}
