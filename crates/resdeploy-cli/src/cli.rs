//! CLI argument parsing using clap.

use clap::Parser;
use clap::Subcommand;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "resdeploy")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Output results in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Copy a resource directory or file to a destination
    Copy(CopyArgs),
    /// Write a single named resource from a bundle to a file
    Write(WriteArgs),
}

#[derive(clap::Args)]
pub struct CopyArgs {
    /// Resource locator (jar:file:APP.jar!/DIR, zip:FILE!/DIR, tar:FILE!/DIR,
    /// file:PATH or a plain path)
    #[arg(value_name = "LOCATOR")]
    pub locator: String,

    /// Destination directory (or file, when the locator names a single file)
    #[arg(value_name = "DEST")]
    pub dest: PathBuf,

    /// Exclude pattern (glob, can be repeated)
    #[arg(long = "exclude", short = 'x', value_name = "PATTERN")]
    pub exclude: Vec<String>,

    /// Do not carry modification times over from plain files
    #[arg(long)]
    pub no_preserve_timestamps: bool,

    /// Keep files that already exist at the destination
    #[arg(long)]
    pub no_overwrite: bool,
}

#[derive(clap::Args)]
pub struct WriteArgs {
    /// Resource name inside the bundle, e.g. /layout/main.css
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Destination file
    #[arg(value_name = "DEST")]
    pub dest: PathBuf,

    /// Bundle to read from: a directory or a zip/jar/tar archive
    #[arg(long, short = 'b', value_name = "PATH")]
    pub bundle: PathBuf,
}
