//! Command-line interface definitions for resman.
//!
//! The tool always works on the fixed layout of the current directory
//! (`resources.json`, `images/*.ff`, or whatever `resman.toml` says); the
//! flags only control how much it prints.

use clap::Parser;

/// Main CLI structure for resman.
#[derive(Parser, Debug)]
#[command(
    name = "resman",
    version = crate::VERSION,
    about = "Register new images in resources.json",
    long_about = "Scans the images directory and appends an entry with the lowest free id \
                  for every image not yet listed in resources.json"
)]
pub struct Cli {
    /// Also report images that were already registered
    #[arg(short, long)]
    pub verbose: bool,

    /// Only print warnings and errors
    #[arg(short, long)]
    pub quiet: bool,
}
