use clap::Parser;
use resman::cli::Cli;
use resman::output::{self, Verbosity};
use resman::{ResmanContext, sync};
use std::process;
use tracing_subscriber::{EnvFilter, fmt};

fn main() {
    if let Err(e) = run() {
        output::error(&format!("{e:#}"));
        process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    output::set_verbosity(Verbosity::from_flags(cli.quiet, cli.verbose));

    let ctx = ResmanContext::new()?;
    sync::execute(&ctx)?;

    Ok(())
}
