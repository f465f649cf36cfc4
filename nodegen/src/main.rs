mod cli;

use anyhow::Context;
use clap::Parser;
use cli::CommandLineInterface;
use std::io::Write;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let args = CommandLineInterface::parse();

    let default_level = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = args.to_config();
    tracing::debug!(?config, "resolved configuration");
    let report = nodegen::run(&config)
        .with_context(|| format!("generation from '{}' failed", args.schema.display()))?;

    match &report.output {
        Some(path) => eprintln!(
            "wrote {} classes ({} fields) to {}",
            report.classes,
            report.fields,
            path.display()
        ),
        None => std::io::stdout()
            .write_all(report.code.as_bytes())
            .context("failed to write to stdout")?,
    }

    Ok(())
}
