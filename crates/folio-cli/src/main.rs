//! Folio CLI - Lay out portfolio content as a wrapped monthly timeline.

use clap::Parser;
use folio_cli::commands;
use folio_cli::{Cli, Command, Config, Formatter};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> folio_cli::Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    // Load config, falling back to defaults when there is none
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    // Determine output format
    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);

    // Determine color setting
    let color_enabled = !cli.no_color && config.settings.color;

    // Create formatter
    let formatter = Formatter::new(format, color_enabled);

    match cli.command {
        Command::Layout(args) => commands::execute_layout(args, &config, &formatter).await?,
        Command::Events(args) => commands::execute_events(args, &config, &formatter).await?,
        Command::Month(args) => commands::execute_month(args, &config, &formatter).await?,
        Command::Check(args) => commands::execute_check(args, &config, &formatter).await?,
    }

    Ok(())
}

/// Log to stderr; `-v` overrides `RUST_LOG`, which overrides `warn`.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => None,
        1 => Some("info"),
        2 => Some("debug"),
        _ => Some("trace"),
    };
    let filter = match level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
}
