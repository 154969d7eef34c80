//! CLI command definitions and argument parsing.

use clap::{ArgAction, Args, Parser, Subcommand};
use folio_domain::EventKind;
use std::path::PathBuf;

/// Folio CLI - Lay out a portfolio's dated records as a wrapped timeline.
#[derive(Debug, Parser)]
#[command(name = "folio")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "FOLIO_CONFIG")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Compute the full timeline layout
    Layout(LayoutArgs),

    /// List normalized events
    Events(EventsArgs),

    /// Show the events overlapping one month
    Month(MonthArgs),

    /// Load content and report per-document problems
    Check(CheckArgs),
}

/// Where to read content from and which instant counts as now.
#[derive(Debug, Clone, Args)]
pub struct ContentArgs {
    /// Content root directory
    #[arg(long, env = "FOLIO_CONTENT")]
    pub content: Option<PathBuf>,

    /// Current time in epoch seconds (defaults to the system clock)
    #[arg(long)]
    pub now: Option<i64>,
}

/// Arguments for the layout command.
#[derive(Debug, Args)]
pub struct LayoutArgs {
    #[command(flatten)]
    pub source: ContentArgs,
}

/// Arguments for the events command.
#[derive(Debug, Args)]
pub struct EventsArgs {
    #[command(flatten)]
    pub source: ContentArgs,

    /// Only list events of this kind
    #[arg(short, long, value_enum)]
    pub kind: Option<KindArg>,

    /// Only list ongoing events
    #[arg(long)]
    pub ongoing: bool,
}

/// Arguments for the month command.
#[derive(Debug, Args)]
pub struct MonthArgs {
    /// Month as YYYY-MM
    pub month: String,

    #[command(flatten)]
    pub source: ContentArgs,
}

/// Arguments for the check command.
#[derive(Debug, Args)]
pub struct CheckArgs {
    #[command(flatten)]
    pub source: ContentArgs,
}

/// Event kind argument.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum KindArg {
    /// Employment and roles
    Experience,
    /// Competitions and hackathons
    Competition,
    /// Projects
    Project,
    /// Certificates
    Certificate,
    /// Courses
    Course,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
        }
    }
}

impl From<KindArg> for EventKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Experience => EventKind::Experience,
            KindArg::Competition => EventKind::Competition,
            KindArg::Project => EventKind::Project,
            KindArg::Certificate => EventKind::Certificate,
            KindArg::Course => EventKind::Course,
        }
    }
}
