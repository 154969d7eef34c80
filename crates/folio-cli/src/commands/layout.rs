//! Layout command implementation.

use crate::cli::LayoutArgs;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;

/// Execute the layout command.
pub async fn execute_layout(args: LayoutArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let layout = super::compute_layout(&args.source, config).await?;
    println!("{}", formatter.format_layout(&layout)?);
    Ok(())
}
