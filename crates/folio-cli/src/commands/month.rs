//! Month command implementation.

use crate::cli::MonthArgs;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use folio_timeline::date::parse_date_parts;

/// Execute the month command.
pub async fn execute_month(args: MonthArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let key = month_key(&args.month)?;
    let layout = super::compute_layout(&args.source, config).await?;

    let Some(index) = layout.month_index(&key) else {
        println!("{}", formatter.warning(&format!("{} is outside the timeline", key)));
        return Ok(());
    };
    let events = layout.events_in_month(index);
    println!("{}", formatter.format_events(&events, layout.zone())?);
    Ok(())
}

/// Normalize a month argument to a `YYYY-MM` grid key.
fn month_key(input: &str) -> Result<String> {
    match parse_date_parts(input) {
        Some(parts) if parts.day.is_none() => match parts.month {
            Some(month) => Ok(format!("{:04}-{:02}", parts.year, month)),
            None => Err(CliError::InvalidInput(format!(
                "'{}' names a year; expected YYYY-MM",
                input
            ))),
        },
        _ => Err(CliError::InvalidInput(format!(
            "'{}' is not a month; expected YYYY-MM",
            input
        ))),
    }
}
