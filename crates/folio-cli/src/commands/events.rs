//! Events command implementation.

use crate::cli::EventsArgs;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use folio_domain::{EventKind, NormalizedEvent};

/// Execute the events command.
pub async fn execute_events(args: EventsArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let layout = super::compute_layout(&args.source, config).await?;
    let kind = args.kind.map(EventKind::from);
    let events = filter_events(&layout.events, kind, args.ongoing);
    println!("{}", formatter.format_events(&events, layout.zone())?);
    Ok(())
}

/// Apply the kind and ongoing filters.
fn filter_events(
    events: &[NormalizedEvent],
    kind: Option<EventKind>,
    ongoing_only: bool,
) -> Vec<&NormalizedEvent> {
    events
        .iter()
        .filter(|e| kind.is_none_or(|k| e.kind == k))
        .filter(|e| !ongoing_only || e.ongoing)
        .collect()
}
