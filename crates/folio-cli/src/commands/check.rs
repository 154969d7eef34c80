//! Check command implementation.

use crate::cli::CheckArgs;
use crate::config::Config;
use crate::error::Result;
use crate::output::{CheckReport, Formatter};
use folio_content::PortfolioContent;
use folio_timeline::{EventNormalizer, TimelineConfig};

/// Execute the check command.
pub async fn execute_check(args: CheckArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let root = config.content_root(args.source.content.as_deref());
    let content = super::load_content(&args.source, config).await?;
    let now = super::resolve_now(&args.source);

    let report = build_report(
        root.display().to_string(),
        &content,
        now,
        &config.timeline_config(),
    )?;
    println!("{}", formatter.format_check(&report)?);
    Ok(())
}

/// Summarize what loaded and which timeline records were dropped.
pub fn build_report(
    root: String,
    content: &PortfolioContent,
    now: i64,
    timeline: &TimelineConfig,
) -> Result<CheckReport> {
    let normalizer = EventNormalizer::new(timeline.zone()?, timeline.language.as_str());
    let sources = content.timeline_sources();
    let (events, dropped) = normalizer.normalize_with_dropped(&sources, now);

    Ok(CheckReport {
        root,
        issues: content.issues.clone(),
        sections: content.section_order(),
        records: sources.len(),
        events: events.len(),
        dropped,
    })
}
