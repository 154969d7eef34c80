//! Command implementations.

pub mod check;
pub mod events;
pub mod layout;
pub mod month;

pub use self::check::execute_check;
pub use self::events::execute_events;
pub use self::layout::execute_layout;
pub use self::month::execute_month;

use crate::cli::ContentArgs;
use crate::config::Config;
use crate::error::Result;
use folio_content::{ContentStore, PortfolioContent};
use folio_domain::{Clock, SystemClock};
use folio_timeline::TimelineLayout;
use tracing::debug;

/// Load the content root named by the arguments or the config.
pub async fn load_content(args: &ContentArgs, config: &Config) -> Result<PortfolioContent> {
    let root = config.content_root(args.content.as_deref());
    debug!("Reading content from {}", root.display());
    let store = ContentStore::open(root)?;
    Ok(store.load().await?)
}

/// The instant layouts are computed against.
pub fn resolve_now(args: &ContentArgs) -> i64 {
    args.now.unwrap_or_else(|| SystemClock.now())
}

/// Load content and lay it out in one step.
pub async fn compute_layout(args: &ContentArgs, config: &Config) -> Result<TimelineLayout> {
    let content = load_content(args, config).await?;
    let layout = TimelineLayout::compute(
        &content.timeline_sources(),
        resolve_now(args),
        &config.timeline_config(),
    )?;
    Ok(layout)
}
