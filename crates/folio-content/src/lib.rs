//! Folio Content Store
//!
//! Loads the JSON documents of a portfolio content root and hands the
//! dated collections to the timeline engine.
//!
//! # Examples
//!
//! ```no_run
//! use folio_content::ContentStore;
//!
//! # async fn run() -> folio_content::Result<()> {
//! let store = ContentStore::open("content")?;
//! let content = store.load().await?;
//! let sources = content.timeline_sources();
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

pub mod content;
pub mod document;
pub mod error;
pub mod store;

pub use content::{sorted_by_order_index, LoadIssue, LoadProblem, PortfolioContent, Section};
pub use document::{Document, Shape};
pub use error::{ContentError, Result};
pub use store::ContentStore;
