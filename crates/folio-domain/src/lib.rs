//! Folio Domain Layer
//!
//! Value types shared by every layer of the portfolio timeline: the
//! normalized event, the month grid, and the geometry produced for a
//! rendering layer. The crate holds no layout logic of its own; the engine
//! lives in `folio-timeline`.
//!
//! ## Key Concepts
//!
//! - **Event**: a portfolio item reduced to a start/end instant plus metadata
//! - **Grid month**: one calendar month folded into a fixed-width row wrap
//! - **Segment**: one row-bounded piece of an event's band
//! - **Lane**: a vertical slot separating overlapping segments in a row
//! - **Point**: the marker for a zero-duration event
//!
//! All instants are epoch seconds (`i64`).

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod event;
pub mod geometry;
pub mod kind;
pub mod lanes;
pub mod traits;

// Re-exports for convenience
pub use event::{EventId, NormalizedEvent};
pub use geometry::{Connector, GridMonth, LabelAnchor, Point, Segment};
pub use kind::EventKind;
pub use lanes::{LaneAssignment, LaneEntry};
pub use traits::{Clock, FixedClock, SystemClock};
