//! Product aggregation pipeline.
//!
//! Turns a marketplace page URL into a [`ProductBundle`]: extracts the
//! product identifier, fetches the item and its description, fans out to
//! the reference records the item points at, and enriches the category's
//! top sellers with sales-velocity metrics. Only two failures abort a run
//! (see [`AggregateError`]); everything else degrades to "unavailable".

pub mod enrich;
pub mod error;
pub mod pipeline;
pub mod render;

pub use enrich::enrich_peers;
pub use error::AggregateError;
pub use pipeline::{aggregate, inspect};
pub use render::BundleRenderer;
pub use shelfscope_core::ProductBundle;
