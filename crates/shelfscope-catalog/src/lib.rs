//! Client for the marketplace's public catalog REST API.
//!
//! [`CatalogClient`] exposes two layers over the same endpoints: `get_*`
//! methods return typed [`CatalogError`]s, while `fetch_*` methods absorb
//! every failure into an "unavailable" value and log it.

pub mod client;
pub mod error;

pub use client::{CatalogClient, DEFAULT_BASE_URL, TOP_SELLERS_LIMIT};
pub use error::CatalogError;
