//! Domain types and pure logic for shelfscope.
//!
//! Holds the marketplace listing model, product-identifier extraction, the
//! peer sales-velocity math, the aggregated bundle handed to renderers, and
//! environment-driven configuration. Nothing in this crate performs I/O
//! beyond reading environment variables.

pub mod app_config;
pub mod bundle;
pub mod config;
pub mod identifier;
pub mod listing;
pub mod peers;

use thiserror::Error;

pub use app_config::{AppConfig, Environment};
pub use bundle::ProductBundle;
pub use config::{load_app_config, load_app_config_from_env};
pub use identifier::{extract_product_id, ProductIdentifier};
pub use listing::{
    CategoryInfo, CategoryPathNode, Condition, CurrencyInfo, Description, Item, ItemStub,
    SearchResponse, SellerInfo, Shipping, SiteInfo,
};
pub use peers::{enrich_peer, EnrichedPeerItem, TemperatureClass};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
