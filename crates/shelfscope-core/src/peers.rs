//! Sales-velocity enrichment for top-selling peer listings.
//!
//! A peer's velocity is `sold_quantity / age_days`, where `age_days` is the
//! listing age floored at one day. The velocity buckets into a
//! [`TemperatureClass`] for quick scanning. Unknown values are `None`
//! throughout; renderers show them as "N/D".

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::listing::{Item, ItemStub};

/// Velocity (units/day) at or above which a listing is [`TemperatureClass::High`].
pub const HIGH_VELOCITY: f64 = 5.0;
/// Velocity (units/day) at or above which a listing is [`TemperatureClass::Medium`].
pub const MEDIUM_VELOCITY: f64 = 1.0;

const MILLIS_PER_DAY: f64 = 86_400_000.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemperatureClass {
    Low,
    Medium,
    High,
    /// Detail fetch failed; nothing is known about the listing's sales pace.
    Unknown,
}

impl TemperatureClass {
    /// Buckets a velocity. Unknown or non-finite velocities are `Low`, never
    /// `Medium` or `High`.
    #[must_use]
    pub fn classify(velocity: Option<f64>) -> Self {
        match velocity {
            Some(v) if v >= HIGH_VELOCITY => TemperatureClass::High,
            Some(v) if v >= MEDIUM_VELOCITY => TemperatureClass::Medium,
            _ => TemperatureClass::Low,
        }
    }
}

impl std::fmt::Display for TemperatureClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TemperatureClass::Low => write!(f, "Low"),
            TemperatureClass::Medium => write!(f, "Medium"),
            TemperatureClass::High => write!(f, "High"),
            TemperatureClass::Unknown => write!(f, "N/D"),
        }
    }
}

/// A peer listing with its derived sales metrics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnrichedPeerItem {
    /// 1-based position in the top-sellers search result.
    pub rank: usize,
    pub id: String,
    pub title: String,
    pub price: Option<f64>,
    pub permalink: Option<String>,
    pub thumbnail: Option<String>,
    pub sold_quantity: u64,
    pub free_shipping: bool,
    pub date_created: Option<DateTime<Utc>>,
    pub health: Option<f64>,
    /// Listing age in days, `>= 1.0` whenever known.
    pub age_days: Option<f64>,
    pub sales_velocity: Option<f64>,
    pub temperature: TemperatureClass,
}

impl EnrichedPeerItem {
    /// `true` when the detail fetch for this peer failed.
    #[must_use]
    pub fn is_degraded(&self) -> bool {
        self.temperature == TemperatureClass::Unknown
    }
}

/// Listing age in days between `created` and `now`, floored at `1.0`.
#[must_use]
pub fn age_in_days(created: DateTime<Utc>, now: DateTime<Utc>) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    let elapsed_days = (now - created).num_milliseconds() as f64 / MILLIS_PER_DAY;
    elapsed_days.max(1.0)
}

/// `sold / age_days`, or `None` when the age is unknown.
#[must_use]
pub fn sales_velocity(sold: u64, age_days: Option<f64>) -> Option<f64> {
    #[allow(clippy::cast_precision_loss)]
    let sold = sold as f64;
    age_days.filter(|days| *days > 0.0).map(|days| sold / days)
}

/// Combines a search stub with its full detail record (if the detail fetch
/// succeeded) into an [`EnrichedPeerItem`].
///
/// With `detail == None` the result is degraded: stub fields carried over,
/// no health, unknown age and velocity, [`TemperatureClass::Unknown`].
#[must_use]
pub fn enrich_peer(
    rank: usize,
    stub: &ItemStub,
    detail: Option<&Item>,
    now: DateTime<Utc>,
) -> EnrichedPeerItem {
    let Some(full) = detail else {
        return EnrichedPeerItem {
            rank,
            id: stub.id.clone(),
            title: stub.title.clone(),
            price: stub.price,
            permalink: stub.permalink.clone(),
            thumbnail: stub.thumbnail.clone(),
            sold_quantity: stub.sold_quantity.unwrap_or(0),
            free_shipping: stub.shipping.free_shipping,
            date_created: None,
            health: None,
            age_days: None,
            sales_velocity: None,
            temperature: TemperatureClass::Unknown,
        };
    };

    let sold_quantity = full.sold_quantity.or(stub.sold_quantity).unwrap_or(0);
    let age_days = full.date_created.map(|created| age_in_days(created, now));
    let velocity = sales_velocity(sold_quantity, age_days);

    EnrichedPeerItem {
        rank,
        id: stub.id.clone(),
        title: if full.title.is_empty() {
            stub.title.clone()
        } else {
            full.title.clone()
        },
        price: full.price.or(stub.price),
        permalink: full.permalink.clone().or_else(|| stub.permalink.clone()),
        thumbnail: full.thumbnail.clone().or_else(|| stub.thumbnail.clone()),
        sold_quantity,
        free_shipping: full.shipping.free_shipping || stub.shipping.free_shipping,
        date_created: full.date_created,
        health: full.health,
        age_days,
        sales_velocity: velocity,
        temperature: TemperatureClass::classify(velocity),
    }
}
