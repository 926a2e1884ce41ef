//! Catalog API record types.
//!
//! Field names follow the public catalog's JSON. Almost everything is
//! optional: listings in the wild omit fields freely, and a missing or
//! `null` field must degrade the report rather than fail the decode.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Placeholder used when an item has no retrievable description.
pub const NO_PUBLIC_DESCRIPTION: &str = "No public description.";

/// Reads an explicit `null` as the type's default. Pair with
/// `#[serde(default)]` so an absent key behaves the same way.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Listing condition. Unknown values map to [`Condition::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Condition {
    New,
    Used,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shipping {
    #[serde(default, deserialize_with = "null_as_default")]
    pub free_shipping: bool,
}

/// Full listing record from `GET /items/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub currency_id: Option<String>,
    #[serde(default)]
    pub category_id: Option<String>,
    /// Numeric user ID of the seller.
    #[serde(default)]
    pub seller_id: Option<i64>,
    #[serde(default)]
    pub site_id: Option<String>,
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub secure_thumbnail: Option<String>,
    #[serde(default)]
    pub permalink: Option<String>,
    #[serde(default)]
    pub condition: Option<Condition>,
    /// Absent on some listings; see [`Item::sold_quantity_or_zero`].
    #[serde(default)]
    pub sold_quantity: Option<u64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub shipping: Shipping,
    /// Listing quality score in `(0, 1]`, absent when not computed.
    #[serde(default)]
    pub health: Option<f64>,
    #[serde(default)]
    pub date_created: Option<DateTime<Utc>>,
}

impl Item {
    #[must_use]
    pub fn sold_quantity_or_zero(&self) -> u64 {
        self.sold_quantity.unwrap_or(0)
    }

    /// Thumbnail to display, preferring the HTTPS variant.
    #[must_use]
    pub fn display_thumbnail(&self) -> Option<&str> {
        self.secure_thumbnail
            .as_deref()
            .or(self.thumbnail.as_deref())
    }
}

/// Basic listing record as returned inside a category search.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemStub {
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub permalink: Option<String>,
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub sold_quantity: Option<u64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub shipping: Shipping,
}

/// Envelope of `GET /sites/{site}/search`.
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub results: Vec<ItemStub>,
}

/// Free-text description from `GET /items/{id}/description`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Description {
    #[serde(default)]
    pub plain_text: Option<String>,
}

impl Description {
    /// The fallback record used whenever the description cannot be fetched.
    #[must_use]
    pub fn unavailable() -> Self {
        Self {
            plain_text: Some(NO_PUBLIC_DESCRIPTION.to_owned()),
        }
    }

    /// Description text, or the placeholder when the record carries none.
    #[must_use]
    pub fn text(&self) -> &str {
        match self.plain_text.as_deref() {
            Some(text) if !text.trim().is_empty() => text,
            _ => NO_PUBLIC_DESCRIPTION,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryPathNode {
    pub id: String,
    pub name: String,
}

/// Category record from `GET /categories/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryInfo {
    pub id: String,
    pub name: String,
    /// Root-to-leaf ancestry, ending with this category.
    #[serde(default, deserialize_with = "null_as_default")]
    pub path_from_root: Vec<CategoryPathNode>,
}

impl CategoryInfo {
    /// `"Root > Child > Leaf"`, or just the category name when no path is known.
    #[must_use]
    pub fn breadcrumb(&self) -> String {
        if self.path_from_root.is_empty() {
            return self.name.clone();
        }
        self.path_from_root
            .iter()
            .map(|node| node.name.as_str())
            .collect::<Vec<_>>()
            .join(" > ")
    }
}

/// Currency record from `GET /currencies/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrencyInfo {
    pub id: String,
    /// Display name, e.g. `"Real"`.
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub symbol: Option<String>,
}

/// Public seller profile from `GET /users/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SellerInfo {
    pub id: i64,
    #[serde(default)]
    pub nickname: Option<String>,
    /// Public profile link.
    #[serde(default)]
    pub permalink: Option<String>,
}

/// Marketplace site record from `GET /sites/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteInfo {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub default_currency_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_decodes_with_only_id() {
        let item: Item = serde_json::from_value(serde_json::json!({ "id": "MLB1" })).unwrap();
        assert_eq!(item.id, "MLB1");
        assert!(item.category_id.is_none());
        assert!(!item.shipping.free_shipping);
        assert_eq!(item.sold_quantity_or_zero(), 0);
        assert!(item.health.is_none());
    }

    #[test]
    fn item_decodes_full_listing() {
        let item: Item = serde_json::from_value(serde_json::json!({
            "id": "MLB1",
            "title": "Camiseta",
            "price": 59.9,
            "currency_id": "BRL",
            "category_id": "MLB31447",
            "seller_id": 123_456,
            "site_id": "MLB",
            "thumbnail": "http://img/1.jpg",
            "secure_thumbnail": "https://img/1.jpg",
            "permalink": "https://produto/MLB1",
            "condition": "used",
            "sold_quantity": 250,
            "shipping": { "free_shipping": true, "mode": "me2" },
            "health": 0.75,
            "date_created": "2023-04-01T12:00:00.000Z"
        }))
        .unwrap();
        assert_eq!(item.condition, Some(Condition::Used));
        assert_eq!(item.seller_id, Some(123_456));
        assert_eq!(item.sold_quantity, Some(250));
        assert!(item.shipping.free_shipping);
        assert_eq!(item.display_thumbnail(), Some("https://img/1.jpg"));
        assert!(item.date_created.is_some());
    }

    #[test]
    fn item_tolerates_null_title() {
        let item: Item =
            serde_json::from_value(serde_json::json!({ "id": "MLB1", "title": null })).unwrap();
        assert!(item.title.is_empty());
    }

    #[test]
    fn item_tolerates_null_shipping() {
        let item: Item =
            serde_json::from_value(serde_json::json!({ "id": "MLB1", "shipping": null })).unwrap();
        assert!(!item.shipping.free_shipping);
    }

    #[test]
    fn item_tolerates_null_free_shipping_flag() {
        let item: Item = serde_json::from_value(serde_json::json!({
            "id": "MLB1",
            "shipping": { "free_shipping": null }
        }))
        .unwrap();
        assert!(!item.shipping.free_shipping);
    }

    #[test]
    fn stub_tolerates_null_title_and_shipping() {
        let stub: ItemStub = serde_json::from_value(serde_json::json!({
            "id": "MLBP1",
            "title": null,
            "shipping": null
        }))
        .unwrap();
        assert!(stub.title.is_empty());
        assert!(!stub.shipping.free_shipping);
    }

    #[test]
    fn null_collections_decode_empty() {
        let resp: SearchResponse =
            serde_json::from_value(serde_json::json!({ "results": null })).unwrap();
        assert!(resp.results.is_empty());
        let cat: CategoryInfo = serde_json::from_value(serde_json::json!({
            "id": "MLB1",
            "name": "Root",
            "path_from_root": null
        }))
        .unwrap();
        assert_eq!(cat.breadcrumb(), "Root");
    }

    #[test]
    fn unknown_condition_maps_to_other() {
        let item: Item = serde_json::from_value(serde_json::json!({
            "id": "MLB1",
            "condition": "not_specified"
        }))
        .unwrap();
        assert_eq!(item.condition, Some(Condition::Other));
    }

    #[test]
    fn search_response_without_results_is_empty() {
        let resp: SearchResponse = serde_json::from_value(serde_json::json!({})).unwrap();
        assert!(resp.results.is_empty());
    }

    #[test]
    fn breadcrumb_joins_path_names() {
        let cat: CategoryInfo = serde_json::from_value(serde_json::json!({
            "id": "MLB31447",
            "name": "Camisetas",
            "path_from_root": [
                { "id": "MLB1430", "name": "Roupas" },
                { "id": "MLB31447", "name": "Camisetas" }
            ]
        }))
        .unwrap();
        assert_eq!(cat.breadcrumb(), "Roupas > Camisetas");
    }

    #[test]
    fn breadcrumb_falls_back_to_name() {
        let cat: CategoryInfo =
            serde_json::from_value(serde_json::json!({ "id": "MLB1", "name": "Root" })).unwrap();
        assert_eq!(cat.breadcrumb(), "Root");
    }

    #[test]
    fn description_text_falls_back_to_placeholder() {
        let empty = Description { plain_text: None };
        assert_eq!(empty.text(), NO_PUBLIC_DESCRIPTION);
        assert_eq!(Description::unavailable().text(), NO_PUBLIC_DESCRIPTION);
        let real = Description {
            plain_text: Some("Algodão".to_owned()),
        };
        assert_eq!(real.text(), "Algodão");
    }
}
