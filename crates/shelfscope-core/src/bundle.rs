use serde::Serialize;

use crate::identifier::ProductIdentifier;
use crate::listing::{CategoryInfo, CurrencyInfo, Description, Item, SellerInfo, SiteInfo};
use crate::peers::EnrichedPeerItem;

/// Everything one aggregation run gathered about a product, ready to render.
///
/// `None` reference records mean "unavailable": either the item carried no
/// id for that resource or the fetch failed. `peers` is empty when no
/// top-seller search ran or it returned nothing.
#[derive(Debug, Clone, Serialize)]
pub struct ProductBundle {
    pub product_id: ProductIdentifier,
    pub item: Item,
    pub description: Description,
    pub category: Option<CategoryInfo>,
    pub currency: Option<CurrencyInfo>,
    pub seller: Option<SellerInfo>,
    pub site: Option<SiteInfo>,
    /// Top sellers of the item's category, in search rank order.
    pub peers: Vec<EnrichedPeerItem>,
}
