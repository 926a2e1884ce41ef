//! Product identifier extraction from marketplace page URLs.
//!
//! Listing pages embed the identifier as `ML` + 1–3 site letters, an optional
//! dash, then a digit run, e.g. `.../MLB-123456789-some-title`. The canonical
//! form drops the dash: `MLB123456789`.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

static PRODUCT_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(ML[A-Z]{1,3})-?(\d+)").expect("valid regex"));

/// Canonical marketplace product identifier (`<prefix><digits>`).
///
/// Only produced by [`extract_product_id`], so it is never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ProductIdentifier(String);

impl ProductIdentifier {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The site prefix, e.g. `"MLB"` for `"MLB123"`.
    #[must_use]
    pub fn site_prefix(&self) -> &str {
        let end = self
            .0
            .find(|c: char| c.is_ascii_digit())
            .unwrap_or(self.0.len());
        &self.0[..end]
    }
}

impl std::fmt::Display for ProductIdentifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Extracts the first product identifier found anywhere in `url`.
///
/// Matching is case-insensitive; the prefix is upper-cased in the result.
/// Returns `None` when the URL carries no identifier.
#[must_use]
pub fn extract_product_id(url: &str) -> Option<ProductIdentifier> {
    let caps = PRODUCT_ID_RE.captures(url)?;
    let prefix = caps.get(1)?.as_str().to_ascii_uppercase();
    let digits = caps.get(2)?.as_str();
    Some(ProductIdentifier(format!("{prefix}{digits}")))
}
