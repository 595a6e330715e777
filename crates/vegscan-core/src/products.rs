use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A product scraped from the retailer's listing pages.
///
/// This is the record written to `products.json` and read back by the
/// exporter, so the serialized field names follow that file's camelCase shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Product title as shown on the listing tile.
    pub name: String,
    /// Category label, translated from the listing badge's `title` attribute.
    #[serde(rename = "type", default)]
    pub product_type: Option<String>,
    /// Ingredient inferred from the name, translated.
    #[serde(default)]
    pub main_ingredient: Option<String>,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub sale_location: Option<String>,
    /// Link to the detail page, usually site-relative.
    ///
    /// Empty string (not `null`) when the tile has no link; existing
    /// consumers of `products.json` rely on that shape.
    #[serde(default)]
    pub online_reference: String,
    /// When this record was scraped. Set per record, not per run.
    pub date_accessed: DateTime<Utc>,
    /// Long-form text from the detail page, when it was fetched and found.
    #[serde(default)]
    pub description: Option<String>,
}

impl Product {
    /// Returns `true` if the product carries a detail-page reference.
    #[must_use]
    pub fn has_reference(&self) -> bool {
        !self.online_reference.trim().is_empty()
    }
}
