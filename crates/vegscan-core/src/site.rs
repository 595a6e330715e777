//! Retailer-specific constants: endpoint, query, headers, selectors and
//! vocabularies. The built-in default targets continente.pt; a YAML file can
//! replace any part of it at startup.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::translate::Translator;
use crate::ConfigError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteProfile {
    /// Scheme and host used for the search endpoint and for resolving
    /// relative detail-page references, e.g. `"https://www.continente.pt"`.
    pub origin: String,
    pub search_path: String,
    pub query: QueryConfig,
    pub page_size: u32,
    /// Static label stored as every product's `saleLocation`.
    pub sale_location: String,
    pub headers: RequestHeaders,
    pub selectors: ListingSelectors,
    /// Detail-page blocks are those whose `class` attribute starts with this.
    pub description_class_prefix: String,
    /// Blocks containing this phrase are dropped from the description.
    pub disclaimer_phrase: String,
    /// Ingredient tokens matched (case-insensitively) against product names.
    pub ingredients: Vec<String>,
    pub translations: BTreeMap<String, String>,
}

/// Fixed search parameters sent with every listing request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryConfig {
    pub cgid: String,
    pub pmin: String,
    pub srule: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RequestHeaders {
    pub accept: String,
    pub accept_language: String,
    pub referer: String,
}

/// CSS selectors applied to each listing page fragment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListingSelectors {
    pub product: String,
    pub name: String,
    /// Image whose `title` attribute carries the category label.
    pub type_badge: String,
    pub brand: String,
    /// Anchor whose `href` is the detail-page reference.
    pub link: String,
}

impl Default for SiteProfile {
    fn default() -> Self {
        Self {
            origin: "https://www.continente.pt".to_string(),
            search_path: "/on/demandware.store/Sites-continente-Site/default/Search-UpdateGrid"
                .to_string(),
            query: QueryConfig::default(),
            page_size: 36,
            sale_location: "Continente".to_string(),
            headers: RequestHeaders::default(),
            selectors: ListingSelectors::default(),
            description_class_prefix: "ct-pdp--description".to_string(),
            disclaimer_phrase: "leia sempre o rótulo".to_string(),
            ingredients: ["vegan", "vegetal", "tofu", "seitan", "soja", "lentilha"]
                .iter()
                .map(|s| (*s).to_string())
                .collect(),
            translations: Translator::default_table(),
        }
    }
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            cgid: "bio-vegetariano-vegan-alternativas-carne-peixe".to_string(),
            pmin: "0.01".to_string(),
            srule: "FOOD-BIO".to_string(),
        }
    }
}

impl Default for RequestHeaders {
    fn default() -> Self {
        Self {
            accept: "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8"
                .to_string(),
            accept_language: "en-US,en;q=0.5".to_string(),
            referer: "https://www.continente.pt/".to_string(),
        }
    }
}

impl Default for ListingSelectors {
    fn default() -> Self {
        Self {
            product: ".product".to_string(),
            name: ".pwc-tile--description".to_string(),
            type_badge: ".ct-product-tile-badge--general img".to_string(),
            brand: ".pwc-tile--brand".to_string(),
            link: ".ct-pdp-link a".to_string(),
        }
    }
}

impl SiteProfile {
    #[must_use]
    pub fn translator(&self) -> Translator {
        Translator::new(self.translations.clone())
    }

    /// Checks the invariants the collector depends on.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Validation`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.origin.trim().is_empty() {
            return Err(ConfigError::Validation("origin must be non-empty".to_string()));
        }
        if self.page_size == 0 {
            return Err(ConfigError::Validation(
                "page_size must be greater than zero".to_string(),
            ));
        }
        let selectors = [
            ("selectors.product", &self.selectors.product),
            ("selectors.name", &self.selectors.name),
            ("selectors.type_badge", &self.selectors.type_badge),
            ("selectors.brand", &self.selectors.brand),
            ("selectors.link", &self.selectors.link),
            ("description_class_prefix", &self.description_class_prefix),
        ];
        for (field, value) in selectors {
            if value.trim().is_empty() {
                return Err(ConfigError::Validation(format!("{field} must be non-empty")));
            }
        }
        if self.ingredients.is_empty() {
            return Err(ConfigError::Validation(
                "ingredients must be non-empty".to_string(),
            ));
        }
        if self.ingredients.iter().any(|i| i.trim().is_empty()) {
            return Err(ConfigError::Validation(
                "ingredients must not contain empty entries".to_string(),
            ));
        }
        Ok(())
    }
}

/// Load and validate a site profile from a YAML file.
///
/// Fields missing from the file keep their built-in defaults.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_site_profile(path: &Path) -> Result<SiteProfile, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::SiteFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let profile: SiteProfile = serde_yaml::from_str(&content).map_err(ConfigError::SiteFileParse)?;

    profile.validate()?;

    Ok(profile)
}

#[cfg(test)]
#[path = "site_test.rs"]
mod tests;
