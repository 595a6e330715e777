//! Markup extraction for listing fragments and detail pages.
//!
//! Parsing is synchronous and returns owned data: `scraper::Html` is not
//! `Send`, so no document may live across an `.await` in the collector.

use scraper::{ElementRef, Html, Selector};
use vegscan_core::SiteProfile;

use crate::error::ScraperError;

/// Raw fields read from one product element, before translation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingEntry {
    pub name: String,
    /// Untranslated `title` attribute of the category badge image.
    pub raw_type: Option<String>,
    pub brand: Option<String>,
    /// `href` of the detail link; empty when the element has none.
    pub reference: String,
}

/// Selectors compiled once per run from a [`SiteProfile`].
pub struct ListingExtractor {
    product: Selector,
    name: Selector,
    type_badge: Selector,
    brand: Selector,
    link: Selector,
    description: Selector,
    disclaimer_phrase: String,
}

impl ListingExtractor {
    /// # Errors
    ///
    /// Returns [`ScraperError::InvalidSelector`] if any configured selector
    /// does not parse.
    pub fn new(profile: &SiteProfile) -> Result<Self, ScraperError> {
        let selectors = &profile.selectors;
        let description = format!(
            "[class^=\"{}\"]",
            profile.description_class_prefix.replace('"', "\\\"")
        );
        Ok(Self {
            product: compile(&selectors.product)?,
            name: compile(&selectors.name)?,
            type_badge: compile(&selectors.type_badge)?,
            brand: compile(&selectors.brand)?,
            link: compile(&selectors.link)?,
            description: compile(&description)?,
            disclaimer_phrase: profile.disclaimer_phrase.trim().to_lowercase(),
        })
    }

    /// Extracts every product element from a listing fragment, in document order.
    ///
    /// An empty result means the listing has been exhausted.
    #[must_use]
    pub fn parse_listing(&self, fragment: &str) -> Vec<ListingEntry> {
        let document = Html::parse_fragment(fragment);
        document
            .select(&self.product)
            .map(|element| self.parse_entry(element))
            .collect()
    }

    fn parse_entry(&self, element: ElementRef<'_>) -> ListingEntry {
        let name = element
            .select(&self.name)
            .next()
            .map(element_text)
            .unwrap_or_default();

        let raw_type = element
            .select(&self.type_badge)
            .next()
            .and_then(|e| e.value().attr("title"))
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_owned);

        let brand = element
            .select(&self.brand)
            .next()
            .map(element_text)
            .filter(|b| !b.is_empty());

        let reference = element
            .select(&self.link)
            .next()
            .and_then(|e| e.value().attr("href"))
            .map(|h| h.trim().to_owned())
            .unwrap_or_default();

        ListingEntry {
            name,
            raw_type,
            brand,
            reference,
        }
    }

    /// Joins the text of every description block on a detail page.
    ///
    /// Blocks mentioning the disclaimer phrase (case-insensitive) are skipped.
    /// Returns `None` if nothing is left.
    #[must_use]
    pub fn parse_description(&self, page: &str) -> Option<String> {
        let document = Html::parse_document(page);
        let blocks: Vec<String> = document
            .select(&self.description)
            .map(element_text)
            .filter(|text| !text.is_empty())
            .filter(|text| {
                self.disclaimer_phrase.is_empty()
                    || !text.to_lowercase().contains(&self.disclaimer_phrase)
            })
            .collect();

        if blocks.is_empty() {
            None
        } else {
            Some(blocks.join("\n"))
        }
    }
}

fn compile(selector: &str) -> Result<Selector, ScraperError> {
    Selector::parse(selector).map_err(|e| ScraperError::InvalidSelector {
        selector: selector.to_owned(),
        reason: e.to_string(),
    })
}

/// Concatenated descendant text, trimmed.
fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_owned()
}
