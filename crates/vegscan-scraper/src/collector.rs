//! The paginated collection pipeline.
//!
//! Each page runs the same step sequence: fetch the listing fragment, extract
//! its product elements, build one [`Product`] per element (fetching the
//! detail page when descriptions are enabled), then pace before the next
//! request. Everything runs sequentially on the calling task.

use std::collections::HashSet;

use chrono::Utc;
use vegscan_core::{Product, SiteProfile, Translator};

use crate::client::SiteClient;
use crate::error::ScraperError;
use crate::extract::{ListingEntry, ListingExtractor};
use crate::ingredient::IngredientMatcher;
use crate::pace::{Pacer, Step};

/// Default page-count guard, matching the `VEGSCAN_MAX_PAGES` default.
pub const DEFAULT_MAX_PAGES: usize = 200;

/// Why pagination ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// A page returned no product elements.
    EmptyPage,
    /// A page returned fewer elements than the page size, so it was the last.
    ShortPage,
    /// The caller's record limit was reached.
    LimitReached,
    /// The page-count guard was hit before the listing ran out.
    PageLimit,
    /// A listing fetch failed; results up to that point were kept.
    Failed,
}

/// Result of one collection run. `products` is in page-then-element order.
#[derive(Debug)]
pub struct CollectOutcome {
    pub products: Vec<Product>,
    pub pages_fetched: usize,
    pub stop_reason: StopReason,
}

pub struct Collector<P> {
    client: SiteClient,
    extractor: ListingExtractor,
    ingredients: IngredientMatcher,
    translator: Translator,
    pacer: P,
    page_size: u32,
    sale_location: String,
    fetch_descriptions: bool,
    max_pages: usize,
}

impl<P: Pacer> Collector<P> {
    /// Builds a collector for `profile`. Descriptions are fetched by default.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::InvalidSelector`] or
    /// [`ScraperError::InvalidVocabulary`] if the profile cannot be compiled.
    pub fn new(profile: &SiteProfile, client: SiteClient, pacer: P) -> Result<Self, ScraperError> {
        Ok(Self {
            client,
            extractor: ListingExtractor::new(profile)?,
            ingredients: IngredientMatcher::new(&profile.ingredients)?,
            translator: profile.translator(),
            pacer,
            page_size: profile.page_size.max(1),
            sale_location: profile.sale_location.clone(),
            fetch_descriptions: true,
            max_pages: DEFAULT_MAX_PAGES,
        })
    }

    #[must_use]
    pub fn with_descriptions(mut self, enabled: bool) -> Self {
        self.fetch_descriptions = enabled;
        self
    }

    #[must_use]
    pub fn with_max_pages(mut self, max_pages: usize) -> Self {
        self.max_pages = max_pages.max(1);
        self
    }

    /// Collects products page by page until the listing runs out, `limit`
    /// records have been gathered, or a listing request fails.
    ///
    /// Listing failures are logged and end the run; whatever was collected
    /// before the failure is still returned. Detail-page failures only clear
    /// that record's description.
    pub async fn collect(&self, limit: Option<usize>) -> CollectOutcome {
        let mut products: Vec<Product> = Vec::new();
        let mut pages_fetched = 0usize;
        let mut start = 0u32;

        if limit == Some(0) {
            return CollectOutcome {
                products,
                pages_fetched,
                stop_reason: StopReason::LimitReached,
            };
        }

        let stop_reason = 'pages: loop {
            if pages_fetched >= self.max_pages {
                tracing::warn!(
                    max_pages = self.max_pages,
                    collected = products.len(),
                    "page limit reached before the listing ran out; stopping"
                );
                break StopReason::PageLimit;
            }

            if pages_fetched > 0 {
                self.pacer.pause(Step::ListingPage).await;
            }

            let entries = match self.fetch_entries(start).await {
                Ok(entries) => entries,
                Err(e) => {
                    tracing::error!(
                        start,
                        collected = products.len(),
                        error = %e,
                        "error fetching or parsing listing page; stopping pagination"
                    );
                    break StopReason::Failed;
                }
            };
            pages_fetched += 1;

            if entries.is_empty() {
                tracing::debug!(start, "listing page has no products; done");
                break StopReason::EmptyPage;
            }

            let page_len = entries.len();
            tracing::info!(start, page_len, "listing page fetched");

            for entry in entries {
                let product = self.build_product(entry).await;
                products.push(product);
                if limit.is_some_and(|l| products.len() >= l) {
                    break 'pages StopReason::LimitReached;
                }
            }

            if page_len < self.page_size as usize {
                break StopReason::ShortPage;
            }
            start = start.saturating_add(self.page_size);
        };

        let duplicates = count_duplicate_references(&products);
        if duplicates > 0 {
            tracing::warn!(
                duplicates,
                "products with a repeated online reference were kept as-is"
            );
        }
        tracing::info!(
            collected = products.len(),
            pages_fetched,
            ?stop_reason,
            "collection finished"
        );

        CollectOutcome {
            products,
            pages_fetched,
            stop_reason,
        }
    }

    async fn fetch_entries(&self, start: u32) -> Result<Vec<ListingEntry>, ScraperError> {
        let body = self.client.fetch_listing_page(start, self.page_size).await?;
        Ok(self.extractor.parse_listing(&body))
    }

    async fn build_product(&self, entry: ListingEntry) -> Product {
        let description = if self.fetch_descriptions {
            self.fetch_description(&entry.reference).await
        } else {
            None
        };

        let product_type = entry.raw_type.as_deref().map(|t| self.translator.translate(t));
        let main_ingredient = self
            .ingredients
            .find(&entry.name)
            .map(|i| self.translator.translate(&i));

        Product {
            name: entry.name,
            product_type,
            main_ingredient,
            brand: entry.brand,
            sale_location: Some(self.sale_location.clone()),
            online_reference: entry.reference,
            date_accessed: Utc::now(),
            description,
        }
    }

    /// Fetches and extracts one detail-page description, then paces.
    ///
    /// Elements without a reference are skipped without a request.
    async fn fetch_description(&self, reference: &str) -> Option<String> {
        if reference.trim().is_empty() {
            return None;
        }

        let description = match self.client.fetch_detail_page(reference).await {
            Ok(page) => self.extractor.parse_description(&page),
            Err(e) => {
                tracing::warn!(reference, error = %e, "error fetching product description");
                None
            }
        };
        self.pacer.pause(Step::DetailPage).await;
        description
    }
}

fn count_duplicate_references(products: &[Product]) -> usize {
    let mut seen = HashSet::new();
    products
        .iter()
        .filter(|p| p.has_reference())
        .filter(|p| !seen.insert(p.online_reference.as_str()))
        .count()
}
