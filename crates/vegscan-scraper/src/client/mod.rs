//! HTTP client for the retailer's listing grid and product detail pages.

mod origin;

use std::time::Duration;

use reqwest::Client;
use vegscan_core::{QueryConfig, RequestHeaders, SiteProfile};

use crate::error::ScraperError;

pub use origin::extract_origin;
#[cfg(test)]
use origin::resolve_reference;

/// HTTP client for one retailer site.
///
/// Every request carries the same browser-like header set. Non-2xx responses
/// surface as [`ScraperError::UnexpectedStatus`]; nothing is retried.
pub struct SiteClient {
    client: Client,
    origin: reqwest::Url,
    search_path: String,
    query: QueryConfig,
    headers: RequestHeaders,
}

impl SiteClient {
    /// Creates a `SiteClient` for `profile` with the configured timeout and
    /// `User-Agent`.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::InvalidUrl`] if the profile origin is not an
    /// absolute URL, or [`ScraperError::Http`] if the underlying
    /// `reqwest::Client` cannot be constructed.
    pub fn new(
        profile: &SiteProfile,
        timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, ScraperError> {
        let origin = extract_origin(&profile.origin)?;
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;
        Ok(Self {
            client,
            origin,
            search_path: profile.search_path.clone(),
            query: profile.query.clone(),
            headers: profile.headers.clone(),
        })
    }

    /// Fetches the raw markup fragment for the listing page starting at
    /// offset `start`.
    ///
    /// # Errors
    ///
    /// - [`ScraperError::UnexpectedStatus`] for any non-2xx status.
    /// - [`ScraperError::Http`] on network or TLS failure.
    pub async fn fetch_listing_page(&self, start: u32, size: u32) -> Result<String, ScraperError> {
        let url = self.listing_url(start, size)?;
        tracing::debug!(%url, start, size, "fetching listing page");
        self.get_text(url).await
    }

    /// Fetches a product detail page. `reference` may be site-relative.
    ///
    /// # Errors
    ///
    /// - [`ScraperError::InvalidUrl`] if `reference` is empty or cannot be joined.
    /// - [`ScraperError::UnexpectedStatus`] for any non-2xx status.
    /// - [`ScraperError::Http`] on network or TLS failure.
    pub async fn fetch_detail_page(&self, reference: &str) -> Result<String, ScraperError> {
        let url = self.detail_url(reference)?;
        tracing::debug!(%url, "fetching detail page");
        self.get_text(url).await
    }

    /// Absolute detail-page URL for `reference`.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::InvalidUrl`] if `reference` is empty or cannot
    /// be joined to the origin.
    pub fn detail_url(&self, reference: &str) -> Result<String, ScraperError> {
        origin::resolve_reference(&self.origin, reference)
    }

    /// Builds the listing-grid URL for one page.
    fn listing_url(&self, start: u32, size: u32) -> Result<String, ScraperError> {
        let mut url = self
            .origin
            .join(&self.search_path)
            .map_err(|e| ScraperError::InvalidUrl {
                url: self.search_path.clone(),
                reason: e.to_string(),
            })?;

        url.query_pairs_mut()
            .append_pair("cgid", &self.query.cgid)
            .append_pair("pmin", &self.query.pmin)
            .append_pair("srule", &self.query.srule)
            .append_pair("start", &start.to_string())
            .append_pair("sz", &size.to_string());

        Ok(url.to_string())
    }

    async fn get_text(&self, url: String) -> Result<String, ScraperError> {
        let response = self
            .client
            .get(&url)
            .header(reqwest::header::ACCEPT, &self.headers.accept)
            .header(reqwest::header::ACCEPT_LANGUAGE, &self.headers.accept_language)
            .header(reqwest::header::REFERER, &self.headers.referer)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ScraperError::UnexpectedStatus {
                status: status.as_u16(),
                url,
            });
        }

        Ok(response.text().await?)
    }
}

#[cfg(test)]
#[path = "../client_test.rs"]
mod tests;
