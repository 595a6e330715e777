//! `collect` command: listing grid → `products.json`.
//!
//! Listing and detail failures are handled inside the collector; whatever it
//! returns is written out. Only setup problems (bad site profile, client
//! construction) are returned as errors.

use std::path::Path;

use anyhow::Context;
use vegscan_core::{load_site_profile, AppConfig, Product, SiteProfile};
use vegscan_scraper::{Collector, FixedDelay, SiteClient};

pub(crate) async fn run_collect(config: &AppConfig, limit: Option<usize>) -> anyhow::Result<()> {
    let profile = load_profile(config)?;
    let client = SiteClient::new(&profile, config.request_timeout_secs, &config.user_agent)
        .map_err(|e| anyhow::anyhow!("failed to build site client: {e}"))?;
    let pacer = FixedDelay::from_millis(config.page_delay_ms, config.detail_delay_ms);
    let collector = Collector::new(&profile, client, pacer)
        .context("failed to prepare collector from site profile")?
        .with_descriptions(config.fetch_descriptions)
        .with_max_pages(config.max_pages);

    tracing::info!(
        origin = %profile.origin,
        limit = ?limit,
        descriptions = config.fetch_descriptions,
        "starting collection"
    );
    let outcome = collector.collect(limit).await;

    let path = &config.products_json_path;
    match write_products(path, &outcome.products) {
        Ok(()) => tracing::info!(
            path = %path.display(),
            count = outcome.products.len(),
            "scraped data saved"
        ),
        Err(e) => tracing::error!(path = %path.display(), error = ?e, "error saving products"),
    }

    Ok(())
}

fn load_profile(config: &AppConfig) -> anyhow::Result<SiteProfile> {
    match &config.site_path {
        Some(path) => load_site_profile(path)
            .with_context(|| format!("failed to load site profile {}", path.display())),
        None => Ok(SiteProfile::default()),
    }
}

/// Writes `products` as a pretty-printed JSON array, replacing any existing file.
pub(crate) fn write_products(path: &Path, products: &[Product]) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(products).context("failed to serialize products")?;
    std::fs::write(path, json).with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}
