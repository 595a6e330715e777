//! Origin and detail-URL helpers for the site client.

use crate::error::ScraperError;

/// Extracts the scheme+host origin from a configured site URL.
///
/// Given `"https://www.continente.pt/some/path"`, returns
/// `"https://www.continente.pt"`.
///
/// # Errors
///
/// Returns [`ScraperError::InvalidUrl`] if `site_url` is not an absolute URL.
pub fn extract_origin(site_url: &str) -> Result<reqwest::Url, ScraperError> {
    let parsed = reqwest::Url::parse(site_url).map_err(|e| ScraperError::InvalidUrl {
        url: site_url.to_owned(),
        reason: e.to_string(),
    })?;
    if parsed.cannot_be_a_base() {
        return Err(ScraperError::InvalidUrl {
            url: site_url.to_owned(),
            reason: "not usable as a base URL".to_owned(),
        });
    }
    let origin = parsed.origin().ascii_serialization();
    reqwest::Url::parse(&origin).map_err(|e| ScraperError::InvalidUrl {
        url: site_url.to_owned(),
        reason: e.to_string(),
    })
}

/// Resolves a detail-page reference against the site origin.
///
/// Absolute references (`http://…`, `https://…`) are returned unchanged;
/// anything else is joined to `origin`.
pub(super) fn resolve_reference(
    origin: &reqwest::Url,
    reference: &str,
) -> Result<String, ScraperError> {
    let reference = reference.trim();
    if reference.is_empty() {
        return Err(ScraperError::InvalidUrl {
            url: String::new(),
            reason: "empty detail-page reference".to_owned(),
        });
    }
    origin
        .join(reference)
        .map(String::from)
        .map_err(|e| ScraperError::InvalidUrl {
            url: reference.to_owned(),
            reason: e.to_string(),
        })
}
