use std::path::PathBuf;

/// Runtime settings for both pipelines, resolved once at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub log_level: String,
    /// Optional YAML override for the built-in site profile.
    pub site_path: Option<PathBuf>,
    pub products_json_path: PathBuf,
    pub products_xlsx_path: PathBuf,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    /// Pause between consecutive listing-page requests.
    pub page_delay_ms: u64,
    /// Pause after every detail-page request.
    pub detail_delay_ms: u64,
    pub fetch_descriptions: bool,
    /// Hard stop for pagination so a site that never returns an empty page
    /// cannot keep the collector running forever.
    pub max_pages: usize,
}
