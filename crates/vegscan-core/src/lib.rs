pub mod app_config;
pub mod config;
pub mod products;
pub mod site;
pub mod translate;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env};
pub use products::Product;
pub use site::{load_site_profile, ListingSelectors, QueryConfig, RequestHeaders, SiteProfile};
pub use translate::Translator;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read site profile {path}: {source}")]
    SiteFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse site profile: {0}")]
    SiteFileParse(#[source] serde_yaml::Error),

    #[error("site profile validation failed: {0}")]
    Validation(String),
}
