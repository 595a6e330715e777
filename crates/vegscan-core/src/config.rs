use crate::app_config::AppConfig;
use crate::ConfigError;

pub(crate) const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but cannot be parsed.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but cannot be parsed.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the process environment so tests can drive it with a plain
/// `HashMap` instead of `set_var`/`remove_var`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<usize>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let parse_flag = |var: &str, default: &str| -> Result<bool, ConfigError> {
        parse_bool(&or_default(var, default)).ok_or_else(|| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: "expected one of true/false/1/0/yes/no".to_string(),
        })
    };

    let log_level = or_default("VEGSCAN_LOG_LEVEL", "info");
    let site_path = lookup("VEGSCAN_SITE_PATH")
        .ok()
        .filter(|p| !p.trim().is_empty())
        .map(PathBuf::from);
    let products_json_path =
        PathBuf::from(or_default("VEGSCAN_PRODUCTS_JSON", "./products.json"));
    let products_xlsx_path = PathBuf::from(or_default("VEGSCAN_PRODUCTS_XLSX", "products.xlsx"));

    let request_timeout_secs = parse_u64("VEGSCAN_REQUEST_TIMEOUT_SECS", "30")?;
    let user_agent = or_default("VEGSCAN_USER_AGENT", DEFAULT_USER_AGENT);
    let page_delay_ms = parse_u64("VEGSCAN_PAGE_DELAY_MS", "1000")?;
    let detail_delay_ms = parse_u64("VEGSCAN_DETAIL_DELAY_MS", "1000")?;
    let fetch_descriptions = parse_flag("VEGSCAN_FETCH_DESCRIPTIONS", "true")?;
    let max_pages = parse_usize("VEGSCAN_MAX_PAGES", "200")?;
    if max_pages == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "VEGSCAN_MAX_PAGES".to_string(),
            reason: "must be at least 1".to_string(),
        });
    }

    Ok(AppConfig {
        log_level,
        site_path,
        products_json_path,
        products_xlsx_path,
        request_timeout_secs,
        user_agent,
        page_delay_ms,
        detail_delay_ms,
        fetch_descriptions,
        max_pages,
    })
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
