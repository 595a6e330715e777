use std::collections::HashMap;
use std::env::VarError;
use std::path::Path;

use super::*;

fn lookup_from_map<'a>(
    map: &'a HashMap<&'a str, &'a str>,
) -> impl Fn(&str) -> Result<String, VarError> + 'a {
    move |key| {
        map.get(key)
            .map(|v| (*v).to_string())
            .ok_or(VarError::NotPresent)
    }
}

#[test]
fn build_app_config_succeeds_with_empty_env() {
    let map: HashMap<&str, &str> = HashMap::new();
    let result = build_app_config(lookup_from_map(&map));
    assert!(result.is_ok(), "expected Ok, got: {result:?}");
    let cfg = result.unwrap();
    assert_eq!(cfg.log_level, "info");
    assert!(cfg.site_path.is_none());
    assert_eq!(cfg.products_json_path, Path::new("./products.json"));
    assert_eq!(cfg.products_xlsx_path, Path::new("products.xlsx"));
    assert_eq!(cfg.request_timeout_secs, 30);
    assert_eq!(cfg.user_agent, DEFAULT_USER_AGENT);
    assert_eq!(cfg.page_delay_ms, 1000);
    assert_eq!(cfg.detail_delay_ms, 1000);
    assert!(cfg.fetch_descriptions);
    assert_eq!(cfg.max_pages, 200);
}

#[test]
fn site_path_override() {
    let mut map = HashMap::new();
    map.insert("VEGSCAN_SITE_PATH", "config/site.yaml");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.site_path.as_deref(), Some(Path::new("config/site.yaml")));
}

#[test]
fn blank_site_path_is_treated_as_unset() {
    let mut map = HashMap::new();
    map.insert("VEGSCAN_SITE_PATH", "   ");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert!(cfg.site_path.is_none());
}

#[test]
fn output_path_overrides() {
    let mut map = HashMap::new();
    map.insert("VEGSCAN_PRODUCTS_JSON", "/tmp/out.json");
    map.insert("VEGSCAN_PRODUCTS_XLSX", "/tmp/out.xlsx");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.products_json_path, Path::new("/tmp/out.json"));
    assert_eq!(cfg.products_xlsx_path, Path::new("/tmp/out.xlsx"));
}

#[test]
fn delay_overrides() {
    let mut map = HashMap::new();
    map.insert("VEGSCAN_PAGE_DELAY_MS", "0");
    map.insert("VEGSCAN_DETAIL_DELAY_MS", "2500");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.page_delay_ms, 0);
    assert_eq!(cfg.detail_delay_ms, 2500);
}

#[test]
fn invalid_detail_delay_is_rejected() {
    let mut map = HashMap::new();
    map.insert("VEGSCAN_DETAIL_DELAY_MS", "soon");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "VEGSCAN_DETAIL_DELAY_MS"),
        "expected InvalidEnvVar(VEGSCAN_DETAIL_DELAY_MS), got: {result:?}"
    );
}

#[test]
fn invalid_request_timeout_is_rejected() {
    let mut map = HashMap::new();
    map.insert("VEGSCAN_REQUEST_TIMEOUT_SECS", "-1");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "VEGSCAN_REQUEST_TIMEOUT_SECS"),
        "expected InvalidEnvVar(VEGSCAN_REQUEST_TIMEOUT_SECS), got: {result:?}"
    );
}

#[test]
fn fetch_descriptions_accepts_common_spellings() {
    for (raw, expected) in [("false", false), ("0", false), ("NO", false), ("yes", true)] {
        let mut map = HashMap::new();
        map.insert("VEGSCAN_FETCH_DESCRIPTIONS", raw);
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.fetch_descriptions, expected, "input {raw:?}");
    }
}

#[test]
fn fetch_descriptions_rejects_garbage() {
    let mut map = HashMap::new();
    map.insert("VEGSCAN_FETCH_DESCRIPTIONS", "maybe");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "VEGSCAN_FETCH_DESCRIPTIONS"),
        "expected InvalidEnvVar(VEGSCAN_FETCH_DESCRIPTIONS), got: {result:?}"
    );
}

#[test]
fn zero_max_pages_is_rejected() {
    let mut map = HashMap::new();
    map.insert("VEGSCAN_MAX_PAGES", "0");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "VEGSCAN_MAX_PAGES"),
        "expected InvalidEnvVar(VEGSCAN_MAX_PAGES), got: {result:?}"
    );
}

#[test]
fn user_agent_override() {
    let mut map = HashMap::new();
    map.insert("VEGSCAN_USER_AGENT", "custom-agent/2.0");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.user_agent, "custom-agent/2.0");
}
