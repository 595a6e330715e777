use std::path::Path;

use clap::Parser;
use vegscan_core::{AppConfig, Product};

use super::*;

fn config_in(dir: &Path) -> AppConfig {
    AppConfig {
        log_level: "info".to_string(),
        site_path: None,
        products_json_path: dir.join("products.json"),
        products_xlsx_path: dir.join("products.xlsx"),
        request_timeout_secs: 5,
        user_agent: "vegscan-test/0.1".to_string(),
        page_delay_ms: 0,
        detail_delay_ms: 0,
        fetch_descriptions: false,
        max_pages: 1,
    }
}

fn product(name: &str) -> Product {
    Product {
        name: name.to_string(),
        product_type: None,
        main_ingredient: None,
        brand: None,
        sale_location: Some("Continente".to_string()),
        online_reference: String::new(),
        date_accessed: chrono::Utc::now(),
        description: None,
    }
}

#[test]
fn parses_collect_without_limit() {
    let cli = Cli::try_parse_from(["vegscan", "collect"]).expect("expected valid cli args");
    assert!(matches!(cli.command, Commands::Collect { limit: None }));
}

#[test]
fn parses_collect_with_positional_limit() {
    let cli = Cli::try_parse_from(["vegscan", "collect", "25"]).expect("expected valid cli args");
    assert!(matches!(cli.command, Commands::Collect { limit: Some(25) }));
}

#[test]
fn rejects_non_numeric_limit() {
    assert!(Cli::try_parse_from(["vegscan", "collect", "lots"]).is_err());
}

#[test]
fn parses_export() {
    let cli = Cli::try_parse_from(["vegscan", "export"]).expect("expected valid cli args");
    assert!(matches!(cli.command, Commands::Export));
}

#[test]
fn subcommand_is_required() {
    assert!(Cli::try_parse_from(["vegscan"]).is_err());
}

#[test]
fn write_products_overwrites_with_pretty_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("products.json");
    std::fs::write(&path, "old contents").unwrap();

    collect::write_products(&path, &[product("Tofu"), product("Seitan")]).unwrap();

    let written = std::fs::read_to_string(&path).unwrap();
    assert!(written.starts_with("[\n"), "expected pretty-printed array");
    let parsed: Vec<Product> = serde_json::from_str(&written).unwrap();
    assert_eq!(parsed.len(), 2);
    assert_eq!(parsed[1].name, "Seitan");
}

#[test]
fn export_with_missing_input_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(dir.path());

    export::run_export(&config);

    assert!(!config.products_xlsx_path.exists());
}

#[test]
fn collect_output_feeds_export() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(dir.path());
    collect::write_products(&config.products_json_path, &[product("Burger de Ervilha")]).unwrap();

    export::run_export(&config);

    assert!(config.products_xlsx_path.exists());
}
