//! `export` command: `products.json` → `products.xlsx`.

use vegscan_core::AppConfig;

/// Runs the exporter. Failures are logged, never returned; on failure no
/// spreadsheet is written.
pub(crate) fn run_export(config: &AppConfig) {
    let input = &config.products_json_path;
    let output = &config.products_xlsx_path;

    match vegscan_export::export_products(input, output) {
        Ok(summary) => tracing::info!(
            path = %summary.output.display(),
            products = summary.products,
            sheets = ?summary.sheets,
            "Excel file created"
        ),
        Err(e) => tracing::error!(input = %input.display(), error = %e, "error creating Excel file"),
    }
}
